use crate::error::CaptureError;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// A named screen region that at most one camera may be bound to
#[derive(Debug, Clone)]
pub struct ScanRegion {
    id: String,
    slot: Arc<Semaphore>,
}

/// Exclusive binding of a [`ScanRegion`], released on drop
#[derive(Debug)]
pub struct RegionPermit {
    id: String,
    _permit: OwnedSemaphorePermit,
}

impl RegionPermit {
    /// Id of the bound region
    pub fn region_id(&self) -> &str {
        &self.id
    }
}

impl ScanRegion {
    /// Free region named `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slot: Arc::new(Semaphore::new(1)),
        }
    }

    /// Region id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Wait until the region is free, then bind it
    pub async fn acquire(&self) -> Result<RegionPermit, CaptureError> {
        let permit = Arc::clone(&self.slot)
            .acquire_owned()
            .await
            .map_err(|_| CaptureError::Init(format!("region '{}' is closed", self.id)))?;
        Ok(RegionPermit {
            id: self.id.clone(),
            _permit: permit,
        })
    }

    /// True while a camera (or its pending teardown) holds the region
    pub fn is_bound(&self) -> bool {
        self.slot.available_permits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_exclusive() {
        let region = ScanRegion::new("qr-reader");
        let first = region.acquire().await.unwrap();
        assert_eq!(first.region_id(), "qr-reader");
        assert!(region.is_bound());
        drop(first);
        assert!(!region.is_bound());
        let second = region.acquire().await.unwrap();
        assert!(region.is_bound());
        drop(second);
    }

    #[tokio::test]
    async fn test_acquire_waits_for_release() {
        let region = ScanRegion::new("qr-reader");
        let held = region.acquire().await.unwrap();
        let waiter = {
            let region = region.clone();
            tokio::spawn(async move { region.acquire().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        drop(held);
        let permit = waiter.await.unwrap().unwrap();
        assert_eq!(permit.region_id(), "qr-reader");
    }
}
