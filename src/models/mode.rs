use super::ViewState;
use crate::error::StudioError;

/// Which surface is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Generator/viewer surface
    #[default]
    Home,
    /// Camera scanner surface
    Scanner,
}

/// A mode change together with the state it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Home -> Scanner, dropping the previous scan result
    OpenScanner,
    /// Scanner -> Home on explicit cancel, dropping the scan result
    Cancel,
    /// Scanner -> Home after a successful decode
    Decoded(String),
    /// Scanner -> Home because the camera could not be started
    InitFailed(String),
}

impl Transition {
    /// Mode the transition must start from
    pub fn source(&self) -> Mode {
        match self {
            Transition::OpenScanner => Mode::Home,
            Transition::Cancel | Transition::Decoded(_) | Transition::InitFailed(_) => {
                Mode::Scanner
            }
        }
    }

    /// Apply to `state` in a single mutation.
    ///
    /// Fails without touching `state` when the transition does not start from
    /// the current mode.
    pub fn apply(self, state: &mut ViewState) -> Result<(), StudioError> {
        if state.mode != self.source() {
            return Err(StudioError::InvalidTransition(format!(
                "{:?} from {:?}",
                self, state.mode
            )));
        }
        match self {
            Transition::OpenScanner => {
                state.mode = Mode::Scanner;
                state.scan_result.clear();
            }
            Transition::Cancel => {
                state.mode = Mode::Home;
                state.scan_result.clear();
            }
            Transition::Decoded(text) => {
                state.mode = Mode::Home;
                state.scan_result = text;
            }
            Transition::InitFailed(message) => {
                state.mode = Mode::Home;
                state.error = Some(message);
            }
        }
        Ok(())
    }
}
