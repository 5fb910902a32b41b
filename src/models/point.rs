/// Pixel position inside a camera frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    /// Column, left to right
    pub x: i32,
    /// Row, top to bottom
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by a window offset, mapping window coordinates to frame coordinates
    pub fn offset(&self, dx: usize, dy: usize) -> Self {
        Self {
            x: self.x + dx as i32,
            y: self.y + dy as i32,
        }
    }
}

impl From<rqrr::Point> for Point {
    fn from(p: rqrr::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let p = Point::new(3, 4).offset(10, 20);
        assert_eq!(p, Point::new(13, 24));
    }
}
