/// Square grid of QR modules, packed one bit per module (1 = dark)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    width: usize,
    bits: Vec<u8>,
}

impl ModuleGrid {
    /// All-light grid with `width` modules per side
    fn new(width: usize) -> Self {
        Self {
            width,
            bits: vec![0; (width * width).div_ceil(8)],
        }
    }

    /// Build a grid from row-major module colours (`true` = dark).
    ///
    /// Returns `None` unless `modules.len()` is a perfect square.
    pub fn from_modules<I>(modules: I) -> Option<Self>
    where
        I: IntoIterator<Item = bool>,
        I::IntoIter: ExactSizeIterator,
    {
        let modules = modules.into_iter();
        let count = modules.len();
        let width = (count as f64).sqrt().round() as usize;
        if width * width != count {
            return None;
        }
        let mut grid = Self::new(width);
        for (index, dark) in modules.enumerate() {
            if dark {
                grid.bits[index / 8] |= 1 << (index % 8);
            }
        }
        Some(grid)
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    /// Is the module at column `x`, row `y` dark? Out of range reads light.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        let index = y * self.width + x;
        (self.bits[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_modules() {
        let grid = ModuleGrid::from_modules([true, false, false, true]).unwrap();
        assert_eq!(grid.width(), 2);
        assert!(grid.is_dark(0, 0));
        assert!(!grid.is_dark(1, 0));
        assert!(grid.is_dark(1, 1));
        assert_eq!(grid.dark_count(), 2);
    }

    #[test]
    fn test_rejects_non_square() {
        assert!(ModuleGrid::from_modules([true, false, true]).is_none());
    }

    #[test]
    fn test_out_of_bounds_reads_light() {
        let grid = ModuleGrid::from_modules(vec![true; 21 * 21]).unwrap();
        assert!(grid.is_dark(20, 20));
        assert!(!grid.is_dark(21, 0));
        assert!(!grid.is_dark(0, 30));
        assert_eq!(grid.dark_count(), 21 * 21);
    }
}
