//! Window Size Entity
//!
//! Terminal window geometry as reported by the terminal driver.
//! Based on WindowSize.c

/// Terminal window dimensions.
///
/// Matches the kernel's `winsize` layout: four unsigned 16-bit fields in
/// row, column, pixel-width, pixel-height order. The managed caller copies
/// this struct by value across the call boundary, so the layout is fixed
/// with `#[repr(C)]`.
///
/// The all-zero value is the defined sentinel for a failed query.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WinSize {
    /// Character rows
    pub row: u16,
    /// Character columns
    pub col: u16,
    /// Width in pixels (zero when the driver does not track pixels)
    pub x_pixel: u16,
    /// Height in pixels (zero when the driver does not track pixels)
    pub y_pixel: u16,
}

impl WinSize {
    /// Create a window size from explicit dimensions
    pub const fn new(row: u16, col: u16, x_pixel: u16, y_pixel: u16) -> Self {
        Self {
            row,
            col,
            x_pixel,
            y_pixel,
        }
    }

    /// The all-zero failure sentinel
    pub const fn zeroed() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Clear all four fields in place
    pub fn clear(&mut self) {
        *self = Self::zeroed();
    }

    /// Check whether every field is zero
    pub const fn is_zeroed(&self) -> bool {
        self.row == 0 && self.col == 0 && self.x_pixel == 0 && self.y_pixel == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_kernel_winsize() {
        // Must stay byte-compatible with struct winsize: four u16 fields
        assert_eq!(std::mem::size_of::<WinSize>(), 8);
        assert_eq!(std::mem::align_of::<WinSize>(), 2);
    }

    #[test]
    fn test_zeroed_sentinel() {
        let mut size = WinSize::new(24, 80, 640, 480);
        assert!(!size.is_zeroed());

        size.clear();
        assert!(size.is_zeroed());
        assert_eq!(size, WinSize::zeroed());
    }

    #[test]
    fn test_partially_zero_is_not_the_sentinel() {
        assert!(!WinSize::new(0, 80, 0, 0).is_zeroed());
        assert!(!WinSize::new(24, 0, 0, 0).is_zeroed());
        assert!(!WinSize::new(0, 0, 0, 480).is_zeroed());
    }

    #[test]
    fn test_default_is_zeroed() {
        assert!(WinSize::default().is_zeroed());
    }
}
