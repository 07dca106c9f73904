//! Drawing-surface dimensions and device-pixel-ratio scaling.

/// Logical (CSS pixel) size of the drawing surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub w: f64,
    pub h: f64,
}

impl SurfaceSize {
    pub fn new(w: f64, h: f64) -> Self {
        SurfaceSize { w, h }
    }

    pub fn max_side(&self) -> f64 {
        self.w.max(self.h)
    }

    pub fn diagonal(&self) -> f64 {
        (self.w * self.w + self.h * self.h).sqrt()
    }

    /// Whether a center-relative offset lies strictly inside the surface.
    pub fn contains_center_offset(&self, x: f64, y: f64) -> bool {
        x < self.w / 2.0 && x > -self.w / 2.0 && y < self.h / 2.0 && y > -self.h / 2.0
    }
}

/// Surface state owned by the canvas glue: logical size plus the
/// device-pixel-ratio applied as a backing-store scale transform.
pub struct Surface {
    pub size: SurfaceSize,
    pub dpr: f64,
}

impl Surface {
    pub fn new(dpr: f64) -> Self {
        Surface {
            size: SurfaceSize::default(),
            dpr,
        }
    }

    /// Backing-store width in device pixels.
    pub fn physical_width(&self) -> u32 {
        (self.size.w * self.dpr) as u32
    }

    /// Backing-store height in device pixels.
    pub fn physical_height(&self) -> u32 {
        (self.size.h * self.dpr) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_size_scales_by_dpr() {
        let mut surface = Surface::new(2.0);
        surface.size = SurfaceSize::new(400.0, 250.0);
        assert_eq!(surface.physical_width(), 800);
        assert_eq!(surface.physical_height(), 500);
    }

    #[test]
    fn test_contains_center_offset() {
        let size = SurfaceSize::new(400.0, 200.0);
        assert!(size.contains_center_offset(0.0, 0.0));
        assert!(size.contains_center_offset(199.0, -99.0));
        assert!(!size.contains_center_offset(200.0, 0.0));
        assert!(!size.contains_center_offset(0.0, -100.0));
    }

    #[test]
    fn test_max_side_and_diagonal() {
        let size = SurfaceSize::new(300.0, 400.0);
        assert_eq!(size.max_side(), 400.0);
        assert_eq!(size.diagonal(), 500.0);
    }
}
