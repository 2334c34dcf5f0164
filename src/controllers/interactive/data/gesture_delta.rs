/// The net effect of one finished pinch/rotate/pan gesture, as committed by
/// the shell. Applied as scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureDelta {
    /// Zoom factor; the visible extent is divided by it.
    pub scale: f64,
    pub rotation_degrees: f64,
    /// Pan in pixels along the screen axes.
    pub dx: f64,
    pub dy: f64,
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_degrees: 0.0,
            dx: 0.0,
            dy: 0.0,
        }
    }
}

impl GestureDelta {
    #[must_use]
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn zoom(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation_degrees: degrees,
            ..Self::default()
        }
    }
}
