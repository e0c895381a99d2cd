// Scaling transform between window pixels and logical screen pixels
//
// The logical screen is drawn at the largest integer scale that fits the
// surface (at least 1x) and centered, which is how pixels places its buffer.
// Pointer events go window -> logical; pointer warps go logical -> window.

/// Integer-scale, centered placement of a logical buffer on a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingTransform {
    logical_width: u32,
    logical_height: u32,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl ScalingTransform {
    /// Compute the placement of a `logical` sized buffer on a `surface`
    pub fn new(logical: (u32, u32), surface: (u32, u32)) -> Self {
        let (lw, lh) = (logical.0.max(1), logical.1.max(1));
        let (sw, sh) = (f64::from(surface.0), f64::from(surface.1));

        let scale = (sw / f64::from(lw))
            .min(sh / f64::from(lh))
            .floor()
            .max(1.0);

        Self {
            logical_width: lw,
            logical_height: lh,
            scale,
            offset_x: ((sw - f64::from(lw) * scale) / 2.0).floor(),
            offset_y: ((sh - f64::from(lh) * scale) / 2.0).floor(),
        }
    }

    /// Current integer scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a window position to the logical pixel under it
    ///
    /// Positions outside the drawn area are clamped to the nearest edge.
    pub fn to_logical(&self, x: f64, y: f64) -> (u16, u16) {
        let lx = ((x - self.offset_x) / self.scale).floor();
        let ly = ((y - self.offset_y) / self.scale).floor();

        (
            lx.clamp(0.0, f64::from(self.logical_width - 1)) as u16,
            ly.clamp(0.0, f64::from(self.logical_height - 1)) as u16,
        )
    }

    /// Map a logical pixel to the window position of its top-left corner
    ///
    /// `to_logical` of the result yields the same pixel back.
    pub fn to_window(&self, x: u16, y: u16) -> (f64, f64) {
        (
            self.offset_x + f64::from(x) * self.scale,
            self.offset_y + f64::from(y) * self.scale,
        )
    }
}
