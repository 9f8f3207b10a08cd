use crate::viewport::ViewportState;

/// Maps content coordinates to container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn from_state(state: &ViewportState) -> Self {
        Self {
            scale: state.scale,
            translate_x: state.translate_x,
            translate_y: state.translate_y,
        }
    }

    /// `[a, b, c, d, e, f]` in SVG `matrix()` order.
    pub fn matrix(&self) -> [f64; 6] {
        [
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translate_x,
            self.translate_y,
        ]
    }

    pub fn to_svg_attribute(&self) -> String {
        format!(
            "translate({},{}) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    /// Value for a CSS `transform` property, paired with `transform-origin: 0 0`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }

    /// Container point back to content space. Undefined at scale 0.
    pub fn invert(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.translate_x) / self.scale,
            (y - self.translate_y) / self.scale,
        )
    }
}

impl From<&ViewportState> for Transform {
    fn from(state: &ViewportState) -> Self {
        Self::from_state(state)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
