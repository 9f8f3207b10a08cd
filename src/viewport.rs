use crate::transform::Transform;

pub const DEFAULT_MIN_ZOOM: f64 = 0.1;
pub const DEFAULT_MAX_ZOOM: f64 = 5.0;
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;
pub const DEFAULT_FIT_PADDING: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub zoom_step: f64,
    pub wheel_zoom_in: f64,
    pub wheel_zoom_out: f64,
    pub fit_padding: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_zoom_in: 1.1,
            wheel_zoom_out: 0.9,
            fit_padding: DEFAULT_FIT_PADDING,
        }
    }
}

impl ViewportOptions {
    // max/min rather than f64::clamp, which panics on an inverted or NaN range
    fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_zoom).min(self.max_zoom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub is_dragging: bool,
    /// Only meaningful while `is_dragging`.
    pub last_cursor_x: f64,
    pub last_cursor_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            is_dragging: false,
            last_cursor_x: 0.0,
            last_cursor_y: 0.0,
        }
    }
}

impl ViewportState {
    pub fn screen_to_content(&self, x: f64, y: f64) -> (f64, f64) {
        Transform::from_state(self).invert(x, y)
    }

    pub fn content_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        Transform::from_state(self).apply(x, y)
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.translate_x.is_finite() && self.translate_y.is_finite()
    }

    /// Only the sign of `delta_y` matters; positive zooms out.
    #[must_use]
    pub fn wheel(
        self,
        event: &WheelInput,
        options: &ViewportOptions,
        container: &Bounds,
    ) -> Self {
        let factor = if event.delta_y > 0.0 {
            options.wheel_zoom_out
        } else {
            options.wheel_zoom_in
        };
        let scale = options.clamp_scale(self.scale * factor);

        let cursor_x = event.client_x - container.x;
        let cursor_y = event.client_y - container.y;
        let (content_x, content_y) = self.screen_to_content(cursor_x, cursor_y);

        Self {
            scale,
            translate_x: cursor_x - content_x * scale,
            translate_y: cursor_y - content_y * scale,
            ..self
        }
    }

    #[must_use]
    pub fn mouse_down(self, event: &PointerInput) -> Self {
        Self {
            is_dragging: true,
            last_cursor_x: event.client_x,
            last_cursor_y: event.client_y,
            ..self
        }
    }

    /// Pan is screen-space 1:1, independent of the current scale.
    #[must_use]
    pub fn mouse_move(self, event: &PointerInput) -> Self {
        if !self.is_dragging {
            return self;
        }
        Self {
            translate_x: self.translate_x + (event.client_x - self.last_cursor_x),
            translate_y: self.translate_y + (event.client_y - self.last_cursor_y),
            last_cursor_x: event.client_x,
            last_cursor_y: event.client_y,
            ..self
        }
    }

    #[must_use]
    pub fn mouse_up(self) -> Self {
        Self {
            is_dragging: false,
            ..self
        }
    }

    /// Never scales above 1:1. Zero-sized geometry is not guarded and can
    /// produce non-finite values.
    #[must_use]
    pub fn fit_to_container(self, content: &Bounds, container: &Bounds, padding: f64) -> Self {
        let scale_x = (container.width - 2.0 * padding) / content.width;
        let scale_y = (container.height - 2.0 * padding) / content.height;
        let scale = scale_x.min(scale_y).min(1.0);

        let next = Self {
            scale,
            translate_x: (container.width - content.width * scale) / 2.0 - content.x * scale,
            translate_y: (container.height - content.height * scale) / 2.0 - content.y * scale,
            is_dragging: false,
            ..self
        };
        if next.is_finite() {
            tracing::trace!(scale, "fitted content to container");
        } else {
            tracing::warn!(?content, ?container, "fit produced a non-finite transform");
        }
        next
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Programmatic zoom. Translate is left alone, unlike [`Self::wheel`].
    #[must_use]
    pub fn zoom_in(self, options: &ViewportOptions) -> Self {
        Self {
            scale: options.clamp_scale(self.scale * options.zoom_step),
            ..self
        }
    }

    #[must_use]
    pub fn zoom_out(self, options: &ViewportOptions) -> Self {
        Self {
            scale: options.clamp_scale(self.scale / options.zoom_step),
            ..self
        }
    }

    // translate is unbounded
    #[must_use]
    pub fn constrain(self, _container: &Bounds, options: &ViewportOptions) -> Self {
        Self {
            scale: options.clamp_scale(self.scale),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    Wheel(WheelInput),
    MouseDown(PointerInput),
    MouseMove(PointerInput),
    MouseUp,
    ZoomIn,
    ZoomOut,
    Fit(Bounds),
    Reset,
}

impl ViewportState {
    #[must_use]
    pub fn apply(
        self,
        event: &ViewportEvent,
        options: &ViewportOptions,
        container: &Bounds,
    ) -> Self {
        match event {
            ViewportEvent::Wheel(wheel) => self.wheel(wheel, options, container),
            ViewportEvent::MouseDown(pointer) => self.mouse_down(pointer),
            ViewportEvent::MouseMove(pointer) => self.mouse_move(pointer),
            ViewportEvent::MouseUp => self.mouse_up(),
            ViewportEvent::ZoomIn => self.zoom_in(options),
            ViewportEvent::ZoomOut => self.zoom_out(options),
            ViewportEvent::Fit(content) => {
                self.fit_to_container(content, container, options.fit_padding)
            }
            ViewportEvent::Reset => self.reset(),
        }
    }
}

pub fn replay<'a>(
    events: impl IntoIterator<Item = &'a ViewportEvent>,
    state: ViewportState,
    options: &ViewportOptions,
    container: &Bounds,
) -> ViewportState {
    events
        .into_iter()
        .fold(state, |state, event| state.apply(event, options, container))
}
