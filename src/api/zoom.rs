use serde::{Deserialize, Serialize};

/// Axis constraint applied to pan and zoom gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    X,
    Y,
    #[default]
    Xy,
}

impl ZoomMode {
    #[must_use]
    pub fn includes_x(self) -> bool {
        matches!(self, Self::X | Self::Xy)
    }

    #[must_use]
    pub fn includes_y(self) -> bool {
        matches!(self, Self::Y | Self::Xy)
    }
}

/// Single `{ enabled }` gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    #[must_use]
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

/// Zoom gesture gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ZoomGestures {
    /// Mouse-wheel zoom. Also gates the chart-area border.
    pub wheel: Toggle,
    pub pinch: Toggle,
    pub mode: ZoomMode,
}

/// Pan/zoom options in the zoom-plugin option shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub pan: Toggle,
    pub zoom: ZoomGestures,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            pan: Toggle::enabled(),
            zoom: ZoomGestures::default(),
        }
    }
}

impl ZoomConfig {
    #[must_use]
    pub fn with_pan_enabled(mut self, enabled: bool) -> Self {
        self.pan.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_wheel_enabled(mut self, enabled: bool) -> Self {
        self.zoom.wheel.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_pinch_enabled(mut self, enabled: bool) -> Self {
        self.zoom.pinch.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ZoomMode) -> Self {
        self.zoom.mode = mode;
        self
    }

    #[must_use]
    pub fn wheel_enabled(self) -> bool {
        self.zoom.wheel.enabled
    }

    #[must_use]
    pub fn pinch_enabled(self) -> bool {
        self.zoom.pinch.enabled
    }

    #[must_use]
    pub fn any_zoom_enabled(self) -> bool {
        self.zoom.wheel.enabled || self.zoom.pinch.enabled
    }
}
