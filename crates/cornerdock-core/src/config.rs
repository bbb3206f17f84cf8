//! Widget configuration loaded from JSON.

use std::path::Path;

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corner::{Corner, Padding};
use crate::dynamics::{SpringAnimator, SpringSpec};
use crate::gesture::PanRecognizer;
use crate::widget::DraggableWidget;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Everything needed to build a docked widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Widget size in container units.
    pub size: Size,
    /// Corner the widget starts docked to.
    pub corner: Corner,
    /// Edge insets.
    pub padding: Padding,
    /// Snap spring tuning.
    pub spring: SpringSpec,
    /// Pointer travel (px) before a press becomes a drag.
    pub drag_slop: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            size: Size::new(120.0, 240.0),
            corner: Corner::BottomLeft,
            padding: Padding::ZERO,
            spring: SpringSpec::default(),
            drag_slop: 0.0,
        }
    }
}

impl WidgetConfig {
    /// Parse from a JSON string and validate.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widget cannot simulate or lay out.
    pub fn validate(&self) -> ConfigResult<()> {
        self.spring.validate().map_err(ConfigError::Invalid)?;
        if !self.drag_slop.is_finite() || self.drag_slop < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "drag_slop must be non-negative and finite, got {}",
                self.drag_slop
            )));
        }
        Ok(())
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json(&content)?;
        log::info!("Loaded widget config from: {:?}", path);
        Ok(config)
    }

    /// Build an unattached widget with this corner and padding.
    pub fn build_widget(&self) -> DraggableWidget<SpringAnimator> {
        let mut widget =
            DraggableWidget::with_animator(self.size, SpringAnimator::with_spec(self.spring));
        widget.configure(self.corner, self.padding);
        widget
    }

    /// Build a recognizer using the configured slop.
    pub fn build_recognizer(&self) -> PanRecognizer {
        PanRecognizer::with_slop(self.drag_slop)
    }
}
