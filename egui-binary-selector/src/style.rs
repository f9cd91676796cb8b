use egui::{Color32, Id};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    #[error("could not read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid style json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("label width must be finite and non-negative, got {0}")]
    InvalidLabelWidth(f32),
}

/// Look of the selector shared by every draw call of a context.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorStyle {
    /// Background tint of the currently selected, display-only option
    pub selected_tint: [u8; 3],
    /// Width reserved for the leading caption of labeled fields
    pub label_width: f32,
    /// Gap between the leading caption and the buttons
    pub label_spacing: f32,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self {
            selected_tint: [153, 255, 255],
            label_width: 150.0,
            label_spacing: 2.0,
        }
    }
}

impl SelectorStyle {
    pub fn selected_tint(&self) -> Color32 {
        let [r, g, b] = self.selected_tint;
        Color32::from_rgb(r, g, b)
    }

    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let file = File::open(path.as_ref())?;
        let style: Self = serde_json::from_reader(BufReader::new(file))?;
        log::debug!("loaded selector style from {}", path.as_ref().display());
        style.validate()
    }

    fn egui_id() -> Id {
        Id::new("egui_binary_selector_style")
    }

    /// Makes this the style used by `#[derive(Inspect)]` selectors drawn with `ctx`.
    pub fn store(&self, ctx: &egui::Context) {
        ctx.data_mut(|d| d.insert_temp(Self::egui_id(), self.clone()));
    }

    /// The style stored on `ctx`, or the default one.
    pub fn from_egui(ctx: &egui::Context) -> Self {
        ctx.data(|d| d.get_temp::<Self>(Self::egui_id()))
            .unwrap_or_default()
    }

    fn validate(self) -> Result<Self, StyleError> {
        if !self.label_width.is_finite() || self.label_width < 0.0 {
            return Err(StyleError::InvalidLabelWidth(self.label_width));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let style = SelectorStyle::from_json(r#"{ "label_width": 120.0 }"#).unwrap();
        assert_eq!(style.label_width, 120.0);
        assert_eq!(style.selected_tint, [153, 255, 255]);
        assert_eq!(style.label_spacing, 2.0);
    }

    #[test]
    fn negative_label_width_is_rejected() {
        let err = SelectorStyle::from_json(r#"{ "label_width": -1.0 }"#).unwrap_err();
        assert!(matches!(err, StyleError::InvalidLabelWidth(_)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = SelectorStyle::from_json("not json").unwrap_err();
        assert!(matches!(err, StyleError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SelectorStyle::load("this/file/does/not/exist.json").unwrap_err();
        assert!(matches!(err, StyleError::Io(_)));
    }

    #[test]
    fn default_tint_is_light_cyan() {
        assert_eq!(
            SelectorStyle::default().selected_tint(),
            Color32::from_rgb(153, 255, 255)
        );
    }

    #[test]
    fn egui_context_keeps_stored_style() {
        let ctx = egui::Context::default();
        assert_eq!(SelectorStyle::from_egui(&ctx), SelectorStyle::default());

        let style = SelectorStyle {
            selected_tint: [255, 200, 0],
            label_width: 0.0,
            label_spacing: 4.0,
        };
        style.store(&ctx);
        assert_eq!(SelectorStyle::from_egui(&ctx), style);
    }
}
