/// Text shown in one of the selector's label slots: the leading field caption,
/// the `false` option or the `true` option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Caption {
    PlainText(String),
    /// Display text with a hover tooltip
    RichLabel { text: String, tooltip: String },
}

impl Caption {
    pub fn rich(text: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self::RichLabel {
            text: text.into(),
            tooltip: tooltip.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::PlainText(text) => text,
            Self::RichLabel { text, .. } => text,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Self::PlainText(_) => None,
            Self::RichLabel { tooltip, .. } => Some(tooltip),
        }
    }

    pub fn is_rich(&self) -> bool {
        matches!(self, Self::RichLabel { .. })
    }

    /// A caption with empty text takes no room in the labeled variants.
    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

impl Default for Caption {
    fn default() -> Self {
        Self::PlainText(String::new())
    }
}

impl From<&str> for Caption {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

impl From<String> for Caption {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

impl From<&Caption> for Caption {
    fn from(caption: &Caption) -> Self {
        caption.clone()
    }
}

impl<T: Into<String>, U: Into<String>> From<(T, U)> for Caption {
    fn from((text, tooltip): (T, U)) -> Self {
        Self::rich(text, tooltip)
    }
}

#[cfg(test)]
mod tests {
    use super::Caption;

    #[test]
    fn plain_text_has_no_tooltip() {
        let c = Caption::from("Off");
        assert_eq!(c.text(), "Off");
        assert_eq!(c.tooltip(), None);
        assert!(!c.is_rich());
    }

    #[test]
    fn pair_converts_to_rich_label() {
        let c = Caption::from(("On", "enable the feature"));
        assert_eq!(c.text(), "On");
        assert_eq!(c.tooltip(), Some("enable the feature"));
        assert!(c.is_rich());
    }

    #[test]
    fn empty_rich_label_is_empty() {
        assert!(Caption::rich("", "tip").is_empty());
        assert!(Caption::default().is_empty());
    }
}
