use crate::Caption;

const DEFAULT_FALSE_TEXT: &str = "false";
const DEFAULT_TRUE_TEXT: &str = "true";

/// Raw selector arguments as written in a `#[inspect(false_text = "...", ...)]` attribute.
///
/// These are kept `const` constructible so the derive macro can emit them as constants.
/// Normalization happens when converting into a [`SelectorConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorArgs {
    pub false_text: &'static str,
    pub true_text: &'static str,
    pub false_tooltip: &'static str,
    pub true_tooltip: &'static str,
}

/// Display configuration of a binary selector: the captions of the `false` and `true` options.
///
/// Each side is either plain text or a rich label (text + tooltip). A side becomes a rich label
/// only when a non-blank tooltip was given for it. Blank option texts are replaced by `"false"`
/// and `"true"`, so neither side ever shows an empty button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorConfig {
    false_label: Caption,
    true_label: Caption,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn text_or(text: &str, default: &str) -> String {
    if is_blank(text) {
        default.to_string()
    } else {
        text.to_string()
    }
}

fn side(text: &str, tooltip: &str, default: &str) -> Caption {
    let text = text_or(text, default);
    if is_blank(tooltip) {
        Caption::PlainText(text)
    } else {
        Caption::rich(text, tooltip)
    }
}

impl SelectorConfig {
    pub fn new(false_text: &str, true_text: &str) -> Self {
        Self {
            false_label: Caption::PlainText(text_or(false_text, DEFAULT_FALSE_TEXT)),
            true_label: Caption::PlainText(text_or(true_text, DEFAULT_TRUE_TEXT)),
        }
    }

    pub fn with_tooltips(
        false_text: &str,
        true_text: &str,
        false_tooltip: &str,
        true_tooltip: &str,
    ) -> Self {
        Self {
            false_label: side(false_text, false_tooltip, DEFAULT_FALSE_TEXT),
            true_label: side(true_text, true_tooltip, DEFAULT_TRUE_TEXT),
        }
    }

    pub fn false_label(&self) -> &Caption {
        &self.false_label
    }

    pub fn true_label(&self) -> &Caption {
        &self.true_label
    }

    pub fn uses_false_content(&self) -> bool {
        self.false_label.is_rich()
    }

    pub fn uses_true_content(&self) -> bool {
        self.true_label.is_rich()
    }

    /// Plain text of the `false` option, `None` when that side is a rich label.
    pub fn false_text(&self) -> Option<&str> {
        match &self.false_label {
            Caption::PlainText(text) => Some(text),
            Caption::RichLabel { .. } => None,
        }
    }

    /// Plain text of the `true` option, `None` when that side is a rich label.
    pub fn true_text(&self) -> Option<&str> {
        match &self.true_label {
            Caption::PlainText(text) => Some(text),
            Caption::RichLabel { .. } => None,
        }
    }

    /// `(text, tooltip)` of the `false` option, `None` when that side is plain text.
    pub fn false_content(&self) -> Option<(&str, &str)> {
        match &self.false_label {
            Caption::PlainText(_) => None,
            Caption::RichLabel { text, tooltip } => Some((text, tooltip)),
        }
    }

    /// `(text, tooltip)` of the `true` option, `None` when that side is plain text.
    pub fn true_content(&self) -> Option<(&str, &str)> {
        match &self.true_label {
            Caption::PlainText(_) => None,
            Caption::RichLabel { text, tooltip } => Some((text, tooltip)),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FALSE_TEXT, DEFAULT_TRUE_TEXT)
    }
}

impl From<SelectorArgs> for SelectorConfig {
    fn from(args: SelectorArgs) -> Self {
        Self::with_tooltips(
            args.false_text,
            args.true_text,
            args.false_tooltip,
            args.true_tooltip,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn blank(n: u8, tabs: bool) -> String {
        let c = if tabs { '\t' } else { ' ' };
        std::iter::repeat(c).take((n % 8) as usize).collect()
    }

    #[test]
    fn empty_false_text_defaults() {
        let c = SelectorConfig::new("", "Yes");
        assert_eq!(c.false_text(), Some("false"));
        assert_eq!(c.true_text(), Some("Yes"));
    }

    #[test]
    fn tooltip_on_one_side_only() {
        let c = SelectorConfig::with_tooltips("Off", "On", "tip", "");
        assert!(c.uses_false_content());
        assert!(!c.uses_true_content());
        assert_eq!(c.false_text(), None);
        assert_eq!(c.false_content(), Some(("Off", "tip")));
        assert_eq!(c.true_text(), Some("On"));
        assert_eq!(c.true_content(), None);
    }

    #[test]
    fn blank_tooltips_stay_plain() {
        let c = SelectorConfig::with_tooltips("Off", "On", "  ", "\t");
        assert_eq!(c, SelectorConfig::new("Off", "On"));
    }

    #[test]
    fn rich_label_text_is_defaulted() {
        let c = SelectorConfig::with_tooltips(" ", "", "a", "b");
        assert_eq!(c.false_content(), Some(("false", "a")));
        assert_eq!(c.true_content(), Some(("true", "b")));
    }

    #[test]
    fn args_convert_like_with_tooltips() {
        let args = SelectorArgs {
            false_text: "Left",
            true_text: "",
            false_tooltip: "",
            true_tooltip: "go right",
        };
        let c = SelectorConfig::from(args);
        assert_eq!(c.false_text(), Some("Left"));
        assert_eq!(c.true_content(), Some(("true", "go right")));
    }

    quickcheck! {
        fn blank_texts_default(n: u8, m: u8, tabs: bool) -> bool {
            let c = SelectorConfig::new(&blank(n, tabs), &blank(m, !tabs));
            c.false_label().text() == "false" && c.true_label().text() == "true"
        }

        fn blank_texts_default_with_tooltips(n: u8, tip: String) -> bool {
            let c = SelectorConfig::with_tooltips(&blank(n, false), &blank(n, true), &tip, &tip);
            c.false_label().text() == "false" && c.true_label().text() == "true"
        }

        fn tooltip_decides_representation(f_tip: String, t_tip: String) -> bool {
            let c = SelectorConfig::with_tooltips("Off", "On", &f_tip, &t_tip);
            let f_rich = !f_tip.trim().is_empty();
            let t_rich = !t_tip.trim().is_empty();
            c.uses_false_content() == f_rich
                && c.false_text().is_none() == f_rich
                && c.uses_true_content() == t_rich
                && c.true_text().is_none() == t_rich
        }

        fn effective_text_never_empty(f: String, t: String, f_tip: String, t_tip: String) -> bool {
            let c = SelectorConfig::with_tooltips(&f, &t, &f_tip, &t_tip);
            !c.false_label().text().trim().is_empty() && !c.true_label().text().trim().is_empty()
        }
    }
}
