use crate::{Caption, DrawHost, FieldHandle};
use egui::{pos2, vec2, Color32, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum Drawn {
    Label(Rect, String),
    ButtonLabel(Rect, String, Color32),
    Toggle(Rect, String, Color32),
    PropertyField(Rect, String),
}

impl Drawn {
    pub fn text(&self) -> &str {
        match self {
            Drawn::Label(_, t)
            | Drawn::ButtonLabel(_, t, _)
            | Drawn::Toggle(_, t, _)
            | Drawn::PropertyField(_, t) => t,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            Drawn::Label(r, _)
            | Drawn::ButtonLabel(r, _, _)
            | Drawn::Toggle(r, _, _)
            | Drawn::PropertyField(r, _) => *r,
        }
    }
}

/// Host double that records every primitive and presses the toggle whose text matches `click`.
pub struct RecordingHost {
    pub drawn: Vec<Drawn>,
    pub tooltips: Vec<String>,
    pub click: Option<String>,
    pub line_height: f32,
    pub indent: f32,
    pub next_rect: Rect,
    pub allocated: Vec<bool>,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            drawn: vec![],
            tooltips: vec![],
            click: None,
            line_height: 18.0,
            indent: 15.0,
            next_rect: Rect::from_min_size(pos2(10.0, 20.0), vec2(300.0, 18.0)),
            allocated: vec![],
        }
    }
}

impl RecordingHost {
    pub fn clicking(text: &str) -> Self {
        Self {
            click: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn toggles(&self) -> Vec<&str> {
        self.drawn
            .iter()
            .filter(|d| matches!(d, Drawn::Toggle(..)))
            .map(Drawn::text)
            .collect()
    }

    pub fn button_labels(&self) -> Vec<&str> {
        self.drawn
            .iter()
            .filter(|d| matches!(d, Drawn::ButtonLabel(..)))
            .map(Drawn::text)
            .collect()
    }

    fn note_tooltip(&mut self, caption: &Caption) {
        if let Some(t) = caption.tooltip() {
            self.tooltips.push(t.to_string());
        }
    }
}

impl DrawHost for RecordingHost {
    fn single_line_height(&self) -> f32 {
        self.line_height
    }

    fn indent_width(&self) -> f32 {
        self.indent
    }

    fn label(&mut self, rect: Rect, caption: &Caption) {
        self.note_tooltip(caption);
        self.drawn.push(Drawn::Label(rect, caption.text().to_string()));
    }

    fn button_label(&mut self, rect: Rect, caption: &Caption, tint: Color32) {
        self.note_tooltip(caption);
        self.drawn
            .push(Drawn::ButtonLabel(rect, caption.text().to_string(), tint));
    }

    fn toggle(&mut self, rect: Rect, caption: &Caption, tint: Color32) -> bool {
        self.note_tooltip(caption);
        self.drawn
            .push(Drawn::Toggle(rect, caption.text().to_string(), tint));
        self.click.as_deref() == Some(caption.text())
    }

    fn allocate_control_rect(&mut self, has_label: bool) -> Rect {
        self.allocated.push(has_label);
        self.next_rect
    }

    fn property_field(
        &mut self,
        rect: Rect,
        _field: &mut dyn FieldHandle,
        label: &Caption,
        _label_width: f32,
    ) -> bool {
        self.drawn
            .push(Drawn::PropertyField(rect, label.text().to_string()));
        false
    }

    fn property_height(&self, field: &dyn FieldHandle, _label: &Caption) -> f32 {
        match field.kind() {
            crate::FieldKind::Text => self.line_height * 2.0,
            _ => self.line_height,
        }
    }
}
