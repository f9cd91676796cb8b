use crate::{Caption, DrawHost, FieldHandle, FieldValue};
use egui::{vec2, Button, Checkbox, Color32, DragValue, Label, Rect, Response, RichText, Sense, TextEdit, Ui};

/// [`DrawHost`] drawing into an egui [`Ui`].
pub struct EguiHost<'a> {
    ui: &'a mut Ui,
}

impl<'a> EguiHost<'a> {
    pub fn new(ui: &'a mut Ui) -> Self {
        Self { ui }
    }
}

fn with_tooltip(response: Response, caption: &Caption) -> Response {
    match caption.tooltip() {
        Some(tooltip) => response.on_hover_text(tooltip),
        None => response,
    }
}

fn button(caption: &Caption, tint: Color32) -> Button<'static> {
    if tint == Color32::WHITE {
        Button::new(caption.text().to_string())
    } else {
        // tinted backgrounds are light, keep the text readable in dark mode
        Button::new(RichText::new(caption.text()).color(Color32::BLACK)).fill(tint)
    }
}

impl<'a> DrawHost for EguiHost<'a> {
    fn single_line_height(&self) -> f32 {
        self.ui.spacing().interact_size.y
    }

    fn indent_width(&self) -> f32 {
        self.ui.spacing().indent
    }

    fn label(&mut self, rect: Rect, caption: &Caption) {
        let response = self.ui.put(rect, Label::new(caption.text()));
        with_tooltip(response, caption);
    }

    fn button_label(&mut self, rect: Rect, caption: &Caption, tint: Color32) {
        let response = self
            .ui
            .put(rect, button(caption, tint).sense(Sense::hover()));
        with_tooltip(response, caption);
    }

    fn toggle(&mut self, rect: Rect, caption: &Caption, tint: Color32) -> bool {
        let response = self.ui.put(rect, button(caption, tint));
        with_tooltip(response, caption).clicked()
    }

    fn allocate_control_rect(&mut self, _has_label: bool) -> Rect {
        let size = vec2(self.ui.available_width(), self.single_line_height());
        self.ui.allocate_exact_size(size, Sense::hover()).0
    }

    fn property_field(
        &mut self,
        rect: Rect,
        field: &mut dyn FieldHandle,
        label: &Caption,
        label_width: f32,
    ) -> bool {
        let mixed = field.has_multiple_different_values();

        let mut value_rect = rect;
        if !label.is_empty() {
            let mut text = RichText::new(label.text());
            if mixed {
                text = text.color(Color32::YELLOW);
            }
            let label_rect = Rect::from_min_size(rect.min, vec2(label_width, rect.height()));
            with_tooltip(self.ui.put(label_rect, Label::new(text)), label);
            value_rect.min.x += label_width;
        }

        let edited = match field.value() {
            FieldValue::Bool(mut b) => self
                .ui
                .put(value_rect, Checkbox::new(&mut b, ""))
                .changed()
                .then_some(FieldValue::Bool(b)),
            FieldValue::Integer(mut v) => self
                .ui
                .put(value_rect, DragValue::new(&mut v))
                .changed()
                .then_some(FieldValue::Integer(v)),
            FieldValue::Float(mut v) => self
                .ui
                .put(value_rect, DragValue::new(&mut v).speed(0.1))
                .changed()
                .then_some(FieldValue::Float(v)),
            FieldValue::Text(mut s) => {
                let changed = self
                    .ui
                    .put(value_rect, TextEdit::singleline(&mut s))
                    .changed();
                changed.then_some(FieldValue::Text(s))
            }
            FieldValue::Other(s) => {
                self.ui.put(value_rect, Label::new(s));
                None
            }
        };

        // an edit the field rejects (out of range for its type) is not a change
        edited.is_some_and(|value| field.set_value(value))
    }

    fn property_height(&self, _field: &dyn FieldHandle, _label: &Caption) -> f32 {
        self.single_line_height()
    }
}
