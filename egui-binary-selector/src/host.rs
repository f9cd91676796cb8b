use crate::{Caption, FieldHandle};
use egui::{Color32, Rect};

/// Drawing primitives provided by the GUI hosting the selector.
///
/// Rectangles are in the host's screen coordinates. Tints are multiplied into the button
/// background, [`Color32::WHITE`] meaning untinted.
pub trait DrawHost {
    /// Height of a standard single-line control
    fn single_line_height(&self) -> f32;

    /// Horizontal offset of one indent level
    fn indent_width(&self) -> f32;

    /// Moves the left edge of `rect` by `indent_level` indents, keeping the right edge.
    fn indented_rect(&self, rect: Rect, indent_level: usize) -> Rect {
        let mut rect = rect;
        rect.min.x = (rect.min.x + indent_level as f32 * self.indent_width()).min(rect.max.x);
        rect
    }

    /// Static text label
    fn label(&mut self, rect: Rect, caption: &Caption);

    /// Button-styled label that does not react to clicks
    fn button_label(&mut self, rect: Rect, caption: &Caption, tint: Color32);

    /// Toggle-styled button drawn in its "off" state. Returns true when it was pressed.
    fn toggle(&mut self, rect: Rect, caption: &Caption, tint: Color32) -> bool;

    /// Reserves the next single-line control rect from the host's auto-layout.
    fn allocate_control_rect(&mut self, has_label: bool) -> Rect;

    /// The host's generic renderer for any field. Returns true when the field was edited.
    fn property_field(
        &mut self,
        rect: Rect,
        field: &mut dyn FieldHandle,
        label: &Caption,
        label_width: f32,
    ) -> bool;

    /// Height the host allocates for `field` when drawn by [`DrawHost::property_field`].
    fn property_height(&self, field: &dyn FieldHandle, label: &Caption) -> f32;
}
