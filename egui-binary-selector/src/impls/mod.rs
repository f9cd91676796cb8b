mod bool;
mod numeric;
mod option;
mod string;
mod vec;

use crate::SelectorArgs;
use egui::Ui;

/// Options for rendering a field, set from its `#[inspect(...)]` attribute.
///
/// Not every widget respects every option: numeric fields use the range and step, `bool` fields
/// use the selector arguments, and the others are ignored where they make no sense.
#[derive(Clone, Default, Debug)]
pub struct InspectArgs {
    /// If true, the struct will have a visual/expandable header added to it. This defaults to true.
    pub header: Option<bool>,

    /// If true, any child elements (i.e. struct members) will be indented. This defaults to true.
    pub indent_children: Option<bool>,

    pub min_value: Option<f32>,
    pub max_value: Option<f32>,
    pub step: Option<f32>,

    /// When set on a `bool`, the field is drawn as a binary selector instead of a checkbox.
    pub selector: Option<SelectorArgs>,
}

/// Renders a value using the default widget for its type
pub trait Inspect<T: ?Sized> {
    /// Render the element in an immutable way (i.e. static text)
    fn render(data: &T, label: &'static str, ui: &mut Ui, args: &InspectArgs);

    /// Render the element in a mutable way. Returns true when the value was edited.
    fn render_mut(data: &mut T, label: &'static str, ui: &mut Ui, args: &InspectArgs) -> bool;
}

impl<T, I: Inspect<T>> Inspect<Box<T>> for Box<I> {
    fn render(data: &Box<T>, label: &'static str, ui: &mut Ui, args: &InspectArgs) {
        I::render(data, label, ui, args)
    }

    fn render_mut(data: &mut Box<T>, label: &'static str, ui: &mut Ui, args: &InspectArgs) -> bool {
        I::render_mut(data, label, ui, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Event, Modifiers, PointerButton, RawInput, Rect};

    fn selector_args() -> InspectArgs {
        InspectArgs {
            selector: Some(SelectorArgs {
                false_text: "Off",
                true_text: "On",
                ..SelectorArgs::default()
            }),
            ..InspectArgs::default()
        }
    }

    /// Runs an idle frame, then a press and a release at `click`. True if any frame reported a change.
    fn clicked_frames(click: Option<egui::Pos2>, mut f: impl FnMut(&mut Ui) -> bool) -> bool {
        let ctx = egui::Context::default();
        let screen = Rect::from_min_size(pos2(0.0, 0.0), vec2(400.0, 300.0));
        let mut changed = false;
        for pressed in [None, Some(true), Some(false)] {
            let mut events = Vec::new();
            if let (Some(pos), Some(pressed)) = (click, pressed) {
                events.push(Event::PointerMoved(pos));
                events.push(Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    modifiers: Modifiers::default(),
                });
            }
            let input = RawInput {
                screen_rect: Some(screen),
                events,
                ..RawInput::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| changed |= f(ui));
            });
        }
        changed
    }

    #[test]
    fn none_is_not_editable() {
        let mut v: Option<bool> = None;
        let args = selector_args();
        let changed = clicked_frames(Some(pos2(350.0, 15.0)), |ui| {
            <Option<bool> as Inspect<Option<bool>>>::render_mut(&mut v, "opt", ui, &args)
        });
        assert!(!changed);
        assert_eq!(v, None);
    }

    #[test]
    fn some_keeps_the_selector() {
        let mut v = Some(false);
        let args = selector_args();
        let changed = clicked_frames(Some(pos2(350.0, 15.0)), |ui| {
            <Option<bool> as Inspect<Option<bool>>>::render_mut(&mut v, "opt", ui, &args)
        });
        assert!(changed);
        assert_eq!(v, Some(true));
    }

    #[test]
    fn boxed_value_forwards_to_inner() {
        let mut v = Box::new(false);
        let args = selector_args();
        let changed = clicked_frames(Some(pos2(350.0, 15.0)), |ui| {
            <Box<bool> as Inspect<Box<bool>>>::render_mut(&mut v, "boxed", ui, &args)
        });
        assert!(changed);
        assert!(*v);
    }

    #[test]
    fn collapsed_vec_is_left_alone() {
        let mut v = vec![false, true, false];
        let args = selector_args();
        let changed = clicked_frames(None, |ui| {
            <Vec<bool> as Inspect<Vec<bool>>>::render_mut(&mut v, "flags", ui, &args)
        });
        assert!(!changed);
        assert_eq!(v, vec![false, true, false]);

        clicked_frames(None, |ui| {
            <[bool] as Inspect<[bool]>>::render(&v, "flags", ui, &args);
            false
        });
    }
}
