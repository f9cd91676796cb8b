//! Auto-layout variants: the control rect is taken from the host's layout instead of being
//! passed in.

use crate::drawer::select_property;
use crate::selector::{select, select_labeled};
use crate::{Caption, DrawHost, FieldHandle, GuiContext};

pub fn binary_select_field<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    value: bool,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    let rect = ctx.host.allocate_control_rect(false);
    select(ctx, rect, value, &false_label.into(), &true_label.into())
}

pub fn binary_select_field_labeled<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    value: bool,
    label: impl Into<Caption>,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    let rect = ctx.host.allocate_control_rect(true);
    select_labeled(
        ctx,
        rect,
        value,
        &label.into(),
        &false_label.into(),
        &true_label.into(),
    )
}

pub fn binary_select_property<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    field: &mut dyn FieldHandle,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    let rect = ctx.host.allocate_control_rect(false);
    select_property(
        ctx,
        rect,
        field,
        &Caption::default(),
        &false_label.into(),
        &true_label.into(),
    )
}

pub fn binary_select_property_labeled<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    field: &mut dyn FieldHandle,
    label: impl Into<Caption>,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    let rect = ctx.host.allocate_control_rect(true);
    select_property(
        ctx,
        rect,
        field,
        &label.into(),
        &false_label.into(),
        &true_label.into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::RecordingHost;
    use crate::MultiField;

    #[test]
    fn value_variants_allocate_a_rect() {
        let mut ctx = GuiContext::new(RecordingHost::clicking("On"));
        assert!(binary_select_field(&mut ctx, false, "Off", "On"));
        assert!(binary_select_field_labeled(&mut ctx, false, "Mode", "Off", "On"));
        assert_eq!(ctx.host.allocated, vec![false, true]);

        let first_button = ctx.host.drawn[0].rect();
        assert_eq!(first_button.min, ctx.host.next_rect.min);
        assert_eq!(first_button.width(), ctx.host.next_rect.width() / 2.0);
    }

    #[test]
    fn property_variants_write_back() {
        let (mut a, mut b) = (true, true);
        let mut refs = [&mut a, &mut b];
        let mut field = MultiField::new(&mut refs);

        let mut ctx = GuiContext::new(RecordingHost::clicking("Off"));
        assert!(binary_select_property(&mut ctx, &mut field, "Off", "On"));
        assert!(!binary_select_property_labeled(
            &mut ctx, &mut field, "Mode", "Off", "On"
        ));
        assert_eq!(ctx.host.allocated, vec![false, true]);
        drop(field);
        assert!(!a && !b);
    }
}
