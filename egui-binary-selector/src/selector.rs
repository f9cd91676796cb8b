use crate::{Caption, DrawHost, GuiContext};
use egui::{pos2, vec2, Rect};

/// Draws a boolean as two side by side buttons in `rect` and returns the value after interaction.
///
/// The left button stands for `false`, the right one for `true`. The option matching `value` is
/// drawn as a tinted, non-clickable label so the selection can only move to the other option.
/// When the context shows a mixed value both options are clickable.
///
/// Only the first line of `rect` is used.
pub fn binary_select_field<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    value: bool,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    select(ctx, rect, value, &false_label.into(), &true_label.into())
}

/// Same as [`binary_select_field`] with a leading caption. An empty caption takes no room.
pub fn binary_select_field_labeled<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    value: bool,
    label: impl Into<Caption>,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    select_labeled(
        ctx,
        rect,
        value,
        &label.into(),
        &false_label.into(),
        &true_label.into(),
    )
}

pub(crate) fn select_labeled<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    value: bool,
    label: &Caption,
    false_label: &Caption,
    true_label: &Caption,
) -> bool {
    if label.is_empty() {
        return select(ctx, rect, value, false_label, true_label);
    }

    let label_width = ctx.style.label_width;
    let label_rect = Rect::from_min_size(rect.min, vec2(label_width, rect.height()));
    ctx.host.label(label_rect, label);

    let mut buttons = rect;
    buttons.min.x = rect.min.x + label_width + ctx.style.label_spacing;

    select(ctx, buttons, value, false_label, true_label)
}

pub(crate) fn select<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    value: bool,
    false_label: &Caption,
    true_label: &Caption,
) -> bool {
    let mut scope = ctx.scoped();
    let ctx = &mut *scope;

    let mixed = ctx.state.show_mixed_value;
    let original_tint = ctx.state.background_tint;
    let selected_tint = ctx.style.selected_tint();

    // the caller's rect already accounts for indentation
    ctx.state.indent_level = 0;

    let half = Rect::from_min_size(
        rect.min,
        vec2(rect.width() / 2.0, ctx.host.single_line_height()),
    );
    let false_rect = ctx.host.indented_rect(half, ctx.state.indent_level);
    let true_rect = Rect::from_min_max(
        pos2(false_rect.max.x, false_rect.min.y),
        pos2(rect.max.x, false_rect.max.y),
    );

    let mut result = value;

    if mixed || value {
        if ctx
            .host
            .toggle(false_rect, false_label, ctx.state.background_tint)
        {
            result = false;
            ctx.state.changed = true;
        }
    } else {
        ctx.state.background_tint = selected_tint;
        ctx.host
            .button_label(false_rect, false_label, ctx.state.background_tint);
    }

    if mixed || !value {
        ctx.state.background_tint = original_tint;
        if ctx
            .host
            .toggle(true_rect, true_label, ctx.state.background_tint)
        {
            result = true;
            ctx.state.changed = true;
        }
    } else {
        ctx.state.background_tint = selected_tint;
        ctx.host
            .button_label(true_rect, true_label, ctx.state.background_tint);
    }

    if mixed {
        log::trace!("binary selector drawn with mixed values");
    } else {
        log::trace!("binary selector drawn with {} selected", value);
    }

    result
}
