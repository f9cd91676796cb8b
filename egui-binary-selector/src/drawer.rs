use crate::selector::select_labeled;
use crate::{Caption, DrawHost, FieldHandle, FieldKind, GuiContext, SelectorConfig};
use egui::Rect;

/// Draws a boolean field as a binary selector and writes the selection back to it.
///
/// Returns true when the field was written. Non-boolean fields are drawn by the host's default
/// renderer instead.
pub fn binary_select_property<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    field: &mut dyn FieldHandle,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
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
    rect: Rect,
    field: &mut dyn FieldHandle,
    label: impl Into<Caption>,
    false_label: impl Into<Caption>,
    true_label: impl Into<Caption>,
) -> bool {
    select_property(
        ctx,
        rect,
        field,
        &label.into(),
        &false_label.into(),
        &true_label.into(),
    )
}

pub(crate) fn select_property<H: DrawHost>(
    ctx: &mut GuiContext<H>,
    rect: Rect,
    field: &mut dyn FieldHandle,
    label: &Caption,
    false_label: &Caption,
    true_label: &Caption,
) -> bool {
    let value = match (field.kind(), field.bool_value()) {
        (FieldKind::Bool, Some(value)) => value,
        (kind, _) => {
            log::debug!(
                "binary selector applied to a {:?} field '{}', drawing the default field",
                kind,
                label.text()
            );
            let label_width = ctx.style.label_width;
            return ctx.host.property_field(rect, field, label, label_width);
        }
    };

    let mut scope = ctx.scoped();
    scope.state.show_mixed_value = field.has_multiple_different_values();

    let (new_value, changed) = scope.change_check(|ctx| {
        select_labeled(ctx, rect, value, label, false_label, true_label)
    });

    if !changed {
        return false;
    }
    if !field.set_bool_value(new_value) {
        log::warn!("binary selector '{}' could not write {}", label.text(), new_value);
        return false;
    }
    log::debug!("binary selector '{}' set to {}", label.text(), new_value);
    true
}

/// Per-field adapter created from the selector configuration attached to a field.
#[derive(Clone, Debug, Default)]
pub struct BinarySelectorDrawer {
    config: SelectorConfig,
}

impl BinarySelectorDrawer {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    pub fn on_gui<H: DrawHost>(
        &self,
        ctx: &mut GuiContext<H>,
        rect: Rect,
        field: &mut dyn FieldHandle,
        label: &Caption,
    ) -> bool {
        select_property(
            ctx,
            rect,
            field,
            label,
            self.config.false_label(),
            self.config.true_label(),
        )
    }

    /// The selector is as tall as the host's regular field of the same type.
    pub fn property_height<H: DrawHost>(
        &self,
        ctx: &GuiContext<H>,
        field: &dyn FieldHandle,
        label: &Caption,
    ) -> f32 {
        ctx.host.property_height(field, label)
    }
}

impl From<SelectorConfig> for BinarySelectorDrawer {
    fn from(config: SelectorConfig) -> Self {
        Self::new(config)
    }
}
