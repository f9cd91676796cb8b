use super::{Inspect, InspectArgs};

/// `None` is shown as text and cannot be edited. `Some` renders the inner value with the same
/// args, so an `Option<bool>` keeps its selector.
impl<T: Inspect<T>> Inspect<Option<T>> for Option<T> {
    fn render(data: &Self, label: &'static str, ui: &mut egui::Ui, args: &InspectArgs) {
        match data {
            Some(value) => <T as Inspect<T>>::render(value, label, ui, args),
            None => {
                ui.label(format!("{label}: None"));
            }
        }
    }

    fn render_mut(
        data: &mut Self,
        label: &'static str,
        ui: &mut egui::Ui,
        args: &InspectArgs,
    ) -> bool {
        match data {
            Some(value) => <T as Inspect<T>>::render_mut(value, label, ui, args),
            None => {
                ui.label(format!("{label}: None"));
                false
            }
        }
    }
}
