use super::{Inspect, InspectArgs};

impl Inspect<String> for String {
    fn render(data: &Self, label: &'static str, ui: &mut egui::Ui, _args: &InspectArgs) {
        ui.label(format!("{label}: {data}"));
    }

    fn render_mut(
        data: &mut Self,
        label: &'static str,
        ui: &mut egui::Ui,
        _args: &InspectArgs,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.label(label);
            changed = ui.text_edit_singleline(data).changed();
        });
        changed
    }
}

impl Inspect<&'static str> for &'static str {
    fn render(data: &Self, label: &'static str, ui: &mut egui::Ui, _args: &InspectArgs) {
        ui.label(format!("{label}: {data}"));
    }

    fn render_mut(
        data: &mut Self,
        label: &'static str,
        ui: &mut egui::Ui,
        args: &InspectArgs,
    ) -> bool {
        Self::render(data, label, ui, args);
        false
    }
}
