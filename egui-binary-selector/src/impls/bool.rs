use super::{Inspect, InspectArgs};
use crate::{
    BinarySelectorDrawer, Caption, DrawHost, EguiHost, GuiContext, MultiField, SelectorConfig,
    SelectorStyle,
};

impl Inspect<bool> for bool {
    fn render(data: &Self, label: &'static str, ui: &mut egui::Ui, args: &InspectArgs) {
        match args.selector {
            Some(selector) => {
                let config = SelectorConfig::from(selector);
                let option = if *data {
                    config.true_label()
                } else {
                    config.false_label()
                };
                ui.label(format!("{label}: {}", option.text()));
            }
            None => {
                ui.label(format!("{label}: {data}"));
            }
        }
    }

    fn render_mut(
        data: &mut Self,
        label: &'static str,
        ui: &mut egui::Ui,
        args: &InspectArgs,
    ) -> bool {
        let Some(selector) = args.selector else {
            return ui.checkbox(data, label).changed();
        };

        let drawer = BinarySelectorDrawer::new(selector.into());
        let mut refs = [data];
        let mut field = MultiField::new(&mut refs);

        let style = SelectorStyle::from_egui(ui.ctx());
        let mut ctx = GuiContext::with_style(EguiHost::new(ui), style);
        let rect = ctx.host.allocate_control_rect(true);
        drawer.on_gui(&mut ctx, rect, &mut field, &Caption::from(label))
    }
}
