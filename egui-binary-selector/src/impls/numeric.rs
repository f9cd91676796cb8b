use super::{Inspect, InspectArgs};

macro_rules! impl_numeric {
    ($($t: ty),*) => {$(
        impl Inspect<$t> for $t {
            fn render(data: &Self, label: &'static str, ui: &mut egui::Ui, _args: &InspectArgs) {
                ui.label(format!("{label}: {data}"));
            }

            fn render_mut(
                data: &mut Self,
                label: &'static str,
                ui: &mut egui::Ui,
                args: &InspectArgs,
            ) -> bool {
                let min = args.min_value.map_or(<$t>::MIN, |v| v as $t);
                let max = args.max_value.map_or(<$t>::MAX, |v| v as $t);

                let mut changed = false;
                ui.horizontal(|ui| {
                    ui.label(label);
                    changed = ui
                        .add(
                            egui::DragValue::new(data)
                                .range(min..=max)
                                .speed(args.step.unwrap_or(0.1)),
                        )
                        .changed();
                });
                changed
            }
        }
    )*};
}

impl_numeric!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);
