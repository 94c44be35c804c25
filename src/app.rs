use std::sync::Arc;

use eframe::egui;

use crate::data::reading::SensorReading;
use crate::data::sample;
use crate::state::chart_model::ChartModel;
use crate::state::settings::AppSettings;
use crate::state::theme::ChartTheme;
use crate::ui::sensor_chart;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The sensor chart application shell.
pub struct SensorChartApp {
    pub settings: AppSettings,
    pub theme: ChartTheme,
    pub model: ChartModel,
    /// Day (since the epoch) of the sample dataset currently shown.
    day: i64,
}

impl SensorChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let ctx = &cc.egui_ctx;
        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            egui::TextStyle::Body,
            egui::FontId::proportional(14.0),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(12.0),
        );
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        ctx.set_style(style);
        ctx.set_visuals(egui::Visuals::light());

        let theme = ChartTheme::from_settings(&settings);
        let mut model = ChartModel::new(&settings.series_id);
        let day = 0;
        model.set_readings(Self::sample(day, &settings));

        Self {
            settings,
            theme,
            model,
            day,
        }
    }

    fn sample(day: i64, settings: &AppSettings) -> Arc<[SensorReading]> {
        Arc::from(sample::sample_readings(day, settings.sample_points))
    }

    fn show_day(&mut self, day: i64) {
        self.day = day;
        let readings = Self::sample(day, &self.settings);
        tracing::info!("Showing sample day {} ({} readings)", day, readings.len());
        self.model.set_readings(readings);
    }

    fn clear(&mut self) {
        tracing::info!("Clearing readings");
        self.model.set_readings(Arc::from(Vec::new()));
    }
}

impl eframe::App for SensorChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(16, 8)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Sensor Chart");
                    ui.separator();

                    if ui.button("Previous day").clicked() {
                        self.show_day(self.day - 1);
                    }
                    if ui.button("Next day").clicked() {
                        self.show_day(self.day + 1);
                    }
                    if ui.button("Clear").on_hover_text("Remove all readings").clicked() {
                        self.clear();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.small(format!("v{VERSION}"));
                        ui.separator();
                        ui.small(format!(
                            "rev {} · {}",
                            self.model.revision(),
                            self.model.interaction().label()
                        ));
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                let changed =
                    sensor_chart::show_sensor_chart(ui, &mut self.model, &self.theme, &self.settings);
                if changed {
                    tracing::debug!("Chart hover state: {}", self.model.interaction().label());
                    ctx.request_repaint();
                }
            });
        });
    }
}
