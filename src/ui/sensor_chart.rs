use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::data::datetime;
use crate::state::chart_model::ChartModel;
use crate::state::settings::AppSettings;
use crate::state::theme::ChartTheme;

/// Vertical padding applied when the range has zero height (single reading
/// or constant data), so the line is not drawn on the plot edge.
const DEGENERATE_Y_PAD: f64 = 0.5;
/// Same for the time axis when all points share one timestamp.
const DEGENERATE_X_PAD: f64 = 60.0;
/// Room left under the plot for the statistics footer.
const FOOTER_HEIGHT: f32 = 20.0;

fn plot_height(available: f32) -> f32 {
    (available - FOOTER_HEIGHT).max(0.0)
}

/// Render the sensor chart card and forward pointer enter/leave to `model`.
/// Returns `true` if the hover state changed this frame.
pub fn show_sensor_chart(
    ui: &mut egui::Ui,
    model: &mut ChartModel,
    theme: &ChartTheme,
    settings: &AppSettings,
) -> bool {
    let hovered = model.interaction().is_hovered();

    let frame_resp = egui::Frame::group(ui.style())
        .fill(theme.plot_bg())
        .stroke(theme.border(hovered))
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_width(settings.width);
            ui.set_height(settings.height);

            if model.series().is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.weak("No data yet");
                });
                return;
            }

            show_plot(ui, model, theme, settings, hovered);

            if let Some(stats) = model.stats() {
                ui.small(stats.report(&settings.series_id));
            }
        });

    if frame_resp.response.contains_pointer() {
        model.pointer_entered()
    } else {
        model.pointer_left()
    }
}

fn show_plot(
    ui: &mut egui::Ui,
    model: &ChartModel,
    theme: &ChartTheme,
    settings: &AppSettings,
    hovered: bool,
) {
    let series = model.series();
    let line_color = theme.line_color(hovered);
    let unit = settings.unit.clone();

    let (x_min, x_max) = match series.x_extent() {
        Some((first, last)) if first < last => (first as f64, last as f64),
        Some((first, _)) => (first as f64 - DEGENERATE_X_PAD, first as f64 + DEGENERATE_X_PAD),
        None => return,
    };
    let y_bounds = model.range().map(|range| {
        if range.span() > 0.0 {
            (range.min, range.max)
        } else {
            (range.min - DEGENERATE_Y_PAD, range.max + DEGENERATE_Y_PAD)
        }
    });

    let plot = Plot::new(format!("sensor_chart_{}", model.id()))
        .height(plot_height(ui.available_height()))
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(theme.show_grid(hovered))
        .show_background(false)
        .y_axis_label(egui::RichText::new(&settings.series_id).color(line_color))
        .x_axis_formatter(|mark, _range| datetime::format_clock(mark.value))
        .label_formatter(move |_name, value| {
            format!("{}\n{:.1} {}", datetime::format_epoch(value.x, datetime::FULL_FORMAT), value.y, unit)
        });

    let points: Vec<[f64; 2]> = series.points.iter().map(|p| p.as_plot_coords()).collect();

    plot.show(ui, |plot_ui| {
        if let Some((y_min, y_max)) = y_bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
        }
        plot_ui.line(
            Line::new(PlotPoints::from(points))
                .name(&series.id)
                .color(line_color)
                .width(1.0),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_height_never_goes_negative() {
        assert_eq!(plot_height(240.0), 220.0);
        assert_eq!(plot_height(FOOTER_HEIGHT), 0.0);
        assert_eq!(plot_height(5.0), 0.0);
    }
}
