use std::f64::consts::TAU;

use eframe::egui::{Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points, Polygon};

use crate::chart::{PieSpec, ScatterSpec};
use crate::color::{generate_palette, ColorMap};

// ---------------------------------------------------------------------------
// Success pie (upper central panel)
// ---------------------------------------------------------------------------

/// Points per full revolution when tessellating pie sectors.
const ARC_STEPS: usize = 128;

/// Render a pie specification as filled sectors on an axis-less square plot.
pub fn success_pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    let total = spec.total();
    let colors = generate_palette(spec.segments.len());

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            let mut angle = 0.0_f64;
            for (segment, color) in spec.segments.iter().zip(colors) {
                let span = segment.count as f64 / total as f64 * TAU;
                let sector: PlotPoints = sector_points(angle, angle + span).into();
                angle += span;

                plot_ui.polygon(
                    Polygon::new(sector)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, color))
                        .name(format!("{} ({})", segment.label, segment.count)),
                );
            }
        });
}

/// Unit-circle sector as a closed point list: centre, then the arc.
fn sector_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let span = end - start;
    let steps = ((span / TAU * ARC_STEPS as f64).ceil() as usize).max(1);

    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let theta = start + span * i as f64 / steps as f64;
        points.push([theta.cos(), theta.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Payload scatter (lower central panel)
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter, one point series per booster.
pub fn payload_scatter_chart(ui: &mut Ui, spec: &ScatterSpec, colors: &ColorMap, height: f32) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
    });

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                plot_ui.points(
                    Points::new(points)
                        .color(colors.color_for(&series.booster_version))
                        .shape(MarkerShape::Circle)
                        .radius(4.0)
                        .name(&series.booster_version),
                );
            }
        });
}
