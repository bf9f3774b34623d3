use eframe::egui::{self, RichText, Ui};

use crate::data::filter::SiteSelection;
use crate::data::model::LAUNCH_SITES;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the control panel: site selector plus the payload-range handles.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch-site selector ----
    ui.strong("Launch Site");
    let mut selection = state.site.clone();
    egui::ComboBox::from_id_salt("site_select")
        .selected_text(selection.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            site_option(ui, &mut selection, SiteSelection::All);
            for site in LAUNCH_SITES {
                site_option(ui, &mut selection, SiteSelection::Site(site.to_string()));
            }
        });
    state.set_site(selection);

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (kg)");
    let bounds = state.dataset.min_payload..=state.dataset.max_payload;
    let (mut lo, mut hi) = state.payload_range;
    ui.add(
        egui::Slider::new(&mut lo, bounds.clone())
            .step_by(1000.0)
            .text("from"),
    );
    ui.add(egui::Slider::new(&mut hi, bounds).step_by(1000.0).text("to"));
    state.set_payload_range((lo, hi));
}

fn site_option(ui: &mut Ui, selection: &mut SiteSelection, candidate: SiteSelection) {
    let label = candidate.label().to_string();
    if ui
        .selectable_label(*selection == candidate, label)
        .clicked()
    {
        *selection = candidate;
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: title plus record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Launch Records Dashboard").heading());

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in payload view",
            state.dataset.len(),
            state.scatter.point_count()
        ));
    });
}
