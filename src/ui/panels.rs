use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::charts::{ChartChoice, ChartKind};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – chart selector and year slider
// ---------------------------------------------------------------------------

/// Render the left selection panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Select Visualization");
    ui.separator();

    ui.radio_value(&mut state.chart_choice, ChartChoice::All, "All");
    for kind in ChartKind::ALL {
        ui.radio_value(
            &mut state.chart_choice,
            ChartChoice::Single(kind),
            kind.label(),
        );
    }

    ui.add_space(8.0);
    ui.heading("Select Year");
    ui.separator();

    match state.year_range {
        Some((min, max)) => {
            let mut year = state.year;
            if ui.add(Slider::new(&mut year, min..=max)).changed() {
                state.set_year(year);
            }
            ui.label(format!(
                "{} of {} records in {}",
                state.visible_indices.len(),
                state.dataset.len(),
                state.year
            ));
        }
        None => {
            ui.label(RichText::new("No data: the dataset is empty.").color(Color32::RED));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} fire records loaded", state.dataset.len()));

        ui.separator();

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
