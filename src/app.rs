use eframe::egui;

use crate::data::model::FireDataset;
use crate::state::AppState;
use crate::ui::{charts_view, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FireDashApp {
    pub state: AppState,
}

impl FireDashApp {
    pub fn new(dataset: FireDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for FireDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: record counts and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: chart selector and year slider ----
        egui::SidePanel::left("selection_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts and summary table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts_view::central_panel(ui, &mut self.state);
        });
    }
}
