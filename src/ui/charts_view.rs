use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::charts::{self, ChartData};
use crate::data::summary::{self, ColumnSummary};
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel: charts in render order, then the summary table
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Wildfire Project Dashboard");

    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data: the dataset is empty.");
        });
        return;
    }

    // Artifacts and summary are owned values, recomputed per pass from the
    // read-only dataset and the cached filtered indices.
    let artifacts = charts::render(
        state.chart_choice,
        &state.dataset,
        &state.visible_indices,
        state.year,
    );
    let summaries = summary::summarize(&state.dataset, &state.visible_indices);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (kind, result) in &artifacts {
                ui.separator();
                ui.strong(kind.label());
                match result {
                    Ok(chart) => {
                        ui.label(kind.title(state.year));
                        draw_chart(ui, chart);
                        export_button(ui, state, chart);
                    }
                    Err(e) => {
                        ui.label(RichText::new(e.to_string()).color(Color32::RED));
                    }
                }
            }

            ui.separator();
            ui.strong("Data Summary/Insights");
            summary_table(ui, &summaries);
        });
}

fn draw_chart(ui: &mut Ui, chart: &ChartData) {
    match chart {
        ChartData::Bar(d) => charts::bar::draw(ui, d),
        ChartData::Scatter(d) => charts::scatter::draw(ui, d),
        ChartData::Violin(d) => charts::violin::draw(ui, d),
        ChartData::Heatmap(d) => charts::heatmap::draw(ui, d),
        ChartData::Pie(d) => charts::pie::draw(ui, d),
        ChartData::Regression(d) => charts::regression::draw(ui, d),
    }
}

/// "Save PNG…" affordance. An export failure is reported in the status bar;
/// the on-screen chart is unaffected.
fn export_button(ui: &mut Ui, state: &mut AppState, chart: &ChartData) {
    if !ui.button("Save PNG…").clicked() {
        return;
    }
    match export::export_chart(chart, state.year) {
        Ok(image) => {
            let picked = rfd::FileDialog::new()
                .set_title("Save chart image")
                .set_file_name(&image.filename)
                .add_filter("PNG image", &["png"])
                .save_file();
            if let Some(path) = picked {
                match std::fs::write(&path, &image.png) {
                    Ok(()) => {
                        log::info!("Saved {} to {}", image.filename, path.display());
                        state.status_message =
                            Some(format!("Saved {}", path.display()));
                    }
                    Err(e) => {
                        log::error!("Failed to save {}: {e}", path.display());
                        state.status_message = Some(format!("Save failed: {e}"));
                    }
                }
            }
        }
        Err(e) => {
            log::error!("Export failed: {e}");
            state.status_message = Some(format!("Export failed: {e}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Summary statistics table
// ---------------------------------------------------------------------------

fn summary_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    let stat_rows: [(&str, fn(&ColumnSummary) -> Option<f64>); 7] = [
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.q25),
        ("50%", |s| s.median),
        ("75%", |s| s.q75),
        ("max", |s| s.max),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto())
        .columns(Column::remainder(), summaries.len())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("");
            });
            for s in summaries {
                header.col(|ui| {
                    ui.strong(s.column.name());
                });
            }
        })
        .body(|mut body| {
            body.row(18.0, |mut row| {
                row.col(|ui| {
                    ui.label("count");
                });
                for s in summaries {
                    row.col(|ui| {
                        ui.label(s.count.to_string());
                    });
                }
            });
            for (label, stat) in stat_rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(label);
                    });
                    for s in summaries {
                        row.col(|ui| {
                            ui.label(format_stat(stat(s)));
                        });
                    }
                });
            }
        });
}

/// Missing statistics render as NaN, matching an empty describe table.
fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "NaN".to_string(),
    }
}
