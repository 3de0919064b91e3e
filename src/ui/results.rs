// src/ui/results.rs
use eframe::egui;

use crate::api::FunctionInfo;
use crate::state::AppState;
use crate::ui::{STATUS_BUSY, STATUS_ERROR};

/// Paints whichever of the two panels the state holds. The state guarantees
/// result and error are never both present.
pub fn show_results_view(ui: &mut egui::Ui, state: &AppState) {
    if let Some(result) = &state.result {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.heading(&result.file);
                ui.label(
                    egui::RichText::new(format!(" {} ", result.language_tag()))
                        .strong()
                        .color(egui::Color32::WHITE)
                        .background_color(STATUS_BUSY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(result.count_caption());
                });
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .id_source("functions_list_scroll")
                .show(ui, |ui| {
                    for function in &result.functions {
                        show_function_entry(ui, function);
                        ui.add_space(4.0);
                    }
                });
        });
    }

    if let Some(message) = &state.error_message {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(STATUS_ERROR, message);
        });
    }
}

fn show_function_entry(ui: &mut egui::Ui, function: &FunctionInfo) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(function.signature()).monospace());
        ui.label(egui::RichText::new(function.line_label()).weak().small());
    });
}
