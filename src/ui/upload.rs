// src/ui/upload.rs
use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;

use crate::state::AppState;

/// Gesture produced by the upload view. Submissions need the network client,
/// which lives in the app, so the view only reports what the user asked for.
pub enum UploadAction {
    Submit(Vec<PathBuf>),
    Clear,
}

pub fn show_upload_view(ui: &mut egui::Ui, state: &AppState) -> Option<UploadAction> {
    let mut action = None;

    // Drop zone, clickable as a whole
    let desired = egui::vec2(ui.available_width(), 140.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    let (fill, stroke) = if state.drag_active {
        (
            ui.visuals().selection.bg_fill.linear_multiply(0.2),
            egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
        )
    } else {
        (
            ui.visuals().faint_bg_color,
            egui::Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color),
        )
    };
    ui.painter().rect(rect, 8.0, fill, stroke);

    let prompt = if state.drag_active {
        "Release to upload"
    } else {
        "Drop a source file here, or click to browse"
    };
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        prompt,
        egui::FontId::proportional(16.0),
        ui.visuals().text_color(),
    );

    if response.clicked() {
        if let Some(path) = pick_source_file() {
            action = Some(UploadAction::Submit(vec![path]));
        }
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Select file…").clicked() {
            if let Some(path) = pick_source_file() {
                action = Some(UploadAction::Submit(vec![path]));
            }
        }
        if ui.button("Clear").clicked() {
            action = Some(UploadAction::Clear);
        }
        if let Some(path) = &state.picked_file {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(egui::RichText::new(format!("Selected: {}", name)).weak());
        }
    });

    ui.add_space(4.0);
    if let Some(service) = &state.service {
        if !service.supported_languages.is_empty() {
            ui.label(
                egui::RichText::new(format!(
                    "Supported languages: {}",
                    service.supported_languages.join(", ")
                ))
                .weak()
                .small(),
            );
        }
    } else if let Some(note) = &state.service_note {
        ui.label(egui::RichText::new(format!("Service unreachable: {}", note)).weak().small());
    }

    action
}

fn pick_source_file() -> Option<PathBuf> {
    FileDialog::new().set_title("Select a source file").pick_file()
}
