// src/app.rs
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::api::{ApiClient, ServiceStatus};
use crate::config::AppConfig;
use crate::state::{AppState, Completion};
use crate::ui::{self, UploadAction};

/// Everything worker threads report back to the UI thread.
pub enum AppEvent {
    Extraction(Completion),
    Service(Result<ServiceStatus, String>),
}

pub struct ExtractorApp {
    state: AppState,
    client: ApiClient,
    events_tx: Sender<AppEvent>,
    events_rx: Receiver<AppEvent>,
}

impl ExtractorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let (events_tx, events_rx) = channel();
        let client = ApiClient::new(&config.api_base);
        let app = Self {
            state: AppState::new(),
            client,
            events_tx,
            events_rx,
        };
        app.fetch_service_status(cc.egui_ctx.clone());
        app
    }

    /// One-shot /status probe so the UI can show what the service supports.
    /// Failures only downgrade the hint line, never the error panel.
    fn fetch_service_status(&self, ctx: egui::Context) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        std::thread::spawn(move || {
            let outcome = client.status().map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::Service(outcome));
            ctx.request_repaint();
        });
    }

    /// The single submission path every intake gesture funnels into. Reads
    /// the file and talks to the service on a worker thread; the completion
    /// comes back through the channel stamped with its submission token.
    fn submit_files(&mut self, ctx: &egui::Context, paths: Vec<PathBuf>) {
        let (token, path) = match self.state.accept_submission(paths) {
            Some(accepted) => accepted,
            None => return,
        };
        log::info!("submitting {} (request {})", path.display(), token);

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        let file_name = file_name_of(&path);
        std::thread::spawn(move || {
            let outcome = std::fs::read(&path)
                .map_err(|e| e.to_string())
                .and_then(|bytes| client.extract(&file_name, bytes).map_err(|e| e.to_string()));
            let _ = tx.send(AppEvent::Extraction(Completion { token, outcome }));
            ctx.request_repaint();
        });
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Extraction(completion) => self.state.apply_completion(completion),
                AppEvent::Service(outcome) => self.state.set_service(outcome),
            }
        }
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Function Extractor");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&self.state.status_note);
                ui.colored_label(ui::indicator_color(self.state.phase), "●");
            });
        });
    }
}

impl eframe::App for ExtractorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events();

        // Window-level drag-and-drop; egui clears hovered_files on drop or leave
        self.state.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw.dropped_files.iter().filter_map(|f| f.path.clone()).collect()
        });
        if !dropped.is_empty() {
            self.submit_files(ctx, dropped);
        }

        egui::TopBottomPanel::top("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        let mut action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            action = ui::upload::show_upload_view(ui, &self.state);
            ui.add_space(12.0);
            ui::results::show_results_view(ui, &self.state);
        });

        match action {
            Some(UploadAction::Submit(paths)) => self.submit_files(ctx, paths),
            Some(UploadAction::Clear) => self.state.clear(),
            None => {}
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
