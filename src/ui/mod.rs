pub mod layout;
pub mod views;

use crate::TrainerApp;
use crate::storage;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for TrainerApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        top_panel(self, ctx);
        bottom_panel(self, ctx, frame);
        views::trainer::ui_trainer(self, ctx, frame);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage::save_answered(storage, &self.answered);
        storage::save_dark_mode(storage, self.dark_mode);
    }
}

/// Escritura write-through tras una mutación persistible. Si no hay backend
/// de almacenamiento, la sesión sigue con el estado en memoria como
/// autoridad; la acción del usuario nunca falla por esto.
pub(crate) fn write_through(app: &TrainerApp, frame: &mut Frame) {
    match frame.storage_mut() {
        Some(store) => {
            storage::save_answered(store, &app.answered);
            storage::save_dark_mode(store, app.dark_mode);
            store.flush();
        }
        None => log::debug!("no storage backend; progress kept in memory only"),
    }
}
