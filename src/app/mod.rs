use crate::data::read_questions_embedded;
use crate::model::{FilterMode, Question};
use crate::storage::{self, AnsweredSet};
use eframe::egui;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ProgressInfo, QuestionRow};

/// Controlador de la sesión de estudio: banco fijo de tarjetas, marca de
/// respondidas persistida y estado de vista transitorio.
pub struct TrainerApp {
    pub questions: Vec<Question>,
    pub answered: AnsweredSet,
    pub filter_mode: FilterMode,
    pub current_index: usize,
    pub draft_answer: String,
    pub dark_mode: bool,
}

impl TrainerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::with_questions(read_questions_embedded());
        if let Some(storage) = cc.storage {
            app.restore_saved(storage);
        }
        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            answered: AnsweredSet::new(),
            filter_mode: FilterMode::All,
            current_index: 0,
            draft_answer: String::new(),
            dark_mode: false,
        }
    }

    /// Restaura lo persistido; datos ausentes o corruptos dejan los valores
    /// por defecto.
    pub fn restore_saved(&mut self, storage: &dyn eframe::Storage) {
        self.answered = storage::load_answered(storage);
        self.dark_mode = storage::load_dark_mode(storage);
        self.drop_unknown_ids();
        log::info!(
            "restored {} answered marks, dark_mode={}",
            self.answered.len(),
            self.dark_mode
        );
    }

    // Descarta marcas de preguntas que ya no existen en el banco
    fn drop_unknown_ids(&mut self) {
        let known: HashSet<&str> = self.questions.iter().map(|q| q.id.as_str()).collect();
        self.answered.retain(|id, _| known.contains(id.as_str()));
    }

    /// Aplica el tema actual al contexto de egui.
    pub fn apply_theme(&self, ctx: &egui::Context) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn bank() -> Vec<Question> {
        ["Q1", "Q2", "Q3"]
            .into_iter()
            .map(|id| Question {
                id: id.to_owned(),
                chapter: Some("Topic".to_owned()),
                question: format!("prompt {id}"),
                solution: format!("solution {id}"),
            })
            .collect()
    }

    #[test]
    fn fresh_session_starts_unfiltered_at_zero() {
        let app = TrainerApp::with_questions(bank());
        assert_eq!(app.filter_mode, FilterMode::All);
        assert_eq!(app.current_index, 0);
        assert!(app.answered.is_empty());
        assert!(!app.dark_mode);
        assert!(app.draft_answer.is_empty());
    }

    #[test]
    fn restore_round_trips_through_the_store() {
        let mut store = MemStorage::new();

        let mut first = TrainerApp::with_questions(bank());
        first.answered.insert("Q1".to_owned(), true);
        storage::save_answered(&mut store, &first.answered);
        storage::save_dark_mode(&mut store, true);

        let mut second = TrainerApp::with_questions(bank());
        second.restore_saved(&store);

        assert!(second.is_answered("Q1"));
        assert!(second.dark_mode);
        second.set_filter_mode(FilterMode::UnansweredOnly);
        let visible: Vec<&str> = second
            .visible_questions()
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(visible, ["Q2", "Q3"]);
    }

    #[test]
    fn restore_drops_marks_for_unknown_ids() {
        let mut store = MemStorage::new();
        let mut answered = AnsweredSet::new();
        answered.insert("Q1".to_owned(), true);
        answered.insert("GONE".to_owned(), true);
        storage::save_answered(&mut store, &answered);

        let mut app = TrainerApp::with_questions(bank());
        app.restore_saved(&store);

        assert!(app.is_answered("Q1"));
        assert!(!app.answered.contains_key("GONE"));
        assert_eq!(app.progress().percent, 33);
    }
}
