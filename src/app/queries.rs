use super::*;

impl TrainerApp {
    /// Lista visible según el filtro activo, en el orden original del banco.
    pub fn visible_questions(&self) -> Vec<&Question> {
        match self.filter_mode {
            FilterMode::All => self.questions.iter().collect(),
            FilterMode::UnansweredOnly => self
                .questions
                .iter()
                .filter(|q| !self.is_answered(&q.id))
                .collect(),
        }
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.answered.get(id).copied().unwrap_or(false)
    }

    /// Pregunta actual, o la tarjeta "No questions left!" si el índice queda
    /// fuera de la lista visible. La vista nunca indexa fuera de rango.
    pub fn current_question(&self) -> Question {
        self.visible_questions()
            .get(self.current_index)
            .map(|q| (*q).clone())
            .unwrap_or_else(Question::none_left)
    }

    pub fn current_is_answered(&self) -> bool {
        let current = self.current_question();
        !current.is_placeholder() && self.is_answered(&current.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank() -> Vec<Question> {
        ["Q1", "Q2", "Q3"]
            .into_iter()
            .map(|id| Question {
                id: id.to_owned(),
                chapter: None,
                question: format!("prompt {id}"),
                solution: format!("solution {id}"),
            })
            .collect()
    }

    #[test]
    fn all_mode_shows_the_whole_bank() {
        let mut app = TrainerApp::with_questions(bank());
        app.answered.insert("Q2".to_owned(), true);

        let visible = app.visible_questions();
        assert_eq!(visible.len(), app.questions.len());
    }

    #[test]
    fn unanswered_mode_excludes_marked_questions() {
        let mut app = TrainerApp::with_questions(bank());
        app.answered.insert("Q2".to_owned(), true);
        app.set_filter_mode(FilterMode::UnansweredOnly);

        let visible: Vec<&str> = app
            .visible_questions()
            .iter()
            .map(|q| q.id.as_str())
            .collect();
        assert_eq!(visible, ["Q1", "Q3"]);
        assert!(app.visible_questions().len() <= app.questions.len());
    }

    #[test]
    fn a_stored_false_still_counts_as_unanswered() {
        let mut app = TrainerApp::with_questions(bank());
        app.answered.insert("Q1".to_owned(), false);
        app.set_filter_mode(FilterMode::UnansweredOnly);

        assert!(!app.is_answered("Q1"));
        assert_eq!(app.visible_questions().len(), 3);
    }

    #[test]
    fn empty_visible_list_yields_the_placeholder() {
        let mut app = TrainerApp::with_questions(bank());
        for id in ["Q1", "Q2", "Q3"] {
            app.answered.insert(id.to_owned(), true);
        }
        app.set_filter_mode(FilterMode::UnansweredOnly);

        let current = app.current_question();
        assert!(current.is_placeholder());
        assert_eq!(current.question, "No questions left!");
        assert!(!app.current_is_answered());
    }

    #[test]
    fn out_of_range_index_yields_the_placeholder() {
        // Marcar la última visible encoge la lista y deja el índice colgando
        let mut app = TrainerApp::with_questions(bank());
        app.set_filter_mode(FilterMode::UnansweredOnly);
        app.jump_to(2);
        app.mark_current_answered();

        assert_eq!(app.current_index, 2);
        assert!(app.current_question().is_placeholder());
    }
}
