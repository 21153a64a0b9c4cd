use super::*;

impl TrainerApp {
    /// Filas para el selector de preguntas, una por pregunta visible.
    pub fn selector_rows(&self) -> Vec<QuestionRow> {
        self.visible_questions()
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionRow {
                idx: i,
                id: q.id.clone(),
                topic: q.topic_label().to_owned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_rows_follow_the_visible_list() {
        let questions = vec![
            Question {
                id: "Q1".to_owned(),
                chapter: Some("Optimization".to_owned()),
                question: "prompt".to_owned(),
                solution: "solution".to_owned(),
            },
            Question {
                id: "Q2".to_owned(),
                chapter: None,
                question: "prompt".to_owned(),
                solution: "solution".to_owned(),
            },
        ];
        let mut app = TrainerApp::with_questions(questions);

        let rows = app.selector_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label(), "Q1 - Optimization");
        assert_eq!(rows[1].label(), "Q2 - Unknown Topic");

        app.answered.insert("Q1".to_owned(), true);
        app.set_filter_mode(FilterMode::UnansweredOnly);
        let rows = app.selector_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].idx, 0);
        assert_eq!(rows[0].id, "Q2");
    }
}
