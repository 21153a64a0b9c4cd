// src/view_models.rs

/// Avance global de la sesión, listo para pintar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressInfo {
    pub answered: usize,
    pub total: usize,
    pub percent: usize, // redondeado, 0..=100
}

impl ProgressInfo {
    pub fn label(&self) -> String {
        format!(
            "Progress: {} / {} ({}%)",
            self.answered, self.total, self.percent
        )
    }
}

/// Fila del selector de preguntas.
#[derive(Clone, Debug)]
pub struct QuestionRow {
    pub idx: usize, // índice 0-based en la lista visible
    pub id: String,
    pub topic: String,
}

impl QuestionRow {
    pub fn label(&self) -> String {
        format!("{} - {}", self.id, self.topic)
    }
}
