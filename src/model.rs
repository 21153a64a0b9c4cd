use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    // Tema opcional; puede faltar en el banco
    #[serde(default)]
    pub chapter: Option<String>,
    pub question: String,
    pub solution: String,
}

impl Question {
    /// Tarjeta que se muestra cuando la lista filtrada queda vacía.
    pub fn none_left() -> Self {
        Self {
            id: String::new(),
            chapter: None,
            question: "No questions left!".to_owned(),
            solution: String::new(),
        }
    }

    /// Etiqueta de tema para la UI; ausente y vacío se tratan igual.
    pub fn topic_label(&self) -> &str {
        match self.chapter.as_deref() {
            Some(chapter) if !chapter.trim().is_empty() => chapter,
            _ => "Unknown Topic",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id.is_empty()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FilterMode {
    All,
    UnansweredOnly,
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::All
    }
}
