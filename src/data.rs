// src/data.rs

use crate::model::Question;

/// Carga el banco de preguntas desde el YAML embebido
pub fn read_questions_embedded() -> Vec<Question> {
    let file_content = include_str!("data/questions.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de preguntas")
}
