use super::*;

impl TrainerApp {
    /// Pasa a la siguiente pregunta visible, con vuelta al principio.
    /// Con la lista vacía no hace nada (el índice se queda en su sitio).
    pub fn advance(&mut self) {
        let len = self.visible_questions().len();
        if len == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % len;
        self.draft_answer.clear();
    }

    /// Salta directamente a un índice de la lista visible. El llamante lo
    /// obtiene de `selector_rows()`, así que siempre es válido.
    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index;
        self.draft_answer.clear();
    }
}
