use super::*;

impl TrainerApp {
    /// Cambia el filtro y recoloca el índice en la primera pregunta, en una
    /// sola operación: la lista visible cambia de identidad y un índice
    /// heredado dejaría de tener sentido.
    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        self.current_index = 0;
        self.draft_answer.clear();
    }

    /// Marca la pregunta actual como respondida. Idempotente; la tarjeta
    /// "No questions left!" no se marca. Devuelve si el mapa cambió, para
    /// que la capa de UI persista solo cuando hay algo nuevo.
    pub fn mark_current_answered(&mut self) -> bool {
        let current = self.current_question();
        if current.is_placeholder() {
            return false;
        }
        let previous = self.answered.insert(current.id, true);
        previous != Some(true)
    }

    /// Enciende o apaga el tema oscuro. Solo muta el estado; aplicar el
    /// tema y persistir quedan en la frontera de la vista.
    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.dark_mode = enabled;
    }
}
