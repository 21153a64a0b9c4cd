use super::*;

impl TrainerApp {
    /// Avance global: respondidas, total y porcentaje redondeado.
    /// Con el banco vacío el porcentaje es 0.
    pub fn progress(&self) -> ProgressInfo {
        let total = self.questions.len();
        let answered = self.answered.len();
        let percent = if total == 0 {
            0
        } else {
            (100.0 * answered as f64 / total as f64).round() as usize
        };
        ProgressInfo {
            answered,
            total,
            percent,
        }
    }
}
