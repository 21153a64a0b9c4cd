// src/storage.rs
//
// Frontera de persistencia: dos claves lógicas sobre el almacén
// clave-valor de eframe (fichero de perfil en nativo, localStorage en web).

use std::collections::BTreeMap;

use eframe::Storage;

pub const ANSWERED_KEY: &str = "answered";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Mapa id de pregunta -> marcada como respondida.
pub type AnsweredSet = BTreeMap<String, bool>;

/// Lee el mapa de respondidas. Datos ausentes o corruptos nunca rompen el
/// arranque: se vuelve al mapa vacío.
pub fn load_answered(storage: &dyn Storage) -> AnsweredSet {
    match eframe::get_value(storage, ANSWERED_KEY) {
        Some(answered) => answered,
        None => {
            if storage.get_string(ANSWERED_KEY).is_some() {
                log::warn!("stored `{ANSWERED_KEY}` was unreadable; starting with an empty set");
            }
            AnsweredSet::new()
        }
    }
}

/// Lee el flag de tema oscuro; por defecto apagado.
pub fn load_dark_mode(storage: &dyn Storage) -> bool {
    match eframe::get_value(storage, DARK_MODE_KEY) {
        Some(enabled) => enabled,
        None => {
            if storage.get_string(DARK_MODE_KEY).is_some() {
                log::warn!("stored `{DARK_MODE_KEY}` was unreadable; defaulting to light theme");
            }
            false
        }
    }
}

pub fn save_answered(storage: &mut dyn Storage, answered: &AnsweredSet) {
    eframe::set_value(storage, ANSWERED_KEY, answered);
}

pub fn save_dark_mode(storage: &mut dyn Storage, enabled: bool) {
    eframe::set_value(storage, DARK_MODE_KEY, &enabled);
}

/// Almacén en memoria para tests; mismo contrato que el real.
#[cfg(test)]
pub(crate) struct MemStorage {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl MemStorage {
    pub(crate) fn new() -> Self {
        Self {
            values: std::collections::HashMap::new(),
        }
    }
}

#[cfg(test)]
impl Storage for MemStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn flush(&mut self) {}
}
