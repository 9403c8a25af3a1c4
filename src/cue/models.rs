use crate::cue::edit::CueEdit;
use crate::error::{Error, Result};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};

/// Длительность нового субтитра по умолчанию, в секундах
pub const DEFAULT_CUE_DURATION: f64 = 2.0;

/// Структура данных для представления субтитра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    /// Время начала субтитра в секундах (включительно)
    pub start_time: f64,
    /// Время окончания субтитра в секундах (включительно)
    pub end_time: f64,
    /// Текст субтитра, может быть многострочным
    pub text: String,
}

impl Cue {
    /// Создает новый субтитр
    pub fn new(start_time: f64, end_time: f64, text: impl Into<String>) -> Self {
        Self {
            start_time,
            end_time,
            text: text.into(),
        }
    }

    /// Создает пустой субтитр, привязанный к моменту воспроизведения
    pub fn at(playback_time: f64, duration: f64) -> Self {
        Self::new(playback_time, playback_time + duration, String::new())
    }

    /// Возвращает длительность субтитра в секундах
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Попадает ли момент времени в окно показа (границы включительно)
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

/// Упорядоченное хранилище субтитров
///
/// Позиция субтитра (порядок добавления) служит его идентификатором в
/// пределах сессии. Длина меняется только через `add` и `delete`.
#[derive(Debug, Clone, Default)]
pub struct CueStore {
    cues: Vec<Cue>,
}

impl CueStore {
    /// Создает новое пустое хранилище
    pub fn new() -> Self {
        Self { cues: Vec::new() }
    }

    /// Добавляет субтитр в конец
    pub fn add(&mut self, cue: Cue) -> usize {
        self.cues.push(cue);
        let position = self.cues.len() - 1;
        log_debug(&format!("Добавлен субтитр на позицию {}", position));
        position
    }

    /// Добавляет пустой субтитр, начинающийся в момент `playback_time`
    pub fn add_at(&mut self, playback_time: f64, duration: f64) -> usize {
        self.add(Cue::at(playback_time, duration))
    }

    /// Заменяет одно поле субтитра на позиции `position`
    ///
    /// Диапазон значений не проверяется: отрицательное время и
    /// `end_time < start_time` допустимы. Нечисловое время отклоняется
    /// до записи.
    pub fn update(&mut self, position: usize, edit: CueEdit) -> Result<()> {
        let len = self.cues.len();
        let cue = self
            .cues
            .get_mut(position)
            .ok_or_else(|| Error::out_of_range(position, len))?;

        edit.validate()?;
        log_debug(&format!("Изменение субтитра {}: {:?}", position, edit.field()));
        edit.apply_to(cue);
        Ok(())
    }

    /// Удаляет субтитр, последующие позиции сдвигаются на одну вниз
    pub fn delete(&mut self, position: usize) -> Result<Cue> {
        if position >= self.cues.len() {
            return Err(Error::out_of_range(position, self.cues.len()));
        }

        log_debug(&format!("Удален субтитр на позиции {}", position));
        Ok(self.cues.remove(position))
    }

    /// Возвращает все субтитры в порядке добавления
    pub fn list(&self) -> &[Cue] {
        &self.cues
    }

    /// Возвращает субтитр по позиции
    pub fn get(&self, position: usize) -> Option<&Cue> {
        self.cues.get(position)
    }

    /// Возвращает количество субтитров
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Проверяет, пусто ли хранилище
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Возвращает итератор по субтитрам
    pub fn iter(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter()
    }
}

impl std::ops::Index<usize> for CueStore {
    type Output = Cue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cues[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_at_uses_window() {
        let cue = Cue::at(12.5, DEFAULT_CUE_DURATION);
        assert_eq!(cue.start_time, 12.5);
        assert_eq!(cue.end_time, 14.5);
        assert_eq!(cue.text, "");
        assert_eq!(cue.duration(), 2.0);
    }

    #[test]
    fn test_cue_json_snapshot() {
        let cue = Cue::new(1.5, 3.0, "Hi");
        let json = serde_json::to_string(&cue).unwrap();
        assert_eq!(json, r#"{"startTime":1.5,"endTime":3.0,"text":"Hi"}"#);

        let parsed: Cue = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cue);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cue = Cue::new(1.0, 3.0, "a");
        assert!(cue.contains(1.0));
        assert!(cue.contains(3.0));
        assert!(!cue.contains(0.999));
        assert!(!cue.contains(3.001));
        assert!(!cue.contains(f64::NAN));
    }

    #[test]
    fn test_add_returns_position() {
        let mut store = CueStore::new();
        assert_eq!(store.add(Cue::new(5.0, 6.0, "later")), 0);
        assert_eq!(store.add_at(1.0, 2.0), 1);

        // Порядок добавления сохраняется, а не временной
        assert_eq!(store[0].text, "later");
        assert_eq!(store[1].start_time, 1.0);
    }

    #[test]
    fn test_update_rejects_nan_without_writing() {
        let mut store = CueStore::new();
        store.add(Cue::new(1.0, 3.0, "a"));

        let result = store.update(0, CueEdit::StartTime(f64::NAN));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(store[0], Cue::new(1.0, 3.0, "a"));
    }

    #[test]
    fn test_update_allows_inverted_window() {
        let mut store = CueStore::new();
        store.add(Cue::new(1.0, 3.0, "a"));

        store.update(0, CueEdit::EndTime(0.5)).unwrap();
        store.update(0, CueEdit::StartTime(-1.0)).unwrap();
        assert_eq!(store[0].start_time, -1.0);
        assert_eq!(store[0].end_time, 0.5);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut store = CueStore::new();
        store.add(Cue::new(0.0, 1.0, "a"));

        match store.delete(1) {
            Err(Error::OutOfRange { position, len }) => {
                assert_eq!(position, 1);
                assert_eq!(len, 1);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }
}
