use crate::cue::models::Cue;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Редактируемое поле субтитра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CueField {
    #[serde(rename = "startTime")]
    StartTime,
    #[serde(rename = "endTime")]
    EndTime,
    #[serde(rename = "text")]
    Text,
}

impl fmt::Display for CueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StartTime => "startTime",
            Self::EndTime => "endTime",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// Изменение одного поля субтитра
#[derive(Debug, Clone, PartialEq)]
pub enum CueEdit {
    StartTime(f64),
    EndTime(f64),
    Text(String),
}

impl CueEdit {
    /// Приводит значение из формы редактирования к типу поля
    ///
    /// Время принимается как десятичное число секунд; пробелы по краям
    /// игнорируются. Нечисловое или бесконечное значение дает
    /// `Error::InvalidArgument`.
    pub fn coerce(field: CueField, raw: &str) -> Result<Self> {
        match field {
            CueField::Text => Ok(Self::Text(raw.to_string())),
            CueField::StartTime => Ok(Self::StartTime(parse_seconds(field, raw)?)),
            CueField::EndTime => Ok(Self::EndTime(parse_seconds(field, raw)?)),
        }
    }

    /// Возвращает изменяемое поле
    pub fn field(&self) -> CueField {
        match self {
            Self::StartTime(_) => CueField::StartTime,
            Self::EndTime(_) => CueField::EndTime,
            Self::Text(_) => CueField::Text,
        }
    }

    /// Проверяет, что время конечно
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::StartTime(value) | Self::EndTime(value) if !value.is_finite() => {
                Err(Error::InvalidArgument(format!(
                    "{}: ожидалось конечное число секунд, получено {}",
                    self.field(),
                    value
                )))
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn apply_to(self, cue: &mut Cue) {
        match self {
            Self::StartTime(value) => cue.start_time = value,
            Self::EndTime(value) => cue.end_time = value,
            Self::Text(value) => cue.text = value,
        }
    }
}

fn parse_seconds(field: CueField, raw: &str) -> Result<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        Error::InvalidArgument(format!("{}: не число: {:?}", field, raw))
    })?;

    if !value.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "{}: ожидалось конечное число секунд, получено {:?}",
            field, raw
        )));
    }

    Ok(value)
}

/// Значение поля, как его присылает форма: числом или строкой
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditValue {
    Number(f64),
    Text(String),
}

impl EditValue {
    /// Приводит значение к изменению указанного поля
    pub fn into_edit(self, field: CueField) -> Result<CueEdit> {
        match (self, field) {
            (Self::Number(n), CueField::Text) => Ok(CueEdit::Text(n.to_string())),
            (Self::Number(n), CueField::StartTime) => {
                let edit = CueEdit::StartTime(n);
                edit.validate()?;
                Ok(edit)
            }
            (Self::Number(n), CueField::EndTime) => {
                let edit = CueEdit::EndTime(n);
                edit.validate()?;
                Ok(edit)
            }
            (Self::Text(s), field) => CueEdit::coerce(field, &s),
        }
    }
}

/// Событие от формы редактирования
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum EditEvent {
    /// Добавить субтитр в текущий момент воспроизведения
    Add,
    /// Изменить одно поле субтитра
    Update {
        position: usize,
        field: CueField,
        value: EditValue,
    },
    /// Удалить субтитр
    Delete { position: usize },
}

impl EditEvent {
    /// Разбирает событие из JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
