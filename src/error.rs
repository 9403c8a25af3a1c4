use thiserror::Error;

/// Типы ошибок, которые могут возникнуть при работе с субтитрами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Ошибка ввода/вывода
    Io,
    /// Неверный аргумент (нечисловое время, отрицательная метка)
    InvalidArgument,
    /// Нет субтитров для экспорта
    EmptyTrack,
}

/// Ошибки, которые могут возникнуть при работе с субтитрами
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ошибка ввода/вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Позиция {position} вне диапазона (субтитров: {len})")]
    OutOfRange { position: usize, len: usize },

    #[error("Неверный аргумент: {0}")]
    InvalidArgument(String),

    #[error("Нет субтитров для экспорта: {0}")]
    EmptyTrack(String),

    #[error("Ошибка сериализации JSON: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("{0}")]
    LoggedError(String),
}

impl Error {
    /// Создает новую ошибку указанного типа с сообщением
    pub fn new(error_type: ErrorType, message: &str) -> Self {
        match error_type {
            ErrorType::Io => Self::Io(std::io::Error::new(std::io::ErrorKind::Other, message)),
            ErrorType::InvalidArgument => Self::InvalidArgument(message.to_string()),
            ErrorType::EmptyTrack => Self::EmptyTrack(message.to_string()),
        }
    }

    /// Создает ошибку выхода за границы хранилища
    pub fn out_of_range(position: usize, len: usize) -> Self {
        Self::OutOfRange { position, len }
    }

    /// Можно ли восстановиться после ошибки локально, не сообщая пользователю
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Результат с обработкой ошибок
pub type Result<T> = std::result::Result<T, Error>;
