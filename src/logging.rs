use log::{debug, error, info, trace, warn, LevelFilter, Log, Metadata, Record};
use env_logger::Builder;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

/// Формат времени в строках журнала
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Формирует строку журнала в едином для библиотеки виде
fn format_line(record: &Record) -> String {
    format!(
        "{} [{}] {} - {}",
        chrono::Local::now().format(TIME_FORMAT),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Логгер для тестов, пишет в stdout, чтобы вывод перехватывался тест-раннером
#[derive(Clone)]
pub struct TestLogger {
    level: LevelFilter,
}

impl TestLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", format_line(record));
        }
    }

    fn flush(&self) {}
}

/// Настраивает логирование для библиотеки
///
/// Повторный вызов не меняет уже установленный логгер.
pub fn setup_logging(level: LevelFilter) {
    let mut builder = Builder::new();

    builder.filter_level(level);
    builder.format(|buf, record| writeln!(buf, "{}", format_line(record)));

    if builder.try_init().is_ok() {
        info!("Логирование настроено с уровнем: {}", level);
    }
}

/// Настраивает логирование для тестов
pub fn setup_test_logging(level: LevelFilter) {
    INIT.call_once(|| {
        if log::set_boxed_logger(Box::new(TestLogger::new(level))).is_ok() {
            log::set_max_level(level);
        }
    });
}

/// Логирует ошибку и возвращает её
pub fn log_error<T, E: std::fmt::Display>(err: E, message: &str) -> Result<T, crate::error::Error> {
    let error_message = format!("{}: {}", message, err);
    error!("{}", error_message);
    Err(crate::error::Error::LoggedError(error_message))
}

/// Логирует предупреждение
pub fn log_warning(message: &str) {
    warn!("{}", message);
}

/// Логирует информационное сообщение
pub fn log_info(message: &str) {
    info!("{}", message);
}

/// Логирует отладочное сообщение
pub fn log_debug(message: &str) {
    debug!("{}", message);
}

/// Логирует трассировочное сообщение
pub fn log_trace(message: &str) {
    trace!("{}", message);
}
