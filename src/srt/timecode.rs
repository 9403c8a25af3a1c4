use crate::error::{Error, Result};
use crate::logging::log_debug;

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Форматирует время в секундах как метку SRT `HH:MM:SS,mmm`
///
/// Часы дополняются нулями минимум до двух цифр и не ограничиваются сверху.
/// Отрицательное или нечисловое время приводится к нулю.
pub fn format_timestamp(seconds: f64) -> String {
    match try_format_timestamp(seconds) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            log_debug(&format!("{}, метка приведена к нулю", e));
            format_millis(0)
        }
    }
}

/// Форматирует время в секундах как метку SRT, отклоняя отрицательное время
pub fn try_format_timestamp(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "время метки должно быть неотрицательным, получено {}",
            seconds
        )));
    }

    Ok(format_millis(to_millis(seconds)))
}

/// Переводит секунды в целые миллисекунды с округлением до ближайшей
pub fn to_millis(seconds: f64) -> u64 {
    (seconds * 1000.0).round() as u64
}

/// Форматирует длительность в миллисекундах как метку SRT
pub fn format_millis(total_ms: u64) -> String {
    let hours = total_ms / MS_PER_HOUR;
    let minutes = (total_ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (total_ms % MS_PER_MINUTE) / MS_PER_SECOND;
    let millis = total_ms % MS_PER_SECOND;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
        assert_eq!(format_timestamp(2.0), "00:00:02,000");
        assert_eq!(format_timestamp(0.5), "00:00:00,500");
        assert_eq!(format_timestamp(61.25), "00:01:01,250");
        assert_eq!(format_timestamp(5445.5), "01:30:45,500");
        assert_eq!(format_timestamp(359999.999), "99:59:59,999");
    }

    #[test]
    fn test_hours_grow_past_two_digits() {
        assert_eq!(format_timestamp(360000.0), "100:00:00,000");
        assert_eq!(format_timestamp(3_600_000.0 + 1.5), "1000:00:01,500");
    }

    #[test]
    fn test_millis_rounding() {
        // 1.001 * 1000 в двоичной арифметике чуть меньше 1001
        assert_eq!(format_timestamp(1.001), "00:00:01,001");
        assert_eq!(format_timestamp(0.0004), "00:00:00,000");
        assert_eq!(format_timestamp(0.0005), "00:00:00,001");
        // Округление переносится в старшие разряды
        assert_eq!(format_timestamp(59.9996), "00:01:00,000");
        // Перенос через границу часа: часы считаются от округленных миллисекунд
        assert_eq!(format_timestamp(3599.9996), "01:00:00,000");
        assert_eq!(format_timestamp(3599.999), "00:59:59,999");
    }

    #[test]
    fn test_negative_time() {
        assert_eq!(format_timestamp(-1.0), "00:00:00,000");
        assert_eq!(format_timestamp(f64::NAN), "00:00:00,000");

        assert!(matches!(try_format_timestamp(-0.001), Err(Error::InvalidArgument(_))));
        assert!(matches!(try_format_timestamp(f64::INFINITY), Err(Error::InvalidArgument(_))));
        assert_eq!(try_format_timestamp(3.0).unwrap(), "00:00:03,000");
    }
}
