use crate::cue::Cue;
use crate::logging::{log_trace, log_warning};
use crate::playback::resolver::resolve;

/// Тип для функций обратного вызова, обновляющих наложение субтитра
pub type OverlayCallback = Box<dyn Fn(Option<&str>) + Send + 'static>;

/// Синхронизация наложения субтитров с воспроизведением
///
/// Хранит текущее время воспроизведения, которое присылает плеер, и текст
/// активного субтитра. Функция обратного вызова вызывается только при
/// смене отображаемого текста.
pub struct PlaybackSync {
    /// Текущее время воспроизведения в секундах
    current_time: f64,
    /// Текст активного субтитра
    active_text: Option<String>,
    /// Функция обратного вызова для наложения
    callback: Option<OverlayCallback>,
}

impl PlaybackSync {
    /// Создает новую синхронизацию с нулевым временем
    pub fn new() -> Self {
        Self {
            current_time: 0.0,
            active_text: None,
            callback: None,
        }
    }

    /// Создает новую синхронизацию с функцией обратного вызова
    pub fn with_callback(callback: OverlayCallback) -> Self {
        Self {
            callback: Some(callback),
            ..Self::new()
        }
    }

    /// Устанавливает функцию обратного вызова
    pub fn set_callback(&mut self, callback: OverlayCallback) {
        self.callback = Some(callback);
    }

    /// Обрабатывает тик прогресса воспроизведения
    ///
    /// Нечисловое время игнорируется, остается предыдущее.
    pub fn on_progress(&mut self, cues: &[Cue], played_seconds: f64) -> Option<&str> {
        if played_seconds.is_finite() {
            self.current_time = played_seconds;
        } else {
            log_warning(&format!("Пропущено время воспроизведения: {}", played_seconds));
        }
        self.refresh(cues)
    }

    /// Пересчитывает активный субтитр для текущего времени
    ///
    /// Вызывается после каждого изменения хранилища.
    pub fn refresh(&mut self, cues: &[Cue]) -> Option<&str> {
        let resolved = resolve(cues, self.current_time);

        if resolved != self.active_text.as_deref() {
            log_trace(&format!(
                "Активный субтитр на {:.3} с: {:?}",
                self.current_time, resolved
            ));
            self.active_text = resolved.map(str::to_string);

            if let Some(callback) = &self.callback {
                callback(self.active_text.as_deref());
            }
        }

        self.active_text.as_deref()
    }

    /// Возвращает текущее время воспроизведения
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Возвращает текст активного субтитра
    pub fn active_text(&self) -> Option<&str> {
        self.active_text.as_deref()
    }

    /// Показывается ли наложение (пустой текст не показывается)
    pub fn overlay_visible(&self) -> bool {
        self.active_text.as_deref().map_or(false, |text| !text.is_empty())
    }
}

impl Default for PlaybackSync {
    fn default() -> Self {
        Self::new()
    }
}
