pub mod error;
pub mod cue;
pub mod srt;
pub mod playback;
pub mod logging;

pub use error::{Error, Result, ErrorType};
pub use logging::{
    setup_logging, setup_test_logging, log_error, log_warning, log_info, log_debug, log_trace
};
pub use cue::{Cue, CueStore, CueEdit, CueField, EditEvent, EditValue, DEFAULT_CUE_DURATION};
pub use srt::{SrtExporter, format_timestamp, try_format_timestamp, SRT_EXTENSION, SRT_FILE_NAME, SRT_MIME_TYPE};
pub use playback::{resolve, resolve_index, PlaybackSync, OverlayCallback};

use std::path::{Path, PathBuf};

/// Настройки редактора субтитров
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Длительность нового субтитра в секундах
    pub default_cue_duration: f64,

    /// Имя файла экспорта
    pub export_file_name: String,

    /// Уровень логирования
    pub log_level: log::LevelFilter,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_cue_duration: DEFAULT_CUE_DURATION,
            export_file_name: SRT_FILE_NAME.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

/// Результат применения правки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Субтитр добавлен на указанную позицию
    Added(usize),
    /// Поле субтитра изменено
    Updated,
    /// Субтитр удален
    Deleted,
    /// Правка отклонена, хранилище не изменилось
    Ignored,
}

/// Сессия редактирования субтитров
///
/// Связывает хранилище субтитров с синхронизацией воспроизведения: каждое
/// изменение хранилища пересчитывает активный субтитр.
pub struct SubtitleEditor {
    options: EditorOptions,
    store: CueStore,
    playback: PlaybackSync,
}

impl SubtitleEditor {
    /// Создает новую сессию с заданными настройками
    pub fn new(options: EditorOptions) -> Self {
        #[cfg(test)]
        {
            setup_test_logging(options.log_level);
        }
        #[cfg(not(test))]
        {
            setup_logging(options.log_level);
        }

        log_info(&format!("Создана сессия редактирования субтитров: {:?}", options));

        Self {
            options,
            store: CueStore::new(),
            playback: PlaybackSync::new(),
        }
    }

    /// Устанавливает функцию обратного вызова для наложения субтитра
    pub fn with_overlay_callback(mut self, callback: OverlayCallback) -> Self {
        log_debug("Установлена функция обратного вызова для наложения");
        self.playback.set_callback(callback);
        self
    }

    /// Устанавливает длительность нового субтитра
    pub fn with_default_cue_duration(mut self, duration: f64) -> Self {
        log_debug(&format!("Установлена длительность нового субтитра: {}", duration));
        self.options.default_cue_duration = duration;
        self
    }

    /// Устанавливает имя файла экспорта
    ///
    /// Расширение `.srt` добавляется, если его нет.
    pub fn with_export_file_name(mut self, file_name: &str) -> Self {
        let has_extension = Path::new(file_name)
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case(SRT_EXTENSION));
        let file_name = if has_extension {
            file_name.to_string()
        } else {
            format!("{}.{}", file_name, SRT_EXTENSION)
        };

        log_debug(&format!("Установлено имя файла экспорта: {}", file_name));
        self.options.export_file_name = file_name;
        self
    }

    /// Возвращает настройки сессии
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Возвращает хранилище субтитров
    pub fn store(&self) -> &CueStore {
        &self.store
    }

    /// Возвращает субтитры в порядке добавления
    pub fn cues(&self) -> &[Cue] {
        self.store.list()
    }

    /// Возвращает текущее время воспроизведения
    pub fn current_time(&self) -> f64 {
        self.playback.current_time()
    }

    /// Возвращает текст активного субтитра
    pub fn active_text(&self) -> Option<&str> {
        self.playback.active_text()
    }

    /// Обрабатывает тик прогресса от плеера
    pub fn on_progress(&mut self, played_seconds: f64) -> Option<&str> {
        self.playback.on_progress(self.store.list(), played_seconds)
    }

    /// Добавляет пустой субтитр в текущий момент воспроизведения
    pub fn add_cue(&mut self) -> usize {
        let position = self
            .store
            .add_at(self.playback.current_time(), self.options.default_cue_duration);
        self.playback.refresh(self.store.list());
        position
    }

    /// Изменяет одно поле субтитра
    pub fn update_cue(&mut self, position: usize, edit: CueEdit) -> Result<()> {
        self.store.update(position, edit)?;
        self.playback.refresh(self.store.list());
        Ok(())
    }

    /// Удаляет субтитр
    pub fn delete_cue(&mut self, position: usize) -> Result<Cue> {
        let cue = self.store.delete(position)?;
        self.playback.refresh(self.store.list());
        Ok(cue)
    }

    /// Применяет событие от формы редактирования
    ///
    /// Некорректное значение времени не меняет хранилище и дает
    /// `EditOutcome::Ignored`. Устаревшая позиция возвращается как
    /// `Error::OutOfRange`.
    pub fn apply(&mut self, event: EditEvent) -> Result<EditOutcome> {
        match event {
            EditEvent::Add => Ok(EditOutcome::Added(self.add_cue())),
            EditEvent::Update { position, field, value } => {
                if position >= self.store.len() {
                    return Err(Error::out_of_range(position, self.store.len()));
                }

                let result = value
                    .into_edit(field)
                    .and_then(|edit| self.update_cue(position, edit));

                match result {
                    Ok(()) => Ok(EditOutcome::Updated),
                    Err(e) if e.is_recoverable() => {
                        log_warning(&format!("Правка субтитра {} отклонена: {}", position, e));
                        Ok(EditOutcome::Ignored)
                    }
                    Err(e) => Err(e),
                }
            }
            EditEvent::Delete { position } => {
                self.delete_cue(position)?;
                Ok(EditOutcome::Deleted)
            }
        }
    }

    /// Можно ли экспортировать субтитры
    pub fn can_export(&self) -> bool {
        !self.store.is_empty()
    }

    /// Возвращает текст SRT для текущих субтитров
    pub fn export(&self) -> String {
        SrtExporter::export(self.store.list())
    }

    /// Сохраняет субтитры в каталог `dir` под именем файла экспорта
    pub async fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        if !self.can_export() {
            return Err(Error::new(ErrorType::EmptyTrack, "хранилище субтитров пусто"));
        }

        let path = dir.as_ref().join(&self.options.export_file_name);
        match SrtExporter::save_to_file(&path, self.store.list()).await {
            Ok(()) => Ok(path),
            Err(e) => log_error(&e, &format!("Ошибка при сохранении субтитров в файл: {}", path.display())),
        }
    }
}

impl Default for SubtitleEditor {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
