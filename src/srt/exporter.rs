use crate::cue::Cue;
use crate::error::Result;
use crate::logging::{log_debug, log_info};
use crate::srt::timecode::format_timestamp;
use std::io::Write;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Имя файла экспорта по умолчанию
pub const SRT_FILE_NAME: &str = "subtitles.srt";
/// Расширение файла SubRip
pub const SRT_EXTENSION: &str = "srt";
/// MIME-тип экспортируемого файла
pub const SRT_MIME_TYPE: &str = "text/plain";

/// Экспорт субтитров в формат SubRip
pub struct SrtExporter;

impl SrtExporter {
    /// Сериализует субтитры в текст SRT
    ///
    /// Блоки нумеруются с 1 по возрастанию времени начала. Исходный порядок
    /// не меняется; субтитры с одинаковым началом сохраняют порядок
    /// добавления.
    pub fn export(cues: &[Cue]) -> String {
        Self::sorted(cues)
            .iter()
            .enumerate()
            .map(|(index, cue)| Self::format_block(index + 1, cue))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Записывает текст SRT в любой приемник, реализующий Write
    pub fn write_to<W: Write>(writer: &mut W, cues: &[Cue]) -> Result<()> {
        writer.write_all(Self::export(cues).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Сохраняет субтитры в файл SRT
    pub async fn save_to_file<P: AsRef<Path>>(path: P, cues: &[Cue]) -> Result<()> {
        let content = Self::export(cues);
        let path = path.as_ref();

        let mut file = File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        log_info(&format!(
            "Экспортировано субтитров: {} в файл {}",
            cues.len(),
            path.display()
        ));
        Ok(())
    }

    /// Возвращает копию субтитров, устойчиво отсортированную по началу
    fn sorted(cues: &[Cue]) -> Vec<&Cue> {
        let mut sorted: Vec<&Cue> = cues.iter().collect();
        sorted.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        log_debug(&format!("Подготовлено к экспорту субтитров: {}", sorted.len()));
        sorted
    }

    /// Формирует один блок SRT
    fn format_block(sequence: usize, cue: &Cue) -> String {
        format!(
            "{}\n{} --> {}\n{}\n",
            sequence,
            format_timestamp(cue.start_time),
            format_timestamp(cue.end_time),
            cue.text
        )
    }
}
