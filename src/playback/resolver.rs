use crate::cue::Cue;

/// Возвращает позицию активного субтитра в момент `time`
///
/// Выбирается первый в порядке хранилища субтитр, для которого
/// `start_time <= time <= end_time`. При перекрытии побеждает более ранняя
/// позиция, а не более раннее время начала.
pub fn resolve_index(cues: &[Cue], time: f64) -> Option<usize> {
    cues.iter().position(|cue| cue.contains(time))
}

/// Возвращает текст активного субтитра в момент `time`
pub fn resolve(cues: &[Cue], time: f64) -> Option<&str> {
    resolve_index(cues, time).map(|index| cues[index].text.as_str())
}
