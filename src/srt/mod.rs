pub mod exporter;
pub mod timecode;

pub use exporter::{SrtExporter, SRT_EXTENSION, SRT_FILE_NAME, SRT_MIME_TYPE};
pub use timecode::{format_millis, format_timestamp, to_millis, try_format_timestamp};
