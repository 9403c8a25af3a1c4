pub mod resolver;
pub mod sync;

pub use resolver::{resolve, resolve_index};
pub use sync::{OverlayCallback, PlaybackSync};
