pub mod edit;
pub mod models;

pub use edit::{CueEdit, CueField, EditEvent, EditValue};
pub use models::{Cue, CueStore, DEFAULT_CUE_DURATION};
