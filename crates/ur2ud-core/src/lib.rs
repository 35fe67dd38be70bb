pub mod engine;
pub mod settings;
pub mod tables;

pub use engine::{transliterate, ScanState, Transliterator};
pub use settings::{Settings, SettingsError};
pub use tables::{Scheme, TableError, TableSet};
