pub mod log_entry;
pub mod taxonomy;
pub mod workout;

pub use log_entry::{LogEntry, LogFilter};
pub use taxonomy::{Category, Target, TaxonomyParseError, WorkoutType};
pub use workout::Workout;
