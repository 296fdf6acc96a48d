//! Domain model (enumerations, verdicts, records, IDs, errors).

pub mod activity;
pub mod errors;
pub mod ids;
pub mod meal;
pub mod record;
pub mod verdict;

pub use activity::ActivityClass;
pub use errors::{CenaError, ErrorKind};
pub use ids::{DayId, MealId};
pub use meal::{CarbLevel, ProteinLevel, Quality};
pub use record::{DinnerInput, HistoryRecord, MealEntry};
pub use verdict::Verdict;
