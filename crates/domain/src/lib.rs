#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod activity;
pub mod description;
pub mod metrics;
pub mod parser;
pub mod set;

pub use activity::activity_metrics;
pub use description::parse_description;
pub use metrics::WorkoutMetrics;
pub use parser::parse_set_line;
pub use set::{LBS_PER_KG, Reps, RepsError, Set, Weight, WeightError};
