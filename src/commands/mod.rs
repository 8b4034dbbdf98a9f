//! Command implementations

pub mod lookup;
pub mod simple;
pub mod survey;

pub use lookup::{Query, QueryResult, run_query};
pub use simple::{GameSettings, run_simple};
pub use survey::{SurveyConfig, SurveyResult, run_survey};
