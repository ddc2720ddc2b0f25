pub mod analyzer;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod investment;
pub mod scenario;
pub mod schedule;
pub mod types;

// re-export key types
pub use analyzer::{AnalysisView, PreclosureAnalyzer};
pub use config::LoanParameters;
pub use decimal::{Money, Rate};
pub use errors::{Result, ScenarioError};
pub use scenario::{calculate, CalculationResult, PreclosureSnapshot};
pub use schedule::{calculate_emi, AmortizationSchedule, ScheduleEntry};
pub use types::Recommendation;

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
