pub mod data;
pub mod gas;
pub mod progress;
pub mod safety;

pub use data::{DataExample, DataMode};
pub use gas::GasQuote;
pub use progress::PathProgress;
pub use safety::SafetyScore;
