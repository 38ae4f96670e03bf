mod fixtures;
pub mod tracing;

pub use fixtures::{fixture, temp_log};
pub use self::tracing::{CapturedEvent, init_test_tracing};
