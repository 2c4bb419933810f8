pub mod actions;
pub mod clock;
pub mod directory;
pub mod dispatch;
pub mod fleet;
pub mod grid;
pub mod records;
pub mod runner;
pub mod scenario;
pub mod session;
pub mod systems;
pub mod telemetry;
pub mod telemetry_export;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
