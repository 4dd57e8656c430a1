//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory walking and atomic writes
//! - `sinks/` - Tabular report output (CSV)
//! - `notify/` - Notification channels (outbox)
//! - `clock` - System clock

pub mod clock;
pub mod fs;
pub mod notify;
pub mod sinks;

// Re-export for convenience
pub use clock::SystemClock;
pub use fs::WalkEnumerator;
pub use notify::OutboxNotifier;
pub use sinks::CsvReportSink;
