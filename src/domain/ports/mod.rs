//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod file_enumerator;
pub mod notifier;
pub mod report_sink;

pub use clock::{Clock, FixedClock};
pub use file_enumerator::{FileEnumerator, MemoryEnumerator};
pub use notifier::Notifier;
pub use report_sink::ReportSink;
