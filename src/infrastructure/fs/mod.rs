//! File System Implementations
//!
//! Concrete implementations of the FileEnumerator port plus atomic writes
//! shared by the report sinks.

mod atomic;
mod walk;

pub use atomic::atomic_write;
pub use walk::WalkEnumerator;
