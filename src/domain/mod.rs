//! Domain Layer
//!
//! The compliance rule engine - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Category, Period, RenewalCycle)
//! - `entities/` - Scan entities (ClientFolder, Document, catalog, report)
//! - `policies/` - Business rules (classification, period parsing, staleness)
//! - `services/` - Matching and aggregation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Injected time** - The current period is always passed in
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
