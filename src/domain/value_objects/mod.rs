//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod period;
mod renewal_cycle;

pub use category::Category;
pub use period::Period;
pub use renewal_cycle::RenewalCycle;
