//! Terminal rendering for the legajo binary

pub mod context;
pub mod json;
pub mod style;
pub mod views;
