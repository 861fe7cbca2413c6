//! Core library components.

pub mod env;
pub mod launch;
pub mod resolve;
