//! Core types and traits for the AI website QA audit service.
//!
//! Wire DTOs use camelCase field names for compatibility with the dashboard
//! client and with the JSON structure the model is instructed to emit.

mod dto;
mod traits;

pub use dto::*;
pub use traits::*;
