// Core rendering
pub mod template;

// Delivery
pub mod dispatch;

// Supporting modules
pub mod config;
pub mod error;

pub use error::{AppError, Result};
