//! Email template rendering.
//!
//! This module provides:
//! - Placeholder substitution for {{variable}} tokens in template text
//! - An opt-in escaping policy for values substituted into HTML
//! - Sample event data and a bundled demo template for manual testing
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use mailsmith::template::substitute;
//!
//! let mut values = HashMap::new();
//! values.insert("name".to_string(), "World".to_string());
//!
//! assert_eq!(substitute("Hello {{name}}!", &values), "Hello World!");
//! ```

mod escape;
mod samples;
mod substitution;

pub use escape::{escape_html, EscapePolicy};
pub use samples::{sample_event_values, EVENT_ANNOUNCEMENT_HTML};
pub use substitution::{placeholders, substitute, substitute_with};
