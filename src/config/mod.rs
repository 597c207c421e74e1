mod settings;

pub use settings::{EmailConfig, EndpointConfig, Settings};
