mod directive;
mod error;
mod options;

pub use directive::UpdateDirective;
pub use error::UpdateError;
pub use options::{EngineOptions, FlatOptions};
