pub mod config;
pub mod error;
pub mod gemini_service;
pub mod models;
pub mod query_service;

pub use config::{Credentials, RelayConfig};
pub use error::{ConfigError, UpstreamError};
pub use gemini_service::GeminiService;
pub use models::*;
pub use query_service::{render_answer, QueryService, NO_ANSWER};
