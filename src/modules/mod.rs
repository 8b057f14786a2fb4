pub mod auth;
pub mod error;
pub mod files;
pub mod logging;

pub use auth::{require_auth_token, resolve_auth_token, AUTH_TOKEN_VAR};
pub use error::{AuthError, FileOpsError, TemplateError};
pub use logging::{init_tracing, Logger};
