//! Convenient re-exports for consumers of the configuration surface.

pub use crate::config::registry::{Category, ConfigEntry, ConfigRegistry, ConfigValue};
pub use crate::config::secrets::SecretCatalog;
pub use crate::config::{ConfigError, ConfigErrorExt, load_config};
pub use ayur_domain::config::ServiceConfig;
