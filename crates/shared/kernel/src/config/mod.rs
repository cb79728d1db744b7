use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

pub mod registry;
pub mod secrets;

/// Custom error type for the configuration surface.
///
/// Every variant is permanent: a failure here is a build or deployment
/// defect, not a transient condition. Callers must abort, not retry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failure in the file/environment loading layer.
    #[error("Config error{}: {source}", format_context(.context))]
    Config {
        #[source]
        source: config::ConfigError,
        context: Option<Cow<'static, str>>,
    },

    /// A lookup used a key outside the fixed schema.
    #[error("Unknown configuration key{}: {key}", format_context(.context))]
    UnknownKey { key: String, context: Option<Cow<'static, str>> },

    /// A lookup used a logical secret name that is not registered.
    #[error("Unknown secret{}: {name}", format_context(.context))]
    UnknownSecret { name: String, context: Option<Cow<'static, str>> },
}

impl ConfigError {
    fn with_context(self, context: Cow<'static, str>) -> Self {
        match self {
            Self::Config { source, .. } => Self::Config { source, context: Some(context) },
            Self::UnknownKey { key, .. } => Self::UnknownKey { key, context: Some(context) },
            Self::UnknownSecret { name, .. } => {
                Self::UnknownSecret { name, context: Some(context) }
            }
        }
    }
}

impl From<config::ConfigError> for ConfigError {
    fn from(source: config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

/// Adds `.context(...)` to results that convert into [`ConfigError`].
pub trait ConfigErrorExt<T> {
    /// Attaches a static context string to the error, replacing any previous one.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|err| err.with_context(context.into()))
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `service.toml`). If no path is provided, it defaults to `"service"`.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `AYUR__`.
///    Nested structures are accessed using double underscores (e.g., `AYUR__LLM__MODEL` maps to `llm.model`).
///
/// The schema defaults (see `ayur_domain::config`) remain the canonical
/// values; the file and environment layers only override what they name.
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source. Defaults to the `service` file in the current working directory.
///
/// # Returns
/// * `Ok(T)`: The successfully populated configuration object.
/// * `Err(ConfigError)`: If the file is missing, the environment variables are malformed, or deserialization fails.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
///
/// # Example
/// ```rust
/// use ayur_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     max_tokens: u32,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("service"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("AYUR")
                .separator("__")
                .convert_case(config::Case::Snake),  // Env var overrides (e.g., AYUR__LLM__MODEL)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
