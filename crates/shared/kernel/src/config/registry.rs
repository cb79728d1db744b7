//! Enumerable view over the configuration schema.
//! This provides a read-only, string-keyed snapshot for consumers that walk
//! the full surface (diagnostics, startup banners) instead of reading typed
//! fields directly.

use crate::config::ConfigError;
use ayur_domain::config::ServiceConfig;
use ayur_domain::constants;
use std::fmt;

/// Logical grouping of configuration entries.
///
/// Grouping is for documentation and ordering only; nothing is enforced
/// at runtime based on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Deployment,
    Model,
    RateLimit,
    Vocabulary,
    Network,
    Runtime,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::Model => "model",
            Self::RateLimit => "rate-limit",
            Self::Vocabulary => "vocabulary",
            Self::Network => "network",
            Self::Runtime => "runtime",
        }
    }
}

/// A configured scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(u64),
    Float(f64),
}

impl ConfigValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<u64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// A single named configuration entry.
#[derive(Debug, Clone)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub category: Category,
    pub value: ConfigValue,
}

/// Read-only snapshot of every entry in the configuration schema.
///
/// Built once at startup from the typed config; keys are unique and the
/// snapshot never changes afterwards, so clones can be handed to any
/// thread without synchronization.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    entries: Vec<ConfigEntry>,
}

impl ConfigRegistry {
    /// Snapshots the full schema from a typed config.
    #[must_use]
    pub fn new(cfg: &ServiceConfig) -> Self {
        use Category::{Deployment, Model, Network, RateLimit, Runtime, Vocabulary};
        use ConfigValue::{Float, Int, Str};

        let entries = vec![
            entry(constants::APP_NAME, Deployment, Str(cfg.deployment.app_name.clone())),
            entry(constants::UMLS_SECRET, Deployment, Str(cfg.deployment.umls_secret.clone())),
            entry(constants::GROQ_SECRET, Deployment, Str(cfg.deployment.groq_secret.clone())),
            entry(
                constants::RUNTIME_VERSION,
                Deployment,
                Str(cfg.deployment.runtime_version.clone()),
            ),
            entry(constants::COMPUTE_TIMEOUT, Runtime, Int(cfg.compute.timeout_seconds)),
            entry(
                constants::COMPUTE_SCALEDOWN_WINDOW,
                Runtime,
                Int(cfg.compute.scaledown_window_seconds),
            ),
            entry(constants::LLM_MODEL, Model, Str(cfg.llm.model.clone())),
            entry(constants::LLM_RATE_LIMIT_DELAY, RateLimit, Float(cfg.llm.rate_limit_delay_seconds)),
            entry(constants::LLM_TEMPERATURE, Model, Float(cfg.llm.temperature)),
            entry(constants::LLM_MAX_TOKENS, Model, Int(u64::from(cfg.llm.max_tokens))),
            entry(constants::NER_MODEL, Model, Str(cfg.ner.model.clone())),
            entry(
                constants::VOCABULARY_SOURCE_PATH,
                Vocabulary,
                Str(cfg.vocabulary.source_path.display().to_string()),
            ),
            entry(
                constants::VOCABULARY_CONTAINER_PATH,
                Vocabulary,
                Str(cfg.vocabulary.container_path.display().to_string()),
            ),
            entry(
                constants::VOCABULARY_FUZZY_THRESHOLD,
                Vocabulary,
                Float(cfg.vocabulary.fuzzy_threshold),
            ),
            entry(constants::TERMINOLOGY_SEARCH_URL, Network, Str(cfg.terminology.search_url.clone())),
            entry(
                constants::TERMINOLOGY_ATOMS_URL_TEMPLATE,
                Network,
                Str(cfg.terminology.atoms_url_template.clone()),
            ),
            entry(
                constants::TERMINOLOGY_REQUEST_TIMEOUT,
                Network,
                Int(cfg.terminology.request_timeout_seconds),
            ),
        ];

        Self { entries }
    }

    /// Looks up a full entry by its canonical key.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownKey`] for any key outside the fixed schema.
    pub fn entry(&self, key: &str) -> Result<&ConfigEntry, ConfigError> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or_else(|| ConfigError::UnknownKey { key: key.to_owned(), context: None })
    }

    /// Looks up a configured value by its canonical key.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownKey`] for any key outside the fixed schema.
    pub fn get(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.entry(key).map(|e| &e.value)
    }

    /// Iterates entries in schema order.
    pub fn iter(&self) -> std::slice::Iter<'_, ConfigEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(key: &'static str, category: Category, value: ConfigValue) -> ConfigEntry {
    ConfigEntry { key, category, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_canonical_key() {
        let registry = ConfigRegistry::new(&ServiceConfig::default());

        let model = registry.get(constants::LLM_MODEL).unwrap();
        assert_eq!(model.as_str(), Some("qwen/qwen3-32b"));

        let entry = registry.entry(constants::LLM_RATE_LIMIT_DELAY).unwrap();
        assert_eq!(entry.category, Category::RateLimit);
        assert_eq!(entry.value.as_float(), Some(0.5));
    }

    #[test]
    fn unknown_key_is_a_permanent_error() {
        let registry = ConfigRegistry::new(&ServiceConfig::default());

        let err = registry.get("llm.modle").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { ref key, .. } if key == "llm.modle"));
        assert!(err.to_string().contains("llm.modle"));
    }
}
