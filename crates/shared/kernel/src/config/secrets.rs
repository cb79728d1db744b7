//! Secret-name indirection.
//!
//! Credentials live in the external secret manager; this module only maps
//! the logical names the codebase uses to the entry names registered in
//! that manager. Resolving an entry name to a live credential is the
//! secret manager's job and never happens here.

use crate::config::ConfigError;
use ayur_domain::config::DeploymentConfig;
use ayur_domain::constants::{SECRET_GROQ, SECRET_UMLS};

/// Maps logical secret names to secret-store entry names.
#[derive(Debug, Clone)]
pub struct SecretCatalog {
    entries: Vec<(&'static str, String)>,
}

impl SecretCatalog {
    /// Registers the logical secrets the service depends on.
    #[must_use]
    pub fn new(deployment: &DeploymentConfig) -> Self {
        Self {
            entries: vec![
                (SECRET_UMLS, deployment.umls_secret.clone()),
                (SECRET_GROQ, deployment.groq_secret.clone()),
            ],
        }
    }

    /// Returns the secret-store entry name registered for a logical secret.
    ///
    /// The returned string is an identifier for the external secret manager,
    /// never the credential itself.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownSecret`] if the logical name is not registered.
    pub fn name(&self, logical: &str) -> Result<&str, ConfigError> {
        self.entries
            .iter()
            .find(|(l, _)| *l == logical)
            .map(|(_, name)| name.as_str())
            .ok_or_else(|| ConfigError::UnknownSecret { name: logical.to_owned(), context: None })
    }

    /// Iterates `(logical name, entry name)` pairs, e.g. to request
    /// resolution of everything up front at startup.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(logical, name)| (*logical, name.as_str()))
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
