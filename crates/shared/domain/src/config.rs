use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level service configuration shared across subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfigInner {
    pub deployment: DeploymentConfig,
    pub compute: ComputeConfig,
    pub llm: LlmConfig,
    pub ner: NerConfig,
    pub vocabulary: VocabularyConfig,
    pub terminology: TerminologyConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(flatten, default)]
    inner: Arc<ServiceConfigInner>,
}

impl Deref for ServiceConfig {
    type Target = ServiceConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ServiceConfig {
    fn deref_mut(&mut self) -> &mut ServiceConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Hosting-platform identity and secret-store entry names.
///
/// The `*_secret` fields carry the names under which credentials are
/// registered in the external secret manager. Live credentials never
/// appear in this struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub app_name: String,
    pub umls_secret: String,
    pub groq_secret: String,
    pub runtime_version: String,
}

/// Compute-tier lifecycle tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ComputeConfig {
    pub timeout_seconds: u64,
    pub scaledown_window_seconds: u64,
}

/// Hosted LLM selection, pacing, and generation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub rate_limit_delay_seconds: f64,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Biomedical named-entity-recognition model selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    pub model: String,
}

/// Standardized-terminology vocabulary locations and matching threshold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub source_path: PathBuf,
    pub container_path: PathBuf,
    pub fuzzy_threshold: f64,
}

/// Medical-terminology concept API endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminologyConfig {
    pub search_url: String,
    pub atoms_url_template: String,
    pub request_timeout_seconds: u64,
}

impl TerminologyConfig {
    /// Expands the atoms endpoint template for a concrete concept identifier.
    #[must_use]
    pub fn atoms_url(&self, cui: &str) -> String {
        self.atoms_url_template.replace("{cui}", cui)
    }
}

// --- Default ---

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            app_name: "ayurparam-service".to_owned(),
            umls_secret: "my-umls-secret".to_owned(),
            groq_secret: "groq-secret".to_owned(),
            runtime_version: "3.11".to_owned(),
        }
    }
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self { timeout_seconds: 1200, scaledown_window_seconds: 300 }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "qwen/qwen3-32b".to_owned(),
            rate_limit_delay_seconds: 0.5,
            temperature: 0.3,
            max_tokens: 1024,
        }
    }
}

impl Default for NerConfig {
    fn default() -> Self {
        Self { model: "en_core_sci_lg".to_owned() }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("who-ita/ita_terms_ascii.csv"),
            container_path: PathBuf::from("/app/ita_terms_ascii.csv"),
            fuzzy_threshold: 0.80,
        }
    }
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        Self {
            search_url: "https://uts-ws.nlm.nih.gov/rest/search/current".to_owned(),
            atoms_url_template: "https://uts-ws.nlm.nih.gov/rest/content/current/CUI/{cui}/atoms"
                .to_owned(),
            request_timeout_seconds: 10,
        }
    }
}
