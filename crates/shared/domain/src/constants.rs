//! Canonical configuration key names and logical secret names.
//!
//! Keys use the dotted `section.field` form, matching both the structure of
//! [`crate::config::ServiceConfig`] and the `AYUR__SECTION__FIELD` shape of
//! environment overrides.

// -- deployment --

/// Logical name under which the service registers with its hosting platform.
pub const APP_NAME: &str = "deployment.app_name";
/// Secret-store entry holding the terminology-API credentials.
pub const UMLS_SECRET: &str = "deployment.umls_secret";
/// Secret-store entry holding the LLM-provider credentials.
pub const GROQ_SECRET: &str = "deployment.groq_secret";
/// Version tag used when building deployment images.
pub const RUNTIME_VERSION: &str = "deployment.runtime_version";

// -- compute tier --

/// Max wall-clock seconds a compute unit may run before forced termination.
pub const COMPUTE_TIMEOUT: &str = "compute.timeout_seconds";
/// Seconds of inactivity before a compute unit is released.
pub const COMPUTE_SCALEDOWN_WINDOW: &str = "compute.scaledown_window_seconds";

// -- LLM --

/// Hosted model variant to invoke.
pub const LLM_MODEL: &str = "llm.model";
/// Minimum seconds between sequential provider calls.
pub const LLM_RATE_LIMIT_DELAY: &str = "llm.rate_limit_delay_seconds";
/// Sampling randomness (0.0 = deterministic).
pub const LLM_TEMPERATURE: &str = "llm.temperature";
/// Upper bound on generated output length.
pub const LLM_MAX_TOKENS: &str = "llm.max_tokens";

// -- NER --

/// NLP model to load for biomedical entity extraction.
pub const NER_MODEL: &str = "ner.model";

// -- vocabulary --

/// Terminology CSV location relative to the build context.
pub const VOCABULARY_SOURCE_PATH: &str = "vocabulary.source_path";
/// Terminology CSV location inside the deployed execution environment.
pub const VOCABULARY_CONTAINER_PATH: &str = "vocabulary.container_path";
/// Minimum similarity score for accepting a vocabulary match.
pub const VOCABULARY_FUZZY_THRESHOLD: &str = "vocabulary.fuzzy_threshold";

// -- terminology API --

/// Base URL for concept search.
pub const TERMINOLOGY_SEARCH_URL: &str = "terminology.search_url";
/// URL template (with a `{cui}` placeholder) for fetching concept atoms.
pub const TERMINOLOGY_ATOMS_URL_TEMPLATE: &str = "terminology.atoms_url_template";
/// Max wall-clock seconds to wait for a terminology-API response.
pub const TERMINOLOGY_REQUEST_TIMEOUT: &str = "terminology.request_timeout_seconds";

// -- logical secrets --

/// Logical name for the terminology-API credentials.
pub const SECRET_UMLS: &str = "umls";
/// Logical name for the LLM-provider credentials.
pub const SECRET_GROQ: &str = "groq";
