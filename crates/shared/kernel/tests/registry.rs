use ayur_kernel::config::ConfigError;
use ayur_kernel::config::registry::{Category, ConfigRegistry, ConfigValue};
use ayur_kernel::domain::config::ServiceConfig;
use ayur_kernel::domain::constants as keys;

/// Scalar shape each schema key must resolve to.
enum Shape {
    Str,
    Int,
    Float,
}

fn schema() -> Vec<(&'static str, Category, Shape)> {
    vec![
        (keys::APP_NAME, Category::Deployment, Shape::Str),
        (keys::UMLS_SECRET, Category::Deployment, Shape::Str),
        (keys::GROQ_SECRET, Category::Deployment, Shape::Str),
        (keys::RUNTIME_VERSION, Category::Deployment, Shape::Str),
        (keys::COMPUTE_TIMEOUT, Category::Runtime, Shape::Int),
        (keys::COMPUTE_SCALEDOWN_WINDOW, Category::Runtime, Shape::Int),
        (keys::LLM_MODEL, Category::Model, Shape::Str),
        (keys::LLM_RATE_LIMIT_DELAY, Category::RateLimit, Shape::Float),
        (keys::LLM_TEMPERATURE, Category::Model, Shape::Float),
        (keys::LLM_MAX_TOKENS, Category::Model, Shape::Int),
        (keys::NER_MODEL, Category::Model, Shape::Str),
        (keys::VOCABULARY_SOURCE_PATH, Category::Vocabulary, Shape::Str),
        (keys::VOCABULARY_CONTAINER_PATH, Category::Vocabulary, Shape::Str),
        (keys::VOCABULARY_FUZZY_THRESHOLD, Category::Vocabulary, Shape::Float),
        (keys::TERMINOLOGY_SEARCH_URL, Category::Network, Shape::Str),
        (keys::TERMINOLOGY_ATOMS_URL_TEMPLATE, Category::Network, Shape::Str),
        (keys::TERMINOLOGY_REQUEST_TIMEOUT, Category::Network, Shape::Int),
    ]
}

#[test]
fn every_schema_key_resolves_with_declared_type_and_category() {
    let registry = ConfigRegistry::new(&ServiceConfig::default());
    let schema = schema();

    assert_eq!(registry.len(), schema.len());

    for (key, category, shape) in schema {
        let entry = registry.entry(key).unwrap();
        assert_eq!(entry.category, category, "category mismatch for {key}");
        let matches_shape = match shape {
            Shape::Str => entry.value.as_str().is_some(),
            Shape::Int => entry.value.as_int().is_some(),
            Shape::Float => entry.value.as_float().is_some(),
        };
        assert!(matches_shape, "type mismatch for {key}");
    }
}

#[test]
fn schema_keys_are_unique() {
    let registry = ConfigRegistry::new(&ServiceConfig::default());

    let mut keys: Vec<_> = registry.iter().map(|e| e.key).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), registry.len());
}

#[test]
fn repeated_reads_return_identical_values() {
    let registry = ConfigRegistry::new(&ServiceConfig::default());

    for entry in registry.iter() {
        let first = registry.get(entry.key).unwrap().clone();
        let second = registry.get(entry.key).unwrap();
        assert_eq!(&first, second, "value drifted for {}", entry.key);
    }
}

#[test]
fn canonical_tuning_values() {
    let registry = ConfigRegistry::new(&ServiceConfig::default());

    assert_eq!(registry.get(keys::VOCABULARY_FUZZY_THRESHOLD).unwrap().as_float(), Some(0.80));
    assert_eq!(registry.get(keys::LLM_RATE_LIMIT_DELAY).unwrap().as_float(), Some(0.5));
    assert_eq!(registry.get(keys::COMPUTE_TIMEOUT).unwrap().as_int(), Some(1200));
    assert_eq!(registry.get(keys::COMPUTE_SCALEDOWN_WINDOW).unwrap().as_int(), Some(300));
}

#[test]
fn undeclared_key_never_yields_a_substitute() {
    let registry = ConfigRegistry::new(&ServiceConfig::default());

    for bad in ["", "llm", "llm.model.extra", "deployment.password", "fuzzy_threshold"] {
        let err = registry.get(bad).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { .. }), "expected UnknownKey for {bad:?}");
    }
}

#[test]
fn category_labels_are_stable() {
    assert_eq!(Category::Deployment.as_str(), "deployment");
    assert_eq!(Category::Model.as_str(), "model");
    assert_eq!(Category::RateLimit.as_str(), "rate-limit");
    assert_eq!(Category::Vocabulary.as_str(), "vocabulary");
    assert_eq!(Category::Network.as_str(), "network");
    assert_eq!(Category::Runtime.as_str(), "runtime");
}

#[test]
fn display_renders_scalars_plainly() {
    assert_eq!(ConfigValue::Str("qwen/qwen3-32b".to_owned()).to_string(), "qwen/qwen3-32b");
    assert_eq!(ConfigValue::Int(1200).to_string(), "1200");
    assert_eq!(ConfigValue::Float(0.5).to_string(), "0.5");
}
