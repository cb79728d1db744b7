//! Kernel utilities for the service configuration surface.
//! Keep this crate lightweight; it re-exports ergonomic helpers for config loading,
//! registry lookup, and secret-name indirection.
//!
//! ## Config loading
//! ```rust,ignore
//! use ayur_kernel::config::load_config;
//! use ayur_kernel::domain::config::ServiceConfig;
//!
//! let cfg: ServiceConfig = load_config(Some("service")).unwrap();
//! ```
//!
//! ## Registry lookup
//! ```rust
//! use ayur_kernel::domain::config::ServiceConfig;
//! use ayur_kernel::domain::constants::LLM_MODEL;
//! use ayur_kernel::config::registry::ConfigRegistry;
//!
//! let registry = ConfigRegistry::new(&ServiceConfig::default());
//! assert!(registry.get(LLM_MODEL).is_ok());
//! ```

pub mod config;
pub mod prelude;

pub use ayur_domain as domain;
