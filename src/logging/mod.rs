//! Structured logging helpers
//!
//! Tracing is configured once at startup (see [`crate::cli::serve::init_tracing`]).
//! Every dashboard pass runs inside a span tagged with a run ID from
//! [`generate_run_id`].

use uuid::Uuid;

use crate::config::LoggingConfig;

/// Build filter directives string from LoggingConfig
///
/// The result carries the base level followed by any component-specific
/// levels, each scoped under the `hospital` crate.
///
/// # Examples
///
/// ```
/// use hospital::config::logging::{LogFormat, LoggingConfig};
/// use hospital::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("pipeline".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
/// };
///
/// assert_eq!(build_filter_directives(&config), "info,hospital::pipeline=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",hospital::{}={}", component, level));
        }
    }

    filter_str
}

/// Generate a new correlation ID for one dashboard pass (UUID v4)
///
/// # Examples
///
/// ```
/// use hospital::logging::generate_run_id;
///
/// let run_id = generate_run_id();
/// assert_eq!(run_id.len(), 36);
/// ```
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}
