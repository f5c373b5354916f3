//! Server configuration, read from the environment at startup.

use crate::validation::ValidationPolicy;

/// Runtime configuration. Every field has a default, so the server starts
/// with no environment set.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (`CONTACT_BIND_HOST`, default `0.0.0.0`).
    pub bind_host: String,

    /// TCP port (`PORT`, default `8080`).
    pub port: u16,

    /// sqlx SQLite URL (`DATABASE_URL`, default `sqlite://contacts.db`).
    pub database_url: String,

    /// Pool size (`CONTACT_MAX_CONNECTIONS`, default: CPU count).
    pub max_connections: u32,

    /// Enforce length caps and email syntax (`CONTACT_STRICT_VALIDATION`).
    pub strict_validation: bool,

    /// Serve `/openapi.json` (`CONTACT_ENABLE_OPENAPI`, default `true`).
    pub enable_openapi: bool,

    /// `tracing` filter used when `RUST_LOG` is unset (`CONTACT_LOG`).
    pub log_level: String,

    /// Emit newline-delimited JSON logs (`CONTACT_LOG_JSON`).
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_owned(),
            port: 8080,
            database_url: "sqlite://contacts.db".to_owned(),
            max_connections: num_cpus::get() as u32,
            strict_validation: false,
            enable_openapi: true,
            log_level: "info".to_owned(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to [`Config::default`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            bind_host: lookup("CONTACT_BIND_HOST").unwrap_or(defaults.bind_host),
            port: parse_or(lookup("PORT"), defaults.port),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(lookup("CONTACT_MAX_CONNECTIONS"), defaults.max_connections),
            strict_validation: flag_or(lookup("CONTACT_STRICT_VALIDATION"), defaults.strict_validation),
            enable_openapi: flag_or(lookup("CONTACT_ENABLE_OPENAPI"), defaults.enable_openapi),
            log_level: lookup("CONTACT_LOG").unwrap_or(defaults.log_level),
            log_json: flag_or(lookup("CONTACT_LOG_JSON"), defaults.log_json),
        }
    }

    /// Host and port for `TcpListener::bind`; the host may be a name or an IPv6 literal.
    pub fn listen_target(&self) -> (&str, u16) {
        (self.bind_host.as_str(), self.port)
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        if self.strict_validation {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Required
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn flag_or(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim) {
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") => true,
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
        _ => default,
    }
}
