//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is compiled:
//! - `REGISTER_API_BASE`: origin of the auth API (default: same origin)
//! - `REGISTER_TOAST_TIMEOUT_MS`: toast lifetime, default 4000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOAST_TIMEOUT_MS: u64 = 4000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API paths, without a trailing slash. Empty means same origin.
    pub api_base: String,
    pub toast_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("REGISTER_API_BASE"),
            option_env!("REGISTER_TOAST_TIMEOUT_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, toast_timeout_ms: Option<&str>) -> Self {
        Self {
            api_base: parse_api_base(api_base),
            toast_timeout_ms: parse_timeout_ms(toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS),
        }
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned()
}

fn parse_timeout_ms(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default)
}
