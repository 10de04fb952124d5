use anyhow::{bail, Result};

pub const API_BASE_URL_VAR: &str = "LEAVEDESK_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: String,
}

impl RuntimeConfig {
    /// Reads `LEAVEDESK_API_BASE_URL` (after loading a `.env` file when one
    /// exists), falling back to the local default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            api_base_url: resolve_base_url(std::env::var(API_BASE_URL_VAR).ok())?,
        })
    }
}

fn resolve_base_url(raw: Option<String>) -> Result<String> {
    match raw {
        Some(value) => {
            let value = value.trim();
            if value.is_empty() {
                bail!("{} must not be empty when set", API_BASE_URL_VAR);
            }
            Ok(value.to_string())
        }
        None => Ok(DEFAULT_API_BASE_URL.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_base_url_defaults_when_unset() {
        assert_eq!(resolve_base_url(None).unwrap(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn resolve_base_url_trims_configured_value() {
        let url = resolve_base_url(Some("  https://hr.example.com/api \n".into())).unwrap();
        assert_eq!(url, "https://hr.example.com/api");
    }

    #[test]
    fn resolve_base_url_rejects_blank_value() {
        assert!(resolve_base_url(Some("   ".into())).is_err());
    }
}
