use axum::http::HeaderValue;
use chrono::NaiveTime;

use crate::errors::AppError;
use crate::responder::clock::render_time;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
pub const DEFAULT_TIME_FORMAT: &str = "%I:%M %p";

/// Runtime settings, read from the environment (and `.env` in development).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Browser origin allowed to call the API. `None` allows any origin.
    pub cors_allow_origin: Option<HeaderValue>,
    pub max_body_bytes: usize,
    /// strftime pattern used when answering "what time is it".
    pub time_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allow_origin: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::invalid_config("PORT", &raw, e.to_string()))?,
            None => defaults.port,
        };

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(AppError::invalid_config("MAX_BODY_BYTES", &raw, "must be positive"))
                }
                Ok(n) => n,
                Err(e) => return Err(AppError::invalid_config("MAX_BODY_BYTES", &raw, e.to_string())),
            },
            None => defaults.max_body_bytes,
        };

        let time_format = lookup("TIME_FORMAT").unwrap_or(defaults.time_format);
        if render_time(NaiveTime::default(), &time_format).is_none() {
            return Err(AppError::invalid_config(
                "TIME_FORMAT",
                &time_format,
                "not a strftime pattern that can render a time of day",
            ));
        }

        let cors_allow_origin = match lookup("CORS_ALLOW_ORIGIN") {
            Some(raw) if !raw.trim().is_empty() => Some(
                HeaderValue::from_str(raw.trim())
                    .map_err(|e| AppError::invalid_config("CORS_ALLOW_ORIGIN", &raw, e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            cors_allow_origin,
            max_body_bytes,
            time_format,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
