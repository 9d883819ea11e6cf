//! Runtime configuration shared by handlers
//!
//! Loaded by the binary from flags and environment:
//! - `CONTACTDESK_ENV`: `development` or `production` (default)
//! - `CONTACTDESK_TZ`: display timezone for the listing pages (default Asia/Tokyo)

use std::fmt;
use std::str::FromStr;

use chrono_tz::Tz;

/// Whether error responses may carry diagnostic detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown runtime mode '{0}' (expected development or production)")]
pub struct UnknownMode(String);

impl FromStr for RuntimeMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(UnknownMode(other.to_owned())),
        }
    }
}

/// Handler-facing configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: RuntimeMode,
    /// Timezone used when rendering timestamps in HTML pages
    pub display_tz: Tz,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::default(),
            display_tz: chrono_tz::Asia::Tokyo,
        }
    }
}
