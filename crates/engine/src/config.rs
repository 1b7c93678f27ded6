//! Engine configuration

use serde::{Deserialize, Serialize};

/// Tunables shared by the engines
///
/// ```
/// use courier_engine::EngineConfig;
///
/// let config = EngineConfig::default().with_default_limit(25);
/// assert_eq!(config.default_limit, 25);
/// assert_eq!(config.default_page, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Page served when a query names none (or page 0)
    pub default_page: u32,
    /// Page size used when a query names none (or limit 0)
    pub default_limit: u32,
}

impl EngineConfig {
    /// Set the default page size; zero is ignored
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_limit: 10,
        }
    }
}
