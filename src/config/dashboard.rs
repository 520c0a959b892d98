//! Dashboard page configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Page heading and document title
    pub title: String,
    /// Fixed seed for sample data. Unset means fresh random data per pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Hospital Dashboard".to_string(),
            seed: None,
        }
    }
}
