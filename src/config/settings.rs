use serde::{Deserialize, Serialize};


/// Storage key the settings record lives under.
pub const SETTINGS_KEY: &str = "settings";


/// The persisted form state: the raw URL entries (placeholder included) and
/// the interval in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {

    #[serde(default)]
    pub urls: Vec<String>,

    #[serde(default)]
    pub time_between: f64,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            urls: vec![String::new()],
            time_between: 0.0,
        }
    }
}

impl PersistedSettings {
    pub fn new(urls: Vec<String>, time_between: f64) -> Self {
        Self { urls, time_between }
    }

    /// Bring a freshly loaded record back to what the form expects.
    ///
    /// Blank entries are dropped and one trailing placeholder is appended, so
    /// row positions line up with the validated playlist. An interval that is
    /// not a finite positive number is treated as unset.
    pub fn normalized(mut self) -> Self {
        self.urls.retain(|url| !url.is_empty());
        self.urls.push(String::new());
        if !self.time_between.is_finite() || self.time_between < 0.0 {
            self.time_between = 0.0;
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}
