//! User-tunable settings, persisted as JSON in local storage.

use serde::{Deserialize, Serialize};

use crate::error::{PlaygroundError, Result};
use crate::state::SwipeThresholds;

pub const STORAGE_KEY: &str = "sp_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Degrees per arrow-key press in the keyboard fallback.
    pub tilt_step: f64,
    /// Scale from mouse movement (px) to fallback acceleration.
    pub motion_sensitivity: f64,
    pub swipe: SwipeThresholds,
    pub easy_password: String,
    /// Number of pages in the swipe carousel.
    pub page_count: usize,
    pub debug_log: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            tilt_step: 5.0,
            motion_sensitivity: 0.01,
            swipe: SwipeThresholds::default(),
            easy_password: "password".into(),
            page_count: 4,
            debug_log: false,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn storage() -> Result<web_sys::Storage> {
        let win = web_sys::window().ok_or(PlaygroundError::NoWindow)?;
        win.local_storage()
            .map_err(PlaygroundError::js)?
            .ok_or_else(|| PlaygroundError::Storage("localStorage is disabled".into()))
    }

    /// Stored config, or `None` when nothing has been saved yet.
    pub fn load() -> Result<Option<Self>> {
        let store = Self::storage()?;
        match store.get_item(STORAGE_KEY).map_err(PlaygroundError::js)? {
            Some(raw) => Ok(Some(Self::from_json(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Self::default(),
            Err(e) => {
                crate::util::cwarn(&format!("config: {e}; using defaults"));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let raw = self.to_json()?;
        Self::storage()?
            .set_item(STORAGE_KEY, &raw)
            .map_err(|e| PlaygroundError::Storage(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(
            PlaygroundConfig::from_json("{}").unwrap(),
            PlaygroundConfig::default()
        );
    }

    #[test]
    fn partial_json_overrides_named_fields_only() {
        let cfg =
            PlaygroundConfig::from_json(r#"{"tilt_step": 2.5, "swipe": {"max_time_ms": 500}}"#)
                .unwrap();
        assert_eq!(cfg.tilt_step, 2.5);
        assert_eq!(cfg.swipe.max_time_ms, 500.0);
        assert_eq!(cfg.swipe.min_distance, 50.0);
        assert_eq!(cfg.easy_password, "password");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = PlaygroundConfig::from_json("{tilt_step:").unwrap_err();
        assert!(matches!(err, PlaygroundError::Config(_)));
    }

    #[test]
    fn json_survives_a_save_cycle() {
        let cfg = PlaygroundConfig {
            page_count: 7,
            debug_log: true,
            ..Default::default()
        };
        let raw = cfg.to_json().unwrap();
        assert_eq!(PlaygroundConfig::from_json(&raw).unwrap(), cfg);
    }
}
