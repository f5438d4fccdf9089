//! Application configuration
//!
//! The base configuration (anchor selector + router) is merged once with the
//! root unit's configuration. Root fields win on conflict.

use crate::location::HistoryMode;
use crate::router::Router;
use crate::{Result, ANCHOR_ID};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Root unit options
///
/// Unknown keys land in `extra` and survive the merge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    /// Mount selector override, e.g. `#root`
    pub el: Option<String>,
    /// Root unit name
    pub name: Option<String>,
    /// History mode override, `"hash"` or `"history"`
    pub mode: Option<HistoryMode>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RootConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options of the application's own root unit
    pub fn app() -> Self {
        Self::new().name("App")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn el(mut self, selector: impl Into<String>) -> Self {
        self.el = Some(selector.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mode(mut self, mode: HistoryMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Overlay `other` onto `self`, `other` winning
    pub fn overlay(mut self, other: RootConfig) -> Self {
        if other.el.is_some() {
            self.el = other.el;
        }
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        self.extra.extend(other.extra);
        self
    }
}

/// Bootstrap-provided configuration
#[derive(Debug)]
pub struct BaseConfig {
    pub el: String,
    pub router: Router,
    pub extra: Map<String, Value>,
}

impl BaseConfig {
    /// `el` is `#` + [`ANCHOR_ID`]
    pub fn new(router: Router) -> Self {
        Self {
            el: format!("#{ANCHOR_ID}"),
            router,
            extra: Map::new(),
        }
    }
}

/// Merged, immutable configuration of the application instance
#[derive(Debug)]
pub struct AppConfig {
    el: String,
    name: Option<String>,
    router: Router,
    extra: Map<String, Value>,
}

impl AppConfig {
    /// Last-write-wins union: root fields override base fields
    pub fn merge(base: BaseConfig, root: &RootConfig) -> Self {
        let mut extra = base.extra;
        extra.extend(root.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        let router = match root.mode {
            Some(mode) => base.router.with_mode(mode),
            None => base.router,
        };

        Self {
            el: root.el.clone().unwrap_or(base.el),
            name: root.name.clone(),
            router,
            extra,
        }
    }

    /// Mount selector
    pub fn el(&self) -> &str {
        &self.el
    }

    /// Element id from the selector
    pub fn anchor_id(&self) -> &str {
        self.el.strip_prefix('#').unwrap_or(&self.el)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_root_wins() {
        let mut base = BaseConfig::new(Router::default());
        base.extra.insert("theme".into(), json!("light"));
        base.extra.insert("network".into(), json!("testnet"));

        let root = RootConfig::new()
            .el("#root")
            .name("App")
            .extra("theme", "dark");

        let config = AppConfig::merge(base, &root);
        assert_eq!(config.el(), "#root");
        assert_eq!(config.anchor_id(), "root");
        assert_eq!(config.name(), Some("App"));
        assert_eq!(config.get("theme"), Some(&json!("dark")));
        assert_eq!(config.get("network"), Some(&json!("testnet")));
    }

    #[test]
    fn test_merge_keeps_base_when_root_silent() {
        let config = AppConfig::merge(BaseConfig::new(Router::default()), &RootConfig::new());
        assert_eq!(config.el(), "#app");
        assert_eq!(config.anchor_id(), ANCHOR_ID);
        assert_eq!(config.name(), None);
    }

    #[test]
    fn test_from_json_collects_extra() {
        let root = RootConfig::from_json(
            r##"{"el":"#wallet","mode":"history","horizon":"https://horizon.example"}"##,
        )
        .unwrap();
        assert_eq!(root.el.as_deref(), Some("#wallet"));
        assert_eq!(root.mode, Some(HistoryMode::History));
        assert_eq!(root.extra.get("horizon"), Some(&json!("https://horizon.example")));
    }

    #[test]
    fn test_root_mode_overrides_router() {
        let base = BaseConfig::new(Router::app(
            crate::RouterOptions::new().mode(HistoryMode::Hash),
        ));
        let root = RootConfig::app().mode(HistoryMode::History);

        let config = AppConfig::merge(base, &root);
        assert_eq!(config.router().mode(), HistoryMode::History);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(RootConfig::from_json(r#"{"mode":"abstract"}"#).is_err());
        assert!(matches!(
            RootConfig::from_json("{not json"),
            Err(crate::Error::Config(_))
        ));
    }

    #[test]
    fn test_overlay() {
        let merged = RootConfig::app()
            .mode(HistoryMode::Hash)
            .overlay(RootConfig::new().extra("network", "public"));
        assert_eq!(merged.name.as_deref(), Some("App"));
        assert_eq!(merged.mode, Some(HistoryMode::Hash));
        assert_eq!(merged.extra.get("network"), Some(&json!("public")));
    }
}
