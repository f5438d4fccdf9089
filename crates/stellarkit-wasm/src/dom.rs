//! DOM-backed [`Host`]

use stellarkit_core::{BrowserLocation, Error, Host, Result, ScrollPosition};
use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

/// Host over the global `window`
///
/// Stateless: every call looks the window up again, so it is safe to
/// construct before the document has loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomHost;

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Host("no global window".to_string()))
}

/// Element by id, or a host error
pub(crate) fn element(id: &str) -> Result<Element> {
    window()?
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .ok_or_else(|| Error::Host(format!("no #{id} element")))
}

pub(crate) fn js_error(err: JsValue) -> Error {
    Error::Host(describe(&err))
}

/// Best-effort message of a thrown JS value
pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

impl Host for DomHost {
    fn has_anchor(&self, id: &str) -> bool {
        element(id).is_ok()
    }

    fn location(&self) -> BrowserLocation {
        let Ok(window) = window() else {
            return BrowserLocation::default();
        };
        let location = window.location();
        BrowserLocation {
            pathname: location.pathname().unwrap_or_else(|_| "/".to_string()),
            search: location.search().unwrap_or_default(),
            hash: location.hash().unwrap_or_default(),
        }
    }

    fn push_location(&self, href: &str) -> Result<()> {
        window()?
            .history()
            .map_err(js_error)?
            .push_state_with_url(&JsValue::NULL, "", Some(href))
            .map_err(js_error)
    }

    fn replace_location(&self, href: &str) -> Result<()> {
        window()?
            .history()
            .map_err(js_error)?
            .replace_state_with_url(&JsValue::NULL, "", Some(href))
            .map_err(js_error)
    }

    fn scroll_to(&self, position: ScrollPosition) -> Result<()> {
        let window = window()?;
        let x = match position.x {
            Some(x) => x,
            None => window.page_x_offset().map_err(js_error)?,
        };
        window.scroll_to_with_x_and_y(x, position.y);
        Ok(())
    }
}
