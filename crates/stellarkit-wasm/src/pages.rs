//! Browser page units
//!
//! Every page starts out as a [`Placeholder`]. JS replaces pages with real
//! renderers through `registerPage`.

use crate::dom::{describe, element, js_error};
use stellarkit_core::{CurrentRoute, Error, Page, PageRegistry, PageUnit, Result};
use wasm_bindgen::JsValue;

/// Writes the page's display name into the anchor
#[derive(Debug, Clone, Copy)]
pub struct Placeholder {
    page: Page,
}

impl Placeholder {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

impl PageUnit for Placeholder {
    fn activate(&self, anchor: &str, _route: &CurrentRoute) -> Result<()> {
        let el = element(anchor)?;
        el.set_attribute("data-page", self.page.key()).map_err(js_error)?;
        el.set_text_content(Some(self.page.display_name()));
        Ok(())
    }
}

/// Page rendered by a JS function `(anchor, pageKey, routeName, params) => void`
#[derive(Debug, Clone)]
pub struct JsPage {
    page: Page,
    render: js_sys::Function,
}

impl JsPage {
    pub fn new(page: Page, render: js_sys::Function) -> Self {
        Self { page, render }
    }
}

impl PageUnit for JsPage {
    fn activate(&self, anchor: &str, route: &CurrentRoute) -> Result<()> {
        let el = element(anchor)?;
        let params = js_sys::Object::new();
        for (name, value) in &route.params {
            js_sys::Reflect::set(&params, &JsValue::from_str(name), &JsValue::from_str(value))
                .map_err(js_error)?;
        }
        let name = route.name.as_deref().map_or(JsValue::NULL, JsValue::from_str);
        let args = js_sys::Array::new();
        args.push(&el);
        args.push(&JsValue::from_str(self.page.key()));
        args.push(&name);
        args.push(&params);
        self.render
            .apply(&JsValue::NULL, &args)
            .map(drop)
            .map_err(|err| Error::page(self.page, describe(&err)))
    }
}

/// Placeholder for every page
pub fn default_pages() -> PageRegistry {
    let mut pages = PageRegistry::new();
    for page in Page::ALL {
        pages.register(page, Placeholder::new(page));
    }
    pages
}

/// Page for a JS registration key
pub fn page_for_key(key: &str) -> Result<Page> {
    Page::from_key(key).ok_or_else(|| {
        let known: Vec<&str> = Page::ALL.iter().map(|p| p.key()).collect();
        Error::Host(format!("unknown page '{key}', expected one of {}", known.join(", ")))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_cover_all() {
        let pages = default_pages();
        assert_eq!(pages.len(), Page::ALL.len());
        assert!(Page::ALL.iter().all(|p| pages.contains(*p)));
    }

    #[test]
    fn test_page_for_key() {
        assert_eq!(page_for_key("ico").unwrap(), Page::IcoManager);
        let err = page_for_key("wallet").unwrap_err().to_string();
        assert!(err.contains("unknown page 'wallet'"));
        assert!(err.contains("buytoken"));
    }
}
