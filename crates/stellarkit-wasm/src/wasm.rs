//! WASM bindings for JavaScript interop

use crate::dom::{self, DomHost};
use crate::pages::{default_pages, page_for_key, JsPage};
use log::{debug, error, warn};
use std::cell::RefCell;
use std::sync::Once;
use stellarkit_core::{
    Bootstrap, Error, HistoryMode, Host, RootConfig, Router, RouterOptions, StartOutcome,
};
use wasm_bindgen::prelude::*;

/// Id of the optional `<script type="application/json">` root config block
pub const CONFIG_ELEMENT_ID: &str = "app-config";

thread_local! {
    static BOOTSTRAP: RefCell<Bootstrap<DomHost>> = RefCell::new(Bootstrap::new(
        DomHost,
        Router::app(RouterOptions::default()),
        root_config(),
        default_pages(),
    ));
}

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
    });
}

/// App root options, overlaid with the page's config block if it has one
fn root_config() -> RootConfig {
    let app = RootConfig::app();
    let Ok(block) = dom::element(CONFIG_ELEMENT_ID) else {
        return app;
    };
    let Some(json) = block.text_content() else {
        return app;
    };
    match RootConfig::from_json(&json) {
        Ok(overrides) => app.overlay(overrides),
        Err(err) => {
            warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err);
            app
        }
    }
}

fn to_js(err: Error) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Run `f` on the bootstrap; fails instead of panicking on re-entry
fn with_bootstrap<R>(f: impl FnOnce(&mut Bootstrap<DomHost>) -> R) -> Result<R, JsValue> {
    init_logging();
    BOOTSTRAP.with(|cell| {
        let mut boot = cell
            .try_borrow_mut()
            .map_err(|_| to_js(Error::Host("navigation already in progress".to_string())))?;
        Ok(f(&mut boot))
    })
}

fn listen_for_navigation(mode: HistoryMode) -> Result<(), JsValue> {
    let window = dom::window().map_err(to_js)?;
    let event = match mode {
        HistoryMode::Hash => "hashchange",
        HistoryMode::History => "popstate",
    };

    let on_change = Closure::<dyn FnMut()>::new(|| {
        let result = with_bootstrap(|boot| boot.sync().map(|_| ()));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(err)) => error!("navigation failed: {}", err),
            Err(err) => error!("navigation failed: {}", dom::describe(&err)),
        }
    });
    window.add_event_listener_with_callback(event, on_change.as_ref().unchecked_ref())?;
    // Lives as long as the page
    on_change.forget();
    debug!("listening for {}", event);
    Ok(())
}

/// Mount the app into `#app` if the document has one
///
/// Without the element this does nothing, so the module can be loaded on
/// pages that only want the re-exported utilities. Calling it again after a
/// mount does nothing either. Page failures during the first render are
/// thrown to the caller.
#[wasm_bindgen(js_name = start)]
pub fn start() -> Result<(), JsValue> {
    let (outcome, mode) = with_bootstrap(|boot| {
        let outcome = boot.start();
        (outcome, boot.router().mode())
    })?;

    match outcome {
        Ok(StartOutcome::Mounted) => listen_for_navigation(mode),
        Ok(StartOutcome::NoAnchor | StartOutcome::AlreadyMounted) => Ok(()),
        Err(err) => {
            // Mounted even though the first render failed
            listen_for_navigation(mode)?;
            Err(to_js(err))
        }
    }
}

/// Navigate to a route path, recording a history entry
#[wasm_bindgen]
pub fn navigate(path: &str) -> Result<(), JsValue> {
    with_bootstrap(|boot| boot.push(path).map(|_| ()))?.map_err(to_js)
}

/// Render a page with `render(anchor, pageKey, routeName, params)` from now on
#[wasm_bindgen(js_name = registerPage)]
pub fn register_page(key: &str, render: js_sys::Function) -> Result<(), JsValue> {
    let page = page_for_key(key).map_err(to_js)?;
    with_bootstrap(|boot| boot.register_page(page, Box::new(JsPage::new(page, render))))
}

/// `[[name, href], ...]` for every named page, in table order
#[wasm_bindgen]
pub fn routes() -> Result<js_sys::Array, JsValue> {
    with_bootstrap(|boot| {
        let router = boot.router();
        let here = boot.host().location();
        router
            .table()
            .named_routes()
            .into_iter()
            .map(|(name, path)| {
                let pair = js_sys::Array::new();
                pair.push(&JsValue::from_str(name));
                pair.push(&JsValue::from_str(&router.href(&here, path)));
                pair
            })
            .collect()
    })
}

/// Effective path of the current route, once mounted
#[wasm_bindgen(js_name = currentPath)]
pub fn current_path() -> Result<Option<String>, JsValue> {
    with_bootstrap(|boot| {
        boot.app()
            .and_then(|app| app.current())
            .map(|route| route.path.clone())
    })
}
