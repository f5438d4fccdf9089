//! Pass-through exports
//!
//! The helper and the ledger transport belong to their own JS modules.
//! They are handed to JS callers unchanged so those callers only need to
//! import this package.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "stellarkit-js-utils")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = LedgerAPITransport)]
    static LEDGER_API_TRANSPORT: JsValue;
}

#[wasm_bindgen(module = "stellarkit-helper")]
extern "C" {
    #[wasm_bindgen(thread_local_v2, js_name = HelperImplementation)]
    static HELPER_IMPLEMENTATION: JsValue;
}

/// `LedgerAPITransport` from `stellarkit-js-utils`
#[wasm_bindgen(js_name = ledgerApiTransport)]
pub fn ledger_api_transport() -> JsValue {
    LEDGER_API_TRANSPORT.with(JsValue::clone)
}

/// `HelperImplementation` from `stellarkit-helper`
#[wasm_bindgen(js_name = helperImplementation)]
pub fn helper_implementation() -> JsValue {
    HELPER_IMPLEMENTATION.with(JsValue::clone)
}
