// WASM bindings for maildot.
//
// Provides a `WasmMaildot` class exported via wasm-bindgen that wraps the
// `VariantSession` from maildot-gen, so a browser host gets the whole
// interactive lifecycle (generate, paged results, touched flag) from one
// object. Page objects cross the boundary via serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const maildot = new WasmMaildot();
//   maildot.generate("a.bc@gmail.com"); // => 4
//   maildot.total();                    // => 4
//   maildot.variants();                 // => ["abc@gmail.com", ...]
//   maildot.currentPage();              // => { page: 0, pageCount: 1, total: 4, items: [...] }
//   maildot.nextPage();                 // => false (already on the last page)
//   maildot.lastError();                // => undefined, or a reason string
//   maildot.check("a.b@x.com");         // => "ab@x.com"
//   maildot.count("abcdefgh@x");        // => 128n
//   maildot.terminate();                // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use maildot_gen::VariantSession;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of one display page of variants.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsPage {
    /// Zero-based page index.
    page: usize,
    /// Total number of pages at the current page size.
    page_count: usize,
    /// Total number of variants across all pages.
    total: usize,
    /// The variants on this page, in generation order.
    items: Vec<String>,
}

// ============================================================================
// WasmMaildot
// ============================================================================

/// Dotted-address expansion session for WebAssembly hosts.
///
/// Wraps an interactive session: each `generate` call replaces the result
/// set and resets the page cursor, matching what an input-field-plus-button
/// UI expects.
#[wasm_bindgen]
pub struct WasmMaildot {
    session: VariantSession,
}

#[wasm_bindgen]
impl WasmMaildot {
    /// Create a new session with the default policy (local-part ceiling 20,
    /// page size 50).
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmMaildot {
        WasmMaildot {
            session: VariantSession::new(),
        }
    }

    /// Expand every dotted variant of `input`, replacing previous results.
    ///
    /// Returns the number of variants produced; zero means the input was
    /// rejected (see `lastError`) or had no valid local-part.
    pub fn generate(&mut self, input: &str) -> usize {
        self.session.set_input(input);
        self.session.generate()
    }

    /// Total number of variants in the last result set.
    pub fn total(&self) -> usize {
        self.session.total()
    }

    /// Whether `generate` has been called at least once. Lets a host tell
    /// "no results yet" apart from "invalid input".
    pub fn touched(&self) -> bool {
        self.session.touched()
    }

    /// Why the last `generate` produced nothing, or `undefined` if it
    /// succeeded.
    #[wasm_bindgen(js_name = "lastError")]
    pub fn last_error(&self) -> Option<String> {
        self.session.last_error().map(|e| e.to_string())
    }

    /// All variants of the last result set, in generation order
    /// (dot-free form first).
    pub fn variants(&self) -> Vec<String> {
        self.session.results().as_slice().to_vec()
    }

    /// One display page by index, without moving the page cursor.
    ///
    /// Returns an object with fields `page`, `pageCount`, `total`, `items`.
    pub fn page(&self, page: usize) -> Result<JsValue, JsError> {
        let results = self.session.results();
        let js_page = JsPage {
            page,
            page_count: results.page_count(self.session.page_size()),
            total: results.len(),
            items: results.page(page, self.session.page_size()).to_vec(),
        };
        serde_wasm_bindgen::to_value(&js_page).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The page under the session cursor.
    #[wasm_bindgen(js_name = "currentPage")]
    pub fn current_page(&self) -> Result<JsValue, JsError> {
        self.page(self.session.page())
    }

    /// Advance the page cursor, clamped at the last page. Returns whether
    /// the cursor moved.
    #[wasm_bindgen(js_name = "nextPage")]
    pub fn next_page(&mut self) -> bool {
        self.session.next_page()
    }

    /// Move the page cursor back, clamped at the first page. Returns
    /// whether the cursor moved.
    #[wasm_bindgen(js_name = "prevPage")]
    pub fn prev_page(&mut self) -> bool {
        self.session.prev_page()
    }

    /// Validate an address against the session policy and return its
    /// canonical (dot-free) form.
    pub fn check(&self, input: &str) -> Result<String, JsError> {
        self.session
            .handle()
            .check(input)
            .map(|address| address.canonical())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Count the variants of an address without materializing them.
    pub fn count(&self, input: &str) -> Result<u64, JsError> {
        self.session
            .handle()
            .count(input)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Forget input, results, and paging; keeps the configured policy.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    /// In practice, WASM memory is managed by the garbage collector
    /// (or FinalizationRegistry), but this method allows explicit cleanup.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the number of variants per display page.
    #[wasm_bindgen(js_name = "setPageSize")]
    pub fn set_page_size(&mut self, value: usize) {
        self.session.set_page_size(value);
    }

    /// Set the local-part length ceiling for expansion.
    #[wasm_bindgen(js_name = "setMaxLocalChars")]
    pub fn set_max_local_chars(&mut self, value: usize) {
        self.session.handle_mut().set_max_local_chars(value);
    }
}

impl Default for WasmMaildot {
    fn default() -> Self {
        Self::new()
    }
}
