// Presentation state for interactive hosts.
//
// The engine itself is a pure function; everything an interactive host
// keeps between keystrokes lives here instead: the pending input, the last
// result set, the page cursor, and the touched flag that distinguishes
// "empty because the input was invalid" from "empty because nothing was
// requested yet". All of it resets the way a host expects: each generate
// replaces the results and jumps back to the first page.

use crate::handle::{ExpandError, MaildotHandle};
use crate::variant::VariantSet;

/// Default number of addresses per display page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Interactive host state around a [`MaildotHandle`].
#[derive(Debug)]
pub struct VariantSession {
    handle: MaildotHandle,
    /// The raw address text the host last supplied.
    input: String,
    /// Results of the last generate; empty until then.
    results: VariantSet,
    /// Why the last generate produced nothing, if it failed.
    error: Option<ExpandError>,
    /// Whether generate has run at least once.
    touched: bool,
    /// Zero-based page cursor into `results`.
    page: usize,
    page_size: usize,
}

impl VariantSession {
    /// Create a session with a default handle and page size.
    pub fn new() -> Self {
        Self::with_handle(MaildotHandle::new())
    }

    /// Create a session around a configured handle.
    pub fn with_handle(handle: MaildotHandle) -> Self {
        Self {
            handle,
            input: String::new(),
            results: VariantSet::new(),
            error: None,
            touched: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the pending input text. Does not expand anything.
    pub fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    /// The pending input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The owned handle, for policy-aware one-off queries.
    pub fn handle(&self) -> &MaildotHandle {
        &self.handle
    }

    /// Mutable access to the owned handle, for policy changes.
    pub fn handle_mut(&mut self) -> &mut MaildotHandle {
        &mut self.handle
    }

    /// Expand the pending input, replacing any previous results.
    ///
    /// Marks the session touched and resets the page cursor to the first
    /// page. On failure the results are cleared and the typed reason is
    /// kept for host messaging. Returns the number of variants produced.
    pub fn generate(&mut self) -> usize {
        self.touched = true;
        self.page = 0;
        match self.handle.expand(&self.input) {
            Ok(set) => {
                self.results = set;
                self.error = None;
            }
            Err(e) => {
                self.results = VariantSet::new();
                self.error = Some(e);
            }
        }
        self.results.len()
    }

    /// Whether generate has run at least once.
    pub fn touched(&self) -> bool {
        self.touched
    }

    /// Why the last generate produced nothing, if it failed.
    pub fn last_error(&self) -> Option<&ExpandError> {
        self.error.as_ref()
    }

    /// The last result set.
    pub fn results(&self) -> &VariantSet {
        &self.results
    }

    /// Total number of variants in the last result set.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// The zero-based current page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// The configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the page size and snap back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    /// Number of pages in the last result set.
    pub fn total_pages(&self) -> usize {
        self.results.page_count(self.page_size)
    }

    /// The addresses on the current page.
    pub fn current_items(&self) -> &[String] {
        self.results.page(self.page, self.page_size)
    }

    /// Advance one page, clamped at the last page. Returns `true` if the
    /// cursor moved.
    pub fn next_page(&mut self) -> bool {
        let last = self.total_pages().saturating_sub(1);
        if self.page < last {
            self.page += 1;
            return true;
        }
        false
    }

    /// Go back one page, clamped at the first page. Returns `true` if the
    /// cursor moved.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            return true;
        }
        false
    }

    /// Forget all state except the handle configuration.
    pub fn reset(&mut self) {
        self.input.clear();
        self.results = VariantSet::new();
        self.error = None;
        self.touched = false;
        self.page = 0;
    }
}

impl Default for VariantSession {
    fn default() -> Self {
        Self::new()
    }
}
