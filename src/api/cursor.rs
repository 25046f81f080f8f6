//! Pagination cursor state for the location-area listing.

// == Pagination Cursor ==
/// Forward/backward listing URLs, refreshed from every decoded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationCursor {
    base_url: String,
    next_url: Option<String>,
    prev_url: Option<String>,
}

impl PaginationCursor {
    // == Constructor ==
    /// Creates a cursor with no next or previous page, targeting `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            next_url: None,
            prev_url: None,
        }
    }

    // == Accessors ==
    /// The first-page listing URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `next` link from the last decoded page.
    pub fn next_url(&self) -> Option<&str> {
        self.next_url.as_deref()
    }

    /// The `previous` link from the last decoded page.
    pub fn prev_url(&self) -> Option<&str> {
        self.prev_url.as_deref()
    }

    // == Targets ==
    /// URL the next forward request targets; the base listing when unset.
    pub fn forward_url(&self) -> &str {
        self.next_url.as_deref().unwrap_or(&self.base_url)
    }

    /// URL the next backward request targets; the base listing when unset.
    pub fn backward_url(&self) -> &str {
        self.prev_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Returns true if the last decoded page had a `next` link.
    pub fn has_next(&self) -> bool {
        self.next_url.is_some()
    }

    /// Returns true if the last decoded page had a `previous` link.
    pub fn has_previous(&self) -> bool {
        self.prev_url.is_some()
    }

    // == Update ==
    /// Overwrites both cursors with those of the page just decoded.
    ///
    /// Empty strings count as absent.
    pub fn update(&mut self, next: Option<String>, previous: Option<String>) {
        self.next_url = next.filter(|url| !url.is_empty());
        self.prev_url = previous.filter(|url| !url.is_empty());
    }
}
