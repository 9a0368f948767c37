//! Visitor count entity.

/// Number of recorded visits for one page.
///
/// `page_id` is the primary key of the backing table. A page that has never
/// been visited reads as `count == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorCount {
    pub page_id: String,
    pub count: u64,
}

impl VisitorCount {
    /// Zero-count value for a page with no stored record.
    pub fn unseen(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            count: 0,
        }
    }
}
