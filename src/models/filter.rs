use serde::{Deserialize, Serialize};

use super::document::Document;

/// Filter for narrowing search candidates by metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Filter {
    /// Keep only entries of this category ("page", "type", "method", ...)
    Category(String),

    /// Keep only entries from this page
    Page(String),
}

impl Filter {
    /// Create a category filter
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a page filter
    pub fn page(page: impl Into<String>) -> Self {
        Filter::Page(page.into())
    }

    /// Check whether a document passes this filter
    pub fn matches(&self, doc: &Document) -> bool {
        match self {
            Filter::Category(category) => doc.category == *category,
            Filter::Page(page) => doc.page == *page,
        }
    }
}
