use serde::{Deserialize, Serialize};

/// A page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Number of items across all pages.
    pub total: u32,
    /// Number of pages.
    pub total_pages: u32,
    /// Items of this page.
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Checks the pagination arithmetic.
    ///
    /// `total_pages` must be `ceil(total / per_page)` and the page cannot hold
    /// more than `per_page` items. A page size of zero is consistent only for
    /// an empty listing with no pages.
    ///
    /// ```rust
    /// use reqres_client::model::Page;
    ///
    /// let page = Page::<u32> { page: 1, per_page: 6, total: 12, total_pages: 2, data: vec![1, 2] };
    /// assert!(page.is_consistent());
    ///
    /// let page = Page::<u32> { page: 1, per_page: 6, total: 13, total_pages: 2, data: vec![] };
    /// assert!(!page.is_consistent());
    /// ```
    pub fn is_consistent(&self) -> bool {
        if self.per_page == 0 {
            return self.total_pages == 0 && self.data.is_empty();
        }

        let within_page = usize::try_from(self.per_page).is_ok_and(|max| self.data.len() <= max);
        self.total.div_ceil(self.per_page) == self.total_pages && within_page
    }
}

/// The `{"data": ...}` envelope of a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Single<T> {
    /// The resource.
    pub data: T,
}

/// Query parameters of a list endpoint.
///
/// Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page to fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PageQuery {
    /// Requests the given page with the server page size.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: None,
        }
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}
