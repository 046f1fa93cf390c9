//! Offset pagination primitives shared by Kronos list endpoints.
//!
//! [`PageRequest`] captures a validated zero-based page index and page size.
//! [`Page`] is the response envelope returned by every paginated endpoint:
//!
//! ```json
//! {
//!   "content": [],
//!   "pageNumber": 0,
//!   "pageSize": 10,
//!   "totalElements": 0,
//!   "totalPages": 0
//! }
//! ```
//!
//! Repositories fetch a window with [`PageRequest::offset`] and
//! [`PageRequest::limit`], count the full collection, and hand both to
//! [`Page::new`], which derives `totalPages`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page index used when the client omits one.
pub const DEFAULT_PAGE: u32 = 0;
/// Page size used when the client omits one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validation failures raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The page index was negative.
    #[error("page number must not be negative")]
    NegativePage,
    /// The page index does not fit in 32 bits.
    #[error("page number is too large")]
    PageTooLarge,
    /// The page size was zero or negative.
    #[error("page size must be greater than zero")]
    NonPositiveSize,
    /// The page size exceeded [`MAX_PAGE_SIZE`].
    #[error("page size must be at most {max}")]
    SizeTooLarge {
        /// Maximum accepted page size.
        max: u32,
    },
}

/// Validated request for a single page of results.
///
/// ## Invariants
/// - `size` is in `1..=MAX_PAGE_SIZE`.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 25).expect("valid request");
/// assert_eq!(request.offset(), 50);
/// assert_eq!(request.limit(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Validate and construct a page request.
    pub fn new(page: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 {
            return Err(PageRequestError::NonPositiveSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PageRequestError::SizeTooLarge { max: MAX_PAGE_SIZE });
        }
        Ok(Self { page, size })
    }

    /// Construct a page request from signed client input.
    ///
    /// Query strings arrive as signed integers so negative values can be
    /// rejected with a meaningful error instead of a parse failure.
    pub fn from_signed(page: i64, size: i64) -> Result<Self, PageRequestError> {
        let page = u32::try_from(page).map_err(|_| {
            if page < 0 {
                PageRequestError::NegativePage
            } else {
                PageRequestError::PageTooLarge
            }
        })?;
        if size <= 0 {
            return Err(PageRequestError::NonPositiveSize);
        }
        let size = u32::try_from(size)
            .map_err(|_| PageRequestError::SizeTooLarge { max: MAX_PAGE_SIZE })?;
        Self::new(page, size)
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of elements to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    /// Maximum number of elements on this page.
    #[must_use]
    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// A single page of results together with collection totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    page_number: u32,
    page_size: u32,
    total_elements: u64,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Build a page envelope for `request`, deriving the page count from
    /// `total_elements`.
    #[must_use]
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            page_number: request.page(),
            page_size: request.size(),
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size())),
        }
    }

    /// Elements on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Page size the page was requested with.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of elements in the whole collection.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages in the whole collection.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Consume the page and return its elements.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Transform every element while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}
