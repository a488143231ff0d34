//! Page request - zero-based page number plus page size

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upper bound on requested page size
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination request for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: u32,
}

impl PageRequest {
    /// Create a page request, clamping the size to `1..=MAX_PAGE_SIZE`
    pub fn new(number: u32, size: u32) -> Self {
        Self {
            number,
            size: size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// First page with the default size
    pub fn first() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }

    /// Zero-based page number
    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Page size
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row offset for SQL queries
    pub fn offset(&self) -> i64 {
        i64::from(self.number) * i64::from(self.size)
    }

    /// Row limit for SQL queries
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}
