use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Page/limit pair as received from callers. Out-of-range values are coerced
/// rather than rejected: `page < 1` becomes 1 and `limit <= 0` becomes 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageRequest {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }.normalized()
    }

    pub fn normalized(self) -> Self {
        Self {
            page: if self.page < 1 { DEFAULT_PAGE } else { self.page },
            limit: if self.limit <= 0 {
                DEFAULT_LIMIT
            } else {
                self.limit
            },
        }
    }

    /// `(page - 1) * limit`, saturating on overflow.
    pub fn offset(&self) -> usize {
        let normalized = self.normalized();
        let offset = ((normalized.page - 1) as u64).saturating_mul(normalized.limit as u64);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    pub fn limit(&self) -> usize {
        usize::try_from(self.normalized().limit).unwrap_or(usize::MAX)
    }
}

/// One page of a listing plus the size of the whole listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Slice `items` according to `request`. An offset past the end yields an
/// empty page that still reports the true total.
pub fn paginate<I, T>(items: I, request: PageRequest) -> Page<T>
where
    I: ExactSizeIterator<Item = T>,
{
    let total = items.len() as u64;
    let items = items
        .skip(request.offset())
        .take(request.limit())
        .collect();
    Page { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion() {
        assert_eq!(PageRequest::new(0, 0), PageRequest { page: 1, limit: 10 });
        assert_eq!(PageRequest::new(-3, -1), PageRequest { page: 1, limit: 10 });
        assert_eq!(PageRequest::new(2, 5), PageRequest { page: 2, limit: 5 });
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 4).offset(), 8);
        assert_eq!(PageRequest::new(i64::MAX, i64::MAX).offset(), usize::MAX);
    }

    #[test]
    fn test_paginate_slices_and_reports_total() {
        let page = paginate(1..26, PageRequest::new(3, 10));
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total, 25);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let page = paginate(1..4, PageRequest::new(5, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }
}
