//! Offset/limit pagination over a fully materialized virtual collection.
//!
//! The merger builds one ordered sequence (local entries first, then the
//! remote catalog), optionally filters it, and slices the requested window
//! out of it with [`paginate`]. The arithmetic is independent of where the
//! items came from.

use serde::Serialize;

/// Default page size when a request gives none.
pub const DEFAULT_LIMIT: usize = 10;

/// A requested window into the virtual collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub offset: usize,
    pub limit: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageWindow {
    pub const fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Window of the following page, if the collection extends past this one.
    ///
    /// An empty window never has a next page, since it would not advance.
    pub fn next(self, count: usize) -> Option<Self> {
        let end = self.offset.saturating_add(self.limit);
        (self.limit > 0 && end < count).then_some(Self::new(end, self.limit))
    }

    /// Window of the preceding page.
    ///
    /// The previous limit is clamped to the current offset so paging back
    /// from a misaligned offset lands exactly on position 0.
    pub fn previous(self) -> Option<Self> {
        (self.offset > 0).then(|| {
            Self::new(
                self.offset.saturating_sub(self.limit),
                self.offset.min(self.limit),
            )
        })
    }
}

/// One page cut out of the virtual collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Size of the (filtered) virtual collection.
    pub count: usize,
    pub next: Option<PageWindow>,
    pub previous: Option<PageWindow>,
    pub results: Vec<T>,
}

/// Slice `window` out of `items`.
///
/// Out-of-range offsets produce an empty page, never an error.
pub fn paginate<T>(items: Vec<T>, window: PageWindow) -> Page<T> {
    let count = items.len();
    let results = items
        .into_iter()
        .skip(window.offset)
        .take(window.limit)
        .collect();

    Page {
        count,
        next: window.next(count),
        previous: window.previous(),
        results,
    }
}

/// Keep items whose name contains `search` (case-sensitive).
///
/// `None` or an empty search keeps everything.
pub fn filter_by_name<T>(
    items: Vec<T>,
    search: Option<&str>,
    name: impl Fn(&T) -> &str,
) -> Vec<T> {
    match search {
        Some(needle) if !needle.is_empty() => items
            .into_iter()
            .filter(|item| name(item).contains(needle))
            .collect(),
        _ => items,
    }
}
