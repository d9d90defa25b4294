use std::any::Any;
use std::fmt;

use userboard_states::State;

/// Rows per page offered by the page size selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Five, Self::Ten, Self::Twenty];

    pub fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Number of pages needed for `count` rows; never less than one.
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// 1-based page selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: PageSize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl Pagination {
    pub fn new(page: usize, page_size: PageSize) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Changes the page size and keeps the page within the new page count.
    pub fn set_page_size(&mut self, page_size: PageSize, result_count: usize) {
        self.page_size = page_size;
        self.clamp(result_count);
    }

    pub fn next(&mut self, result_count: usize) {
        if self.page < total_pages(result_count, self.page_size) {
            self.page += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Clamps the page into `[1, total_pages]`; returns true if it moved.
    pub fn clamp(&mut self, result_count: usize) -> bool {
        let clamped = self.page.clamp(1, total_pages(result_count, self.page_size));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

impl State for Pagination {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
