//! Vertical placement of rows onto pages.

use crate::layout::PageConfig;

/// Slack for float accumulation when a row ends exactly on the bottom margin.
const EPSILON_MM: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Zero-based page index.
    pub page: usize,
    /// Top of the row, mm from the top edge of the page.
    pub y_mm: f32,
}

/// Stacks rows top to bottom and opens a new page when the next row would
/// cross the bottom margin. A row taller than the whole content area is
/// placed at the top of a page and allowed to overrun it.
#[derive(Debug, Clone)]
pub struct Paginator {
    top: f32,
    bottom: f32,
    page: usize,
    cursor: f32,
}

impl Paginator {
    pub fn new(page: &PageConfig) -> Self {
        Paginator {
            top: page.margin_top_mm,
            bottom: page.content_bottom_mm(),
            page: 0,
            cursor: page.margin_top_mm,
        }
    }

    pub fn place(&mut self, height: f32) -> Placement {
        let at_top = self.cursor <= self.top + EPSILON_MM;
        if !at_top && self.cursor + height > self.bottom + EPSILON_MM {
            self.page += 1;
            self.cursor = self.top;
        }
        let placement = Placement {
            page: self.page,
            y_mm: self.cursor,
        };
        self.cursor += height;
        placement
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }
}
