//! Paginator control model: navigation state and the option lists a pager offers.

use serde::{Deserialize, Serialize};

use crate::processing::page_count;
use crate::types::{page_number_from_signed, page_size_from_signed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    /// Total number of rows being paged.
    pub max: usize,
    #[serde(deserialize_with = "page_size_from_signed")]
    pub per_page: usize,
    /// 1-based.
    #[serde(deserialize_with = "page_number_from_signed")]
    pub current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            max: 0,
            per_page: 10,
            current_page: 1,
        }
    }
}

impl Paginator {
    pub fn new(max: usize, per_page: usize, current_page: usize) -> Self {
        Self {
            max,
            per_page,
            current_page,
        }
    }

    /// `ceil(max / per_page)`; zero when `per_page` is zero.
    pub fn page_count(&self) -> usize {
        if self.per_page == 0 {
            0
        } else {
            page_count(self.max, self.per_page)
        }
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.current_page <= 1
    }

    /// Always disabled when `per_page` is zero.
    pub fn is_next_disabled(&self) -> bool {
        self.per_page == 0 || self.current_page.saturating_mul(self.per_page) >= self.max
    }

    pub fn prev_page(&self) -> Option<usize> {
        (!self.is_prev_disabled()).then(|| self.current_page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (!self.is_next_disabled()).then(|| self.current_page + 1)
    }

    /// Page numbers offered by the "go to page" selector.
    pub fn go_to_page_items(&self) -> Vec<usize> {
        (1..=self.page_count()).collect()
    }

    /// Page sizes offered by the "rows per page" selector.
    ///
    /// Starting from `per_page`, sizes double while they stay below `max`, then `max` itself is
    /// offered. When `current_page` equals `max` only `per_page` is offered.
    pub fn rows_per_page_items(&self) -> Vec<usize> {
        if self.current_page == self.max {
            return vec![self.per_page];
        }
        if self.per_page == 0 {
            return Vec::new();
        }

        let mut items = Vec::new();
        let mut size = self.per_page;
        while size < self.max {
            items.push(size);
            size = size.saturating_mul(2);
        }
        items.push(self.max);
        items
    }
}
