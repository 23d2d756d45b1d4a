//! "Load more" request sizing.
//!
//! A [`LoadMore`] tracker tells the caller how many additional rows to request each time the
//! user asks for more. The answer depends on the [`LoadMoreMode`] and on earlier requests,
//! and is always capped at [`LoadMore::limit`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadMoreMode {
    /// Always `step`.
    Constant,
    /// `step * (clicks + 1)`.
    ConstantIncrement,
    /// `max(previous, step) * min(clicks + 1, 2)`: doubles the last request after the first.
    #[default]
    ProgressiveThreshold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadMore {
    pub mode: LoadMoreMode,
    pub step: usize,
    pub limit: usize,
    #[serde(skip)]
    clicks: usize,
    #[serde(skip)]
    previous: usize,
}

impl Default for LoadMore {
    fn default() -> Self {
        Self::new(LoadMoreMode::default(), 60, 1000)
    }
}

impl LoadMore {
    pub fn new(mode: LoadMoreMode, step: usize, limit: usize) -> Self {
        Self {
            mode,
            step,
            limit,
            clicks: 0,
            previous: 0,
        }
    }

    /// Rows to request for the next click. Records the click.
    pub fn next_request(&mut self) -> usize {
        let wanted = match self.mode {
            LoadMoreMode::Constant => self.step,
            LoadMoreMode::ConstantIncrement => self.step.saturating_mul(self.clicks + 1),
            LoadMoreMode::ProgressiveThreshold => self
                .previous
                .max(self.step)
                .saturating_mul((self.clicks + 1).min(2)),
        };
        let items = wanted.min(self.limit);

        self.previous = items;
        self.clicks += 1;
        items
    }

    pub fn clicks(&self) -> usize {
        self.clicks
    }

    /// Forget earlier clicks.
    pub fn reset(&mut self) {
        self.clicks = 0;
        self.previous = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{LoadMore, LoadMoreMode};

    fn requests(mut lm: LoadMore, n: usize) -> Vec<usize> {
        (0..n).map(|_| lm.next_request()).collect()
    }

    #[test]
    fn constant_mode() {
        let lm = LoadMore::new(LoadMoreMode::Constant, 60, 1000);
        assert_eq!(requests(lm, 3), vec![60, 60, 60]);
    }

    #[test]
    fn constant_increment_mode() {
        let lm = LoadMore::new(LoadMoreMode::ConstantIncrement, 60, 1000);
        assert_eq!(requests(lm, 4), vec![60, 120, 180, 240]);
    }

    #[test]
    fn progressive_threshold_doubles_until_limit() {
        let lm = LoadMore::default();
        assert_eq!(
            requests(lm, 7),
            vec![60, 120, 240, 480, 960, 1000, 1000]
        );
    }

    #[test]
    fn reset_starts_over() {
        let mut lm = LoadMore::default();
        lm.next_request();
        lm.next_request();
        assert_eq!(lm.clicks(), 2);
        lm.reset();
        assert_eq!(lm.next_request(), 60);
    }
}
