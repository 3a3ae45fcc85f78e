//! Page-window computation for pagination controls.
//!
//! A window always shows the first and the last page once it has to elide
//! anything, and keeps the current page together with its neighbours in view.
//! With the default width of 7 the layouts are:
//!
//! ```text
//! near start   1 2 3 4 5 … N
//! middle       1 … c-1 c c+1 … N
//! near end     1 … N-4 N-3 N-2 N-1 N
//! ```

use serde::Serialize;

use crate::{error::PaginationError, types::PageLabel};

pub const DEFAULT_MAX_VISIBLE: u32 = 7;
/// Widest window accepted; keeps every window a small, bounded allocation.
pub const MAX_WINDOW_SIZE: u32 = 99;

/// Width of a page window, counted in labels (ellipsis markers included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    max_visible: u32,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl PageWindow {
    /// Widths must be odd, at least 5 so the current page sits in the
    /// middle of a symmetric run between the two ellipsis markers, and at
    /// most [`MAX_WINDOW_SIZE`].
    pub fn new(max_visible: u32) -> Result<Self, PaginationError> {
        if !(5..=MAX_WINDOW_SIZE).contains(&max_visible) || max_visible % 2 == 0 {
            return Err(PaginationError::InvalidWindowSize(max_visible));
        }
        Ok(Self { max_visible })
    }

    pub fn max_visible(&self) -> u32 {
        self.max_visible
    }

    /// Labels to render for `current_page` out of `total_pages`.
    ///
    /// `current_page` must already be clamped into `1..=total_pages`. Values
    /// outside that range still produce a window, just not one centred on the
    /// requested page.
    pub fn compute(&self, current_page: u32, total_pages: u32) -> Vec<PageLabel> {
        let max_visible = self.max_visible;
        if total_pages <= max_visible {
            return (1..=total_pages).map(PageLabel::Page).collect();
        }

        // Pages either side of the current one in the middle layout.
        let radius = (max_visible - 5) / 2;
        // Length of the run that replaces one ellipsis at either edge.
        let edge_run = max_visible - 3;

        let mut labels = Vec::with_capacity(max_visible as usize);
        labels.push(PageLabel::Page(1));

        if current_page <= edge_run {
            labels.extend((2..=edge_run + 1).map(PageLabel::Page));
            labels.push(PageLabel::Ellipsis);
            labels.push(PageLabel::Page(total_pages));
        } else if current_page >= total_pages - (edge_run - 1) {
            labels.push(PageLabel::Ellipsis);
            labels.extend((total_pages - edge_run..=total_pages).map(PageLabel::Page));
        } else {
            labels.push(PageLabel::Ellipsis);
            labels.extend((current_page - radius..=current_page + radius).map(PageLabel::Page));
            labels.push(PageLabel::Ellipsis);
            labels.push(PageLabel::Page(total_pages));
        }

        labels
    }
}

/// [`PageWindow::compute`] with the default width of 7.
pub fn compute(current_page: u32, total_pages: u32) -> Vec<PageLabel> {
    PageWindow::default().compute(current_page, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageLabel::{Ellipsis, Page};

    fn pages(range: std::ops::RangeInclusive<u32>) -> Vec<PageLabel> {
        range.map(Page).collect()
    }

    #[test]
    fn small_totals_show_every_page() {
        for total in 0..=7 {
            let labels = compute(1, total);
            assert_eq!(labels, pages(1..=total));
            assert!(!labels.iter().any(PageLabel::is_ellipsis));
        }
    }

    #[test]
    fn empty_total_is_empty() {
        assert!(compute(1, 0).is_empty());
    }

    #[test]
    fn first_page() {
        for total in 8..60 {
            assert_eq!(
                compute(1, total),
                vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(total)]
            );
        }
    }

    #[test]
    fn last_page() {
        for total in 8..60 {
            assert_eq!(
                compute(total, total),
                vec![
                    Page(1),
                    Ellipsis,
                    Page(total - 4),
                    Page(total - 3),
                    Page(total - 2),
                    Page(total - 1),
                    Page(total)
                ]
            );
        }
    }

    #[test]
    fn middle_page() {
        assert_eq!(
            compute(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn thresholds() {
        assert_eq!(
            compute(4, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(20)]
        );
        assert_eq!(
            compute(5, 20),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(20)]
        );
        assert_eq!(
            compute(16, 20),
            vec![Page(1), Ellipsis, Page(15), Page(16), Page(17), Ellipsis, Page(20)]
        );
        assert_eq!(
            compute(17, 20),
            vec![Page(1), Ellipsis, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn every_window_keeps_the_current_page_and_both_ends() {
        for total in 8..40 {
            for current in 1..=total {
                let labels = compute(current, total);
                assert_eq!(labels.len(), 7);
                assert_eq!(labels.first(), Some(&Page(1)));
                assert_eq!(labels.last(), Some(&Page(total)));
                assert!(labels.contains(&Page(current)));

                let numbers: Vec<u32> = labels.iter().filter_map(PageLabel::page).collect();
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                // an ellipsis always stands for at least one hidden page
                for (i, label) in labels.iter().enumerate() {
                    if label.is_ellipsis() {
                        let before = labels[i - 1].page().unwrap();
                        let after = labels[i + 1].page().unwrap();
                        assert!(after - before > 1);
                    }
                }
            }
        }
    }

    #[test]
    fn is_idempotent() {
        assert_eq!(compute(10, 20), compute(10, 20));
    }

    #[test]
    fn out_of_range_current_page_does_not_panic() {
        assert_eq!(compute(0, 20).len(), 7);
        assert_eq!(compute(99, 20), compute(20, 20));
        assert_eq!(compute(u32::MAX, 20), compute(20, 20));
    }

    #[test]
    fn window_sizes() {
        assert_eq!(PageWindow::new(7), Ok(PageWindow::default()));
        assert_eq!(PageWindow::new(4), Err(PaginationError::InvalidWindowSize(4)));
        assert_eq!(PageWindow::new(8), Err(PaginationError::InvalidWindowSize(8)));
        assert_eq!(PageWindow::new(3), Err(PaginationError::InvalidWindowSize(3)));
        assert!(PageWindow::new(MAX_WINDOW_SIZE).is_ok());
        assert_eq!(
            PageWindow::new(MAX_WINDOW_SIZE + 2),
            Err(PaginationError::InvalidWindowSize(MAX_WINDOW_SIZE + 2))
        );
        assert_eq!(
            PageWindow::new(u32::MAX),
            Err(PaginationError::InvalidWindowSize(u32::MAX))
        );
    }

    #[test]
    fn narrow_window() {
        let window = PageWindow::new(5).unwrap();
        assert_eq!(window.compute(1, 10), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);
        assert_eq!(window.compute(5, 10), vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]);
        assert_eq!(window.compute(9, 10), vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]);
        assert_eq!(window.compute(3, 5), pages(1..=5));
    }

    #[test]
    fn wide_window() {
        let window = PageWindow::new(9).unwrap();
        assert_eq!(
            window.compute(10, 30),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(30)
            ]
        );
        assert_eq!(window.compute(1, 30)[..7], pages(1..=7)[..]);
        for total in 10..30 {
            for current in 1..=total {
                let labels = window.compute(current, total);
                assert_eq!(labels.len(), 9);
                assert!(labels.contains(&Page(current)));
            }
        }
    }
}
