use serde::{Deserialize, Serialize};

use crate::types::PaginationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavTarget {
    pub page: u32,
    pub disabled: bool,
}

/// The four arrow buttons around the page labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationTargets {
    pub first: NavTarget,
    pub previous: NavTarget,
    pub next: NavTarget,
    pub last: NavTarget,
}

impl NavigationTargets {
    pub fn new(state: &PaginationState, loading: bool) -> Self {
        let at_start = state.is_first_page() || loading;
        let at_end = state.is_last_page() || loading;
        Self {
            first: NavTarget {
                page: 1,
                disabled: at_start,
            },
            previous: NavTarget {
                page: state.current_page.saturating_sub(1).max(1),
                disabled: at_start,
            },
            next: NavTarget {
                page: state.current_page.saturating_add(1).min(state.total_pages.max(1)),
                disabled: at_end,
            },
            last: NavTarget {
                page: state.total_pages.max(1),
                disabled: at_end,
            },
        }
    }
}

/// Page reached by an arrow key, if the key moves anywhere.
pub fn step(key: Key, current_page: u32, total_pages: u32) -> Option<u32> {
    match key {
        Key::ArrowLeft if current_page > 1 => Some(current_page - 1),
        Key::ArrowRight if current_page < total_pages => Some(current_page + 1),
        _ => None,
    }
}
