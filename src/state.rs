use anyhow::{ensure, Result};
use once_cell::sync::Lazy;

use crate::{
    config::{Config, CONFIG},
    window::PageWindow,
};

pub static STATE: Lazy<State> = Lazy::new(|| State::new().expect("Failed to create state"));

#[derive(Clone)]
pub struct State {
    pub window: PageWindow,
    pub default_items_per_page: u32,
    pub items_per_page_options: Vec<u32>,
    pub jump_to_page_threshold: u32,
}

impl State {
    pub fn new() -> Result<Self> {
        Self::from_config(&CONFIG)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let pagination = &config.pagination;
        ensure!(
            pagination.default_items_per_page > 0,
            "DEFAULT_ITEMS_PER_PAGE must be greater than zero"
        );
        ensure!(
            pagination.items_per_page_options.iter().all(|option| *option > 0),
            "ITEMS_PER_PAGE_OPTIONS must all be greater than zero"
        );
        Ok(Self {
            window: PageWindow::new(pagination.max_visible_pages)?,
            default_items_per_page: pagination.default_items_per_page,
            items_per_page_options: pagination.items_per_page_options.clone(),
            jump_to_page_threshold: pagination.jump_to_page_threshold,
        })
    }
}
