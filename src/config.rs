use dotenvy::var;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use structstruck::strike;

use crate::{
    jump::DEFAULT_JUMP_THRESHOLD,
    types::{DEFAULT_ITEMS_PER_PAGE, ITEMS_PER_PAGE_OPTIONS},
    window::DEFAULT_MAX_VISIBLE,
};

pub static CONFIG: Lazy<Config> = Lazy::new(Config::new);

strike! {
    #[strikethrough[derive(Debug, Clone, Serialize, Deserialize)]]
    pub struct Config {
        pub pagination:
            pub struct {
                pub max_visible_pages: u32,
                pub default_items_per_page: u32,
                pub items_per_page_options: Vec<u32>,
                pub jump_to_page_threshold: u32,
            }
        ,
        pub port: u16,
        pub is_dev: bool,
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            max_visible_pages: DEFAULT_MAX_VISIBLE,
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            items_per_page_options: ITEMS_PER_PAGE_OPTIONS.to_vec(),
            jump_to_page_threshold: DEFAULT_JUMP_THRESHOLD,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pagination: Pagination::default(),
            port: 8080,
            is_dev: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let defaults = Pagination::default();
        Config {
            pagination: Pagination {
                max_visible_pages: var("MAX_VISIBLE_PAGES")
                    .map(|v| v.parse().expect("MAX_VISIBLE_PAGES must be a number"))
                    .unwrap_or(defaults.max_visible_pages),
                default_items_per_page: var("DEFAULT_ITEMS_PER_PAGE")
                    .map(|v| v.parse().expect("DEFAULT_ITEMS_PER_PAGE must be a number"))
                    .unwrap_or(defaults.default_items_per_page),
                items_per_page_options: var("ITEMS_PER_PAGE_OPTIONS")
                    .map(|v| parse_options(&v))
                    .unwrap_or(defaults.items_per_page_options),
                jump_to_page_threshold: var("JUMP_TO_PAGE_THRESHOLD")
                    .map(|v| v.parse().expect("JUMP_TO_PAGE_THRESHOLD must be a number"))
                    .unwrap_or(defaults.jump_to_page_threshold),
            },
            port: var("PORT")
                .unwrap_or("8080".to_string())
                .parse()
                .expect("PORT must be a number"),
            is_dev: var("MODE").map(|m| m == "dev").unwrap_or_default(),
        }
    }
}

fn parse_options(raw: &str) -> Vec<u32> {
    raw.split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(|option| {
            option
                .parse()
                .expect("ITEMS_PER_PAGE_OPTIONS must be a comma separated list of numbers")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_option_lists() {
        assert_eq!(parse_options("10, 20,,50 "), vec![10, 20, 50]);
    }

    #[test]
    fn defaults_match_the_dashboard() {
        let config = Config::default();
        assert_eq!(config.pagination.max_visible_pages, 7);
        assert_eq!(config.pagination.default_items_per_page, 25);
        assert_eq!(config.pagination.jump_to_page_threshold, 10);
        assert_eq!(config.pagination.items_per_page_options.len(), 9);
        assert_eq!(config.port, 8080);
    }
}
