pub mod api;
pub mod config;
pub mod error;
pub mod jump;
pub mod middleware;
pub mod navigation;
pub mod state;
pub mod types;
pub mod window;
