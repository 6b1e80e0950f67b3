pub mod cache;
pub mod config;
pub mod handlers;
pub mod helpers;
pub mod resolver;
pub mod state;
pub mod storage;
