//! CLI commands for notectx

pub mod chain;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod export;
pub mod history;
pub mod models;
pub mod tags;
pub mod window;
