pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod models;
pub mod request;
pub mod tracker;
