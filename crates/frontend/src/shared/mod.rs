pub mod api_utils;
pub mod components;
pub mod config;
pub mod url;
