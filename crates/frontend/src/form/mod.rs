pub mod api;
pub mod fixture;
pub mod source;
pub mod view;
