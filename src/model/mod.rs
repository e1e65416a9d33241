pub mod category;
pub mod config;
pub mod entry;
pub mod resource;
