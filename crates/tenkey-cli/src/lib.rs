pub mod commands;
pub mod timeline;
