pub mod config;
pub mod entry;
pub mod ride;
pub mod schedule;
