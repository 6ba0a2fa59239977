pub mod config;
pub mod metric;
pub mod report;
pub mod selection;
