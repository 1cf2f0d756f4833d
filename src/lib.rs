pub mod config;
pub mod monitoring;
pub mod movement;
pub mod report;
