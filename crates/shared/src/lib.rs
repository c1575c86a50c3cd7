pub mod buildings;
pub mod config;
pub mod location;
pub mod models;
pub mod popup;
pub mod report;
pub mod search;
