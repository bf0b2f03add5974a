//! foodsafety - King County food safety inspection scraper.
//!
//! Queries the county's inspection search, keeps the raw results page on
//! disk, and extracts one record per food establishment with its metadata
//! and an inspection score summary.

pub mod config;
pub mod extract;
pub mod http_client;
pub mod search;
pub mod storage;
