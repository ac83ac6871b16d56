// Job Aggregator: skill summary -> one Adzuna query per skill -> deduplicated job records.

pub mod aggregator;
pub mod handlers;
pub mod models;
pub mod search;
