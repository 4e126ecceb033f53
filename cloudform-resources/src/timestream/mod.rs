//! Amazon Timestream

pub mod scheduled_query;

pub use scheduled_query::ScheduledQuery;
