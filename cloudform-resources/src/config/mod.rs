//! AWS Config

pub mod config_rule;

pub use config_rule::ConfigRule;
