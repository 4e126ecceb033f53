//! Amazon EMR

pub mod cluster;

pub use cluster::Cluster;
