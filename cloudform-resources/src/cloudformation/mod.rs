//! AWS CloudFormation

pub mod stack;

pub use stack::Stack;
