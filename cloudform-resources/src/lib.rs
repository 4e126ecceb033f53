//! cloudform Resources
//!
//! Typed catalog of CloudFormation resource properties.
//!
//! ## Module Structure
//!
//! - `appflow`, `cloudformation`, `config`, `emr`, `timestream` - Auto-generated
//!   resource modules, one per CloudFormation type
//! - `catalog` - Lookup by type name and whole-template decoding

pub mod appflow;
pub mod catalog;
pub mod cloudformation;
pub mod config;
pub mod emr;
pub mod timestream;

pub use catalog::{
    AnyResource, TemplateReport, decode_template, find_type_name, json_schema, schema, type_names,
};
