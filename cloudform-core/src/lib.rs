//! cloudform Core
//!
//! Shared building blocks of the CloudFormation resource catalog: intrinsic
//! functions, the `Value<T>` leaf type, common resource attributes, typed
//! resource entries, and whole templates.

pub mod attributes;
pub mod error;
pub mod expr;
pub mod intrinsic;
pub mod render;
pub mod resource;
pub mod schema;
pub mod template;
pub mod value;
pub mod yaml;

pub use attributes::{DeletionPolicy, DependsOn, ResourceAttributes};
pub use error::{Error, Result};
pub use expr::Expr;
pub use intrinsic::Intrinsic;
pub use render::{RenderConfig, render_template};
pub use resource::{Resource, ResourceProperties, Tag};
pub use schema::ResourceSchema;
pub use template::{SourceFormat, Template, TemplateResource};
pub use value::Value;
