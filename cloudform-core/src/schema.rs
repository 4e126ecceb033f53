//! Schema - Describe the shape of catalog types
//!
//! Builds a documentation view of a resource type from the JSON Schema its
//! Rust types derive. Used by the CLI to list attributes, their types, and
//! the documentation text carried on each field.

use std::fmt;

use schemars::r#gen::SchemaSettings;
use schemars::schema::{InstanceType, RootSchema, Schema, SchemaObject, SingleOrVec};

use crate::resource::ResourceProperties;

/// Attribute type
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Integer,
    Number,
    Boolean,
    /// Arbitrary JSON
    Json,
    /// Any intrinsic function call
    Intrinsic,
    /// Enum (list of allowed values)
    Enum(Vec<String>),
    /// Named property type
    Object(String),
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// One of several types (e.g., `String | Intrinsic`)
    Union(Vec<AttributeType>),
}

impl AttributeType {
    pub fn from_schema(schema: &Schema) -> Self {
        match schema {
            Schema::Bool(_) => AttributeType::Json,
            Schema::Object(object) => Self::from_object(object),
        }
    }

    fn from_object(object: &SchemaObject) -> Self {
        if let Some(reference) = &object.reference {
            let name = reference.rsplit('/').next().unwrap_or(reference);
            return if name == "Intrinsic" {
                AttributeType::Intrinsic
            } else {
                AttributeType::Object(name.to_string())
            };
        }

        if let Some(values) = &object.enum_values {
            return AttributeType::Enum(
                values
                    .iter()
                    .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                    .collect(),
            );
        }

        if let Some(subschemas) = &object.subschemas {
            if let Some(all_of) = &subschemas.all_of
                && all_of.len() == 1
            {
                return Self::from_schema(&all_of[0]);
            }
            if let Some(variants) = subschemas.any_of.as_ref().or(subschemas.one_of.as_ref()) {
                let mut members = Vec::new();
                for variant in variants.iter().filter(|s| !is_null(s)) {
                    match Self::from_schema(variant) {
                        AttributeType::Union(inner) => members.extend(inner),
                        other => members.push(other),
                    }
                }
                return if members.len() == 1 {
                    members.remove(0)
                } else {
                    AttributeType::Union(members)
                };
            }
        }

        match primary_instance_type(object) {
            Some(InstanceType::String) => AttributeType::String,
            Some(InstanceType::Integer) => AttributeType::Integer,
            Some(InstanceType::Number) => AttributeType::Number,
            Some(InstanceType::Boolean) => AttributeType::Boolean,
            Some(InstanceType::Array) => {
                let item = object
                    .array
                    .as_ref()
                    .and_then(|a| a.items.as_ref())
                    .map(|items| match items {
                        SingleOrVec::Single(item) => Self::from_schema(item),
                        SingleOrVec::Vec(_) => AttributeType::Json,
                    })
                    .unwrap_or(AttributeType::Json);
                AttributeType::List(Box::new(item))
            }
            Some(InstanceType::Object) => match object
                .object
                .as_ref()
                .and_then(|o| o.additional_properties.as_deref())
            {
                Some(Schema::Object(value)) => {
                    AttributeType::Map(Box::new(Self::from_object(value)))
                }
                _ => AttributeType::Json,
            },
            _ => AttributeType::Json,
        }
    }

    /// Whether an intrinsic function call is accepted in place of a literal
    pub fn accepts_intrinsic(&self) -> bool {
        match self {
            AttributeType::Intrinsic | AttributeType::Json => true,
            AttributeType::Union(members) => members.iter().any(|m| m.accepts_intrinsic()),
            _ => false,
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Integer => "Integer".to_string(),
            AttributeType::Number => "Number".to_string(),
            AttributeType::Boolean => "Boolean".to_string(),
            AttributeType::Json => "Json".to_string(),
            AttributeType::Intrinsic => "Intrinsic".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Object(name) => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<String, {}>", inner.type_name()),
            AttributeType::Union(members) => members
                .iter()
                .map(|m| m.type_name())
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn is_null(schema: &Schema) -> bool {
    matches!(
        schema,
        Schema::Object(SchemaObject {
            instance_type: Some(SingleOrVec::Single(t)),
            ..
        }) if **t == InstanceType::Null
    )
}

fn primary_instance_type(object: &SchemaObject) -> Option<InstanceType> {
    match object.instance_type.as_ref()? {
        SingleOrVec::Single(t) => Some(**t),
        SingleOrVec::Vec(types) => types.iter().copied().find(|t| *t != InstanceType::Null),
    }
}

fn description_of(schema: &Schema) -> Option<String> {
    match schema {
        Schema::Object(object) => object
            .metadata
            .as_ref()
            .and_then(|m| m.description.clone()),
        Schema::Bool(_) => None,
    }
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    /// CloudFormation property name (e.g., "TemplateURL")
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub description: Option<String>,
}

fn attributes_of(object: &SchemaObject) -> Vec<AttributeSchema> {
    let Some(validation) = &object.object else {
        return Vec::new();
    };
    validation
        .properties
        .iter()
        .map(|(name, schema)| AttributeSchema {
            name: name.clone(),
            attr_type: AttributeType::from_schema(schema),
            required: validation.required.contains(name),
            description: description_of(schema),
        })
        .collect()
}

/// A nested property bag of a resource type
#[derive(Debug, Clone)]
pub struct PropertyTypeSchema {
    pub name: String,
    pub description: Option<String>,
    pub attributes: Vec<AttributeSchema>,
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub type_name: String,
    pub description: Option<String>,
    pub attributes: Vec<AttributeSchema>,
    pub property_types: Vec<PropertyTypeSchema>,
    pub return_attributes: Vec<String>,
    pub documentation_url: String,
}

impl ResourceSchema {
    /// Describe the catalog type `P`
    pub fn of<P: ResourceProperties>() -> Self {
        let root = json_schema_of::<P>();
        let mut schema = Self::from_root(P::TYPE_NAME, &root);
        schema.return_attributes = P::RETURN_ATTRIBUTES.iter().map(|s| s.to_string()).collect();
        schema.documentation_url = P::documentation_url();
        schema
    }

    pub fn from_root(type_name: impl Into<String>, root: &RootSchema) -> Self {
        let type_name = type_name.into();
        let property_types = root
            .definitions
            .iter()
            .filter(|(name, _)| name.as_str() != "Intrinsic")
            .filter_map(|(name, schema)| match schema {
                Schema::Object(object) => Some(PropertyTypeSchema {
                    name: name.clone(),
                    description: object.metadata.as_ref().and_then(|m| m.description.clone()),
                    attributes: attributes_of(object),
                }),
                Schema::Bool(_) => None,
            })
            .collect();

        Self {
            documentation_url: crate::resource::documentation_url(&type_name),
            type_name,
            description: root
                .schema
                .metadata
                .as_ref()
                .and_then(|m| m.description.clone()),
            attributes: attributes_of(&root.schema),
            property_types,
            return_attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn property_type(&self, name: &str) -> Option<&PropertyTypeSchema> {
        self.property_types.iter().find(|p| p.name == name)
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.iter().filter(|a| a.required)
    }
}

/// Draft-07 JSON Schema of the `Properties` shape of `P`
pub fn json_schema_of<P: ResourceProperties>() -> RootSchema {
    SchemaSettings::draft07()
        .into_generator()
        .into_root_schema_for::<P>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Tag;
    use crate::value::Value;
    use schemars::JsonSchema;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;

    /// Creates a log group.
    #[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
    #[serde(deny_unknown_fields)]
    struct LogGroupProperties {
        /// The name of the log group.
        #[serde(rename = "LogGroupName")]
        log_group_name: Value<String>,
        /// The number of days to retain the log events.
        #[serde(rename = "RetentionInDays", default, skip_serializing_if = "Option::is_none")]
        retention_in_days: Option<Value<i64>>,
        #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<Tag>>,
        #[serde(rename = "Labels", default, skip_serializing_if = "Option::is_none")]
        labels: Option<BTreeMap<String, Value<String>>>,
    }

    impl ResourceProperties for LogGroupProperties {
        const TYPE_NAME: &'static str = "AWS::Logs::LogGroup";
        const RETURN_ATTRIBUTES: &'static [&'static str] = &["Arn"];
    }

    #[test]
    fn test_resource_schema_of() {
        let schema = ResourceSchema::of::<LogGroupProperties>();
        assert_eq!(schema.type_name, "AWS::Logs::LogGroup");
        assert_eq!(schema.description.as_deref(), Some("Creates a log group."));
        assert_eq!(schema.return_attributes, vec!["Arn".to_string()]);
        assert!(schema.documentation_url.ends_with("aws-resource-logs-loggroup.html"));
    }

    #[test]
    fn test_required_and_descriptions() {
        let schema = ResourceSchema::of::<LogGroupProperties>();

        let name = schema.attribute("LogGroupName").unwrap();
        assert!(name.required);
        assert_eq!(name.description.as_deref(), Some("The name of the log group."));

        let retention = schema.attribute("RetentionInDays").unwrap();
        assert!(!retention.required);

        let required: Vec<&str> = schema.required_attributes().map(|a| a.name.as_str()).collect();
        assert_eq!(required, vec!["LogGroupName"]);
    }

    #[test]
    fn test_attribute_types() {
        let schema = ResourceSchema::of::<LogGroupProperties>();

        let name = schema.attribute("LogGroupName").unwrap();
        assert_eq!(name.attr_type.to_string(), "String | Intrinsic");
        assert!(name.attr_type.accepts_intrinsic());

        let retention = schema.attribute("RetentionInDays").unwrap();
        assert_eq!(retention.attr_type.to_string(), "Integer | Intrinsic");

        let tags = schema.attribute("Tags").unwrap();
        assert_eq!(tags.attr_type, AttributeType::List(Box::new(AttributeType::Object("Tag".to_string()))));

        let labels = schema.attribute("Labels").unwrap();
        assert_eq!(labels.attr_type.to_string(), "Map<String, String | Intrinsic>");
    }

    #[test]
    fn test_property_types_exclude_intrinsic() {
        let schema = ResourceSchema::of::<LogGroupProperties>();
        assert!(schema.property_type("Intrinsic").is_none());

        let tag = schema.property_type("Tag").unwrap();
        let names: Vec<&str> = tag.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Key", "Value"]);
        assert!(tag.attributes.iter().all(|a| a.required));
    }

    #[test]
    fn test_enum_type_name() {
        let t = AttributeType::Enum(vec!["Public".to_string(), "Private".to_string()]);
        assert_eq!(t.to_string(), "Enum(Public | Private)");
        assert!(!t.accepts_intrinsic());
    }
}
