//! CloudFormation Schema to cloudform Catalog Code Generator
//!
//! Turns a CloudFormation registry schema (as returned by
//! `aws cloudformation describe-type --query Schema`) into a catalog module
//! for cloudform-resources: one serde struct per property bag, the
//! `Properties` root, a `Resource` alias, and the `ResourceProperties` impl.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::LazyLock;

use anyhow::{Result, bail};
use heck::ToSnakeCase;
use regex::Regex;
use serde::Deserialize;

/// Doc comment text is wrapped at this many columns (excluding indent and `/// `)
const DOC_WIDTH: usize = 92;

/// Lines longer than this are split the way rustfmt would
const MAX_WIDTH: usize = 100;

/// ``value`` spans CloudFormation uses for allowed values in descriptions
static DOUBLE_BACKTICKED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"``([^`]+)``").ok());

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while", "yield",
];

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnDefinition>,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

/// `additionalProperties` is either a flag or a value schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<CfnProperty>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    pub pattern_properties: Option<BTreeMap<String, CfnProperty>>,
    pub additional_properties: Option<AdditionalProperties>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnDefinition {
    #[serde(rename = "type")]
    pub def_type: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
}

/// Parse a registry schema document
pub fn parse_schema(json: &str) -> Result<CfnSchema> {
    Ok(serde_json::from_str(json)?)
}

/// Split "AWS::EMR::Cluster" into ("emr", "Cluster")
pub fn split_type_name(type_name: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        bail!("Invalid type name format: {}", type_name);
    }
    Ok((parts[1].to_lowercase(), parts[2].to_string()))
}

/// Module file name for a type name (e.g., "scheduled_query")
pub fn module_name(type_name: &str) -> Result<String> {
    let (_, resource) = split_type_name(type_name)?;
    Ok(resource.to_snake_case())
}

/// Rust field name for a CloudFormation property name
pub fn field_name(property: &str) -> String {
    let snake = property.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else {
        snake
    }
}

/// Generate the catalog module for `schema`
pub fn generate_module(schema: &CfnSchema) -> Result<String> {
    let (_, resource) = split_type_name(&schema.type_name)?;
    if schema.definitions.contains_key(&resource) || schema.definitions.contains_key("Properties")
    {
        bail!(
            "Definition name collides with generated type names in {}",
            schema.type_name
        );
    }

    log::debug!(
        "generating {} ({} properties, {} definitions)",
        schema.type_name,
        schema.properties.len(),
        schema.definitions.len()
    );

    let read_only: Vec<String> = schema
        .read_only_properties
        .iter()
        .map(|p| p.trim_start_matches("/properties/").replace('/', "."))
        .collect();
    // Nested read-only paths (e.g., Compliance.Type) hide their top-level property
    let hidden: HashSet<&str> = read_only
        .iter()
        .map(|p| p.split('.').next().unwrap_or(p))
        .collect();

    let mut types = TypeUsage::default();
    for prop in schema
        .properties
        .iter()
        .filter(|(name, _)| !hidden.contains(name.as_str()))
        .map(|(_, prop)| prop)
        .chain(schema.definitions.values().flat_map(|d| d.properties.values()))
    {
        types.scan(prop);
    }

    let mut code = String::new();
    code.push_str(&format!(
        r#"//! {} resource properties
//!
//! Auto-generated from CloudFormation schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

"#,
        schema.type_name, schema.type_name
    ));

    if types.map {
        code.push_str("use std::collections::BTreeMap;\n\n");
    }
    let mut core_imports = Vec::new();
    if types.expr {
        core_imports.push("Expr");
    }
    core_imports.push("Resource");
    core_imports.push("ResourceProperties");
    if types.tag {
        core_imports.push("Tag");
    }
    if types.value {
        core_imports.push("Value");
    }
    code.push_str(&format!(
        "use cloudform_core::{{{}}};\n",
        core_imports.join(", ")
    ));
    code.push_str("use schemars::JsonSchema;\nuse serde::{Deserialize, Serialize};\n\n");

    code.push_str(&format!(
        "/// `{}` resource\npub type {} = Resource<Properties>;\n\n",
        schema.type_name, resource
    ));

    let required: BTreeSet<&str> = schema.required.iter().map(String::as_str).collect();
    let root_properties: BTreeMap<&String, &CfnProperty> = schema
        .properties
        .iter()
        .filter(|(name, _)| !hidden.contains(name.as_str()))
        .collect();
    push_struct(
        &mut code,
        "Properties",
        schema.description.as_deref(),
        &root_properties,
        &required,
    );

    code.push_str(&format!(
        "\nimpl ResourceProperties for Properties {{\n    const TYPE_NAME: &'static str = \"{}\";\n",
        schema.type_name
    ));
    if !read_only.is_empty() {
        let quoted: Vec<String> = read_only.iter().map(|p| format!("\"{}\"", p)).collect();
        let single = format!(
            "    const RETURN_ATTRIBUTES: &'static [&'static str] = &[{}];",
            quoted.join(", ")
        );
        if single.len() <= MAX_WIDTH {
            code.push_str(&single);
            code.push('\n');
        } else {
            code.push_str("    const RETURN_ATTRIBUTES: &'static [&'static str] = &[\n");
            for q in &quoted {
                code.push_str(&format!("        {},\n", q));
            }
            code.push_str("    ];\n");
        }
    }
    code.push_str("}\n");

    for (name, definition) in &schema.definitions {
        if name == "Tag" {
            continue;
        }
        if definition.def_type.as_deref().is_some_and(|t| t != "object") {
            log::warn!("skipping non-object definition {}", name);
            continue;
        }
        let required: BTreeSet<&str> = definition.required.iter().map(String::as_str).collect();
        let properties: BTreeMap<&String, &CfnProperty> = definition.properties.iter().collect();
        code.push('\n');
        push_struct(
            &mut code,
            name,
            definition.description.as_deref(),
            &properties,
            &required,
        );
    }

    Ok(code)
}

/// Which shared types a generated module refers to
#[derive(Debug, Default)]
struct TypeUsage {
    value: bool,
    expr: bool,
    tag: bool,
    map: bool,
}

impl TypeUsage {
    fn scan(&mut self, prop: &CfnProperty) {
        let rust_type = rust_type(prop, "");
        self.value |= rust_type.contains("Value<");
        self.expr |= rust_type.contains("Expr");
        self.map |= rust_type.contains("BTreeMap<");
        self.tag |= rust_type == "Tag" || rust_type.contains("<Tag>");
    }
}

/// Map a schema property onto its Rust type. Every typed position is a
/// `Value`, so an intrinsic may stand in for a scalar, a list, a map, or a
/// whole property bag. `owner` is the struct being generated; a direct
/// reference back to it is boxed.
pub fn rust_type(prop: &CfnProperty, owner: &str) -> String {
    rust_type_inner(prop, owner, false)
}

fn rust_type_inner(prop: &CfnProperty, owner: &str, in_collection: bool) -> String {
    if let Some(ref_path) = &prop.ref_path {
        let name = ref_path.rsplit('/').next().unwrap_or(ref_path);
        return if name == owner && !in_collection {
            format!("Value<Box<{}>>", name)
        } else {
            format!("Value<{}>", name)
        };
    }

    let prop_type = match &prop.prop_type {
        Some(TypeValue::Single(t)) => t.as_str(),
        Some(TypeValue::Multiple(_)) => return "Expr".to_string(),
        None => return "Expr".to_string(),
    };

    match prop_type {
        "string" => "Value<String>".to_string(),
        "integer" => "Value<i64>".to_string(),
        "number" => "Value<f64>".to_string(),
        "boolean" => "Value<bool>".to_string(),
        "array" => match &prop.items {
            Some(items) => format!("Value<Vec<{}>>", rust_type_inner(items, owner, true)),
            None => "Value<Vec<Expr>>".to_string(),
        },
        "object" => {
            let value_schema = prop
                .pattern_properties
                .as_ref()
                .and_then(|p| p.values().next())
                .or(match &prop.additional_properties {
                    Some(AdditionalProperties::Schema(schema)) => Some(schema.as_ref()),
                    _ => None,
                });
            match value_schema {
                Some(schema) if schema.prop_type.is_some() || schema.ref_path.is_some() => {
                    format!("Value<BTreeMap<String, {}>>", rust_type_inner(schema, owner, true))
                }
                _ => "Expr".to_string(),
            }
        }
        _ => "Expr".to_string(),
    }
}

/// Allowed values of a string property: the `enum` keyword, or values
/// double-backticked in the description
pub fn allowed_values(prop: &CfnProperty) -> Option<Vec<String>> {
    if let Some(values) = &prop.enum_values {
        return Some(
            values
                .iter()
                .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
                .collect(),
        );
    }
    match &prop.prop_type {
        Some(TypeValue::Single(t)) if t == "string" => prop
            .description
            .as_deref()
            .and_then(extract_enum_from_description),
        _ => None,
    }
}

/// Check if a string looks like a property name (CamelCase or PascalCase)
/// rather than an enum value (lowercase, kebab-case, or UPPER_CASE)
fn looks_like_property_name(s: &str) -> bool {
    let Some(first_char) = s.chars().next() else {
        return false;
    };
    first_char.is_uppercase() && s.chars().any(|c| c.is_lowercase())
}

/// Extract enum values from description text.
/// Looks for patterns like ``value`` (double backticks) which CloudFormation uses
/// to indicate allowed values in descriptions.
fn extract_enum_from_description(description: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = DOUBLE_BACKTICKED
        .as_ref()?
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        .filter(|v| !looks_like_property_name(v))
        .filter(|v| seen.insert(v.clone()))
        .collect();
    (unique.len() >= 2).then_some(unique)
}

fn push_struct(
    code: &mut String,
    name: &str,
    description: Option<&str>,
    properties: &BTreeMap<&String, &CfnProperty>,
    required: &BTreeSet<&str>,
) {
    let fallback = format!("`{}` property type", name);
    push_doc(code, "", description.unwrap_or(&fallback));
    code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]\n");
    code.push_str("#[serde(deny_unknown_fields)]\n");
    code.push_str(&format!("pub struct {} {{\n", name));
    for (prop_name, prop) in properties {
        push_field(code, name, prop_name, prop, required.contains(prop_name.as_str()));
    }
    code.push_str("}\n");
}

fn push_field(code: &mut String, owner: &str, prop_name: &str, prop: &CfnProperty, required: bool) {
    let mut doc = prop.description.clone().unwrap_or_default();
    if let Some(values) = allowed_values(prop) {
        let listed: Vec<String> = values.iter().map(|v| format!("`{}`", v)).collect();
        if !doc.trim().is_empty() {
            doc.push_str("\n\n");
        }
        doc.push_str(&format!("Allowed values: {}", listed.join(" | ")));
    }
    if !doc.trim().is_empty() {
        push_doc(code, "    ", &doc);
    }

    let field = field_name(prop_name);
    let rust_type = rust_type(prop, owner);
    if required {
        code.push_str(&format!("    #[serde(rename = \"{}\")]\n", prop_name));
        code.push_str(&format!("    pub {}: {},\n", field, rust_type));
    } else {
        let single = format!(
            "    #[serde(rename = \"{}\", default, skip_serializing_if = \"Option::is_none\")]",
            prop_name
        );
        if single.len() <= MAX_WIDTH {
            code.push_str(&single);
            code.push('\n');
        } else {
            code.push_str(&format!(
                "    #[serde(\n        rename = \"{}\",\n        default,\n        skip_serializing_if = \"Option::is_none\"\n    )]\n",
                prop_name
            ));
        }
        code.push_str(&format!("    pub {}: Option<{}>,\n", field, rust_type));
    }
}

fn push_doc(code: &mut String, indent: &str, text: &str) {
    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            code.push_str(&format!("{}///\n", indent));
            continue;
        }
        for chunk in wrap(line, DOC_WIDTH) {
            code.push_str(&format!("{}/// {}\n", indent, chunk));
        }
    }
}

/// Greedy word wrap
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r##"{
        "typeName": "AWS::Example::Widget",
        "description": "Creates a widget.",
        "definitions": {
            "Part": {
                "type": "object",
                "description": "A widget part.",
                "properties": {
                    "Name": {"type": "string", "description": "Part name."},
                    "Parts": {"type": "array", "items": {"$ref": "#/definitions/Part"}},
                    "Spare": {"$ref": "#/definitions/Part"}
                },
                "required": ["Name"]
            },
            "Tag": {
                "type": "object",
                "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}}
            }
        },
        "properties": {
            "Arn": {"type": "string"},
            "Size": {"type": "integer", "description": "Widget size."},
            "Ratio": {"type": "number"},
            "Enabled": {"type": "boolean"},
            "Mode": {"type": "string", "enum": ["FAST", "SLOW"]},
            "Settings": {"type": "object"},
            "Labels": {"type": "object", "patternProperties": {"^.+$": {"type": "string"}}},
            "Parts": {"type": "array", "items": {"$ref": "#/definitions/Part"}},
            "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
            "AnExtremelyLongPropertyNameForWrapping": {"type": "string"},
            "Type": {"type": "string"}
        },
        "required": ["Size"],
        "readOnlyProperties": ["/properties/Arn", "/properties/Status/Code"]
    }"##;

    fn generate() -> String {
        generate_module(&parse_schema(SCHEMA).unwrap()).unwrap()
    }

    #[test]
    fn test_split_type_name() {
        assert_eq!(
            split_type_name("AWS::Timestream::ScheduledQuery").unwrap(),
            ("timestream".to_string(), "ScheduledQuery".to_string())
        );
        assert!(split_type_name("AWS::EC2").is_err());
        assert_eq!(module_name("AWS::AppFlow::ConnectorProfile").unwrap(), "connector_profile");
    }

    #[test]
    fn test_field_name() {
        assert_eq!(field_name("KMSArn"), "kms_arn");
        assert_eq!(field_name("isSandboxEnvironment"), "is_sandbox_environment");
        assert_eq!(field_name("Ec2SubnetId"), "ec2_subnet_id");
        assert_eq!(field_name("Type"), "r#type");
    }

    #[test]
    fn test_header_and_imports() {
        let code = generate();
        assert!(code.starts_with("//! AWS::Example::Widget resource properties\n"));
        assert!(code.contains("use std::collections::BTreeMap;\n"));
        assert!(code.contains("use cloudform_core::{Expr, Resource, ResourceProperties, Tag, Value};\n"));
        assert!(code.contains("pub type Widget = Resource<Properties>;\n"));
    }

    #[test]
    fn test_scalar_and_collection_types() {
        let code = generate();
        assert!(code.contains("    #[serde(rename = \"Size\")]\n    pub size: Value<i64>,\n"));
        assert!(code.contains("    pub ratio: Option<Value<f64>>,\n"));
        assert!(code.contains("    pub enabled: Option<Value<bool>>,\n"));
        assert!(code.contains("    pub settings: Option<Expr>,\n"));
        assert!(code.contains("    pub labels: Option<Value<BTreeMap<String, Value<String>>>>,\n"));
        assert!(code.contains("    pub tags: Option<Value<Vec<Value<Tag>>>>,\n"));
        assert!(code.contains("    pub r#type: Option<Value<String>>,\n"));
    }

    #[test]
    fn test_every_typed_position_accepts_an_intrinsic() {
        let list: CfnProperty =
            serde_json::from_str(r#"{"type": "array", "items": {"type": "string"}}"#).unwrap();
        assert_eq!(rust_type(&list, "Widget"), "Value<Vec<Value<String>>>");

        let bag: CfnProperty = serde_json::from_str(r##"{"$ref": "#/definitions/Part"}"##).unwrap();
        assert_eq!(rust_type(&bag, "Widget"), "Value<Part>");
        assert_eq!(rust_type(&bag, "Part"), "Value<Box<Part>>");

        let untyped: CfnProperty = serde_json::from_str(r#"{"type": "object"}"#).unwrap();
        assert_eq!(rust_type(&untyped, "Widget"), "Expr");
    }

    #[test]
    fn test_read_only_properties_become_return_attributes() {
        let code = generate();
        assert!(!code.contains("pub arn:"));
        assert!(code.contains(
            "    const RETURN_ATTRIBUTES: &'static [&'static str] = &[\"Arn\", \"Status.Code\"];\n"
        ));
    }

    #[test]
    fn test_definitions_and_self_reference() {
        let code = generate();
        assert!(code.contains("/// A widget part.\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]\n#[serde(deny_unknown_fields)]\npub struct Part {\n"));
        assert!(code.contains("    pub parts: Option<Value<Vec<Value<Part>>>>,\n"));
        assert!(code.contains("    pub spare: Option<Value<Box<Part>>>,\n"));
        assert!(!code.contains("pub struct Tag"));
    }

    #[test]
    fn test_enum_doc_and_long_attribute() {
        let code = generate();
        assert!(code.contains("    /// Allowed values: `FAST` | `SLOW`\n    #[serde(rename = \"Mode\""));
        assert!(code.contains(
            "    #[serde(\n        rename = \"AnExtremelyLongPropertyNameForWrapping\",\n        default,\n"
        ));
    }

    #[test]
    fn test_definition_name_collision() {
        let schema = parse_schema(
            r##"{"typeName": "AWS::Example::Widget", "properties": {},
                "definitions": {"Widget": {"type": "object", "properties": {}}}}"##,
        )
        .unwrap();
        assert!(generate_module(&schema).is_err());
    }

    #[test]
    fn test_wrap() {
        let lines = wrap("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_extract_enum_from_description() {
        let description = "Use ``enabled`` or ``disabled``. When ``enabled`` is set, ``InstanceTenancy`` applies.";
        assert_eq!(
            extract_enum_from_description(description),
            Some(vec!["enabled".to_string(), "disabled".to_string()])
        );
        assert_eq!(extract_enum_from_description("Set to ``true`` to enable."), None);
        // The compiled pattern is shared across calls
        assert_eq!(
            extract_enum_from_description("``ON`` or ``OFF``"),
            Some(vec!["ON".to_string(), "OFF".to_string()])
        );
    }

    #[test]
    fn test_looks_like_property_name() {
        assert!(looks_like_property_name("InstanceTenancy"));
        assert!(!looks_like_property_name("default"));
        assert!(!looks_like_property_name("UPPERCASE"));
        assert!(!looks_like_property_name(""));
    }
}
