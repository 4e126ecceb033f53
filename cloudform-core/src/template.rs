//! Template - The sections of a CloudFormation template
//!
//! Resources are kept untyped here ([`TemplateResource`]); the catalog crate
//! decodes them into typed [`crate::Resource`] values.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::attributes::ResourceAttributes;
use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::resource::{Resource, ResourceProperties};
use crate::yaml;

/// Source format of a template file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format of `source` read from `path`
    ///
    /// `.json` is JSON and `.yaml`/`.yml` are YAML. A `.template` file may be
    /// either; it is JSON when its first non-blank character is `{`.
    pub fn detect(path: &Path, source: &str) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(SourceFormat::Json),
            Some("yaml") | Some("yml") => Ok(SourceFormat::Yaml),
            Some("template") if source.trim_start().starts_with('{') => Ok(SourceFormat::Json),
            Some("template") => Ok(SourceFormat::Yaml),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Json => write!(f, "json"),
            SourceFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A CloudFormation template
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Macro names; a single string or a list
    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Expr>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, Expr>>,
    #[serde(rename = "Parameters", default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, Parameter>,
    #[serde(rename = "Rules", default, skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, Expr>,
    #[serde(rename = "Mappings", default, skip_serializing_if = "IndexMap::is_empty")]
    pub mappings: IndexMap<String, IndexMap<String, IndexMap<String, Expr>>>,
    #[serde(rename = "Conditions", default, skip_serializing_if = "IndexMap::is_empty")]
    pub conditions: IndexMap<String, Expr>,
    #[serde(rename = "Resources")]
    pub resources: IndexMap<String, TemplateResource>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "IndexMap::is_empty")]
    pub outputs: IndexMap<String, Output>,
}

impl Template {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parse a YAML template, expanding short-form intrinsic tags
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let value = yaml::to_json(source)?;
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_str_as(source: &str, format: SourceFormat) -> Result<Self> {
        match format {
            SourceFormat::Json => Self::from_json_str(source),
            SourceFormat::Yaml => Self::from_yaml_str(source),
        }
    }

    /// Read a template file, choosing the parser from its extension and content
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let format = SourceFormat::detect(path, &source)?;
        log::debug!("reading {} as {}", path.display(), format);
        Self::from_str_as(&source, format)
    }

    pub fn resource(&self, logical_id: &str) -> Option<&TemplateResource> {
        self.resources.get(logical_id)
    }

    pub fn add_resource<P: ResourceProperties>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &Resource<P>,
    ) -> Result<()> {
        self.resources
            .insert(logical_id.into(), resource.to_template_resource()?);
        Ok(())
    }
}

/// An untyped entry of the `Resources` section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateResource {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Properties", skip_serializing_if = "JsonValue::is_null")]
    pub properties: JsonValue,
    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

impl TemplateResource {
    /// Decode into the typed resource `P`
    pub fn decode<P: ResourceProperties>(&self) -> Result<Resource<P>> {
        Resource::try_from(self)
    }
}

impl<'de> Deserialize<'de> for TemplateResource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Entry {
            #[serde(rename = "Type")]
            type_name: String,
            #[serde(rename = "Properties", default)]
            properties: JsonValue,
            #[serde(flatten)]
            attributes: ResourceAttributes,
        }

        let value = JsonValue::deserialize(deserializer)?;
        if let JsonValue::Object(object) = &value
            && let Some(key) = object.keys().find(|k| {
                k.as_str() != "Type"
                    && k.as_str() != "Properties"
                    && !ResourceAttributes::KEYS.contains(&k.as_str())
            })
        {
            return Err(D::Error::custom(Error::UnknownResourceKey(key.clone())));
        }

        let entry = Entry::deserialize(value).map_err(D::Error::custom)?;
        Ok(TemplateResource {
            type_name: entry.type_name,
            properties: entry.properties,
            attributes: entry.attributes,
        })
    }
}

/// An entry of the `Parameters` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameter {
    /// e.g. `String`, `Number`, `CommaDelimitedList`, `AWS::EC2::VPC::Id`
    #[serde(rename = "Type")]
    pub parameter_type: String,
    #[serde(rename = "Default", default, skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "AllowedValues", default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<JsonValue>>,
    #[serde(rename = "AllowedPattern", default, skip_serializing_if = "Option::is_none")]
    pub allowed_pattern: Option<String>,
    #[serde(
        rename = "ConstraintDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub constraint_description: Option<String>,
    #[serde(rename = "MaxLength", default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<JsonValue>,
    #[serde(rename = "MinLength", default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<JsonValue>,
    #[serde(rename = "MaxValue", default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<JsonValue>,
    #[serde(rename = "MinValue", default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<JsonValue>,
    #[serde(rename = "NoEcho", default, skip_serializing_if = "Option::is_none")]
    pub no_echo: Option<JsonValue>,
}

/// An entry of the `Outputs` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Output {
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Expr>,
    #[serde(rename = "Value")]
    pub value: Expr,
    #[serde(rename = "Export", default, skip_serializing_if = "Option::is_none")]
    pub export: Option<Export>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Cross-stack export of an output value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Export {
    #[serde(rename = "Name")]
    pub name: Expr,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsic::Intrinsic;
    use serde_json::json;

    const TEMPLATE: &str = r#"{
        "AWSTemplateFormatVersion": "2010-09-09",
        "Description": "Nested stack",
        "Parameters": {
            "Env": {"Type": "String", "AllowedValues": ["dev", "prod"], "Default": "dev"}
        },
        "Conditions": {
            "IsProd": {"Fn::Equals": [{"Ref": "Env"}, "prod"]}
        },
        "Resources": {
            "Network": {
                "Type": "AWS::CloudFormation::Stack",
                "Condition": "IsProd",
                "Properties": {"TemplateURL": "https://example.com/network.json"}
            },
            "Topic": {"Type": "AWS::SNS::Topic"}
        },
        "Outputs": {
            "VpcId": {
                "Value": {"Fn::GetAtt": ["Network", "Outputs.VpcId"]},
                "Export": {"Name": {"Fn::Sub": "${AWS::StackName}-VpcId"}}
            }
        }
    }"#;

    #[test]
    fn test_parse_sections() {
        let template = Template::from_json_str(TEMPLATE).unwrap();
        assert_eq!(template.format_version.as_deref(), Some("2010-09-09"));
        assert_eq!(template.parameters["Env"].parameter_type, "String");
        assert!(template.conditions["IsProd"].as_intrinsic().is_some());

        let ids: Vec<&str> = template.resources.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["Network", "Topic"]);

        let network = template.resource("Network").unwrap();
        assert_eq!(network.type_name, "AWS::CloudFormation::Stack");
        assert_eq!(network.attributes.condition.as_deref(), Some("IsProd"));
        assert!(template.resource("Topic").unwrap().properties.is_null());

        let output = &template.outputs["VpcId"];
        assert_eq!(
            output.value.as_intrinsic(),
            Some(&Intrinsic::get_att("Network", "Outputs.VpcId"))
        );
    }

    #[test]
    fn test_resources_section_is_required() {
        let err = Template::from_json_str(r#"{"Description": "empty"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `Resources`"));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = Template::from_json_str(r#"{"Resources": {}, "Output": {}}"#).unwrap_err();
        assert!(err.to_string().contains("unknown field `Output`"));
    }

    #[test]
    fn test_unknown_resource_key_is_rejected() {
        let err = Template::from_json_str(
            r#"{"Resources": {"Q": {"Type": "AWS::SQS::Queue", "Propertes": {}}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Unknown resource attribute 'Propertes'"));
    }

    #[test]
    fn test_round_trip_keeps_resource_order() {
        let template = Template::from_json_str(TEMPLATE).unwrap();
        let value = serde_json::to_value(&template).unwrap();
        let keys: Vec<&String> = value["Resources"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Network", "Topic"]);
        assert_eq!(
            value["Resources"]["Network"],
            json!({
                "Type": "AWS::CloudFormation::Stack",
                "Properties": {"TemplateURL": "https://example.com/network.json"},
                "Condition": "IsProd"
            })
        );
    }

    #[test]
    fn test_source_format_detect() {
        let detect = |name: &str, source: &str| SourceFormat::detect(Path::new(name), source);
        assert_eq!(detect("stack.json", "").unwrap(), SourceFormat::Json);
        assert_eq!(detect("stack.yml", "Resources: {}").unwrap(), SourceFormat::Yaml);
        assert_eq!(detect("stack.yaml", "{}").unwrap(), SourceFormat::Yaml);
        assert!(detect("stack.txt", "{}").is_err());
    }

    #[test]
    fn test_template_extension_is_detected_by_content() {
        let detect = |source: &str| SourceFormat::detect(Path::new("vpc.template"), source);
        assert_eq!(detect(TEMPLATE).unwrap(), SourceFormat::Json);
        assert_eq!(detect("\n  {\"Resources\": {}}").unwrap(), SourceFormat::Json);
        assert_eq!(detect("Resources:\n  Topic: {}\n").unwrap(), SourceFormat::Yaml);
        assert_eq!(detect("# {\"Resources\": {}}\n").unwrap(), SourceFormat::Yaml);
    }

    #[test]
    fn test_from_path_reads_json_template_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vpc.template");
        std::fs::write(&path, TEMPLATE).unwrap();
        let template = Template::from_path(&path).unwrap();
        assert_eq!(template, Template::from_json_str(TEMPLATE).unwrap());
    }
}
