//! Catalog registry
//!
//! Maps CloudFormation type names onto the generated resource modules and
//! decodes whole templates against them.

use cloudform_core::schema::{ResourceSchema, json_schema_of};
use cloudform_core::{
    Error, Resource, ResourceAttributes, ResourceProperties, Result, Template, TemplateResource,
};
use indexmap::IndexMap;
use schemars::schema::RootSchema;

use crate::{appflow, cloudformation, config, emr, timestream};

macro_rules! catalog {
    ($($variant:ident => $props:ty),* $(,)?) => {
        /// A resource entry decoded against the catalog
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyResource {
            $($variant(Box<Resource<$props>>),)*
            /// A type outside the catalog, kept untyped
            Unknown(TemplateResource),
        }

        impl AnyResource {
            /// Decode `raw` into its typed form, or keep it as `Unknown`
            pub fn decode(raw: &TemplateResource) -> Result<Self> {
                $(
                    if raw.type_name == <$props as ResourceProperties>::TYPE_NAME {
                        return Ok(AnyResource::$variant(Box::new(raw.decode::<$props>()?)));
                    }
                )*
                log::debug!("{} is not in the catalog", raw.type_name);
                Ok(AnyResource::Unknown(raw.clone()))
            }

            pub fn type_name(&self) -> &str {
                match self {
                    $(AnyResource::$variant(_) => <$props as ResourceProperties>::TYPE_NAME,)*
                    AnyResource::Unknown(raw) => &raw.type_name,
                }
            }

            pub fn attributes(&self) -> &ResourceAttributes {
                match self {
                    $(AnyResource::$variant(resource) => &resource.attributes,)*
                    AnyResource::Unknown(raw) => &raw.attributes,
                }
            }

            /// Attribute names usable with `Fn::GetAtt` (empty for unknown types)
            pub fn return_attributes(&self) -> &'static [&'static str] {
                match self {
                    $(AnyResource::$variant(_) => <$props as ResourceProperties>::RETURN_ATTRIBUTES,)*
                    AnyResource::Unknown(_) => &[],
                }
            }

            pub fn to_template_resource(&self) -> Result<TemplateResource> {
                match self {
                    $(AnyResource::$variant(resource) => resource.to_template_resource(),)*
                    AnyResource::Unknown(raw) => Ok(raw.clone()),
                }
            }
        }

        const TYPE_NAMES: &[&str] = &[$(<$props as ResourceProperties>::TYPE_NAME,)*];

        /// Introspection schema of a catalog type
        pub fn schema(type_name: &str) -> Option<ResourceSchema> {
            $(
                if type_name == <$props as ResourceProperties>::TYPE_NAME {
                    return Some(ResourceSchema::of::<$props>());
                }
            )*
            None
        }

        /// Draft-07 JSON Schema of the `Properties` of a catalog type
        pub fn json_schema(type_name: &str) -> Option<RootSchema> {
            $(
                if type_name == <$props as ResourceProperties>::TYPE_NAME {
                    return Some(json_schema_of::<$props>());
                }
            )*
            None
        }
    };
}

catalog! {
    ConnectorProfile => appflow::connector_profile::Properties,
    Stack => cloudformation::stack::Properties,
    ConfigRule => config::config_rule::Properties,
    Cluster => emr::cluster::Properties,
    ScheduledQuery => timestream::scheduled_query::Properties,
}

impl AnyResource {
    pub fn is_unknown(&self) -> bool {
        matches!(self, AnyResource::Unknown(_))
    }
}

/// All type names with a typed catalog module
pub fn type_names() -> &'static [&'static str] {
    TYPE_NAMES
}

/// Resolve a type name ignoring ASCII case (e.g., "aws::emr::cluster")
pub fn find_type_name(name: &str) -> Option<&'static str> {
    TYPE_NAMES
        .iter()
        .copied()
        .find(|type_name| type_name.eq_ignore_ascii_case(name))
}

/// Outcome of decoding every resource of a template, keyed by logical ID in
/// template order
#[derive(Debug)]
pub struct TemplateReport {
    pub resources: IndexMap<String, Result<AnyResource>>,
}

impl TemplateReport {
    pub fn decoded(&self) -> impl Iterator<Item = (&str, &AnyResource)> {
        self.resources
            .iter()
            .filter_map(|(id, result)| result.as_ref().ok().map(|r| (id.as_str(), r)))
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.resources
            .iter()
            .filter_map(|(id, result)| result.as_ref().err().map(|e| (id.as_str(), e)))
    }

    /// Logical IDs and type names of resources outside the catalog
    pub fn unknown_types(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decoded()
            .filter(|(_, resource)| resource.is_unknown())
            .map(|(id, resource)| (id, resource.type_name()))
    }

    pub fn is_ok(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Decode every resource of `template` against the catalog
pub fn decode_template(template: &Template) -> TemplateReport {
    let resources = template
        .resources
        .iter()
        .map(|(logical_id, raw)| {
            let result = AnyResource::decode(raw);
            if let Err(e) = &result {
                log::debug!("{}: {}", logical_id, e);
            }
            (logical_id.clone(), result)
        })
        .collect();
    TemplateReport { resources }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudform_core::Intrinsic;
    use cloudform_core::Value;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> TemplateResource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_type_names() {
        assert_eq!(
            type_names(),
            &[
                "AWS::AppFlow::ConnectorProfile",
                "AWS::CloudFormation::Stack",
                "AWS::Config::ConfigRule",
                "AWS::EMR::Cluster",
                "AWS::Timestream::ScheduledQuery",
            ]
        );
    }

    #[test]
    fn test_find_type_name() {
        assert_eq!(find_type_name("aws::emr::cluster"), Some("AWS::EMR::Cluster"));
        assert_eq!(find_type_name("AWS::S3::Bucket"), None);
    }

    #[test]
    fn test_decode_known_type() {
        let resource = AnyResource::decode(&raw(json!({
            "Type": "AWS::CloudFormation::Stack",
            "Properties": {
                "TemplateURL": "https://example.com/network.json",
                "TimeoutInMinutes": 30,
                "Parameters": {"VpcId": {"Ref": "Vpc"}}
            },
            "DependsOn": "Bucket"
        })))
        .unwrap();

        let AnyResource::Stack(stack) = &resource else {
            panic!("expected a stack, got {:?}", resource);
        };
        assert_eq!(stack.properties.timeout_in_minutes, Some(Value::Literal(30)));
        let parameters = stack
            .properties
            .parameters
            .as_ref()
            .and_then(Value::literal)
            .unwrap();
        assert_eq!(
            parameters["VpcId"],
            Value::Intrinsic(Intrinsic::reference("Vpc"))
        );
        assert_eq!(resource.type_name(), "AWS::CloudFormation::Stack");
        assert_eq!(
            resource.attributes().depends_on.as_ref().unwrap().logical_ids(),
            vec!["Bucket"]
        );
        assert_eq!(resource.return_attributes(), &["Outputs.NestedStackOutputName"]);
    }

    #[test]
    fn test_decode_intrinsic_in_place_of_list() {
        let resource = AnyResource::decode(&raw(json!({
            "Type": "AWS::CloudFormation::Stack",
            "Properties": {
                "TemplateURL": "https://example.com/network.json",
                "NotificationARNs": {"Ref": "Topics"},
                "Tags": {"Fn::If": ["IsProd", [{"Key": "env", "Value": "prod"}], {"Ref": "AWS::NoValue"}]}
            }
        })))
        .unwrap();
        let AnyResource::Stack(stack) = &resource else {
            panic!("expected a stack, got {:?}", resource);
        };
        assert_eq!(
            stack.properties.notification_ar_ns,
            Some(Value::Intrinsic(Intrinsic::reference("Topics")))
        );
        assert!(stack.properties.tags.as_ref().unwrap().is_intrinsic());
    }

    #[test]
    fn test_decode_unknown_type() {
        let resource = AnyResource::decode(&raw(json!({
            "Type": "AWS::S3::Bucket",
            "Properties": {"Anything": true}
        })))
        .unwrap();
        assert!(resource.is_unknown());
        assert_eq!(resource.type_name(), "AWS::S3::Bucket");
        assert!(resource.return_attributes().is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_property() {
        let err = AnyResource::decode(&raw(json!({
            "Type": "AWS::Config::ConfigRule",
            "Properties": {"Source": {"Owner": "AWS"}, "Bogus": 1}
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidProperties { ref type_name, .. } if type_name == "AWS::Config::ConfigRule"));
    }

    #[test]
    fn test_decode_rejects_missing_required_property() {
        let err = AnyResource::decode(&raw(json!({
            "Type": "AWS::Config::ConfigRule",
            "Properties": {}
        })))
        .unwrap_err();
        assert!(err.to_string().contains("Source"));
    }

    #[test]
    fn test_to_template_resource_round_trips_literals() {
        let entry = raw(json!({
            "Type": "AWS::Config::ConfigRule",
            "Properties": {
                "ConfigRuleName": "s3-bucket-versioning",
                "Source": {"Owner": "AWS", "SourceIdentifier": "S3_BUCKET_VERSIONING_ENABLED"}
            },
            "DeletionPolicy": "Retain"
        }));
        let resource = AnyResource::decode(&entry).unwrap();
        assert_eq!(resource.to_template_resource().unwrap(), entry);
    }

    #[test]
    fn test_schema_lookup() {
        let schema = schema("AWS::Timestream::ScheduledQuery").unwrap();
        assert_eq!(schema.type_name, "AWS::Timestream::ScheduledQuery");
        assert!(schema.attribute("QueryString").unwrap().required);
        assert!(!schema.attribute("KmsKeyId").unwrap().required);
        assert!(schema.property_type("DimensionMapping").is_some());
        assert!(schema.return_attributes.contains(&"SQName".to_string()));
        assert!(schema.documentation_url.ends_with("aws-resource-timestream-scheduledquery.html"));
        assert!(super::schema("AWS::S3::Bucket").is_none());
    }

    #[test]
    fn test_json_schema_lookup() {
        let root = json_schema("AWS::EMR::Cluster").unwrap();
        assert!(root.definitions.contains_key("JobFlowInstancesConfig"));
        assert!(root.definitions.contains_key("Configuration"));
        assert!(json_schema("AWS::S3::Bucket").is_none());
    }

    #[test]
    fn test_decode_template_report() {
        let template = Template::from_json_str(
            r#"{
                "Resources": {
                    "Rule": {
                        "Type": "AWS::Config::ConfigRule",
                        "Properties": {"Source": {"Owner": "AWS", "SourceIdentifier": "IAM_PASSWORD_POLICY"}}
                    },
                    "Bucket": {"Type": "AWS::S3::Bucket"},
                    "Broken": {
                        "Type": "AWS::CloudFormation::Stack",
                        "Properties": {"TimeoutInMinutes": "thirty"}
                    }
                }
            }"#,
        )
        .unwrap();

        let report = decode_template(&template);
        assert!(!report.is_ok());
        let decoded: Vec<&str> = report.decoded().map(|(id, _)| id).collect();
        assert_eq!(decoded, vec!["Rule", "Bucket"]);
        let unknown: Vec<(&str, &str)> = report.unknown_types().collect();
        assert_eq!(unknown, vec![("Bucket", "AWS::S3::Bucket")]);
        let errors: Vec<&str> = report.errors().map(|(id, _)| id).collect();
        assert_eq!(errors, vec!["Broken"]);
    }
}
