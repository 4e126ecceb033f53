//! Resource - Typed resource entries
//!
//! Each catalog type implements [`ResourceProperties`] for its `Properties`
//! shape. [`Resource`] pairs those properties with the `Type` discriminant and
//! the common [`ResourceAttributes`].

use schemars::JsonSchema;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attributes::ResourceAttributes;
use crate::error::{Error, Result};
use crate::template::TemplateResource;
use crate::value::Value;

/// The `Properties` shape of one CloudFormation resource type
pub trait ResourceProperties: Serialize + DeserializeOwned + JsonSchema {
    /// CloudFormation type name (e.g., "AWS::EMR::Cluster")
    const TYPE_NAME: &'static str;

    /// Attribute names usable with `Fn::GetAtt`
    const RETURN_ATTRIBUTES: &'static [&'static str] = &[];

    /// Link to the resource reference in the CloudFormation user guide
    fn documentation_url() -> String {
        documentation_url(Self::TYPE_NAME)
    }
}

/// Build the user guide URL for a type name such as "AWS::Config::ConfigRule"
pub fn documentation_url(type_name: &str) -> String {
    let slug = type_name
        .split("::")
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    let slug = slug.strip_prefix("aws-").unwrap_or(&slug);
    format!(
        "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-{}.html",
        slug
    )
}

/// A resource entry of type `P::TYPE_NAME`
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    /// Convert to an untyped template entry
    pub fn to_template_resource(&self) -> Result<TemplateResource> {
        Ok(TemplateResource {
            type_name: P::TYPE_NAME.to_string(),
            properties: serde_json::to_value(&self.properties)?,
            attributes: self.attributes.clone(),
        })
    }
}

impl<P: ResourceProperties> TryFrom<&TemplateResource> for Resource<P> {
    type Error = Error;

    fn try_from(raw: &TemplateResource) -> Result<Self> {
        if raw.type_name != P::TYPE_NAME {
            return Err(Error::TypeMismatch {
                expected: P::TYPE_NAME.to_string(),
                actual: raw.type_name.clone(),
            });
        }
        log::debug!("decoding properties of {}", P::TYPE_NAME);
        let properties = match &raw.properties {
            serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
            other => other.clone(),
        };
        let properties =
            serde_json::from_value(properties).map_err(|e| Error::InvalidProperties {
                type_name: P::TYPE_NAME.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            properties,
            attributes: raw.attributes.clone(),
        })
    }
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a, P> {
            #[serde(rename = "Type")]
            type_name: &'static str,
            #[serde(rename = "Properties")]
            properties: &'a P,
            #[serde(flatten)]
            attributes: &'a ResourceAttributes,
        }

        Entry {
            type_name: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = TemplateResource::deserialize(deserializer)?;
        Resource::try_from(&raw).map_err(D::Error::custom)
    }
}

/// A key-value tag attached to a resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name of the tag.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for the tag.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Value::Literal(key.into()),
            value: Value::Literal(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::DeletionPolicy;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
    #[serde(deny_unknown_fields)]
    struct QueueProperties {
        #[serde(rename = "QueueName")]
        queue_name: Value<String>,
        #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
        tags: Option<Vec<Tag>>,
    }

    impl ResourceProperties for QueueProperties {
        const TYPE_NAME: &'static str = "AWS::SQS::Queue";
        const RETURN_ATTRIBUTES: &'static [&'static str] = &["Arn", "QueueName"];
    }

    #[test]
    fn test_documentation_url() {
        assert_eq!(
            documentation_url("AWS::Timestream::ScheduledQuery"),
            "https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-timestream-scheduledquery.html"
        );
        assert!(QueueProperties::documentation_url().ends_with("aws-resource-sqs-queue.html"));
    }

    #[test]
    fn test_deserialize_typed_resource() {
        let resource: Resource<QueueProperties> = serde_json::from_value(json!({
            "Type": "AWS::SQS::Queue",
            "DeletionPolicy": "Retain",
            "Properties": {
                "QueueName": "jobs",
                "Tags": [{"Key": "team", "Value": "data"}]
            }
        }))
        .unwrap();

        assert_eq!(resource.type_name(), "AWS::SQS::Queue");
        assert_eq!(resource.properties.queue_name, Value::from("jobs"));
        assert_eq!(resource.properties.tags, Some(vec![Tag::new("team", "data")]));
        assert_eq!(
            resource.attributes.deletion_policy,
            Some(Value::Literal(DeletionPolicy::Retain))
        );
    }

    #[test]
    fn test_type_mismatch() {
        let err = serde_json::from_value::<Resource<QueueProperties>>(json!({
            "Type": "AWS::SNS::Topic",
            "Properties": {"QueueName": "jobs"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("expected AWS::SQS::Queue"));
    }

    #[test]
    fn test_unknown_property_is_rejected() {
        let err = serde_json::from_value::<Resource<QueueProperties>>(json!({
            "Type": "AWS::SQS::Queue",
            "Properties": {"QueueName": "jobs", "Fifo": true}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `Fifo`"));
    }

    #[test]
    fn test_missing_required_property() {
        let err = serde_json::from_value::<Resource<QueueProperties>>(json!({
            "Type": "AWS::SQS::Queue"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("missing field `QueueName`"));
    }

    #[test]
    fn test_serialize_includes_type_and_attributes() {
        let resource = Resource::new(QueueProperties {
            queue_name: "jobs".into(),
            tags: None,
        })
        .with_attributes(ResourceAttributes::default().with_condition("IsProd"));

        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::SQS::Queue",
                "Properties": {"QueueName": "jobs"},
                "Condition": "IsProd"
            })
        );
    }
}
