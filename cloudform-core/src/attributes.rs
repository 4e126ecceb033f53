//! ResourceAttributes - Attributes common to every resource entry
//!
//! These sit next to `Type` and `Properties` in a template's `Resources`
//! section and are shared by all resource types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::value::Value;

/// `DependsOn` accepts a single logical ID or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    /// Logical IDs in declaration order
    pub fn logical_ids(&self) -> Vec<&str> {
        match self {
            DependsOn::One(id) => vec![id.as_str()],
            DependsOn::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// What CloudFormation does with a resource when it is removed or replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `CreationPolicy.ResourceSignal`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSignal {
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,
    /// ISO 8601 duration, e.g. `PT15M`
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<String>>,
}

/// `CreationPolicy.AutoScalingCreationPolicy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingCreationPolicy {
    #[serde(
        rename = "MinSuccessfulInstancesPercent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_successful_instances_percent: Option<Value<i64>>,
}

/// `CreationPolicy`: wait for signals before marking a resource complete
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreationPolicy {
    #[serde(
        rename = "AutoScalingCreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(rename = "ResourceSignal", default, skip_serializing_if = "Option::is_none")]
    pub resource_signal: Option<ResourceSignal>,
    /// AppStream fleets only
    #[serde(rename = "StartFleet", default, skip_serializing_if = "Option::is_none")]
    pub start_fleet: Option<Value<bool>>,
}

/// Attributes shared by every resource entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceAttributes {
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    /// Name of a condition in the template's `Conditions` section
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, Expr>>,
    #[serde(rename = "DeletionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<Value<DeletionPolicy>>,
    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<Value<DeletionPolicy>>,
    #[serde(rename = "CreationPolicy", default, skip_serializing_if = "Option::is_none")]
    pub creation_policy: Option<CreationPolicy>,
    /// Service-specific update behaviour (AutoScaling, Lambda alias, ...)
    #[serde(rename = "UpdatePolicy", default, skip_serializing_if = "Option::is_none")]
    pub update_policy: Option<IndexMap<String, Expr>>,
}

impl ResourceAttributes {
    /// Keys a resource entry may carry besides `Type` and `Properties`
    pub const KEYS: &'static [&'static str] = &[
        "DependsOn",
        "Condition",
        "Metadata",
        "DeletionPolicy",
        "UpdateReplacePolicy",
        "CreationPolicy",
        "UpdatePolicy",
    ];

    pub fn with_depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let id = logical_id.into();
        self.depends_on = Some(match self.depends_on.take() {
            None => DependsOn::One(id),
            Some(DependsOn::One(existing)) => DependsOn::Many(vec![existing, id]),
            Some(DependsOn::Many(mut ids)) => {
                ids.push(id);
                DependsOn::Many(ids)
            }
        });
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.deletion_policy = Some(Value::Literal(policy));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_depends_on_single_and_list() {
        let one: DependsOn = serde_json::from_value(json!("Vpc")).unwrap();
        assert_eq!(one.logical_ids(), vec!["Vpc"]);

        let many: DependsOn = serde_json::from_value(json!(["Vpc", "Subnet"])).unwrap();
        assert_eq!(many.logical_ids(), vec!["Vpc", "Subnet"]);
    }

    #[test]
    fn test_with_depends_on_accumulates() {
        let attrs = ResourceAttributes::default()
            .with_depends_on("Role")
            .with_depends_on("Bucket");
        assert_eq!(
            attrs.depends_on,
            Some(DependsOn::Many(vec!["Role".to_string(), "Bucket".to_string()]))
        );
    }

    #[test]
    fn test_deletion_policy_values() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "DeletionPolicy": "RetainExceptOnCreate",
            "UpdateReplacePolicy": {"Fn::If": ["IsProd", "Retain", "Delete"]}
        }))
        .unwrap();
        assert_eq!(
            attrs.deletion_policy,
            Some(Value::Literal(DeletionPolicy::RetainExceptOnCreate))
        );
        assert!(attrs.update_replace_policy.unwrap().is_intrinsic());
    }

    #[test]
    fn test_unknown_deletion_policy_is_rejected() {
        let err = serde_json::from_value::<ResourceAttributes>(json!({"DeletionPolicy": "Keep"}));
        assert!(err.is_err());
    }

    #[test]
    fn test_creation_policy() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "CreationPolicy": {"ResourceSignal": {"Count": 2, "Timeout": "PT15M"}}
        }))
        .unwrap();
        let signal = attrs.creation_policy.unwrap().resource_signal.unwrap();
        assert_eq!(signal.count, Some(Value::Literal(2)));
        assert_eq!(signal.timeout, Some(Value::from("PT15M")));
    }

    #[test]
    fn test_empty_attributes_serialize_to_nothing() {
        let value = serde_json::to_value(ResourceAttributes::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
