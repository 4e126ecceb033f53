//! AWS::Config::ConfigRule resource properties
//!
//! Auto-generated from CloudFormation schema: AWS::Config::ConfigRule
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::{Expr, Resource, ResourceProperties, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `AWS::Config::ConfigRule` resource
pub type ConfigRule = Resource<Properties>;

/// Adds or updates an Config rule to evaluate if your AWS resources comply with your desired
/// configurations. For information on how many Config rules you can have per account, see
/// Service Limits in the Config Developer Guide.
///
/// There are two types of rules: Config Managed Rules and Config Custom Rules. You can use the
/// ConfigRuleName parameter to update an existing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Properties {
    /// A name for the CC rule. If you don't specify a name, CFN generates a unique physical ID and
    /// uses that ID for the rule name.
    #[serde(rename = "ConfigRuleName", default, skip_serializing_if = "Option::is_none")]
    pub config_rule_name: Option<Value<String>>,
    /// The description that you provide for the CC rule.
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The modes the CC rule can be evaluated in. The valid values are distinct objects. By
    /// default, the value is Detective evaluation mode only.
    #[serde(rename = "EvaluationModes", default, skip_serializing_if = "Option::is_none")]
    pub evaluation_modes: Option<Value<Vec<Value<EvaluationModeConfiguration>>>>,
    /// A string, in JSON format, that is passed to the CC rule Lambda function.
    #[serde(rename = "InputParameters", default, skip_serializing_if = "Option::is_none")]
    pub input_parameters: Option<Expr>,
    /// The maximum frequency with which CC runs evaluations for a rule. You can specify a value for
    /// MaximumExecutionFrequency when:
    ///
    /// You are using an AWS managed rule that is triggered at a periodic frequency.
    /// Your custom rule is triggered when CC delivers the configuration snapshot.
    ///
    /// Allowed values: `One_Hour` | `Three_Hours` | `Six_Hours` | `Twelve_Hours` |
    /// `TwentyFour_Hours`
    #[serde(rename = "MaximumExecutionFrequency", default, skip_serializing_if = "Option::is_none")]
    pub maximum_execution_frequency: Option<Value<String>>,
    /// Defines which resources can trigger an evaluation for the rule. The scope can include one or
    /// more resource types, a combination of one resource type and one resource ID, or a
    /// combination of a tag key and value. Specify a scope to constrain the resources that can
    /// trigger an evaluation for the rule. If you do not specify a scope, evaluations are triggered
    /// when any resource in the recording group changes.
    #[serde(rename = "Scope", default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Value<Scope>>,
    /// Provides the rule owner (AWS for managed rules, CUSTOM_POLICY for Custom Policy rules, and
    /// CUSTOM_LAMBDA for Custom Lambda rules), the rule identifier, and the notifications that
    /// cause the function to evaluate your AWS resources.
    #[serde(rename = "Source")]
    pub source: Value<Source>,
}

impl ResourceProperties for Properties {
    const TYPE_NAME: &'static str = "AWS::Config::ConfigRule";
    const RETURN_ATTRIBUTES: &'static [&'static str] = &["Arn", "Compliance.Type", "ConfigRuleId"];
}

/// Provides the runtime system, policy definition, and whether debug logging enabled. You can
/// specify the following CustomPolicyDetail parameter values only for CC Custom Policy rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomPolicyDetails {
    /// The boolean expression for enabling debug logging for your CC Custom Policy rule. The
    /// default value is false.
    #[serde(rename = "EnableDebugLogDelivery", default, skip_serializing_if = "Option::is_none")]
    pub enable_debug_log_delivery: Option<Value<bool>>,
    /// The runtime system for your CC Custom Policy rule. Guard is a policy-as-code language that
    /// allows you to write policies that are enforced by CC Custom Policy rules.
    #[serde(rename = "PolicyRuntime", default, skip_serializing_if = "Option::is_none")]
    pub policy_runtime: Option<Value<String>>,
    /// The policy definition containing the logic for your CC Custom Policy rule.
    #[serde(rename = "PolicyText", default, skip_serializing_if = "Option::is_none")]
    pub policy_text: Option<Value<String>>,
}

/// The configuration object for CC rule evaluation mode. The supported valid values are
/// Detective or Proactive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluationModeConfiguration {
    /// The mode of an evaluation.
    ///
    /// Allowed values: `DETECTIVE` | `PROACTIVE`
    #[serde(rename = "Mode", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value<String>>,
}

/// Defines which resources trigger an evaluation for an CC rule. The scope can include one or
/// more resource types, a combination of a tag key and value, or a combination of one resource
/// type and one resource ID. Specify a scope to constrain which resources trigger an evaluation
/// for a rule. Otherwise, evaluations for the rule are triggered when any resource in your
/// recording group changes in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Scope {
    /// The ID of the only AWS resource that you want to trigger an evaluation for the rule. If you
    /// specify a resource ID, you must specify one resource type for ComplianceResourceTypes.
    #[serde(rename = "ComplianceResourceId", default, skip_serializing_if = "Option::is_none")]
    pub compliance_resource_id: Option<Value<String>>,
    /// The resource types of only those AWS resources that you want to trigger an evaluation for
    /// the rule. You can only specify one type if you also specify a resource ID for
    /// ComplianceResourceId.
    #[serde(rename = "ComplianceResourceTypes", default, skip_serializing_if = "Option::is_none")]
    pub compliance_resource_types: Option<Value<Vec<Value<String>>>>,
    /// The tag key that is applied to only those AWS resources that you want to trigger an
    /// evaluation for the rule.
    #[serde(rename = "TagKey", default, skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<Value<String>>,
    /// The tag value applied to only those AWS resources that you want to trigger an evaluation for
    /// the rule. If you specify a value for TagValue, you must also specify a value for TagKey.
    #[serde(rename = "TagValue", default, skip_serializing_if = "Option::is_none")]
    pub tag_value: Option<Value<String>>,
}

/// Provides the CustomPolicyDetails, the rule owner (AWS for managed rules, CUSTOM_POLICY for
/// Custom Policy rules, and CUSTOM_LAMBDA for Custom Lambda rules), the rule identifier, and
/// the events that cause the evaluation of your AWS resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Source {
    /// Provides the runtime system, policy definition, and whether debug logging is enabled.
    /// Required when owner is set to CUSTOM_POLICY.
    #[serde(rename = "CustomPolicyDetails", default, skip_serializing_if = "Option::is_none")]
    pub custom_policy_details: Option<Value<CustomPolicyDetails>>,
    /// Indicates whether AWS or the customer owns and manages the CC rule.
    ///
    /// Allowed values: `AWS` | `CUSTOM_LAMBDA` | `CUSTOM_POLICY`
    #[serde(rename = "Owner")]
    pub owner: Value<String>,
    /// Provides the source and the message types that cause CC to evaluate your AWS resources
    /// against a rule. It also provides the frequency with which you want CC to run evaluations for
    /// the rule if the trigger type is periodic.
    ///
    /// If the owner is set to CUSTOM_POLICY, the only acceptable values for the CC rule trigger
    /// message type are ConfigurationItemChangeNotification and
    /// OversizedConfigurationItemChangeNotification.
    #[serde(rename = "SourceDetails", default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<Value<Vec<Value<SourceDetail>>>>,
    /// For CC Managed rules, a predefined identifier from a list. For example, IAM_PASSWORD_POLICY
    /// is a managed rule.
    ///
    /// For CC Custom Lambda rules, the identifier is the Amazon Resource Name (ARN) of the rule's
    /// LAMlong function, such as arn:aws:lambda:us-east-2:123456789012:function:custom_rule_name.
    ///
    /// For CC Custom Policy rules, this field will be ignored.
    #[serde(rename = "SourceIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<Value<String>>,
}

/// Provides the source and the message types that trigger CC to evaluate your AWS resources
/// against a rule. It also provides the frequency with which you want CC to run evaluations for
/// the rule if the trigger type is periodic. You can specify the parameter values for
/// SourceDetail only for custom rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SourceDetail {
    /// The source of the event, such as an AWS service, that triggers CC to evaluate your AWS
    /// resources.
    ///
    /// Allowed values: `aws.config`
    #[serde(rename = "EventSource")]
    pub event_source: Value<String>,
    /// The frequency at which you want CC to run evaluations for a custom rule with a periodic
    /// trigger. If you specify a value for MaximumExecutionFrequency, then MessageType must use the
    /// ScheduledNotification value.
    ///
    /// By default, rules with a periodic trigger are evaluated every 24 hours. To change the
    /// frequency, specify a valid value for the MaximumExecutionFrequency parameter.
    ///
    /// Allowed values: `One_Hour` | `Three_Hours` | `Six_Hours` | `Twelve_Hours` |
    /// `TwentyFour_Hours`
    #[serde(rename = "MaximumExecutionFrequency", default, skip_serializing_if = "Option::is_none")]
    pub maximum_execution_frequency: Option<Value<String>>,
    /// The type of notification that triggers CC to run an evaluation for a rule.
    ///
    /// Allowed values: `ConfigurationItemChangeNotification` |
    /// `OversizedConfigurationItemChangeNotification` | `ScheduledNotification` |
    /// `ConfigurationSnapshotDeliveryCompleted`
    #[serde(rename = "MessageType")]
    pub message_type: Value<String>,
}
