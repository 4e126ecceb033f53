//! AWS::CloudFormation::Stack resource properties
//!
//! Auto-generated from CloudFormation schema: AWS::CloudFormation::Stack
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use std::collections::BTreeMap;

use cloudform_core::{Resource, ResourceProperties, Tag, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `AWS::CloudFormation::Stack` resource
pub type Stack = Resource<Properties>;

/// The AWS::CloudFormation::Stack resource nests a stack as a resource in a top-level template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Properties {
    /// The Amazon SNS topic ARNs to publish stack related events. You can find your Amazon SNS
    /// topic ARNs using the Amazon SNS console or your Command Line Interface (CLI).
    #[serde(rename = "NotificationARNs", default, skip_serializing_if = "Option::is_none")]
    pub notification_ar_ns: Option<Value<Vec<Value<String>>>>,
    /// The set value pairs that represent the parameters passed to CloudFormation when this nested
    /// stack is created. Each parameter has a name corresponding to a parameter defined in the
    /// embedded template and a value representing the value that you want to set for the parameter.
    ///
    /// If you use the Ref function to pass a parameter value to a nested stack, comma-delimited
    /// list parameters must be of type String. In other words, you can't pass values that are of
    /// type CommaDelimitedList to nested stacks.
    ///
    /// Conditional. Required if the nested stack requires input parameters.
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value<BTreeMap<String, Value<String>>>>,
    /// Key-value pairs to associate with this stack. CloudFormation also propagates these tags to
    /// the resources created in this stack. A maximum number of 50 tags can be specified.
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Value<Tag>>>>,
    /// The URL of a file that contains the template body. The URL must point to a template (max
    /// size: 1 MB) that's located in an Amazon S3 bucket. The location for an Amazon S3 bucket must
    /// start with https://.
    ///
    /// Whether an update causes interruptions depends on the resources that are being updated. An
    /// update never causes a nested stack to be replaced.
    #[serde(rename = "TemplateURL")]
    pub template_url: Value<String>,
    /// The length of time, in minutes, that CloudFormation waits for the nested stack to reach the
    /// CREATE_COMPLETE state. The default is no timeout. When CloudFormation detects that the
    /// nested stack has reached the CREATE_COMPLETE state, it marks the nested stack resource as
    /// CREATE_COMPLETE in the parent stack and resumes creating the parent stack. If the timeout
    /// period expires before the nested stack reaches CREATE_COMPLETE, CloudFormation marks the
    /// nested stack as failed and rolls back both the nested stack and parent stack.
    #[serde(rename = "TimeoutInMinutes", default, skip_serializing_if = "Option::is_none")]
    pub timeout_in_minutes: Option<Value<i64>>,
}

impl ResourceProperties for Properties {
    const TYPE_NAME: &'static str = "AWS::CloudFormation::Stack";
    const RETURN_ATTRIBUTES: &'static [&'static str] = &["Outputs.NestedStackOutputName"];
}
