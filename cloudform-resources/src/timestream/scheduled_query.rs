//! AWS::Timestream::ScheduledQuery resource properties
//!
//! Auto-generated from CloudFormation schema: AWS::Timestream::ScheduledQuery
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use cloudform_core::{Resource, ResourceProperties, Tag, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `AWS::Timestream::ScheduledQuery` resource
pub type ScheduledQuery = Resource<Properties>;

/// The AWS::Timestream::ScheduledQuery resource creates a Timestream Scheduled Query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Properties {
    /// Using a ClientToken makes the call to CreateScheduledQuery idempotent, meaning that multiple
    /// identical calls have the same effect as one single call. If CreateScheduledQuery is called
    /// without a ClientToken, the Query SDK generates a ClientToken on your behalf. After 8 hours,
    /// any request with the same ClientToken is treated as a new request.
    #[serde(rename = "ClientToken", default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<Value<String>>,
    /// Configuration for error reporting. Error reports will be generated when a problem is
    /// encountered when writing the query results.
    #[serde(rename = "ErrorReportConfiguration")]
    pub error_report_configuration: Value<ErrorReportConfiguration>,
    /// The Amazon KMS key used to encrypt the scheduled query resource, at-rest. If the Amazon KMS
    /// key is not specified, the scheduled query resource will be encrypted with a Timestream owned
    /// Amazon KMS key. To specify a KMS key, use the key ID, key ARN, alias name, or alias ARN.
    /// When using an alias name, prefix the name with alias/.
    ///
    /// If ErrorReportConfiguration uses SSE_KMS as encryption type, the same KmsKeyId is used to
    /// encrypt the error report at rest.
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
    /// Notification configuration for the scheduled query. A notification is sent by Timestream
    /// when a query run finishes, when the state is updated or when you delete it.
    #[serde(rename = "NotificationConfiguration")]
    pub notification_configuration: Value<NotificationConfiguration>,
    /// The query string to run. Parameter names can be specified in the query string with the @
    /// character followed by an identifier. The named parameter @scheduled_runtime is reserved and
    /// can be used in the query to get the time at which the query is scheduled to run.
    ///
    /// The timestamp calculated according to the ScheduleConfiguration parameter will be the value
    /// of @scheduled_runtime for each query run. For example, consider an instance of a scheduled
    /// query executing on 2021-12-01 00:00:00. For this instance, the @scheduled_runtime parameter
    /// is initialized to the timestamp 2021-12-01 00:00:00 when invoking the query.
    #[serde(rename = "QueryString")]
    pub query_string: Value<String>,
    /// Schedule configuration.
    #[serde(rename = "ScheduleConfiguration")]
    pub schedule_configuration: Value<ScheduleConfiguration>,
    /// The ARN for the IAM role that Timestream will assume when running the scheduled query.
    #[serde(rename = "ScheduledQueryExecutionRoleArn")]
    pub scheduled_query_execution_role_arn: Value<String>,
    /// The name of the scheduled query. Scheduled query names must be unique within each Region.
    #[serde(rename = "ScheduledQueryName", default, skip_serializing_if = "Option::is_none")]
    pub scheduled_query_name: Option<Value<String>>,
    /// A list of key-value pairs to label the scheduled query.
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Value<Tag>>>>,
    /// Scheduled query target store configuration.
    #[serde(rename = "TargetConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub target_configuration: Option<Value<TargetConfiguration>>,
}

impl ResourceProperties for Properties {
    const TYPE_NAME: &'static str = "AWS::Timestream::ScheduledQuery";
    const RETURN_ATTRIBUTES: &'static [&'static str] = &[
        "Arn",
        "SQName",
        "SQQueryString",
        "SQScheduleConfiguration",
        "SQNotificationConfiguration",
        "SQClientToken",
        "SQScheduledQueryExecutionRoleArn",
        "SQTargetConfiguration",
        "SQErrorReportConfiguration",
        "SQKmsKeyId",
        "SQTags",
    ];
}

/// This type is used to map column(s) from the query result to a dimension in the destination
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DimensionMapping {
    /// Type for the dimension.
    ///
    /// Allowed values: `VARCHAR`
    #[serde(rename = "DimensionValueType")]
    pub dimension_value_type: Value<String>,
    /// Column name from query result.
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

/// Configuration for error reporting. Error reports will be generated when a problem is
/// encountered when writing the query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ErrorReportConfiguration {
    /// The S3 configuration for the error reports.
    #[serde(rename = "S3Configuration")]
    pub s3_configuration: Value<S3Configuration>,
}

/// MixedMeasureMappings are mappings that can be used to ingest data into a mixture of narrow
/// and multi measures in the derived table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MixedMeasureMapping {
    /// Refers to the value of the measure name in a result row. This field is required if
    /// MeasureNameColumn is provided.
    #[serde(rename = "MeasureName", default, skip_serializing_if = "Option::is_none")]
    pub measure_name: Option<Value<String>>,
    /// Type of the value that is to be read from SourceColumn. If the mapping is for MULTI, use
    /// MeasureValueType.MULTI.
    ///
    /// Allowed values: `BIGINT` | `BOOLEAN` | `DOUBLE` | `VARCHAR` | `MULTI`
    #[serde(rename = "MeasureValueType")]
    pub measure_value_type: Value<String>,
    /// Required when MeasureValueType is MULTI. Attribute mappings for MULTI value measures.
    #[serde(
        rename = "MultiMeasureAttributeMappings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub multi_measure_attribute_mappings: Option<Value<Vec<Value<MultiMeasureAttributeMapping>>>>,
    /// This field refers to the source column from which the measure value is to be read for result
    /// materialization.
    #[serde(rename = "SourceColumn", default, skip_serializing_if = "Option::is_none")]
    pub source_column: Option<Value<String>>,
    /// Target measure name to be used. If not provided, the target measure name by default would be
    /// MeasureName if provided, or SourceColumn otherwise.
    #[serde(rename = "TargetMeasureName", default, skip_serializing_if = "Option::is_none")]
    pub target_measure_name: Option<Value<String>>,
}

/// An attribute mapping to be used for mapping query results to ingest data for multi-measure
/// attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MultiMeasureAttributeMapping {
    /// Value type of the measure value column to be read from the query result.
    ///
    /// Allowed values: `BIGINT` | `BOOLEAN` | `DOUBLE` | `VARCHAR` | `TIMESTAMP`
    #[serde(rename = "MeasureValueType")]
    pub measure_value_type: Value<String>,
    /// Source measure value column in the query result where the attribute value is to be read.
    #[serde(rename = "SourceColumn")]
    pub source_column: Value<String>,
    /// Custom name to be used for attribute name in derived table. If not provided, source column
    /// name would be used.
    #[serde(
        rename = "TargetMultiMeasureAttributeName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_multi_measure_attribute_name: Option<Value<String>>,
}

/// Only one of MixedMeasureMappings or MultiMeasureMappings is to be provided.
/// MultiMeasureMappings can be used to ingest data as multi measures in the derived table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MultiMeasureMappings {
    /// Required. Attribute mappings to be used for mapping query results to ingest data for
    /// multi-measure attributes.
    #[serde(rename = "MultiMeasureAttributeMappings")]
    pub multi_measure_attribute_mappings: Value<Vec<Value<MultiMeasureAttributeMapping>>>,
    /// The name of the target multi-measure name in the derived table. This input is required when
    /// measureNameColumn is not provided. If MeasureNameColumn is provided, then value from that
    /// column will be used as multi-measure name.
    #[serde(rename = "TargetMultiMeasureName", default, skip_serializing_if = "Option::is_none")]
    pub target_multi_measure_name: Option<Value<String>>,
}

/// Notification configuration for the scheduled query. A notification is sent by Timestream
/// when a query run finishes, when the state is updated or when you delete it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NotificationConfiguration {
    /// Details on SNS configuration.
    #[serde(rename = "SnsConfiguration")]
    pub sns_configuration: Value<SnsConfiguration>,
}

/// Details on S3 location for error reports that result from running a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct S3Configuration {
    /// Name of the S3 bucket under which error reports will be created.
    #[serde(rename = "BucketName")]
    pub bucket_name: Value<String>,
    /// Encryption at rest options for the error reports. If no encryption option is specified,
    /// Timestream will choose SSE_S3 as default.
    ///
    /// Allowed values: `SSE_S3` | `SSE_KMS`
    #[serde(rename = "EncryptionOption", default, skip_serializing_if = "Option::is_none")]
    pub encryption_option: Option<Value<String>>,
    /// Prefix for error report keys.
    #[serde(rename = "ObjectKeyPrefix", default, skip_serializing_if = "Option::is_none")]
    pub object_key_prefix: Option<Value<String>>,
}

/// Configuration for when the scheduled query is executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScheduleConfiguration {
    /// An expression that denotes when to trigger the scheduled query run. This can be a cron
    /// expression or a rate expression.
    #[serde(rename = "ScheduleExpression")]
    pub schedule_expression: Value<String>,
}

/// SNS configuration for notification upon scheduled query execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SnsConfiguration {
    /// SNS topic ARN that the scheduled query status notifications will be sent to.
    #[serde(rename = "TopicArn")]
    pub topic_arn: Value<String>,
}

/// Configuration of target store where scheduled query results are written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TargetConfiguration {
    /// Configuration needed to write data into the Timestream database and table.
    #[serde(rename = "TimestreamConfiguration")]
    pub timestream_configuration: Value<TimestreamConfiguration>,
}

/// Configuration needed to write data into the Timestream database and table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TimestreamConfiguration {
    /// Name of Timestream database to which the query result will be written.
    #[serde(rename = "DatabaseName")]
    pub database_name: Value<String>,
    /// This is to allow mapping column(s) from the query result to the dimension in the destination
    /// table.
    #[serde(rename = "DimensionMappings")]
    pub dimension_mappings: Value<Vec<Value<DimensionMapping>>>,
    /// Name of the measure column. Also see MultiMeasureMappings and MixedMeasureMappings for how
    /// measure name properties on those relate to MeasureNameColumn.
    #[serde(rename = "MeasureNameColumn", default, skip_serializing_if = "Option::is_none")]
    pub measure_name_column: Option<Value<String>>,
    /// Specifies how to map measures to multi-measure records.
    #[serde(rename = "MixedMeasureMappings", default, skip_serializing_if = "Option::is_none")]
    pub mixed_measure_mappings: Option<Value<Vec<Value<MixedMeasureMapping>>>>,
    /// Multi-measure mappings.
    #[serde(rename = "MultiMeasureMappings", default, skip_serializing_if = "Option::is_none")]
    pub multi_measure_mappings: Option<Value<MultiMeasureMappings>>,
    /// Name of Timestream table that the query result will be written to. The table should be
    /// within the same database that is provided in Timestream configuration.
    #[serde(rename = "TableName")]
    pub table_name: Value<String>,
    /// Column from query result that should be used as the time column in destination table. Column
    /// type for this should be TIMESTAMP.
    #[serde(rename = "TimeColumn")]
    pub time_column: Value<String>,
}
