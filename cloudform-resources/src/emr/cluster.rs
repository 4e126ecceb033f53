//! AWS::EMR::Cluster resource properties
//!
//! Auto-generated from CloudFormation schema: AWS::EMR::Cluster
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use std::collections::BTreeMap;

use cloudform_core::{Expr, Resource, ResourceProperties, Tag, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `AWS::EMR::Cluster` resource
pub type Cluster = Resource<Properties>;

/// The AWS::EMR::Cluster resource specifies an Amazon EMR cluster. This cluster is a collection
/// of Amazon EC2 instances that run open source big data frameworks and applications to process
/// and analyze vast amounts of data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Properties {
    /// A JSON string for selecting additional features.
    #[serde(rename = "AdditionalInfo", default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Expr>,
    /// The applications to install on this cluster, for example, Spark, Flink, Oozie, Zeppelin, and
    /// so on.
    #[serde(rename = "Applications", default, skip_serializing_if = "Option::is_none")]
    pub applications: Option<Value<Vec<Value<Application>>>>,
    /// An IAM role for automatic scaling policies. The default role is EMR_AutoScaling_DefaultRole.
    /// The IAM role provides permissions that the automatic scaling feature requires to launch and
    /// terminate Amazon EC2 instances in an instance group.
    #[serde(rename = "AutoScalingRole", default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_role: Option<Value<String>>,
    /// An auto-termination policy for an Amazon EMR cluster. An auto-termination policy defines the
    /// amount of idle time in seconds after which a cluster automatically terminates.
    #[serde(rename = "AutoTerminationPolicy", default, skip_serializing_if = "Option::is_none")]
    pub auto_termination_policy: Option<Value<AutoTerminationPolicy>>,
    /// A list of bootstrap actions to run before Hadoop starts on the cluster nodes.
    #[serde(rename = "BootstrapActions", default, skip_serializing_if = "Option::is_none")]
    pub bootstrap_actions: Option<Value<Vec<Value<BootstrapActionConfig>>>>,
    /// Applies only to Amazon EMR releases 4.x and later. The list of configurations that are
    /// supplied to the Amazon EMR cluster.
    #[serde(rename = "Configurations", default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value<Vec<Value<Configuration>>>>,
    /// Available only in Amazon EMR releases 5.7.0 and later. The ID of a custom Amazon EBS-backed
    /// Linux AMI if the cluster uses a custom AMI.
    #[serde(rename = "CustomAmiId", default, skip_serializing_if = "Option::is_none")]
    pub custom_ami_id: Option<Value<String>>,
    /// The IOPS, of the Amazon EBS root device volume of the Linux AMI that is used for each Amazon
    /// EC2 instance. Available in Amazon EMR releases 6.15.0 and later.
    #[serde(rename = "EbsRootVolumeIops", default, skip_serializing_if = "Option::is_none")]
    pub ebs_root_volume_iops: Option<Value<i64>>,
    /// The size, in GiB, of the Amazon EBS root device volume of the Linux AMI that is used for
    /// each Amazon EC2 instance. Available in Amazon EMR releases 4.x and later.
    #[serde(rename = "EbsRootVolumeSize", default, skip_serializing_if = "Option::is_none")]
    pub ebs_root_volume_size: Option<Value<i64>>,
    /// The throughput, in MiB/s, of the Amazon EBS root device volume of the Linux AMI that is used
    /// for each Amazon EC2 instance. Available in Amazon EMR releases 6.15.0 and later.
    #[serde(rename = "EbsRootVolumeThroughput", default, skip_serializing_if = "Option::is_none")]
    pub ebs_root_volume_throughput: Option<Value<i64>>,
    /// A specification of the number and type of Amazon EC2 instances.
    #[serde(rename = "Instances")]
    pub instances: Value<JobFlowInstancesConfig>,
    /// Also called instance profile and Amazon EC2 role. An IAM role for an Amazon EMR cluster. The
    /// Amazon EC2 instances of the cluster assume this role. The default role is
    /// EMR_EC2_DefaultRole. In order to use the default role, you must have already created it
    /// using the AWS CLI or console.
    #[serde(rename = "JobFlowRole")]
    pub job_flow_role: Value<String>,
    /// Attributes for Kerberos configuration when Kerberos authentication is enabled using a
    /// security configuration.
    #[serde(rename = "KerberosAttributes", default, skip_serializing_if = "Option::is_none")]
    pub kerberos_attributes: Option<Value<KerberosAttributes>>,
    /// The AWS KMS key used for encrypting log files. This attribute is only available with Amazon
    /// EMR 5.30.0 and later, excluding Amazon EMR 6.0.0.
    #[serde(rename = "LogEncryptionKmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub log_encryption_kms_key_id: Option<Value<String>>,
    /// The path to the Amazon S3 location where logs for this cluster are stored.
    #[serde(rename = "LogUri", default, skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<Value<String>>,
    /// Creates or updates a managed scaling policy for an Amazon EMR cluster. The managed scaling
    /// policy defines the limits for resources, such as EC2 instances that can be added or
    /// terminated from a cluster.
    #[serde(rename = "ManagedScalingPolicy", default, skip_serializing_if = "Option::is_none")]
    pub managed_scaling_policy: Option<Value<ManagedScalingPolicy>>,
    /// The name of the cluster. This parameter can't contain angle brackets, dollar signs, pipes,
    /// or backticks.
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// The Amazon Linux release specified in a cluster launch RunJobFlow request. If no Amazon
    /// Linux release was specified, the default Amazon Linux release is shown in the response.
    #[serde(rename = "OSReleaseLabel", default, skip_serializing_if = "Option::is_none")]
    pub os_release_label: Option<Value<String>>,
    /// The placement group configurations for the cluster.
    #[serde(rename = "PlacementGroupConfigs", default, skip_serializing_if = "Option::is_none")]
    pub placement_group_configs: Option<Value<Vec<Value<PlacementGroupConfig>>>>,
    /// The Amazon EMR release label, which determines the version of open-source application
    /// packages installed on the cluster. Release labels are in the form emr-x.x.x, where x.x.x is
    /// an Amazon EMR release version such as emr-5.14.0.
    #[serde(rename = "ReleaseLabel", default, skip_serializing_if = "Option::is_none")]
    pub release_label: Option<Value<String>>,
    /// The way that individual Amazon EC2 instances terminate when an automatic scale-in activity
    /// occurs or an instance group is resized.
    ///
    /// Allowed values: `TERMINATE_AT_INSTANCE_HOUR` | `TERMINATE_AT_TASK_COMPLETION`
    #[serde(rename = "ScaleDownBehavior", default, skip_serializing_if = "Option::is_none")]
    pub scale_down_behavior: Option<Value<String>>,
    /// The name of the security configuration applied to the cluster.
    #[serde(rename = "SecurityConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<Value<String>>,
    /// The IAM role that Amazon EMR assumes in order to access AWS resources on your behalf.
    #[serde(rename = "ServiceRole")]
    pub service_role: Value<String>,
    /// Specifies the number of steps that can be executed concurrently. The default value is 1. The
    /// maximum value is 256.
    #[serde(rename = "StepConcurrencyLevel", default, skip_serializing_if = "Option::is_none")]
    pub step_concurrency_level: Option<Value<i64>>,
    /// A list of steps to run.
    #[serde(rename = "Steps", default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Value<Vec<Value<StepConfig>>>>,
    /// A list of tags associated with a cluster.
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value<Vec<Value<Tag>>>>,
    /// Indicates whether the cluster is visible to all IAM users of the AWS account associated with
    /// the cluster. If this value is set to true, all IAM users of that AWS account can view and
    /// manage the cluster if they have the proper policy permissions set.
    #[serde(rename = "VisibleToAllUsers", default, skip_serializing_if = "Option::is_none")]
    pub visible_to_all_users: Option<Value<bool>>,
}

impl ResourceProperties for Properties {
    const TYPE_NAME: &'static str = "AWS::EMR::Cluster";
    const RETURN_ATTRIBUTES: &'static [&'static str] = &["Id", "MasterPublicDNS"];
}

/// Application is a property of AWS::EMR::Cluster. The Application property type defines the
/// open-source big data applications for EMR to install and configure when a cluster is
/// created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Application {
    /// This option is for advanced users only. This is meta information about clusters and
    /// applications that are used for testing and troubleshooting.
    #[serde(rename = "AdditionalInfo", default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Value<BTreeMap<String, Value<String>>>>,
    /// Arguments for Amazon EMR to pass to the application.
    #[serde(rename = "Args", default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value<Vec<Value<String>>>>,
    /// The name of the application.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
    /// The version of the application.
    #[serde(rename = "Version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

/// An automatic scaling policy for a core instance group or task instance group in an Amazon
/// EMR cluster. The automatic scaling policy defines how an instance group dynamically adds and
/// terminates EC2 instances in response to the value of a CloudWatch metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AutoScalingPolicy {
    /// The upper and lower EC2 instance limits for an automatic scaling policy. Automatic scaling
    /// activity will not cause an instance group to grow above or below these limits.
    #[serde(rename = "Constraints")]
    pub constraints: Value<ScalingConstraints>,
    /// The scale-in and scale-out rules that comprise the automatic scaling policy.
    #[serde(rename = "Rules")]
    pub rules: Value<Vec<Value<ScalingRule>>>,
}

/// An auto-termination policy for an Amazon EMR cluster. An auto-termination policy defines the
/// amount of idle time in seconds after which a cluster automatically terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AutoTerminationPolicy {
    /// Specifies the amount of idle time in seconds after which the cluster automatically
    /// terminates. You can specify a minimum of 60 seconds and a maximum of 604800 seconds (seven
    /// days).
    #[serde(rename = "IdleTimeout", default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<Value<i64>>,
}

/// Configuration of a bootstrap action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BootstrapActionConfig {
    /// The name of the bootstrap action.
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// The script run by the bootstrap action.
    #[serde(rename = "ScriptBootstrapAction")]
    pub script_bootstrap_action: Value<ScriptBootstrapActionConfig>,
}

/// The definition of a CloudWatch metric alarm, which determines when an automatic scaling
/// activity is triggered. When the defined alarm conditions are satisfied, scaling activity
/// begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CloudWatchAlarmDefinition {
    /// Determines how the metric specified by MetricName is compared to the value specified by
    /// Threshold.
    ///
    /// Allowed values: `GREATER_THAN_OR_EQUAL` | `GREATER_THAN` | `LESS_THAN` |
    /// `LESS_THAN_OR_EQUAL`
    #[serde(rename = "ComparisonOperator")]
    pub comparison_operator: Value<String>,
    /// A CloudWatch metric dimension.
    #[serde(rename = "Dimensions", default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Value<Vec<Value<MetricDimension>>>>,
    /// The number of periods, in five-minute increments, during which the alarm condition must
    /// exist before the alarm triggers automatic scaling activity. The default value is 1.
    #[serde(rename = "EvaluationPeriods", default, skip_serializing_if = "Option::is_none")]
    pub evaluation_periods: Option<Value<i64>>,
    /// The name of the CloudWatch metric that is watched to determine an alarm condition.
    #[serde(rename = "MetricName")]
    pub metric_name: Value<String>,
    /// The namespace for the CloudWatch metric. The default is AWS/ElasticMapReduce.
    #[serde(rename = "Namespace", default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Value<String>>,
    /// The period, in seconds, over which the statistic is applied. CloudWatch metrics for Amazon
    /// EMR are emitted every five minutes (300 seconds), so if you specify a CloudWatch metric,
    /// specify 300.
    #[serde(rename = "Period")]
    pub period: Value<i64>,
    /// The statistic to apply to the metric associated with the alarm. The default is AVERAGE.
    ///
    /// Allowed values: `SAMPLE_COUNT` | `AVERAGE` | `SUM` | `MINIMUM` | `MAXIMUM`
    #[serde(rename = "Statistic", default, skip_serializing_if = "Option::is_none")]
    pub statistic: Option<Value<String>>,
    /// The value against which the specified statistic is compared.
    #[serde(rename = "Threshold")]
    pub threshold: Value<f64>,
    /// The unit of measure associated with the CloudWatch metric being watched. The value specified
    /// for Unit must correspond to the units specified in the CloudWatch metric.
    #[serde(rename = "Unit", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Value<String>>,
}

/// The Amazon EC2 unit limits for a managed scaling policy. The managed scaling activity of a
/// cluster can not be above or below these limits. The limit only applies to the core and task
/// nodes. The master node cannot be scaled after initial configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ComputeLimits {
    /// The upper boundary of Amazon EC2 units. It is measured through vCPU cores or instances for
    /// instance groups and measured through units for instance fleets. Managed scaling activities
    /// are not allowed beyond this boundary.
    #[serde(rename = "MaximumCapacityUnits")]
    pub maximum_capacity_units: Value<i64>,
    /// The upper boundary of Amazon EC2 units for core node type in a cluster. Managed scaling
    /// activities are not allowed beyond this boundary. The parameter is used to split capacity
    /// allocation between core and task nodes.
    #[serde(rename = "MaximumCoreCapacityUnits", default, skip_serializing_if = "Option::is_none")]
    pub maximum_core_capacity_units: Option<Value<i64>>,
    /// The upper boundary of On-Demand Amazon EC2 units. The On-Demand units are not allowed to
    /// scale beyond this boundary. The parameter is used to split capacity allocation between
    /// On-Demand and Spot Instances.
    #[serde(
        rename = "MaximumOnDemandCapacityUnits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maximum_on_demand_capacity_units: Option<Value<i64>>,
    /// The lower boundary of Amazon EC2 units. Managed scaling activities are not allowed beyond
    /// this boundary.
    #[serde(rename = "MinimumCapacityUnits")]
    pub minimum_capacity_units: Value<i64>,
    /// The unit type used for specifying a managed scaling policy.
    ///
    /// Allowed values: `InstanceFleetUnits` | `Instances` | `VCPU`
    #[serde(rename = "UnitType")]
    pub unit_type: Value<String>,
}

/// Configuration specifies optional configurations for customizing open-source big data
/// applications and environment parameters. A configuration consists of a classification,
/// properties, and optional nested configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// The classification within a configuration.
    #[serde(rename = "Classification", default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Value<String>>,
    /// A list of additional configurations to apply within a configuration object.
    #[serde(rename = "ConfigurationProperties", default, skip_serializing_if = "Option::is_none")]
    pub configuration_properties: Option<Value<BTreeMap<String, Value<String>>>>,
    /// A list of additional configurations to apply within a configuration object.
    #[serde(rename = "Configurations", default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value<Vec<Value<Configuration>>>>,
}

/// Configuration of requested EBS block device associated with the instance group with count of
/// volumes that are associated to every instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EbsBlockDeviceConfig {
    /// EBS volume specifications such as volume type, IOPS, size (GiB) and throughput (MiB/s) that
    /// are requested for the EBS volume attached to an Amazon EC2 instance in the cluster.
    #[serde(rename = "VolumeSpecification")]
    pub volume_specification: Value<VolumeSpecification>,
    /// Number of EBS volumes with a specific volume configuration that are associated with every
    /// instance in the instance group.
    #[serde(rename = "VolumesPerInstance", default, skip_serializing_if = "Option::is_none")]
    pub volumes_per_instance: Option<Value<i64>>,
}

/// The Amazon EBS configuration of a cluster instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EbsConfiguration {
    /// An array of Amazon EBS volume specifications attached to a cluster instance.
    #[serde(rename = "EbsBlockDeviceConfigs", default, skip_serializing_if = "Option::is_none")]
    pub ebs_block_device_configs: Option<Value<Vec<Value<EbsBlockDeviceConfig>>>>,
    /// Indicates whether an Amazon EBS volume is EBS-optimized.
    #[serde(rename = "EbsOptimized", default, skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<Value<bool>>,
}

/// A job flow step consisting of a JAR file whose main function will be executed. The main
/// function submits a job for Hadoop to execute and waits for the job to finish or fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HadoopJarStepConfig {
    /// A list of command line arguments passed to the JAR file's main function when executed.
    #[serde(rename = "Args", default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value<Vec<Value<String>>>>,
    /// A path to a JAR file run during the step.
    #[serde(rename = "Jar")]
    pub jar: Value<String>,
    /// The name of the main class in the specified Java file. If not specified, the JAR file should
    /// specify a Main-Class in its manifest file.
    #[serde(rename = "MainClass", default, skip_serializing_if = "Option::is_none")]
    pub main_class: Option<Value<String>>,
    /// A list of Java properties that are set when the step runs. You can use these properties to
    /// pass key-value pairs to your main function.
    #[serde(rename = "StepProperties", default, skip_serializing_if = "Option::is_none")]
    pub step_properties: Option<Value<Vec<Value<KeyValue>>>>,
}

/// Use InstanceFleetConfig to define instance fleets for an EMR cluster. A cluster can not use
/// both instance fleets and instance groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstanceFleetConfig {
    /// The instance type configurations that define the EC2 instances in the instance fleet.
    #[serde(rename = "InstanceTypeConfigs", default, skip_serializing_if = "Option::is_none")]
    pub instance_type_configs: Option<Value<Vec<Value<InstanceTypeConfig>>>>,
    /// The launch specification for the instance fleet.
    #[serde(rename = "LaunchSpecifications", default, skip_serializing_if = "Option::is_none")]
    pub launch_specifications: Option<Value<InstanceFleetProvisioningSpecifications>>,
    /// The friendly name of the instance fleet.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
    /// The target capacity of On-Demand units for the instance fleet, which determines how many
    /// On-Demand instances to provision.
    #[serde(rename = "TargetOnDemandCapacity", default, skip_serializing_if = "Option::is_none")]
    pub target_on_demand_capacity: Option<Value<i64>>,
    /// The target capacity of Spot units for the instance fleet, which determines how many Spot
    /// instances to provision.
    #[serde(rename = "TargetSpotCapacity", default, skip_serializing_if = "Option::is_none")]
    pub target_spot_capacity: Option<Value<i64>>,
}

/// The launch specification for On-Demand and Spot Instances in the fleet, which determines the
/// allocation strategy and capacity reservation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstanceFleetProvisioningSpecifications {
    /// The launch specification for On-Demand Instances in the instance fleet, which determines the
    /// allocation strategy.
    #[serde(rename = "OnDemandSpecification", default, skip_serializing_if = "Option::is_none")]
    pub on_demand_specification: Option<Value<OnDemandProvisioningSpecification>>,
    /// The launch specification for Spot instances in the fleet, which determines the defined
    /// duration, provisioning timeout behavior, and allocation strategy.
    #[serde(rename = "SpotSpecification", default, skip_serializing_if = "Option::is_none")]
    pub spot_specification: Option<Value<SpotProvisioningSpecification>>,
}

/// Use InstanceGroupConfig to define instance groups for an EMR cluster. A cluster can not use
/// both instance groups and instance fleets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstanceGroupConfig {
    /// An automatic scaling policy for a core instance group or task instance group in an Amazon
    /// EMR cluster.
    #[serde(rename = "AutoScalingPolicy", default, skip_serializing_if = "Option::is_none")]
    pub auto_scaling_policy: Option<Value<AutoScalingPolicy>>,
    /// If specified, indicates that the instance group uses Spot Instances. This is the maximum
    /// price you are willing to pay for Spot Instances. Specify OnDemandPrice to set the amount
    /// equal to the On-Demand price, or specify an amount in USD.
    #[serde(rename = "BidPrice", default, skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<Value<String>>,
    /// A list of configurations that are applied to the instances. Configurations specify
    /// classifications, properties, and nested configurations for the software on the instances.
    #[serde(rename = "Configurations", default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value<Vec<Value<Configuration>>>>,
    /// The custom AMI ID to use for the provisioned instance group.
    #[serde(rename = "CustomAmiId", default, skip_serializing_if = "Option::is_none")]
    pub custom_ami_id: Option<Value<String>>,
    /// EBS configurations that will be attached to each EC2 instance in the instance group.
    #[serde(rename = "EbsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub ebs_configuration: Option<Value<EbsConfiguration>>,
    /// Target number of instances for the instance group.
    #[serde(rename = "InstanceCount")]
    pub instance_count: Value<i64>,
    /// The EC2 instance type for all instances in the instance group.
    #[serde(rename = "InstanceType")]
    pub instance_type: Value<String>,
    /// Market type of the EC2 instances used to create a cluster node.
    ///
    /// Allowed values: `ON_DEMAND` | `SPOT`
    #[serde(rename = "Market", default, skip_serializing_if = "Option::is_none")]
    pub market: Option<Value<String>>,
    /// Friendly name given to the instance group.
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,
}

/// An instance type configuration for each instance type in an instance fleet, which determines
/// the EC2 instances Amazon EMR attempts to provision to fulfill On-Demand and Spot target
/// capacities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InstanceTypeConfig {
    /// The bid price for each EC2 Spot Instance type as defined by InstanceType. Expressed in USD.
    #[serde(rename = "BidPrice", default, skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<Value<String>>,
    /// The bid price, as a percentage of On-Demand price, for each EC2 Spot Instance as defined by
    /// InstanceType. Expressed as a number (for example, 20 specifies 20%).
    #[serde(
        rename = "BidPriceAsPercentageOfOnDemandPrice",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub bid_price_as_percentage_of_on_demand_price: Option<Value<f64>>,
    /// A list of configurations that are applied to the instances. Configurations specify
    /// classifications, properties, and nested configurations for the software on the instances.
    #[serde(rename = "Configurations", default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Value<Vec<Value<Configuration>>>>,
    /// The custom AMI ID to use for the instance type.
    #[serde(rename = "CustomAmiId", default, skip_serializing_if = "Option::is_none")]
    pub custom_ami_id: Option<Value<String>>,
    /// The configuration of Amazon Elastic Block Store (Amazon EBS) attached to each instance as
    /// defined by InstanceType.
    #[serde(rename = "EbsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub ebs_configuration: Option<Value<EbsConfiguration>>,
    /// An EC2 instance type, such as m3.xlarge.
    #[serde(rename = "InstanceType")]
    pub instance_type: Value<String>,
    /// The number of units that a provisioned instance of this type provides toward fulfilling the
    /// target capacities defined in InstanceFleetConfig. This value is 1 for a master instance
    /// fleet, and must be 1 or greater for core and task instance fleets.
    #[serde(rename = "WeightedCapacity", default, skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<Value<i64>>,
}

/// JobFlowInstancesConfig is a property of the AWS::EMR::Cluster resource.
/// JobFlowInstancesConfig defines the instance groups or instance fleets that comprise the
/// cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct JobFlowInstancesConfig {
    /// A list of additional Amazon EC2 security group IDs for the master node.
    #[serde(
        rename = "AdditionalMasterSecurityGroups",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_master_security_groups: Option<Value<Vec<Value<String>>>>,
    /// A list of additional Amazon EC2 security group IDs for the core and task nodes.
    #[serde(
        rename = "AdditionalSlaveSecurityGroups",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_slave_security_groups: Option<Value<Vec<Value<String>>>>,
    /// Describes the EC2 instances and instance configurations for the core instance fleet when
    /// using clusters with the instance fleet configuration.
    #[serde(rename = "CoreInstanceFleet", default, skip_serializing_if = "Option::is_none")]
    pub core_instance_fleet: Option<Value<InstanceFleetConfig>>,
    /// Describes the EC2 instances and instance configurations for core instance groups when using
    /// clusters with the uniform instance group configuration.
    #[serde(rename = "CoreInstanceGroup", default, skip_serializing_if = "Option::is_none")]
    pub core_instance_group: Option<Value<InstanceGroupConfig>>,
    /// The name of the EC2 key pair that can be used to connect to the master node using SSH as the
    /// user called hadoop.
    #[serde(rename = "Ec2KeyName", default, skip_serializing_if = "Option::is_none")]
    pub ec2_key_name: Option<Value<String>>,
    /// Applies to clusters that use the uniform instance group configuration. To launch the cluster
    /// in Amazon Virtual Private Cloud (Amazon VPC), set this parameter to the identifier of the
    /// Amazon VPC subnet where you want the cluster to launch.
    #[serde(rename = "Ec2SubnetId", default, skip_serializing_if = "Option::is_none")]
    pub ec2_subnet_id: Option<Value<String>>,
    /// Applies to clusters that use the instance fleet configuration. When multiple EC2 subnet IDs
    /// are specified, Amazon EMR evaluates them and launches instances in the optimal subnet.
    #[serde(rename = "Ec2SubnetIds", default, skip_serializing_if = "Option::is_none")]
    pub ec2_subnet_ids: Option<Value<Vec<Value<String>>>>,
    /// The identifier of the Amazon EC2 security group for the master node.
    #[serde(
        rename = "EmrManagedMasterSecurityGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub emr_managed_master_security_group: Option<Value<String>>,
    /// The identifier of the Amazon EC2 security group for the core and task nodes.
    #[serde(
        rename = "EmrManagedSlaveSecurityGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub emr_managed_slave_security_group: Option<Value<String>>,
    /// Applies only to Amazon EMR release versions earlier than 4.0. The Hadoop version for the
    /// cluster.
    #[serde(rename = "HadoopVersion", default, skip_serializing_if = "Option::is_none")]
    pub hadoop_version: Option<Value<String>>,
    /// Specifies whether the cluster should remain available after completing all steps. Defaults
    /// to true.
    #[serde(
        rename = "KeepJobFlowAliveWhenNoSteps",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_job_flow_alive_when_no_steps: Option<Value<bool>>,
    /// Describes the EC2 instances and instance configurations for the master instance fleet when
    /// using clusters with the instance fleet configuration.
    #[serde(rename = "MasterInstanceFleet", default, skip_serializing_if = "Option::is_none")]
    pub master_instance_fleet: Option<Value<InstanceFleetConfig>>,
    /// Describes the EC2 instances and instance configurations for the master instance group when
    /// using clusters with the uniform instance group configuration.
    #[serde(rename = "MasterInstanceGroup", default, skip_serializing_if = "Option::is_none")]
    pub master_instance_group: Option<Value<InstanceGroupConfig>>,
    /// The Availability Zone in which the cluster runs.
    #[serde(rename = "Placement", default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Value<PlacementType>>,
    /// The identifier of the Amazon EC2 security group for the Amazon EMR service to access
    /// clusters in VPC private subnets.
    #[serde(
        rename = "ServiceAccessSecurityGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_access_security_group: Option<Value<String>>,
    /// Describes the EC2 instances and instance configurations for the task instance fleets when
    /// using clusters with the instance fleet configuration.
    #[serde(rename = "TaskInstanceFleets", default, skip_serializing_if = "Option::is_none")]
    pub task_instance_fleets: Option<Value<Vec<Value<InstanceFleetConfig>>>>,
    /// Describes the EC2 instances and instance configurations for task instance groups when using
    /// clusters with the uniform instance group configuration.
    #[serde(rename = "TaskInstanceGroups", default, skip_serializing_if = "Option::is_none")]
    pub task_instance_groups: Option<Value<Vec<Value<InstanceGroupConfig>>>>,
    /// Specifies whether to lock the cluster to prevent the Amazon EC2 instances from being
    /// terminated by API call, user intervention, or in the event of a job-flow error.
    #[serde(rename = "TerminationProtected", default, skip_serializing_if = "Option::is_none")]
    pub termination_protected: Option<Value<bool>>,
}

/// KerberosAttributes is a property of the AWS::EMR::Cluster resource. KerberosAttributes
/// define the cluster-specific Kerberos configuration when Kerberos authentication is enabled
/// using a security configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct KerberosAttributes {
    /// The Active Directory password for ADDomainJoinUser.
    #[serde(rename = "ADDomainJoinPassword", default, skip_serializing_if = "Option::is_none")]
    pub ad_domain_join_password: Option<Value<String>>,
    /// Required only when establishing a cross-realm trust with an Active Directory domain. A user
    /// with sufficient privileges to join resources to the domain.
    #[serde(rename = "ADDomainJoinUser", default, skip_serializing_if = "Option::is_none")]
    pub ad_domain_join_user: Option<Value<String>>,
    /// Required only when establishing a cross-realm trust with a KDC in a different realm. The
    /// cross-realm principal password, which must be identical across realms.
    #[serde(
        rename = "CrossRealmTrustPrincipalPassword",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cross_realm_trust_principal_password: Option<Value<String>>,
    /// The password used within the cluster for the kadmin service on the cluster-dedicated KDC,
    /// which maintains Kerberos principals, password policies, and keytabs for the cluster.
    #[serde(rename = "KdcAdminPassword")]
    pub kdc_admin_password: Value<String>,
    /// The name of the Kerberos realm to which all nodes in a cluster belong. For example,
    /// EC2.INTERNAL.
    #[serde(rename = "Realm")]
    pub realm: Value<String>,
}

/// KeyValue is a subproperty of the HadoopJarStepConfig property type. KeyValue is used to pass
/// parameters to a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct KeyValue {
    /// The unique identifier of a key-value pair.
    #[serde(rename = "Key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Value<String>>,
    /// The value part of the identified key.
    #[serde(rename = "Value", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value<String>>,
}

/// Managed scaling policy for an Amazon EMR cluster. The policy specifies the limits for
/// resources that can be added or terminated from a cluster. The policy only applies to the
/// core and task nodes. The master node cannot be scaled after initial configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ManagedScalingPolicy {
    /// The Amazon EC2 unit limits for a managed scaling policy. The managed scaling activity of a
    /// cluster is not allowed to go above or below these limits. The limit only applies to the core
    /// and task nodes. The master node cannot be scaled after initial configuration.
    #[serde(rename = "ComputeLimits", default, skip_serializing_if = "Option::is_none")]
    pub compute_limits: Option<Value<ComputeLimits>>,
}

/// MetricDimension is a subproperty of the CloudWatchAlarmDefinition property type.
/// MetricDimension specifies a CloudWatch dimension, which is specified with a Key Value pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MetricDimension {
    /// The dimension name.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The dimension value.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// The launch specification for On-Demand Instances in the instance fleet, which determines the
/// allocation strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OnDemandProvisioningSpecification {
    /// Specifies the strategy to use in launching On-Demand instance fleets. Currently, the only
    /// option is lowest-price (the default), which launches the lowest price first.
    ///
    /// Allowed values: `lowest-price`
    #[serde(rename = "AllocationStrategy")]
    pub allocation_strategy: Value<String>,
}

/// Placement group configuration for an Amazon EMR cluster. The configuration specifies the
/// placement strategy that can be applied to instance roles during cluster creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlacementGroupConfig {
    /// Role of the instance in the cluster.
    ///
    /// Allowed values: `MASTER` | `CORE` | `TASK`
    #[serde(rename = "InstanceRole")]
    pub instance_role: Value<String>,
    /// Amazon EC2 Placement Group strategy associated with instance role.
    ///
    /// Allowed values: `SPREAD` | `PARTITION` | `CLUSTER` | `NONE`
    #[serde(rename = "PlacementStrategy", default, skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<Value<String>>,
}

/// PlacementType is a property of the AWS::EMR::Cluster resource. PlacementType determines the
/// Amazon EC2 Availability Zone configuration of the cluster (job flow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PlacementType {
    /// The Amazon EC2 Availability Zone for the cluster. AvailabilityZone is used for uniform
    /// instance groups, while AvailabilityZones (plural) is used for instance fleets.
    #[serde(rename = "AvailabilityZone")]
    pub availability_zone: Value<String>,
}

/// ScalingAction determines the type of adjustment the automatic scaling activity makes when
/// triggered, and the periodicity of the adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScalingAction {
    /// Not available for instance groups. Instance groups use the market type specified for the
    /// group.
    ///
    /// Allowed values: `ON_DEMAND` | `SPOT`
    #[serde(rename = "Market", default, skip_serializing_if = "Option::is_none")]
    pub market: Option<Value<String>>,
    /// The type of adjustment the automatic scaling activity makes when triggered, and the
    /// periodicity of the adjustment.
    #[serde(rename = "SimpleScalingPolicyConfiguration")]
    pub simple_scaling_policy_configuration: Value<SimpleScalingPolicyConfiguration>,
}

/// ScalingConstraints is a subproperty of the AutoScalingPolicy property type.
/// ScalingConstraints defines the upper and lower EC2 instance limits for an automatic scaling
/// policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScalingConstraints {
    /// The upper boundary of EC2 instances in an instance group beyond which scaling activities are
    /// not allowed to grow. Scale-out activities will not add instances beyond this boundary.
    #[serde(rename = "MaxCapacity")]
    pub max_capacity: Value<i64>,
    /// The lower boundary of EC2 instances in an instance group below which scaling activities are
    /// not allowed to shrink. Scale-in activities will not terminate instances below this boundary.
    #[serde(rename = "MinCapacity")]
    pub min_capacity: Value<i64>,
}

/// ScalingRule is a subproperty of the AutoScalingPolicy property type. ScalingRule defines the
/// scale-in or scale-out rules for scaling activity, including the CloudWatch metric alarm that
/// triggers activity, how EC2 instances are added or removed, and the periodicity of
/// adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScalingRule {
    /// The conditions that trigger an automatic scaling activity.
    #[serde(rename = "Action")]
    pub action: Value<ScalingAction>,
    /// A friendly, more verbose description of the automatic scaling rule.
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,
    /// The name used to identify an automatic scaling rule. Rule names must be unique within a
    /// scaling policy.
    #[serde(rename = "Name")]
    pub name: Value<String>,
    /// The CloudWatch alarm definition that determines when automatic scaling activity is
    /// triggered.
    #[serde(rename = "Trigger")]
    pub trigger: Value<ScalingTrigger>,
}

/// ScalingTrigger is a subproperty of the ScalingRule property type. ScalingTrigger determines
/// the conditions that trigger an automatic scaling activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScalingTrigger {
    /// The definition of a CloudWatch metric alarm. When the defined alarm conditions are met along
    /// with other trigger parameters, scaling activity begins.
    #[serde(rename = "CloudWatchAlarmDefinition")]
    pub cloud_watch_alarm_definition: Value<CloudWatchAlarmDefinition>,
}

/// ScriptBootstrapActionConfig is a subproperty of the BootstrapActionConfig property type.
/// ScriptBootstrapActionConfig specifies the arguments and location of the bootstrap script for
/// EMR to run on all cluster nodes before it installs open-source big data applications on
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ScriptBootstrapActionConfig {
    /// A list of command line arguments to pass to the bootstrap action script.
    #[serde(rename = "Args", default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value<Vec<Value<String>>>>,
    /// Location in Amazon S3 of the script to run during a bootstrap action.
    #[serde(rename = "Path")]
    pub path: Value<String>,
}

/// SimpleScalingPolicyConfiguration is a subproperty of the ScalingAction property type.
/// SimpleScalingPolicyConfiguration determines how an automatic scaling action adds or removes
/// instances, the cooldown period, and the number of EC2 instances that are added each time the
/// CloudWatch metric alarm condition is satisfied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SimpleScalingPolicyConfiguration {
    /// The way in which EC2 instances are added (if ScalingAdjustment is a positive number) or
    /// terminated (if ScalingAdjustment is a negative number) each time the scaling activity is
    /// triggered.
    ///
    /// Allowed values: `CHANGE_IN_CAPACITY` | `PERCENT_CHANGE_IN_CAPACITY` | `EXACT_CAPACITY`
    #[serde(rename = "AdjustmentType", default, skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<Value<String>>,
    /// The amount of time, in seconds, after a scaling activity completes before any further
    /// trigger-related scaling activities can start. The default value is 0.
    #[serde(rename = "CoolDown", default, skip_serializing_if = "Option::is_none")]
    pub cool_down: Option<Value<i64>>,
    /// The amount by which to scale in or scale out, based on the specified AdjustmentType. A
    /// positive value adds to the instance group's EC2 instance count while a negative number
    /// removes instances.
    #[serde(rename = "ScalingAdjustment")]
    pub scaling_adjustment: Value<i64>,
}

/// SpotProvisioningSpecification is a subproperty of the
/// InstanceFleetProvisioningSpecifications property type. SpotProvisioningSpecification
/// determines the launch specification for Spot instances in the instance fleet, which includes
/// the defined duration and provisioning timeout behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SpotProvisioningSpecification {
    /// Specifies the strategy to use in launching Spot Instance fleets. Currently, the only option
    /// is capacity-optimized (the default), which launches instances from Spot Instance pools with
    /// optimal capacity for the number of instances that are launching.
    ///
    /// Allowed values: `capacity-optimized`
    #[serde(rename = "AllocationStrategy", default, skip_serializing_if = "Option::is_none")]
    pub allocation_strategy: Option<Value<String>>,
    /// The defined duration for Spot Instances (also known as Spot blocks) in minutes. When
    /// specified, the Spot Instance does not terminate before the defined duration expires.
    #[serde(rename = "BlockDurationMinutes", default, skip_serializing_if = "Option::is_none")]
    pub block_duration_minutes: Option<Value<i64>>,
    /// The action to take when TargetSpotCapacity has not been fulfilled when the
    /// TimeoutDurationMinutes has expired; that is, when all Spot Instances could not be
    /// provisioned within the Spot provisioning timeout.
    ///
    /// Allowed values: `SWITCH_TO_ON_DEMAND` | `TERMINATE_CLUSTER`
    #[serde(rename = "TimeoutAction")]
    pub timeout_action: Value<String>,
    /// The Spot provisioning timeout period in minutes. If Spot Instances are not provisioned
    /// within this time period, the TimeOutAction is taken. Minimum value is 5 and maximum value is
    /// 1440.
    #[serde(rename = "TimeoutDurationMinutes")]
    pub timeout_duration_minutes: Value<i64>,
}

/// StepConfig is a property of the AWS::EMR::Cluster resource. The StepConfig property type
/// specifies a cluster (job flow) step, which runs only on the master node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StepConfig {
    /// The action to take when the cluster step fails. TERMINATE_JOB_FLOW is provided for backward
    /// compatibility. We recommend using TERMINATE_CLUSTER instead.
    ///
    /// Allowed values: `CONTINUE` | `CANCEL_AND_WAIT` | `TERMINATE_CLUSTER` | `TERMINATE_JOB_FLOW`
    #[serde(rename = "ActionOnFailure", default, skip_serializing_if = "Option::is_none")]
    pub action_on_failure: Option<Value<String>>,
    /// The HadoopJarStepConfig property type specifies a job flow step consisting of a JAR file
    /// whose main function will be executed.
    #[serde(rename = "HadoopJarStep")]
    pub hadoop_jar_step: Value<HadoopJarStepConfig>,
    /// The name of the step.
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

/// VolumeSpecification is a subproperty of the EbsBlockDeviceConfig property type.
/// VolumeSpecification determines the volume type, IOPS, and size (GiB) for EBS volumes
/// attached to EC2 instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VolumeSpecification {
    /// The number of I/O operations per second (IOPS) that the volume supports.
    #[serde(rename = "Iops", default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,
    /// The volume size, in gibibytes (GiB). This can be a number from 1 - 1024. If the volume type
    /// is EBS-optimized, the minimum value is 10.
    #[serde(rename = "SizeInGB")]
    pub size_in_gb: Value<i64>,
    /// The throughput, in mebibyte per second (MiB/s). This optional parameter can be a number from
    /// 125 - 1000 and is valid only for gp3 volumes.
    #[serde(rename = "Throughput", default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Value<i64>>,
    /// The volume type. Volume types supported are gp3, gp2, io1, st1, sc1, and standard.
    #[serde(rename = "VolumeType")]
    pub volume_type: Value<String>,
}
