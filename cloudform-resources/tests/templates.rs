use cloudform_core::{Expr, Intrinsic, SourceFormat, Template, Value};
use cloudform_resources::appflow::ConnectorProfile;
use cloudform_resources::emr::Cluster;
use cloudform_resources::timestream::ScheduledQuery;
use cloudform_resources::{AnyResource, decode_template};
use serde_json::json;

const DATA_PLATFORM: &str = include_str!("fixtures/data-platform.yaml");
const INTEGRATIONS: &str = include_str!("fixtures/integrations.json");

fn literal<T>(value: &Value<T>) -> &T {
    value.literal().expect("literal value")
}

fn present<T>(value: &Option<Value<T>>) -> &T {
    literal(value.as_ref().expect("property is set"))
}

fn data_platform() -> Template {
    Template::from_str_as(DATA_PLATFORM, SourceFormat::Yaml).unwrap()
}

fn integrations() -> Template {
    Template::from_str_as(INTEGRATIONS, SourceFormat::Json).unwrap()
}

#[test]
fn yaml_template_decodes_every_resource() {
    let template = data_platform();
    let report = decode_template(&template);
    let errors: Vec<String> = report
        .errors()
        .map(|(id, e)| format!("{}: {}", id, e))
        .collect();
    assert!(errors.is_empty(), "{:?}", errors);
    assert_eq!(report.unknown_types().count(), 0);

    let types: Vec<&str> = report.decoded().map(|(_, r)| r.type_name()).collect();
    assert_eq!(
        types,
        vec![
            "AWS::EMR::Cluster",
            "AWS::Timestream::ScheduledQuery",
            "AWS::Config::ConfigRule"
        ]
    );
}

#[test]
fn emr_cluster_nested_shapes() {
    let template = data_platform();
    let cluster: Cluster = template.resource("Cluster").unwrap().decode().unwrap();
    let props = &cluster.properties;

    assert_eq!(
        props.name,
        Value::Intrinsic(Intrinsic::sub("analytics-${Environment}"))
    );
    assert_eq!(props.visible_to_all_users, Some(Value::Literal(true)));

    // Configuration nests itself
    let configurations = present(&props.configurations);
    let hadoop_env = literal(&configurations[1]);
    let nested = present(&hadoop_env.configurations);
    assert_eq!(literal(&nested[0]).classification, Some(Value::from("export")));

    let core = present(&literal(&props.instances).core_instance_group);
    assert!(core.instance_count.is_intrinsic());
    let ebs = present(&core.ebs_configuration);
    let device = literal(&present(&ebs.ebs_block_device_configs)[0]);
    assert_eq!(literal(&device.volume_specification).size_in_gb, Value::Literal(100));

    let policy = present(&core.auto_scaling_policy);
    let rule = literal(&literal(&policy.rules)[0]);
    let alarm = literal(&literal(&rule.trigger).cloud_watch_alarm_definition);
    assert_eq!(alarm.threshold, Value::Literal(15.0));
    assert_eq!(alarm.period, Value::Literal(300));

    let limits = present(&present(&props.managed_scaling_policy).compute_limits);
    assert_eq!(limits.unit_type, Value::from("Instances"));

    assert_eq!(
        cluster.attributes.deletion_policy,
        Some(Value::Literal(cloudform_core::DeletionPolicy::Retain))
    );
    assert_eq!(
        cluster.attributes.depends_on.as_ref().unwrap().logical_ids(),
        vec!["ScheduledRollup"]
    );
}

#[test]
fn scheduled_query_intrinsics_from_short_form_tags() {
    let template = data_platform();
    let query: ScheduledQuery = template.resource("ScheduledRollup").unwrap().decode().unwrap();
    let props = &query.properties;

    assert_eq!(
        props.scheduled_query_execution_role_arn,
        Value::Intrinsic(Intrinsic::get_att("RollupRole", "Arn"))
    );
    let notification = literal(&props.notification_configuration);
    assert_eq!(
        literal(&notification.sns_configuration).topic_arn,
        Value::Intrinsic(Intrinsic::reference("RollupTopic"))
    );
    let target = literal(&present(&props.target_configuration).timestream_configuration);
    assert_eq!(literal(&target.dimension_mappings).len(), 1);
    let multi = present(&target.multi_measure_mappings);
    let mapping = literal(&literal(&multi.multi_measure_attribute_mappings)[0]);
    assert_eq!(mapping.measure_value_type, Value::from("DOUBLE"));
    assert!(
        props
            .query_string
            .literal()
            .unwrap()
            .contains("@scheduled_runtime")
    );
}

#[test]
fn config_rule_condition_and_json_parameters() {
    let template = data_platform();
    let rule = template.resource("VersioningRule").unwrap();
    assert_eq!(rule.attributes.condition.as_deref(), Some("IsProd"));

    let AnyResource::ConfigRule(rule) = AnyResource::decode(rule).unwrap() else {
        panic!("expected a config rule");
    };
    let Some(Expr::Map(parameters)) = &rule.properties.input_parameters else {
        panic!("expected an object of input parameters");
    };
    assert_eq!(parameters["isMfaDeleteEnabled"], Expr::from("false"));
}

#[test]
fn json_template_with_unknown_types() {
    let template = integrations();
    let report = decode_template(&template);
    assert!(report.is_ok());
    let unknown: Vec<(&str, &str)> = report.unknown_types().collect();
    assert_eq!(unknown, vec![("AppFlowKey", "AWS::KMS::Key")]);
}

#[test]
fn connector_profiles() {
    let template = integrations();

    let salesforce: ConnectorProfile = template.resource("Salesforce").unwrap().decode().unwrap();
    let config = present(&salesforce.properties.connector_profile_config);
    let properties = present(&present(&config.connector_profile_properties).salesforce);
    assert_eq!(properties.is_sandbox_environment, Some(Value::Literal(false)));
    assert!(properties.instance_url.as_ref().unwrap().is_intrinsic());

    let snowflake: ConnectorProfile = template.resource("Snowflake").unwrap().decode().unwrap();
    assert_eq!(
        snowflake.properties.kms_arn,
        Some(Value::Intrinsic(Intrinsic::get_att("AppFlowKey", "Arn")))
    );
    let config = present(&snowflake.properties.connector_profile_config);
    let credentials = present(&present(&config.connector_profile_credentials).snowflake);
    assert_eq!(credentials.username, Value::from("appflow"));
}

#[test]
fn nested_stack_parameters_accept_intrinsics() {
    let template = integrations();
    let AnyResource::Stack(stack) = AnyResource::decode(template.resource("Network").unwrap()).unwrap()
    else {
        panic!("expected a stack");
    };
    let parameters = present(&stack.properties.parameters);
    assert_eq!(parameters["CidrBlock"], Value::from("10.0.0.0/16"));
    assert!(parameters["AvailabilityZone"].is_intrinsic());
    assert!(present(&stack.properties.notification_ar_ns)[0].is_intrinsic());
}

#[test]
fn intrinsics_in_place_of_lists_maps_and_property_bags() {
    let template = Template::from_yaml_str(
        r#"
Conditions:
  IsProd: !Equals [!Ref Env, prod]
Resources:
  Nested:
    Type: AWS::CloudFormation::Stack
    Properties:
      TemplateURL: https://example.com/nested.yaml
      NotificationARNs: !Ref Topics
      Parameters: !If [IsProd, {Size: large}, !Ref "AWS::NoValue"]
      Tags: !If
        - IsProd
        - [{Key: env, Value: prod}]
        - !Ref AWS::NoValue
  Rollup:
    Type: AWS::Timestream::ScheduledQuery
    Properties:
      QueryString: SELECT 1
      ScheduleConfiguration: {ScheduleExpression: rate(1 hour)}
      NotificationConfiguration: !ImportValue shared-notifications
      ErrorReportConfiguration:
        S3Configuration: {BucketName: errors}
      ScheduledQueryExecutionRoleArn: !GetAtt Role.Arn
"#,
    )
    .unwrap();
    let report = decode_template(&template);
    assert!(report.is_ok(), "{:?}", report.errors().collect::<Vec<_>>());

    let AnyResource::Stack(stack) = report.resources["Nested"].as_ref().unwrap() else {
        panic!("expected a stack");
    };
    let props = &stack.properties;
    assert_eq!(
        props.notification_ar_ns,
        Some(Value::Intrinsic(Intrinsic::reference("Topics")))
    );
    assert!(props.parameters.as_ref().unwrap().is_intrinsic());
    assert!(props.tags.as_ref().unwrap().is_intrinsic());

    let AnyResource::ScheduledQuery(query) = report.resources["Rollup"].as_ref().unwrap() else {
        panic!("expected a scheduled query");
    };
    assert!(query.properties.notification_configuration.is_intrinsic());

    // Written back unchanged
    let written = stack.to_template_resource().unwrap();
    assert_eq!(written.properties["NotificationARNs"], json!({"Ref": "Topics"}));
}

#[test]
fn typed_resources_write_back() {
    let template = integrations();
    let report = decode_template(&template);
    for (logical_id, resource) in report.decoded() {
        let written = resource.to_template_resource().unwrap();
        assert_eq!(&AnyResource::decode(&written).unwrap(), resource, "{}", logical_id);
    }

    // Fn::GetAtt is normalized to list form
    let snowflake = report.resources["Snowflake"].as_ref().unwrap();
    let written = snowflake.to_template_resource().unwrap();
    assert_eq!(
        written.properties["KMSArn"],
        json!({"Fn::GetAtt": ["AppFlowKey", "Arn"]})
    );
    let network = report.resources["Network"].as_ref().unwrap();
    assert_eq!(
        &network.to_template_resource().unwrap(),
        template.resource("Network").unwrap()
    );
}

#[test]
fn misspelled_property_is_reported() {
    let source = INTEGRATIONS.replace("\"TimeoutInMinutes\"", "\"TimeoutMinutes\"");
    let template = Template::from_json_str(&source).unwrap();
    let report = decode_template(&template);
    let errors: Vec<(&str, String)> = report
        .errors()
        .map(|(id, e)| (id, e.to_string()))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "Network");
    assert!(errors[0].1.contains("TimeoutMinutes"));
}
