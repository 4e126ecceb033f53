//! AWS::AppFlow::ConnectorProfile resource properties
//!
//! Auto-generated from CloudFormation schema: AWS::AppFlow::ConnectorProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cloudform-codegen

use std::collections::BTreeMap;

use cloudform_core::{Resource, ResourceProperties, Value};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `AWS::AppFlow::ConnectorProfile` resource
pub type ConnectorProfile = Resource<Properties>;

/// Resource Type definition for AWS::AppFlow::ConnectorProfile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Properties {
    /// Mode in which data transfer should be enabled. Private connection mode is currently enabled
    /// for Salesforce, Snowflake, Trendmicro and Singular
    ///
    /// Allowed values: `Public` | `Private`
    #[serde(rename = "ConnectionMode")]
    pub connection_mode: Value<String>,
    /// The label of the connector. The label is unique for each ConnectorRegistration in your AWS
    /// account. Only needed if calling for CUSTOMCONNECTOR connector type/.
    #[serde(rename = "ConnectorLabel", default, skip_serializing_if = "Option::is_none")]
    pub connector_label: Option<Value<String>>,
    /// Connector specific configurations needed to create connector profile
    #[serde(rename = "ConnectorProfileConfig", default, skip_serializing_if = "Option::is_none")]
    pub connector_profile_config: Option<Value<ConnectorProfileConfig>>,
    /// The maximum number of items to retrieve in a single batch.
    #[serde(rename = "ConnectorProfileName")]
    pub connector_profile_name: Value<String>,
    /// List of Saas providers that need connector profile to be created
    ///
    /// Allowed values: `SAPOData` | `Salesforce` | `Pardot` | `Singular` | `Slack` | `Redshift` |
    /// `Marketo` | `Googleanalytics` | `Zendesk` | `Servicenow` | `Datadog` | `Trendmicro` |
    /// `Snowflake` | `Dynatrace` | `Infornexus` | `Amplitude` | `Veeva` | `CustomConnector`
    #[serde(rename = "ConnectorType")]
    pub connector_type: Value<String>,
    /// The ARN of the AWS Key Management Service (AWS KMS) key that's used to encrypt your
    /// function's environment variables. If it's not provided, AWS Lambda uses a default service
    /// key.
    #[serde(rename = "KMSArn", default, skip_serializing_if = "Option::is_none")]
    pub kms_arn: Option<Value<String>>,
}

impl ResourceProperties for Properties {
    const TYPE_NAME: &'static str = "AWS::AppFlow::ConnectorProfile";
    const RETURN_ATTRIBUTES: &'static [&'static str] = &["ConnectorProfileArn", "CredentialsArn"];
}

/// The connector-specific credentials required when using Amplitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AmplitudeConnectorProfileCredentials {
    /// A unique alphanumeric identifier used to authenticate a user, developer, or calling program
    /// to your API.
    #[serde(rename = "ApiKey")]
    pub api_key: Value<String>,
    /// The Secret Access Key portion of the credentials.
    #[serde(rename = "SecretKey")]
    pub secret_key: Value<String>,
}

/// The API key credentials required for API key authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ApiKeyCredentials {
    /// The API key required for API key authentication.
    #[serde(rename = "ApiKey")]
    pub api_key: Value<String>,
    /// The API secret key required for API key authentication.
    #[serde(rename = "ApiSecretKey", default, skip_serializing_if = "Option::is_none")]
    pub api_secret_key: Option<Value<String>>,
}

/// The basic auth credentials required for basic authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct BasicAuthCredentials {
    /// The password to use to connect to a resource.
    #[serde(rename = "Password")]
    pub password: Value<String>,
    /// The username to use to connect to a resource.
    #[serde(rename = "Username")]
    pub username: Value<String>,
}

/// Used by select connectors for which the OAuth workflow is supported, such as Salesforce,
/// Google Analytics, Marketo, Zendesk, and Slack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConnectorOAuthRequest {
    /// The code provided by the connector when it has been authenticated via the connected app.
    #[serde(rename = "AuthCode", default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<Value<String>>,
    /// The URL to which the authentication server redirects the browser after authorization has
    /// been granted.
    #[serde(rename = "RedirectUri", default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<Value<String>>,
}

/// Defines the connector-specific configuration and credentials for the connector profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConnectorProfileConfig {
    /// The connector-specific credentials required by each connector.
    #[serde(
        rename = "ConnectorProfileCredentials",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connector_profile_credentials: Option<Value<ConnectorProfileCredentials>>,
    /// The connector-specific properties of the profile configuration.
    #[serde(
        rename = "ConnectorProfileProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connector_profile_properties: Option<Value<ConnectorProfileProperties>>,
}

/// The connector-specific credentials required by a connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConnectorProfileCredentials {
    /// The connector-specific credentials required when using Amplitude.
    #[serde(rename = "Amplitude", default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<Value<AmplitudeConnectorProfileCredentials>>,
    /// The connector-specific profile credentials that are required when using the custom
    /// connector.
    #[serde(rename = "CustomConnector", default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<Value<CustomConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Datadog.
    #[serde(rename = "Datadog", default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<Value<DatadogConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Dynatrace.
    #[serde(rename = "Dynatrace", default, skip_serializing_if = "Option::is_none")]
    pub dynatrace: Option<Value<DynatraceConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Google Analytics.
    #[serde(rename = "GoogleAnalytics", default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<Value<GoogleAnalyticsConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Infor Nexus.
    #[serde(rename = "InforNexus", default, skip_serializing_if = "Option::is_none")]
    pub infor_nexus: Option<Value<InforNexusConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Marketo.
    #[serde(rename = "Marketo", default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<Value<MarketoConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Salesforce Pardot.
    #[serde(rename = "Pardot", default, skip_serializing_if = "Option::is_none")]
    pub pardot: Option<Value<PardotConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Amazon Redshift.
    #[serde(rename = "Redshift", default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<Value<RedshiftConnectorProfileCredentials>>,
    /// The connector-specific profile credentials required when using SAPOData.
    #[serde(rename = "SAPOData", default, skip_serializing_if = "Option::is_none")]
    pub sapo_data: Option<Value<SAPODataConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Salesforce.
    #[serde(rename = "Salesforce", default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<Value<SalesforceConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using ServiceNow.
    #[serde(rename = "ServiceNow", default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<Value<ServiceNowConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Singular.
    #[serde(rename = "Singular", default, skip_serializing_if = "Option::is_none")]
    pub singular: Option<Value<SingularConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Slack.
    #[serde(rename = "Slack", default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<Value<SlackConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Snowflake.
    #[serde(rename = "Snowflake", default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<Value<SnowflakeConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Trend Micro.
    #[serde(rename = "Trendmicro", default, skip_serializing_if = "Option::is_none")]
    pub trendmicro: Option<Value<TrendmicroConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Veeva.
    #[serde(rename = "Veeva", default, skip_serializing_if = "Option::is_none")]
    pub veeva: Option<Value<VeevaConnectorProfileCredentials>>,
    /// The connector-specific credentials required when using Zendesk.
    #[serde(rename = "Zendesk", default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<Value<ZendeskConnectorProfileCredentials>>,
}

/// The connector-specific profile properties required by each connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ConnectorProfileProperties {
    /// The properties required by the custom connector.
    #[serde(rename = "CustomConnector", default, skip_serializing_if = "Option::is_none")]
    pub custom_connector: Option<Value<CustomConnectorProfileProperties>>,
    /// The connector-specific properties required by Datadog.
    #[serde(rename = "Datadog", default, skip_serializing_if = "Option::is_none")]
    pub datadog: Option<Value<DatadogConnectorProfileProperties>>,
    /// The connector-specific properties required by Dynatrace.
    #[serde(rename = "Dynatrace", default, skip_serializing_if = "Option::is_none")]
    pub dynatrace: Option<Value<DynatraceConnectorProfileProperties>>,
    /// The connector-specific properties required by Infor Nexus.
    #[serde(rename = "InforNexus", default, skip_serializing_if = "Option::is_none")]
    pub infor_nexus: Option<Value<InforNexusConnectorProfileProperties>>,
    /// The connector-specific properties required by Marketo.
    #[serde(rename = "Marketo", default, skip_serializing_if = "Option::is_none")]
    pub marketo: Option<Value<MarketoConnectorProfileProperties>>,
    /// The connector-specific properties required by Salesforce Pardot.
    #[serde(rename = "Pardot", default, skip_serializing_if = "Option::is_none")]
    pub pardot: Option<Value<PardotConnectorProfileProperties>>,
    /// The connector-specific properties required by Amazon Redshift.
    #[serde(rename = "Redshift", default, skip_serializing_if = "Option::is_none")]
    pub redshift: Option<Value<RedshiftConnectorProfileProperties>>,
    /// The connector-specific profile properties required when using SAPOData.
    #[serde(rename = "SAPOData", default, skip_serializing_if = "Option::is_none")]
    pub sapo_data: Option<Value<SAPODataConnectorProfileProperties>>,
    /// The connector-specific properties required by Salesforce.
    #[serde(rename = "Salesforce", default, skip_serializing_if = "Option::is_none")]
    pub salesforce: Option<Value<SalesforceConnectorProfileProperties>>,
    /// The connector-specific properties required by ServiceNow.
    #[serde(rename = "ServiceNow", default, skip_serializing_if = "Option::is_none")]
    pub service_now: Option<Value<ServiceNowConnectorProfileProperties>>,
    /// The connector-specific properties required by Slack.
    #[serde(rename = "Slack", default, skip_serializing_if = "Option::is_none")]
    pub slack: Option<Value<SlackConnectorProfileProperties>>,
    /// The connector-specific properties required by Snowflake.
    #[serde(rename = "Snowflake", default, skip_serializing_if = "Option::is_none")]
    pub snowflake: Option<Value<SnowflakeConnectorProfileProperties>>,
    /// The connector-specific properties required by Veeva.
    #[serde(rename = "Veeva", default, skip_serializing_if = "Option::is_none")]
    pub veeva: Option<Value<VeevaConnectorProfileProperties>>,
    /// The connector-specific properties required by Zendesk.
    #[serde(rename = "Zendesk", default, skip_serializing_if = "Option::is_none")]
    pub zendesk: Option<Value<ZendeskConnectorProfileProperties>>,
}

/// The custom credentials required for custom authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomAuthCredentials {
    /// A map that holds custom authentication credentials.
    #[serde(rename = "CredentialsMap", default, skip_serializing_if = "Option::is_none")]
    pub credentials_map: Option<Value<BTreeMap<String, Value<String>>>>,
    /// The custom authentication type that the connector uses.
    #[serde(rename = "CustomAuthenticationType")]
    pub custom_authentication_type: Value<String>,
}

/// The connector-specific profile credentials that are required when using the custom
/// connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomConnectorProfileCredentials {
    /// The API keys required for the authentication of the user.
    #[serde(rename = "ApiKey", default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<Value<ApiKeyCredentials>>,
    /// The authentication type that the custom connector uses for authenticating while creating a
    /// connector profile.
    ///
    /// Allowed values: `OAUTH2` | `APIKEY` | `BASIC` | `CUSTOM`
    #[serde(rename = "AuthenticationType")]
    pub authentication_type: Value<String>,
    /// The basic credentials that are required for the authentication of the user.
    #[serde(rename = "Basic", default, skip_serializing_if = "Option::is_none")]
    pub basic: Option<Value<BasicAuthCredentials>>,
    /// If the connector uses the custom authentication mechanism, this holds the required
    /// credentials.
    #[serde(rename = "Custom", default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Value<CustomAuthCredentials>>,
    /// The OAuth 2.0 credentials required for the authentication of the user.
    #[serde(rename = "Oauth2", default, skip_serializing_if = "Option::is_none")]
    pub oauth2: Option<Value<OAuth2Credentials>>,
}

/// The profile properties required by the custom connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CustomConnectorProfileProperties {
    /// The OAuth 2.0 properties required for OAuth 2.0 authentication.
    #[serde(rename = "OAuth2Properties", default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_properties: Option<Value<OAuth2Properties>>,
    /// A map of properties that are required to create a profile for the custom connector.
    #[serde(rename = "ProfileProperties", default, skip_serializing_if = "Option::is_none")]
    pub profile_properties: Option<Value<BTreeMap<String, Value<String>>>>,
}

/// The connector-specific credentials required by Datadog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DatadogConnectorProfileCredentials {
    /// A unique alphanumeric identifier used to authenticate a user, developer, or calling program
    /// to your API.
    #[serde(rename = "ApiKey")]
    pub api_key: Value<String>,
    /// Application keys, in conjunction with your API key, give you full access to Datadog's
    /// programmatic API. Application keys are associated with the user account that created them.
    /// The application key is used to log all requests made to the API.
    #[serde(rename = "ApplicationKey")]
    pub application_key: Value<String>,
}

/// The connector-specific profile properties required when using Datadog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DatadogConnectorProfileProperties {
    /// The location of the Datadog resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required by Dynatrace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DynatraceConnectorProfileCredentials {
    /// The API tokens used by Dynatrace API to authenticate various API calls.
    #[serde(rename = "ApiToken")]
    pub api_token: Value<String>,
}

/// The connector-specific profile properties required when using Dynatrace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DynatraceConnectorProfileProperties {
    /// The location of the Dynatrace resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required by Google Analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GoogleAnalyticsConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId")]
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret")]
    pub client_secret: Value<String>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
    /// The credentials used to acquire new access tokens.
    #[serde(rename = "RefreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

/// The connector-specific profile credentials required by Infor Nexus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InforNexusConnectorProfileCredentials {
    /// The Access Key portion of the credentials.
    #[serde(rename = "AccessKeyId")]
    pub access_key_id: Value<String>,
    /// The encryption keys used to encrypt data.
    #[serde(rename = "Datakey")]
    pub datakey: Value<String>,
    /// The secret key used to sign requests.
    #[serde(rename = "SecretAccessKey")]
    pub secret_access_key: Value<String>,
    /// The identifier for the user.
    #[serde(rename = "UserId")]
    pub user_id: Value<String>,
}

/// The connector-specific profile properties required when using Infor Nexus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InforNexusConnectorProfileProperties {
    /// The location of the Infor Nexus resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required when using Marketo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MarketoConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId")]
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret")]
    pub client_secret: Value<String>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
}

/// The connector-specific profile properties required when using Marketo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MarketoConnectorProfileProperties {
    /// The location of the Marketo resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The OAuth 2.0 credentials required for OAuth 2.0 authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OAuth2Credentials {
    /// The access token used to access the connector on your behalf.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value<String>>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret", default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<Value<String>>,
    /// Used by select connectors for which the OAuth workflow is supported.
    #[serde(rename = "OAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub o_auth_request: Option<Value<ConnectorOAuthRequest>>,
    /// The refresh token used to refresh an expired access token.
    #[serde(rename = "RefreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

/// The OAuth 2.0 properties required for OAuth 2.0 authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OAuth2Properties {
    /// The OAuth 2.0 grant type used by connector for OAuth 2.0 authentication.
    ///
    /// Allowed values: `CLIENT_CREDENTIALS` | `AUTHORIZATION_CODE` | `JWT_BEARER`
    #[serde(rename = "OAuth2GrantType", default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_grant_type: Option<Value<String>>,
    /// The token URL required for OAuth 2.0 authentication.
    #[serde(rename = "TokenUrl", default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<Value<String>>,
    /// Associates your token URL with a map of properties that you define. Use this parameter to
    /// provide any additional details that the connector requires to authenticate your request.
    #[serde(rename = "TokenUrlCustomProperties", default, skip_serializing_if = "Option::is_none")]
    pub token_url_custom_properties: Option<Value<BTreeMap<String, Value<String>>>>,
}

/// The SAPOData OAuth type authentication contains the following values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OAuthCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Value<String>>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret", default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<Value<String>>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
    /// The credentials used to acquire new access tokens.
    #[serde(rename = "RefreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

/// The OAuth properties required for OAuth type authentication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OAuthProperties {
    /// The authorization code url required to redirect to SAP Login Page to fetch authorization
    /// code for OAuth type authentication.
    #[serde(rename = "AuthCodeUrl", default, skip_serializing_if = "Option::is_none")]
    pub auth_code_url: Option<Value<String>>,
    /// The OAuth scopes required for OAuth type authentication.
    #[serde(rename = "OAuthScopes", default, skip_serializing_if = "Option::is_none")]
    pub o_auth_scopes: Option<Value<Vec<Value<String>>>>,
    /// The token url required to fetch access/refresh tokens using authorization code and also to
    /// refresh expired access token using refresh token.
    #[serde(rename = "TokenUrl", default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<Value<String>>,
}

/// The connector-specific profile credentials required when using Salesforce Pardot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PardotConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The client credentials to fetch access token and refresh token.
    #[serde(rename = "ClientCredentialsArn", default, skip_serializing_if = "Option::is_none")]
    pub client_credentials_arn: Option<Value<String>>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
    /// The credentials used to acquire new access tokens.
    #[serde(rename = "RefreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

/// The connector-specific profile properties required when using Salesforce Pardot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PardotConnectorProfileProperties {
    /// The Business unit id of Salesforce Pardot instance to be connected.
    #[serde(rename = "BusinessUnitId")]
    pub business_unit_id: Value<String>,
    /// The location of the Salesforce Pardot resource.
    #[serde(rename = "InstanceUrl", default, skip_serializing_if = "Option::is_none")]
    pub instance_url: Option<Value<String>>,
    /// Indicates whether the connector profile applies to a demo or production environment.
    #[serde(rename = "IsSandboxEnvironment", default, skip_serializing_if = "Option::is_none")]
    pub is_sandbox_environment: Option<Value<bool>>,
}

/// The connector-specific profile credentials required when using Amazon Redshift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RedshiftConnectorProfileCredentials {
    /// The password that corresponds to the username.
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value<String>>,
    /// The name of the user.
    #[serde(rename = "Username", default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value<String>>,
}

/// The connector-specific profile properties when using Amazon Redshift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RedshiftConnectorProfileProperties {
    /// The name of the Amazon S3 bucket associated with Redshift.
    #[serde(rename = "BucketName")]
    pub bucket_name: Value<String>,
    /// The object key for the destination bucket in which Amazon AppFlow will place the files.
    #[serde(rename = "BucketPrefix", default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The unique identifier of the Amazon Redshift cluster.
    #[serde(rename = "ClusterIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub cluster_identifier: Option<Value<String>>,
    /// The Amazon Resource Name (ARN) of the IAM role that grants Amazon AppFlow access to the data
    /// through the Amazon Redshift Data API.
    #[serde(rename = "DataApiRoleArn", default, skip_serializing_if = "Option::is_none")]
    pub data_api_role_arn: Option<Value<String>>,
    /// The name of the Amazon Redshift database that will store the transferred data.
    #[serde(rename = "DatabaseName", default, skip_serializing_if = "Option::is_none")]
    pub database_name: Option<Value<String>>,
    /// The JDBC URL of the Amazon Redshift cluster.
    #[serde(rename = "DatabaseUrl", default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<Value<String>>,
    /// If Amazon AppFlow will connect to Amazon Redshift Serverless or Amazon Redshift cluster.
    #[serde(rename = "IsRedshiftServerless", default, skip_serializing_if = "Option::is_none")]
    pub is_redshift_serverless: Option<Value<bool>>,
    /// The Amazon Resource Name (ARN) of the IAM role.
    #[serde(rename = "RoleArn")]
    pub role_arn: Value<String>,
    /// The name of the Amazon Redshift serverless workgroup.
    #[serde(rename = "WorkgroupName", default, skip_serializing_if = "Option::is_none")]
    pub workgroup_name: Option<Value<String>>,
}

/// The connector-specific profile credentials required when using SAPOData.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SAPODataConnectorProfileCredentials {
    /// The SAPOData basic authentication credentials.
    #[serde(rename = "BasicAuthCredentials", default, skip_serializing_if = "Option::is_none")]
    pub basic_auth_credentials: Option<Value<BasicAuthCredentials>>,
    /// The SAPOData OAuth type authentication credentials.
    #[serde(rename = "OAuthCredentials", default, skip_serializing_if = "Option::is_none")]
    pub o_auth_credentials: Option<Value<OAuthCredentials>>,
}

/// The connector-specific profile properties required when using SAPOData.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SAPODataConnectorProfileProperties {
    /// The location of the SAPOData resource.
    #[serde(rename = "ApplicationHostUrl", default, skip_serializing_if = "Option::is_none")]
    pub application_host_url: Option<Value<String>>,
    /// The application path to catalog service.
    #[serde(rename = "ApplicationServicePath", default, skip_serializing_if = "Option::is_none")]
    pub application_service_path: Option<Value<String>>,
    /// The client number for the client creating the connection.
    #[serde(rename = "ClientNumber", default, skip_serializing_if = "Option::is_none")]
    pub client_number: Option<Value<String>>,
    /// If you set this parameter to true, Amazon AppFlow bypasses the single sign-on (SSO) settings
    /// in your SAP account when it accesses your SAP OData instance.
    #[serde(rename = "DisableSSO", default, skip_serializing_if = "Option::is_none")]
    pub disable_sso: Option<Value<bool>>,
    /// The logon language of SAPOData instance.
    #[serde(rename = "LogonLanguage", default, skip_serializing_if = "Option::is_none")]
    pub logon_language: Option<Value<String>>,
    /// The SAPOData OAuth properties required for OAuth type authentication.
    #[serde(rename = "OAuthProperties", default, skip_serializing_if = "Option::is_none")]
    pub o_auth_properties: Option<Value<OAuthProperties>>,
    /// The port number of the SAPOData instance.
    #[serde(rename = "PortNumber", default, skip_serializing_if = "Option::is_none")]
    pub port_number: Option<Value<i64>>,
    /// The SAPOData Private Link service name to be used for private data transfers.
    #[serde(rename = "PrivateLinkServiceName", default, skip_serializing_if = "Option::is_none")]
    pub private_link_service_name: Option<Value<String>>,
}

/// The connector-specific profile credentials required when using Salesforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SalesforceConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The client credentials to fetch access token and refresh token.
    #[serde(rename = "ClientCredentialsArn", default, skip_serializing_if = "Option::is_none")]
    pub client_credentials_arn: Option<Value<String>>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
    /// The credentials used to access your Salesforce records.
    #[serde(rename = "JwtToken", default, skip_serializing_if = "Option::is_none")]
    pub jwt_token: Option<Value<String>>,
    /// The grant type used by Amazon AppFlow when it requests an access token from Salesforce.
    ///
    /// Allowed values: `CLIENT_CREDENTIALS` | `AUTHORIZATION_CODE` | `JWT_BEARER`
    #[serde(rename = "OAuth2GrantType", default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_grant_type: Option<Value<String>>,
    /// The credentials used to acquire new access tokens.
    #[serde(rename = "RefreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Value<String>>,
}

/// The connector-specific profile properties required when using Salesforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SalesforceConnectorProfileProperties {
    /// The location of the Salesforce resource.
    #[serde(rename = "InstanceUrl", default, skip_serializing_if = "Option::is_none")]
    pub instance_url: Option<Value<String>>,
    /// Indicates whether the connector profile applies to a sandbox or production environment.
    #[serde(rename = "isSandboxEnvironment", default, skip_serializing_if = "Option::is_none")]
    pub is_sandbox_environment: Option<Value<bool>>,
    /// Indicates whether Amazon AppFlow uses the private network to send metadata and authorization
    /// calls to Salesforce.
    #[serde(
        rename = "usePrivateLinkForMetadataAndAuthorization",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub use_private_link_for_metadata_and_authorization: Option<Value<bool>>,
}

/// The connector-specific profile credentials required when using ServiceNow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ServiceNowConnectorProfileCredentials {
    /// The OAuth 2.0 credentials required to authenticate the user.
    #[serde(rename = "OAuth2Credentials", default, skip_serializing_if = "Option::is_none")]
    pub o_auth2_credentials: Option<Value<OAuth2Credentials>>,
    /// The password that corresponds to the username.
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value<String>>,
    /// The name of the user.
    #[serde(rename = "Username", default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value<String>>,
}

/// The connector-specific profile properties required when using ServiceNow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ServiceNowConnectorProfileProperties {
    /// The location of the ServiceNow resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required when using Singular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SingularConnectorProfileCredentials {
    /// A unique alphanumeric identifier used to authenticate a user, developer, or calling program
    /// to your API.
    #[serde(rename = "ApiKey")]
    pub api_key: Value<String>,
}

/// The connector-specific profile credentials required when using Slack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SlackConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId")]
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret")]
    pub client_secret: Value<String>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
}

/// The connector-specific profile properties required when using Slack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SlackConnectorProfileProperties {
    /// The location of the Slack resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required when using Snowflake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SnowflakeConnectorProfileCredentials {
    /// The password that corresponds to the username.
    #[serde(rename = "Password")]
    pub password: Value<String>,
    /// The name of the user.
    #[serde(rename = "Username")]
    pub username: Value<String>,
}

/// The connector-specific profile properties required when using Snowflake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SnowflakeConnectorProfileProperties {
    /// The name of the account.
    #[serde(rename = "AccountName", default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<Value<String>>,
    /// The name of the Amazon S3 bucket associated with Snowflake.
    #[serde(rename = "BucketName")]
    pub bucket_name: Value<String>,
    /// The bucket path that refers to the Amazon S3 bucket associated with Snowflake.
    #[serde(rename = "BucketPrefix", default, skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<Value<String>>,
    /// The Snowflake Private Link service name to be used for private data transfers.
    #[serde(rename = "PrivateLinkServiceName", default, skip_serializing_if = "Option::is_none")]
    pub private_link_service_name: Option<Value<String>>,
    /// The region of the Snowflake account.
    #[serde(rename = "Region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Value<String>>,
    /// The name of the Amazon S3 stage that was created while setting up an Amazon S3 stage in the
    /// Snowflake account. This is written in the following format: Database.Schema.Stage.
    #[serde(rename = "Stage")]
    pub stage: Value<String>,
    /// The name of the Snowflake warehouse.
    #[serde(rename = "Warehouse")]
    pub warehouse: Value<String>,
}

/// The connector-specific profile credentials required when using Trend Micro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TrendmicroConnectorProfileCredentials {
    /// The Secret Access Key portion of the credentials.
    #[serde(rename = "ApiSecretKey")]
    pub api_secret_key: Value<String>,
}

/// The connector-specific profile credentials required when using Veeva.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VeevaConnectorProfileCredentials {
    /// The password that corresponds to the username.
    #[serde(rename = "Password")]
    pub password: Value<String>,
    /// The name of the user.
    #[serde(rename = "Username")]
    pub username: Value<String>,
}

/// The connector-specific profile properties required when using Veeva.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VeevaConnectorProfileProperties {
    /// The location of the Veeva resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}

/// The connector-specific profile credentials required when using Zendesk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ZendeskConnectorProfileCredentials {
    /// The credentials used to access protected resources.
    #[serde(rename = "AccessToken", default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Value<String>>,
    /// The identifier for the desired client.
    #[serde(rename = "ClientId")]
    pub client_id: Value<String>,
    /// The client secret used by the OAuth client to authenticate to the authorization server.
    #[serde(rename = "ClientSecret")]
    pub client_secret: Value<String>,
    /// The oauth needed to request security tokens from the connector endpoint.
    #[serde(rename = "ConnectorOAuthRequest", default, skip_serializing_if = "Option::is_none")]
    pub connector_o_auth_request: Option<Value<ConnectorOAuthRequest>>,
}

/// The connector-specific profile properties required when using Zendesk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ZendeskConnectorProfileProperties {
    /// The location of the Zendesk resource.
    #[serde(rename = "InstanceUrl")]
    pub instance_url: Value<String>,
}
