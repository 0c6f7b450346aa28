//! CloudFormation custom resource request
//!
use std::collections::HashMap;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Event sent by CloudFormation to the custom resource's ServiceToken
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct ProvisioningEvent {
    #[serde(rename = "RequestType")]
    pub request_type: RequestType,
    #[serde(rename = "RequestId", default)]
    pub request_id: String,
    #[serde(rename = "ResponseURL", default)]
    pub response_url: String,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: String,
    // Not present on Create
    #[serde(rename = "PhysicalResourceId", default)]
    pub physical_resource_id: String,
    #[serde(rename = "LogicalResourceId", default)]
    pub logical_resource_id: String,
    #[serde(rename = "StackId", default)]
    pub stack_id: String,
    #[serde(rename = "ResourceProperties", default)]
    pub resource_properties: HashMap<String, serde_json::Value>,
    // Update only
    #[serde(
        rename = "OldResourceProperties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub old_resource_properties: Option<HashMap<String, serde_json::Value>>,
}

impl ProvisioningEvent {
    /// String valued resource property, None if missing or not a string
    pub fn property<'a>(&'a self, name: &str) -> Option<&'a str> {
        self.resource_properties
            .get(name)
            .and_then(|value| value.as_str())
    }
}
