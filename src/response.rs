//! CloudFormation custom resource response
//!
use std::collections::HashMap;

use crate::{Error, ProvisioningEvent};

#[derive(serde::Serialize, serde::Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResponseStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Body uploaded to the event's ResponseURL
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CfnResponse {
    #[serde(rename = "Status")]
    pub status: ResponseStatus,
    #[serde(rename = "Reason", default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(rename = "PhysicalResourceId")]
    pub physical_resource_id: String,
    #[serde(rename = "StackId")]
    pub stack_id: String,
    #[serde(rename = "RequestId")]
    pub request_id: String,
    #[serde(rename = "LogicalResourceId")]
    pub logical_resource_id: String,
    #[serde(rename = "NoEcho", default, skip_serializing_if = "std::ops::Not::not")]
    pub no_echo: bool,
    #[serde(rename = "Data", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<HashMap<String, String>>,
}

impl CfnResponse {
    /// Response identifying the same request as `event`, not yet succeeded
    pub fn new(event: &ProvisioningEvent) -> Self {
        Self {
            status: ResponseStatus::Failed,
            reason: String::new(),
            physical_resource_id: event.physical_resource_id.clone(),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            no_echo: false,
            data: None,
        }
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Delivers the response body back to CloudFormation
#[async_trait::async_trait]
pub trait ResponseTransport {
    async fn put(&self, url: &str, body: Vec<u8>) -> Result<(), Error>;
}
