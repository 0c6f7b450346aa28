//! Wraps the lookup handler into the CloudFormation custom resource protocol:
//! every outcome, failures included, is reported back to the stack.
//!
use crate::{
    CertificateSource, CfnResponse, Error, ProvisioningEvent, ResponseStatus, ResponseTransport,
};

const PANIC_REASON: &str = "Function panicked, see log stream for details";

/// Run the handler and turn its outcome into a response envelope
pub async fn build_response<S>(
    event: &ProvisioningEvent,
    log_stream: &str,
    source: &S,
) -> CfnResponse
where
    S: CertificateSource + ?Sized,
{
    use futures::FutureExt;

    let mut response = CfnResponse::new(event);

    let outcome = std::panic::AssertUnwindSafe(crate::handle(event, source))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(result)) => {
            response.status = ResponseStatus::Success;
            response.physical_resource_id = result.physical_id;
            response.data = result.data;
        }
        Ok(Err(err)) => {
            tracing::error!(kind = ?err.kind(), "sending status failed: {}", err);
            response.status = ResponseStatus::Failed;
            response.reason = err.to_string();
            response.physical_resource_id = crate::PLACEHOLDER_PHYSICAL_ID.to_string();
        }
        Err(_panic) => {
            tracing::error!("lookup handler panicked");
            response.status = ResponseStatus::Failed;
            response.reason = PANIC_REASON.to_string();
        }
    }

    if response.physical_resource_id.is_empty() {
        tracing::warn!("PhysicalResourceId must exist on creation, copying log stream name");
        response.physical_resource_id = log_stream.to_string();
    }

    response
}

/// Build the response and upload it to the event's ResponseURL
pub async fn respond<S, T>(
    event: &ProvisioningEvent,
    log_stream: &str,
    source: &S,
    transport: &T,
) -> Result<CfnResponse, Error>
where
    S: CertificateSource + ?Sized,
    T: ResponseTransport + ?Sized,
{
    let response = build_response(event, log_stream, source).await;

    transport
        .put(&event.response_url, response.to_json_bytes()?)
        .await?;
    tracing::info!(
        status = ?response.status,
        request_id = event.request_id.as_str(),
        "response sent"
    );

    Ok(response)
}
