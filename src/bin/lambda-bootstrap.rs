use cfn_lookup_acm::{AcmCertificates, HyperTlsClient, ProvisioningEvent};

/// main() for AWS Lambda
#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    use lambda_runtime::{run, service_fn, LambdaEvent};

    // CloudWatch adds timestamps, no colors in log stream
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_ansi(false)
        .without_time()
        .init();

    let activation = cfn_lookup_acm::Activation::from_env();
    if !activation.is_enabled() {
        tracing::error!(
            missing = ?activation.missing_settings(),
            "lookup handler is not activated, exiting"
        );
        return Ok(());
    }

    // Shared across invocations
    let aws_sdk_config = cfn_lookup_acm::aws_config_from_env(None).await;
    let certificates = AcmCertificates::new(&aws_sdk_config);
    let http_client = HyperTlsClient::new();

    let certificates = &certificates;
    let http_client = &http_client;
    run(service_fn(
        move |event: LambdaEvent<ProvisioningEvent>| async move {
            lambda_handler(event, certificates, http_client).await
        },
    ))
    .await?;
    Ok(())
}

/// Lambda handler
async fn lambda_handler(
    event: lambda_runtime::LambdaEvent<ProvisioningEvent>,
    certificates: &AcmCertificates,
    http_client: &HyperTlsClient,
) -> Result<(), lambda_runtime::Error> {
    let log_stream = event.context.env_config.log_stream.clone();
    let event = event.payload;
    tracing::info!(
        request_type = ?event.request_type,
        logical_resource_id = event.logical_resource_id.as_str(),
        "custom resource request"
    );

    cfn_lookup_acm::custom_resource::respond(&event, &log_stream, certificates, http_client)
        .await?;
    Ok(())
}
