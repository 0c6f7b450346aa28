use std::collections::HashMap;

use crate::{CertificateRecord, CertificateSource, ProvisioningEvent, RequestType};

/// Resource property holding the domain name to look up
pub const DOMAIN_NAME_PROPERTY: &str = "DomainName";

/// Key of the matched ARN in the response data, read by `!GetAtt Acm.CertificateArn`
pub const CERTIFICATE_ARN_KEY: &str = "CertificateArn";

/// CloudFormation requires a physical id. It must not change between
/// invocations, otherwise an update would replace the resource.
pub const PLACEHOLDER_PHYSICAL_ID: &str = "the";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    MissingParameter,
    UpstreamUnavailable,
    NotFound,
}

#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("{0} not defined")]
    MissingParameter(&'static str),
    #[error(
        "failed to list certificates: {}",
        aws_sdk_acm::error::DisplayErrorContext(.0.as_ref())
    )]
    UpstreamUnavailable(#[source] crate::BoxError),
    #[error("failed to find certificate for domain {0}")]
    NotFound(String),
}

impl LookupError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingParameter(_) => ErrorKind::MissingParameter,
            Self::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupResult {
    pub physical_id: String,
    pub data: Option<HashMap<String, String>>,
}

impl LookupResult {
    fn without_data() -> Self {
        Self {
            physical_id: PLACEHOLDER_PHYSICAL_ID.to_string(),
            data: None,
        }
    }

    fn with_certificate_arn(certificate_arn: &str) -> Self {
        let data = HashMap::from([(
            CERTIFICATE_ARN_KEY.to_string(),
            certificate_arn.to_string(),
        )]);
        Self {
            physical_id: PLACEHOLDER_PHYSICAL_ID.to_string(),
            data: Some(data),
        }
    }

    pub fn certificate_arn<'a>(&'a self) -> Option<&'a str> {
        self.data
            .as_ref()
            .and_then(|data| data.get(CERTIFICATE_ARN_KEY))
            .map(|arn| arn.as_str())
    }
}

/// Resolve the event's DomainName to an existing certificate ARN
pub async fn handle<S>(event: &ProvisioningEvent, source: &S) -> Result<LookupResult, LookupError>
where
    S: CertificateSource + ?Sized,
{
    match event.request_type {
        RequestType::Delete => {
            // Nothing was created, nothing to clean up
            tracing::info!("delete request, nothing to do");
            return Ok(LookupResult::without_data());
        }
        RequestType::Create | RequestType::Update => {}
    }

    let domain_name = match event.property(DOMAIN_NAME_PROPERTY) {
        Some(domain_name) if !domain_name.is_empty() => domain_name,
        _ => return Err(LookupError::MissingParameter(DOMAIN_NAME_PROPERTY)),
    };

    // Single attempt, CloudFormation owns retry and rollback
    let certificates = source
        .list_certificates()
        .await
        .map_err(LookupError::UpstreamUnavailable)?;

    match find_certificate(&certificates, domain_name) {
        Some(certificate) => {
            tracing::info!(
                domain_name,
                certificate_arn = certificate.certificate_arn.as_str(),
                "certificate found"
            );
            Ok(LookupResult::with_certificate_arn(
                &certificate.certificate_arn,
            ))
        }
        None => Err(LookupError::NotFound(domain_name.to_string())),
    }
}

/// First certificate whose domain name equals `domain_name`, case sensitive.
/// Wildcard certificates only match their literal `*.` name.
pub fn find_certificate<'a>(
    certificates: &'a [CertificateRecord],
    domain_name: &str,
) -> Option<&'a CertificateRecord> {
    certificates
        .iter()
        .find(|certificate| certificate.domain_name == domain_name)
}
