//! CloudFormation custom resource that resolves a domain name to the ARN of
//! an already issued ACM certificate.
//!
mod acm;
mod config;
pub mod custom_resource;
mod event;
mod http_client;
mod lookup;
mod response;

// re-exports
pub use acm::{AcmCertificates, BoxError, CertificateRecord, CertificateSource};
pub use config::Activation;
pub use event::{ProvisioningEvent, RequestType};
pub use http_client::{aws_config_from_env, HyperTlsClient};
pub use lookup::{
    find_certificate, handle, ErrorKind, LookupError, LookupResult, CERTIFICATE_ARN_KEY,
    DOMAIN_NAME_PROPERTY, PLACEHOLDER_PHYSICAL_ID,
};
pub use response::{CfnResponse, ResponseStatus, ResponseTransport};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    LookupError(#[from] LookupError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error(transparent)]
    HttpRequestError(#[from] hyper::http::Error),
    #[error(transparent)]
    HttpError(#[from] hyper::Error),
    #[error("invalid status code. got: {0}")]
    ResponseRejected(u16),
}
