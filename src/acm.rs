use aws_sdk_acm::operation::list_certificates::ListCertificatesOutput;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Certificate summary as listed by ACM
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateRecord {
    pub domain_name: String,
    pub certificate_arn: String,
}

impl CertificateRecord {
    pub fn new(domain_name: impl Into<String>, certificate_arn: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            certificate_arn: certificate_arn.into(),
        }
    }
}

/// Something that can list every certificate currently issued
#[async_trait::async_trait]
pub trait CertificateSource {
    /// All certificates, in the order the service returns them
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>, BoxError>;
}

#[derive(Clone, Debug)]
pub struct AcmCertificates {
    acm_client: aws_sdk_acm::Client,
}

impl AcmCertificates {
    pub fn new(aws_sdk_config: &aws_config::SdkConfig) -> Self {
        Self {
            acm_client: aws_sdk_acm::Client::new(aws_sdk_config),
        }
    }
}

#[async_trait::async_trait]
impl CertificateSource for AcmCertificates {
    /// List all ACM certificates that AWS IAM role can access
    async fn list_certificates(&self) -> Result<Vec<CertificateRecord>, BoxError> {
        // Call ACM ListCertificates API, walk every page
        let pages = self
            .acm_client
            .list_certificates()
            .into_paginator()
            .send()
            .try_collect()
            .await?;

        let records = records_from_pages(pages);
        tracing::debug!(count = records.len(), "listed certificates");
        Ok(records)
    }
}

/// AWS SDK response pages -> CertificateRecord, in page order
fn records_from_pages(pages: Vec<ListCertificatesOutput>) -> Vec<CertificateRecord> {
    pages
        .into_iter()
        .filter_map(|page| page.certificate_summary_list)
        .flatten()
        .filter_map(|summary| match (summary.domain_name, summary.certificate_arn) {
            (Some(domain_name), Some(certificate_arn)) => Some(CertificateRecord {
                domain_name,
                certificate_arn,
            }),
            (domain_name, certificate_arn) => {
                tracing::debug!(?domain_name, ?certificate_arn, "skip incomplete summary");
                None
            }
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_acm::types::CertificateSummary;

    fn summary(domain_name: &str, certificate_arn: &str) -> CertificateSummary {
        CertificateSummary::builder()
            .domain_name(domain_name)
            .certificate_arn(certificate_arn)
            .build()
    }

    #[test]
    fn records_keep_order_across_pages() {
        let pages = vec![
            ListCertificatesOutput::builder()
                .certificate_summary_list(summary("www.example.com", "arn:1"))
                .certificate_summary_list(summary("api.example.com", "arn:2"))
                .next_token("page-2")
                .build(),
            ListCertificatesOutput::builder()
                .certificate_summary_list(summary("*.example.com", "arn:3"))
                .build(),
            // empty last page
            ListCertificatesOutput::builder().build(),
        ];

        assert_eq!(
            records_from_pages(pages),
            vec![
                CertificateRecord::new("www.example.com", "arn:1"),
                CertificateRecord::new("api.example.com", "arn:2"),
                CertificateRecord::new("*.example.com", "arn:3"),
            ]
        );
    }

    #[test]
    fn incomplete_summaries_skipped() {
        let pages = vec![ListCertificatesOutput::builder()
            .certificate_summary_list(
                CertificateSummary::builder()
                    .certificate_arn("arn:no-domain")
                    .build(),
            )
            .certificate_summary_list(
                CertificateSummary::builder()
                    .domain_name("no-arn.example.com")
                    .build(),
            )
            .certificate_summary_list(summary("api.example.com", "arn:1"))
            .build()];

        assert_eq!(
            records_from_pages(pages),
            vec![CertificateRecord::new("api.example.com", "arn:1")]
        );
    }
}
