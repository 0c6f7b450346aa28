use crate::Error;

/// Set region as "us-east-1", etc. or None for default region
pub async fn aws_config_from_env(
    region: impl aws_config::meta::region::ProvideRegion + 'static,
) -> aws_config::SdkConfig {
    if region.region().await.is_some() {
        // Specified region
        aws_config::from_env().region(region).load().await
    } else {
        // default region
        aws_config::from_env().load().await
    }
}

type HttpsConnector = hyper_tls::HttpsConnector<hyper::client::HttpConnector>;

/// HTTPS client uploading custom resource responses to pre-signed S3 URLs
#[derive(Clone, Debug)]
pub struct HyperTlsClient(hyper::Client<HttpsConnector>);

impl HyperTlsClient {
    pub fn new() -> Self {
        Self(hyper::Client::builder().build(HttpsConnector::new()))
    }
}

impl Default for HyperTlsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl crate::ResponseTransport for HyperTlsClient {
    async fn put(&self, url: &str, body: Vec<u8>) -> Result<(), Error> {
        // No Content-Type, the pre-signed URL is not signed with one
        let req = hyper::Request::builder()
            .method(hyper::Method::PUT)
            .uri(url)
            .header(hyper::header::CONTENT_LENGTH, body.len())
            .body(hyper::Body::from(body))?;

        let resp = self.0.request(req).await?;
        let status = resp.status();
        if status != hyper::StatusCode::OK {
            return Err(Error::ResponseRejected(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseTransport;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct Received {
        method: hyper::Method,
        content_type: Option<hyper::header::HeaderValue>,
        body: Vec<u8>,
    }

    /// Local HTTP server answering every request with `status`
    fn serve(status: u16) -> (String, Arc<Mutex<Vec<Received>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let captured = received.clone();

        let make_svc = hyper::service::make_service_fn(move |_conn| {
            let captured = captured.clone();
            async move {
                Ok::<_, std::convert::Infallible>(hyper::service::service_fn(
                    move |req: hyper::Request<hyper::Body>| {
                        let captured = captured.clone();
                        async move {
                            let method = req.method().clone();
                            let content_type =
                                req.headers().get(hyper::header::CONTENT_TYPE).cloned();
                            let body = hyper::body::to_bytes(req.into_body()).await?;
                            captured.lock().expect("poisoned mutex").push(Received {
                                method,
                                content_type,
                                body: body.to_vec(),
                            });

                            let mut resp = hyper::Response::new(hyper::Body::empty());
                            *resp.status_mut() =
                                hyper::StatusCode::from_u16(status).expect("valid status");
                            Ok::<_, hyper::Error>(resp)
                        }
                    },
                ))
            }
        });

        let server = hyper::Server::bind(&([127, 0, 0, 1], 0).into()).serve(make_svc);
        let url = format!("http://{}/presigned?X-Amz-Signature=abc", server.local_addr());
        tokio::spawn(server);

        (url, received)
    }

    #[tokio::test]
    async fn put_uploads_body_without_content_type() {
        let (url, received) = serve(200);

        HyperTlsClient::new()
            .put(&url, br#"{"Status":"SUCCESS"}"#.to_vec())
            .await
            .unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].method, hyper::Method::PUT);
        assert_eq!(received[0].content_type, None);
        assert_eq!(received[0].body, br#"{"Status":"SUCCESS"}"#.to_vec());
    }

    #[tokio::test]
    async fn non_ok_status_rejected() {
        for status in [201, 403, 500] {
            let (url, _received) = serve(status);

            let err = HyperTlsClient::new()
                .put(&url, b"{}".to_vec())
                .await
                .unwrap_err();

            assert!(matches!(err, Error::ResponseRejected(s) if s == status));
        }
    }
}
