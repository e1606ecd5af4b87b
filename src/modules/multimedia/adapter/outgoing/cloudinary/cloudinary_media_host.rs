use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use tracing::debug;

use super::config::{CloudinaryConfig, SignatureAlgorithm};
use crate::multimedia::application::domain::entities::{ImageUpload, UploadedImage};
use crate::multimedia::application::ports::outgoing::{MediaHost, MediaHostError};

/// Signed request parameters, sorted by key as the signature requires.
type Params = BTreeMap<&'static str, String>;

#[derive(Debug, Clone)]
struct RawResponse {
    status: u16,
    body: String,
}

/// Internal seam so the signing and response handling can be tested
/// without a live media host.
#[async_trait]
trait CloudinaryTransport: Send + Sync {
    async fn post_form(
        &self,
        url: &str,
        params: Params,
        file: Option<ImageUpload>,
    ) -> Result<RawResponse, MediaHostError>;
}

struct ReqwestTransport {
    client: reqwest::Client,
}

#[async_trait]
impl CloudinaryTransport for ReqwestTransport {
    async fn post_form(
        &self,
        url: &str,
        params: Params,
        file: Option<ImageUpload>,
    ) -> Result<RawResponse, MediaHostError> {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in params {
            form = form.text(key, value);
        }

        if let Some(file) = file {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| MediaHostError::Transport(e.to_string()))?;
            form = form.part("file", part);
        }

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaHostError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MediaHostError::Transport(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Clone)]
pub struct CloudinaryMediaHost {
    config: CloudinaryConfig,
    transport: Arc<dyn CloudinaryTransport>,
}

impl CloudinaryMediaHost {
    pub fn new(config: CloudinaryConfig) -> Result<Self, MediaHostError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| MediaHostError::Transport(e.to_string()))?;

        Ok(Self {
            config,
            transport: Arc::new(ReqwestTransport { client }),
        })
    }

    #[cfg(test)]
    fn with_transport(config: CloudinaryConfig, transport: Arc<dyn CloudinaryTransport>) -> Self {
        Self { config, transport }
    }

    /// Adds `timestamp`, `api_key` and `signature` to `params`.
    fn signed(&self, mut params: Params, timestamp: i64) -> Params {
        params.insert("timestamp", timestamp.to_string());
        let algorithm = self.config.signature_algorithm;
        let signature = sign(&params, &self.config.api_secret, algorithm);

        params.insert("api_key", self.config.api_key.clone());
        if algorithm == SignatureAlgorithm::Sha256 {
            params.insert("signature_algorithm", "sha256".to_string());
        }
        params.insert("signature", signature);
        params
    }

    async fn post(
        &self,
        action: &str,
        params: Params,
        file: Option<ImageUpload>,
    ) -> Result<String, MediaHostError> {
        let params = self.signed(params, Utc::now().timestamp());
        let response = self
            .transport
            .post_form(&self.config.endpoint(action), params, file)
            .await?;

        if !(200..300).contains(&response.status) {
            return Err(MediaHostError::Rejected {
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

/// Hex digest of `k1=v1&k2=v2...` (keys sorted) followed by the API secret.
fn sign(params: &Params, api_secret: &str, algorithm: SignatureAlgorithm) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    match algorithm {
        SignatureAlgorithm::Sha1 => hex_digest::<Sha1>(&to_sign, api_secret),
        SignatureAlgorithm::Sha256 => hex_digest::<Sha256>(&to_sign, api_secret),
    }
}

fn hex_digest<D: Digest>(to_sign: &str, api_secret: &str) -> String {
    let mut hasher = D::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[async_trait]
impl MediaHost for CloudinaryMediaHost {
    async fn upload(
        &self,
        upload: ImageUpload,
        folder: &str,
        transformation: &str,
    ) -> Result<UploadedImage, MediaHostError> {
        let mut params = Params::new();
        params.insert("folder", folder.to_string());
        params.insert("transformation", transformation.to_string());

        let body = self.post("upload", params, Some(upload)).await?;

        let parsed: UploadResponse = serde_json::from_str(&body)
            .map_err(|e| MediaHostError::UnexpectedResponse(e.to_string()))?;

        Ok(UploadedImage {
            url: parsed.secure_url,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), MediaHostError> {
        let mut params = Params::new();
        params.insert("public_id", public_id.to_string());
        params.insert("invalidate", "true".to_string());

        let body = self.post("destroy", params, None).await?;

        let parsed: DestroyResponse = serde_json::from_str(&body)
            .map_err(|e| MediaHostError::UnexpectedResponse(e.to_string()))?;

        match parsed.result.as_str() {
            "ok" => Ok(()),
            "not found" => {
                debug!(public_id, "Media already absent on host");
                Ok(())
            }
            other => Err(MediaHostError::UnexpectedResponse(format!(
                "destroy result: {}",
                other
            ))),
        }
    }
}
