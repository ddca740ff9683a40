//! HTTP client for the NCBI Variation Services API.
//!
//! This module provides [`VariationClient`], the blocking [`VariationService`]
//! implementation backed by a `ureq` agent, and its builder.

use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use varid_core::{Result, Spdi, VariationError, VcfKey};

use super::consts::{
    CANONICAL_REPRESENTATIVE, CONTEXTUAL, CONTEXTUALS, HGVS_PATH, REFSNP_PATH, RSIDS, SPDI_PATH,
    TO_HGVS, VCF_ANNOTATION_PATH, VCF_FIELDS, VCF_PATH,
};
use super::models::{
    Envelope, HgvsPayload, RefSnpDocument, RsidsPayload, SpdisPayload, VcfFields,
};
use super::service::VariationService;
use super::utils::{encode_segment, get_default_api_root, get_default_timeout, normalize_api_root};

/// Builder for constructing a [`VariationClient`] with custom configuration.
///
/// # Examples
///
/// ```rust,no_run
/// use std::time::Duration;
/// use varid_services::client::VariationClient;
///
/// # fn main() -> varid_core::Result<()> {
/// let client = VariationClient::builder()
///     .with_api_root("https://api.ncbi.nlm.nih.gov/variation/v0/".to_string())
///     .with_timeout(Duration::from_secs(10))
///     .finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct VariationClientBuilder {
    api_root: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl VariationClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API root all endpoint paths are appended to.
    pub fn with_api_root(mut self, api_root: String) -> Self {
        self.api_root = Some(api_root);
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Consumes the builder and creates a VariationClient.
    pub fn finish(self) -> Result<VariationClient> {
        let api_root = self
            .api_root
            .map(|root| normalize_api_root(&root))
            .unwrap_or_else(get_default_api_root);

        if !(api_root.starts_with("https://") || api_root.starts_with("http://")) {
            return Err(VariationError::RemoteUnavailable {
                url: api_root,
                reason: "API root must be an http(s) URL".to_string(),
            });
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("varid/{}", env!("CARGO_PKG_VERSION")));

        let agent = ureq::AgentBuilder::new()
            .timeout(self.timeout.unwrap_or_else(get_default_timeout))
            .user_agent(&user_agent)
            .build();

        Ok(VariationClient { api_root, agent })
    }
}

/// Blocking client for the Variation Services API.
///
/// Every lookup is a single request: transport failures, non-200 statuses and
/// undecodable bodies abort with a [`VariationError`].
pub struct VariationClient {
    /// API root, always ending in `/`
    pub api_root: String,
    agent: ureq::Agent,
}

impl VariationClient {
    pub fn builder() -> VariationClientBuilder {
        VariationClientBuilder::default()
    }

    fn spdi_url(&self, spdi: &Spdi, operation: &str) -> String {
        format!(
            "{}{}/{}/{}",
            self.api_root,
            SPDI_PATH,
            encode_segment(&spdi.to_string()),
            operation
        )
    }

    fn get_text(&self, url: &str) -> Result<String> {
        debug!(url = %url, "GET");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| request_error(url, e))?;
        read_body(url, response)
    }

    fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let body = self.get_text(url)?;
        decode_data(url, &body)
    }

    fn get_required<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.get_data(url)?.ok_or_else(|| VariationError::MissingData {
            url: url.to_string(),
        })
    }

    /// A 404 or a body without `data` both mean the service knows nothing.
    fn get_optional<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        match self.get_data(url) {
            Err(VariationError::RemoteStatus { status: 404, .. }) => Ok(None),
            other => other,
        }
    }
}

impl VariationService for VariationClient {
    fn refsnp(&self, rsid: u64) -> Result<RefSnpDocument> {
        let url = format!("{}{}/{}", self.api_root, REFSNP_PATH, rsid);
        let body = self.get_text(&url)?;
        RefSnpDocument::parse(body).map_err(|e| VariationError::Decode {
            url,
            reason: e.to_string(),
        })
    }

    fn contextual(&self, spdi: &Spdi) -> Result<Spdi> {
        self.get_required(&self.spdi_url(spdi, CONTEXTUAL))
    }

    fn canonical_representative(&self, spdi: &Spdi) -> Result<Spdi> {
        self.get_required(&self.spdi_url(spdi, CANONICAL_REPRESENTATIVE))
    }

    fn vcf_fields(&self, spdi: &Spdi) -> Result<VcfFields> {
        self.get_required(&self.spdi_url(spdi, VCF_FIELDS))
    }

    fn spdi_to_hgvs(&self, spdi: &Spdi) -> Result<String> {
        let payload: HgvsPayload = self.get_required(&self.spdi_url(spdi, TO_HGVS))?;
        Ok(payload.hgvs)
    }

    fn spdi_rsids(&self, spdi: &Spdi) -> Result<Option<Vec<u64>>> {
        let payload: Option<RsidsPayload> = self.get_optional(&self.spdi_url(spdi, RSIDS))?;
        Ok(payload.map(|p| p.rsids))
    }

    fn hgvs_contextuals(&self, hgvs: &str) -> Result<Vec<Spdi>> {
        let url = format!(
            "{}{}/{}/{}",
            self.api_root,
            HGVS_PATH,
            encode_segment(hgvs),
            CONTEXTUALS
        );
        let payload: SpdisPayload = self.get_required(&url)?;
        Ok(payload.spdis)
    }

    fn vcf_contextuals(&self, key: &VcfKey) -> Result<Option<Vec<Spdi>>> {
        let url = format!(
            "{}{}/{}/{}/{}/{}/{}",
            self.api_root,
            VCF_PATH,
            encode_segment(&key.chrom),
            key.pos,
            encode_segment(&key.reference),
            encode_segment(&key.alternate),
            CONTEXTUALS
        );
        let payload: Option<SpdisPayload> = self.get_optional(&url)?;
        Ok(payload.map(|p| p.spdis))
    }

    fn annotate_vcf(&self, rows: &str, assembly: &str) -> Result<String> {
        let url = format!("{}{}", self.api_root, VCF_ANNOTATION_PATH);
        debug!(url = %url, assembly, bytes = rows.len(), "POST");
        let response = self
            .agent
            .post(&url)
            .query("assembly", assembly)
            .set("Content-Type", "text/plain")
            .send_string(rows)
            .map_err(|e| request_error(&url, e))?;
        read_body(&url, response)
    }
}

fn request_error(url: &str, error: ureq::Error) -> VariationError {
    match error {
        ureq::Error::Status(status, _) => VariationError::RemoteStatus {
            url: url.to_string(),
            status,
        },
        ureq::Error::Transport(transport) => VariationError::RemoteUnavailable {
            url: url.to_string(),
            reason: transport.to_string(),
        },
    }
}

fn read_body(url: &str, response: ureq::Response) -> Result<String> {
    let status = response.status();
    if status != 200 {
        return Err(VariationError::RemoteStatus {
            url: url.to_string(),
            status,
        });
    }
    read_text(url, response.into_reader())
}

/// Read a whole response body; `into_string` would cap it at 10 MB.
fn read_text(url: &str, mut reader: impl Read) -> Result<String> {
    let mut body = String::new();
    reader
        .read_to_string(&mut body)
        .map_err(|e| VariationError::RemoteUnavailable {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
    Ok(body)
}

/// Decode the `data` member of a service response body.
pub fn decode_data<T: DeserializeOwned>(url: &str, body: &str) -> Result<Option<T>> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| VariationError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(envelope.data)
}
