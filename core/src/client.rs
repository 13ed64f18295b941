//! Stateless HTTP request builder and response parser for the Mojang API.
//!
//! # Design
//! `MojangClient` holds only its `ClientConfig` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller (or `MojangApi`) executes the round-trip,
//! keeping this module deterministic and free of I/O.
//!
//! Lookups return `Ok(None)` when the server says the profile does not exist.
//! Which statuses mean that depends on the configured `ApiVariant`.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ApiVariant, ClientConfig, Endpoints};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{ProfileId, ProfileName, ProfileSkin};

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain";

/// Synchronous, stateless client for the Mojang API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone, Default)]
pub struct MojangClient {
    config: ClientConfig,
}

impl MojangClient {
    /// Client for the production hosts, speaking the current API.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Client sending every request to `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_config(ClientConfig {
            endpoints: Endpoints::single(base_url),
            variant: ApiVariant::default(),
        })
    }

    /// Same client speaking another API generation.
    pub fn variant(mut self, variant: ApiVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn build_blocked_servers(&self) -> HttpRequest {
        get(
            format!("{}/blockedservers", self.config.endpoints.session),
            TEXT_PLAIN,
        )
    }

    pub fn build_username_available(&self, name: &str) -> HttpRequest {
        get(
            format!(
                "{}/available/minecraft/{}",
                self.config.endpoints.account,
                segment(name)
            ),
            APPLICATION_JSON,
        )
    }

    pub fn build_get_uuid(&self, name: &str) -> HttpRequest {
        get(
            format!(
                "{}{}",
                self.config.endpoints.api,
                self.config.variant.name_lookup_path(&segment(name))
            ),
            APPLICATION_JSON,
        )
    }

    /// Bulk name lookup. Mojang accepts between 1 and 10 names and answers
    /// 400 otherwise; the limit is not enforced here.
    pub fn build_get_uuids<S: AsRef<str>>(&self, names: &[S]) -> Result<HttpRequest, ApiError> {
        let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
        let body = serde_json::to_string(&names).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/profiles/minecraft", self.config.endpoints.api),
            headers: vec![
                ("accept".to_string(), APPLICATION_JSON.to_string()),
                ("content-type".to_string(), APPLICATION_JSON.to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn build_get_name(&self, uuid: &str) -> HttpRequest {
        get(
            format!("{}/user/profile/{}", self.config.endpoints.api, segment(uuid)),
            APPLICATION_JSON,
        )
    }

    /// Skin lookup. Always asks for the signed payload.
    pub fn build_get_skin(&self, uuid: &str) -> HttpRequest {
        get(
            format!(
                "{}/session/minecraft/profile/{}?unsigned=false",
                self.config.endpoints.session,
                segment(uuid)
            ),
            APPLICATION_JSON,
        )
    }

    pub fn build_get_history_name(&self, uuid: &str) -> HttpRequest {
        get(
            format!("{}/user/profile/{}/names", self.config.endpoints.api, segment(uuid)),
            APPLICATION_JSON,
        )
    }

    /// One SHA-1 hash per line. Blank lines are dropped.
    pub fn parse_blocked_servers(&self, response: HttpResponse) -> Result<Vec<String>, ApiError> {
        check_status(&response, 200)?;
        Ok(response
            .body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// `true` if the name is free to register.
    pub fn parse_username_available(&self, response: HttpResponse) -> Result<bool, ApiError> {
        debug!(status = response.status, variant = ?self.config.variant, "username availability");
        self.config
            .variant
            .availability(response.status)
            .ok_or_else(|| request_error(response))
    }

    pub fn parse_get_uuid(&self, response: HttpResponse) -> Result<Option<ProfileId>, ApiError> {
        self.lookup(response)
    }

    /// Profiles for the names that resolved. Unknown names are left out and
    /// the order is the server's.
    pub fn parse_get_uuids(&self, response: HttpResponse) -> Result<Vec<ProfileId>, ApiError> {
        check_status(&response, 200)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        parse_json(&response.body)
    }

    pub fn parse_get_name(&self, response: HttpResponse) -> Result<Option<ProfileId>, ApiError> {
        self.lookup(response)
    }

    pub fn parse_get_skin(&self, response: HttpResponse) -> Result<Option<ProfileSkin>, ApiError> {
        self.lookup(response)
    }

    /// Name history, oldest first.
    pub fn parse_get_history_name(
        &self,
        response: HttpResponse,
    ) -> Result<Option<Vec<ProfileName>>, ApiError> {
        self.lookup(response)
    }

    fn lookup<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Option<T>, ApiError> {
        if self.config.variant.is_absent(response.status) {
            debug!(status = response.status, "profile absent");
            return Ok(None);
        }
        check_status(&response, 200)?;
        parse_json(&response.body).map(Some)
    }
}

fn get(url: String, accept: &str) -> HttpRequest {
    debug!(%url, "GET");
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: vec![("accept".to_string(), accept.to_string())],
        body: None,
    }
}

/// Percent-encode a caller-supplied path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map an unexpected status to `ApiError::Request`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(request_error(response.clone()))
}

fn request_error(response: HttpResponse) -> ApiError {
    warn!(status = response.status, body = %response.body, "unexpected response status");
    ApiError::Request {
        status: response.status,
        body: response.body,
    }
}
