//! In-memory stand-in for the Mojang API hosts.
//!
//! Serves the account, api and session server endpoints from one router so a
//! client pointed at a single base URL can exercise every operation. Status
//! codes follow the live service: unknown names on the current lookup answer
//! 404, every other unknown profile answers 204, malformed ids answer 400.

pub mod fixtures;

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD as b64, Engine};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::debug;
use uuid::Uuid;

use crate::fixtures::{Account, BLOCKED_SERVERS, TEXTURES_BASE_URL, TEXTURES_SIGNATURE, TEXTURES_TIMESTAMP};

/// Largest batch accepted by the bulk lookup.
pub const MAX_BULK_NAMES: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileId {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed_to_at: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileSkin {
    pub id: String,
    pub name: String,
    pub properties: Vec<Property>,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub legacy: bool,
}

#[derive(Deserialize)]
pub struct SkinQuery {
    #[serde(default)]
    pub unsigned: Option<bool>,
}

pub type Db = Arc<Vec<Account>>;

pub fn app() -> Router {
    let db: Db = Arc::new(fixtures::accounts());
    Router::new()
        .route("/blockedservers", get(blocked_servers))
        .route("/available/minecraft/{name}", get(username_available))
        .route("/users/profiles/minecraft/{name}", get(uuid_by_name))
        .route("/user/profile/agent/minecraft/name/{name}", get(uuid_by_name_legacy))
        .route("/profiles/minecraft", post(uuids_by_names))
        .route("/user/profile/{uuid}", get(name_by_uuid))
        .route("/user/profile/{uuid}/names", get(name_history))
        .route("/session/minecraft/profile/{uuid}", get(skin))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn find_by_name<'a>(db: &'a Db, name: &str) -> Option<&'a Account> {
    db.iter().find(|a| a.name().eq_ignore_ascii_case(name))
}

fn find_by_id<'a>(db: &'a Db, id: &Uuid) -> Option<&'a Account> {
    db.iter().find(|a| a.id == *id)
}

/// Mojang names: 1 to 25 ASCII letters, digits and underscores.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= 25 && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn profile_id(account: &Account) -> ProfileId {
    ProfileId {
        id: account.id.simple().to_string(),
        name: account.name().to_string(),
    }
}

fn error(status: StatusCode, error: &str, message: String) -> Response {
    (status, Json(json!({ "error": error, "errorMessage": message }))).into_response()
}

fn parse_uuid(raw: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(raw).map_err(|_| {
        error(
            StatusCode::BAD_REQUEST,
            "IllegalArgumentException",
            format!("Invalid UUID string: {raw}"),
        )
    })
}

/// Base64 JSON textures payload, shaped like the session server's.
pub fn textures_value(account: &Account) -> String {
    let mut skin = json!({ "url": format!("{TEXTURES_BASE_URL}{}", account.skin_hash) });
    if account.slim {
        skin["metadata"] = json!({ "model": "slim" });
    }
    let mut textures = json!({ "SKIN": skin });
    if let Some(cape) = account.cape_hash {
        textures["CAPE"] = json!({ "url": format!("{TEXTURES_BASE_URL}{cape}") });
    }
    let payload = json!({
        "timestamp": TEXTURES_TIMESTAMP,
        "profileId": account.id.simple().to_string(),
        "profileName": account.name(),
        "signatureRequired": true,
        "textures": textures,
    });
    b64.encode(payload.to_string())
}

async fn blocked_servers() -> String {
    debug!("blocked servers");
    let mut body = BLOCKED_SERVERS.join("\n");
    body.push('\n');
    body
}

async fn username_available(State(db): State<Db>, Path(name): Path<String>) -> Response {
    if !is_valid_name(&name) {
        return error(
            StatusCode::BAD_REQUEST,
            "CONSTRAINT_VIOLATION",
            format!("Invalid profile name: {name}"),
        );
    }
    match find_by_name(&db, &name) {
        Some(_) => StatusCode::OK.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn uuid_by_name(State(db): State<Db>, Path(name): Path<String>) -> Response {
    debug!(%name, "name lookup");
    match find_by_name(&db, &name) {
        Some(account) => Json(profile_id(account)).into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Couldn't find any profile with name {name}"),
        ),
    }
}

async fn uuid_by_name_legacy(State(db): State<Db>, Path(name): Path<String>) -> Response {
    match find_by_name(&db, &name) {
        Some(account) => Json(profile_id(account)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn uuids_by_names(State(db): State<Db>, Json(names): Json<Vec<String>>) -> Response {
    debug!(count = names.len(), "bulk name lookup");
    if names.is_empty() {
        return error(
            StatusCode::BAD_REQUEST,
            "IllegalArgumentException",
            "profileName can not be null or empty.".to_string(),
        );
    }
    if names.len() > MAX_BULK_NAMES {
        return error(
            StatusCode::BAD_REQUEST,
            "IllegalArgumentException",
            format!("Not more that {MAX_BULK_NAMES} profile name per call is allowed."),
        );
    }
    if let Some(bad) = names.iter().find(|n| !is_valid_name(n)) {
        return error(
            StatusCode::BAD_REQUEST,
            "CONSTRAINT_VIOLATION",
            format!("Invalid profile name: {bad}"),
        );
    }
    let found: Vec<ProfileId> = db
        .iter()
        .filter(|a| names.iter().any(|n| a.name().eq_ignore_ascii_case(n)))
        .map(profile_id)
        .collect();
    Json(found).into_response()
}

async fn name_by_uuid(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let id = match parse_uuid(&raw) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match find_by_id(&db, &id) {
        Some(account) => Json(profile_id(account)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn name_history(State(db): State<Db>, Path(raw): Path<String>) -> Response {
    let id = match parse_uuid(&raw) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match find_by_id(&db, &id) {
        Some(account) => {
            let history: Vec<ProfileName> = account
                .names
                .iter()
                .map(|(name, at)| ProfileName {
                    name: name.to_string(),
                    changed_to_at: *at,
                })
                .collect();
            Json(history).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn skin(
    State(db): State<Db>,
    Path(raw): Path<String>,
    Query(query): Query<SkinQuery>,
) -> Response {
    let id = match parse_uuid(&raw) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Some(account) = find_by_id(&db, &id) else {
        return StatusCode::NO_CONTENT.into_response();
    };
    let signed = query.unsigned == Some(false);
    Json(ProfileSkin {
        id: account.id.simple().to_string(),
        name: account.name().to_string(),
        properties: vec![Property {
            name: "textures".to_string(),
            value: textures_value(account),
            signature: signed.then(|| TEXTURES_SIGNATURE.to_string()),
        }],
        legacy: account.legacy,
    })
    .into_response()
}
