//! Client for the public Mojang player identity API.
//!
//! # Overview
//! Resolves player names to ids and back, fetches skins and name history,
//! lists blocked servers and checks username availability. Every operation
//! is one HTTP request.
//!
//! # Design
//! - `MojangClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `MojangApi` pairs it with an injected `Transport`; `UreqTransport` is
//!   the blocking default behind the `ureq` feature.
//! - Lookups return `Result<Option<T>, ApiError>`: `Ok(None)` means the
//!   profile does not exist, `Err` means the request went wrong.
//! - Identifiers are normalized to the dashed form through `string_uuid`
//!   wherever they are deserialized.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod identifier;
pub mod string_uuid;
pub mod types;

pub use api::MojangApi;
pub use client::MojangClient;
pub use config::{ApiVariant, ClientConfig, Endpoints};
pub use error::{ApiError, DecodeError};
#[cfg(feature = "ureq")]
pub use http::UreqTransport;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use identifier::format_uuid;
pub use types::{
    CapeTexture, ProfileId, ProfileName, ProfileSkin, ProfileSkinDecoded, Property, SkinMetadata,
    SkinTexture, Textures,
};
