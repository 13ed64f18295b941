//! Response models of the Mojang API.
//!
//! # Design
//! Every identifier field goes through `string_uuid`, so ids observed by
//! callers are dashed no matter what the server sent. Unknown JSON fields are
//! ignored, which keeps decoding working when Mojang adds fields.
//!
//! The textures property of a skin record is itself Base64-encoded JSON. It is
//! not decoded during deserialization; `ProfileSkinDecoded::from_encoded` does
//! that on demand and can be used on its own.

use base64::engine::general_purpose::STANDARD as b64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, DecodeError};

/// Name of the skin record property holding the textures payload.
pub const TEXTURES_PROPERTY: &str = "textures";

/// A player name and the id it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileId {
    pub name: String,
    #[serde(with = "crate::string_uuid")]
    pub id: String,
}

impl ProfileId {
    /// Build a profile id, formatting `id` into dashed form.
    pub fn new(name: impl Into<String>, id: &str) -> Result<Self, ApiError> {
        Ok(Self {
            name: name.into(),
            id: crate::identifier::format_uuid(id)?,
        })
    }
}

/// One entry of a name history.
///
/// `changed_to_at` is the Unix time in milliseconds at which the account
/// switched to `name`. It is `None` for the original name of the account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_to_at: Option<i64>,
}

/// Profile record returned by the session server, skin and cape included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSkin {
    #[serde(with = "crate::string_uuid")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    /// `true` for accounts never migrated to a Mojang account.
    #[serde(default)]
    pub legacy: bool,
}

/// A signed key/value attached to a profile record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl ProfileSkin {
    /// The property named `textures`.
    pub fn textures_property(&self) -> Result<&Property, ApiError> {
        self.properties
            .iter()
            .find(|p| p.name == TEXTURES_PROPERTY)
            .ok_or_else(|| ApiError::PropertyNotFound(TEXTURES_PROPERTY.to_string()))
    }

    /// Base64 value of the textures property.
    pub fn skin_value(&self) -> Result<&str, ApiError> {
        self.textures_property().map(|p| p.value.as_str())
    }

    /// Signature of the textures property, present when requested signed.
    pub fn signature(&self) -> Result<Option<&str>, ApiError> {
        self.textures_property().map(|p| p.signature.as_deref())
    }

    /// Decode the textures property into its JSON structure.
    pub fn decode_textures(&self) -> Result<ProfileSkinDecoded, ApiError> {
        ProfileSkinDecoded::from_encoded(self.skin_value()?)
    }
}

/// Content of the textures property once decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSkinDecoded {
    /// Unix time in milliseconds at which the payload was generated.
    pub timestamp: i64,
    #[serde(with = "crate::string_uuid")]
    pub profile_id: String,
    pub profile_name: String,
    pub textures: Textures,
}

impl ProfileSkinDecoded {
    /// Decode a Base64 textures value.
    pub fn from_encoded(value: &str) -> Result<Self, ApiError> {
        let bytes = b64.decode(value.trim()).map_err(DecodeError::from)?;
        let decoded = serde_json::from_slice(&bytes).map_err(DecodeError::from)?;
        Ok(decoded)
    }

    /// Encode into a Base64 textures value, the inverse of `from_encoded`.
    pub fn to_encoded(&self) -> Result<String, ApiError> {
        let json = serde_json::to_vec(self).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(b64.encode(json))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Textures {
    #[serde(rename = "SKIN")]
    pub skin: SkinTexture,
    #[serde(rename = "CAPE", default, skip_serializing_if = "Option::is_none")]
    pub cape: Option<CapeTexture>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkinTexture {
    pub url: String,
    #[serde(default)]
    pub metadata: SkinMetadata,
}

/// Skin model: `classic` (Steve) unless the payload says `slim` (Alex).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkinMetadata {
    #[serde(default = "SkinMetadata::classic_model")]
    pub model: String,
}

impl SkinMetadata {
    pub const CLASSIC: &'static str = "classic";
    pub const SLIM: &'static str = "slim";

    fn classic_model() -> String {
        Self::CLASSIC.to_string()
    }

    pub fn is_slim(&self) -> bool {
        self.model == Self::SLIM
    }
}

impl Default for SkinMetadata {
    fn default() -> Self {
        Self {
            model: Self::classic_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapeTexture {
    pub url: String,
}
