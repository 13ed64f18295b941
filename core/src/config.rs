//! Client configuration: where the three Mojang hosts live and which
//! generation of the API contract to speak.
//!
//! # Design
//! Mojang changed status-code meanings between API generations without
//! versioning the endpoints. Rather than guessing which one is live, the
//! client is told explicitly through `ApiVariant`; `Current` is the default.

pub const API_URL: &str = "https://api.mojang.com";
pub const SESSION_URL: &str = "https://sessionserver.mojang.com";
pub const ACCOUNT_URL: &str = "https://account.mojang.com";

/// Base URLs of the hosts the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Profile lookups, bulk lookups and name history.
    pub api: String,
    /// Skins and the blocked server list.
    pub session: String,
    /// Username availability.
    pub account: String,
}

impl Endpoints {
    pub fn new(api: &str, session: &str, account: &str) -> Self {
        Self {
            api: trim(api),
            session: trim(session),
            account: trim(account),
        }
    }

    /// Route every host to the same base URL, as a mock server would.
    pub fn single(base_url: &str) -> Self {
        Self::new(base_url, base_url, base_url)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(API_URL, SESSION_URL, ACCOUNT_URL)
    }
}

fn trim(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Generation of the Mojang API contract.
///
/// | | `Current` | `Legacy` |
/// |---|---|---|
/// | name lookup | `/users/profiles/minecraft/{name}` | `/user/profile/agent/minecraft/name/{name}` |
/// | absent profile | 204 or 404 | 204 |
/// | username available | 204 or 404 | 204 |
/// | username taken | 200 | 200 |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiVariant {
    #[default]
    Current,
    Legacy,
}

impl ApiVariant {
    /// Statuses meaning "this profile does not exist".
    pub fn is_absent(self, status: u16) -> bool {
        match self {
            ApiVariant::Current => matches!(status, 204 | 404),
            ApiVariant::Legacy => status == 204,
        }
    }

    /// Path of the single name to id lookup, relative to the API host.
    pub fn name_lookup_path(self, name: &str) -> String {
        match self {
            ApiVariant::Current => format!("/users/profiles/minecraft/{name}"),
            ApiVariant::Legacy => format!("/user/profile/agent/minecraft/name/{name}"),
        }
    }

    /// Interpret the availability endpoint status. `None` if the status is
    /// not part of the contract.
    pub fn availability(self, status: u16) -> Option<bool> {
        match status {
            200 => Some(false),
            s if self.is_absent(s) => Some(true),
            _ => None,
        }
    }
}

/// Everything a `MojangClient` needs besides the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoints: Endpoints,
    pub variant: ApiVariant,
}
