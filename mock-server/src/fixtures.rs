//! Seeded accounts served by the mock.

use uuid::Uuid;

/// Fixed generation time of every textures payload, in milliseconds.
pub const TEXTURES_TIMESTAMP: i64 = 1658081534123;

pub const TEXTURES_BASE_URL: &str = "http://textures.minecraft.net/texture/";

/// Placeholder signature handed out when a signed payload is requested.
pub const TEXTURES_SIGNATURE: &str = "bW9jay1zZXJ2ZXItc2lnbmF0dXJl";

pub const BLOCKED_SERVERS: [&str; 3] = [
    "6f2520f8bd70a718c568ab5274c56bdbbfc14ef4",
    "7ea72de5f8e70a2ac45f1aa17d43f0ca3cddeedd",
    "c005ad34245a8f2ac1f9fa4bdf9b1ee4cf2a3e5a",
];

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    /// Names in chronological order with the time each was adopted. The first
    /// entry has no timestamp; the last one is the current name.
    pub names: Vec<(&'static str, Option<i64>)>,
    pub skin_hash: &'static str,
    pub slim: bool,
    pub cape_hash: Option<&'static str>,
    pub legacy: bool,
}

impl Account {
    pub fn name(&self) -> &'static str {
        self.names.last().map(|(name, _)| *name).unwrap_or_default()
    }
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: Uuid::from_u128(0x069a79f4_44e9_4726_a5be_fca90e38aaf5),
            names: vec![("Notch", None)],
            skin_hash: "292009a4925b58f02c77dadc3ecef07ea4c7472f64e0fdc32ce5522489362680",
            slim: false,
            cape_hash: Some("2340c0e03dd24a11b15a8b33c2a7e9e32abb2051b2481d0ba7defd635ca7a933"),
            legacy: false,
        },
        Account {
            id: Uuid::from_u128(0x853c80ef_3c37_49fd_aa49_938b674adae6),
            names: vec![("jeb_", None)],
            skin_hash: "7fd9ba42a7c81eeea22f1524271ae85a8e045ce0af5a6ae16c6406ae917e68b5",
            slim: false,
            cape_hash: None,
            legacy: false,
        },
        Account {
            id: Uuid::from_u128(0xcdb5aee8_0f90_4fdd_a63b_a16d38cd6b3b),
            names: vec![("lukethehacker23", None)],
            skin_hash: "1a4af718455d4aab528e7a61f86fa25e6a369d1768dcb13f7df319a713eb810b",
            slim: false,
            cape_hash: None,
            legacy: false,
        },
        Account {
            id: Uuid::from_u128(0xf1bfcbdd_c68b_49bf_aac9_fb9d8ce5293d),
            names: vec![("123lmfao4", None)],
            skin_hash: "e35f3a8df969b56b36f9aa60a736a2f9061de4ccf0fe9657d6c9bc02d77bfd7e",
            slim: true,
            cape_hash: None,
            legacy: false,
        },
        Account {
            id: Uuid::from_u128(0x9b6d2c1e_7a41_4f3e_8c55_0d1e2f3a4b5c),
            names: vec![("TIC59000", None), ("Distractic", Some(1423059429000))],
            skin_hash: "3b60a1f6d562f52aaebbf1434f1de147933a3affe0e764fa49ea057536623cd3",
            slim: false,
            cape_hash: None,
            legacy: true,
        },
    ]
}
