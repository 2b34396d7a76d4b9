//! Platform profiles: per-network character limits and the emoji used in templates.
//!
//! The table is static and read-only; lookups need no locking.

use serde::Serialize;

/// Character limit applied to any platform key not in the table.
pub const DEFAULT_MAX_CHARS: usize = 280;

/// Emoji applied to any platform key not in the table.
pub const DEFAULT_EMOJI: &str = "✨";

/// A known target network.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub max_chars: usize,
    pub emoji: &'static str,
}

pub const PLATFORM_PROFILES: &[PlatformProfile] = &[
    PlatformProfile {
        key: "instagram",
        name: "Instagram",
        max_chars: 2200,
        emoji: "📸",
    },
    PlatformProfile {
        key: "twitter",
        name: "Twitter",
        max_chars: 280,
        emoji: "𝕏",
    },
    PlatformProfile {
        key: "linkedin",
        name: "LinkedIn",
        max_chars: 3000,
        emoji: "💼",
    },
    PlatformProfile {
        key: "facebook",
        name: "Facebook",
        max_chars: 63206,
        emoji: "👥",
    },
];

/// Limit and emoji resolved for a requested platform key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformLimits {
    pub key: String,
    pub max_chars: usize,
    pub emoji: &'static str,
    /// False when the key was not in the table and defaults were applied.
    pub known: bool,
}

/// Exact, case-sensitive lookup of a platform key.
pub fn find_platform(key: &str) -> Option<&'static PlatformProfile> {
    PLATFORM_PROFILES.iter().find(|p| p.key == key)
}

/// Resolves limit and emoji for `key`, falling back to the defaults for unknown networks.
pub fn resolve_platform(key: &str) -> PlatformLimits {
    match find_platform(key) {
        Some(profile) => PlatformLimits {
            key: key.to_string(),
            max_chars: profile.max_chars,
            emoji: profile.emoji,
            known: true,
        },
        None => PlatformLimits {
            key: key.to_string(),
            max_chars: DEFAULT_MAX_CHARS,
            emoji: DEFAULT_EMOJI,
            known: false,
        },
    }
}
