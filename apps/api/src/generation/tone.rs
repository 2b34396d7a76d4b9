//! Tone calibration: maps a brand voice key to the tone descriptor used in phrasing.

use serde::Serialize;

/// Descriptor used when the brand voice is missing or not recognised.
pub const DEFAULT_TONE: &str = "engaging";

/// The brand voices a brand can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandVoice {
    Professional,
    Friendly,
    Bold,
    Creative,
    Educational,
}

impl BrandVoice {
    pub const ALL: [BrandVoice; 5] = [
        BrandVoice::Professional,
        BrandVoice::Friendly,
        BrandVoice::Bold,
        BrandVoice::Creative,
        BrandVoice::Educational,
    ];

    /// Exact, case-sensitive match on the stored key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            BrandVoice::Professional => "professional",
            BrandVoice::Friendly => "friendly",
            BrandVoice::Bold => "bold",
            BrandVoice::Creative => "creative",
            BrandVoice::Educational => "educational",
        }
    }

    /// Label shown in brand settings.
    pub fn label(self) -> &'static str {
        match self {
            BrandVoice::Professional => "Professional",
            BrandVoice::Friendly => "Friendly & Warm",
            BrandVoice::Bold => "Bold & Confident",
            BrandVoice::Creative => "Creative & Playful",
            BrandVoice::Educational => "Educational & Informative",
        }
    }

    pub fn descriptor(self) -> &'static str {
        match self {
            BrandVoice::Professional => "professional and business-focused",
            BrandVoice::Friendly => "warm and approachable",
            BrandVoice::Bold => "confident and impactful",
            BrandVoice::Creative => "creative and engaging",
            BrandVoice::Educational => "informative and helpful",
        }
    }
}

/// Public shape of a brand voice for `GET /api/v1/brand-voices`.
#[derive(Debug, Clone, Serialize)]
pub struct ToneProfile {
    pub key: &'static str,
    pub label: &'static str,
    pub tone: &'static str,
}

impl From<BrandVoice> for ToneProfile {
    fn from(voice: BrandVoice) -> Self {
        ToneProfile {
            key: voice.key(),
            label: voice.label(),
            tone: voice.descriptor(),
        }
    }
}

/// Returns the tone descriptor for a brand voice key, or `"engaging"`.
pub fn resolve_tone(brand_voice: Option<&str>) -> &'static str {
    brand_voice
        .and_then(BrandVoice::from_key)
        .map(BrandVoice::descriptor)
        .unwrap_or(DEFAULT_TONE)
}

pub fn tone_profiles() -> Vec<ToneProfile> {
    BrandVoice::ALL.into_iter().map(ToneProfile::from).collect()
}
