//! The three fixed post patterns cycled through when producing variations.

use serde::Serialize;

/// A post structure. Variation `i` always uses `Pattern::for_variation(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    /// Emoji + title, brief, "📍 For:" line, `#contentflow #created`.
    Announcement,
    /// "Excited to share:" opener, brief, audience or "For everyone", `#marketing #socialmedia`.
    ExcitedShare,
    /// Title framed by tone, brief, "Tailored for" line, engagement prompt, `#socialmedia #engagement`.
    ToneFramed,
}

impl Pattern {
    pub const CYCLE: [Pattern; 3] = [
        Pattern::Announcement,
        Pattern::ExcitedShare,
        Pattern::ToneFramed,
    ];

    /// Pattern used for the 0-based variation index: A, B, C, A, B, C, …
    pub fn for_variation(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Pattern::Announcement => 0,
            Pattern::ExcitedShare => 1,
            Pattern::ToneFramed => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Announcement => "announcement",
            Pattern::ExcitedShare => "excited-share",
            Pattern::ToneFramed => "tone-framed",
        }
    }

    /// Style hint handed to a model backend in place of the literal template.
    pub fn style_hint(self) -> &'static str {
        match self {
            Pattern::Announcement => {
                "An announcement: open with the platform emoji and the title, then the brief, \
                 then who it is for, and close with two hashtags."
            }
            Pattern::ExcitedShare => {
                "An excited share: open with an enthusiastic line introducing the title, \
                 then the brief, then who it is perfect for, and close with two hashtags."
            }
            Pattern::ToneFramed => {
                "A tone-led post: frame the title around the requested tone, then the brief, \
                 then who it is tailored for, end with a question inviting replies, \
                 and close with two hashtags."
            }
        }
    }
}

/// Inputs every pattern is a function of.
#[derive(Debug, Clone, Copy)]
pub struct TemplateInputs<'a> {
    pub title: &'a str,
    pub brief: &'a str,
    pub audience: Option<&'a str>,
    pub tone: &'a str,
    pub emoji: &'a str,
}

/// Renders one pattern. An absent audience leaves its line empty, except for
/// `ExcitedShare` which falls back to "For everyone".
pub fn render(pattern: Pattern, inputs: &TemplateInputs<'_>) -> String {
    let TemplateInputs {
        title,
        brief,
        audience,
        tone,
        emoji,
    } = *inputs;

    match pattern {
        Pattern::Announcement => {
            let audience_line = audience
                .map(|a| format!("📍 For: {a}"))
                .unwrap_or_default();
            format!("{emoji} {title}\n\n{brief}\n\n{audience_line}\n\n#contentflow #created")
        }
        Pattern::ExcitedShare => {
            let audience_line = audience
                .map(|a| format!("Perfect for {a}"))
                .unwrap_or_else(|| "For everyone".to_string());
            format!(
                "Excited to share: {title} {emoji}\n\n{brief}\n\n{audience_line}\n\n#marketing #socialmedia"
            )
        }
        Pattern::ToneFramed => {
            let audience_line = audience
                .map(|a| format!("Tailored for {a}"))
                .unwrap_or_default();
            format!(
                "{title} - A {tone} approach\n\n{brief}\n\n{audience_line}\n\n\
                 What do you think? Let us know! {emoji}\n\n#socialmedia #engagement"
            )
        }
    }
}
