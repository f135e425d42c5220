use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a collection resource.
///
/// Identifiers are never minted on the client: drafts carry no id field and
/// the create response is the sole source of the assigned value.
pub type ResourceId = i64;

/// The operator's profile. At most one instance exists; the API answers 404
/// while it has not been created yet, so existence itself is the key fact and
/// the type carries no identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInformation {
    pub name: String,
    pub surname: String,
    pub job: String,
    pub summary: String,
    pub biography: String,
    /// Ordered, possibly duplicated, as entered by the operator. No
    /// normalization beyond per-entry trimming at the form boundary.
    pub skills: Vec<String>,
    pub social_media_links: Vec<SocialMediaLink>,
    pub personal_image_url: String,
}

/// A social media entry on the profile. `logo` is either one of the known
/// platform names (see [`KNOWN_PLATFORMS`]) or a free-form custom label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub logo: String,
    pub url: String,
}

impl SocialMediaLink {
    #[must_use]
    pub fn new(logo: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            logo: logo.into(),
            url: url.into(),
        }
    }
}

/// The fixed platform vocabulary. Edit forms synthesize one row per entry
/// even when the stored profile has none, so the operator always sees the
/// full set alongside any custom links.
pub const KNOWN_PLATFORMS: [&str; 7] = [
    "Email",
    "Github",
    "Instagram",
    "YouTube",
    "LinkedIn",
    "Twitter",
    "Facebook",
];

/// Whether `logo` names one of the fixed known platforms (exact match).
#[must_use]
pub fn is_known_platform(logo: &str) -> bool {
    KNOWN_PLATFORMS.contains(&logo)
}

/// A work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ResourceId,
    pub company_name: String,
    pub company_logo: String,
    pub role: String,
    pub start_date: NaiveDate,
    /// `None` denotes an ongoing position and renders as "Present".
    pub end_date: Option<NaiveDate>,
    pub detail: String,
    pub used_skills: Vec<String>,
}

impl Experience {
    /// Human-readable date range, rendering an open end as "Present".
    #[must_use]
    pub fn date_range(&self) -> String {
        match self.end_date {
            Some(end) => format!("{} - {}", self.start_date, end),
            None => format!("{} - Present", self.start_date),
        }
    }
}

/// An [`Experience`] minus its server-assigned id, as sent on create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company_name: String,
    pub company_logo: String,
    pub role: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub detail: String,
    pub used_skills: Vec<String>,
}

impl From<(ResourceId, ExperienceDraft)> for Experience {
    /// Attach a server-assigned id to a submitted draft. A draft without a
    /// start date falls back to the epoch date; the form layer never commits
    /// one (the field is required there).
    fn from((id, draft): (ResourceId, ExperienceDraft)) -> Self {
        Self {
            id,
            company_name: draft.company_name,
            company_logo: draft.company_logo,
            role: draft.role,
            start_date: draft.start_date.unwrap_or_default(),
            end_date: draft.end_date,
            detail: draft.detail,
            used_skills: draft.used_skills,
        }
    }
}

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ResourceId,
    pub name: String,
    pub detail: String,
    pub skills: Vec<String>,
    pub logo_url: String,
    pub url: String,
}

/// A [`Project`] minus its server-assigned id, as sent on create/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    pub detail: String,
    pub skills: Vec<String>,
    pub logo_url: String,
    pub url: String,
}

impl From<(ResourceId, ProjectDraft)> for Project {
    fn from((id, draft): (ResourceId, ProjectDraft)) -> Self {
        Self {
            id,
            name: draft.name,
            detail: draft.detail,
            skills: draft.skills,
            logo_url: draft.logo_url,
            url: draft.url,
        }
    }
}
