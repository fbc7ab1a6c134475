//! Shared vocabulary types: departments, services, computed outputs.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::lenient;

/// The department an employee reports under.
///
/// Serialized as its display label (`"Blended (HR + Sales)"`, `"SEO"`, ...).
/// Labels outside the fixed set are kept verbatim as `Unrecognized`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Department {
    Web,
    SocialMedia,
    Ads,
    Seo,
    Hr,
    Accounts,
    Sales,
    Blended,
    OperationsHead,
    WebHead,
    Unrecognized(String),
}

impl Department {
    /// Every recognised department, in display order.
    pub const ALL: [Department; 10] = [
        Department::Web,
        Department::SocialMedia,
        Department::Ads,
        Department::Seo,
        Department::Hr,
        Department::Accounts,
        Department::Sales,
        Department::Blended,
        Department::OperationsHead,
        Department::WebHead,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Department::Web => "Web",
            Department::SocialMedia => "Social Media",
            Department::Ads => "Ads",
            Department::Seo => "SEO",
            Department::Hr => "HR",
            Department::Accounts => "Accounts",
            Department::Sales => "Sales",
            Department::Blended => "Blended (HR + Sales)",
            Department::OperationsHead => "Operations Head",
            Department::WebHead => "Web Head",
            Department::Unrecognized(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Department::Unrecognized(_))
    }
}

impl From<&str> for Department {
    fn from(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "web" => Department::Web,
            "social media" => Department::SocialMedia,
            "ads" => Department::Ads,
            "seo" => Department::Seo,
            "hr" => Department::Hr,
            "accounts" => Department::Accounts,
            "sales" => Department::Sales,
            "blended (hr + sales)" | "blended" => Department::Blended,
            "operations head" => Department::OperationsHead,
            "web head" => Department::WebHead,
            _ => Department::Unrecognized(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Department {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Department {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Department::from(label.as_str()))
    }
}

/// A contracted service family, keyed by the service name used in
/// `service_scopes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    SocialMedia,
    Seo,
    GbpSeo,
    GoogleAds,
    MetaAds,
    WebsiteMaintenance,
    Ai,
    Other(String),
}

impl From<&str> for ServiceKind {
    fn from(name: &str) -> Self {
        match name.trim() {
            "Social Media" => ServiceKind::SocialMedia,
            "SEO" => ServiceKind::Seo,
            "GBP SEO" => ServiceKind::GbpSeo,
            "Google Ads" => ServiceKind::GoogleAds,
            "Meta Ads" => ServiceKind::MetaAds,
            "Website Maintenance" => ServiceKind::WebsiteMaintenance,
            "AI" => ServiceKind::Ai,
            other => ServiceKind::Other(other.to_string()),
        }
    }
}

/// Client status reported by an Operations Head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientStatus {
    Active,
    Upgraded,
    Left,
    Reduced,
    Other(String),
}

impl ClientStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Upgraded => "Upgraded",
            ClientStatus::Left => "Left",
            ClientStatus::Reduced => "Reduced",
            ClientStatus::Other(label) => label,
        }
    }

    /// Upgraded, Left and Reduced all need a written reason.
    pub fn needs_reason(&self) -> bool {
        matches!(
            self,
            ClientStatus::Upgraded | ClientStatus::Left | ClientStatus::Reduced
        )
    }
}

impl From<&str> for ClientStatus {
    fn from(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "active" => ClientStatus::Active,
            "upgraded" => ClientStatus::Upgraded,
            "left" => ClientStatus::Left,
            "reduced" => ClientStatus::Reduced,
            _ => ClientStatus::Other(trimmed.to_string()),
        }
    }
}

impl Serialize for ClientStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ClientStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ClientStatus::from(label.as_str()))
    }
}

/// Computed sub-scores and composite, each in `[0, 10]` with one decimal.
///
/// Always recomputed by the engine, never edited by hand.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    #[serde(default, deserialize_with = "lenient::number")]
    pub kpi_score: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub learning_score: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub relationship_score: f64,

    #[serde(default, deserialize_with = "lenient::number")]
    pub overall: f64,
}

/// Warning flags derived from a submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Flags {
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub missing_learning_hours: bool,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub has_escalations: bool,

    #[serde(default, deserialize_with = "lenient::boolean")]
    pub missing_reports: bool,
}

/// Outcome of the validator: pass/fail plus every violation found.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }
}
