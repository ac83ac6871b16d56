use serde::{Deserialize, Serialize};

/// Company name used when a listing carries no `company.display_name`.
pub const UNKNOWN_COMPANY: &str = "N/A";

/// Adzuna search response body. A missing `results` field reads as empty.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<JobListing>,
}

/// One entry of an Adzuna `results` array. Only the fields we render are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct JobListing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Company {
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Identity of a job for deduplication: (title, company display name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub title: String,
    pub company_name: String,
}

impl JobListing {
    pub fn key(&self) -> JobKey {
        JobKey {
            title: self.title.clone().unwrap_or_default(),
            company_name: self
                .company
                .as_ref()
                .and_then(|c| c.display_name.clone())
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        }
    }
}

/// A deduplicated job as returned to callers of `/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub title: String,
    pub company_name: String,
    pub url: Option<String>,
    /// The full skill list of the request, not the skill that found this job.
    pub tags: Vec<String>,
}
