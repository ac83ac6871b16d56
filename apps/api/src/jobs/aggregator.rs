//! Job Aggregator — one search per skill, deduplicated by (title, company).
//!
//! Per-skill failures are captured as `QueryOutcome::Failed` and dropped when
//! outcomes are folded; callers only ever see the merged job list.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::extraction::SKILL_DELIMITER;
use crate::jobs::models::{JobKey, JobListing, JobRecord};
use crate::jobs::search::{JobSearch, SearchError};

/// Result of querying the backend for a single skill term.
#[derive(Debug)]
pub enum QueryOutcome {
    Found(Vec<JobListing>),
    Failed(SearchError),
}

impl From<Result<Vec<JobListing>, SearchError>> for QueryOutcome {
    fn from(result: Result<Vec<JobListing>, SearchError>) -> Self {
        match result {
            Ok(listings) => QueryOutcome::Found(listings),
            Err(e) => QueryOutcome::Failed(e),
        }
    }
}

#[derive(Clone)]
pub struct JobAggregator {
    search: Arc<dyn JobSearch>,
}

impl JobAggregator {
    pub fn new(search: Arc<dyn JobSearch>) -> Self {
        Self { search }
    }

    /// Searches once per skill in `skills` (a `", "`-joined summary) and
    /// returns the deduplicated jobs, each tagged with the whole skill list.
    ///
    /// Queries run one after another. Failed queries contribute nothing.
    pub async fn fetch_jobs(&self, skills: &str) -> Vec<JobRecord> {
        let terms = split_skills(skills);

        let mut outcomes = Vec::with_capacity(terms.len());
        for term in &terms {
            let outcome = QueryOutcome::from(self.search.search(term).await);
            if let QueryOutcome::Failed(e) = &outcome {
                warn!("Job search for {:?} failed, skipping: {e}", term);
            }
            outcomes.push(outcome);
        }

        let tags: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
        let jobs = merge_outcomes(outcomes, &tags);
        info!("Aggregated {} unique job(s) for {} skill term(s)", jobs.len(), terms.len());
        jobs
    }
}

/// Splits on the exact summary delimiter. `""` yields `[""]`.
pub fn split_skills(skills: &str) -> Vec<&str> {
    skills.split(SKILL_DELIMITER).collect()
}

/// Folds per-skill outcomes into job records: failures are ignored, the
/// first listing seen for each [`JobKey`] is kept as its representative.
pub fn merge_outcomes(outcomes: Vec<QueryOutcome>, tags: &[String]) -> Vec<JobRecord> {
    let mut unique: IndexMap<JobKey, JobListing> = IndexMap::new();

    for listing in outcomes.into_iter().flat_map(|outcome| match outcome {
        QueryOutcome::Found(listings) => listings,
        QueryOutcome::Failed(_) => Vec::new(),
    }) {
        unique.entry(listing.key()).or_insert(listing);
    }

    unique
        .into_iter()
        .map(|(key, listing)| JobRecord {
            title: key.title,
            company_name: key.company_name,
            url: listing.redirect_url,
            tags: tags.to_vec(),
        })
        .collect()
}
