//! The job posting record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the finalized job catalog.
///
/// Missing text columns are empty strings and a missing or unparseable
/// application count is 0. Postings are immutable once loaded; their
/// identity for ranking is the row position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    /// Stable identifier (the catalog's `job_id`, or derived from the URL and
    /// headline fields).
    pub id: String,
    pub title: String,
    pub description: String,
    pub company_name: String,
    pub location: String,
    pub experience_level: String,
    pub sector: String,
    pub work_type: String,
    pub contract_type: String,
    pub applications_count: u64,
    pub job_url: String,
    pub posted_date: Option<NaiveDate>,
}

impl JobPosting {
    /// Create a posting with only a title; convenient for fixtures.
    pub fn new<S: Into<String>>(title: S) -> Self {
        JobPosting {
            title: title.into(),
            ..Default::default()
        }
        .with_derived_id()
    }

    /// Set the application count.
    pub fn with_applications(mut self, count: u64) -> Self {
        self.applications_count = count;
        self
    }

    /// Set the company name.
    pub fn with_company<S: Into<String>>(mut self, company: S) -> Self {
        self.company_name = company.into();
        self
    }

    /// Set the location.
    pub fn with_location<S: Into<String>>(mut self, location: S) -> Self {
        self.location = location.into();
        self
    }

    /// Set the experience level.
    pub fn with_experience<S: Into<String>>(mut self, level: S) -> Self {
        self.experience_level = level.into();
        self
    }

    /// Set the description.
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    /// Text columns in the order they are concatenated for indexing.
    pub fn text_fields(&self) -> [&str; 8] {
        [
            &self.title,
            &self.description,
            &self.sector,
            &self.experience_level,
            &self.company_name,
            &self.work_type,
            &self.contract_type,
            &self.location,
        ]
    }

    /// Whether any text column carries non-blank content.
    pub fn has_text(&self) -> bool {
        self.text_fields().iter().any(|f| !f.trim().is_empty())
    }

    /// Replace the id with one derived from the URL and headline fields.
    ///
    /// The same posting always gets the same id, so ids survive a catalog
    /// reload.
    pub fn with_derived_id(mut self) -> Self {
        self.id = derive_id(
            &self.job_url,
            &self.title,
            &self.company_name,
            &self.location,
        );
        self
    }
}

/// UUIDv5 over `jobUrl|title|companyName|location`.
pub fn derive_id(job_url: &str, title: &str, company: &str, location: &str) -> String {
    let name = format!("{job_url}|{title}|{company}|{location}");
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_id_is_stable() {
        let a = JobPosting::new("Data Scientist").with_company("Acme");
        let b = JobPosting::new("Data Scientist").with_company("Acme");
        assert_eq!(a.with_derived_id().id, b.with_derived_id().id);

        let c = JobPosting::new("Data Analyst");
        assert_ne!(JobPosting::new("Data Scientist").id, c.id);
    }

    #[test]
    fn test_has_text() {
        assert!(JobPosting::new("Engineer").has_text());
        assert!(!JobPosting::default().has_text());
        assert!(!JobPosting::new("   ").has_text());
    }

    #[test]
    fn test_serializes_camel_case() {
        let posting = JobPosting::new("Engineer").with_applications(3);
        let value = serde_json::to_value(&posting).unwrap();
        assert_eq!(value["applicationsCount"], 3);
        assert_eq!(value["companyName"], "");
        assert!(value["postedDate"].is_null());
    }
}
