//! Catalog loading from CSV and JSON Lines files.
//!
//! The loader reads an already cleaned catalog. It only maps the column
//! aliases the upstream cleaning step emits and parses numbers and dates
//! leniently; a malformed cell becomes an empty column, never an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, info, warn};
use regex::Regex;
use serde_json::Value;

use crate::catalog::posting::JobPosting;
use crate::error::{HireHubError, Result};

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*").expect("digit pattern should be valid"));

/// On-disk catalog formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Csv,
    JsonLines,
}

impl CatalogFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(CatalogFormat::Csv),
            Some("jsonl") | Some("ndjson") | Some("json") => Ok(CatalogFormat::JsonLines),
            _ => Err(HireHubError::catalog(format!(
                "Unsupported catalog file: {} (expected .csv or .jsonl)",
                path.display()
            ))),
        }
    }
}

/// A catalog column after alias resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    Title,
    Description,
    CompanyName,
    Location,
    ExperienceLevel,
    Sector,
    WorkType,
    ContractType,
    ApplicationsCount,
    JobUrl,
    PostedDate,
}

impl Column {
    /// Resolve a header name (case-insensitive, aliases accepted).
    pub fn from_header(header: &str) -> Option<Self> {
        let column = match header.trim().to_ascii_lowercase().as_str() {
            "id" | "job_id" | "jobid" => Column::Id,
            "title" => Column::Title,
            "description" => Column::Description,
            "companyname" | "company" | "company_name" => Column::CompanyName,
            "location" => Column::Location,
            "experiencelevel" | "experience" | "experience_level" => Column::ExperienceLevel,
            "sector" => Column::Sector,
            "worktype" | "work_type" => Column::WorkType,
            "contracttype" | "contract_type" => Column::ContractType,
            "applicationscount" | "applications" | "applications_count" => {
                Column::ApplicationsCount
            }
            "joburl" | "url" | "job_url" => Column::JobUrl,
            "posteddate" | "posted_date" => Column::PostedDate,
            _ => return None,
        };
        Some(column)
    }
}

/// Load a catalog file, detecting its format from the extension.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<JobPosting>> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let file = File::open(path)?;
    let postings = load_catalog_from_reader(file, format)?;
    info!(
        "Loaded {} postings from {}",
        postings.len(),
        path.display()
    );
    Ok(postings)
}

/// Load a catalog from any reader.
pub fn load_catalog_from_reader<R: Read>(reader: R, format: CatalogFormat) -> Result<Vec<JobPosting>> {
    match format {
        CatalogFormat::Csv => read_csv(reader),
        CatalogFormat::JsonLines => read_json_lines(reader),
    }
}

fn read_csv<R: Read>(reader: R) -> Result<Vec<JobPosting>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers: Vec<Option<Column>> = csv_reader
        .byte_headers()
        .map_err(|e| HireHubError::catalog(format!("Unreadable catalog header: {e}")))?
        .iter()
        .map(|h| Column::from_header(&String::from_utf8_lossy(h)))
        .collect();

    if headers.iter().all(Option::is_none) {
        warn!("Catalog header has no recognized columns; every posting will be empty");
    }

    let mut postings = Vec::new();
    for (row, record) in csv_reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            // the underlying reader keeps failing, so keep what was read
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                warn!(
                    "Catalog read failed after {} rows ({e}); keeping the rows read so far",
                    postings.len()
                );
                break;
            }
            Err(e) => {
                warn!("Row {} is malformed ({e}); skipped", row + 1);
                continue;
            }
        };
        if record.len() != headers.len() {
            warn!(
                "Row {} has {} fields, expected {}; missing columns treated as empty",
                row + 1,
                record.len(),
                headers.len()
            );
        }

        let mut posting = PostingBuilder::default();
        for (column, cell) in headers.iter().zip(record.iter()) {
            if let Some(column) = column {
                posting.set_text(*column, &String::from_utf8_lossy(cell), row);
            }
        }
        postings.push(posting.build());
    }

    Ok(postings)
}

fn read_json_lines<R: Read>(reader: R) -> Result<Vec<JobPosting>> {
    let mut postings = Vec::new();

    for (line_num, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let object = match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                warn!("Line {} is not a JSON object; skipped", line_num + 1);
                continue;
            }
            Err(e) => {
                warn!("Line {} is not valid JSON ({e}); skipped", line_num + 1);
                continue;
            }
        };

        let mut posting = PostingBuilder::default();
        for (key, value) in &object {
            let Some(column) = Column::from_header(key) else {
                continue;
            };
            match value {
                Value::String(s) => posting.set_text(column, s, line_num),
                Value::Number(n) if column == Column::ApplicationsCount => {
                    posting.applications_count =
                        n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64));
                }
                Value::Number(n) => posting.set_text(column, &n.to_string(), line_num),
                Value::Bool(b) => posting.set_text(column, &b.to_string(), line_num),
                _ => {}
            }
        }
        postings.push(posting.build());
    }

    Ok(postings)
}

/// Accumulates one row's cells.
#[derive(Default)]
struct PostingBuilder {
    posting: JobPosting,
    applications_count: Option<u64>,
}

impl PostingBuilder {
    fn set_text(&mut self, column: Column, raw: &str, row: usize) {
        let value = clean_cell(raw);
        let p = &mut self.posting;
        match column {
            Column::Id => p.id = value,
            Column::Title => p.title = value,
            Column::Description => p.description = value,
            Column::CompanyName => p.company_name = value,
            Column::Location => p.location = value,
            Column::ExperienceLevel => p.experience_level = value,
            Column::Sector => p.sector = value,
            Column::WorkType => p.work_type = value,
            Column::ContractType => p.contract_type = value,
            Column::JobUrl => p.job_url = value,
            Column::ApplicationsCount => {
                let parsed = parse_applications(&value);
                if parsed.is_none() && !value.is_empty() {
                    debug!("Row {}: unparseable applicationsCount {value:?}", row + 1);
                }
                self.applications_count = parsed;
            }
            Column::PostedDate => {
                p.posted_date = parse_posted_date(&value);
                if p.posted_date.is_none() && !value.is_empty() {
                    debug!("Row {}: unparseable postedDate {value:?}", row + 1);
                }
            }
        }
    }

    fn build(mut self) -> JobPosting {
        self.posting.applications_count = self.applications_count.unwrap_or(0);
        if self.posting.id.is_empty() {
            self.posting.with_derived_id()
        } else {
            self.posting
        }
    }
}

/// Trim a cell and map null markers left by dataframe exports to empty.
pub fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed {
        "nan" | "NaN" | "None" => String::new(),
        _ => trimmed.to_string(),
    }
}

/// Parse an application count from text such as `"1,234 applicants"`.
///
/// Takes the first run of digits (commas allowed); `None` when there is none.
pub fn parse_applications(value: &str) -> Option<u64> {
    DIGIT_RUN
        .find(value)
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
}

/// Parse a posted date in `YYYY-MM-DD`, RFC 3339 or `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_posted_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|d| d.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|d| d.date())
        })
}
