use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use hirehub::catalog::JobPosting;
use hirehub::index::{IndexConfig, IndexState, build};
use hirehub::ranker::{RankFilters, rank};
use hirehub::resume::{
    DocumentKind, DocumentSource, ExtractionStrategy, KeywordSkillExtractor, TextExtractor,
    recommend_for_resume,
};

fn catalog() -> IndexState {
    let postings = vec![
        JobPosting::new("Backend Engineer")
            .with_description("Design REST APIs with Django and PostgreSQL, deploy on AWS."),
        JobPosting::new("BI Analyst")
            .with_description("Own Tableau and Power BI reporting, write SQL every day.")
            .with_applications(20),
        JobPosting::new("Registered Nurse")
            .with_description("Patient care on a busy surgical ward, night shifts.")
            .with_applications(80),
    ];
    build(postings, &IndexConfig::default()).unwrap()
}

/// Stands in for a PDF decoder.
struct StubPdfStrategy;

impl ExtractionStrategy for StubPdfStrategy {
    fn name(&self) -> &'static str {
        "stub_pdf"
    }

    fn supports(&self, kind: DocumentKind) -> bool {
        kind == DocumentKind::Pdf
    }

    fn extract(&self, _bytes: &[u8]) -> anyhow::Result<String> {
        Ok("Analyst skilled in\tSQL,\r\nTableau and Excel".to_string())
    }
}

#[test]
fn test_text_resume_is_reduced_to_skills() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("resume.txt");
    fs::write(
        &path,
        "Jane Doe\nBackend developer.\nSkills: Django, AWS, Docker, PostgreSQL\n",
    )?;

    let index = catalog();
    let recommendation = recommend_for_resume(
        &index,
        &TextExtractor::new()?,
        &KeywordSkillExtractor::new()?,
        &DocumentSource::from_path(&path),
        10,
    )?;

    assert_eq!(recommendation.skills, vec!["aws", "django", "docker"]);
    assert_eq!(recommendation.query, "aws django docker");
    assert_eq!(recommendation.results.len(), 3);
    let best = recommendation
        .results
        .iter()
        .find(|r| r.match_score == 100.0)
        .unwrap();
    assert_eq!(best.title, "Backend Engineer");
    Ok(())
}

#[test]
fn test_resume_without_skills_ranks_on_text() -> Result<(), Box<dyn std::error::Error>> {
    let index = catalog();
    let source = DocumentSource::from_bytes(
        b"Experienced surgical nurse".to_vec(),
        Some("cv.txt".to_string()),
    );
    let recommendation = recommend_for_resume(
        &index,
        &TextExtractor::new()?,
        &KeywordSkillExtractor::new()?,
        &source,
        1,
    )?;

    assert!(recommendation.skills.is_empty());
    assert_eq!(recommendation.query, "Experienced surgical nurse");
    assert_eq!(recommendation.results[0].title, "Registered Nurse");
    Ok(())
}

#[test]
fn test_pluggable_pdf_decoder() -> Result<(), Box<dyn std::error::Error>> {
    let index = catalog();
    let extractor = TextExtractor::new()?.prepend_strategy(Arc::new(StubPdfStrategy));
    let source = DocumentSource::from_bytes(b"%PDF-1.7".to_vec(), Some("cv.pdf".to_string()));

    let recommendation = recommend_for_resume(
        &index,
        &extractor,
        &KeywordSkillExtractor::new()?,
        &source,
        2,
    )?;

    assert_eq!(recommendation.skills, vec!["excel", "sql", "tableau"]);
    assert_eq!(recommendation.results[0].title, "BI Analyst");
    Ok(())
}

#[test]
fn test_unreadable_resume_gives_no_results() -> Result<(), Box<dyn std::error::Error>> {
    let index = catalog();
    let source = DocumentSource::from_bytes(b"   \n\t ".to_vec(), Some("cv.txt".to_string()));
    let recommendation = recommend_for_resume(
        &index,
        &TextExtractor::new()?,
        &KeywordSkillExtractor::new()?,
        &source,
        10,
    )?;

    assert!(recommendation.query.is_empty());
    assert!(recommendation.results.is_empty());
    // a blank query never falls back to popular postings
    assert!(rank(&index, &recommendation.query, 10, &RankFilters::default()).is_empty());
    Ok(())
}

#[test]
fn test_pdf_without_decoder_is_an_error() {
    let index = catalog();
    let source = DocumentSource::from_bytes(b"%PDF-1.7".to_vec(), None);
    let result = recommend_for_resume(
        &index,
        &TextExtractor::new().unwrap(),
        &KeywordSkillExtractor::new().unwrap(),
        &source,
        10,
    );
    assert!(result.is_err());
}

#[test]
fn test_docx_without_decoder_is_an_error() {
    let index = catalog();
    let zip = b"PK\x03\x04\x14\x00\x06\x00word/document.xml python sql".to_vec();
    let source = DocumentSource::from_bytes(zip, Some("cv.docx".to_string()));
    let result = recommend_for_resume(
        &index,
        &TextExtractor::new().unwrap(),
        &KeywordSkillExtractor::new().unwrap(),
        &source,
        10,
    );
    assert!(result.is_err());
}
