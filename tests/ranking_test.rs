use hirehub::catalog::JobPosting;
use hirehub::index::{IndexConfig, IndexState, build};
use hirehub::ranker::{RankFilters, popularity_fallback, rank};

fn posting(title: &str, company: &str, location: &str, applications: u64) -> JobPosting {
    JobPosting::new(title)
        .with_company(company)
        .with_location(location)
        .with_applications(applications)
        .with_derived_id()
}

/// Three postings long enough that none of them gets the filler phrase.
fn three_postings() -> IndexState {
    let catalog = vec![
        posting("Data Scientist", "Northwind Labs", "Berlin", 50),
        posting("Software Engineer", "Globex Systems", "Munich", 5),
        posting("Data Analyst", "Initech Group", "Hamburg", 0),
    ];
    build(catalog, &IndexConfig::default()).unwrap()
}

fn mixed_catalog() -> IndexState {
    let catalog = vec![
        posting("Senior Rust Engineer", "Ferrous Systems", "Berlin, Germany", 120)
            .with_experience("Mid-Senior level")
            .with_description("Build low latency services in Rust and Tokio."),
        posting("Machine Learning Engineer", "DeepCo", "London, UK", 300)
            .with_experience("Associate")
            .with_description("Train and deploy machine learning models with Python."),
        posting("Data Analyst", "Retail Corp", "Paris, France", 15)
            .with_experience("Entry level")
            .with_description("SQL reporting and Tableau dashboards for sales."),
        posting("Backend Developer", "Shopify", "Remote", 0)
            .with_experience("Mid-Senior level")
            .with_description("Ruby and Rust services for the checkout platform."),
        posting("Python Developer", "Acme", "Berlin, Germany", 42)
            .with_experience("Associate")
            .with_description("Django APIs and PostgreSQL."),
    ];
    build(catalog, &IndexConfig::default()).unwrap()
}

#[test]
fn test_data_science_example() {
    let index = three_postings();
    let results = rank(&index, "data science", 2, &RankFilters::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Data Scientist");
    assert_eq!(results[1].title, "Data Analyst");
    assert_eq!(results[0].match_score, 100.0);
}

#[test]
fn test_unknown_query_returns_most_popular() {
    let index = three_postings();
    let results = rank(&index, "zzzznotreal", 2, &RankFilters::default());

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Data Scientist");
    assert_eq!(results[1].title, "Software Engineer");
    assert!(results.iter().all(|r| r.match_score == 0.0));
}

#[test]
fn test_empty_query() {
    let index = three_postings();
    assert!(rank(&index, "", 3, &RankFilters::default()).is_empty());
    assert!(rank(&index, "  \n ", 3, &RankFilters::default()).is_empty());
}

#[test]
fn test_never_more_than_top_n() {
    let index = mixed_catalog();
    for top_n in 1..=7 {
        let results = rank(&index, "rust engineer", top_n, &RankFilters::default());
        assert!(results.len() <= top_n);
        assert_eq!(results.len(), top_n.min(index.len()));
    }
}

#[test]
fn test_match_scores_in_range_with_one_decimal() {
    let index = mixed_catalog();
    for query in ["rust", "python developer", "machine learning", "sql dashboards"] {
        for result in rank(&index, query, 5, &RankFilters::default()) {
            assert!((0.0..=100.0).contains(&result.match_score));
            let tenths = result.match_score * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_scores_non_increasing_with_constant_popularity() {
    let catalog = vec![
        posting("Rust Engineer", "Acme", "Berlin", 7)
            .with_description("Rust services, async Rust, Rust tooling"),
        posting("Platform Engineer", "Acme", "Berlin", 7)
            .with_description("Kubernetes and some Rust"),
        posting("Frontend Engineer", "Acme", "Berlin", 7)
            .with_description("React and TypeScript"),
        posting("Rust Developer", "Globex", "Paris", 7)
            .with_description("Embedded Rust"),
    ];
    let index = build(catalog, &IndexConfig::default()).unwrap();
    let results = rank(&index, "rust", 4, &RankFilters::default());

    assert_eq!(results.len(), 4);
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
}

#[test]
fn test_location_filter() {
    let index = mixed_catalog();
    let filters = RankFilters::new().location("berlin");
    let results = rank(&index, "developer engineer", 5, &filters);

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.location.contains("Berlin")));
}

#[test]
fn test_experience_filter() {
    let index = mixed_catalog();
    let filters = RankFilters::new().experience_level("mid-senior");
    let results = rank(&index, "rust", 5, &filters);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title, "Senior Rust Engineer");
    assert!(results
        .iter()
        .all(|r| r.experience_level == "Mid-Senior level"));
}

#[test]
fn test_filter_excluding_everything_falls_back() {
    let index = mixed_catalog();
    let filters = RankFilters::new().location("Tokyo");
    let results = rank(&index, "rust engineer", 3, &filters);

    assert_eq!(results, popularity_fallback(&index, 3));
    let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Machine Learning Engineer", "Senior Rust Engineer", "Python Developer"]
    );
    assert!(results.iter().all(|r| r.match_score == 0.0));
}

#[test]
fn test_fallback_length_is_capped_by_catalog() {
    let index = three_postings();
    let filters = RankFilters::new().location("Tokyo");
    let results = rank(&index, "data", 10, &filters);
    assert_eq!(results.len(), 3);
}

#[test]
fn test_fallback_ties_keep_catalog_order() {
    let catalog = vec![
        posting("Nurse", "Clinic", "Berlin", 0),
        posting("Teacher", "School", "Berlin", 0),
        posting("Baker", "Bakery", "Berlin", 0),
    ];
    let index = build(catalog, &IndexConfig::default()).unwrap();
    let results = rank(&index, "pilot", 3, &RankFilters::new().location("Oslo"));

    let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Nurse", "Teacher", "Baker"]);
}

#[test]
fn test_ranking_is_idempotent() {
    let index = mixed_catalog();
    let filters = RankFilters::new().location("Germany");
    let first = rank(&index, "python rust", 4, &filters);
    let second = rank(&index, "python rust", 4, &filters);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_results_serialize_camel_case() {
    let index = three_postings();
    let results = rank(&index, "data", 1, &RankFilters::default());
    let value = serde_json::to_value(&results[0]).unwrap();

    assert!(value.get("companyName").is_some());
    assert!(value.get("experienceLevel").is_some());
    assert!(value.get("jobUrl").is_some());
    assert!(value.get("matchScore").is_some());
}
