use std::path::Path;

use tempfile::TempDir;
use PaperLens::catalog::{filter_papers, PaperCatalog};
use PaperLens::data_model::{
    PaperRecord, Question, QualityThreshold, QualityThresholds, Topic, CONCISE_QUESTIONS,
    DETAILED_QUESTIONS,
};
use PaperLens::error::LensError;
use PaperLens::pipeline::readers::{BaseReader, CsvReader};

const NEUTRAL: &str = "We train the model on a set of text. Then we test it on held out text. \
                       The model finds the topic of each text.";
const SUBJECTIVE: &str = "Terrible, awful work!";

struct Row<'a> {
    title: &'a str,
    category: &'a str,
    authors: &'a str,
    detailed: [&'a str; 4],
}

fn write_dataset(dir: &Path, rows: &[Row]) -> std::path::PathBuf {
    let path = dir.join("papers.csv");
    let mut writer = csv::Writer::from_path(&path).expect("Failed to create CSV");

    let mut header = vec![
        "Title",
        "Category",
        "Authors",
        "Publication Date",
        "Abstract",
        "Generated Summary",
        "Full Text",
    ];
    header.extend(CONCISE_QUESTIONS);
    header.extend(DETAILED_QUESTIONS);
    writer.write_record(&header).unwrap();

    for row in rows {
        let mut fields = vec![
            row.title,
            row.category,
            row.authors,
            "2021-03-04",
            "An abstract.",
            "",
            "",
        ];
        fields.extend(["Short answer."; 4]);
        fields.extend(row.detailed);
        writer.write_record(&fields).unwrap();
    }
    writer.flush().unwrap();
    path
}

fn titles<'a>(papers: &[&'a PaperLens::data_model::ScoredPaper]) -> Vec<&'a str> {
    papers.iter().map(|p| p.record.title.as_str()).collect()
}

fn threshold(t: i64) -> QualityThresholds {
    QualityThresholds::uniform(QualityThreshold::new(t).unwrap())
}

#[test]
fn test_threshold_keeps_only_readable_neutral_paper() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[
            Row {
                title: "Readable",
                category: "Machine learning",
                authors: "Ann Lee",
                detailed: [NEUTRAL; 4],
            },
            Row {
                title: "Ranting",
                category: "Machine learning",
                authors: "Bo Chan",
                detailed: [SUBJECTIVE; 4],
            },
        ],
    );

    let catalog = PaperCatalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let readable = catalog.select("Machine learning", "Readable").unwrap();
    for topic in Topic::ALL {
        assert!(readable.scores.get(topic) >= 50.0);
    }
    let ranting = catalog.select("Machine learning", "Ranting").unwrap();
    assert!(ranting.scores.get(Topic::ResearchProblem) < 50.0);

    let kept = catalog.filter("Machine learning", Some(&threshold(50)));
    assert_eq!(titles(&kept), vec!["Readable"]);
}

#[test]
fn test_blank_detailed_cell_scores_zero_and_fails_any_positive_threshold() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[Row {
            title: "Gap",
            category: "Physics",
            authors: "",
            detailed: [NEUTRAL, NEUTRAL, "  ", NEUTRAL],
        }],
    );

    let catalog = PaperCatalog::load(&path).unwrap();
    let paper = catalog.select("Physics", "Gap").unwrap();
    assert_eq!(paper.scores.get(Topic::KeyFindings), 0.0);
    assert_eq!(paper.record.authors, None);
    assert_eq!(
        paper
            .record
            .answer_or_unavailable(Question::detailed(Topic::KeyFindings)),
        "Data unavailable"
    );

    assert_eq!(catalog.filter("Physics", Some(&threshold(0))).len(), 1);
    assert!(catalog.filter("Physics", Some(&threshold(1))).is_empty());
}

#[test]
fn test_filter_is_stable_monotonic_and_a_subset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[
            Row {
                title: "One",
                category: "ML",
                authors: "",
                detailed: [NEUTRAL; 4],
            },
            Row {
                title: "Other",
                category: "Physics",
                authors: "",
                detailed: [NEUTRAL; 4],
            },
            Row {
                title: "Two",
                category: "ML",
                authors: "",
                detailed: [SUBJECTIVE, NEUTRAL, NEUTRAL, NEUTRAL],
            },
            Row {
                title: "Three",
                category: "ML",
                authors: "",
                detailed: [NEUTRAL; 4],
            },
        ],
    );
    let catalog = PaperCatalog::load(&path).unwrap();

    let unfiltered = catalog.filter("ML", None);
    assert_eq!(titles(&unfiltered), vec!["One", "Two", "Three"]);

    let mut previous = unfiltered.len();
    for t in [0, 10, 50, 66, 67, 90, 100] {
        let kept = catalog.filter("ML", Some(&threshold(t)));
        assert!(kept.len() <= previous, "threshold {} grew the result", t);
        assert!(kept.iter().all(|p| unfiltered.contains(p)));
        previous = kept.len();
    }
    assert_eq!(
        titles(&catalog.filter("ML", Some(&threshold(50)))),
        vec!["One", "Three"]
    );
    assert!(catalog.filter("ML", Some(&threshold(100))).is_empty());
}

#[test]
fn test_header_only_dataset_filters_to_nothing() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &[]);
    let catalog = PaperCatalog::load(&path).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.filter("Machine learning", None).is_empty());
    assert!(catalog
        .filter("Machine learning", Some(&threshold(0)))
        .is_empty());
    assert_eq!(catalog.default_category("Machine learning"), None);
}

#[test]
fn test_duplicate_titles_all_returned_and_threshold_guides_selection() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[
            Row {
                title: "Twin",
                category: "ML",
                authors: "First",
                detailed: [SUBJECTIVE, NEUTRAL, NEUTRAL, NEUTRAL],
            },
            Row {
                title: "Solo",
                category: "ML",
                authors: "",
                detailed: [NEUTRAL; 4],
            },
            Row {
                title: "Twin",
                category: "ML",
                authors: "Second",
                detailed: [NEUTRAL; 4],
            },
        ],
    );
    let catalog = PaperCatalog::load(&path).unwrap();

    let all = catalog.filter("ML", None);
    assert_eq!(titles(&all), vec!["Twin", "Solo", "Twin"]);
    assert_eq!(catalog.filtered_titles("ML", None), vec!["Twin", "Solo"]);

    let t50 = threshold(50);
    let twin = catalog.select_filtered("ML", "Twin", Some(&t50)).unwrap();
    assert_eq!(twin.record.authors.as_deref(), Some("Second"));
    let unfiltered_twin = catalog.select("ML", "Twin").unwrap();
    assert_eq!(unfiltered_twin.record.authors.as_deref(), Some("First"));
}

#[test]
fn test_unknown_category_is_an_empty_result() {
    let catalog = PaperCatalog::from_records(vec![PaperRecord {
        title: "Only".into(),
        category: "ML".into(),
        ..Default::default()
    }]);
    assert!(filter_papers(catalog.papers(), "Biology", None).is_empty());
    assert!(filter_papers(catalog.papers(), "ml", None).is_empty());
}

#[test]
fn test_scores_are_deterministic_across_loads() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[Row {
            title: "Same",
            category: "ML",
            authors: "",
            detailed: [NEUTRAL, SUBJECTIVE, "", NEUTRAL],
        }],
    );
    let first = PaperCatalog::load(&path).unwrap();
    let second = PaperCatalog::load(&path).unwrap();
    assert_eq!(first.papers(), second.papers());
}

#[test]
fn test_missing_dataset_is_an_io_error() {
    let reader = CsvReader::new("does/not/exist.csv");
    assert!(matches!(
        reader.read_records(),
        Err(LensError::IoError { .. })
    ));
}
