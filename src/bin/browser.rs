// src/bin/browser.rs

//! Terminal browser over the paper summary dataset.
//!
//! Loads the CSV once, scores every detailed answer, then renders the
//! requested view: categories, titles, one paper with one answer, or an export
//! of the filtered papers. Configuration comes from a YAML file with CLI
//! overrides; logging goes through `tracing`.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use PaperLens::catalog::PaperCatalog;
use PaperLens::config::cli::{Args, Command, KindArg};
use PaperLens::config::{load_app_config, AppConfig, DEFAULT_CONFIG_PATH};
use PaperLens::data_model::{
    or_not_available, AnswerKind, Question, QualityThreshold, QualityThresholds, Topic,
};
use PaperLens::pipeline::readers::CsvReader;
use PaperLens::pipeline::writers::{BaseWriter, JsonlWriter};
use PaperLens::scoring::score_breakdown;
use PaperLens::utils::common::{create_progress_bar, init_tracing, DEFAULT_PROGRESS_TEMPLATE};
use PaperLens::utils::prometheus_metrics::gather_metrics_text;

fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => load_app_config(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_app_config(DEFAULT_CONFIG_PATH)?,
        None => AppConfig::default(),
    };

    if let Some(dataset) = &args.dataset {
        config.dataset_path = dataset.clone();
    }
    if let Some(format) = args.log_format {
        config.log_format = format;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file = Some(log_file.clone());
    }
    if args.progress {
        config.show_progress = true;
    }
    config.validate()?;
    Ok(config)
}

fn load_catalog(config: &AppConfig) -> Result<PaperCatalog> {
    let reader = CsvReader::new(&config.dataset_path);
    let progress = config
        .show_progress
        .then(|| create_progress_bar(0, "Scoring papers", DEFAULT_PROGRESS_TEMPLATE));
    let catalog = PaperCatalog::load_from(&reader, progress.as_ref()).with_context(|| {
        format!(
            "Failed to load dataset '{}'",
            config.dataset_path.display()
        )
    })?;
    info!(papers = catalog.len(), "Dataset ready");
    Ok(catalog)
}

/// CLI threshold wins over the configured one.
fn thresholds_for(config: &AppConfig, cli_min: Option<i64>) -> Result<Option<QualityThresholds>> {
    match cli_min {
        Some(t) => Ok(Some(QualityThresholds::uniform(QualityThreshold::new(t)?))),
        None => Ok(config.thresholds()?),
    }
}

fn pick_category<'a>(
    catalog: &'a PaperCatalog,
    config: &AppConfig,
    requested: Option<&'a str>,
) -> Option<&'a str> {
    requested.or_else(|| catalog.default_category(&config.default_category))
}

fn print_questions() {
    for kind in [AnswerKind::Concise, AnswerKind::Detailed] {
        println!("{}:", kind);
        for (i, q) in Question::of_kind(kind).iter().enumerate() {
            println!("  {}. {}  {}", i + 1, q.label(), q.text());
        }
    }
}

fn print_titles(catalog: &PaperCatalog, category: &str, thresholds: Option<&QualityThresholds>) {
    let titles = catalog.filtered_titles(category, thresholds);
    if titles.is_empty() {
        println!("No papers available in the {} category.", category);
        return;
    }
    for title in titles {
        println!("{}", title);
    }
}

fn print_paper(
    catalog: &PaperCatalog,
    config: &AppConfig,
    category: &str,
    title: Option<&str>,
    thresholds: Option<&QualityThresholds>,
    question: Question,
    full_text: bool,
) -> Result<()> {
    let Some(default_title) =
        catalog.default_filtered_title(category, thresholds, &config.default_title)
    else {
        println!("No papers available in the {} category.", category);
        return Ok(());
    };
    let title = title.unwrap_or(default_title);
    let paper = catalog
        .select_filtered(category, title, thresholds)
        .ok_or_else(|| PaperLens::LensError::NotFound {
            category: category.to_string(),
            title: title.to_string(),
        })?;
    let record = &paper.record;

    println!("== Paper Information ==");
    println!("Title: {}", record.title);
    println!("Category: {}", record.category);
    println!("Authors: {}", or_not_available(record.authors.as_deref()));
    println!(
        "Publication Date: {}",
        or_not_available(record.publication_date.as_deref())
    );
    println!();
    println!("== Abstract ==");
    println!("{}", or_not_available(record.abstract_text.as_deref()));
    println!();
    println!("== Generated Summary ==");
    println!("{}", or_not_available(record.generated_summary.as_deref()));
    println!();
    println!("== {} ==", question.kind);
    println!("{}", question.text());
    println!("{}", record.answer_or_unavailable(question));
    if question.kind == AnswerKind::Detailed {
        println!("Quality score: {:.2}", paper.scores.get(question.topic));
    }
    if full_text {
        println!();
        println!("== Full Text ==");
        println!("{}", or_not_available(record.full_text.as_deref()));
    }
    Ok(())
}

fn export(
    catalog: &PaperCatalog,
    category: &str,
    thresholds: Option<&QualityThresholds>,
    output: &Path,
) -> Result<()> {
    let papers = catalog.filter(category, thresholds);
    if papers.is_empty() {
        warn!(category, "No papers matched; writing an empty export");
    }
    let mut writer = JsonlWriter::new(output)
        .with_context(|| format!("Failed to create '{}'", output.display()))?;
    writer.write_batch(&papers)?;
    let written = writer.written();
    writer.close()?;
    info!(written, output = %output.display(), "Export complete");
    println!("Exported {} papers to {}", written, output.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    let _log_guard = init_tracing(config.log_format, &config.log_level, config.log_file.as_deref())?;

    if args.validate_config {
        info!(config = ?config, "Configuration is valid");
        println!("Configuration is valid.");
        return Ok(());
    }

    let command = args.command.clone().unwrap_or(Command::Show {
        category: None,
        title: None,
        kind: KindArg::Concise,
        question: 1,
        question_text: None,
        min_quality: None,
        full_text: false,
    });

    match command {
        Command::Questions => print_questions(),
        Command::Score { text } => {
            let breakdown = score_breakdown(&text);
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        Command::Categories => {
            let catalog = load_catalog(&config)?;
            for category in catalog.categories() {
                println!("{}", category);
            }
        }
        Command::Titles {
            category,
            min_quality,
        } => {
            let catalog = load_catalog(&config)?;
            let thresholds = thresholds_for(&config, min_quality)?;
            match pick_category(&catalog, &config, category.as_deref()) {
                Some(category) => print_titles(&catalog, category, thresholds.as_ref()),
                None => println!("The dataset has no papers."),
            }
        }
        Command::Show {
            category,
            title,
            kind,
            question,
            question_text,
            min_quality,
            full_text,
        } => {
            let question = match question_text {
                Some(text) => Question::from_text(&text)?,
                None => {
                    let topic = Topic::ALL[usize::from(question.clamp(1, 4)) - 1];
                    Question::new(kind.into(), topic)
                }
            };
            let catalog = load_catalog(&config)?;
            let thresholds = thresholds_for(&config, min_quality)?;
            match pick_category(&catalog, &config, category.as_deref()) {
                Some(category) => print_paper(
                    &catalog,
                    &config,
                    category,
                    title.as_deref(),
                    thresholds.as_ref(),
                    question,
                    full_text,
                )?,
                None => println!("The dataset has no papers."),
            }
        }
        Command::Export {
            output,
            category,
            min_quality,
        } => {
            let catalog = load_catalog(&config)?;
            let thresholds = thresholds_for(&config, min_quality)?;
            match pick_category(&catalog, &config, category.as_deref()) {
                Some(category) => export(&catalog, category, thresholds.as_ref(), &output)?,
                None => println!("The dataset has no papers."),
            }
        }
        Command::Stats => {
            let _catalog = load_catalog(&config)?;
            print!("{}", gather_metrics_text()?);
        }
    }

    Ok(())
}
