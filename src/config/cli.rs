use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LogFormat;
use crate::data_model::AnswerKind;

/// Browse research-paper summaries and question/answer pairs by category.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the browser configuration YAML file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// CSV dataset to browse (overrides the config file)
    #[arg(short = 'd', long)]
    pub dataset: Option<PathBuf>,

    /// Log output format (overrides the config file)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Show a progress bar while scoring the dataset
    #[arg(long)]
    pub progress: bool,

    /// Validate the configuration and exit
    #[arg(long)]
    pub validate_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the categories in the dataset
    Categories,

    /// List the fixed questions
    Questions,

    /// List paper titles of a category
    Titles {
        /// Category to list (defaults to the configured category)
        #[arg(long)]
        category: Option<String>,

        /// Keep only papers whose four detailed answers all score at least this
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=100))]
        min_quality: Option<i64>,
    },

    /// Show one paper with the answer to one question
    Show {
        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Answer type
        #[arg(long, value_enum, default_value_t = KindArg::Concise)]
        kind: KindArg,

        /// Question number, 1 to 4
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=4))]
        question: u8,

        /// Pick the question by its exact text instead of `--kind` and `--question`
        #[arg(long, conflicts_with_all = ["kind", "question"])]
        question_text: Option<String>,

        /// Choose only among papers whose four detailed answers all score at least this
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=100))]
        min_quality: Option<i64>,

        /// Also print the full text
        #[arg(long)]
        full_text: bool,
    },

    /// Write the papers of a category, with their quality scores, as JSON Lines
    Export {
        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=100))]
        min_quality: Option<i64>,
    },

    /// Print load and scoring metrics in Prometheus text format
    Stats,

    /// Print the quality score breakdown of a piece of text
    Score { text: String },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Concise,
    Detailed,
}

impl From<KindArg> for AnswerKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Concise => AnswerKind::Concise,
            KindArg::Detailed => AnswerKind::Detailed,
        }
    }
}
