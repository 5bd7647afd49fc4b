#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use outcome_assess::archetype::ARCHETYPE_RULES;
use outcome_assess::evaluation::run_synthetic_suite;
use outcome_assess::feedback::load_feedback_config;
use outcome_assess::report::{build_report, render_report_markdown};
use outcome_assess::weights::WEIGHT_TABLE;
use outcome_assess::{
    check_completeness, ensure_complete, load_answers_from_path, score_answers, FeedbackConfig,
};

#[derive(Parser)]
#[command(name = "outcome", version, about = "Outcome-thinking assessment scorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answers JSON file
    Score {
        #[arg(long)]
        answers: PathBuf,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
        /// Refuse to score incomplete or malformed answer sets
        #[arg(long)]
        strict: bool,
        /// Feedback thresholds JSON
        #[arg(long)]
        feedback_config: Option<PathBuf>,
    },
    /// List completeness issues in an answers JSON file
    Check {
        #[arg(long)]
        answers: PathBuf,
    },
    /// List archetypes in ladder order
    Archetypes,
    /// List the question weight table
    Questions,
    /// Score seeded synthetic respondents and summarize the archetype spread
    Eval {
        #[arg(long, default_value_t = 1000)]
        respondents: usize,
        #[arg(long, default_value_t = 1337)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Md,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn open_output(out: Option<PathBuf>) -> io::Result<Box<dyn Write>> {
    Ok(match out {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            answers,
            out,
            format,
            strict,
            feedback_config,
        } => {
            let answers = load_answers_from_path(answers)?;
            if strict {
                ensure_complete(&answers)?;
            }
            let config = match feedback_config {
                Some(path) => load_feedback_config(path)?,
                None => FeedbackConfig::default(),
            };
            let result = score_answers(&answers);
            let report = build_report(&answers, &result, &config);

            let mut writer = open_output(out)?;
            match format {
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(&mut writer, &report)?;
                    writeln!(writer)?;
                }
                OutputFormat::Md => write!(writer, "{}", render_report_markdown(&report))?,
            }
        }
        Commands::Check { answers } => {
            let answers = load_answers_from_path(answers)?;
            let issues = check_completeness(&answers);
            if issues.is_empty() {
                println!("ok: {} answers, no issues", answers.len());
            } else {
                for issue in &issues {
                    println!("{issue}");
                }
                return Err(format!("{} issue(s) found", issues.len()).into());
            }
        }
        Commands::Archetypes => {
            for (i, rule) in ARCHETYPE_RULES.iter().enumerate() {
                println!("{:>2}. {}", i + 1, rule.archetype.name);
            }
        }
        Commands::Questions => {
            for entry in &WEIGHT_TABLE {
                let shares = entry
                    .max_contributions()
                    .map(|(s, max)| format!("{}={max:.1}", s.code()))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!(
                    "{:<4} {:<14} options={} {}",
                    entry.question_id,
                    format!("{:?}", entry.kind()),
                    entry.option_count,
                    shares
                );
            }
        }
        Commands::Eval {
            respondents,
            seed,
            out,
        } => {
            let summary = run_synthetic_suite(respondents, seed);
            let mut writer = open_output(out)?;
            serde_json::to_writer(&mut writer, &summary)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
