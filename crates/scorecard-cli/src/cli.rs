use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use scorecard_core::scope::completion_table;
use scorecard_core::{
    load_submission, normalize, Engine, EngineError, Evaluation, Submission, SubmissionError,
};
use tracing::{debug, info};

use crate::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "scorecard",
    about = "Validate and score monthly performance submissions",
    version
)]
struct Cli {
    /// Log level or filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a submission against the schema and the reporting rules
    Validate(ValidateArgs),
    /// Compute KPI, learning, relationship and overall scores
    Score(ScoreArgs),
    /// Show scope completion per client and contracted service
    Completion(CompletionArgs),
    /// Print the plain-text monthly summary
    Summary(SummaryArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Submission file (JSON, or YAML for .yaml/.yml)
    file: PathBuf,

    /// Engine configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Submission file (JSON, or YAML for .yaml/.yml)
    file: PathBuf,

    /// Previous month's submission, for growth metrics
    #[arg(long)]
    previous: Option<PathBuf>,

    /// Engine configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct CompletionArgs {
    /// Submission file (JSON, or YAML for .yaml/.yml)
    file: PathBuf,

    /// Only show this client
    #[arg(long)]
    client: Option<String>,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Submission file (JSON, or YAML for .yaml/.yml)
    file: PathBuf,

    /// Previous month's submission, for growth metrics
    #[arg(long)]
    previous: Option<PathBuf>,

    /// Engine configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub(crate) fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    match cli.command {
        Command::Validate(args) => validate(args),
        Command::Score(args) => score(args),
        Command::Completion(args) => completion(args),
        Command::Summary(args) => summary(args),
    }
}

fn engine(config: Option<&Path>) -> Result<Engine> {
    match config {
        Some(path) => {
            info!(config = %path.display(), "loading engine configuration");
            Engine::from_config_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => Ok(Engine::default()),
    }
}

fn load(path: &Path) -> Result<Submission> {
    debug!(file = %path.display(), "loading submission");
    load_submission(path).with_context(|| format!("failed to load {}", path.display()))
}

fn evaluate(engine: &Engine, file: &Path, previous: Option<&Path>) -> Result<Evaluation> {
    let current = load(file)?;
    let previous = previous.map(load).transpose()?;
    Ok(engine.evaluate(&current, previous.as_ref()))
}

fn print_problems(file: &Path, errors: &[String]) {
    println!("{}: {} problem(s)", file.display(), errors.len());
    for error in errors {
        println!("  - {error}");
    }
}

fn validate(args: ValidateArgs) -> Result<ExitCode> {
    let engine = engine(args.config.as_deref())?;

    let submission = match load_submission(&args.file) {
        Ok(submission) => submission,
        Err(EngineError::Submission(SubmissionError::SchemaError(errors))) => {
            print_problems(&args.file, &errors);
            return Ok(ExitCode::FAILURE);
        }
        Err(error) => {
            return Err(error).with_context(|| format!("failed to load {}", args.file.display()))
        }
    };

    let result = engine.validate(&normalize(&submission, None));
    if result.ok {
        println!("{}: ok", args.file.display());
        Ok(ExitCode::SUCCESS)
    } else {
        print_problems(&args.file, &result.errors);
        Ok(ExitCode::FAILURE)
    }
}

fn render_text(evaluation: &Evaluation) -> String {
    let scores = &evaluation.scores;
    let department = evaluation
        .department
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "no department".to_string());

    let mut lines = vec![
        format!("Month:          {}", evaluation.month_key),
        format!("Employee:       {} ({department})", evaluation.employee),
        format!("KPI:            {}/10", scores.kpi_score),
        format!("Learning:       {}/10", scores.learning_score),
        format!("Client Status:  {}/10", scores.relationship_score),
        format!("Overall:        {}/10", scores.overall),
    ];
    if let Some(discipline) = &evaluation.discipline {
        lines.push(format!(
            "Discipline:     {} day(s) late, penalty {}",
            discipline.late_days, discipline.penalty
        ));
    }
    if evaluation.validation.ok {
        lines.push("Validation:     ok".to_string());
    } else {
        lines.push(format!(
            "Validation:     {} problem(s)",
            evaluation.validation.errors.len()
        ));
        lines.extend(
            evaluation
                .validation
                .errors
                .iter()
                .map(|error| format!("  - {error}")),
        );
    }
    lines.join("\n")
}

fn score(args: ScoreArgs) -> Result<ExitCode> {
    let engine = engine(args.config.as_deref())?;
    let evaluation = evaluate(&engine, &args.file, args.previous.as_deref())?;

    let output = match args.format {
        OutputFormat::Text => render_text(&evaluation),
        OutputFormat::Json => serde_json::to_string_pretty(&evaluation)?,
        OutputFormat::Yaml => serde_yaml::to_string(&evaluation)?,
    };
    println!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn completion(args: CompletionArgs) -> Result<ExitCode> {
    let submission = normalize(&load(&args.file)?, None);

    let clients = match args.client.as_deref() {
        Some(name) => match submission.client_named(name) {
            Some(client) => vec![client.clone()],
            None => bail!("no client named \"{}\" in {}", name.trim(), args.file.display()),
        },
        None => submission.clients,
    };

    let rows = completion_table(&clients);
    if rows.is_empty() {
        println!("No contracted services.");
        return Ok(ExitCode::SUCCESS);
    }

    let client_width = rows.iter().map(|r| r.client.len()).max().unwrap_or(0).max(6);
    let service_width = rows.iter().map(|r| r.service.len()).max().unwrap_or(0).max(7);
    println!("{:client_width$}  {:service_width$}  Completion", "Client", "Service");
    for row in rows {
        let completion = match row.completion {
            Some(percent) => format!("{percent}%"),
            None => "n/a".to_string(),
        };
        println!(
            "{:client_width$}  {:service_width$}  {completion}",
            row.client, row.service
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn summary(args: SummaryArgs) -> Result<ExitCode> {
    let engine = engine(args.config.as_deref())?;
    let evaluation = evaluate(&engine, &args.file, args.previous.as_deref())?;
    println!("{}", evaluation.summary);
    Ok(ExitCode::SUCCESS)
}
