use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quiz_model::{load_question_from_json, ChoiceId, Question, QuestionDefinition, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a question definition
    Show {
        /// JSON file to load the question from
        file: PathBuf,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Select choices by id and print the ones that are correct
    Select {
        /// JSON file to load the question from
        file: PathBuf,

        /// Choice ids to select
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Answer the question interactively
    Answer {
        /// JSON file to load the question from
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args.command) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Show { file, json } => {
            let question = load_question_from_json(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            if json {
                let definition = QuestionDefinition::from(&question);
                println!("{}", serde_json::to_string_pretty(&definition)?);
            } else {
                print_question(&question);
            }
        }
        Command::Select { file, ids } => {
            let question = load_question_from_json(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let ids: Vec<ChoiceId> = ids.into_iter().map(ChoiceId::from).collect();
            let correct = question.select_choices(&ids)?;
            let correct: Vec<String> = correct.iter().map(|id| id.to_string()).collect();
            println!("{}", correct.join(" "));
        }
        Command::Answer { file } => {
            let session = Session::from_json(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let app = session.run()?;
            info!(
                selected = app.selected().len(),
                correct = app.correct().len(),
                "Session ended"
            );
        }
    }

    Ok(())
}

fn print_question(question: &Question) {
    println!("#{} {}", question.id(), question.title());
    println!(
        "points: {}  max selections: {}",
        question.points(),
        question.max_selections()
    );
    for choice in question.choices() {
        let marker = if choice.is_correct() { "*" } else { " " };
        println!("  {} {:>3}. {}", marker, choice.id(), choice.text());
    }
}
