use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use fitcheck::bank::load_bank;
use fitcheck::config::{load_config, run_init, InitOutcome};
use fitcheck::scoring::assess;
use fitcheck::session::{apply_answers, Session};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the assessment interactively (default if no subcommand)
    Take,
    /// Score a set of answers without the TUI
    Score {
        /// Answer as QUESTION_ID=OPTION_ID; repeat for each question
        #[arg(short, long = "answer", value_name = "QUESTION=OPTION")]
        answers: Vec<String>,
    },
    /// Print every question and its options
    Questions,
    /// Write a starter config and an editable copy of the built-in questions
    Init {
        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "fitcheck")]
#[command(about = "Career-fit self assessment in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/fitcheck/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Question bank YAML to use instead of the configured or built-in one
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    fitcheck::logging::init(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Take);

    // Init needs neither config nor bank; `-c` picks where the config is written
    if let Commands::Init { force } = command {
        match run_init(cli.config.clone(), force) {
            Ok(InitOutcome::Written { config, bank }) => {
                println!("Wrote {}", config.display());
                println!("Wrote {}", bank.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Ok(InitOutcome::Aborted) => std::process::exit(EXIT_SUCCESS),
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    let loaded = match load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let bank_path = cli.bank.or_else(|| loaded.bank_path());
    let bank = match load_bank(bank_path.as_deref()) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            // Invalid banks list every problem found, one per line
            eprintln!("Question bank error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(
        title = %bank.title,
        questions = bank.total_questions(),
        "question bank ready"
    );

    let config = loaded.config;
    let use_colors = fitcheck::output::should_use_colors();

    match command {
        Commands::Take => {
            let theme = fitcheck::tui::resolve_theme(config.theme);
            let colors = fitcheck::tui::ThemeColors::for_theme(theme);
            let app = fitcheck::tui::App::new(bank, config.framework_aggregation, colors);
            if let Err(e) = fitcheck::tui::run_tui(app, config.tick_rate_ms).await {
                eprintln!("TUI error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
        Commands::Score { answers } => {
            let mut session = Session::new(Arc::clone(&bank));
            if let Err(e) = apply_answers(&mut session, &answers) {
                eprintln!("Invalid answer: {}", e);
                std::process::exit(EXIT_INPUT);
            }
            let assessment = assess(&bank, session.responses(), config.framework_aggregation);
            println!(
                "{}",
                fitcheck::output::format_report(
                    &bank,
                    &assessment,
                    session.responses().len(),
                    None,
                    use_colors,
                )
            );
        }
        Commands::Questions => {
            println!("{}", fitcheck::output::format_bank(&bank, use_colors));
        }
        // Handled before config loading
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
