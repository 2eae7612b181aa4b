//! CLI entrypoint for echoq
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use echoq_application::{
    ApplyOutcome, InMemorySessionStore, ModerateQuestionUseCase, QuestionCollection,
    RequestHelper, SessionStorePort,
};
use echoq_domain::{CardIntent, Filter, QuestionId, SessionToken};
use echoq_infrastructure::{ConfigLoader, FileConfig, FileSessionStore, ReqwestHttpClient, logging};
use echoq_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, RequestSpinner, TokenCommand, TuiApp,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        eprintln!("warning: {}", issue.message);
    }
    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }

    // Initialize logging: the TUI owns the terminal, so it logs to a file
    let _log_guard = match cli.command {
        None => match config.logging.resolved_directory() {
            Some(dir) => Some(
                logging::init_file(cli.verbose, &dir)
                    .with_context(|| format!("Cannot create log directory {}", dir.display()))?,
            ),
            None => None,
        },
        Some(_) => {
            logging::init_stderr(cli.verbose);
            None
        }
    };

    info!("Starting echoq");

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let session = session_store(&config);
    let client = ReqwestHttpClient::new(config.api.base_url.clone(), config.api.timeout())
        .context("Failed to build HTTP client")?;
    let helper = RequestHelper::new(Arc::new(client), session.clone(), config.api.to_api_params());

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
    );
    let formatter = ConsoleFormatter::new(output);

    let Some(command) = cli.command else {
        // Interactive feed
        let mut app = TuiApp::new(helper, config.feed_params());
        app.run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    let succeeded = match command {
        Command::List { filter } => {
            let filter = Filter::from(filter);
            let spinner = RequestSpinner::start(format!("Loading {} questions...", filter), cli.quiet);
            let mut collection = QuestionCollection::new();
            let outcome = collection.get_questions(&helper, filter).await;
            spinner.clear();
            print_fetch(&formatter, &collection, filter, outcome)
        }
        Command::Search { term, filter } => {
            let filter = Filter::from(filter);
            let spinner = RequestSpinner::start(format!("Searching \"{}\"...", term), cli.quiet);
            let mut collection = QuestionCollection::new();
            let outcome = if term.trim().is_empty() {
                collection.get_questions(&helper, filter).await
            } else {
                collection.search_question(&helper, &term, filter).await
            };
            spinner.clear();
            print_fetch(&formatter, &collection, filter, outcome)
        }
        Command::Answer { id, response, show } => {
            let intent = CardIntent::Edit {
                question_id: QuestionId::new(id),
                show,
                response,
            };
            moderate(&formatter, &helper, intent, cli.quiet).await
        }
        Command::Visibility { id, show } => {
            let intent = CardIntent::Turn {
                question_id: QuestionId::new(id),
                show,
            };
            moderate(&formatter, &helper, intent, cli.quiet).await
        }
        Command::Delete { id } => {
            let intent = CardIntent::Delete {
                question_id: QuestionId::new(id),
            };
            moderate(&formatter, &helper, intent, cli.quiet).await
        }
        Command::Token { action } => {
            manage_token(&formatter, session.as_ref(), action)?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// File-backed session store, or an in-memory one when no data directory exists
fn session_store(config: &FileConfig) -> Arc<dyn SessionStorePort> {
    match config.session.resolved_path() {
        Some(path) => Arc::new(FileSessionStore::new(path)),
        None => {
            warn!("No data directory available; the session token will not be persisted");
            Arc::new(InMemorySessionStore::new())
        }
    }
}

fn print_fetch(
    formatter: &ConsoleFormatter,
    collection: &QuestionCollection,
    filter: Filter,
    outcome: ApplyOutcome,
) -> bool {
    match outcome {
        ApplyOutcome::Applied { .. } => {
            println!("{}", formatter.format_questions(collection.questions()));
            true
        }
        ApplyOutcome::Failed(e) => {
            eprintln!("{}", formatter.format_fetch_error(filter, &e));
            false
        }
        // Only one request is ever in flight here
        ApplyOutcome::Stale => false,
    }
}

async fn moderate(
    formatter: &ConsoleFormatter,
    helper: &RequestHelper,
    intent: CardIntent,
    quiet: bool,
) -> bool {
    let spinner = RequestSpinner::start(
        format!("{} question {}...", intent.action(), intent.question_id()),
        quiet,
    );
    let outcome = ModerateQuestionUseCase::new(helper.clone())
        .execute(intent)
        .await;
    spinner.clear();

    let text = formatter.format_outcome(&outcome);
    if outcome.succeeded() {
        println!("{}", text);
    } else {
        eprintln!("{}", text);
    }
    outcome.succeeded()
}

fn manage_token(
    formatter: &ConsoleFormatter,
    session: &dyn SessionStorePort,
    action: TokenCommand,
) -> Result<()> {
    match action {
        TokenCommand::Set { token } => {
            let token = SessionToken::new(token)?;
            session.set(&token)?;
            println!("Session token stored ({})", token.masked());
        }
        TokenCommand::Show { reveal } => {
            println!("{}", formatter.format_token(session.get().as_ref(), reveal));
        }
        TokenCommand::Clear => {
            session.clear()?;
            println!("Session token cleared");
        }
    }
    Ok(())
}
