//! Kosmos application binary - composition root.
//!
//! Ties the crates together into a single executable:
//! 1. Load configuration from TOML
//! 2. Initialize tracing
//! 3. Resolve the requested topic from the catalog
//! 4. Wire the HTTP answering service into a conversation manager
//! 5. Run an interactive question loop on stdin

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use kosmos_answer::HttpAnswerService;
use kosmos_catalog::Topic;
use kosmos_chat::{Author, Conversation, ConversationManager, TurnStatus};
use kosmos_core::{KosmosConfig, KosmosError, Result, Subject};

#[derive(Parser)]
#[command(name = "kosmos", about = "Topic-scoped study assistant")]
struct Cli {
    /// Path to the configuration file. Defaults to ~/.kosmos/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List catalog topics.
    Topics {
        /// Restrict to one subject: physics, chemistry, or biology.
        #[arg(long)]
        subject: Option<String>,
    },
    /// Open a conversation about a topic.
    Chat {
        /// Topic slug, as shown by `kosmos topics`.
        topic_id: String,
    },
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".kosmos")
        .join("config.toml")
}

fn run_topics(subject: Option<String>) -> Result<()> {
    let topics = match subject {
        Some(name) => {
            let subject: Subject = name.parse()?;
            kosmos_catalog::by_subject(subject)
        }
        None => kosmos_catalog::catalog(),
    };

    if topics.is_empty() {
        println!("No topics found.");
        return Ok(());
    }
    for topic in topics {
        println!("{:<12} {:<10} {}", topic.id, topic.subject.to_string(), topic.title);
    }
    Ok(())
}

async fn run_chat(config: &KosmosConfig, topic_id: &str) -> Result<()> {
    let topic: Topic = kosmos_catalog::find(topic_id)
        .ok_or_else(|| KosmosError::Catalog(format!("unknown topic: {topic_id}")))?;

    let service = HttpAnswerService::from_config(&config.answer)?;
    let manager = ConversationManager::new(service)
        .with_max_question_chars(config.chat.max_question_chars)
        .with_answer_timeout(Duration::from_secs(config.answer.timeout_secs));

    let mut conversation = manager.create_conversation(topic.title.clone(), topic.context());
    tracing::info!(topic = %topic.id, "chat session started");

    println!("{}. Type a question, or /quit to leave.", topic.title);
    let mut printed = render_new_turns(&conversation, 0);

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input == "/quit" || input == "/exit" {
            break;
        }
        match manager.submit_question(&mut conversation, input).await {
            Ok(()) => printed = render_new_turns(&conversation, printed),
            Err(e) => println!("({e})"),
        }
        prompt()?;
    }

    tracing::info!(
        topic = %topic.id,
        turns = conversation.turns().len(),
        "chat session ended"
    );
    Ok(())
}

/// Print transcript turns appended since the last render; returns the new
/// high-water mark.
fn render_new_turns(conversation: &Conversation, from: usize) -> usize {
    for turn in &conversation.turns()[from..] {
        let who = match turn.author {
            Author::User => "you",
            Author::Assistant => "assistant",
        };
        let marker = match turn.status {
            TurnStatus::Ok => "",
            TurnStatus::Error => " [error]",
        };
        println!(
            "[{}] {}{}: {}",
            turn.created_at.to_rfc3339(),
            who,
            marker,
            turn.text
        );
    }
    conversation.turns().len()
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = KosmosConfig::load_or_default(&config_path);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Command::Topics { subject } => run_topics(subject),
        Command::Chat { topic_id } => run_chat(&config, &topic_id).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
