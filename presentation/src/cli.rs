use application::chat_service::{ChatService, TurnReply};
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::session::{Session, ROLE_ASSISTANT, ROLE_USER};
use infrastructure::config::Config;
use rand::seq::IndexedRandom;
use shared::error::ChatError;
use shared::telemetry::TurnTimer;
use shared::types::Result;
use std::path::PathBuf;

const SUGGESTION_COUNT: usize = 5;

#[derive(Parser)]
#[command(name = "mitra_cli")]
#[command(about = "V-Mitra FAQ assistant: retrieval-backed chat over the app knowledge base")]
pub struct Cli {
    /// Ask a single question and exit
    #[arg(long)]
    pub ask: Option<String>,

    /// Path to the knowledge base document
    #[arg(long)]
    pub kb: Option<PathBuf>,

    /// Hide related question suggestions after each answer
    #[arg(long)]
    pub no_related: bool,
}

pub struct ChatApp;

impl ChatApp {
    pub async fn run(cli: Cli) -> Result<()> {
        let mut config = Config::load()?;
        if let Some(kb) = cli.kb {
            config.kb_path = kb;
        }
        let service = ChatService::start(&config).await?;

        if let Some(question) = cli.ask {
            return Self::one_shot(&service, question.trim(), !cli.no_related).await;
        }
        Self::chat_loop(&service, !cli.no_related).await
    }

    async fn one_shot(service: &ChatService, query: &str, show_related: bool) -> Result<()> {
        if query.is_empty() {
            println!("{}", "Nothing to ask.".yellow());
            return Ok(());
        }
        let reply = service.answer(query).await?;
        Self::print_reply(&reply, show_related);
        Ok(())
    }

    async fn chat_loop(service: &ChatService, show_related: bool) -> Result<()> {
        let mut session = Session::new("local".to_string());

        println!("{}", "V-Mitra assistant. Type 'exit' to quit.".green());
        let mut offered = Self::sample_suggestions(service.questions(), SUGGESTION_COUNT);
        println!("\n{}", "Suggested questions".blue().bold());
        Self::print_numbered(&offered);

        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("You")
                .interact_text()?;
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("exit") {
                break;
            }
            if trimmed.is_empty() {
                continue;
            }

            // A bare number picks from the last offered suggestions.
            let query = Self::resolve_choice(trimmed, &offered)
                .unwrap_or_else(|| trimmed.to_string());

            session.add_message(ROLE_USER, &query);
            let timer = TurnTimer::start();
            match service.answer(&query).await {
                Ok(reply) => {
                    Self::print_reply(&reply, show_related);
                    println!(
                        "{}",
                        format!("({:.1}s)", timer.elapsed().as_secs_f32()).dimmed()
                    );
                    if show_related && !reply.related.is_empty() {
                        offered = reply.related.clone();
                    }
                    session.add_message(ROLE_ASSISTANT, &reply.answer);
                }
                Err(e @ ChatError::CompletionRequest(_)) | Err(e @ ChatError::Embedding(_)) => {
                    // The turn failed; no assistant entry, session continues.
                    println!("{}", format!("Error: {e}").red());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn print_reply(reply: &TurnReply, show_related: bool) {
        println!("\n{}", "Answer".green().bold());
        println!("{}\n", reply.answer);

        println!("{}", "Used context".blue().bold());
        println!("  Q: {}", reply.context.pair.question);
        println!("  A: {}", reply.context.pair.answer);

        if show_related && !reply.related.is_empty() {
            println!("\n{}", "Related questions".blue().bold());
            Self::print_numbered(&reply.related);
        }
    }

    fn print_numbered(questions: &[String]) {
        for (i, q) in questions.iter().enumerate() {
            println!("  {} {}", format!("[{}]", i + 1).blue(), q);
        }
    }

    fn sample_suggestions(questions: &[String], count: usize) -> Vec<String> {
        let mut rng = rand::rng();
        questions
            .choose_multiple(&mut rng, count.min(questions.len()))
            .cloned()
            .collect()
    }

    fn resolve_choice(input: &str, offered: &[String]) -> Option<String> {
        let n: usize = input.parse().ok()?;
        if n >= 1 && n <= offered.len() {
            Some(offered[n - 1].clone())
        } else {
            None
        }
    }
}
