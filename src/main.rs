mod bank;
mod engine;
mod evaluation;
mod pacing;
mod render;
mod store;

use anyhow::Context;
use futures_util::{StreamExt, pin_mut};
use itertools::Itertools;
use serde::Deserialize;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Duration;
use structopt::StructOpt;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use bank::QuestionBank;
use engine::{Delays, IndexSource, InterviewEngine, Submission};
use pacing::Pacing;
use store::{DiskSessionStore, Session, SessionStore};

#[derive(Deserialize, Debug)]
struct Environment {
    reply_delay_ms: Option<u64>,
    follow_up_delay_ms: Option<u64>,
    store_dir: Option<PathBuf>,
}

impl Environment {
    fn delays(&self) -> Delays {
        let defaults = Delays::default();
        Delays {
            reply: self
                .reply_delay_ms
                .map_or(defaults.reply, Duration::from_millis),
            follow_up: self
                .follow_up_delay_ms
                .map_or(defaults.follow_up, Duration::from_millis),
        }
    }
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "interview-rehearsal",
    about = "Rehearse a job interview against role-specific questions"
)]
struct Args {
    /// Path to a question bank TOML file (defaults to the built-in bank)
    #[structopt(short, long)]
    bank: Option<PathBuf>,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Create the interview session to practice
    New {
        /// Target role, e.g. "Frontend Developer"
        #[structopt(short, long)]
        role: String,

        /// Years of experience
        #[structopt(short, long)]
        experience: String,

        /// Resume file (only its name is used)
        #[structopt(long)]
        resume: PathBuf,

        /// Job description file (only its name is used)
        #[structopt(short = "j", long)]
        job_description: PathBuf,
    },

    /// Practice the stored interview session
    Practice {
        /// Reply pacing (realtime or instant)
        #[structopt(short, long, default_value = "realtime")]
        pace: Pacing,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let environment = envy::prefixed("INTERVIEW_")
        .from_env::<Environment>()
        .context("Failed to read INTERVIEW_* environment variables")?;
    let args = Args::from_args();

    let bank = match &args.bank {
        Some(path) => QuestionBank::load(path).await?,
        None => QuestionBank::builtin(),
    };
    let store = DiskSessionStore::new(environment.store_dir.clone()).await?;

    match args.command {
        Command::New {
            role,
            experience,
            resume,
            job_description,
        } => create_session(&bank, &store, &role, &experience, &resume, &job_description).await,
        Command::Practice { pace } => {
            let mut engine = InterviewEngine::new(environment.delays());
            let mut answers = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));

            interruptible(
                practice(&bank, &store, &mut engine, &mut answers, pace),
                tokio::signal::ctrl_c(),
            )
            .await
        }
    }
}

/// Reads lines on a plain thread so a pending read never holds up runtime
/// shutdown. The channel closes at end of input.
fn spawn_line_reader<B: BufRead + Send + 'static>(reader: B) -> mpsc::Receiver<String> {
    let (sender, receiver) = mpsc::channel(16);

    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if sender.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "Failed to read answer");
                    break;
                }
            }
        }
    });

    receiver
}

async fn interruptible<F, I>(work: F, interrupt: I) -> anyhow::Result<()>
where
    F: Future<Output = anyhow::Result<()>>,
    I: Future,
{
    tokio::select! {
        result = work => result,
        _ = interrupt => {
            tracing::info!("Interrupted, discarding pending replies");
            Ok(())
        }
    }
}

async fn create_session(
    bank: &QuestionBank,
    store: &impl SessionStore,
    role: &str,
    experience: &str,
    resume: &Path,
    job_description: &Path,
) -> anyhow::Result<()> {
    for path in [resume, job_description] {
        tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Cannot access `{}`", path.display()))?;
    }

    let session = Session::new(role, experience, Some(resume), Some(job_description))?;

    if !bank.contains(&session.role) {
        tracing::warn!(
            role = %session.role,
            known = %bank.roles().join(", "),
            "Role is not in the question bank, the default role will be used"
        );
    }

    store.set(&session).await?;

    println!(
        "Session created: {} (experience: {}).",
        session.role, session.experience
    );

    Ok(())
}

async fn practice<R: IndexSource>(
    bank: &QuestionBank,
    store: &impl SessionStore,
    engine: &mut InterviewEngine<R>,
    answers: &mut mpsc::Receiver<String>,
    pacing: Pacing,
) -> anyhow::Result<()> {
    engine.start(bank, store).await;
    tracing::debug!(
        role = engine.role(),
        questions = ?engine.selected_questions().collect::<Vec<_>>(),
        keywords = ?engine.selected_keywords().collect::<Vec<_>>(),
        "Questions selected"
    );

    for message in engine.transcript() {
        println!("{}", render::format_message(message));
    }

    while !engine.is_complete() {
        println!("{}", render::input_prompt(engine.awaiting_elaboration()));

        let Some(answer) = answers.recv().await else {
            break;
        };

        if engine.submit_answer(&answer) == Submission::Ignored {
            continue;
        }

        let replies = pacing::deliveries(&mut *engine, pacing);
        pin_mut!(replies);
        while let Some(message) = replies.next().await {
            println!("{}", render::format_message(&message));
        }
    }

    tracing::debug!(
        answered = engine.current_question_index(),
        total = engine.question_count(),
        "Practice finished"
    );

    Ok(())
}
