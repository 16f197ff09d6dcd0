use std::fmt;
use std::io::{self, BufRead, Write};

use dotenvy::dotenv;
use services::{FinishReason, QuestionSource, QuizSession, QuizSummary};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_TOPIC: &str = "General Knowledge";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    EmptyTopic,
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::EmptyTopic => write!(f, "--topic must not be empty"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--topic <text>] [--offline]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --topic <text>   Quiz topic (default: {DEFAULT_TOPIC})");
    eprintln!("  --offline        Skip question generation and use the built-in set");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HUGGINGFACE_API_TOKEN, QUIZ_HF_BASE_URL, QUIZ_HF_MODEL,");
    eprintln!("  QUIZ_HF_TIMEOUT_SECS, QUIZ_TOPIC, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    topic: String,
    offline: bool,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_topic: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut topic = env_topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TOPIC.into());
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--topic" => {
                    let value = require_value(args, "--topic")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyTopic);
                    }
                    topic = value.trim().to_string();
                }
                "--offline" => offline = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { topic, offline }))
    }
}

/// How the terminal loop ended.
#[derive(Debug, PartialEq, Eq)]
enum PlayEnd {
    Finished(QuizSummary),
    Abandoned,
}

/// Drive a started session from line-based input until it ends or the player quits.
fn play(
    session: &mut QuizSession,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<PlayEnd> {
    loop {
        if let Some(summary) = session.summary() {
            return Ok(PlayEnd::Finished(summary));
        }
        let Some(question) = session.current_question() else {
            return Ok(PlayEnd::Abandoned);
        };

        let progress = session.progress();
        writeln!(out)?;
        writeln!(
            out,
            "[Question {}/{} | {} | {} pts | Score {}]",
            progress.current_question_number,
            progress.total_questions,
            progress.level,
            progress.level.points(),
            progress.score
        )?;
        writeln!(out, "{}", question.text())?;
        for (key, option) in question.options() {
            writeln!(out, "  {key}) {option}")?;
        }
        write!(out, "Your answer (a-d, or quit): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(PlayEnd::Abandoned);
        }
        let choice = line.trim();
        if choice.eq_ignore_ascii_case("quit") {
            return Ok(PlayEnd::Abandoned);
        }

        let outcome = session.submit_answer(choice);
        if outcome.correct {
            writeln!(out, "{} +{} points", outcome.message(), outcome.points_earned)?;
        } else {
            writeln!(out, "{}", outcome.message())?;
        }
    }
}

fn print_results(summary: &QuizSummary, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Results")?;
    writeln!(
        out,
        "  Score: {}/{} ({}%)",
        summary.score,
        summary.max_score,
        summary.percentage()
    )?;
    writeln!(
        out,
        "  Correct answers: {}/{}",
        summary.correct_count, summary.total_questions
    )?;
    match summary.reason {
        FinishReason::Completed if summary.is_perfect() => writeln!(out, "  Perfect game!")?,
        FinishReason::Completed => writeln!(out, "  All questions answered.")?,
        FinishReason::WrongAnswer => writeln!(
            out,
            "  Game over on question {}.",
            summary.correct_count + 1
        )?,
        FinishReason::OutOfQuestions => writeln!(out, "  Ran out of questions.")?,
    }
    writeln!(out, "  Time: {}s", summary.duration().num_seconds())?;
    Ok(())
}

/// Ask whether to start another game. EOF or anything but `y`/`yes` means no.
fn ask_play_again(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<bool> {
    writeln!(out)?;
    write!(out, "Play again? (y/n): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    let reply = line.trim();
    Ok(reply.eq_ignore_ascii_case("y") || reply.eq_ignore_ascii_case("yes"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = log_fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, std::env::var("QUIZ_TOPIC").ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    info!(topic = %args.topic, offline = args.offline, "launching quiz");
    let source = if args.offline {
        QuestionSource::offline()
    } else {
        QuestionSource::from_env()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stdin = io::stdin();
    let mut input = stdin.lock();
    writeln!(out, "Quiz Master: {}", args.topic)?;

    let mut session = QuizSession::new();
    loop {
        writeln!(out, "Loading questions...")?;
        out.flush()?;
        session.start(&source, &args.topic).await;

        match play(&mut session, &mut input, &mut out)? {
            PlayEnd::Finished(summary) => print_results(&summary, &mut out)?,
            PlayEnd::Abandoned => {
                writeln!(
                    out,
                    "\nQuiz abandoned after {}s. Score: {}",
                    session.elapsed().num_seconds(),
                    session.score()
                )?;
                break;
            }
        }
        if !ask_play_again(&mut input, &mut out)? {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine.
    dotenv().ok();
    init_tracing();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
