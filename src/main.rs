use anyhow::Result;
use career_coach::speech::{CaptureSource, PlaybackSource, SpeechBackendFactory, SpeechSettings};
use career_coach::{
    AskOutcome, AssessmentClient, Config, InterviewSession, QuestionBank, Role, SessionConfig,
    SubmitOutcome,
};
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "career-coach", about = "Terminal AI interview coach")]
struct Args {
    /// Config file path, without extension
    #[arg(long, default_value = "config/career-coach")]
    config: String,

    /// Run the hands-free voice demo with scripted utterances
    #[arg(long)]
    voice: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let cfg = match Config::load(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("No config at {} ({}), using defaults", args.config, e);
            Config::default()
        }
    };

    info!("{} starting", cfg.service.name);
    info!("Assessment endpoint: {}", cfg.assessment.base_url);

    let assessor = Arc::new(AssessmentClient::new(&cfg.assessment)?);

    if args.voice {
        run_voice_demo(&cfg, assessor).await
    } else {
        run_text_interview(assessor).await
    }
}

/// Interactive text interview on stdin
async fn run_text_interview(assessor: Arc<AssessmentClient>) -> Result<()> {
    let session = InterviewSession::new(
        SessionConfig::with_session_id("interview-session"),
        assessor,
        QuestionBank::builtin(),
    );

    session.start().await;
    print_last_coach_entry(&session).await;
    println!("(type an answer, /next for the next question, /quit to finish)\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/next" => match session.ask_next_question().await {
                AskOutcome::Asked(_) => print_last_coach_entry(&session).await,
                AskOutcome::Exhausted => println!("Interview complete - no questions left.\n"),
            },
            "" => continue,
            answer => match session.submit_answer(answer).await {
                SubmitOutcome::Submitted => {
                    print_last_coach_entry(&session).await;
                    println!("Interview score: {:.0}%\n", session.aggregate_score().await);
                }
                outcome => warn!("Answer not submitted: {:?}", outcome),
            },
        }
    }

    let stats = session.stats().await;
    println!(
        "Session finished: {}/{} questions asked, {} answers, score {:.0}%",
        stats.questions_asked, stats.questions_total, stats.answers_given, stats.aggregate_score
    );

    Ok(())
}

/// Hands-free demo: scripted utterances stand in for the microphone and
/// the playback backend records what would have been spoken
async fn run_voice_demo(cfg: &Config, assessor: Arc<AssessmentClient>) -> Result<()> {
    let utterances = vec![
        "I have five years of experience building machine learning pipelines".to_string(),
        "Supervised learning trains on labeled data while unsupervised learning finds structure without labels".to_string(),
        "I would regularize the model and use cross validation to prevent overfitting".to_string(),
    ];

    let capture = Arc::from(SpeechBackendFactory::create_capture(CaptureSource::Scripted(
        utterances,
    )));
    let playback = Arc::from(SpeechBackendFactory::create_playback(
        PlaybackSource::Scripted,
        SpeechSettings {
            language: cfg.speech.language.clone(),
            rate: cfg.speech.rate,
            pitch: cfg.speech.pitch,
        },
    ));

    let session = InterviewSession::new(
        SessionConfig::with_session_id("session-123"),
        assessor,
        QuestionBank::builtin(),
    )
    .with_capture(capture)
    .with_playback(playback);

    session.start().await;

    while let Some(turn) = session.voice_turn().await {
        println!("You said: {}", turn.utterance);
        println!("Coach: {}\n", turn.responded_with);
    }

    println!("Voice demo finished, score {:.0}%", session.aggregate_score().await);

    Ok(())
}

async fn print_last_coach_entry(session: &InterviewSession) {
    let transcript = session.transcript().await;
    if let Some(entry) = transcript.iter().rev().find(|e| e.role == Role::Coach) {
        println!("\nCoach: {}\n", entry.content);
    }
}
