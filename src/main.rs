use rand::seq::IndexedRandom;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whosaid::{config::SessionConfig, session::GameSession, types::GamePhase};

const BOTS: usize = 4;
const MAX_ROUNDS: u32 = 20;

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whosaid=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SessionConfig::from_env();
    tracing::info!("Simulating a table of {} bots with {:?}", BOTS, config);

    let mut session = GameSession::new(config);
    for seat in 0..BOTS {
        let name = petname::petname(1, "-").unwrap_or_else(|| format!("bot-{}", seat + 1));
        if let Err(e) = session.join(&name) {
            tracing::warn!("Could not seat {}: {}", name, e);
        }
    }

    if let Err(e) = session.begin() {
        tracing::error!("Could not start the game: {}", e);
        return;
    }

    loop {
        play_round(&mut session).await;

        let board = session.scoreboard();
        for standing in &board.standings {
            tracing::info!(
                "#{} {} {} point(s){}",
                standing.rank,
                standing.name,
                standing.score,
                if standing.eliminated { " (out)" } else { "" }
            );
        }

        if board.round_number >= MAX_ROUNDS {
            tracing::info!("Stopping after {} rounds", board.round_number);
            break;
        }
        match session.play_again() {
            Ok(()) => {}
            Err(e) => {
                tracing::info!("{}", e);
                break;
            }
        }
    }
}

/// Every bot writes, then the table guesses at random until the scoreboard
async fn play_round(session: &mut GameSession) {
    while let Some(writer) = session.current_writer() {
        let text = format!(
            "{} says {}",
            writer.name,
            petname::petname(3, " ").unwrap_or_default()
        );
        if let Err(e) = session.submit_phrase(&text) {
            tracing::error!("Phrase rejected: {}", e);
            return;
        }
    }

    while session.state().phase == GamePhase::GuessPhase {
        let ids: Vec<_> = session.state().players.iter().map(|p| p.id.clone()).collect();
        let Some(guess) = ids.choose(&mut rand::rng()).cloned() else {
            return;
        };
        if let Err(e) = session.confirm_vote(&guess).await {
            tracing::error!("Vote rejected: {}", e);
            return;
        }
    }
}
