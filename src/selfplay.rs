//! Plays bot-vs-bot episodes of Connect X and tallies the outcomes.
use clap::Parser;
use connectx::engine::chip::Chip;
use connectx::engine::player::{Player, PlayerKind};
use connectx::session::{GameSession, GameSettings, Outcome};
use rand::Rng;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Deserialize)]
struct SelfplaySettings {
    rows: usize,
    columns: usize,
    in_a_row: usize,
    episodes: usize,
    players: Vec<String>,
}

enum Episode {
    Winner(usize),
    Tie,
}

fn run_episode(settings: &SelfplaySettings) -> Episode {
    let players: Vec<Player> = settings
        .players
        .iter()
        .enumerate()
        .map(|(seat, name)| Player::new(name.clone(), Chip::PALETTE[seat], PlayerKind::Bot))
        .collect();
    let mut session = GameSession::new(
        GameSettings {
            rows: settings.rows,
            columns: settings.columns,
            in_a_row: settings.in_a_row,
        },
        players,
    );

    while !session.is_over() {
        let legal = session.legal_columns();
        let column = legal[rand::thread_rng().gen_range(0..legal.len())];
        log::debug!(
            "{} plays column {}",
            session.active_player().name(),
            column
        );
        session.drop_chip(column);
    }

    match session.outcome() {
        Some(Outcome::Won(winner)) => {
            let seat = session
                .players()
                .iter()
                .position(|player| player == winner)
                .expect("The winner sits at the board");
            Episode::Winner(seat)
        }
        _ => Episode::Tie,
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config_file = fs::read_to_string(&args.config_file).expect("Failed to read config file");
    let settings: SelfplaySettings =
        serde_json::from_str(&config_file).expect("Failed to parse config file");
    assert!(
        settings.players.len() >= 2 && settings.players.len() <= Chip::PALETTE.len(),
        "Between 2 and {} players can sit at a board",
        Chip::PALETTE.len()
    );

    let mut wins = vec![0usize; settings.players.len()];
    let mut ties = 0usize;
    for episode in 0..settings.episodes {
        log::info!("Starting episode {}", episode);
        match run_episode(&settings) {
            Episode::Winner(seat) => wins[seat] += 1,
            Episode::Tie => ties += 1,
        }
    }

    println!("Player\tWins\tPercentage");
    for (seat, count) in wins.iter().enumerate() {
        println!(
            "{}\t{}\t{:>5.2}%",
            settings.players[seat],
            count,
            (100.0 * *count as f64) / settings.episodes as f64
        );
    }
    println!(
        "Ties\t{}\t{:>5.2}%",
        ties,
        (100.0 * ties as f64) / settings.episodes as f64
    );
}
