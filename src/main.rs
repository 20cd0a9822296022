use clap::{Parser, ValueEnum};
use connectx::engine::board::Position;
use connectx::engine::chip::Chip;
use connectx::engine::event::EventRecord;
use connectx::engine::player::{Player, PlayerKind};
use connectx::session::{GameSession, GameSettings, Outcome};
use rand::Rng;
use std::io;

const SEAT_NAMES: [&str; 6] = ["Red", "Yellow", "Green", "Blue", "Purple", "Orange"];
const SEAT_GLYPHS: [&str; 6] = ["●", "◯", "◆", "◇", "▲", "△"];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeatKind {
    H,
    B,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seats in play order: h for a human, b for a bot
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_enum,
        num_args = 1..,
        default_values_t = [SeatKind::H, SeatKind::B]
    )]
    players: Vec<SeatKind>,

    #[arg(long, default_value_t = 6)]
    rows: usize,

    #[arg(long, default_value_t = 7)]
    columns: usize,

    /// Chips that must line up to win
    #[arg(short, long, default_value_t = 4)]
    in_a_row: usize,

    /// Print the event transcript as JSON lines when the game ends
    #[arg(long)]
    transcript: bool,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

enum Turn {
    Drop(usize),
    Undo,
    Redo,
    Quit,
}

fn print_board(session: &GameSession) {
    let board = session.board();
    for column in 0..board.columns() {
        print!("{}", column % 10);
    }
    print!("\n");
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let chip = board.chip_at(Position { row, column });
            let glyph = session
                .players()
                .iter()
                .position(|player| player.chip() == chip)
                .map(|seat| SEAT_GLYPHS[seat])
                .unwrap_or("◌");
            print!("{}", glyph);
        }
        print!("\n");
    }
}

fn read_turn(player: &Player) -> Turn {
    loop {
        println!("{}: column number, u(ndo), r(edo) or q(uit)", player.name());
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        match input.trim() {
            "u" => return Turn::Undo,
            "r" => return Turn::Redo,
            "q" => return Turn::Quit,
            text => match text.parse() {
                Ok(column) => return Turn::Drop(column),
                Err(_) => println!("Could not read {:?} as a turn", text),
            },
        }
    }
}

fn print_transcript(records: Vec<EventRecord>) {
    for record in records {
        println!(
            "{} {}",
            record.at.format("%Y-%m-%d %H:%M:%S%.3f"),
            serde_json::to_string(&record.event).expect("Failed to serialize event")
        );
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.players.len() < 2 || args.players.len() > Chip::PALETTE.len() {
        eprintln!(
            "Between 2 and {} players can sit at a board",
            Chip::PALETTE.len()
        );
        std::process::exit(2);
    }

    let players: Vec<Player> = args
        .players
        .iter()
        .enumerate()
        .map(|(seat, kind)| {
            Player::new(
                SEAT_NAMES[seat],
                Chip::PALETTE[seat],
                match kind {
                    SeatKind::H => PlayerKind::Human,
                    SeatKind::B => PlayerKind::Bot,
                },
            )
        })
        .collect();

    let settings = GameSettings {
        rows: args.rows,
        columns: args.columns,
        in_a_row: args.in_a_row,
    };
    let mut session = GameSession::new(settings, players);

    while !session.is_over() {
        print_board(&session);
        let player = session.active_player().clone();
        if player.is_managed() {
            let legal = session.legal_columns();
            let column = legal[rand::thread_rng().gen_range(0..legal.len())];
            println!("{} plays column {}", player.name(), column);
            session.drop_chip(column);
        } else {
            match read_turn(&player) {
                Turn::Drop(column) => {
                    if !session.drop_chip(column) {
                        println!("Column {} is not playable", column);
                    }
                }
                Turn::Undo => {
                    if !session.undo() {
                        println!("Nothing to undo");
                    }
                }
                Turn::Redo => {
                    if !session.redo() {
                        println!("Nothing to redo");
                    }
                }
                Turn::Quit => return,
            }
        }
    }

    print_board(&session);
    match session.outcome() {
        Some(Outcome::Won(winner)) => println!("{} wins!", winner.name()),
        Some(Outcome::Tied) => println!("The board is full: tie game"),
        None => {}
    }

    if args.transcript {
        print_transcript(session.events().drain());
    }
}
