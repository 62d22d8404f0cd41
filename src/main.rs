use std::io::{stdin, stdout};
use std::process::ExitCode;

use tabula::chess_board::fen::INITIAL_POSITION;
use tabula::chess_board::{is_checkmated, is_in_check, Coordinate, Move, NameFormat};
use tabula::game::{cli, expand_notation, Game};

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use log::LevelFilter;
use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() -> ExitCode {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play").about("Play a game on the terminal").arg(
                arg!(
                -f --fen <FEN> "Board position"
                        )
                .default_value(INITIAL_POSITION),
            ),
        )
        .subcommand(
            Command::new("moves")
                .about("List the legal destinations of one piece")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(arg!(
                    -s --square <square> "Square of the piece, e.g. e2"
                ).required(true)),
        )
        .subcommand(
            Command::new("replay")
                .about("Validate a sequence of moves")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves, e.g. e2e4 e7e5"
                            )
                    .num_args(1..)
                    .required(true)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    env_logger::Builder::new()
        .filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => play(fen_argument(arg_matches)),
        Some(("moves", arg_matches)) => {
            let square = arg_matches.get_one::<String>("square").map(String::as_str).unwrap_or_default();
            moves(fen_argument(arg_matches), square)
        }
        Some(("replay", arg_matches)) => {
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            replay(fen_argument(arg_matches), moves)
        }
        None => play(INITIAL_POSITION),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

fn fen_argument(arg_matches: &ArgMatches) -> &str {
    arg_matches.get_one::<String>("fen").map(String::as_str).unwrap_or(INITIAL_POSITION)
}

fn play(fen: &str) -> Result<(), String> {
    let mut game = Game::from_fen(fen).map_err(|e| e.to_string())?;
    cli::run(&mut game, stdin().lock(), &mut stdout()).map_err(|e| e.to_string())
}

#[derive(Tabled)]
struct DestinationRow {
    destination: String,
    strategy: String,
    check: bool,
    checkmate: bool,
    description: String,
}

fn moves(fen: &str, square: &str) -> Result<(), String> {
    let game = Game::from_fen(fen).map_err(|e| e.to_string())?;
    let from = Coordinate::from_algebraic(square).map_err(|e| e.to_string())?;
    let side = game.turn();

    let mut table_rows = Vec::new();
    for to in game.legal_destinations(from) {
        let (mv, description) =
            Move::new(game.board(), side, &format!("{} {}", from, to)).map_err(|e| e.to_string())?;
        let check = is_in_check(game.board(), &mv, side.opposite());
        table_rows.push(DestinationRow {
            destination: to.as_algebraic(),
            strategy: mv.strategy.to_string(),
            check,
            checkmate: check && is_checkmated(game.board(), &mv, side.opposite()),
            description,
        });
    }

    if table_rows.is_empty() {
        println!("No legal moves from {} for {}", from, side.name(NameFormat::Verbose));
    } else {
        println!("{}", Table::new(table_rows).with(Style::modern()));
    }
    Ok(())
}

#[derive(Tabled)]
struct ReplayRow {
    ply: usize,
    side: String,
    notation: String,
    verdict: String,
    check: bool,
    checkmate: bool,
}

fn replay(fen: &str, moves: Vec<&String>) -> Result<(), String> {
    let mut game = Game::from_fen(fen).map_err(|e| e.to_string())?;
    let mut table_rows = Vec::new();

    for (ply, m) in moves.into_iter().enumerate() {
        let notation = expand_notation(m);
        let side = game.turn().name(NameFormat::Verbose).to_string();
        match game.play(&notation) {
            Ok(outcome) => table_rows.push(ReplayRow {
                ply: ply + 1,
                side,
                notation,
                verdict: outcome.description,
                check: outcome.check,
                checkmate: outcome.checkmate,
            }),
            Err(e) => {
                table_rows.push(ReplayRow {
                    ply: ply + 1,
                    side,
                    notation,
                    verdict: format!("rejected ({}): {}", e.reason(), e),
                    check: false,
                    checkmate: false,
                });
                break;
            }
        }
    }

    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("{}", game.board().render_to_string());
    println!("FEN: {}", game.to_fen());
    if let Some(result) = game.result() {
        println!("{}", result);
    }
    Ok(())
}
