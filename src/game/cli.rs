use super::{expand_notation, Game};
use crate::chess_board::NameFormat;
use log::debug;
use std::io::{self, BufRead, Write};

/// Interactive loop: render the board, prompt the side to move and play what
/// it types until the game ends, the input runs dry or the player types `exit`.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, output: &mut W) -> io::Result<()> {
    let mut lines = input.lines();

    while !game.is_over() {
        writeln!(output, "{}", game.board().render_to_string())?;
        write!(output, "{} to move: ", game.turn().name(NameFormat::Verbose))?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();

        match line {
            "" => continue,
            "exit" | "quit" => break,
            "resign" => {
                if let Ok(result) = game.resign() {
                    writeln!(output, "{}", result)?;
                }
            }
            _ => match game.play(&expand_notation(line)) {
                Ok(outcome) => {
                    writeln!(output, "{}", outcome.description)?;
                    if outcome.checkmate {
                        if let Some(result) = game.result() {
                            writeln!(output, "{}", result)?;
                        }
                    } else if outcome.check {
                        writeln!(output, "check!")?;
                    }
                }
                Err(e) => {
                    debug!("rejected input '{}': {}", line, e.reason());
                    writeln!(output, "{}. Please try again.", e)?;
                }
            },
        }
    }

    if game.is_over() {
        writeln!(output, "{}", game.board().render_to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_board::Color;

    fn session(game: &mut Game, input: &str) -> String {
        let mut output = Vec::new();
        run(game, input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_stops_the_loop() {
        let mut game = Game::new();
        let output = session(&mut game, "e2e4\nexit\ne7 e5\n");
        assert!(output.contains("white ○ Pawn moved to e4"));
        assert!(output.contains("black ● to move: "));
        assert!(!output.contains("black ● Pawn moved to e5"));
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_errors_reprompt_the_same_side() {
        let mut game = Game::new();
        let output = session(&mut game, "e2 e5\nhello\n\ne2 e4\n");
        assert!(output.contains("illegal move: the piece cannot move that way. Please try again."));
        assert!(output.contains("invalid move syntax 'hello'"));
        assert_eq!(output.matches("white ○ to move: ").count(), 4);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_check_and_checkmate_are_announced() {
        let mut game = Game::from_fen("6k1/8/6K1/8/8/8/8/R7 w").unwrap();
        let output = session(&mut game, "a1 a8\ng8 h8\n");
        assert!(output.contains("checkmate! white ○ wins"));
        assert!(!output.contains("check!\n"));
        assert!(game.is_over());

        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/R3K3 w").unwrap();
        let output = session(&mut game, "a1 a8\n");
        assert!(output.contains("check!"));
        assert!(!game.is_over());
    }

    #[test]
    fn test_resign() {
        let mut game = Game::new();
        let output = session(&mut game, "resign\ne2 e4\n");
        assert!(output.contains("white ○ resigns, black ● wins"));
        assert!(!output.contains("moved to"));
    }
}
