//! A text session around one [`GameState`].

use chess_core::Move;
use chess_engine::{GameState, MoveOutcome};
use std::io::{self, BufRead, Write};

/// What the interactive loop should do after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Applies moves to a game and reports the results to `out`.
pub struct Session<W> {
    game: GameState,
    out: W,
    quiet: bool,
}

impl<W: Write> Session<W> {
    /// With `quiet` set the board is only printed on request.
    pub fn new(game: GameState, out: W, quiet: bool) -> Self {
        Session { game, out, quiet }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Applies one move and reports the outcome. Rejected moves leave the
    /// game unchanged and are reported, not returned as errors.
    pub fn play(&mut self, m: Move) -> io::Result<Option<MoveOutcome>> {
        let mover = self.game.turn();
        match self.game.apply(m) {
            Ok(outcome) => {
                match &outcome {
                    MoveOutcome::Applied => writeln!(self.out, "{} plays {}", mover, m)?,
                    MoveOutcome::Check(color) => {
                        writeln!(self.out, "{} plays {}: {} is in check", mover, m, color)?
                    }
                    MoveOutcome::Checkmate { loser, final_board } => {
                        writeln!(self.out, "{} plays {}: checkmate, {} loses", mover, m, loser)?;
                        write!(self.out, "{}", final_board)?;
                        writeln!(self.out, "new game")?;
                    }
                }
                self.show_board(false)?;
                Ok(Some(outcome))
            }
            Err(reason) => {
                tracing::warn!(%m, %reason, "move rejected");
                writeln!(self.out, "{} rejected: {}", m, reason)?;
                Ok(None)
            }
        }
    }

    /// Replays a list of moves, continuing past rejected ones.
    pub fn replay(&mut self, moves: &[Move]) -> io::Result<()> {
        for &m in moves {
            self.play(m)?;
        }
        Ok(())
    }

    /// Handles one line of interactive input.
    pub fn command(&mut self, line: &str) -> io::Result<Flow> {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "board" => self.show_board(true)?,
            "moves" => {
                let moves: Vec<String> = self
                    .game
                    .legal_moves()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(self.out, "{}", moves.join(" "))?;
            }
            "reset" => {
                self.game.reset();
                writeln!(self.out, "new game")?;
                self.show_board(false)?;
            }
            text => match text.parse::<Move>() {
                Ok(m) => {
                    self.play(m)?;
                }
                Err(e) => writeln!(self.out, "{}", e)?,
            },
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until it ends or `quit` is entered.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.show_board(false)?;
        for line in input.lines() {
            if self.command(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn show_board(&mut self, forced: bool) -> io::Result<()> {
        if forced || !self.quiet {
            write!(self.out, "{}", self.game.render())?;
            writeln!(self.out, "{} to move", self.game.turn())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::Color;

    fn session() -> Session<Vec<u8>> {
        Session::new(GameState::new(), Vec::new(), true)
    }

    fn output(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.out).unwrap()
    }

    #[test]
    fn reports_applied_move() {
        let mut s = session();
        let outcome = s.play("e2e4".parse().unwrap()).unwrap();
        assert_eq!(outcome, Some(MoveOutcome::Applied));
        assert_eq!(s.game().turn(), Color::Black);
        assert_eq!(output(s), "White plays e2e4\n");
    }

    #[test]
    fn reports_rejection_and_continues() {
        let mut s = session();
        let moves: Vec<Move> = ["e7e5", "e2e4"].iter().map(|m| m.parse().unwrap()).collect();
        s.replay(&moves).unwrap();

        assert_eq!(s.game().move_history().len(), 1);
        let text = output(s);
        assert!(text.starts_with("e7e5 rejected: "));
        assert!(text.ends_with("White plays e2e4\n"));
    }

    #[test]
    fn reports_checkmate_with_final_board() {
        let mut s = Session::new(
            GameState::from_notation("6k1/5ppp/8/8/8/8/8/R5K1 w").unwrap(),
            Vec::new(),
            true,
        );
        s.play("a1a8".parse().unwrap()).unwrap();

        assert_eq!(s.game(), &GameState::new());
        let text = output(s);
        assert!(text.starts_with("White plays a1a8: checkmate, Black loses\n"));
        assert!(text.contains("8║♜◻◼◻◼◻♔◻║"));
        assert!(text.ends_with("new game\n"));
    }

    #[test]
    fn interactive_commands() {
        let mut s = session();
        let input = "moves\ne2e4\nnonsense\nboard\nreset\nquit\ne7e5\n";
        s.run(input.as_bytes()).unwrap();

        assert_eq!(s.game(), &GameState::new());
        let text = output(s);
        let first = text.lines().next().unwrap();
        assert_eq!(first.split(' ').count(), 20);
        assert!(text.contains("White plays e2e4\n"));
        assert!(text.contains("Black to move\n"));
        assert!(text.contains("new game\n"));
        assert!(!text.contains("e7e5"));
    }
}
