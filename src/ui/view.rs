use std::io::{self, BufRead, Write};

use crate::config::PlayerConfig;
use crate::error::GameError;
use crate::game::{GameState, Side, COLS};

/// How a game talks to the people playing it.
pub trait View {
    /// Show the board and which mark belongs to whom.
    fn display(&mut self, state: &GameState, names: [&str; 2]) -> Result<(), GameError>;

    /// Ask `name` for a column. The answer is already a legal move in `state`.
    fn get_user_move(&mut self, state: &GameState, name: &str) -> Result<usize, GameError>;

    /// Tell everyone which column a player chose.
    fn report_move(&mut self, column: usize, name: &str);

    /// Show a free-form message.
    fn report(&mut self, message: &str);

    fn get_answer(&mut self, question: &str) -> Result<String, GameError>;

    /// Ask until the answer parses as an integer.
    fn get_int_answer(&mut self, question: &str) -> Result<i64, GameError>;
}

/// Line-oriented view over any reader and writer, e.g. stdin and stdout.
pub struct TextView<R, W> {
    input: R,
    output: W,
}

impl TextView<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        TextView::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextView<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TextView { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask for one player's name, and a look-ahead depth if the name makes
    /// it a computer player.
    pub fn prompt_player(&mut self, label: &str) -> Result<PlayerConfig, GameError> {
        let name = self.get_answer(&format!(
            "Enter the name of the {label} player.\n(Include 'Computer' in the name of a computer player) "
        ))?;
        let name = name.trim().to_string();

        if name.contains("Computer") {
            loop {
                let depth = self.get_int_answer("How far should I look ahead?")?;
                match u32::try_from(depth) {
                    Ok(depth) => return Ok(PlayerConfig::computer(name, depth)),
                    Err(_) => self.report("Look-ahead must be zero or more"),
                }
            }
        }
        Ok(PlayerConfig::human(name))
    }
}

impl<R: BufRead, W: Write> View for TextView<R, W> {
    fn display(&mut self, state: &GameState, names: [&str; 2]) -> Result<(), GameError> {
        for side in [Side::X, Side::O] {
            writeln!(self.output, "{}  for  {}", side.symbol(), names[side.index()])?;
        }
        write!(self.output, "{}", state.board())?;
        let labels: String = (1..=COLS).map(|c| c.to_string()).collect();
        writeln!(self.output, "{labels}")?;
        self.output.flush()?;
        Ok(())
    }

    fn get_user_move(&mut self, state: &GameState, name: &str) -> Result<usize, GameError> {
        writeln!(self.output)?;
        let mut answer = self.get_int_answer(&format!("Column to drop, {name}?"))?;
        loop {
            match usize::try_from(answer) {
                Ok(column) if state.is_valid_move(column) => return Ok(column),
                _ => {
                    self.report("Illegal move.  Try again.");
                    answer = self.get_int_answer("Column to drop?")?;
                }
            }
        }
    }

    fn report_move(&mut self, column: usize, name: &str) {
        self.report(&format!("\n{name} drops in {column}"));
    }

    fn report(&mut self, message: &str) {
        // Reports are best effort; a closed stdout should not end the game.
        let _ = writeln!(self.output, "{message}");
        let _ = self.output.flush();
    }

    fn get_answer(&mut self, question: &str) -> Result<String, GameError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn get_int_answer(&mut self, question: &str) -> Result<i64, GameError> {
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            // Only the first token counts; the rest of the line is dropped.
            match line.split_whitespace().next().map(str::parse::<i64>) {
                Some(Ok(n)) => return Ok(n),
                _ => self.report("That was not a valid integer"),
            }
        }
    }
}
