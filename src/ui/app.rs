use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::ai::Player;
use crate::error::{GameError, MoveError};
use crate::game::{GameOutcome, GameState, COLS};

use super::view::View;

pub struct App {
    game_state: GameState,
    players: [Box<dyn Player>; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Set when a computer player fails; cleared by a restart.
    computer_failed: bool,
}

impl App {
    pub fn new(players: [Box<dyn Player>; 2]) -> Self {
        App {
            game_state: GameState::initial(),
            players,
            selected_column: 4, // Start in middle
            should_quit: false,
            message: None,
            computer_failed: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.computer_to_move() {
                self.play_computer_move();
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn current(&self) -> &dyn Player {
        self.players[self.game_state.current_player().index()].as_ref()
    }

    fn computer_to_move(&self) -> bool {
        !self.computer_failed && self.game_state.outcome().is_none() && !self.current().is_human()
    }

    fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.message = None;
                if self.selected_column > 1 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                self.message = None;
                if self.selected_column < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_column = 4;
                self.computer_failed = false;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human player's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game_state.outcome().is_some() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.computer_failed {
            self.message = Some("Computer cannot move. Press 'r' to restart.".to_string());
            return;
        }
        if !self.current().is_human() {
            self.message = Some(format!("Waiting for {}...", self.current().name()));
            return;
        }

        match self.game_state.apply_move(self.selected_column) {
            Ok(_) => {
                self.message = None;
                self.announce_outcome();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::ColumnOutOfRange(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
        }
    }

    fn play_computer_move(&mut self) {
        let side = self.game_state.current_player();
        let mut status = StatusView::default();
        let result = self.players[side.index()]
            .get_move(&self.game_state, &mut status)
            .and_then(|column| {
                self.game_state.apply_move(column)?;
                Ok(column)
            });

        match result {
            Ok(_) => {
                self.message = status.message;
                self.announce_outcome();
            }
            Err(err) => {
                tracing::error!(%err, "computer move failed");
                self.computer_failed = true;
                self.message = Some(format!(
                    "Computer move failed: {err}. Press 'r' to restart."
                ));
            }
        }
    }

    fn announce_outcome(&mut self) {
        let text = match self.game_state.outcome() {
            Some(GameOutcome::Winner(side)) => {
                format!("{} wins!", self.players[side.index()].name())
            }
            Some(GameOutcome::Draw) => "It's a draw!".to_string(),
            None => return,
        };
        tracing::info!(result = %text, "game over");
        self.message = Some(match self.message.take() {
            Some(last) => format!("{last}  |  {text}"),
            None => text,
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.names(),
        );
    }
}

/// Collects what a computer player reports so the UI can show it.
#[derive(Default)]
struct StatusView {
    message: Option<String>,
}

impl View for StatusView {
    fn display(&mut self, _state: &GameState, _names: [&str; 2]) -> Result<(), GameError> {
        Ok(())
    }

    fn get_user_move(&mut self, _state: &GameState, name: &str) -> Result<usize, GameError> {
        Err(GameError::NoInput(name.to_string()))
    }

    fn report_move(&mut self, column: usize, name: &str) {
        self.message = Some(format!("{name} drops in {column}"));
    }

    fn report(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn get_answer(&mut self, question: &str) -> Result<String, GameError> {
        Err(GameError::NoInput(question.to_string()))
    }

    fn get_int_answer(&mut self, question: &str) -> Result<i64, GameError> {
        Err(GameError::NoInput(question.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{ComputerPlayer, HumanPlayer};
    use crate::error::SearchError;
    use crossterm::event::KeyModifiers;

    /// A computer seat whose search always fails.
    struct BrokenComputer;

    impl Player for BrokenComputer {
        fn get_move(
            &mut self,
            _state: &GameState,
            _view: &mut dyn View,
        ) -> Result<usize, GameError> {
            Err(SearchError::BoardFull.into())
        }

        fn name(&self) -> &str {
            "Broken"
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn human_vs_computer() -> App {
        App::new([
            Box::new(HumanPlayer::new("Ann")),
            Box::new(ComputerPlayer::new("Computer", 2)),
        ])
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = human_vs_computer();
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Left));
        }
        assert_eq!(app.selected_column, 1);
        for _ in 0..10 {
            app.handle_key(key(KeyCode::Right));
        }
        assert_eq!(app.selected_column, COLS);
    }

    #[test]
    fn test_human_drop_then_computer_replies() {
        let mut app = human_vs_computer();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game_state.board().empty_count(), 41);
        assert!(app.computer_to_move());

        // Human keys are ignored while the computer is to move.
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game_state.board().empty_count(), 41);

        app.play_computer_move();
        assert_eq!(app.game_state.board().empty_count(), 40);
        assert!(app.message.as_deref().unwrap().starts_with("Computer drops in"));
        assert!(!app.computer_to_move());
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new([
            Box::new(HumanPlayer::new("Ann")),
            Box::new(HumanPlayer::new("Bob")),
        ]);
        app.selected_column = 1;
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Enter));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = human_vs_computer();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.game_state, GameState::initial());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_win_is_announced() {
        let mut app = App::new([
            Box::new(HumanPlayer::new("Ann")),
            Box::new(HumanPlayer::new("Bob")),
        ]);
        for column in [1, 2, 1, 2, 1, 2, 1] {
            app.selected_column = column;
            app.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(app.message.as_deref(), Some("Ann wins!"));
        assert!(!app.computer_to_move());
    }

    #[test]
    fn test_failed_computer_is_not_asked_again() {
        let mut app = App::new([
            Box::new(BrokenComputer),
            Box::new(HumanPlayer::new("Bob")),
        ]);
        assert!(app.computer_to_move());
        app.play_computer_move();
        assert!(!app.computer_to_move());
        assert_eq!(app.game_state, GameState::initial());
        assert!(app
            .message
            .as_deref()
            .unwrap()
            .starts_with("Computer move failed"));

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(
            app.message.as_deref(),
            Some("Computer cannot move. Press 'r' to restart.")
        );

        // A restart gives the computer another turn.
        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.computer_to_move());
    }
}
