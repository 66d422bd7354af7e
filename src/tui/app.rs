//! Application state and key handling.

use super::input;
use crossterm::event::KeyCode;
use timetoe_rules::{Dimension, Game, MoveEntry, Order};
use tracing::{debug, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: usize,
    order: Order,
    message: Option<String>,
    /// Digits typed so far for a multi-digit jump.
    pending_jump: Option<usize>,
}

impl App {
    /// Creates an application on an empty board.
    pub fn new(dimension: Dimension, order: Order) -> Self {
        Self::with_game(Game::new(dimension), order)
    }

    /// Creates an application around an existing game.
    pub fn with_game(game: Game, order: Order) -> Self {
        let cursor = input::center(game.dimension());
        Self {
            game,
            cursor,
            order,
            message: None,
            pending_jump: None,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Direction of the move list.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Status line: the last refusal, if any, otherwise the game status.
    pub fn status_message(&self) -> String {
        match &self.message {
            Some(message) => format!("{} ({})", self.game.status(), message),
            None => self.game.status().to_string(),
        }
    }

    /// Move list in the current order.
    pub fn timeline(&self) -> Vec<MoveEntry> {
        self.game.timeline(self.order)
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        self.message = None;
        let pending_jump = self.pending_jump.take();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => self.play_cursor(),
            KeyCode::Char('[') | KeyCode::PageUp => self.step_back(),
            KeyCode::Char(']') | KeyCode::PageDown => self.step_forward(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    self.type_jump_digit(pending_jump, digit as usize);
                }
            }
            KeyCode::Char('t') => {
                self.order = self.order.toggled();
                debug!(order = %self.order, "Toggled move list order");
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(bigger) = self.game.dimension().grow() {
                    self.resize(bigger);
                }
            }
            KeyCode::Char('-') => {
                if let Some(smaller) = self.game.dimension().shrink() {
                    self.resize(smaller);
                }
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.cursor = input::center(self.game.dimension());
            }
            other => {
                self.cursor = input::move_cursor(self.cursor, self.game.dimension(), other);
            }
        }
        Control::Continue
    }

    fn play_cursor(&mut self) {
        if let Err(e) = self.game.play(self.cursor) {
            self.message = Some(e.to_string());
        }
    }

    fn jump_to(&mut self, target: usize) -> bool {
        match self.game.jump_to(target) {
            Ok(_) => true,
            Err(e) => {
                self.message = Some(e.to_string());
                false
            }
        }
    }

    /// Extends the typed move number by one digit and jumps there.
    ///
    /// Digits accumulate while the number still names a move, so "1" "2"
    /// reaches move 12. Any other key, or a number past the end, starts over.
    fn type_jump_digit(&mut self, pending: Option<usize>, digit: usize) {
        let extended = pending
            .and_then(|typed| typed.checked_mul(10))
            .and_then(|typed| typed.checked_add(digit))
            .filter(|&target| target < self.game.history().len());
        let target = extended.unwrap_or(digit);
        debug!(move_index = target, "Jumping to typed move");
        if self.jump_to(target) {
            self.pending_jump = Some(target);
        }
    }

    fn step_back(&mut self) {
        let current = self.game.history().current_move();
        if current > 0 {
            self.jump_to(current - 1);
        }
    }

    fn step_forward(&mut self) {
        let current = self.game.history().current_move();
        if !self.game.history().is_at_latest() {
            self.jump_to(current + 1);
        }
    }

    fn resize(&mut self, dimension: Dimension) {
        self.game.resize(dimension);
        self.cursor = input::center(dimension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetoe_rules::{Player, Square};

    /// A 4x4 game twelve plies long with no completed line.
    fn twelve_move_game() -> Game {
        let mut game = Game::new(Dimension::new(4).unwrap());
        for index in [0, 1, 2, 3, 5, 4, 6, 7, 8, 9, 11, 10] {
            game.play(index).unwrap();
        }
        game
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            assert_eq!(app.handle_key(key), Control::Continue);
        }
    }

    #[test]
    fn test_play_at_cursor() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(
            app.game().board().get(4),
            Ok(Square::Occupied(Player::X))
        );
        assert_eq!(app.status_message(), "Next player: O");
    }

    #[test]
    fn test_refused_move_shows_reason() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(
            app.status_message(),
            "Next player: O (Square 4 is already occupied)"
        );
        // The message clears on the next key.
        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.status_message(), "Next player: O");
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Enter, KeyCode::Left, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.game().history().current_move(), 0);
        press(&mut app, &[KeyCode::Char('['), KeyCode::PageDown]);
        assert_eq!(app.game().history().current_move(), 1);
    }

    #[test]
    fn test_digit_jump_out_of_range() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Char('7')]);
        assert!(app.status_message().contains("out of range"));
    }

    #[test]
    fn test_multi_digit_jump() {
        let mut app = App::with_game(twelve_move_game(), Order::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        assert_eq!(app.game().history().current_move(), 12);

        // "1" then "3": 13 does not exist, so the 3 starts a new number.
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('3')]);
        assert_eq!(app.game().history().current_move(), 3);
        assert_eq!(app.status_message(), "Next player: O");
    }

    #[test]
    fn test_other_keys_end_typed_number() {
        let mut app = App::with_game(twelve_move_game(), Order::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('['), KeyCode::Char('1')]);
        assert_eq!(app.game().history().current_move(), 1);
    }

    #[test]
    fn test_resize_keys_clamp() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Char('-')]);
        assert_eq!(u8::from(app.game().dimension()), 3);
        press(&mut app, &[KeyCode::Char('+'), KeyCode::Char('+'), KeyCode::Char('+')]);
        assert_eq!(u8::from(app.game().dimension()), 5);
        assert_eq!(app.cursor(), 12);
    }

    #[test]
    fn test_toggle_order() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('t')]);
        let indices: Vec<usize> = app.timeline().iter().map(|e| e.move_index).collect();
        assert_eq!(indices, vec![1, 0]);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Dimension::CLASSIC, Order::Ascending);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
    }
}
