//! Game session state for the Tic-Tac-Toe GUI
//!
//! The session walks through `Menu -> NameEntry -> InProgress -> GameOver`
//! and back to `Menu` on reset. It owns the board and both players; the
//! view only feeds it pointer input and keystrokes once per frame.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::player::{ComputerPlayer, HumanPlayer, Player, PointerInput};
use crate::rules::{outcome_after_move, GameOutcome, Line};
use crate::{Board, Mark, Pos};

/// Longest name accepted by the name entry popup
pub const MAX_NAME_LEN: usize = 16;

/// Who is playing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// One human against the minimax player
    VsComputer,
    /// Two humans sharing the mouse
    VsFriend,
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    /// Typing the name of the human playing `entering`
    NameEntry { mode: GameMode, entering: Mark },
    InProgress,
    GameOver(GameOutcome),
}

/// One side of a running game
enum Seat {
    Human(HumanPlayer),
    Computer(ComputerPlayer),
}

impl Seat {
    fn player(&self) -> &dyn Player {
        match self {
            Seat::Human(p) => p,
            Seat::Computer(p) => p,
        }
    }

    fn player_mut(&mut self) -> &mut dyn Player {
        match self {
            Seat::Human(p) => p,
            Seat::Computer(p) => p,
        }
    }

    /// Does this seat wait for pointer input
    fn is_interactive(&self) -> bool {
        matches!(self, Seat::Human(_))
    }

    fn last_search(&self) -> Option<&MoveResult> {
        match self {
            Seat::Human(_) => None,
            Seat::Computer(p) => p.last_result(),
        }
    }
}

/// The two seats of a running game
struct Seats {
    x: Seat,
    o: Seat,
}

impl Seats {
    fn get(&self, mark: Mark) -> &Seat {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn get_mut(&mut self, mark: Mark) -> &mut Seat {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub phase: Phase,
    pub mode: GameMode,
    pub current_turn: Mark,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
    /// Text typed into the name popup so far
    pub name_input: String,

    seats: Option<Seats>,
    pending_x_name: String,
    /// Set after a move made while the button was held; cleared on release
    hold_until_release: bool,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Menu,
            mode: GameMode::VsComputer,
            current_turn: Mark::X,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            suggested_move: None,
            message: None,
            name_input: String::new(),
            seats: None,
            pending_x_name: String::new(),
            hold_until_release: false,
            config,
        }
    }

    /// Clear the board and go back to the menu
    pub fn reset(&mut self) {
        self.board.reset();
        self.phase = Phase::Menu;
        self.current_turn = Mark::X;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.suggested_move = None;
        self.message = None;
        self.name_input.clear();
        self.seats = None;
        self.pending_x_name.clear();
        self.hold_until_release = false;
        info!("session reset, back to menu");
    }

    /// Mark the computer plays in vs-computer games
    pub fn computer_mark(&self) -> Mark {
        self.config.computer_mark()
    }

    // ---- menu and name entry ----

    /// Menu choice: open the name popup for the first human.
    pub fn select_mode(&mut self, mode: GameMode) {
        if self.phase != Phase::Menu {
            return;
        }
        let entering = match mode {
            GameMode::VsComputer => self.computer_mark().opponent(),
            GameMode::VsFriend => Mark::X,
        };
        self.mode = mode;
        self.name_input.clear();
        self.pending_x_name.clear();
        self.phase = Phase::NameEntry { mode, entering };
        debug!(?mode, %entering, "name entry");
    }

    /// Append a typed character to the name being entered
    pub fn push_name_char(&mut self, ch: char) {
        if !matches!(self.phase, Phase::NameEntry { .. }) {
            return;
        }
        if ch.is_control() || self.name_input.chars().count() >= MAX_NAME_LEN {
            return;
        }
        self.name_input.push(ch);
    }

    pub fn pop_name_char(&mut self) {
        if matches!(self.phase, Phase::NameEntry { .. }) {
            self.name_input.pop();
        }
    }

    /// Abandon name entry
    pub fn cancel_name_entry(&mut self) {
        if matches!(self.phase, Phase::NameEntry { .. }) {
            self.name_input.clear();
            self.pending_x_name.clear();
            self.phase = Phase::Menu;
        }
    }

    /// Enter pressed in the name popup.
    ///
    /// Vs computer this starts the game. Vs friend the first confirmation
    /// moves on to O's name and the second starts the game.
    pub fn confirm_name(&mut self) {
        let Phase::NameEntry { mode, entering } = self.phase else {
            return;
        };
        let name = self.resolve_name(entering);
        self.name_input.clear();

        match (mode, entering) {
            (GameMode::VsFriend, Mark::X) => {
                self.pending_x_name = name;
                self.phase = Phase::NameEntry {
                    mode,
                    entering: Mark::O,
                };
            }
            (GameMode::VsFriend, Mark::O) => {
                let x_name = std::mem::take(&mut self.pending_x_name);
                self.start_game(mode, x_name, name);
            }
            (GameMode::VsComputer, human) => {
                let computer = self.config.computer_name.clone();
                let (x_name, o_name) = match human {
                    Mark::X => (name, computer),
                    Mark::O => (computer, name),
                };
                self.start_game(mode, x_name, o_name);
            }
        }
    }

    fn resolve_name(&self, mark: Mark) -> String {
        let typed = self.name_input.trim();
        if typed.is_empty() {
            self.config.default_name(mark).to_string()
        } else {
            typed.to_string()
        }
    }

    /// Start a fresh game with the given names.
    pub fn start_game(&mut self, mode: GameMode, x_name: String, o_name: String) {
        let computer_mark = self.computer_mark();
        let make = |mark: Mark, name: String| {
            if mode == GameMode::VsComputer && mark == computer_mark {
                Seat::Computer(ComputerPlayer::new(mark, name))
            } else {
                Seat::Human(HumanPlayer::new(mark, name))
            }
        };

        self.board.reset();
        self.mode = mode;
        self.current_turn = Mark::X;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.suggested_move = None;
        self.message = None;
        self.hold_until_release = false;
        info!(?mode, x = %x_name, o = %o_name, "game started");
        self.seats = Some(Seats {
            x: make(Mark::X, x_name),
            o: make(Mark::O, o_name),
        });
        self.phase = Phase::InProgress;
    }

    // ---- play ----

    pub fn is_in_progress(&self) -> bool {
        self.phase == Phase::InProgress
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Name of the player holding `mark`, once a game has started
    pub fn player_name(&self, mark: Mark) -> Option<&str> {
        self.seats.as_ref().map(|s| s.get(mark).player().name())
    }

    /// Check if the player to move takes pointer input
    pub fn is_human_turn(&self) -> bool {
        self.is_in_progress()
            && self
                .seats
                .as_ref()
                .is_some_and(|s| s.get(self.current_turn).is_interactive())
    }

    /// Advance the game by one frame.
    ///
    /// Asks the player to move for a decision. On a placement the outcome is
    /// checked for the mark that just moved (win first, then draw) and the
    /// turn passes otherwise. Returns the placed position.
    pub fn tick(&mut self, input: &PointerInput) -> Option<Pos> {
        if !self.is_in_progress() {
            return None;
        }
        if !input.held {
            self.hold_until_release = false;
        }
        let interactive = self.is_human_turn();
        if interactive && self.hold_until_release {
            return None;
        }

        let mark = self.current_turn;
        let seats = self.seats.as_mut()?;
        let seat = seats.get_mut(mark);
        let pos = seat.player_mut().decide_move(&mut self.board, input)?;
        if !interactive {
            self.last_ai_result = seat.last_search().cloned();
        }

        self.record_move(pos, mark);
        if interactive && input.held {
            self.hold_until_release = true;
        }
        Some(pos)
    }

    fn record_move(&mut self, pos: Pos, mark: Mark) {
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        debug!(%mark, ?pos, board = %self.board, "move committed");

        match outcome_after_move(&self.board, mark) {
            Some(outcome) => {
                self.phase = Phase::GameOver(outcome);
                info!(?outcome, moves = self.move_history.len(), "game over");
            }
            None => self.current_turn = mark.opponent(),
        }
    }

    /// Ask the engine what the side to move should play, without playing it.
    pub fn request_hint(&mut self) {
        if !self.is_human_turn() {
            return;
        }
        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&mut self.board, self.current_turn);
        self.suggested_move = result.best_move;
        self.message = Some(format!("Hint: {} ({})", describe(result.best_move), result.verdict()));
        self.last_ai_result = Some(result);
    }

    // ---- presentation ----

    /// "{name}'s Turn" while a game runs
    pub fn turn_text(&self) -> Option<String> {
        if !self.is_in_progress() {
            return None;
        }
        self.player_name(self.current_turn)
            .map(|name| format!("{name}'s Turn"))
    }

    /// Result line for the game over panel
    pub fn result_text(&self) -> Option<String> {
        let Phase::GameOver(outcome) = self.phase else {
            return None;
        };
        Some(match outcome {
            GameOutcome::Drawn => "It's a draw!".to_string(),
            GameOutcome::Won(mark)
                if self.mode == GameMode::VsComputer && mark == self.computer_mark() =>
            {
                "AI won!".to_string()
            }
            GameOutcome::Won(mark) => {
                let name = self.player_name(mark).unwrap_or("Someone");
                format!("{name} won!")
            }
        })
    }

    /// Completed line to highlight after a win
    pub fn winning_line(&self) -> Option<Line> {
        match self.phase {
            Phase::GameOver(GameOutcome::Won(mark)) => self.board.winning_line(mark),
            _ => None,
        }
    }

    /// Prompt shown above the name field
    pub fn name_prompt(&self) -> Option<&'static str> {
        match self.phase {
            Phase::NameEntry {
                mode: GameMode::VsComputer,
                ..
            } => Some("Enter your name:"),
            Phase::NameEntry {
                entering: Mark::X, ..
            } => Some("Enter Player X name:"),
            Phase::NameEntry {
                entering: Mark::O, ..
            } => Some("Enter Player O name:"),
            _ => None,
        }
    }
}

fn describe(pos: Option<Pos>) -> String {
    match pos {
        Some(p) => format!("row {}, column {}", p.row + 1, p.col + 1),
        None => "no move".to_string(),
    }
}
