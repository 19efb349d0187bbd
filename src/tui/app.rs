//! Application state and key handling for the terminal UI.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use crossterm::event::KeyCode;
use noughts_core::{GameEngine, GameEvent, Observer, PlayerEntry, Roster, SetupRule};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{debug, info, instrument, warn};

use crate::db::{RecordSink, record_summary};
use crate::input::{move_cursor, parse_cell};

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuItem {
    /// Go to player setup.
    #[strum(to_string = "Start Game")]
    StartGame,
    /// Leave the application.
    #[strum(to_string = "Quit")]
    Quit,
}

/// Text fields of the setup form, in focus order.
pub const SETUP_FIELDS: [&str; 4] = [
    "Player 1 Name",
    "Player 1 Symbol (1 letter)",
    "Player 2 Name",
    "Player 2 Symbol (1 letter)",
];

/// Player details being typed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupForm {
    /// Raw entries for both players.
    pub entries: [PlayerEntry; 2],
    /// Focused field, index into [`SETUP_FIELDS`].
    pub focus: usize,
    /// Last validation error.
    pub error: Option<String>,
}

impl SetupForm {
    /// Text of field `index`.
    pub fn field(&self, index: usize) -> &str {
        let entry = &self.entries[index / 2];
        if index % 2 == 0 { &entry.name } else { &entry.symbol }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        let entry = &mut self.entries[index / 2];
        if index % 2 == 0 {
            &mut entry.name
        } else {
            &mut entry.symbol
        }
    }
}

/// Screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu.
    Menu {
        /// Highlighted entry.
        selected: MenuItem,
    },
    /// Player setup form.
    Setup(SetupForm),
    /// Game in progress.
    Playing {
        /// Highlighted cell.
        cursor: usize,
        /// Feedback for the last key, e.g. a rejected move.
        message: Option<String>,
    },
    /// Finished game.
    GameOver {
        /// Result line.
        result: String,
    },
}

/// What the renderer needs to know about engine changes.
#[derive(Debug, Default)]
pub struct RenderState {
    /// Frame must be redrawn.
    pub dirty: bool,
    /// Cell of the most recent move.
    pub last_move: Option<usize>,
}

/// Marks the frame dirty and remembers the last move.
struct RedrawObserver(Rc<RefCell<RenderState>>);

impl Observer for RedrawObserver {
    fn update(&mut self, event: &GameEvent) {
        let mut state = self.0.borrow_mut();
        state.dirty = true;
        if let GameEvent::MoveMade { cell, .. } = event {
            state.last_move = Some(*cell);
        }
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    screen: Screen,
    render: Rc<RefCell<RenderState>>,
    sink: Box<dyn RecordSink>,
    should_quit: bool,
}

impl App {
    /// Creates the application on the main menu.
    pub fn new(sink: Box<dyn RecordSink>) -> Self {
        let render = Rc::new(RefCell::new(RenderState {
            dirty: true,
            last_move: None,
        }));
        let mut engine = GameEngine::default();
        engine.subscribe(RedrawObserver(Rc::clone(&render)));
        Self {
            engine,
            screen: Screen::Menu {
                selected: MenuItem::StartGame,
            },
            render,
            sink,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Cell of the most recent move in the current game.
    pub fn last_move(&self) -> Option<usize> {
        self.render.borrow().last_move
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns and clears the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.render.borrow_mut().dirty)
    }

    /// Forces a redraw, e.g. after a terminal resize.
    pub fn mark_dirty(&mut self) {
        self.render.borrow_mut().dirty = true;
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let screen = std::mem::replace(
            &mut self.screen,
            Screen::Menu {
                selected: MenuItem::StartGame,
            },
        );
        self.screen = match screen {
            Screen::Menu { selected } => self.on_menu_key(selected, key),
            Screen::Setup(form) => self.on_setup_key(form, key),
            Screen::Playing { cursor, message } => self.on_playing_key(cursor, message, key),
            Screen::GameOver { result } => self.on_game_over_key(result, key),
        };
        self.mark_dirty();
    }

    fn on_menu_key(&mut self, selected: MenuItem, key: KeyCode) -> Screen {
        let items: Vec<MenuItem> = MenuItem::iter().collect();
        let position = items.iter().position(|i| *i == selected).unwrap_or(0);
        match key {
            KeyCode::Up => Screen::Menu {
                selected: items[(position + items.len() - 1) % items.len()],
            },
            KeyCode::Down => Screen::Menu {
                selected: items[(position + 1) % items.len()],
            },
            KeyCode::Enter => match selected {
                MenuItem::StartGame => {
                    debug!("Opening player setup");
                    Screen::Setup(self.setup_form())
                }
                MenuItem::Quit => {
                    self.should_quit = true;
                    Screen::Menu { selected }
                }
            },
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Screen::Menu { selected }
            }
            _ => Screen::Menu { selected },
        }
    }

    /// Empty form, or the previous players when they were set up before.
    fn setup_form(&self) -> SetupForm {
        let players = self.engine.players();
        if *players == Roster::default() {
            return SetupForm::default();
        }
        let entries = [players.first(), players.second()]
            .map(|p| PlayerEntry::new(p.name().clone(), p.symbol().to_string()));
        SetupForm {
            entries,
            ..SetupForm::default()
        }
    }

    fn on_setup_key(&mut self, mut form: SetupForm, key: KeyCode) -> Screen {
        let fields = SETUP_FIELDS.len();
        match key {
            KeyCode::Esc => {
                return Screen::Menu {
                    selected: MenuItem::StartGame,
                };
            }
            KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % fields,
            KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + fields - 1) % fields,
            KeyCode::Backspace => {
                form.field_mut(form.focus).pop();
            }
            KeyCode::Char(c) => form.field_mut(form.focus).push(c),
            KeyCode::Enter => match Roster::from_entries(&form.entries[0], &form.entries[1]) {
                Ok(roster) => {
                    info!(first = %roster.first(), second = %roster.second(), "Starting game");
                    self.engine.set_players(roster);
                    self.render.borrow_mut().last_move = None;
                    return Screen::Playing {
                        cursor: 4,
                        message: None,
                    };
                }
                Err(e) => {
                    debug!(error = %e, "Setup rejected");
                    let symbol_field = !matches!(
                        e.rule,
                        SetupRule::EmptyName | SetupRule::NonAlphabeticName
                    );
                    form.focus = e.slot.index() * 2 + usize::from(symbol_field);
                    form.error = Some(e.to_string());
                }
            },
            _ => {}
        }
        Screen::Setup(form)
    }

    fn on_playing_key(&mut self, cursor: usize, message: Option<String>, key: KeyCode) -> Screen {
        let target = match key {
            KeyCode::Esc => {
                info!("Game abandoned");
                return Screen::Menu {
                    selected: MenuItem::StartGame,
                };
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                return Screen::Playing {
                    cursor: move_cursor(cursor, key),
                    message,
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => cursor,
            KeyCode::Char(c) => match parse_cell(&c.to_string()) {
                Ok(cell) => cell,
                Err(e) => {
                    return Screen::Playing {
                        cursor,
                        message: Some(format!("Invalid input: {e}")),
                    };
                }
            },
            _ => return Screen::Playing { cursor, message },
        };

        if let Err(e) = self.engine.make_move(target) {
            return Screen::Playing {
                cursor: target,
                message: Some(format!("Invalid move: {e}")),
            };
        }

        match self.engine.summary() {
            Some(summary) => {
                let mut result = summary.outcome.result_text();
                if let Err(e) =
                    record_summary(self.sink.as_mut(), &summary, Local::now().naive_local())
                {
                    warn!(error = %e, "Could not record finished game");
                    result = format!("{result} (not saved: {})", e.message);
                }
                Screen::GameOver { result }
            }
            None => Screen::Playing {
                cursor: target,
                message: None,
            },
        }
    }

    fn on_game_over_key(&mut self, result: String, key: KeyCode) -> Screen {
        match key {
            KeyCode::Char('r') => {
                debug!("Rematch");
                self.engine.reset();
                self.render.borrow_mut().last_move = None;
                Screen::Playing {
                    cursor: 4,
                    message: None,
                }
            }
            KeyCode::Char('m') | KeyCode::Esc => Screen::Menu {
                selected: MenuItem::StartGame,
            },
            KeyCode::Char('q') => {
                self.should_quit = true;
                Screen::GameOver { result }
            }
            _ => Screen::GameOver { result },
        }
    }
}
