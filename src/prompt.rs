//! Line-based front end: menu, player setup and game loop over any
//! reader/writer pair.

use std::cell::RefCell;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Result;
use chrono::Local;
use noughts_core::{GameEngine, GameEvent, Observer, PlayerEntry, PlayerSlot, Roster, SetupRule};
use tracing::{debug, info, instrument, warn};

use crate::db::{RecordSink, record_summary};
use crate::input::parse_cell;

/// Games listed by the history menu entry.
const HISTORY_LINES: usize = 10;

/// Prints the board whenever the engine reports a move.
struct BoardPrinter<W: Write> {
    out: Rc<RefCell<W>>,
}

impl<W: Write> Observer for BoardPrinter<W> {
    fn update(&mut self, event: &GameEvent) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = writeln!(out, "\n{}\n", event.board()) {
            warn!(error = %e, "Failed to render board");
        }
    }
}

/// Interactive prompt session.
///
/// Reads answers line by line from `input` and writes everything to the
/// shared `output`. End of input ends the session.
pub struct PromptSession<'a, R, W: Write> {
    input: R,
    output: Rc<RefCell<W>>,
    engine: GameEngine,
    sink: &'a mut dyn RecordSink,
}

impl<'a, R: BufRead, W: Write + 'static> PromptSession<'a, R, W> {
    /// Creates a session with a board-printing observer already subscribed.
    pub fn new(input: R, output: Rc<RefCell<W>>, sink: &'a mut dyn RecordSink) -> Self {
        let mut engine = GameEngine::default();
        engine.subscribe(BoardPrinter {
            out: Rc::clone(&output),
        });
        Self {
            input,
            output,
            engine,
            sink,
        }
    }

    /// Runs the main menu until the user quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        info!("Prompt session started");
        self.say("Welcome to Tic Tac Toe!")?;
        loop {
            self.say("\n1) Start game\n2) History\n3) Quit")?;
            let Some(choice) = self.ask("> ")? else {
                break;
            };
            match choice.trim().to_lowercase().as_str() {
                "1" | "s" | "start" => {
                    if !self.play_round()? {
                        break;
                    }
                }
                "2" | "h" | "history" => self.show_history()?,
                "3" | "q" | "quit" => break,
                other => self.say(format!("Unknown choice '{other}'"))?,
            }
        }
        self.say("Goodbye!")?;
        info!("Prompt session ended");
        Ok(())
    }

    /// Sets up players and plays one game. Returns false if input ended.
    fn play_round(&mut self) -> Result<bool> {
        let Some(roster) = self.setup_players()? else {
            return Ok(false);
        };
        self.engine.set_players(roster);
        self.say(format!("\n{}\n", self.engine.board()))?;

        loop {
            if let Some(summary) = self.engine.summary() {
                let result = summary.outcome.result_text();
                let played_at = Local::now().naive_local();
                if let Err(e) = record_summary(&mut *self.sink, &summary, played_at) {
                    warn!(error = %e, "Could not record finished game");
                    self.say(format!("Could not save the game: {e}"))?;
                }
                self.say(format!("Game over: {result}"))?;
                return Ok(true);
            }

            let player = self.engine.current_player();
            let prompt = format!("{}'s turn ({}): ", player.name(), player.symbol());
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(false);
            };

            let cell = match parse_cell(&answer) {
                Ok(cell) => cell,
                Err(e) => {
                    self.say(format!("Invalid input: {e}"))?;
                    continue;
                }
            };
            if let Err(e) = self.engine.make_move(cell) {
                debug!(error = %e, "Move rejected");
                self.say(format!("Invalid move: {e}"))?;
            }
        }
    }

    /// Prints the most recent finished games.
    fn show_history(&mut self) -> Result<()> {
        match self.sink.recent_games(HISTORY_LINES) {
            Ok(lines) if lines.is_empty() => self.say("No games played yet."),
            Ok(lines) => self.say(lines.join("\n")),
            Err(e) => {
                warn!(error = %e, "Could not load history");
                self.say(format!("Could not load history: {e}"))
            }
        }
    }

    /// Collects both players, re-asking only the field that broke a rule.
    fn setup_players(&mut self) -> Result<Option<Roster>> {
        let mut entries = [PlayerEntry::default(), PlayerEntry::default()];
        for slot in [PlayerSlot::First, PlayerSlot::Second] {
            let entry = &mut entries[slot.index()];
            let Some(name) = self.ask(&format!("{slot} name: "))? else {
                return Ok(None);
            };
            entry.name = name;
            let Some(symbol) = self.ask(&format!("{slot} symbol (1 letter): "))? else {
                return Ok(None);
            };
            entry.symbol = symbol;
        }

        loop {
            match Roster::from_entries(&entries[0], &entries[1]) {
                Ok(roster) => return Ok(Some(roster)),
                Err(e) => {
                    self.say(format!("Input error: {e}"))?;
                    let entry = &mut entries[e.slot.index()];
                    let (label, field) = match e.rule {
                        SetupRule::EmptyName | SetupRule::NonAlphabeticName => {
                            ("name", &mut entry.name)
                        }
                        _ => ("symbol (1 letter)", &mut entry.symbol),
                    };
                    let Some(answer) = self.ask(&format!("{} {label}: ", e.slot))? else {
                        return Ok(None);
                    };
                    *field = answer;
                }
            }
        }
    }

    fn say(&self, text: impl Display) -> Result<()> {
        let mut out = self.output.borrow_mut();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    /// Prompts and reads one line; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        {
            let mut out = self.output.borrow_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
