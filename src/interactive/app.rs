//! TUI application state and logic

use crate::core::{Entry, FeedbackRow};
use crate::game::{ClueKind, Game, GameMode, GuessError, Outcome, Suggestions};
use crate::roster::Roster;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub mode: GameMode,
    pub input_buffer: String,
    pub suggestions: Suggestions,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Solved,
}

/// One evaluated guess, kept for the result table
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub entry: Entry,
    pub row: FeedbackRow,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_won: usize,
    /// Wins bucketed by guess count; the last bucket collects long rounds
    pub guess_distribution: [usize; 12],
}

impl Statistics {
    fn record_win(&mut self, guesses: u32) {
        self.rounds_won += 1;
        let bucket = (guesses as usize).min(self.guess_distribution.len() - 1);
        self.guess_distribution[bucket] += 1;
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(roster: &'a Roster, mode: GameMode) -> Self {
        let mut rng = rand::rng();
        let game = Game::new(roster, &mut rng);
        let suggestions = Suggestions::filter(roster, "");

        Self {
            game,
            mode,
            input_buffer: String::new(),
            suggestions,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type a name and press Enter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "↑/↓ pick a suggestion, 1-3 reveal clues, Tab switches mode."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    fn refilter(&mut self) {
        self.suggestions = Suggestions::filter(self.game.roster(), &self.input_buffer);
    }

    pub fn push_char(&mut self, c: char) {
        self.input_buffer.push(c);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
        self.refilter();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refilter();
    }

    /// Submit the current selection, or the typed text as a free guess
    ///
    /// Empty submissions with nothing selected are ignored.
    pub fn submit(&mut self) {
        let typed = self.input_buffer.trim().to_string();
        if typed.is_empty() && self.suggestions.cursor().is_none() {
            return;
        }

        let name = self
            .suggestions
            .selected()
            .or_else(|| self.suggestions.first())
            .and_then(|i| self.game.roster().get(i))
            .map_or(typed, |entry| entry.name.clone());

        self.submit_guess(&name);
    }

    fn submit_guess(&mut self, name: &str) {
        match self.game.evaluate(name) {
            Ok(eval) => {
                self.history.push(HistoryEntry {
                    entry: eval.entry.clone(),
                    row: eval.row,
                });

                for kind in &eval.newly_unlocked {
                    let key = Self::reveal_key(*kind);
                    self.add_message(
                        &format!("🔑 {} clue unlocked — press {key}.", kind.label()),
                        MessageStyle::Info,
                    );
                }

                if eval.outcome == Outcome::Win {
                    self.stats.record_win(eval.guess_count);
                    self.input_mode = InputMode::Solved;
                    self.add_message(
                        &format!(
                            "✅ Correct! The resonator was {} ({} {}).",
                            eval.entry.name,
                            eval.guess_count,
                            if eval.guess_count == 1 {
                                "guess"
                            } else {
                                "guesses"
                            }
                        ),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
                }

                self.input_buffer.clear();
                self.refilter();
            }
            Err(GuessError::UnknownEntry(name)) => {
                self.add_message(&format!("❌ No resonator named '{name}'!"), MessageStyle::Error);
            }
            Err(GuessError::RoundOver) => {
                self.add_message("Round already solved — press 'n'.", MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.game.reset(&mut rand::rng());
        self.history.clear();
        self.input_buffer.clear();
        self.refilter();
        self.input_mode = InputMode::Guessing;
        self.messages.clear();
        self.add_message("🔄 New round started!", MessageStyle::Info);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.add_message(
            &format!("Mode: {} (cosmetic only)", self.mode.label()),
            MessageStyle::Info,
        );
    }

    /// Reveal the clue bound to a digit key (1-3)
    pub fn reveal(&mut self, index: usize) {
        let Some(&kind) = ClueKind::ALL.get(index) else {
            return;
        };

        match self.game.reveal_clue(kind) {
            Some(text) => {
                self.add_message(&format!("🔓 {}: {text}", kind.label()), MessageStyle::Success);
            }
            None => {
                self.add_message(
                    &format!("🔒 {} is still locked.", kind.label()),
                    MessageStyle::Error,
                );
            }
        }
    }

    fn reveal_key(kind: ClueKind) -> char {
        match kind {
            ClueKind::Patch => '1',
            ClueKind::Bond => '2',
            ClueKind::SignatureWeapon => '3',
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Solved => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_round();
                    }
                    _ => {
                        // After a win, only new-round and quit apply
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_round();
                    }
                    KeyCode::Tab => {
                        app.toggle_mode();
                    }
                    KeyCode::Up => {
                        app.suggestions.move_up();
                    }
                    KeyCode::Down => {
                        app.suggestions.move_down();
                    }
                    KeyCode::Esc => {
                        app.clear_input();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    // Names never contain digits; 1-3 reveal clues
                    KeyCode::Char(c @ '1'..='3') => {
                        let index = (c as usize) - ('1' as usize);
                        app.reveal(index);
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_char();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
