//! Play command implementation - the interactive game screen.

use super::CliError;
use super::logging::{self, LogTarget};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dice_guess::{ATTEMPT_CEILING, DieRoller, Face, GameController, RollOutcome};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Button colour of the original screen.
const ACCENT: Color = Color::Rgb(76, 81, 191);

/// Title of the notification for a rejected guess.
const INVALID_GUESS_TITLE: &str = "Invalid Input";
const INSTRUCTION: &str = "Roll the dice and try your luck!";
const WIN_MESSAGE: &str = "Congratulations! You guessed correctly!";
const PLACEHOLDER: &str = "1-6";

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if logging or the terminal cannot be set up.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(seed: Option<u64>, log_file: Option<PathBuf>) -> Result<(), CliError> {
    logging::init(LogTarget::file_or(log_file, LogTarget::Off))?;

    let game = seed.map_or_else(GameController::from_os_rng, GameController::seeded);
    info!(?seed, "session started");

    let mut app = App::new(game);
    run_tui(&mut app)?;

    info!("session ended");
    Ok(())
}

/// A blocking, dismissable message box.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    title: &'static str,
    message: String,
}

/// Screen state: the controller plus what only the view cares about.
struct App<R> {
    game: GameController<R>,
    /// Text typed into the guess dialog (digits only, at most one).
    input: String,
    notification: Option<Notification>,
    last_outcome: Option<RollOutcome>,
    quit: bool,
}

impl<R: DieRoller> App<R> {
    fn new(game: GameController<R>) -> Self {
        Self {
            game,
            input: String::new(),
            notification: None,
            last_outcome: None,
            quit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        // Any key dismisses the notification, nothing else happens
        if self.notification.take().is_some() {
            return;
        }

        if self.game.dialog_visible() {
            match code {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input.is_empty() {
                        self.input.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            }
        } else {
            match code {
                KeyCode::Char(' ' | 'r') | KeyCode::Enter => self.roll(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
                _ => {}
            }
        }
    }

    fn submit_guess(&mut self) {
        match self.game.submit_guess(&self.input) {
            // A new round starts with no result line
            Ok(_) => self.last_outcome = None,
            Err(err) => {
                self.notification = Some(Notification {
                    title: INVALID_GUESS_TITLE,
                    message: err.to_string(),
                });
            }
        }
    }

    fn roll(&mut self) {
        let outcome = self.game.roll_once();
        if outcome.ends_round() {
            self.input.clear();
            info!(?outcome, "round over");
        }
        self.last_outcome = Some(outcome);
    }
}

fn run_tui<R: DieRoller>(app: &mut App<R>) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend, R: DieRoller>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
) -> Result<(), CliError> {
    while !app.quit {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.quit = true;
            } else {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

fn ui<R: DieRoller>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Instruction
            Constraint::Min(12),   // Die and status
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);

    if app.game.dialog_visible() {
        render_dialog(f, app);
    }
    if let Some(notification) = &app.notification {
        render_notification(f, notification);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(INSTRUCTION)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title(" Dice Guess "));

    f.render_widget(header, area);
}

fn render_board<R: DieRoller>(f: &mut Frame, area: Rect, app: &App<R>) {
    let game = &app.game;
    let mut lines = Vec::new();

    lines.push(match game.guess() {
        Some(guess) => Line::from(format!("Your Guess: {guess}")),
        None => Line::from(""),
    });
    lines.push(Line::from(""));
    lines.extend(die_lines(game.displayed_face()));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Attempts: {}/{ATTEMPT_CEILING}",
        game.attempts()
    )));
    if let Some(outcome) = app.last_outcome {
        lines.push(outcome_line(outcome, game.attempts_remaining()));
    }

    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(board, area);
}

/// Boxed pip art for one face.
fn die_lines(face: Face) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(5);
    lines.push(Line::from("┌───────────┐"));
    for row in face.pips() {
        let cells: String = row
            .iter()
            .map(|&pip| if pip { " ● " } else { "   " })
            .collect();
        lines.push(Line::from(format!("│ {cells} │")));
    }
    lines.push(Line::from("└───────────┘"));
    lines
}

fn outcome_line(outcome: RollOutcome, remaining: u8) -> Line<'static> {
    match outcome {
        RollOutcome::NeedsGuess => Line::from("Enter a guess before rolling."),
        RollOutcome::Miss { roll, .. } => Line::from(format!(
            "Rolled {roll}. Not this time, {remaining} attempts left."
        )),
        RollOutcome::Won { roll, attempts } => Line::from(Span::styled(
            format!("Rolled {roll} on attempt {attempts}!"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        RollOutcome::Exhausted { roll } => Line::from(Span::styled(
            format!("Rolled {roll}. Out of attempts."),
            Style::default().fg(Color::Red),
        )),
    }
}

fn render_footer<R: DieRoller>(f: &mut Frame, area: Rect, app: &App<R>) {
    let controls = if app.notification.is_some() {
        " [any key] Dismiss "
    } else if app.game.dialog_visible() {
        " [1-6] Guess  [Backspace] Edit  [Enter] OK  [q] Quit "
    } else {
        " [Space/Enter] Roll the Dice  [q] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn render_dialog<R: DieRoller>(f: &mut Frame, app: &App<R>) {
    let area = centered_rect(f.area(), 46, 9);
    let mut lines = Vec::new();

    if app.game.won() {
        lines.push(Line::from(Span::styled(
            WIN_MESSAGE,
            Style::default().fg(Color::Green),
        )));
    }
    lines.push(Line::from("Enter your Guess"));
    lines.push(Line::from(""));
    lines.push(if app.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(
            app.input.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
    });
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " OK ",
        Style::default().fg(Color::White).bg(ACCENT),
    )));

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Guess "));

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn render_notification(f: &mut Frame, notification: &Notification) {
    let area = centered_rect(f.area(), 44, 6);
    let lines = vec![
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(" OK ", Style::default().fg(Color::White).bg(ACCENT))),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notification.title))
                .border_style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of at most `width` x `height` centred in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
