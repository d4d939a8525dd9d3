use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_textedit::clipboard::LocalClipboard;
use ratatui_textedit::crossterm_input::input_event_from_crossterm;
use ratatui_textedit::editor::EditorOptions;
use ratatui_textedit::textarea::SubmitRule;
use ratatui_textedit::textarea::TextArea;
use ratatui_textedit::textarea::TextAreaAction;
use ratatui_textedit::textarea::TextAreaOptions;
use ratatui_textedit::validation::ValidationRule;
use ratatui_textedit::validation::ValidationRules;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Set to a file path to write engine logs there (filtered by `RUST_LOG`).
const LOG_ENV: &str = "TEXTEDIT_LOG";

type Backend = CrosstermBackend<io::Stdout>;

fn main() -> io::Result<()> {
    let _log_guard = init_logging()?;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut textarea = TextArea::with_options(TextAreaOptions {
        submit_rule: SubmitRule::ShiftEnterSubmitsEnterNewline,
        selection_style: Style::default().bg(Color::Blue),
        editor: EditorOptions {
            max_bytes: 4 * 1024,
            validate_on_change: true,
            ..EditorOptions::default()
        },
        ..TextAreaOptions::default()
    });
    textarea.editor_mut().use_private_clipboard(demo_clipboard());
    textarea.editor_mut().set_validation_rules(
        ValidationRules::new()
            .with(ValidationRule::required("message is empty"))
            .with(ValidationRule::max_chars(280, "message is longer than 280 characters")),
    );

    let res = run(&mut terminal, &mut textarea);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run(terminal: &mut Terminal<Backend>, textarea: &mut TextArea) -> io::Result<()> {
    let mut sent: Vec<String> = Vec::new();
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [history, editor, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(8),
                    Constraint::Length(1),
                ])
                .areas(area);

            let block = Block::default().title("Sent").borders(Borders::ALL);
            let inner = block.inner(history);
            f.render_widget(block, history);
            let skip = sent.len().saturating_sub(inner.height as usize);
            for (i, msg) in sent.iter().skip(skip).enumerate() {
                let line = msg.replace('\n', " ⏎ ");
                f.buffer_mut().set_stringn(
                    inner.x,
                    inner.y + i as u16,
                    line,
                    inner.width as usize,
                    Style::default(),
                );
            }

            let block = Block::default()
                .title("Compose (Shift+Enter send, Alt+click adds a caret, Ctrl+Q quit)")
                .borders(Borders::ALL);
            let inner = block.inner(editor);
            f.render_widget(block, editor);
            textarea.render_ref(inner, f.buffer_mut());
            if let Some(pos) = textarea.cursor_pos(inner) {
                f.set_cursor_position(pos);
            }

            let ed = textarea.editor();
            let (row, col) = ed.cursor_position();
            let validity = ed.validation_state().first_error().unwrap_or("ok");
            let status_line = format!(
                "{row}:{col}  carets={}  bytes={}/{}  undo={}  scroll={}%  {validity}",
                ed.cursor_count(),
                ed.len(),
                ed.capacity(),
                ed.history().depth(),
                ed.viewport().percent_y().unwrap_or(100),
            );
            let status_span = Span::styled(status_line, Style::default().fg(Color::DarkGray));
            f.buffer_mut()
                .set_span(status.x, status.y, &status_span, status.width);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let event = crossterm::event::read()?;
        if let Event::Key(key) = &event {
            if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
        }
        let Some(input) = input_event_from_crossterm(event) else {
            continue;
        };
        match textarea.input(input).map_err(io::Error::other)? {
            TextAreaAction::Submitted(msg) => {
                tracing::info!(bytes = msg.len(), "message submitted");
                sent.push(msg);
            }
            TextAreaAction::Changed | TextAreaAction::Redraw | TextAreaAction::None => {}
        }
    }
}

#[cfg(feature = "system-clipboard")]
fn demo_clipboard() -> LocalClipboard {
    ratatui_textedit::system_clipboard::system_clipboard()
}

#[cfg(not(feature = "system-clipboard"))]
fn demo_clipboard() -> LocalClipboard {
    LocalClipboard::new()
}

/// The returned guard flushes the log writer when dropped; keep it alive until exit.
fn init_logging() -> io::Result<Option<WorkerGuard>> {
    let Some(path) = std::env::var_os(LOG_ENV).map(PathBuf::from) else {
        return Ok(None);
    };
    let Some(file_name) = path.file_name() else {
        return Err(io::Error::other(format!(
            "{LOG_ENV} must name a file, got {}",
            path.display()
        )));
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;
    Ok(Some(guard))
}
