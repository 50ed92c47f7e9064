#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use chrono::Local;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;
use crate::domain::models::Focus;
use crate::domain::models::Language;
use crate::domain::models::Loading;
use crate::domain::models::NoticeType;
use crate::domain::models::Palette;
use crate::domain::models::SlashCommand;
use crate::domain::models::TextArea;
use crate::domain::services::AppState;
use crate::domain::services::Completions;
use crate::domain::services::Exports;
use crate::domain::services::Scroll;
use crate::domain::services::Syntaxes;

const STATUS_TEXT: &str = "Enter generate | Tab focus | ^L language | ^Y copy code | ^E copy explanation | ^S save code | ^O save conversation | ^T theme | ^N new | ^X clear | ^C quit";

fn pane<'a>(title: &'a str, focused: bool, palette: Palette) -> Block<'a> {
    let mut border_style = Style::default().fg(palette.foreground());
    if focused {
        border_style = border_style.fg(palette.accent());
    }

    return Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(title);
}

fn popup_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    return Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1];
}

fn render_popup<B: Backend>(
    frame: &mut Frame<B>,
    title: &str,
    text: &str,
    colour: Color,
    palette: Palette,
) {
    let rect = popup_rect(60, 50, frame.size());
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text.to_string())
            .style(
                Style::default()
                    .fg(palette.foreground())
                    .bg(palette.input_background()),
            )
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(colour))
                    .title(title.to_string()),
            ),
        rect,
    );
}

fn render_history<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &AppState,
    search: &mut tui_textarea::TextArea<'static>,
) {
    let palette = app_state.palette;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(rect);

    TextArea::style(search, "Search", app_state.focus == Focus::Search, palette);
    frame.render_widget(search.widget(), layout[0]);

    let history = app_state.history();
    let items = history
        .items
        .iter()
        .map(|item| return ListItem::new(item.label()))
        .collect::<Vec<ListItem>>();

    let title = if app_state.session.is_empty() {
        "History (empty)"
    } else {
        "History"
    };

    let mut list_state = ListState::default();
    if !history.items.is_empty() {
        list_state.select(Some(app_state.history_cursor));
    }

    frame.render_stateful_widget(
        List::new(items)
            .style(
                Style::default()
                    .fg(palette.foreground())
                    .bg(palette.input_background()),
            )
            .highlight_style(
                Style::default()
                    .fg(palette.background())
                    .bg(palette.accent()),
            )
            .block(pane(title, app_state.focus == Focus::History, palette)),
        layout[1],
        &mut list_state,
    );
}

fn render_code<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let palette = app_state.palette;
    let style = Style::default()
        .fg(palette.foreground())
        .bg(palette.input_background());

    if app_state.waiting_for_backend {
        Loading::default().render(frame, rect, palette);
        return;
    }

    let code = &app_state.snippet().code;
    let lines = if app_state.snippet().is_empty() {
        vec![Line::from(Span::styled(
            "Generated code shows up here.",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    } else if Completions::is_error(code) {
        vec![Line::from(Span::styled(
            code.to_string(),
            Style::default().fg(palette.error()),
        ))]
    } else {
        Syntaxes::highlight(code, app_state.language(), palette)
    };

    app_state
        .code_scroll
        .set_state(Scroll::clamp_length(lines.len()), rect.height.saturating_sub(2));

    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .scroll((app_state.code_scroll.position, 0))
            .block(pane("Code", false, palette)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.code_scroll.scrollbar_state,
    );
}

fn render_generator<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &mut AppState,
    request: &mut tui_textarea::TextArea<'static>,
) {
    let palette = app_state.palette;
    let style = Style::default()
        .fg(palette.foreground())
        .bg(palette.input_background());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(6),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(rect);

    let header = Line::from(vec![
        Span::styled(
            format!(" Language: {} ", app_state.language()),
            Style::default()
                .fg(palette.accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" User: {} ", app_state.username)),
    ]);
    frame.render_widget(Paragraph::new(header), layout[0]);

    TextArea::style(
        request,
        "Describe what you want to generate",
        app_state.focus == Focus::Request,
        palette,
    );
    frame.render_widget(request.widget(), layout[1]);

    render_code(frame, layout[2], app_state);

    frame.render_widget(
        Paragraph::new(app_state.snippet().explanation.to_string())
            .style(style)
            .wrap(Wrap { trim: false })
            .block(pane("Explanation", false, palette)),
        layout[3],
    );

    // Keep the newest transcript lines in view.
    let transcript = &app_state.session.working().transcript;
    let offset = Scroll::tail_offset(
        transcript.as_str().lines().count(),
        layout[4].height.saturating_sub(2),
    );
    let conversation = if transcript.is_empty() {
        Text::styled(
            "No conversation yet.",
            Style::default().add_modifier(Modifier::DIM),
        )
    } else {
        Text::raw(transcript.as_str().to_string())
    };
    frame.render_widget(
        Paragraph::new(conversation)
            .style(style)
            .scroll((offset, 0))
            .block(pane("Conversation", false, palette)),
        layout[4],
    );

    frame.render_widget(
        Paragraph::new(STATUS_TEXT).style(Style::default().add_modifier(Modifier::DIM)),
        layout[5],
    );
}

fn draw<B: Backend>(
    frame: &mut Frame<B>,
    app_state: &mut AppState,
    request: &mut tui_textarea::TextArea<'static>,
    search: &mut tui_textarea::TextArea<'static>,
) {
    let palette = app_state.palette;
    frame.render_widget(
        Block::default().style(
            Style::default()
                .fg(palette.foreground())
                .bg(palette.background()),
        ),
        frame.size(),
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(frame.size());

    render_history(frame, columns[0], app_state, search);
    render_generator(frame, columns[1], app_state, request);

    if app_state.confirm_clear {
        render_popup(
            frame,
            "Clear History",
            "Are you sure you want to clear all conversation history?\n\nPress y to confirm, any other key to cancel.",
            palette.error(),
            palette,
        );
    } else if let Some(notice) = &app_state.notice {
        let colour = match notice.notice_type() {
            NoticeType::Info => palette.accent(),
            NoticeType::Error => palette.error(),
        };
        render_popup(frame, &notice.title, &notice.text, colour, palette);
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    backend: &BackendBox,
) -> Result<()> {
    let mut request = TextArea::default();
    let mut search = TextArea::default();

    #[cfg(feature = "dev")]
    {
        request = TextArea::with_text("Write a function that prints from 0 to 10.");
    }

    loop {
        if app_state.reset_request {
            request = TextArea::with_text(&app_state.session.working().request);
            app_state.reset_request = false;
        }

        terminal.draw(|frame| draw(frame, app_state, &mut request, &mut search))?;

        let input: Input = crossterm::event::read()?.into();
        if matches!(input.key, Key::Null) {
            continue;
        }

        if app_state.notice.is_some() {
            app_state.dismiss_notice();
            continue;
        }

        if app_state.confirm_clear {
            app_state.confirm_clear(matches!(input.key, Key::Char('y') | Key::Char('Y')));
            continue;
        }

        let now = Local::now();
        match input {
            Input {
                key: Key::Char('c'),
                ctrl: true,
                ..
            } => {
                break;
            }
            Input {
                key: Key::Char('l'),
                ctrl: true,
                ..
            } => {
                app_state.next_language();
            }
            Input {
                key: Key::Char('y'),
                ctrl: true,
                ..
            } => {
                app_state.copy_code();
            }
            Input {
                key: Key::Char('e'),
                ctrl: true,
                ..
            } => {
                app_state.copy_explanation();
            }
            Input {
                key: Key::Char('s'),
                ctrl: true,
                ..
            } => {
                app_state.save_code(&now).await;
            }
            Input {
                key: Key::Char('o'),
                ctrl: true,
                ..
            } => {
                app_state.save_conversation(&now).await;
            }
            Input {
                key: Key::Char('t'),
                ctrl: true,
                ..
            } => {
                app_state.toggle_theme();
            }
            Input {
                key: Key::Char('n'),
                ctrl: true,
                ..
            } => {
                app_state.new_chat();
            }
            Input {
                key: Key::Char('x'),
                ctrl: true,
                ..
            } => {
                app_state.request_clear();
            }
            Input {
                key: Key::PageUp, ..
            }
            | Input {
                key: Key::MouseScrollUp,
                ..
            } => {
                app_state.code_scroll.up_page();
            }
            Input {
                key: Key::PageDown,
                ..
            }
            | Input {
                key: Key::MouseScrollDown,
                ..
            } => {
                app_state.code_scroll.down_page();
            }
            Input { key: Key::Tab, .. } => {
                app_state.focus = app_state.focus.next();
            }
            input => match app_state.focus {
                Focus::Request => {
                    if !matches!(input.key, Key::Enter) {
                        request.input(input);
                        continue;
                    }

                    let text = request.lines().join("\n");
                    if let Some(command) = SlashCommand::parse(&text) {
                        if app_state.handle_slash_command(&command, &now).await? {
                            break;
                        }
                        continue;
                    }

                    if let Some(request_text) = app_state.submit_request(&text) {
                        // The call blocks the loop, so draw the loading state first.
                        terminal.draw(|frame| draw(frame, app_state, &mut request, &mut search))?;

                        let language = app_state.language();
                        let raw =
                            Completions::generate(backend.as_ref(), &request_text, language).await;
                        app_state.handle_completion(&request_text, &raw, &Local::now());
                    }
                }
                Focus::Search => {
                    if matches!(input.key, Key::Enter) {
                        app_state.focus = Focus::History;
                        continue;
                    }

                    search.input(input);
                    app_state.set_search_query(&search.lines().join(""));
                }
                Focus::History => match input.key {
                    Key::Up => app_state.history_up(),
                    Key::Down => app_state.history_down(),
                    Key::Enter => {
                        app_state.load_history_cursor();
                    }
                    _ => (),
                },
            },
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(backend: BackendBox) -> Result<()> {
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::Username),
        Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default(),
        Palette::parse(&Config::get(ConfigKey::Theme)).unwrap_or_default(),
        Exports::default(),
    );

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, &backend).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
