//! Postdesk - actor-based post manager
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async posts API calls

use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use postdesk_tui::app::AppActor;
use postdesk_tui::config::Config;
use postdesk_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE_NAME};
use postdesk_tui::i18n::Text;
use postdesk_tui::messages::ui_events::{key_to_ui_event, InputMode, Panel};
use postdesk_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use postdesk_tui::network::{NetworkActor, PostsClient};
use postdesk_tui::ui::{self, border_style, centered_rect, cursor_offset, error_style};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    // Initialize logging to file
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;
    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postdesk_tui=info")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, base_url = %config.base_url, "Starting {}", APP_NAME);

    let config_path = Config::default_path();
    match Config::write_default_if_missing(&config_path) {
        Ok(true) => tracing::info!(path = %config_path.display(), "Wrote default config"),
        Ok(false) => {}
        Err(e) => tracing::warn!("Could not write default config: {:#}", e),
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let client = PostsClient::new(
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    );
    let network_actor = NetworkActor::new(client, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(&config, net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    let initial = RenderState {
        locale: config.locale,
        ..RenderState::default()
    };
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx, initial).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
    initial: RenderState,
) -> anyhow::Result<()> {
    let mut current_state = initial;

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.key_context()) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let error_height = if state.error.is_some() { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Title bar
            Constraint::Length(error_height), // Error line
            Constraint::Length(11),           // Form
            Constraint::Min(4),               // Posts
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    if let Some(error) = &state.error {
        let line = Paragraph::new(format!(" {} ", error)).style(error_style());
        f.render_widget(line, chunks[1]);
    }
    draw_form(f, state, chunks[2]);
    draw_posts(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.confirm_delete.is_some() {
        draw_confirm_popup(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, state, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let t = |key| state.locale.text(key);
    let mut spans = vec![Span::styled(
        format!(" {} ", t(Text::AppTitle)),
        Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
    )];
    if state.is_loading {
        spans.push(Span::styled(
            format!(" {}", t(Text::Loading)),
            Style::default().fg(Color::Yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let t = |key| state.locale.text(key);
    let heading = match state.editing_id {
        Some(id) => format!(" {} #{} ", t(Text::EditHeading), id),
        None => format!(" {} ", t(Text::CreateHeading)),
    };

    let submit_label = if state.is_loading {
        t(Text::Saving)
    } else if state.editing_id.is_some() {
        t(Text::SubmitUpdate)
    } else {
        t(Text::SubmitCreate)
    };
    let mut buttons = vec![Span::styled(
        format!(" [{}] ", submit_label),
        if state.is_loading {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green).bold()
        },
    )];
    if state.editing_id.is_some() {
        buttons.push(Span::styled(
            format!(" [{}] ", t(Text::CancelEdit)),
            Style::default().fg(Color::Red),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if state.editing_id.is_some() {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default()
        })
        .title(heading)
        .title_bottom(Line::from(buttons).right_aligned());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(inner);

    let editing = state.input_mode == InputMode::Editing;
    let inputs = [
        (Panel::Title, state.form.title.as_str(), t(Text::TitleLabel), fields[0]),
        (Panel::Body, state.form.body.as_str(), t(Text::BodyLabel), fields[1]),
    ];
    for (panel, content, label, field_area) in inputs {
        let focused = state.active_panel == panel;
        f.render_widget(ui::render_input(content, label, focused, focused && editing), field_area);

        if focused && editing {
            let inner_width = field_area.width.saturating_sub(2);
            let (dx, dy) = cursor_offset(content, state.cursor_position, inner_width);
            let max_y = field_area.y + field_area.height.saturating_sub(2);
            let cursor_y = (field_area.y + 1 + dy).min(max_y);
            f.set_cursor_position(Position::new(field_area.x + 1 + dx, cursor_y));
        }
    }
}

fn draw_posts(f: &mut Frame, state: &RenderState, area: Rect) {
    let t = |key| state.locale.text(key);
    let is_focused = state.active_panel == Panel::Posts;

    let synced = state
        .last_synced
        .map(|at| format!(" {} {} ", t(Text::SyncedAt), at.format("%H:%M:%S")))
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, false))
        .title(format!(" {} ({}) ", t(Text::PostsHeading), state.posts.len()))
        .title_bottom(Line::from(synced).right_aligned());

    if state.posts.is_empty() {
        let placeholder = Paragraph::new(t(Text::NoPosts))
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = state.posts.iter().map(ui::post_item).collect();
    let highlight_style = if is_focused && !state.is_loading {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style)
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected_post));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        format!(" {} ", state.locale.text(Text::Loading))
    } else if state.input_mode == InputMode::Editing {
        state.locale.text(Text::HintEditing).to_string()
    } else {
        state.locale.text(Text::HintNormal).to_string()
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_confirm_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(50, 20, area);
    let title = state
        .confirm_delete
        .and_then(|id| state.posts.iter().find(|p| p.id == id))
        .map(|p| format!(" #{} {} ", p.id, p.title))
        .unwrap_or_default();

    let text = vec![
        Line::from(""),
        Line::from(state.locale.text(Text::ConfirmDelete)).centered(),
        Line::from(""),
        Line::from(Span::styled(
            state.locale.text(Text::ConfirmHint),
            Style::default().fg(Color::Yellow),
        ))
        .centered(),
    ];
    let popup = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(title),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}

fn draw_help_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help = Paragraph::new(state.locale.text(Text::Help)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(state.locale.text(Text::HelpTitle)),
    );

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
