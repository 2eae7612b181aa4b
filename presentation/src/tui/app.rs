//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                   controller_task (tokio::spawn)
//!   ├─ crossterm EventStream                ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)      ├─ debounced search terms
//!   ├─ notifications (watch channel)        └─ JoinSet of backend requests
//!   └─ tick_interval
//!        └── cmd_tx ──────────────────>────┘
//! ```

use super::app_action_handler::handle_action;
use super::app_controller::controller_task;
use super::event::TuiCommand;
use super::mode;
use super::presenter::TuiPresenter;
use super::state::FeedState;
use super::widgets::{
    FeedLayout, alert::AlertWidget, confirm::ConfirmWidget, editor::EditorWidget,
    header::HeaderWidget, help::HelpWidget, question_list::QuestionListWidget,
    search_bar::SearchBarWidget, status_bar::StatusBarWidget,
};
use crate::output::console::result_count_line;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use echoq_application::{FeedController, FeedParams, NotificationChannel, RequestHelper, UiEvent};
use echoq_domain::Notification;
use futures::stream::StreamExt;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    style::{Color, Style},
    widgets::Paragraph,
};
use std::io;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tracing::info;

const FLASH_TTL: Duration = Duration::from_secs(5);

/// Main TUI application
pub struct TuiApp {
    // -- Actor channels --
    cmd_tx: mpsc::UnboundedSender<TuiCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    notification_rx: watch::Receiver<Notification>,

    // -- Presenter (applies UiEvents to state) --
    presenter: TuiPresenter,

    // -- Controller task handle --
    _controller_handle: tokio::task::JoinHandle<()>,
}

impl TuiApp {
    /// Create a new TUI application wired to the controller
    ///
    /// Must be called inside a tokio runtime: the controller task is
    /// spawned here and immediately issues the initial fetch.
    pub fn new(helper: RequestHelper, params: FeedParams) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let notifications = NotificationChannel::new().with_auto_dismiss(params.notification_ttl);
        let notification_rx = notifications.subscribe();

        let controller = FeedController::new(helper, notifications, ui_tx);
        let controller_handle = tokio::spawn(controller_task(controller, params.debounce, cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            notification_rx,
            presenter: TuiPresenter::new(),
            _controller_handle: controller_handle,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = FeedState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));
        info!("Feed TUI started");

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // UiEvents from the controller
                Some(ui_event) = self.ui_rx.recv() => {
                    self.presenter.apply(&mut state, &ui_event);
                }

                // Notification set, replaced or dismissed
                Ok(()) = self.notification_rx.changed() => {
                    let notification = self.notification_rx.borrow_and_update().clone();
                    self.presenter.apply_notification(&mut state, &notification);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!("Feed TUI stopped");

        Ok(())
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &FeedState) {
        let layout = FeedLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(SearchBarWidget::new(state), layout.search);
        frame.render_widget(AlertWidget::new(&state.alert), layout.alert);
        frame.render_widget(
            Paragraph::new(result_count_line(state.result_count()))
                .style(Style::default().fg(Color::DarkGray)),
            layout.count,
        );
        frame.render_widget(QuestionListWidget::new(state), layout.list);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if let Some(draft) = &state.editor {
            let area = FeedLayout::centered_overlay(70, 60, frame.area());
            frame.render_widget(EditorWidget::new(draft), area);
        }

        if let Some(pending) = &state.confirm {
            let area = FeedLayout::centered_overlay(50, 30, frame.area());
            frame.render_widget(ConfirmWidget::new(pending), area);
        }

        if state.show_help {
            let area = FeedLayout::centered_overlay(60, 70, frame.area());
            frame.render_widget(HelpWidget::new(), area);
        }
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&self, state: &mut FeedState, event: Event) {
        let Event::Key(key) = event else {
            // Resize is picked up on the next draw
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        // If help is showing, Esc or ? closes it
        if state.show_help && matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            state.show_help = false;
            return;
        }

        let action = mode::handle_key_event(state.mode, key);
        if let Some(cmd) = handle_action(state, action) {
            let _ = self.cmd_tx.send(cmd);
        }
    }
}
