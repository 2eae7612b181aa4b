//! TUI (Text User Interface) module for echoq
//!
//! The interactive moderation feed: search box, answered/unanswered
//! switch, question cards with edit/visibility/delete actions and the
//! notification banner.

mod app;
mod app_action_handler;
mod app_controller;
mod event;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiCommand;
pub use mode::{InputMode, KeyAction};
pub use presenter::TuiPresenter;
pub use state::FeedState;
