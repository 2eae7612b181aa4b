//! TUI event types
//!
//! Defines the commands sent TO the controller task. Events coming FROM it
//! are [`UiEvent`](echoq_application::UiEvent)s plus notification updates
//! on the watch channel.

use echoq_domain::CardIntent;

/// Commands sent from the TUI event loop to the controller task (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// The search box changed; the value is debounced before it is used
    SearchChanged(String),
    /// Flip between the unanswered and answered view
    SwitchFilter,
    /// Re-issue the fetch for the current view
    Refresh,
    /// A card action confirmed by the user
    Card(CardIntent),
    /// Hide the current notification
    DismissAlert,
    /// Graceful shutdown
    Quit,
}
