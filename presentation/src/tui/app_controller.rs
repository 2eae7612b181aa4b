//! Background controller task (Actor pattern)
//!
//! Owns the FeedController and the search debouncer, and processes
//! commands from the TUI event loop. Backend work runs in a JoinSet so
//! the loop keeps accepting commands while requests are outstanding.

use super::event::TuiCommand;
use echoq_application::{Debouncer, FeedCompletion, FeedController};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

pub(super) async fn controller_task(
    mut controller: FeedController,
    debounce: Duration,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
) {
    let (settled_tx, mut settled_rx) = mpsc::unbounded_channel::<String>();
    let mut debouncer = Debouncer::new(debounce, settled_tx);
    let mut tasks: JoinSet<FeedCompletion> = JoinSet::new();

    tasks.spawn(controller.mount());

    loop {
        tokio::select! {
            biased;

            // Completed backend work
            Some(res) = tasks.join_next() => {
                match res {
                    Ok(completion) => {
                        if let Some(follow_up) = controller.finalize(completion) {
                            tasks.spawn(follow_up);
                        }
                    }
                    Err(e) => {
                        if !e.is_cancelled() {
                            warn!("Feed task failed: {}", e);
                        }
                    }
                }
            }

            // Search box settled
            Some(term) = settled_rx.recv() => {
                debug!("Search settled on {:?}", term);
                tasks.spawn(controller.on_search_settled(term));
            }

            // Commands
            cmd_opt = cmd_rx.recv() => {
                let cmd = match cmd_opt {
                    Some(c) => c,
                    None => break, // Channel closed
                };

                match cmd {
                    TuiCommand::SearchChanged(term) => debouncer.push(term),
                    TuiCommand::SwitchFilter => {
                        tasks.spawn(controller.switch_filter());
                    }
                    TuiCommand::Refresh => {
                        tasks.spawn(controller.refresh());
                    }
                    TuiCommand::Card(intent) => {
                        tasks.spawn(controller.dispatch(intent));
                    }
                    TuiCommand::DismissAlert => controller.notifications().dismiss(),
                    TuiCommand::Quit => break,
                }
            }
        }
    }

    debouncer.cancel();
}
