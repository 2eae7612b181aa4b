//! Key action handling
//!
//! Applies a [`KeyAction`] to the [`FeedState`] and returns the command, if
//! any, the controller task has to carry out.

use super::event::TuiCommand;
use super::mode::{InputMode, KeyAction};
use super::state::{FeedState, TextBuffer};
use echoq_domain::CardIntent;

pub(super) fn handle_action(state: &mut FeedState, action: KeyAction) -> Option<TuiCommand> {
    match action {
        KeyAction::None => None,

        // Application
        KeyAction::Quit => {
            state.should_quit = true;
            Some(TuiCommand::Quit)
        }
        KeyAction::ShowHelp => {
            state.show_help = !state.show_help;
            None
        }

        // Mode transitions
        KeyAction::EnterSearch => {
            state.mode = InputMode::Search;
            None
        }
        KeyAction::ExitToNormal => {
            state.mode = InputMode::Normal;
            None
        }

        // Text editing
        KeyAction::InsertChar(c) => edit_text(state, |b| b.insert_char(c)),
        KeyAction::DeleteChar => edit_text(state, TextBuffer::delete_char),
        KeyAction::ClearInput => edit_text(state, TextBuffer::clear),
        KeyAction::CursorLeft => edit_text(state, TextBuffer::cursor_left),
        KeyAction::CursorRight => edit_text(state, TextBuffer::cursor_right),
        KeyAction::CursorHome => edit_text(state, TextBuffer::cursor_home),
        KeyAction::CursorEnd => edit_text(state, TextBuffer::cursor_end),
        KeyAction::InsertNewline => {
            if let Some(draft) = state.editor.as_mut() {
                draft.response.insert_newline();
            }
            None
        }

        // Editor modal
        KeyAction::Submit => {
            let draft = state.editor.take()?;
            state.close_overlays();
            Some(TuiCommand::Card(CardIntent::Edit {
                question_id: draft.question_id,
                show: draft.show,
                response: draft.response.text,
            }))
        }
        KeyAction::ToggleDraftVisibility => {
            if let Some(draft) = state.editor.as_mut() {
                draft.show = !draft.show;
            }
            None
        }
        KeyAction::Cancel | KeyAction::ConfirmNo => {
            state.close_overlays();
            None
        }

        // Card list
        KeyAction::SelectNext => {
            state.select_next();
            None
        }
        KeyAction::SelectPrev => {
            state.select_prev();
            None
        }
        KeyAction::SelectFirst => {
            state.select_first();
            None
        }
        KeyAction::SelectLast => {
            state.select_last();
            None
        }
        KeyAction::EditSelected => {
            if !state.open_editor() {
                state.set_flash("No question selected");
            }
            None
        }
        KeyAction::ToggleSelected => match state.selected_question() {
            Some(question) => Some(TuiCommand::Card(CardIntent::Turn {
                question_id: question.question_id,
                show: !question.show,
            })),
            None => {
                state.set_flash("No question selected");
                None
            }
        },
        KeyAction::DeleteSelected => {
            if !state.open_confirm() {
                state.set_flash("No question selected");
            }
            None
        }

        // Feed
        KeyAction::SwitchFilter => {
            state.view_filter = state.view_filter.toggled();
            Some(TuiCommand::SwitchFilter)
        }
        KeyAction::Refresh => Some(TuiCommand::Refresh),
        KeyAction::DismissAlert => state.alert.show.then_some(TuiCommand::DismissAlert),

        // Confirm prompt
        KeyAction::ConfirmYes => {
            let pending = state.confirm.take()?;
            state.close_overlays();
            Some(TuiCommand::Card(CardIntent::Delete {
                question_id: pending.question_id,
            }))
        }
    }
}

/// Route a text edit to the buffer of the current mode.
///
/// Search box edits that change the text are reported to the controller.
fn edit_text(state: &mut FeedState, edit: impl FnOnce(&mut TextBuffer)) -> Option<TuiCommand> {
    match state.mode {
        InputMode::Search => {
            let before = state.search.text.clone();
            edit(&mut state.search);
            (state.search.text != before).then(|| TuiCommand::SearchChanged(state.search.text.clone()))
        }
        InputMode::Edit => {
            if let Some(draft) = state.editor.as_mut() {
                edit(&mut draft.response);
            }
            None
        }
        InputMode::Normal | InputMode::Confirm => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use echoq_domain::{Filter, Notification, Question, QuestionId};

    fn state_with(questions: Vec<(i64, bool)>) -> FeedState {
        let mut state = FeedState::new();
        state.set_questions(
            questions
                .into_iter()
                .enumerate()
                .map(|(i, (id, show))| {
                    Question::new(i as u32 + 1, QuestionId(id), "q", show, Utc::now())
                })
                .collect(),
        );
        state
    }

    #[test]
    fn test_search_typing_reports_each_change() {
        let mut state = FeedState::new();
        handle_action(&mut state, KeyAction::EnterSearch);

        assert_eq!(
            handle_action(&mut state, KeyAction::InsertChar('c')),
            Some(TuiCommand::SearchChanged("c".into()))
        );
        assert_eq!(
            handle_action(&mut state, KeyAction::InsertChar('a')),
            Some(TuiCommand::SearchChanged("ca".into()))
        );
        // cursor movement is not an edit
        assert_eq!(handle_action(&mut state, KeyAction::CursorLeft), None);
        assert_eq!(
            handle_action(&mut state, KeyAction::ClearInput),
            Some(TuiCommand::SearchChanged(String::new()))
        );
    }

    #[test]
    fn test_typing_in_normal_mode_does_nothing() {
        let mut state = FeedState::new();
        assert_eq!(handle_action(&mut state, KeyAction::InsertChar('x')), None);
        assert!(state.search.text.is_empty());
    }

    #[test]
    fn test_edit_flow_submits_intent() {
        let mut state = state_with(vec![(7, false)]);
        handle_action(&mut state, KeyAction::EditSelected);
        for c in "hi".chars() {
            handle_action(&mut state, KeyAction::InsertChar(c));
        }
        handle_action(&mut state, KeyAction::InsertNewline);
        handle_action(&mut state, KeyAction::InsertChar('!'));
        handle_action(&mut state, KeyAction::ToggleDraftVisibility);

        let command = handle_action(&mut state, KeyAction::Submit);
        assert_eq!(
            command,
            Some(TuiCommand::Card(CardIntent::Edit {
                question_id: QuestionId(7),
                show: true,
                response: "hi\n!".into(),
            }))
        );
        assert!(state.editor.is_none());
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_cancel_edit_sends_nothing() {
        let mut state = state_with(vec![(7, false)]);
        handle_action(&mut state, KeyAction::EditSelected);
        assert_eq!(handle_action(&mut state, KeyAction::Cancel), None);
        assert!(state.editor.is_none());
    }

    #[test]
    fn test_toggle_sends_inverted_visibility() {
        let mut state = state_with(vec![(1, false), (42, true)]);
        handle_action(&mut state, KeyAction::SelectNext);
        assert_eq!(
            handle_action(&mut state, KeyAction::ToggleSelected),
            Some(TuiCommand::Card(CardIntent::Turn {
                question_id: QuestionId(42),
                show: false,
            }))
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = state_with(vec![(3, false)]);
        assert_eq!(handle_action(&mut state, KeyAction::DeleteSelected), None);
        assert_eq!(state.mode, InputMode::Confirm);

        assert_eq!(
            handle_action(&mut state, KeyAction::ConfirmYes),
            Some(TuiCommand::Card(CardIntent::Delete {
                question_id: QuestionId(3)
            }))
        );
        assert!(state.confirm.is_none());

        handle_action(&mut state, KeyAction::DeleteSelected);
        assert_eq!(handle_action(&mut state, KeyAction::ConfirmNo), None);
        assert_eq!(state.mode, InputMode::Normal);
    }

    #[test]
    fn test_actions_on_empty_list_flash() {
        let mut state = FeedState::new();
        assert_eq!(handle_action(&mut state, KeyAction::ToggleSelected), None);
        assert!(state.flash_message.is_some());
    }

    #[test]
    fn test_switch_filter_and_dismiss() {
        let mut state = FeedState::new();
        assert_eq!(
            handle_action(&mut state, KeyAction::SwitchFilter),
            Some(TuiCommand::SwitchFilter)
        );
        assert_eq!(state.view_filter, Filter::Answered);

        assert_eq!(handle_action(&mut state, KeyAction::DismissAlert), None);
        state.alert = Notification::success("done");
        assert_eq!(
            handle_action(&mut state, KeyAction::DismissAlert),
            Some(TuiCommand::DismissAlert)
        );
    }
}
