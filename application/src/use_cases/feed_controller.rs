//! Feed Controller
//!
//! Business logic of the feed/moderation view, kept out of the TUI.
//!
//! Every operation that talks to the backend returns a [`FeedWork`] future
//! instead of awaiting it. The owner of the controller spawns the work
//! (typically into a `JoinSet`) and hands each [`FeedCompletion`] back to
//! [`FeedController::finalize`]. This keeps the question list owned by a
//! single task while requests run concurrently. Progress is reported as
//! [`UiEvent`]s; user-facing feedback goes to the [`NotificationChannel`].

use crate::notification::NotificationChannel;
use crate::ports::ui_event::UiEvent;
use crate::use_cases::moderate_question::{ModerateQuestionUseCase, ModerationOutcome};
use crate::use_cases::question_collection::{
    ApplyOutcome, FetchCompletion, QuestionCollection, QuestionQuery,
};
use crate::use_cases::request_helper::RequestHelper;
use echoq_domain::{CardIntent, Filter, Question, QuestionId};
use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A spawnable unit of backend work
pub type FeedWork = BoxFuture<'static, FeedCompletion>;

/// Result of a [`FeedWork`], to be passed to [`FeedController::finalize`]
#[derive(Debug, Clone)]
pub enum FeedCompletion {
    Fetched(FetchCompletion),
    Moderated(ModerationOutcome),
}

pub struct FeedController {
    helper: RequestHelper,
    moderation: ModerateQuestionUseCase,
    collection: QuestionCollection,
    notifications: NotificationChannel,
    tx: mpsc::UnboundedSender<UiEvent>,
    view_filter: Filter,
    search_term: String,
}

impl FeedController {
    pub fn new(
        helper: RequestHelper,
        notifications: NotificationChannel,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            moderation: ModerateQuestionUseCase::new(helper.clone()),
            helper,
            collection: QuestionCollection::new(),
            notifications,
            tx,
            view_filter: Filter::Unanswered,
            search_term: String::new(),
        }
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    // ==================== Fetching ====================

    fn fetch(&mut self, query: QuestionQuery) -> FeedWork {
        let ticket = self.collection.begin(query.clone());
        debug!("Issuing fetch #{}: {}", ticket.seq, query);
        self.emit(UiEvent::FetchStarted { query });

        let helper = self.helper.clone();
        async move { FeedCompletion::Fetched(QuestionCollection::fetch(helper, ticket).await) }
            .boxed()
    }

    /// Initial load: the unanswered list, once
    pub fn mount(&mut self) -> FeedWork {
        info!("Mounting feed");
        self.fetch(QuestionQuery::list(Filter::Unanswered))
    }

    /// The search box settled on `term`
    pub fn on_search_settled(&mut self, term: impl Into<String>) -> FeedWork {
        self.search_term = term.into();
        self.fetch(QuestionQuery::for_term(&self.search_term, self.view_filter))
    }

    /// Flip between the unanswered and answered view
    pub fn switch_filter(&mut self) -> FeedWork {
        self.view_filter = self.view_filter.toggled();
        info!("Switched view to {}", self.view_filter);
        self.refresh()
    }

    /// Re-issue the fetch for the current view and search term
    pub fn refresh(&mut self) -> FeedWork {
        self.fetch(QuestionQuery::for_term(&self.search_term, self.view_filter))
    }

    // ==================== Moderation ====================

    pub fn handle_edit(
        &mut self,
        question_id: QuestionId,
        show: bool,
        response: impl Into<String>,
    ) -> FeedWork {
        self.dispatch(CardIntent::Edit {
            question_id,
            show,
            response: response.into(),
        })
    }

    pub fn handle_turn(&mut self, question_id: QuestionId, show: bool) -> FeedWork {
        self.dispatch(CardIntent::Turn { question_id, show })
    }

    pub fn handle_delete(&mut self, question_id: QuestionId) -> FeedWork {
        self.dispatch(CardIntent::Delete { question_id })
    }

    /// Route a card intent to the backend
    pub fn dispatch(&mut self, intent: CardIntent) -> FeedWork {
        self.emit(UiEvent::ActionStarted {
            action: intent.action(),
            question_id: intent.question_id(),
        });

        let moderation = self.moderation.clone();
        async move { FeedCompletion::Moderated(moderation.execute(intent).await) }.boxed()
    }

    // ==================== Completion ====================

    /// Fold a completed work item into the state.
    ///
    /// Returns follow-up work: a successful moderation action refetches
    /// the list it affects.
    pub fn finalize(&mut self, completion: FeedCompletion) -> Option<FeedWork> {
        match completion {
            FeedCompletion::Fetched(done) => {
                let query = done.query.clone();
                match self.collection.apply(done) {
                    ApplyOutcome::Applied { .. } => self.emit(UiEvent::QuestionsUpdated {
                        query,
                        questions: self.collection.questions().to_vec(),
                    }),
                    ApplyOutcome::Failed(e) => self.emit(UiEvent::FetchFailed {
                        query,
                        reason: e.to_string(),
                    }),
                    ApplyOutcome::Stale => {}
                }
                None
            }
            FeedCompletion::Moderated(outcome) => {
                self.emit(UiEvent::ActionCompleted {
                    action: outcome.action,
                    question_id: outcome.question_id,
                    success: outcome.succeeded(),
                });

                let follow_up = outcome
                    .succeeded()
                    .then(|| self.fetch(QuestionQuery::list(outcome.action.refetch_filter())));
                self.notifications.set_alert(outcome.notification());
                follow_up
            }
        }
    }

    /// Run `work` and every follow-up it produces to completion, in order
    pub async fn drive(&mut self, work: FeedWork) {
        let mut next = Some(work);
        while let Some(work) = next {
            let completion = work.await;
            next = self.finalize(completion);
        }
    }

    // ==================== Accessors ====================

    pub fn questions(&self) -> &[Question] {
        self.collection.questions()
    }

    /// Number shown in the `"{n} results..."` line
    pub fn result_count(&self) -> usize {
        self.collection.len()
    }

    pub fn view_filter(&self) -> Filter {
        self.view_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }
}
