//! Moderation use case
//!
//! Turns a [`CardIntent`] into the matching backend request and reports the
//! outcome. Refetching and notifications are left to the caller; see
//! [`FeedController`](crate::use_cases::feed_controller::FeedController).

use crate::ports::http_client::ApiRequest;
use crate::use_cases::request_helper::RequestHelper;
use echoq_domain::{CardIntent, ModerationAction, Notification, QuestionId};
use serde_json::json;
use tracing::{info, warn};
use url::form_urlencoded;

pub const RESPOND_PATH: &str = "/user/respondQuestion";
pub const VISIBILITY_PATH: &str = "/user/updateVisibility";
pub const DELETE_PATH: &str = "/user/deleteQuestion";

/// Status returned by the backend for one moderation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub action: ModerationAction,
    pub question_id: QuestionId,
    pub status: u16,
}

impl ModerationOutcome {
    pub fn succeeded(&self) -> bool {
        self.status == 200
    }

    /// The notification the user sees for this outcome
    pub fn notification(&self) -> Notification {
        if self.succeeded() {
            Notification::success(self.action.success_text())
        } else {
            Notification::error(self.action.failure_text())
        }
    }
}

#[derive(Clone)]
pub struct ModerateQuestionUseCase {
    helper: RequestHelper,
}

impl ModerateQuestionUseCase {
    pub fn new(helper: RequestHelper) -> Self {
        Self { helper }
    }

    /// Backend request for `intent`
    pub fn request_for(intent: &CardIntent) -> ApiRequest {
        match intent {
            CardIntent::Edit {
                question_id,
                show,
                response,
            } => ApiRequest::post(RESPOND_PATH).with_data(json!({
                "questionid": question_id.0,
                "response": response,
                "visibility": show,
            })),
            CardIntent::Turn { question_id, show } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("questionId", &question_id.to_string())
                    .append_pair("visibility", if *show { "true" } else { "false" })
                    .finish();
                ApiRequest::post(format!("{}?{}", VISIBILITY_PATH, query))
            }
            CardIntent::Delete { question_id } => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("questionId", &question_id.to_string())
                    .finish();
                ApiRequest::delete(format!("{}?{}", DELETE_PATH, query))
            }
        }
    }

    pub async fn execute(&self, intent: CardIntent) -> ModerationOutcome {
        let action = intent.action();
        let question_id = intent.question_id();
        let response = self.helper.make_request(Self::request_for(&intent)).await;

        if response.is_success() {
            info!("{} on question {} accepted", action, question_id);
        } else {
            warn!(
                "{} on question {} rejected with status {}",
                action, question_id, response.status
            );
        }

        ModerationOutcome {
            action,
            question_id,
            status: response.status,
        }
    }
}
