//! Question Collection State
//!
//! Holds the ordered list of questions from the most recent completed fetch.
//! A fetch is split in three steps so the request itself can run on a
//! spawned task while the list stays owned by one place:
//!
//! 1. [`QuestionCollection::begin`] assigns the next sequence number
//! 2. [`QuestionCollection::fetch`] performs the request (no list access)
//! 3. [`QuestionCollection::apply`] installs the result unless a newer
//!    fetch has been issued in the meantime
//!
//! [`get_questions`](QuestionCollection::get_questions) and
//! [`search_question`](QuestionCollection::search_question) run all three
//! steps in sequence for callers that do not need concurrency.

use crate::config::ApiParams;
use crate::ports::http_client::ApiRequest;
use crate::use_cases::request_helper::RequestHelper;
use echoq_domain::{Filter, Question};
use thiserror::Error;
use tracing::{debug, warn};
use url::form_urlencoded;

/// What to fetch: the plain list for a filter, or a search within it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionQuery {
    List { filter: Filter },
    Search { term: String, filter: Filter },
}

impl QuestionQuery {
    pub fn list(filter: Filter) -> Self {
        Self::List { filter }
    }

    pub fn search(term: impl Into<String>, filter: Filter) -> Self {
        Self::Search {
            term: term.into(),
            filter,
        }
    }

    /// Query for a settled search-box value: empty means the plain list
    pub fn for_term(term: &str, filter: Filter) -> Self {
        if term.is_empty() {
            Self::list(filter)
        } else {
            Self::search(term, filter)
        }
    }

    pub fn filter(&self) -> Filter {
        match self {
            Self::List { filter } | Self::Search { filter, .. } => *filter,
        }
    }

    pub fn term(&self) -> Option<&str> {
        match self {
            Self::List { .. } => None,
            Self::Search { term, .. } => Some(term),
        }
    }

    pub fn to_request(&self, params: &ApiParams) -> ApiRequest {
        let mut query = form_urlencoded::Serializer::new(String::new());
        let path = match self {
            Self::List { filter } => {
                query.append_pair("filter", filter.as_str());
                &params.list_path
            }
            Self::Search { term, filter } => {
                query.append_pair("term", term);
                query.append_pair("filter", filter.as_str());
                &params.search_path
            }
        };
        ApiRequest::get(format!("{}?{}", path, query.finish()))
    }
}

impl std::fmt::Display for QuestionQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { filter } => write!(f, "{} questions", filter),
            Self::Search { term, filter } => write!(f, "search \"{}\" in {}", term, filter),
        }
    }
}

/// A fetch that has been issued but not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: QuestionQuery,
}

/// Why a fetch produced no list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("backend answered with status {0}")]
    Status(u16),

    #[error("response is not a list of questions: {0}")]
    InvalidPayload(String),
}

/// Result of a fetch, tagged with the ticket it answers
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub seq: u64,
    pub query: QuestionQuery,
    pub result: Result<Vec<Question>, FetchError>,
}

/// What [`QuestionCollection::apply`] did with a completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The held list was replaced
    Applied { count: usize },
    /// A newer fetch was issued; the completion was dropped
    Stale,
    /// The fetch failed; the held list is unchanged
    Failed(FetchError),
}

#[derive(Debug, Default)]
pub struct QuestionCollection {
    questions: Vec<Question>,
    last_issued: u64,
    active_query: Option<QuestionQuery>,
}

impl QuestionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new fetch. Every earlier outstanding fetch becomes stale.
    pub fn begin(&mut self, query: QuestionQuery) -> FetchTicket {
        self.last_issued += 1;
        self.active_query = Some(query.clone());
        FetchTicket {
            seq: self.last_issued,
            query,
        }
    }

    /// Perform the request for `ticket`.
    pub async fn fetch(helper: RequestHelper, ticket: FetchTicket) -> FetchCompletion {
        let request = ticket.query.to_request(helper.params());
        let response = helper.make_request(request).await;

        let result = if response.is_success() {
            serde_json::from_value::<Vec<Question>>(response.body)
                .map_err(|e| FetchError::InvalidPayload(e.to_string()))
        } else {
            Err(FetchError::Status(response.status))
        };

        FetchCompletion {
            seq: ticket.seq,
            query: ticket.query,
            result,
        }
    }

    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        if completion.seq < self.last_issued {
            debug!(
                "Dropping stale response #{} for {} (latest is #{})",
                completion.seq, completion.query, self.last_issued
            );
            return ApplyOutcome::Stale;
        }

        match completion.result {
            Ok(questions) => {
                let count = questions.len();
                self.questions = questions;
                debug!("Loaded {} for {}", count, completion.query);
                ApplyOutcome::Applied { count }
            }
            Err(e) => {
                warn!("Fetching {} failed: {}", completion.query, e);
                ApplyOutcome::Failed(e)
            }
        }
    }

    /// Fetch the list for `filter` and install it.
    pub async fn get_questions(&mut self, helper: &RequestHelper, filter: Filter) -> ApplyOutcome {
        let ticket = self.begin(QuestionQuery::list(filter));
        let completion = Self::fetch(helper.clone(), ticket).await;
        self.apply(completion)
    }

    /// Search `term` within `filter` and install the result.
    pub async fn search_question(
        &mut self,
        helper: &RequestHelper,
        term: &str,
        filter: Filter,
    ) -> ApplyOutcome {
        let ticket = self.begin(QuestionQuery::search(term, filter));
        let completion = Self::fetch(helper.clone(), ticket).await;
        self.apply(completion)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Query of the most recently issued fetch
    pub fn active_query(&self) -> Option<&QuestionQuery> {
        self.active_query.as_ref()
    }
}
