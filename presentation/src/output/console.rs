//! Console output formatter for one-shot commands

use crate::config::OutputConfig;
use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use echoq_application::{FetchError, ModerationOutcome};
use echoq_domain::{Filter, Question, SessionToken};
use serde_json::json;

/// Local wall-clock rendering of a question timestamp
pub fn local_timestamp(asked_at: &DateTime<Utc>) -> String {
    asked_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// The live count line shown above every list
pub fn result_count_line(count: usize) -> String {
    format!("{} results...", count)
}

/// Formats command results for console display
pub struct ConsoleFormatter {
    config: OutputConfig,
}

impl ConsoleFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format a fetched list of questions
    pub fn format_questions(&self, questions: &[Question]) -> String {
        if self.config.is_json() {
            return serde_json::to_string_pretty(questions).unwrap_or_else(|_| "[]".to_string());
        }

        let mut output = String::new();
        output.push_str(&format!("{}\n", result_count_line(questions.len()).dimmed()));
        for question in questions {
            output.push('\n');
            output.push_str(&Self::card(question));
        }
        output
    }

    fn card(question: &Question) -> String {
        let label = question.visibility_label();
        let visibility = if question.show {
            label.green()
        } else {
            label.yellow()
        };
        format!(
            "{} {}  {}  {}\n{}\n",
            format!("#{}", question.order).cyan().bold(),
            format!("[id {}]", question.question_id).dimmed(),
            visibility,
            local_timestamp(&question.asked_at).dimmed(),
            Self::indent(&question.question, "    "),
        )
    }

    /// Format a failed list or search
    pub fn format_fetch_error(&self, filter: Filter, error: &FetchError) -> String {
        if self.config.is_json() {
            return json!({
                "status": "error",
                "filter": filter.as_str(),
                "message": error.to_string(),
            })
            .to_string();
        }
        format!(
            "{} could not load {} questions: {}",
            "x".red().bold(),
            filter,
            error
        )
    }

    /// Format the result of a moderation action
    pub fn format_outcome(&self, outcome: &ModerationOutcome) -> String {
        let notification = outcome.notification();
        if self.config.is_json() {
            return json!({
                "action": outcome.action.as_str(),
                "questionId": outcome.question_id,
                "status": notification.status.as_str(),
                "httpStatus": outcome.status,
                "message": notification.text,
            })
            .to_string();
        }
        if outcome.succeeded() {
            format!("{} {}", "v".green().bold(), notification.text)
        } else {
            format!("{} {}", "x".red().bold(), notification.text)
        }
    }

    /// Format the stored token for `token show`
    pub fn format_token(&self, token: Option<&SessionToken>, reveal: bool) -> String {
        let value = token.map(|t| {
            if reveal {
                t.as_str().to_string()
            } else {
                t.masked()
            }
        });
        if self.config.is_json() {
            return json!({ "token": value }).to_string();
        }
        match value {
            Some(v) => v,
            None => format!("{}", "no session token stored".dimmed()),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use echoq_domain::{ModerationAction, OutputFormat, QuestionId};

    fn plain() -> ConsoleFormatter {
        colored::control::set_override(false);
        ConsoleFormatter::new(OutputConfig::default())
    }

    fn json_formatter() -> ConsoleFormatter {
        ConsoleFormatter::new(OutputConfig {
            format: OutputFormat::Json,
            color: false,
        })
    }

    fn question(order: u32, id: i64, text: &str, show: bool) -> Question {
        let asked_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Question::new(order, QuestionId(id), text, show, asked_at)
    }

    #[test]
    fn test_plain_list_has_count_and_cards() {
        let output = plain().format_questions(&[
            question(1, 10, "first?", false),
            question(2, 11, "second?\nmore", true),
        ]);

        assert!(output.starts_with("2 results..."));
        assert!(output.contains("#1 [id 10]  hidden"));
        assert!(output.contains("#2 [id 11]  public"));
        assert!(output.contains("    second?\n    more"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(plain().format_questions(&[]), "0 results...\n");
    }

    #[test]
    fn test_json_list_uses_wire_names() {
        let output = json_formatter().format_questions(&[question(1, 10, "q", true)]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["questionId"], 10);
        assert_eq!(value[0]["show"], true);
        assert!(value[0]["askedAt"].is_string());
    }

    #[test]
    fn test_outcome_texts() {
        let outcome = ModerationOutcome {
            action: ModerationAction::Turn,
            question_id: QuestionId(42),
            status: 200,
        };
        assert_eq!(
            plain().format_outcome(&outcome),
            "v Succesesfully changed the visibility"
        );

        let failed = ModerationOutcome { status: 500, ..outcome };
        let value: serde_json::Value =
            serde_json::from_str(&json_formatter().format_outcome(&failed)).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["httpStatus"], 500);
        assert_eq!(value["message"], "Failed to change the visibility");
    }

    #[test]
    fn test_token_masked_by_default() {
        let token = SessionToken::new("abcdef123456").unwrap();
        let formatter = plain();
        assert_eq!(formatter.format_token(Some(&token), false), token.masked());
        assert_eq!(formatter.format_token(Some(&token), true), "abcdef123456");
        assert_eq!(formatter.format_token(None, false), "no session token stored");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }
}
