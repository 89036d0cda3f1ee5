use crate::types::answer::AnswerRecord;
use crate::types::interview::Interview;
use serde::Serialize;
use utoipa::ToSchema;

/// User-facing message for any failed store read. Transient and permanent
/// failures collapse to the same notice; nothing is retried automatically.
pub const TRANSIENT_NOTICE: &str = "Something went wrong. Please try again later";

/// Mean of the ratings in scope, rounded half-away-from-zero to one decimal
/// and rendered with one fractional digit. The empty scope short-circuits to
/// the literal "0.0" rather than dividing by zero.
///
/// Pure function of the record list: callers recompute it when the list
/// changes and never otherwise.
pub fn overall_rating(records: &[AnswerRecord]) -> String {
    if records.is_empty() {
        return "0.0".to_string();
    }
    let total: f64 = records.iter().map(|record| record.rating).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / records.len() as f64;
    format!("{:.1}", (mean * 10.0).round() / 10.0)
}

/// Render-ready result of one feedback load.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeedbackView {
    /// Absent when the interview document does not exist; downstream
    /// rendering omits interview-specific chrome rather than erroring.
    pub interview: Option<Interview>,
    pub answers: Vec<AnswerRecord>,
    pub overall_rating: String,
    /// Set when the answers read failed and stale-or-empty data is shown.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    NotLoaded,
    Loading,
    Loaded,
    Failed,
}

/// Handle for one load generation. Completions carrying a ticket from a
/// superseded generation are dropped, so a read that resolves after the view
/// has moved on can never write into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// State for the feedback screen: one interview point-lookup and one scoped
/// answers scan, issued independently and completing in either order.
///
/// The busy flag covers the join of both fetches; it clears only once each
/// completion has arrived, whatever their order.
#[derive(Debug, Default)]
pub struct FeedbackViewModel {
    phase: LoadPhase,
    generation: u64,
    outstanding: u8,
    answers_failed: bool,
    interview: Option<Interview>,
    answers: Vec<AnswerRecord>,
    notice: Option<String>,
}

impl Default for LoadPhase {
    fn default() -> Self {
        Self::NotLoaded
    }
}

impl FeedbackViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load generation and invalidates every outstanding ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.outstanding = 2;
        self.answers_failed = false;
        self.notice = None;
        self.phase = LoadPhase::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Applies the interview point-lookup result. An absent document leaves
    /// the field unset; a failed read keeps whatever was loaded before.
    /// Neither is fatal to the screen.
    pub fn complete_interview<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Option<Interview>, E>,
    ) {
        if ticket.generation != self.generation {
            return;
        }
        if let Ok(Some(interview)) = result {
            self.interview = Some(interview);
        }
        self.settle();
    }

    /// Applies the scoped answers result. Failure raises the transient
    /// notice and leaves the previously loaded records untouched; it still
    /// counts toward clearing the busy flag.
    pub fn complete_answers<E>(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<AnswerRecord>, E>,
    ) {
        if ticket.generation != self.generation {
            return;
        }
        match result {
            Ok(records) => self.answers = records,
            Err(_) => {
                self.answers_failed = true;
                self.notice = Some(TRANSIENT_NOTICE.to_string());
            }
        }
        self.settle();
    }

    fn settle(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
        if self.outstanding == 0 {
            self.phase = if self.answers_failed {
                LoadPhase::Failed
            } else {
                LoadPhase::Loaded
            };
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn interview(&self) -> Option<&Interview> {
        self.interview.as_ref()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn overall_rating(&self) -> String {
        overall_rating(&self.answers)
    }

    pub fn into_view(self) -> FeedbackView {
        let overall_rating = overall_rating(&self.answers);
        FeedbackView {
            interview: self.interview,
            answers: self.answers,
            overall_rating,
            notice: self.notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AnswerError, InterviewError};
    use crate::types::ids::{AnswerId, InterviewId, UserId};
    use chrono::Utc;

    fn record(rating: f64) -> AnswerRecord {
        AnswerRecord {
            id: AnswerId::generate(),
            interview_id: InterviewId::generate(),
            user_id: UserId::new("user_1".to_string()).unwrap(),
            question: "What is ownership?".to_string(),
            user_answer: "Moves by default".to_string(),
            correct_answer: "Each value has a single owner".to_string(),
            feedback: "Close".to_string(),
            rating,
            created_at: Utc::now(),
        }
    }

    fn interview() -> Interview {
        let now = Utc::now();
        Interview {
            id: InterviewId::generate(),
            user_id: UserId::new("user_1".to_string()).unwrap(),
            position: "Backend Engineer".to_string(),
            description: "Rust services".to_string(),
            experience_years: 3,
            tech_stack: "rust, sqlite".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn rating_of_two_records() {
        let records = vec![record(7.0), record(9.0)];
        assert_eq!(overall_rating(&records), "8.0");
    }

    #[test]
    fn rating_rounds_half_up() {
        // 17 / 3 = 5.666...
        let records = vec![record(10.0), record(7.0), record(0.0)];
        assert_eq!(overall_rating(&records), "5.7");
    }

    #[test]
    fn rating_of_empty_scope_is_zero() {
        assert_eq!(overall_rating(&[]), "0.0");
    }

    #[test]
    fn rating_is_order_independent() {
        let mut records = vec![record(3.0), record(8.5), record(6.0), record(1.0)];
        let forward = overall_rating(&records);
        records.reverse();
        assert_eq!(overall_rating(&records), forward);
    }

    #[test]
    fn rating_reflects_source_range() {
        // Nothing clamps to 0-10; the mean mirrors whatever the grader wrote.
        let records = vec![record(14.0), record(14.0)];
        assert_eq!(overall_rating(&records), "14.0");
    }

    #[test]
    fn loading_clears_only_after_both_completions() {
        let mut vm = FeedbackViewModel::new();
        let ticket = vm.begin_load();
        assert!(vm.is_loading());

        vm.complete_interview(ticket, Ok::<_, InterviewError>(Some(interview())));
        assert!(vm.is_loading());

        vm.complete_answers(ticket, Ok::<_, AnswerError>(vec![record(7.0)]));
        assert!(!vm.is_loading());
        assert_eq!(vm.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn completions_arrive_in_either_order() {
        let mut vm = FeedbackViewModel::new();
        let ticket = vm.begin_load();

        vm.complete_answers(ticket, Ok::<_, AnswerError>(vec![record(9.0), record(7.0)]));
        assert!(vm.is_loading());
        vm.complete_interview(ticket, Ok::<_, InterviewError>(None));
        assert!(!vm.is_loading());

        assert!(vm.interview().is_none());
        assert_eq!(vm.overall_rating(), "8.0");
    }

    #[test]
    fn answers_failure_keeps_interview_and_raises_notice() {
        let mut vm = FeedbackViewModel::new();
        let ticket = vm.begin_load();
        vm.complete_interview(ticket, Ok::<_, InterviewError>(Some(interview())));
        vm.complete_answers(
            ticket,
            Err(AnswerError::Store {
                message: "connection reset".to_string(),
            }),
        );

        assert!(!vm.is_loading());
        assert_eq!(vm.phase(), LoadPhase::Failed);
        assert!(vm.interview().is_some());
        assert_eq!(vm.notice(), Some(TRANSIENT_NOTICE));
        assert_eq!(vm.overall_rating(), "0.0");
    }

    #[test]
    fn interview_failure_is_tolerated_silently() {
        let mut vm = FeedbackViewModel::new();
        let ticket = vm.begin_load();
        vm.complete_interview(
            ticket,
            Err(InterviewError::Store {
                message: "timeout".to_string(),
            }),
        );
        vm.complete_answers(ticket, Ok::<_, AnswerError>(vec![record(5.0)]));

        assert_eq!(vm.phase(), LoadPhase::Loaded);
        assert!(vm.interview().is_none());
        assert!(vm.notice().is_none());
    }

    #[test]
    fn stale_ticket_completions_are_dropped() {
        let mut vm = FeedbackViewModel::new();
        let stale = vm.begin_load();
        let current = vm.begin_load();

        vm.complete_answers(stale, Ok::<_, AnswerError>(vec![record(1.0)]));
        assert!(vm.answers().is_empty());
        assert!(vm.is_loading());

        vm.complete_interview(current, Ok::<_, InterviewError>(Some(interview())));
        vm.complete_answers(current, Ok::<_, AnswerError>(vec![record(10.0)]));
        assert_eq!(vm.overall_rating(), "10.0");

        // A very late completion from the old generation changes nothing.
        vm.complete_interview(stale, Ok::<_, InterviewError>(None));
        assert_eq!(vm.phase(), LoadPhase::Loaded);
        assert!(vm.interview().is_some());
    }

    #[test]
    fn reload_preserves_answers_across_a_failed_fetch() {
        let mut vm = FeedbackViewModel::new();
        let first = vm.begin_load();
        vm.complete_interview(first, Ok::<_, InterviewError>(Some(interview())));
        vm.complete_answers(first, Ok::<_, AnswerError>(vec![record(6.0)]));
        assert_eq!(vm.overall_rating(), "6.0");

        let second = vm.begin_load();
        vm.complete_interview(second, Ok::<_, InterviewError>(Some(interview())));
        vm.complete_answers(
            second,
            Err(AnswerError::Store {
                message: "unavailable".to_string(),
            }),
        );

        // Previously loaded records remain on screen alongside the notice.
        assert_eq!(vm.overall_rating(), "6.0");
        assert_eq!(vm.notice(), Some(TRANSIENT_NOTICE));
    }
}
