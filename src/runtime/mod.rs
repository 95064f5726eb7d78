//! Candidate-side state for taking one assessment.

pub mod countdown;

use std::collections::BTreeMap;

use chrono::Utc;

pub use countdown::{spawn_countdown, SharedRuntime};

use crate::error::{Error, Result};
use crate::models::assessment::{Assessment, CandidateResponse, QuestionAnswer};
use crate::models::question::Question;
use crate::models::EntityId;

/// Below this many seconds the timer is shown as a warning.
pub const LOW_TIME_THRESHOLD_SECS: u64 = 300;

/// Result of a submit: how many questions got an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub answered: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct AssessmentRuntime {
    assessment_id: EntityId,
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<EntityId, String>,
    time_remaining: u64,
    submitted: bool,
}

impl AssessmentRuntime {
    pub fn start(assessment: &Assessment) -> Self {
        Self {
            assessment_id: assessment.id,
            questions: assessment.questions.clone(),
            current: 0,
            answers: BTreeMap::new(),
            time_remaining: u64::from(assessment.time_limit) * 60,
            submitted: false,
        }
    }

    pub fn assessment_id(&self) -> EntityId {
        self.assessment_id
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// No-op on the last question.
    pub fn next(&mut self) {
        if self.submitted {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// No-op on the first question.
    pub fn previous(&mut self) {
        if self.submitted {
            return;
        }
        self.current = self.current.saturating_sub(1);
    }

    /// Jumps to `index`; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if !self.submitted && index < self.questions.len() {
            self.current = index;
        }
    }

    /// Records or replaces the answer for `question_id`, independent of the
    /// current position.
    pub fn answer(&mut self, question_id: EntityId, value: impl Into<String>) {
        if self.submitted {
            return;
        }
        self.answers.insert(question_id, value.into());
    }

    pub fn answer_for(&self, question_id: EntityId) -> Option<&str> {
        self.answers.get(&question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// One second off the clock, floored at zero. Running out of time does
    /// not submit.
    pub fn tick(&mut self) {
        self.time_remaining = self.time_remaining.saturating_sub(1);
    }

    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    pub fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }

    pub fn is_low_time(&self) -> bool {
        self.time_remaining < LOW_TIME_THRESHOLD_SECS
    }

    /// `MM:SS`; minutes keep counting past 99.
    pub fn formatted_time(&self) -> String {
        format!("{:02}:{:02}", self.time_remaining / 60, self.time_remaining % 60)
    }

    /// Position through the questions as a percentage.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64 * 100.0
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Answers in question order, ready for the submit endpoint.
    pub fn to_response(&self, candidate_id: EntityId) -> CandidateResponse {
        CandidateResponse {
            candidate_id,
            responses: self
                .answers
                .iter()
                .map(|(question_id, answer)| QuestionAnswer {
                    question_id: *question_id,
                    answer: answer.clone(),
                })
                .collect(),
            submitted_at: Utc::now(),
            score: None,
        }
    }

    /// Ends the attempt. Allowed after the timer has run out; allowed once.
    pub fn submit(&mut self) -> Result<Submission> {
        if self.submitted {
            return Err(Error::InvalidState(format!(
                "assessment {} already submitted",
                self.assessment_id
            )));
        }
        self.submitted = true;
        let submission = Submission {
            answered: self.answers.len(),
            total: self.questions.len(),
        };
        tracing::info!(
            assessment_id = self.assessment_id,
            answered = submission.answered,
            total = submission.total,
            "assessment submitted"
        );
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::Seed;

    fn frontend_runtime() -> AssessmentRuntime {
        AssessmentRuntime::start(&Seed::demo().assessments[0])
    }

    #[test]
    fn starts_at_first_question_with_full_time() {
        let runtime = frontend_runtime();
        assert_eq!(runtime.current_index(), 0);
        assert_eq!(runtime.time_remaining(), 60 * 60);
        assert_eq!(runtime.formatted_time(), "60:00");
        assert!(!runtime.is_low_time());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut runtime = frontend_runtime();
        runtime.previous();
        assert_eq!(runtime.current_index(), 0);

        runtime.next();
        runtime.next();
        assert_eq!(runtime.current_index(), 1);
        assert_eq!(runtime.progress(), 100.0);

        runtime.go_to(7);
        assert_eq!(runtime.current_index(), 1);
        runtime.go_to(0);
        assert_eq!(runtime.current_index(), 0);
    }

    #[test]
    fn answering_twice_overwrites() {
        let mut runtime = frontend_runtime();
        runtime.answer(2, "first draft");
        runtime.answer(2, "final answer");
        assert_eq!(runtime.answered_count(), 1);
        assert_eq!(runtime.answer_for(2), Some("final answer"));
        // Not tied to the current question.
        assert_eq!(runtime.current_index(), 0);
    }

    #[test]
    fn tick_floors_at_zero_and_warns_below_five_minutes() {
        let mut runtime = AssessmentRuntime::start(&Assessment {
            time_limit: 5,
            ..Seed::demo().assessments[0].clone()
        });
        runtime.tick();
        assert_eq!(runtime.time_remaining(), 299);
        assert!(runtime.is_low_time());
        assert_eq!(runtime.formatted_time(), "04:59");

        for _ in 0..400 {
            runtime.tick();
        }
        assert_eq!(runtime.time_remaining(), 0);
        assert!(runtime.is_expired());
        assert!(!runtime.is_submitted());
    }

    #[test]
    fn submit_reports_counts_once() {
        let mut runtime = frontend_runtime();
        runtime.answer(1, "Library");
        let submission = tokio_test::assert_ok!(runtime.submit());
        assert_eq!(submission, Submission { answered: 1, total: 2 });

        runtime.answer(2, "late");
        assert_eq!(runtime.answered_count(), 1);
        let err = tokio_test::assert_err!(runtime.submit());
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn response_lists_answers_by_question() {
        let mut runtime = frontend_runtime();
        runtime.answer(2, "Functions capturing scope");
        runtime.answer(1, "Library");
        let response = runtime.to_response(3);
        assert_eq!(response.candidate_id, 3);
        let ids: Vec<EntityId> = response.responses.iter().map(|r| r.question_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
