use chrono::{DateTime, Duration, Utc};
use std::fmt;

use quiz_core::model::{Question, QuestionSet};
use quiz_core::{Clock, QUIZ_LENGTH, Tier, max_possible_score};
use tracing::{debug, info};

use super::outcome::{AnswerOutcome, OutcomeKind};
use super::progress::QuizProgress;
use super::summary::{FinishReason, QuizSummary};
use crate::questions::QuestionSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Unstarted,
    Active,
    Finished(FinishReason),
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One player's quiz game.
///
/// Steps through twelve questions in tier order. A wrong answer ends the game
/// immediately; twelve correct answers complete it. The hosting application owns
/// one `QuizSession` per game and passes it to whoever drives it.
pub struct QuizSession {
    clock: Clock,
    questions: Option<QuestionSet>,
    current: usize,
    score: u32,
    phase: Phase,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// An unstarted session using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Clock::system())
    }

    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            questions: None,
            current: 0,
            score: 0,
            phase: Phase::Unstarted,
            started_at: None,
            finished_at: None,
        }
    }

    /// Fetch questions for `topic` and begin a fresh game.
    ///
    /// Returns whether the game is now running, which is always the case: the
    /// source substitutes its built-in set on any failure.
    pub async fn start(&mut self, source: &QuestionSource, topic: &str) -> bool {
        info!(topic, "starting quiz");
        let questions = source.fetch(topic).await;
        self.begin(questions);
        self.phase == Phase::Active
    }

    /// Begin a fresh game with the given questions, replacing all prior state.
    pub fn begin(&mut self, questions: QuestionSet) {
        let started_at = self.clock.now();
        *self = Self {
            clock: self.clock,
            questions: Some(questions),
            current: 0,
            score: 0,
            phase: Phase::Active,
            started_at: Some(started_at),
            finished_at: None,
        };
    }

    /// The question awaiting an answer, if the game is running.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase != Phase::Active {
            return None;
        }
        self.questions.as_ref()?.get(self.current)
    }

    #[must_use]
    pub fn current_level(&self) -> Tier {
        Tier::for_index(self.current)
    }

    /// Answer the current question with a letter `a`-`d` (any case).
    ///
    /// Any other input counts as a wrong answer. Calling this when the game is
    /// not running returns a game-over outcome and changes nothing.
    pub fn submit_answer(&mut self, choice: &str) -> AnswerOutcome {
        if self.phase != Phase::Active {
            return AnswerOutcome::ended(OutcomeKind::NotRunning, self.score);
        }

        let Some((correct_answer, is_correct)) = self
            .current_question()
            .map(|question| (question.answer(), question.is_correct(choice)))
        else {
            self.finish(FinishReason::OutOfQuestions);
            return AnswerOutcome::ended(OutcomeKind::NoMoreQuestions, self.score);
        };

        let points = self.current_level().points();

        if !is_correct {
            debug!(question = self.current + 1, choice, "wrong answer");
            self.finish(FinishReason::WrongAnswer);
            return AnswerOutcome::wrong(correct_answer, self.score);
        }

        self.score += points;
        self.current += 1;

        let next_question_number = if self.current >= QUIZ_LENGTH {
            self.finish(FinishReason::Completed);
            None
        } else {
            Some(self.current + 1)
        };

        AnswerOutcome::correct(correct_answer, points, self.score, next_question_number)
    }

    fn finish(&mut self, reason: FinishReason) {
        self.phase = Phase::Finished(reason);
        self.finished_at = Some(self.clock.now());
        info!(?reason, score = self.score, correct = self.current, "quiz finished");
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Unstarted
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Zero-based position; equals the number of correct answers so far.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        match self.phase {
            Phase::Finished(reason) => Some(reason),
            Phase::Unstarted | Phase::Active => None,
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current_question_number: self.current + 1,
            total_questions: QUIZ_LENGTH,
            score: self.score,
            level: self.current_level(),
        }
    }

    #[must_use]
    pub fn max_possible_score(&self) -> u32 {
        max_possible_score()
    }

    /// Time spent so far, or the length of a finished game.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end - start,
            (Some(start), None) => self.clock.elapsed_since(start),
            (None, _) => Duration::zero(),
        }
    }

    /// Results of a finished game; `None` while unstarted or running.
    #[must_use]
    pub fn summary(&self) -> Option<QuizSummary> {
        let reason = self.finish_reason()?;
        Some(QuizSummary {
            score: self.score,
            max_score: max_possible_score(),
            correct_count: self.current,
            total_questions: QUIZ_LENGTH,
            reason,
            started_at: self.started_at?,
            finished_at: self.finished_at?,
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("score", &self.score)
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::fallback_questions;
    use quiz_core::model::ChoiceKey;
    use quiz_core::time::{test_clock, test_epoch};

    fn started() -> QuizSession {
        let mut session = QuizSession::with_clock(test_clock());
        session.begin(fallback_questions());
        session
    }

    fn wrong_letter(answer: ChoiceKey) -> &'static str {
        if answer == ChoiceKey::A { "b" } else { "a" }
    }

    fn answer_correctly(session: &mut QuizSession) -> AnswerOutcome {
        let answer = session.current_question().unwrap().answer();
        session.submit_answer(answer.as_str())
    }

    #[test]
    fn new_session_is_unstarted() {
        let session = QuizSession::new();
        assert!(!session.is_started());
        assert!(!session.is_over());
        assert!(session.current_question().is_none());
        assert!(session.summary().is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn begin_activates_at_first_question() {
        let session = started();
        assert!(session.is_started());
        assert!(!session.is_over());
        assert_eq!(session.current_index(), 0);
        assert_eq!(
            session.current_question().unwrap().text(),
            "What is the capital of France?"
        );
        assert_eq!(session.current_level(), Tier::Easy);
    }

    #[test]
    fn first_fallback_question_accepts_uppercase_answer() {
        let mut session = started();
        assert_eq!(session.current_question().unwrap().answer(), ChoiceKey::B);

        let outcome = session.submit_answer("B");

        assert!(outcome.correct);
        assert_eq!(outcome.correct_answer, Some(ChoiceKey::B));
        assert_eq!(outcome.points_earned, 10);
        assert_eq!(outcome.total_score, 10);
        assert!(!outcome.game_over);
        assert_eq!(outcome.next_question_number, Some(2));
        assert_eq!(outcome.message(), "Correct!");
    }

    #[test]
    fn wrong_answer_in_medium_tier_ends_game() {
        let mut session = started();
        for _ in 0..4 {
            answer_correctly(&mut session);
        }
        assert_eq!(session.progress().current_question_number, 5);
        assert_eq!(session.current_level(), Tier::Medium);
        let before = session.score();
        assert_eq!(before, 40);

        let answer = session.current_question().unwrap().answer();
        let outcome = session.submit_answer(wrong_letter(answer));

        assert!(!outcome.correct);
        assert_eq!(outcome.points_earned, 0);
        assert!(outcome.game_over);
        assert_eq!(outcome.next_question_number, None);
        assert_eq!(outcome.total_score, before);
        assert_eq!(
            outcome.message(),
            format!("Wrong! Correct answer was {answer}")
        );
        assert_eq!(session.score(), before);
        assert_eq!(session.current_index(), 4);
        assert!(session.is_over());
        assert!(session.current_question().is_none());
        assert_eq!(session.finish_reason(), Some(FinishReason::WrongAnswer));
    }

    #[test]
    fn twelve_correct_answers_score_the_maximum() {
        let mut session = started();
        let mut expected = 0;
        let mut last = None;

        for index in 0..QUIZ_LENGTH {
            expected += Tier::for_index(index).points();
            let outcome = answer_correctly(&mut session);
            assert!(outcome.correct);
            assert_eq!(outcome.total_score, expected);
            last = Some(outcome);
        }

        let last = last.unwrap();
        assert!(last.game_over);
        assert_eq!(last.points_earned, 30);
        assert_eq!(last.next_question_number, None);
        assert!(session.is_over());
        assert_eq!(session.score(), 240);
        assert_eq!(session.score(), session.max_possible_score());
        assert_eq!(session.finish_reason(), Some(FinishReason::Completed));
    }

    #[test]
    fn malformed_input_is_just_wrong() {
        for input in ["", " b", "bb", "x", "2"] {
            let mut session = started();
            let outcome = session.submit_answer(input);
            assert!(!outcome.correct, "input {input:?}");
            assert!(outcome.game_over);
            assert_eq!(outcome.kind, OutcomeKind::Wrong { correct_answer: ChoiceKey::B });
        }
    }

    #[test]
    fn submitting_before_start_changes_nothing() {
        let mut session = QuizSession::new();
        let outcome = session.submit_answer("a");

        assert!(!outcome.correct);
        assert!(outcome.game_over);
        assert_eq!(outcome.correct_answer, None);
        assert_eq!(outcome.kind, OutcomeKind::NotRunning);
        assert!(!session.is_started());
        assert!(!session.is_over());
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn submitting_after_game_over_changes_nothing() {
        let mut session = started();
        answer_correctly(&mut session);
        session.submit_answer("z");
        let score = session.score();
        let index = session.current_index();

        let outcome = session.submit_answer("c");

        assert_eq!(outcome.kind, OutcomeKind::NotRunning);
        assert!(outcome.game_over);
        assert_eq!(outcome.points_earned, 0);
        assert_eq!(outcome.total_score, score);
        assert_eq!(session.score(), score);
        assert_eq!(session.current_index(), index);
        assert_eq!(session.finish_reason(), Some(FinishReason::WrongAnswer));
    }

    #[test]
    fn restart_replaces_all_state() {
        let mut session = started();
        answer_correctly(&mut session);
        answer_correctly(&mut session);
        session.submit_answer("z");
        assert!(session.is_over());

        session.begin(fallback_questions());

        assert!(!session.is_over());
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
        assert!(session.summary().is_none());
        assert!(session.current_question().is_some());
    }

    #[test]
    fn position_past_the_end_closes_the_session() {
        let mut session = started();
        session.current = QUIZ_LENGTH;

        assert!(session.current_question().is_none());
        let outcome = session.submit_answer("a");

        assert_eq!(outcome.kind, OutcomeKind::NoMoreQuestions);
        assert_eq!(outcome.message(), "No more questions");
        assert!(outcome.game_over);
        assert!(session.is_over());
        assert_eq!(session.finish_reason(), Some(FinishReason::OutOfQuestions));
        assert_eq!(session.current_level(), Tier::Hard);
    }

    #[test]
    fn progress_tracks_level_and_score() {
        let mut session = started();
        let progress = session.progress();
        assert_eq!(progress.current_question_number, 1);
        assert_eq!(progress.total_questions, 12);
        assert_eq!(progress.score, 0);
        assert_eq!(progress.level, Tier::Easy);

        for _ in 0..8 {
            answer_correctly(&mut session);
        }
        let progress = session.progress();
        assert_eq!(progress.current_question_number, 9);
        assert_eq!(progress.score, 40 + 80);
        assert_eq!(progress.level, Tier::Hard);
        assert_eq!(progress.level, session.current_level());
    }

    #[test]
    fn summary_counts_position_not_score() {
        let mut session = started();
        for _ in 0..6 {
            answer_correctly(&mut session);
        }
        session.clock.advance(Duration::seconds(42));
        session.submit_answer("not a letter");

        let summary = session.summary().unwrap();
        assert_eq!(summary.correct_count, 6);
        assert_eq!(summary.score, 4 * 10 + 2 * 20);
        assert_eq!(summary.max_score, 240);
        assert_eq!(summary.total_questions, 12);
        assert_eq!(summary.reason, FinishReason::WrongAnswer);
        assert_eq!(summary.started_at, test_epoch());
        assert_eq!(summary.finished_at, test_epoch() + Duration::seconds(42));
        assert_eq!(summary.duration(), Duration::seconds(42));
        assert_eq!(summary.percentage(), 33);
        assert!(!summary.is_perfect());
    }

    #[test]
    fn elapsed_runs_while_active_and_freezes_at_finish() {
        let mut session = QuizSession::with_clock(test_clock());
        assert_eq!(session.elapsed(), Duration::zero());

        session.begin(fallback_questions());
        session.clock.advance(Duration::seconds(10));
        assert_eq!(session.elapsed(), Duration::seconds(10));

        session.submit_answer("z");
        session.clock.advance(Duration::seconds(30));
        assert_eq!(session.elapsed(), Duration::seconds(10));
    }
}
