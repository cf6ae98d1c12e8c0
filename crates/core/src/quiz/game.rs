//! Quiz game state machine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::questions::{Question, question_bank};

/// Questions per stage.
pub const QUESTIONS_PER_STAGE: usize = 5;

/// Number of stages in a full game.
pub const STAGE_COUNT: u8 = 4;

/// Banknotes awarded for correct answers, cycled by question index.
pub const BILL_REWARD_CYCLE: [Decimal; 5] =
    [dec!(20), dec!(25), dec!(50), dec!(100), dec!(200)];

/// How far a chosen answer may sit from the expected value and still count.
pub const ANSWER_TOLERANCE: Decimal = dec!(0.01);

/// Result of answering one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// Whether the choice matched the expected answer.
    pub correct: bool,
    /// The expected answer, for feedback display.
    pub expected: Decimal,
    /// The banknote earned, if the answer was correct.
    pub earned_bill: Option<Decimal>,
}

/// A single play-through of the quiz.
///
/// The game walks its question list in order; [`QuizGame::answer`] grades
/// the current question and advances. Score is the dirham value of the
/// banknotes earned; the host persists the best correct-answer count
/// between runs through its own storage.
#[derive(Debug, Clone)]
pub struct QuizGame {
    questions: Vec<Question>,
    current: usize,
    score: Decimal,
    correct_answers: u32,
    earned_bills: Vec<Decimal>,
}

impl QuizGame {
    /// Starts a game over the standard question bank.
    #[must_use]
    pub fn new() -> Self {
        Self::with_questions(question_bank())
    }

    /// Starts a game over a custom question list.
    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: Decimal::ZERO,
            correct_answers: 0,
            earned_bills: Vec::new(),
        }
    }

    /// The question awaiting an answer, or `None` once the game is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The stage the game is in (1-based); stays at the last stage once
    /// finished.
    #[must_use]
    pub fn stage(&self) -> u8 {
        if self.is_finished() {
            return STAGE_COUNT;
        }
        #[allow(clippy::cast_possible_truncation)]
        let stage = (self.current / QUESTIONS_PER_STAGE) as u8 + 1;
        stage
    }

    /// Grades `choice` against the current question and advances.
    ///
    /// A correct answer earns the next banknote from
    /// [`BILL_REWARD_CYCLE`]. Returns `None` when the game is already
    /// finished.
    pub fn answer(&mut self, choice: Decimal) -> Option<AnswerOutcome> {
        let question = self.questions.get(self.current)?;
        let expected = question.answer;
        let correct = (choice - expected).abs() < ANSWER_TOLERANCE;

        let earned_bill = if correct {
            let bill = BILL_REWARD_CYCLE[self.current % BILL_REWARD_CYCLE.len()];
            self.score += bill;
            self.correct_answers += 1;
            self.earned_bills.push(bill);
            Some(bill)
        } else {
            None
        };

        self.current += 1;
        Some(AnswerOutcome {
            correct,
            expected,
            earned_bill,
        })
    }

    /// True once every question has been answered.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Total dirham value of the banknotes earned so far.
    #[must_use]
    pub fn score(&self) -> Decimal {
        self.score
    }

    /// Number of correctly answered questions.
    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    /// The banknotes earned, in the order they were won.
    #[must_use]
    pub fn earned_bills(&self) -> &[Decimal] {
        &self.earned_bills
    }
}

impl Default for QuizGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_game() {
        let mut game = QuizGame::new();
        let mut earned = Vec::new();

        while let Some(question) = game.current_question().cloned() {
            let outcome = game.answer(question.answer).unwrap();
            assert!(outcome.correct);
            earned.push(outcome.earned_bill.unwrap());
        }

        assert!(game.is_finished());
        assert_eq!(game.correct_answers(), 20);
        // 4 full reward cycles of 20+25+50+100+200
        assert_eq!(game.score(), dec!(1580));
        assert_eq!(earned.len(), 20);
        assert_eq!(&earned[..5], &BILL_REWARD_CYCLE);
    }

    #[test]
    fn test_wrong_answer_earns_nothing() {
        let mut game = QuizGame::new();
        let outcome = game.answer(dec!(-1)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.earned_bill, None);
        assert_eq!(game.score(), dec!(0));
        assert_eq!(game.correct_answers(), 0);
        // the game still advances
        assert_eq!(game.current_index(), 1);
    }

    #[test]
    fn test_tolerance_accepts_near_answers() {
        let mut game = QuizGame::new();
        let expected = game.current_question().unwrap().answer;
        let outcome = game.answer(expected + dec!(0.005)).unwrap();
        assert!(outcome.correct);

        let expected = game.current_question().unwrap().answer;
        let outcome = game.answer(expected + dec!(0.01)).unwrap();
        assert!(!outcome.correct, "tolerance is strict");
    }

    #[test]
    fn test_stage_progression() {
        let mut game = QuizGame::new();
        assert_eq!(game.stage(), 1);
        for _ in 0..5 {
            game.answer(dec!(0));
        }
        assert_eq!(game.stage(), 2);
        for _ in 0..10 {
            game.answer(dec!(0));
        }
        assert_eq!(game.stage(), 4);
        for _ in 0..5 {
            game.answer(dec!(0));
        }
        assert!(game.is_finished());
        assert_eq!(game.stage(), STAGE_COUNT);
    }

    #[test]
    fn test_answering_after_the_end_is_a_noop() {
        let mut game = QuizGame::with_questions(Vec::new());
        assert!(game.is_finished());
        assert_eq!(game.answer(dec!(1)), None);
    }

    #[test]
    fn test_reward_cycle_repeats() {
        let mut game = QuizGame::new();
        for _ in 0..6 {
            let answer = game.current_question().unwrap().answer;
            game.answer(answer);
        }
        assert_eq!(game.earned_bills()[5], BILL_REWARD_CYCLE[0]);
    }
}
