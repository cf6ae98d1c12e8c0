//! Conversion quiz engine.
//!
//! A fixed 20-question game over the offline conversion table: four stages
//! of five questions, multiple choice, with banknote rewards for correct
//! answers. Everything here is pure state; rendering, timers and best-score
//! persistence belong to the host.

mod game;
mod questions;

pub use game::{
    ANSWER_TOLERANCE, AnswerOutcome, BILL_REWARD_CYCLE, QUESTIONS_PER_STAGE, QuizGame, STAGE_COUNT,
};
pub use questions::{Question, question_bank};
