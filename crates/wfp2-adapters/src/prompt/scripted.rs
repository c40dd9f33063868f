//! Pre-recorded answers for driving the generator in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use wfp2_core::{application::ports::Prompt, error::GeneratorResult};

use super::prompt_failed;

/// One queued answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    YesNo(bool),
    Text(String),
}

/// Replays answers in order and records the questions asked.
///
/// Asking a yes/no question when a text answer is next (or the other way
/// round), or asking after the script ran out, fails the prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yes(self) -> Self {
        self.push(Answer::YesNo(true))
    }

    pub fn no(self) -> Self {
        self.push(Answer::YesNo(false))
    }

    pub fn text(self, answer: impl Into<String>) -> Self {
        self.push(Answer::Text(answer.into()))
    }

    /// Shorthand for "yes" followed by the action name.
    pub fn action(self, name: impl Into<String>) -> Self {
        self.yes().text(name)
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or_default()
    }

    fn push(self, answer: Answer) -> Self {
        if let Ok(mut answers) = self.answers.lock() {
            answers.push_back(answer);
        }
        self
    }

    fn next(&self, message: &str) -> GeneratorResult<Answer> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(message.to_owned());
        }
        self.answers
            .lock()
            .map_err(|_| prompt_failed("script lock poisoned"))?
            .pop_front()
            .ok_or_else(|| prompt_failed(format!("no scripted answer for '{message}'")))
    }
}

impl Prompt for ScriptedPrompt {
    fn ask_yes_no(&self, message: &str) -> GeneratorResult<bool> {
        match self.next(message)? {
            Answer::YesNo(answer) => Ok(answer),
            Answer::Text(text) => Err(prompt_failed(format!(
                "expected a yes/no answer for '{message}', script has text '{text}'"
            ))),
        }
    }

    fn ask_text(&self, message: &str) -> GeneratorResult<String> {
        match self.next(message)? {
            Answer::Text(text) => Ok(text),
            Answer::YesNo(answer) => Err(prompt_failed(format!(
                "expected text for '{message}', script has {answer}"
            ))),
        }
    }
}
