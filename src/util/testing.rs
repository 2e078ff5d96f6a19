//! Test support: logging bootstrap and a scripted prompter

use std::collections::VecDeque;
use std::env;
use std::io;
use std::sync::{Mutex, Once};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::infrastructure::traits::Prompter;

static TEST_SETUP: Once = Once::new();

/// Install a global tracing subscriber for tests, once per process.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_ok() {
            info!("test setup complete");
        }
    });
}

/// Prompter replaying canned answers, for driving the collector in
/// tests.
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().expect("prompter lock").len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, _message: &str) -> io::Result<String> {
        self.answers
            .lock()
            .expect("prompter lock")
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
