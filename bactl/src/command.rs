//! Invocation contract between the dispatch framework and command handlers.
//!
//! Each remote-control request reaches a handler as a read-only [`Parameters`] map plus a
//! write-only [`Response`] sink, both owned by the caller for the duration of the call. The
//! sink is single-shot: a handler records at most one terminal outcome per request.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// Named inputs supplied with a single remote-control protocol request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Parameters(Map<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Parameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Terminal outcome of one command, as recorded by its handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Success payload returned to the caller.
    Success(Value),
    /// Wire status code plus human-readable message.
    Error { status: u16, message: String },
}

/// Single-use sink through which a handler reports the outcome of one request.
#[derive(Debug, Default)]
pub struct Response {
    outcome: Option<Outcome>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a success payload. Ignored if an outcome was already recorded.
    pub fn set_value(&mut self, value: Value) {
        if self.outcome.is_some() {
            tracing::warn!("response outcome already recorded, dropping success value");
            return;
        }
        self.outcome = Some(Outcome::Success(value));
    }

    /// Record an error outcome, logging it at a severity matching its class.
    /// Ignored if an outcome was already recorded.
    pub fn set_error(&mut self, error: &Error) {
        if self.outcome.is_some() {
            tracing::warn!("response outcome already recorded, dropping error: {}", error);
            return;
        }

        match error {
            Error::Io { .. } | Error::Other(_) => {
                tracing::error!("Internal handler error: {:#}", error);
            }
            _ => {
                tracing::debug!("Client error: {}", error);
            }
        }

        self.outcome = Some(Outcome::Error {
            status: error.status_code(),
            message: error.user_message(),
        });
    }

    /// The recorded outcome, if any. `None` means the handler never reported.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }
}

/// A request handler invoked by the command-dispatch framework.
///
/// Handlers implement [`execute`](CommandHandler::execute) and return a success value or an
/// [`Error`]; the provided [`handle`](CommandHandler::handle) method records either into the
/// response sink, converting errors into their wire code and user-safe message.
pub trait CommandHandler {
    /// Execute the command against the supplied parameters.
    fn execute(&self, parameters: &Parameters) -> Result<Value>;

    /// Run the command and record its outcome into the response sink.
    fn handle(&self, parameters: &Parameters, response: &mut Response) {
        match self.execute(parameters) {
            Ok(value) => response.set_value(value),
            Err(error) => response.set_error(&error),
        }
    }
}
