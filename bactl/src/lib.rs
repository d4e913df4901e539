//! # bactl: Command handlers for a browser-automation driver
//!
//! `bactl` is the command-handler layer of a browser-automation driver. A remote-control
//! protocol server (external to this crate) parses incoming commands and dispatches each one
//! to a handler together with its parameter map and a response sink. This crate provides the
//! invocation contract for those handlers and the handlers themselves.
//!
//! ## Overview
//!
//! The one command implemented today is `saveFile`: a client sends the content of a file as a
//! base64-encoded `file` parameter, and the handler decodes it and persists it under a freshly
//! generated UUID name in the host's scratch directory. The success value carries the
//! identifier and the written path so the caller can reference the file in later commands.
//!
//! ## Request Flow
//!
//! The dispatch framework hands a [`command::Parameters`] map and a [`command::Response`] sink
//! to [`command::CommandHandler::handle`]. The handler validates its parameters, performs its
//! side effect, and records exactly one terminal outcome: a success value, or a wire status
//! code plus a human-readable message derived from the [`errors::Error`] taxonomy. Handlers
//! run synchronously on the calling thread and share no state across invocations.
//!
//! ## Core Components
//!
//! The **invocation contract** ([`command`]) defines the parameter map, the single-shot
//! response sink, and the [`command::CommandHandler`] trait the dispatch framework calls.
//!
//! The **handlers** ([`handlers`]) implement individual commands.
//! [`handlers::SaveFileHandler`] validates the `file` parameter, decodes it ([`decode`]),
//! resolves the scratch directory ([`temp_dir`]), and writes the payload to
//! `<temp-dir>/<uuid>.txt`.
//!
//! The **configuration layer** ([`config`]) loads settings from a YAML file with
//! `BACTL_`-prefixed environment overrides, and selects the temp-directory provider: a fixed
//! configured path, or the `TEMP` environment variable at request time.
//!
//! [`telemetry`] initializes the `tracing` subscriber for embedding processes that do not
//! install their own.

pub mod command;
pub mod config;
pub mod decode;
pub mod errors;
pub mod handlers;
pub mod telemetry;
pub mod temp_dir;

pub use command::{CommandHandler, Outcome, Parameters, Response};
pub use config::Config;
pub use errors::{Error, Result};
pub use handlers::SaveFileHandler;
