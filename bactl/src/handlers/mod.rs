//! Command handlers for the remote-control protocol.
//!
//! Each handler implements [`CommandHandler`](crate::command::CommandHandler); the dispatch
//! framework maps command names to handler instances and invokes them per request.

pub mod save_file;

pub use save_file::SaveFileHandler;
