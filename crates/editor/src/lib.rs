#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editor host for the invocation pipeline.
//!
//! # Main Types
//!
//! - [`Editor`] - Owns buffers, the command registry, the ambient prefix
//!   session, and the macro recorder
//! - [`Buffer`] - A text buffer with selections and snapshot undo history
//! - [`MacroRecorder`] - Recent commands and per-register macros
//!
//! # Flow
//!
//! ```text
//! Editor::execute(identifier, argument)
//! └── strand_invocation::execute      // enrich, run, record, undo stop
//!     ├── handler (commands::*)       // edits the active Buffer
//!     └── Host::record_command        // MacroRecorder
//! ```
//!
//! Macros and `history.repeat` go back through [`replay::replay_commands`],
//! which runs the stored handlers without the pipeline's bookkeeping.

pub mod buffer;
pub mod commands;
pub mod config;
mod editor;
pub mod history;
pub mod logging;
pub mod notifications;
pub mod recorder;
pub mod replay;

pub use buffer::{Buffer, BufferId};
pub use config::{Config, ConfigError};
pub use editor::Editor;
pub use logging::LogConfig;
pub use notifications::{Notification, NotificationCenter};
pub use recorder::{MacroRecorder, RecordedCommand, RecorderError};
pub use strand_invocation::{Argument, InvocationResult, Register};
