use thiserror::Error;

/// Errors produced while invoking a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
	/// The command needs an active editor and none is available.
	#[error("an active editor is required")]
	EditorRequired,
	/// The host's cancellation token fired while the command ran.
	#[error("command was cancelled")]
	Cancelled,
	/// A required argument field was not provided.
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Command identifier was not found in the registry.
	#[error("command not found: {0}")]
	NotFound(String),
	/// General command failure with message.
	#[error("{0}")]
	Failed(String),
}

/// Errors raised while building a [`CommandRegistry`](crate::CommandRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("command {0:?} is already registered")]
	Duplicate(String),
}
