use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, debug, trace, trace_span, warn};

use crate::{Argument, CommandDescriptor, CommandError, CommandResult, Host};

/// Outcome of an invocation, after the failure (if any) has been reported.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationResult {
	/// The handler's value.
	Ok(Value),
	/// No command is registered under the identifier.
	NotFound(String),
	/// The command failed; the message that was reported.
	Failed(String),
}

impl InvocationResult {
	pub fn is_ok(&self) -> bool {
		matches!(self, Self::Ok(_))
	}

	pub fn value(&self) -> Option<&Value> {
		match self {
			Self::Ok(value) => Some(value),
			_ => None,
		}
	}

	/// The handler's value, or `fallback` if the invocation failed.
	pub fn value_or(self, fallback: Value) -> Value {
		match self {
			Self::Ok(value) => value,
			_ => fallback,
		}
	}

	/// The reported message of a failed invocation.
	pub fn message(&self) -> Option<&str> {
		match self {
			Self::Ok(_) => None,
			Self::NotFound(message) | Self::Failed(message) => Some(message),
		}
	}
}

impl fmt::Display for InvocationResult {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Ok(Value::Null) => f.write_str("ok"),
			Self::Ok(value) => write!(f, "{value}"),
			Self::NotFound(message) | Self::Failed(message) => f.write_str(message),
		}
	}
}

/// Looks up `identifier` in the host's registry and [`invoke`]s it.
///
/// An unknown identifier is reported like any other failure.
pub async fn execute<H: Host>(host: &mut H, identifier: &str, raw: Option<&Value>) -> InvocationResult {
	let commands = host.commands();
	let Some(descriptor) = commands.get(identifier) else {
		let message = CommandError::NotFound(identifier.to_owned()).to_string();
		warn!(command = identifier, "Unknown command");
		host.report_error(&message);
		return InvocationResult::NotFound(message);
	};
	invoke(host, descriptor, raw).await
}

/// Runs `descriptor` through the full invocation pipeline.
///
/// In order: the active-editor requirement is checked; the ambient count and
/// register are drained; `raw` is copied and enriched with them; the handler
/// runs. A `raw` value that is not an object fails after the drain. After a
/// successful top-level run the command is recorded (unless flagged
/// [`DO_NOT_REPLAY`](crate::CommandFlags::DO_NOT_REPLAY)) and, for editor
/// commands, the undo group is closed. Failures are reported to the
/// host and never recorded.
///
/// Invocations made from inside a running handler are nested: they see and
/// clear the ambient state like any other, but are neither recorded nor
/// undo-stopped, since the outer command already accounts for them.
pub async fn invoke<H: Host>(
	host: &mut H,
	descriptor: &Arc<CommandDescriptor<H>>,
	raw: Option<&Value>,
) -> InvocationResult {
	let span = trace_span!(
		"invoke",
		command = descriptor.identifier(),
		depth = host.session().depth(),
	);
	async move {
		match run(host, descriptor, raw).await {
			Ok(value) => {
				trace!(value = %value, "Command completed");
				InvocationResult::Ok(value)
			}
			Err(error) => InvocationResult::Failed(report_failure(host, descriptor.identifier(), &error)),
		}
	}
	.instrument(span)
	.await
}

async fn run<H: Host>(host: &mut H, descriptor: &Arc<CommandDescriptor<H>>, raw: Option<&Value>) -> CommandResult {
	if descriptor.requires_active_editor() && host.active_editor().is_none() {
		return Err(CommandError::EditorRequired);
	}

	let ambient = *host.session().ambient();
	host.session_mut().ambient_mut().clear();
	let mut argument = Argument::from_raw(raw)?;
	argument.inherit(&ambient);

	let top_level = host.session().depth() == 0;
	trace!(argument = ?argument.as_map(), top_level, "Running handler");

	let value = {
		let mut running = Running::enter(host);
		descriptor.replay(&mut *running.host, argument.clone()).await?
	};

	if top_level {
		if descriptor.is_replayable() {
			host.record_command(descriptor, &argument);
		}
		if descriptor.requires_active_editor() {
			host.insert_undo_stop();
		}
	}
	Ok(value)
}

/// Counts the host as running a handler until dropped, including when the
/// invocation future is dropped mid-handler or the handler unwinds.
struct Running<'h, H: Host> {
	host: &'h mut H,
}

impl<'h, H: Host> Running<'h, H> {
	fn enter(host: &'h mut H) -> Self {
		host.session_mut().enter();
		Self { host }
	}
}

impl<H: Host> Drop for Running<'_, H> {
	fn drop(&mut self) {
		self.host.session_mut().exit();
	}
}

fn report_failure<H: Host>(host: &mut H, identifier: &str, error: &CommandError) -> String {
	let message = format!("error executing command \"{identifier}\": {error}");
	match error {
		CommandError::Cancelled => debug!(command = identifier, "Command cancelled"),
		_ => warn!(command = identifier, error = %error, "Command failed"),
	}
	host.report_error(&message);
	message
}
