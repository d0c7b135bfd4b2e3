use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::{Argument, CommandDescriptor, CommandRegistry, Session};

/// Everything the pipeline needs from the application that owns it.
///
/// The host is passed to handlers through their context, so a handler can
/// reach the same state the pipeline manipulates and invoke further commands.
pub trait Host: Sized + 'static {
	/// The editing surface commands operate on.
	type Editor;

	/// The editor commands flagged as requiring one operate on, if any.
	fn active_editor(&self) -> Option<&Self::Editor>;

	fn active_editor_mut(&mut self) -> Option<&mut Self::Editor>;

	fn session(&self) -> &Session;

	fn session_mut(&mut self) -> &mut Session;

	/// The commands [`execute`](crate::execute) resolves identifiers against.
	fn commands(&self) -> Arc<CommandRegistry<Self>>;

	/// Token handed to every handler context. Cancelling it asks running
	/// handlers to stop at their next check.
	fn cancellation(&self) -> CancellationToken;

	/// Closes the active editor's current undo group.
	fn insert_undo_stop(&mut self);

	/// Called once for every successful, replayable, top-level invocation with
	/// the argument the handler actually received.
	fn record_command(&mut self, descriptor: &Arc<CommandDescriptor<Self>>, argument: &Argument);

	/// Surfaces a failure to the user.
	fn report_error(&mut self, message: &str);
}
