use tokio_util::sync::CancellationToken;

use crate::{CommandError, Host};

/// Context for handlers of commands that operate on an editor.
///
/// Only constructed after the active-editor requirement has been checked.
pub struct EditorContext<'a, H> {
	host: &'a mut H,
	cancellation: &'a CancellationToken,
}

impl<'a, H: Host> EditorContext<'a, H> {
	pub(crate) fn new(host: &'a mut H, cancellation: &'a CancellationToken) -> Self {
		Self { host, cancellation }
	}

	/// The active editor.
	///
	/// Fails with [`CommandError::EditorRequired`] only if the handler itself
	/// closed the editor before asking for it.
	pub fn editor(&self) -> Result<&H::Editor, CommandError> {
		self.host.active_editor().ok_or(CommandError::EditorRequired)
	}

	pub fn editor_mut(&mut self) -> Result<&mut H::Editor, CommandError> {
		self.host.active_editor_mut().ok_or(CommandError::EditorRequired)
	}

	pub fn host(&self) -> &H {
		self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		self.host
	}

	pub fn cancellation(&self) -> &CancellationToken {
		self.cancellation
	}

	pub fn check_cancelled(&self) -> Result<(), CommandError> {
		if self.cancellation.is_cancelled() {
			Err(CommandError::Cancelled)
		} else {
			Ok(())
		}
	}
}

/// Context for handlers that do not need an editor.
pub struct GlobalContext<'a, H> {
	host: &'a mut H,
	cancellation: &'a CancellationToken,
}

impl<'a, H: Host> GlobalContext<'a, H> {
	pub(crate) fn new(host: &'a mut H, cancellation: &'a CancellationToken) -> Self {
		Self { host, cancellation }
	}

	pub fn host(&self) -> &H {
		self.host
	}

	pub fn host_mut(&mut self) -> &mut H {
		self.host
	}

	pub fn cancellation(&self) -> &CancellationToken {
		self.cancellation
	}

	pub fn check_cancelled(&self) -> Result<(), CommandError> {
		if self.cancellation.is_cancelled() {
			Err(CommandError::Cancelled)
		} else {
			Ok(())
		}
	}
}
