//! Command invocation and replay.
//!
//! Every entry point (keymaps, palettes, macro playback) funnels through
//! [`invoke`] or [`execute`]. The pipeline checks the active-editor
//! requirement, folds the ambient count/register prefix into the argument,
//! runs the handler, and only after a successful top-level run records the
//! command for replay and closes the undo group.
//!
//! Replay goes through [`CommandDescriptor::replay`], which calls the raw
//! handler with a stored argument and none of the pipeline bookkeeping.

/// Argument records passed to handlers.
pub mod argument;
/// Handler contexts.
pub mod context;
/// Command descriptors and flags.
pub mod descriptor;
/// Invocation errors.
pub mod error;
/// Services the pipeline needs from its host.
pub mod host;
/// The invocation pipeline.
pub mod pipeline;
/// Register names.
pub mod register;
/// Command lookup by identifier.
pub mod registry;
/// Ambient prefix state shared between invocations.
pub mod session;

pub use argument::Argument;
pub use context::{EditorContext, GlobalContext};
pub use descriptor::{CommandDescriptor, CommandFlags, CommandResult, EditorHandler, GlobalHandler, Handler};
pub use error::{CommandError, RegistryError};
pub use host::Host;
pub use pipeline::{InvocationResult, execute, invoke};
pub use register::Register;
pub use registry::CommandRegistry;
pub use session::{AmbientState, Session};
pub use strand_primitives::BoxFutureLocal;
