use std::future::Future;
use std::pin::Pin;

/// A pinned, boxed future that is not required to be Send.
///
/// Command handlers return this so they may borrow their invocation context
/// across await points.
pub type BoxFutureLocal<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;
