//! Tree rewriting through a per-key visitor.
//!
//! Two entry points share one algorithm: [`traverse`]/[`try_traverse`] for
//! plain closures and [`traverse_async`] for visitors that return futures. The
//! caller picks the mode; the visitor is only ever called with real entries.

mod asynchronous;
mod node;
mod sync;

pub use asynchronous::traverse_async;
pub use node::{Entry, TraversalNode};
pub use sync::{traverse, try_traverse};
