//! Container disciplines the engines draw their next vertex from.

mod calls;
mod priority;
mod queue;
mod stack;

pub use calls::{CallFrame, CallStack};
pub use priority::{MinPriorityQueue, PriorityEntry};
pub use queue::FifoQueue;
pub use stack::LifoStack;
