mod event;
mod sink;

pub use event::{Event, PayloadCompleted, PayloadReset, PayloadStep};

pub use sink::{CallbackSink, EventSink};
