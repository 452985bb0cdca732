use crossbeam::channel::Sender;

use super::Event;

/// Receiver of session events.
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for Sender<Event> {
    fn send(&self, event: Event) {
        if let Err(err) = Sender::send(self, event) {
            log::debug!("event dropped, receiver gone: {:?}", err.into_inner());
        }
    }
}

/// Adapts a closure into an [`EventSink`].
pub struct CallbackSink<F>(pub F);

impl<F> EventSink for CallbackSink<F>
where
    F: Fn(Event),
{
    fn send(&self, event: Event) {
        (self.0)(event);
    }
}
