//! Observer trait and observer adapters.
//!
//! An [`Observer`] is the consumer side of the reactive pattern: it receives
//! zero or more `next` values followed by at most one terminal event, either
//! `error` or `complete`. Nothing is ever delivered after a terminal event.

/// A single notification flowing from an observable to an observer.
///
/// `Complete` and `Error` are terminal: at most one of them is delivered per
/// subscription, and no event may follow it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event<Item, Err> {
  Next(Item),
  Complete,
  Error(Err),
}

impl<Item, Err> Event<Item, Err> {
  /// Whether this event ends the sequence.
  #[inline]
  pub fn is_terminal(&self) -> bool { !matches!(self, Event::Next(_)) }

  /// The carried value, if this is a `Next` event.
  #[inline]
  pub fn element(&self) -> Option<&Item> {
    match self {
      Event::Next(v) => Some(v),
      _ => None,
    }
  }
}

/// Observer: the consumer of data in reactive programming.
///
/// All methods take `&mut self` so a single observer can be stored behind a
/// shared handle and fanned out to by a subject. The sources in this crate
/// never deliver anything past a terminal event.
pub trait Observer<Item, Err> {
  /// Receive the next value.
  fn next(&mut self, value: Item);

  /// Receive the failure terminating the sequence.
  fn error(&mut self, err: Err);

  /// Receive the completion of the sequence.
  fn complete(&mut self);

  /// Dispatch an [`Event`] to the matching method.
  fn on(&mut self, event: Event<Item, Err>)
  where
    Self: Sized,
  {
    match event {
      Event::Next(v) => self.next(v),
      Event::Error(e) => self.error(e),
      Event::Complete => self.complete(),
    }
  }
}

impl<Item, Err, O> Observer<Item, Err> for Box<O>
where
  O: Observer<Item, Err> + ?Sized,
{
  #[inline]
  fn next(&mut self, value: Item) { (**self).next(value) }

  #[inline]
  fn error(&mut self, err: Err) { (**self).error(err) }

  #[inline]
  fn complete(&mut self) { (**self).complete() }
}

type NextFn<Item> = Box<dyn FnMut(Item) + Send>;
type ErrorFn<Err> = Box<dyn FnMut(Err) + Send>;
type CompleteFn = Box<dyn FnMut() + Send>;

/// An observer assembled from optional handler slots.
///
/// Each slot defaults to a no-op, so callers only provide the handlers they
/// care about. Note that a missing `on_error` slot silently drops a failure
/// event; this is deliberate and mirrors the optional-handler behavior of
/// other Rx implementations.
///
/// Handlers are cleared once a terminal event arrives, so no callback can run
/// past the end of the sequence.
pub struct PartialObserver<Item: 'static, Err: 'static> {
  on_next: Option<NextFn<Item>>,
  on_error: Option<ErrorFn<Err>>,
  on_complete: Option<CompleteFn>,
}

impl<Item, Err> Default for PartialObserver<Item, Err> {
  fn default() -> Self { Self { on_next: None, on_error: None, on_complete: None } }
}

impl<Item, Err> PartialObserver<Item, Err> {
  /// Set the handler invoked for every `next` value.
  pub fn on_next(mut self, f: impl FnMut(Item) + Send + 'static) -> Self {
    self.on_next = Some(Box::new(f));
    self
  }

  /// Set the handler invoked when the sequence fails.
  pub fn on_error(mut self, f: impl FnMut(Err) + Send + 'static) -> Self {
    self.on_error = Some(Box::new(f));
    self
  }

  /// Set the handler invoked when the sequence completes.
  pub fn on_complete(mut self, f: impl FnMut() + Send + 'static) -> Self {
    self.on_complete = Some(Box::new(f));
    self
  }
}

impl<Item, Err> Observer<Item, Err> for PartialObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    if let Some(f) = &mut self.on_next {
      f(value);
    }
  }

  fn error(&mut self, err: Err) {
    self.on_next = None;
    self.on_complete = None;
    if let Some(mut f) = self.on_error.take() {
      f(err);
    }
  }

  fn complete(&mut self) {
    self.on_next = None;
    self.on_error = None;
    if let Some(mut f) = self.on_complete.take() {
      f();
    }
  }
}

/// Adapter feeding every notification to a single `FnMut(Event)` callback.
pub struct EventObserver<F>(pub(crate) F);

impl<F, Item, Err> Observer<Item, Err> for EventObserver<F>
where
  F: FnMut(Event<Item, Err>),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(Event::Next(value)) }

  #[inline]
  fn error(&mut self, err: Err) { (self.0)(Event::Error(err)) }

  #[inline]
  fn complete(&mut self) { (self.0)(Event::Complete) }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use super::*;

  #[test]
  fn partial_observer_dispatches_to_slots() {
    let values = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));

    let c_values = values.clone();
    let c_completed = completed.clone();
    let mut observer = PartialObserver::<i32, ()>::default()
      .on_next(move |v| c_values.lock().unwrap().push(v))
      .on_complete(move || *c_completed.lock().unwrap() = true);

    observer.next(1);
    observer.next(2);
    observer.complete();

    assert_eq!(*values.lock().unwrap(), vec![1, 2]);
    assert!(*completed.lock().unwrap());
  }

  #[test]
  fn missing_error_handler_drops_failure() {
    let values = Arc::new(Mutex::new(vec![]));
    let c_values = values.clone();
    let mut observer =
      PartialObserver::<i32, &str>::default().on_next(move |v| c_values.lock().unwrap().push(v));

    observer.next(1);
    // No on_error slot: the failure is silently dropped, not a crash.
    observer.error("boom");

    assert_eq!(*values.lock().unwrap(), vec![1]);
  }

  #[test]
  fn handlers_cleared_after_terminal() {
    let hits = Arc::new(Mutex::new(0));
    let c_hits = hits.clone();
    let mut observer =
      PartialObserver::<i32, ()>::default().on_next(move |_| *c_hits.lock().unwrap() += 1);

    observer.next(1);
    observer.complete();
    observer.next(2);

    assert_eq!(*hits.lock().unwrap(), 1);
  }

  #[test]
  fn event_observer_wraps_all_notifications() {
    let events = Arc::new(Mutex::new(vec![]));
    let c_events = events.clone();
    let mut observer = EventObserver(move |e: Event<i32, &'static str>| c_events.lock().unwrap().push(e));

    observer.next(7);
    observer.complete();

    let seen = events.lock().unwrap();
    assert_eq!(*seen, vec![Event::Next(7), Event::Complete]);
    assert!(seen[1].is_terminal());
    assert_eq!(seen[0].element(), Some(&7));
  }
}
