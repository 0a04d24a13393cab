//! The core observable contract and the subscribe entry points.
//!
//! An observable is a cold recipe: subscribing runs the recipe from scratch,
//! synchronously on the caller's thread, and hands back a [`Disposable`] that
//! detaches the observer. Recipes are `Clone`, so the same observable value
//! can be subscribed to any number of times, each run independent of the
//! others.

mod create;
mod defer;
mod from_iter;
mod of;
mod range;
mod trivial;

pub use create::{create, Create};
pub use defer::{defer, Defer};
pub use from_iter::{from_iter, FromIter};
pub use of::{just, of_result, Just, OfResult};
pub use range::{range, Range};
pub use trivial::{empty, never, throw, Empty, Never, Throw};

use crate::{
  disposable::Disposable,
  observer::{Event, EventObserver, Observer, PartialObserver},
};

/// Observable: a subscribable source of `Item` values that terminates with
/// either completion or an `Err` failure.
///
/// `actual_subscribe` consumes the recipe; clone the observable to subscribe
/// again. Everything happens synchronously before the call returns, unless
/// the source is backed by a long-lived subject.
pub trait Observable<Item, Err> {
  /// Run the recipe for `observer` and return the handle that detaches it.
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    Self: Sized,
    O: Observer<Item, Err> + Send + 'static;
}

/// Observer wrapper that fires a dispose hook once the sequence terminates,
/// so `on_disposed` callbacks run on natural termination as well as on
/// manual disposal.
struct HookedObserver<O> {
  inner: O,
  hook: Disposable,
}

impl<O, Item, Err> Observer<Item, Err> for HookedObserver<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.inner.next(value) }

  fn error(&mut self, err: Err) {
    self.inner.error(err);
    self.hook.dispose();
  }

  fn complete(&mut self) {
    self.inner.complete();
    self.hook.dispose();
  }
}

/// Convenience subscribe family, blanket-implemented for every observable.
pub trait ObservableExt<Item: 'static, Err: 'static>: Observable<Item, Err> + Sized {
  /// Subscribe with a full observer.
  #[inline]
  fn subscribe_with<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    self.actual_subscribe(observer)
  }

  /// Subscribe with a handler for `next` values only.
  ///
  /// Failure and completion are silently ignored; use [`subscribe_err`] or
  /// [`subscribe_all`] to observe them.
  ///
  /// [`subscribe_err`]: ObservableExt::subscribe_err
  /// [`subscribe_all`]: ObservableExt::subscribe_all
  fn subscribe<N>(self, next: N) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
  {
    self.actual_subscribe(PartialObserver::default().on_next(next))
  }

  /// Subscribe with handlers for `next` values and failure.
  fn subscribe_err<N, E>(self, next: N, error: E) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
  {
    self.actual_subscribe(PartialObserver::default().on_next(next).on_error(error))
  }

  /// Subscribe with handlers for `next` values and completion.
  fn subscribe_complete<N, C>(self, next: N, complete: C) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.actual_subscribe(PartialObserver::default().on_next(next).on_complete(complete))
  }

  /// Subscribe with handlers for all three notification kinds.
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.actual_subscribe(
      PartialObserver::default()
        .on_next(next)
        .on_error(error)
        .on_complete(complete),
    )
  }

  /// Like [`subscribe_all`], plus a `disposed` callback that fires exactly
  /// once: on manual disposal or right after the terminal event, whichever
  /// comes first.
  ///
  /// [`subscribe_all`]: ObservableExt::subscribe_all
  fn subscribe_all_disposed<N, E, C, D>(
    self,
    next: N,
    error: E,
    complete: C,
    disposed: D,
  ) -> Disposable
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
    D: FnOnce() + Send + 'static,
  {
    let hook = Disposable::new(disposed);
    let observer = HookedObserver {
      inner: PartialObserver::default()
        .on_next(next)
        .on_error(error)
        .on_complete(complete),
      hook: hook.clone(),
    };
    let subscription = self.actual_subscribe(observer);
    Disposable::new(move || {
      subscription.dispose();
      hook.dispose();
    })
  }

  /// Subscribe with a single callback receiving every [`Event`].
  fn subscribe_event<F>(self, f: F) -> Disposable
  where
    F: FnMut(Event<Item, Err>) + Send + 'static,
  {
    self.actual_subscribe(EventObserver(f))
  }
}

impl<T, Item: 'static, Err: 'static> ObservableExt<Item, Err> for T where T: Observable<Item, Err> {}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn subscribe_all_sees_values_and_completion() {
    let sum = Arc::new(Mutex::new(0));
    let completed = Arc::new(Mutex::new(false));
    let errs = Arc::new(Mutex::new(0));

    let c_sum = sum.clone();
    let c_completed = completed.clone();
    let c_errs = errs.clone();
    observable::from_iter(1..=4).subscribe_all(
      move |v| *c_sum.lock().unwrap() += v,
      move |_| *c_errs.lock().unwrap() += 1,
      move || *c_completed.lock().unwrap() = true,
    );

    assert_eq!(*sum.lock().unwrap(), 10);
    assert!(*completed.lock().unwrap());
    assert_eq!(*errs.lock().unwrap(), 0);
  }

  #[test]
  fn disposed_callback_fires_after_completion() {
    let disposed = Arc::new(Mutex::new(false));
    let c_disposed = disposed.clone();

    observable::just("A").subscribe_all_disposed(
      |_| {},
      |_: std::convert::Infallible| {},
      || {},
      move || *c_disposed.lock().unwrap() = true,
    );

    assert!(*disposed.lock().unwrap());
  }

  #[test]
  fn disposed_callback_fires_on_manual_dispose() {
    let disposed = Arc::new(Mutex::new(false));
    let c_disposed = disposed.clone();

    let subscription = observable::never::<i32>().subscribe_all_disposed(
      |_| {},
      |_| {},
      || {},
      move || *c_disposed.lock().unwrap() = true,
    );

    assert!(!*disposed.lock().unwrap());
    subscription.dispose();
    assert!(*disposed.lock().unwrap());
  }

  #[test]
  fn subscribe_event_observes_the_whole_sequence() {
    let events = Arc::new(Mutex::new(vec![]));
    let c_events = events.clone();

    observable::from_iter(["A", "B"]).subscribe_event(move |e| c_events.lock().unwrap().push(e));

    assert_eq!(
      *events.lock().unwrap(),
      vec![Event::Next("A"), Event::Next("B"), Event::Complete]
    );
  }
}
