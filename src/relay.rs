//! Relays: subjects restricted to failure-free, non-terminating emission.
//!
//! A relay wraps a subject and exposes only [`accept`], which maps to the
//! subject's `next`. No code path can reach the inner subject's terminal
//! transitions, and the error type is fixed to [`Infallible`], so relay
//! subscribers never receive a completion or failure event.
//!
//! [`accept`]: PublishRelay::accept
//! [`Infallible`]: std::convert::Infallible

use std::convert::Infallible;

use crate::{
  disposable::Disposable,
  observable::Observable,
  observer::Observer,
  subject::{BehaviorSubject, PublishSubject},
};

/// A relay over a [`PublishSubject`]: subscribers receive only values
/// accepted strictly after they subscribed.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let relay = PublishRelay::new();
/// relay.accept("Knock knock, anyone home?");
///
/// relay.clone().subscribe(|v| println!("{}", v));
/// relay.accept("1");
/// // Prints: 1
/// ```
pub struct PublishRelay<Item: 'static> {
  subject: PublishSubject<Item, Infallible>,
}

impl<Item> Clone for PublishRelay<Item> {
  fn clone(&self) -> Self { Self { subject: self.subject.clone() } }
}

impl<Item> PublishRelay<Item>
where
  Item: Clone + Send + 'static,
{
  pub fn new() -> Self { Self { subject: PublishSubject::new() } }

  /// Emit `value` to every current subscriber.
  pub fn accept(&self, value: Item) { self.subject.clone().next(value) }
}

impl<Item> Default for PublishRelay<Item>
where
  Item: Clone + Send + 'static,
{
  fn default() -> Self { Self::new() }
}

impl<Item> Observable<Item, Infallible> for PublishRelay<Item>
where
  Item: Clone + Send + 'static,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Infallible> + Send + 'static,
  {
    self.subject.actual_subscribe(observer)
  }
}

/// A relay over a [`BehaviorSubject`]: subscribers immediately receive the
/// latest accepted value, and [`value`] reads it without subscribing.
///
/// [`value`]: BehaviorRelay::value
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let relay = BehaviorRelay::new("Initial value");
/// relay.accept("New initial value");
/// assert_eq!(relay.value(), "New initial value");
/// ```
pub struct BehaviorRelay<Item: 'static> {
  subject: BehaviorSubject<Item, Infallible>,
}

impl<Item> Clone for BehaviorRelay<Item> {
  fn clone(&self) -> Self { Self { subject: self.subject.clone() } }
}

impl<Item> BehaviorRelay<Item>
where
  Item: Clone + Send + 'static,
{
  pub fn new(initial: Item) -> Self { Self { subject: BehaviorSubject::new(initial) } }

  /// Emit `value` to every current subscriber and store it as the latest
  /// value.
  pub fn accept(&self, value: Item) { self.subject.clone().next(value) }

  /// The latest accepted value, synchronously, without subscribing.
  pub fn value(&self) -> Item { self.subject.value() }
}

impl<Item> Observable<Item, Infallible> for BehaviorRelay<Item>
where
  Item: Clone + Send + 'static,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Infallible> + Send + 'static,
  {
    self.subject.actual_subscribe(observer)
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn publish_relay_drops_values_accepted_before_subscription() {
    let relay = PublishRelay::new();
    relay.accept("Knock knock, anyone home?");

    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();
    relay.clone().subscribe(move |v| c_seen.lock().unwrap().push(v));
    relay.accept("1");

    assert_eq!(*seen.lock().unwrap(), vec!["1"]);
  }

  #[test]
  fn relay_never_delivers_a_terminal_event() {
    let relay = PublishRelay::new();
    let events = Arc::new(Mutex::new(vec![]));

    let c_events = events.clone();
    relay
      .clone()
      .subscribe_event(move |e| c_events.lock().unwrap().push(e));

    relay.accept(1);
    relay.accept(2);
    drop(relay);

    assert_eq!(*events.lock().unwrap(), vec![Event::Next(1), Event::Next(2)]);
  }

  #[test]
  fn behavior_relay_replays_the_latest_accepted_value() {
    let relay = BehaviorRelay::new("Initial value");
    relay.accept("New initial value");

    let first = Arc::new(Mutex::new(vec![]));
    let c_first = first.clone();
    relay.clone().subscribe(move |v| c_first.lock().unwrap().push(v));

    relay.accept("1");

    let second = Arc::new(Mutex::new(vec![]));
    let c_second = second.clone();
    relay.clone().subscribe(move |v| c_second.lock().unwrap().push(v));

    relay.accept("2");

    assert_eq!(*first.lock().unwrap(), vec!["New initial value", "1", "2"]);
    assert_eq!(*second.lock().unwrap(), vec!["1", "2"]);
    assert_eq!(relay.value(), "2");
  }
}
