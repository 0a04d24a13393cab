use crate::{
  disposable::Disposable,
  observable::Observable,
  observer::Observer,
  subject::{SubjectCore, Terminal},
};

/// A subject buffering exactly the latest value, seeded at construction.
///
/// A new subscriber immediately receives the latest value, then live events.
/// The initial value counts as the latest value until the first emission
/// supersedes it.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use rxlite::prelude::*;
///
/// let mut subject = BehaviorSubject::<_, ()>::new("Initial value");
/// subject.next("X");
///
/// let seen = Arc::new(Mutex::new(vec![]));
/// let c_seen = seen.clone();
/// subject.clone().subscribe(move |v| c_seen.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec!["X"]);
/// ```
pub struct BehaviorSubject<Item: 'static, Err: 'static> {
  core: SubjectCore<Item, Err, Item>,
}

impl<Item, Err> Clone for BehaviorSubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> BehaviorSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  pub fn new(initial: Item) -> Self { Self { core: SubjectCore::new(initial) } }

  /// The latest value, synchronously, without subscribing.
  pub fn value(&self) -> Item { self.core.with_buffer(Item::clone) }

  /// Number of currently live subscribers.
  pub fn subscriber_count(&self) -> usize { self.core.subscriber_count() }
}

impl<Item, Err> Observer<Item, Err> for BehaviorSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) {
    self.core.next(value, |latest, v| *latest = v.clone())
  }

  fn error(&mut self, err: Err) { self.core.terminate(Terminal::Error(err)) }

  fn complete(&mut self) { self.core.terminate(Terminal::Complete) }
}

impl<Item, Err> Observable<Item, Err> for BehaviorSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    self.core.subscribe(observer, |latest| vec![latest.clone()])
  }
}
