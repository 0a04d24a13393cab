use crate::{
  disposable::Disposable,
  observable::Observable,
  observer::Observer,
  subject::{SubjectCore, Terminal},
};

/// A subject without a replay buffer: a new subscriber receives only events
/// emitted strictly after it subscribed.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use rxlite::prelude::*;
///
/// let mut subject = PublishSubject::<i32, ()>::new();
/// let seen = Arc::new(Mutex::new(vec![]));
///
/// let c_seen = seen.clone();
/// subject.clone().subscribe(move |v| c_seen.lock().unwrap().push(v));
///
/// subject.next(1);
/// subject.next(2);
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
/// ```
pub struct PublishSubject<Item: 'static, Err: 'static> {
  core: SubjectCore<Item, Err, ()>,
}

impl<Item, Err> Clone for PublishSubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  pub fn new() -> Self { Self { core: SubjectCore::new(()) } }

  /// Number of currently live subscribers.
  pub fn subscriber_count(&self) -> usize { self.core.subscriber_count() }
}

impl<Item, Err> Default for PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Observer<Item, Err> for PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) { self.core.next(value, |_, _| {}) }

  fn error(&mut self, err: Err) { self.core.terminate(Terminal::Error(err)) }

  fn complete(&mut self) { self.core.terminate(Terminal::Complete) }
}

impl<Item, Err> Observable<Item, Err> for PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    self.core.subscribe(observer, |_| Vec::new())
  }
}
