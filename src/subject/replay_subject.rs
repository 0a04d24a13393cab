use std::collections::VecDeque;

use crate::{
  disposable::Disposable,
  observable::Observable,
  observer::Observer,
  subject::{SubjectCore, Terminal},
};

pub(crate) struct ReplayBuffer<Item> {
  items: VecDeque<Item>,
  capacity: usize,
}

/// A subject buffering up to the last `n` values (FIFO eviction beyond `n`).
///
/// A new subscriber immediately receives the buffered values in original
/// order, then live events. After termination the buffer is still replayed,
/// followed by the recorded terminal event.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use rxlite::prelude::*;
///
/// let mut subject = ReplaySubject::<&str, ()>::with_buffer_size(2);
/// subject.next("1");
/// subject.next("2");
/// subject.next("3");
///
/// let seen = Arc::new(Mutex::new(vec![]));
/// let c_seen = seen.clone();
/// subject.clone().subscribe(move |v| c_seen.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec!["2", "3"]);
/// ```
pub struct ReplaySubject<Item: 'static, Err: 'static> {
  core: SubjectCore<Item, Err, ReplayBuffer<Item>>,
}

impl<Item, Err> Clone for ReplaySubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> ReplaySubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  /// A replay subject remembering up to `buffer_size` values.
  ///
  /// A zero buffer size is allowed and behaves like a publish subject.
  pub fn with_buffer_size(buffer_size: usize) -> Self {
    Self {
      core: SubjectCore::new(ReplayBuffer { items: VecDeque::new(), capacity: buffer_size }),
    }
  }

  /// Number of currently live subscribers.
  pub fn subscriber_count(&self) -> usize { self.core.subscriber_count() }
}

impl<Item, Err> Observer<Item, Err> for ReplaySubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) {
    self.core.next(value, |buffer, v| {
      if buffer.capacity == 0 {
        return;
      }
      if buffer.items.len() == buffer.capacity {
        buffer.items.pop_front();
      }
      buffer.items.push_back(v.clone());
    })
  }

  fn error(&mut self, err: Err) { self.core.terminate(Terminal::Error(err)) }

  fn complete(&mut self) { self.core.terminate(Terminal::Complete) }
}

impl<Item, Err> Observable<Item, Err> for ReplaySubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    self
      .core
      .subscribe(observer, |buffer| buffer.items.iter().cloned().collect())
  }
}
