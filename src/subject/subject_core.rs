//! State machine shared by all subject variants.
//!
//! One mutex per subject guards the subscriber list, the variant buffer, and
//! the terminal slot. Observer callbacks always run with that mutex
//! released: each emission snapshots the subscriber list first, so disposing
//! a subscription or subscribing again from inside a callback cannot
//! deadlock, and a subscriber added mid-delivery does not receive the event
//! already in flight.
//!
//! Emitting on a subject from inside one of its own callbacks is not
//! supported (the emitting observer's handle is still locked).

use std::sync::{Arc, Mutex};

use crate::{disposable::Disposable, observer::Observer};

/// The recorded end of a subject's sequence.
#[derive(Clone)]
pub(crate) enum Terminal<Err> {
  Complete,
  Error(Err),
}

type SharedObserver<Item, Err> = Arc<Mutex<dyn Observer<Item, Err> + Send>>;

struct Entry<Item: 'static, Err: 'static> {
  id: usize,
  observer: SharedObserver<Item, Err>,
}

struct CoreState<Item: 'static, Err: 'static, Buffer> {
  buffer: Buffer,
  terminal: Option<Terminal<Err>>,
  next_id: usize,
  subscribers: Vec<Entry<Item, Err>>,
}

/// Shared fan-out state behind every subject variant, parameterized by the
/// variant's replay buffer.
pub(crate) struct SubjectCore<Item: 'static, Err: 'static, Buffer> {
  state: Arc<Mutex<CoreState<Item, Err, Buffer>>>,
}

impl<Item, Err, Buffer> Clone for SubjectCore<Item, Err, Buffer> {
  fn clone(&self) -> Self { Self { state: self.state.clone() } }
}

impl<Item, Err, Buffer> SubjectCore<Item, Err, Buffer>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
  Buffer: Send + 'static,
{
  pub(crate) fn new(buffer: Buffer) -> Self {
    Self {
      state: Arc::new(Mutex::new(CoreState {
        buffer,
        terminal: None,
        next_id: 0,
        subscribers: Vec::new(),
      })),
    }
  }

  /// Record `value` into the buffer and deliver it to the subscriber set
  /// snapshotted at the start of this emission. Dropped once terminated.
  pub(crate) fn next(&self, value: Item, record: impl FnOnce(&mut Buffer, &Item)) {
    let snapshot = {
      let mut state = self.state.lock().unwrap();
      if state.terminal.is_some() {
        return;
      }
      record(&mut state.buffer, &value);
      state
        .subscribers
        .iter()
        .map(|entry| entry.observer.clone())
        .collect::<Vec<_>>()
    };

    // The value moves into the last delivery; everyone before gets a clone.
    let mut iter = snapshot.into_iter().peekable();
    while let Some(observer) = iter.next() {
      if iter.peek().is_some() {
        observer.lock().unwrap().next(value.clone());
      } else {
        observer.lock().unwrap().next(value);
        break;
      }
    }
  }

  /// Transition to `terminal` and deliver it to every live subscriber, in
  /// subscription order. No-op if already terminated.
  pub(crate) fn terminate(&self, terminal: Terminal<Err>) {
    let drained = {
      let mut state = self.state.lock().unwrap();
      if state.terminal.is_some() {
        return;
      }
      state.terminal = Some(terminal.clone());
      std::mem::take(&mut state.subscribers)
    };

    for entry in drained {
      let mut observer = entry.observer.lock().unwrap();
      match &terminal {
        Terminal::Complete => observer.complete(),
        Terminal::Error(err) => observer.error(err.clone()),
      }
    }
  }

  /// Register `observer`, replay the variant's buffer to it, then deliver
  /// the recorded terminal event if the subject has already ended (in which
  /// case the observer is not kept live).
  ///
  /// Buffer replay always precedes terminal replay, including after a
  /// failure.
  pub(crate) fn subscribe<O>(&self, observer: O, replay: impl FnOnce(&Buffer) -> Vec<Item>) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    let shared: SharedObserver<Item, Err> = Arc::new(Mutex::new(observer));

    let (replayed, terminal, registered) = {
      let mut state = self.state.lock().unwrap();
      let replayed = replay(&state.buffer);
      let terminal = state.terminal.clone();
      let registered = if terminal.is_none() {
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.push(Entry { id, observer: shared.clone() });
        Some(id)
      } else {
        None
      };
      (replayed, terminal, registered)
    };

    {
      let mut guard = shared.lock().unwrap();
      for value in replayed {
        guard.next(value);
      }
      match terminal {
        Some(Terminal::Complete) => guard.complete(),
        Some(Terminal::Error(err)) => guard.error(err),
        None => {}
      }
    }

    match registered {
      Some(id) => {
        let state = self.state.clone();
        Disposable::new(move || {
          state
            .lock()
            .unwrap()
            .subscribers
            .retain(|entry| entry.id != id);
        })
      }
      None => Disposable::empty(),
    }
  }

  /// Read the variant buffer outside of any emission.
  pub(crate) fn with_buffer<R>(&self, f: impl FnOnce(&Buffer) -> R) -> R {
    f(&self.state.lock().unwrap().buffer)
  }

  /// Number of currently live subscribers.
  pub(crate) fn subscriber_count(&self) -> usize {
    self.state.lock().unwrap().subscribers.len()
  }
}
