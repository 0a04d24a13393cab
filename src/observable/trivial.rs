use std::{convert::Infallible, marker::PhantomData};

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable that emits no items and completes immediately.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::empty::<i32>().subscribe_complete(|_| {}, || println!("Completed"));
/// ```
pub fn empty<Item>() -> Empty<Item> { Empty(PhantomData) }

#[derive(Clone)]
pub struct Empty<Item>(PhantomData<Item>);

impl<Item> Observable<Item, Infallible> for Empty<Item> {
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<Item, Infallible> + Send + 'static,
  {
    observer.complete();
    Disposable::empty()
  }
}

/// Creates an observable that emits nothing and never terminates.
///
/// Subscribing leaks no resources, but the sequence never naturally ends;
/// the returned disposable is the only way out.
pub fn never<Item>() -> Never<Item> { Never(PhantomData) }

#[derive(Clone)]
pub struct Never<Item>(PhantomData<Item>);

impl<Item> Observable<Item, Infallible> for Never<Item> {
  fn actual_subscribe<O>(self, _observer: O) -> Disposable
  where
    O: Observer<Item, Infallible> + Send + 'static,
  {
    Disposable::empty()
  }
}

/// Creates an observable that emits no items and terminates with an error.
///
/// # Arguments
///
/// * `e` - An error to emit and terminate with
pub fn throw<Item, Err>(e: Err) -> Throw<Item, Err> { Throw(e, PhantomData) }

#[derive(Clone)]
pub struct Throw<Item, Err>(Err, PhantomData<Item>);

impl<Item, Err> Observable<Item, Err> for Throw<Item, Err> {
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    observer.error(self.0);
    Disposable::empty()
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn empty_only_completes() {
    let events = Arc::new(Mutex::new(vec![]));
    let c_events = events.clone();
    observable::empty::<i32>().subscribe_event(move |e| c_events.lock().unwrap().push(e));

    assert_eq!(*events.lock().unwrap(), vec![Event::Complete]);
  }

  #[test]
  fn never_emits_nothing() {
    let events: Arc<Mutex<Vec<Event<i32, _>>>> = Arc::new(Mutex::new(vec![]));
    let c_events = events.clone();
    let subscription =
      observable::never::<i32>().subscribe_event(move |e| c_events.lock().unwrap().push(e));

    assert!(events.lock().unwrap().is_empty());
    subscription.dispose();
    assert!(events.lock().unwrap().is_empty());
  }

  #[test]
  fn throw_only_errors() {
    let events = Arc::new(Mutex::new(vec![]));
    let c_events = events.clone();
    observable::throw::<i32, _>("oops").subscribe_event(move |e| c_events.lock().unwrap().push(e));

    assert_eq!(*events.lock().unwrap(), vec![Event::Error("oops")]);
  }
}
