use std::marker::PhantomData;

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable from a producer function.
///
/// The producer is invoked exactly once per subscription, synchronously at
/// subscribe time, with a live observer handle. It may emit zero or more
/// values and at most one terminal event, and returns the [`Disposable`]
/// describing its cleanup. Emissions after a terminal event are dropped by
/// the handle.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::create(|observer: &mut dyn Observer<_, &str>| {
///   observer.next("1");
///   observer.next("?");
///   Disposable::empty()
/// })
/// .subscribe(|v| println!("{}", v));
/// ```
pub fn create<F, Item, Err>(producer: F) -> Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Observer<Item, Err>) -> Disposable,
{
  Create { f: producer, _marker: PhantomData }
}

#[derive(Clone)]
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<(Item, Err)>,
}

/// Guard handed to the producer: drops everything once a terminal event has
/// been emitted, so the producer cannot deliver past the end of the
/// sequence.
struct CreateProxy<O>(Option<O>);

impl<O, Item, Err> Observer<Item, Err> for CreateProxy<O>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if let Some(observer) = &mut self.0 {
      observer.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    if let Some(mut observer) = self.0.take() {
      observer.error(err);
    }
  }

  fn complete(&mut self) {
    if let Some(mut observer) = self.0.take() {
      observer.complete();
    }
  }
}

impl<F, Item, Err> Observable<Item, Err> for Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Observer<Item, Err>) -> Disposable,
{
  fn actual_subscribe<O>(self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    let mut proxy = CreateProxy(Some(observer));
    (self.f)(&mut proxy)
  }
}
