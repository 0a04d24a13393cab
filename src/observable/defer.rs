use std::marker::PhantomData;

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable that, on each subscription, calls the factory once
/// to obtain a fresh observable and subscribes to it.
///
/// This defers any work (and any side effects) in the factory until
/// subscribe time; subscribing N times runs the factory N times. If the
/// factory reads mutable state shared between subscriptions, coordinating
/// concurrent subscriptions over that state is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::defer(|| {
///   println!("Hi!");
///   observable::just("Hello!")
/// })
/// .subscribe(move |v| println!("{}", v));
/// // Prints: Hi!\nHello!\n
/// ```
pub fn defer<F, B, Item, Err>(factory: F) -> Defer<F, Item, Err>
where
  F: FnMut() -> B,
  B: Observable<Item, Err>,
{
  Defer { f: factory, _marker: PhantomData }
}

#[derive(Clone)]
pub struct Defer<F, Item, Err> {
  f: F,
  _marker: PhantomData<(Item, Err)>,
}

impl<F, B, Item, Err> Observable<Item, Err> for Defer<F, Item, Err>
where
  F: FnMut() -> B,
  B: Observable<Item, Err>,
{
  fn actual_subscribe<O>(mut self, observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    (self.f)().actual_subscribe(observer)
  }
}
