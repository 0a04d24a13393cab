//! A sequence producing exactly one eventual success or failure.
//!
//! [`Single`] is the one secondary shape this crate offers beyond plain
//! observables: a resolver runs once per subscription and produces exactly
//! one `Result`, which is the entire lifetime of that subscription. The
//! emitter is consumed by its first use, so a second event is impossible by
//! construction.

use std::marker::PhantomData;

use crate::disposable::Disposable;

/// One-shot sink handed to a [`Single`] resolver. Consumed by [`success`] or
/// [`error`].
///
/// [`success`]: SingleEmitter::success
/// [`error`]: SingleEmitter::error
pub struct SingleEmitter<Item, Err> {
  sink: Box<dyn FnOnce(Result<Item, Err>)>,
}

impl<Item, Err> SingleEmitter<Item, Err> {
  /// Resolve the subscription with a value.
  pub fn success(self, value: Item) { (self.sink)(Ok(value)) }

  /// Resolve the subscription with a failure.
  pub fn error(self, err: Err) { (self.sink)(Err(err)) }
}

/// A cold recipe for exactly one success-or-failure outcome.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let found = true;
/// let load_text = Single::create(move |single: SingleEmitter<&str, &str>| {
///   if found {
///     single.success("contents");
///   } else {
///     single.error("fileNotFound");
///   }
///   Disposable::empty()
/// });
///
/// load_text.subscribe(|result| match result {
///   Ok(text) => println!("{}", text),
///   Err(e) => println!("{}", e),
/// });
/// ```
#[derive(Clone)]
pub struct Single<F, Item, Err> {
  resolver: F,
  _marker: PhantomData<(Item, Err)>,
}

impl<F, Item, Err> Single<F, Item, Err>
where
  F: FnOnce(SingleEmitter<Item, Err>) -> Disposable,
  Item: 'static,
  Err: 'static,
{
  /// Wrap a resolver invoked once, synchronously, at each subscribe.
  pub fn create(resolver: F) -> Self { Self { resolver, _marker: PhantomData } }

  /// Run the resolver and deliver its single outcome to `handler`.
  pub fn subscribe<H>(self, handler: H) -> Disposable
  where
    H: FnOnce(Result<Item, Err>) + 'static,
  {
    let emitter = SingleEmitter { sink: Box::new(handler) };
    (self.resolver)(emitter)
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use super::*;

  #[test]
  fn success_delivers_exactly_one_ok() {
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();

    Single::<_, i32, ()>::create(|single| {
      single.success(42);
      Disposable::empty()
    })
    .subscribe(move |r| c_seen.lock().unwrap().push(r));

    assert_eq!(*seen.lock().unwrap(), vec![Ok(42)]);
  }

  #[test]
  fn error_delivers_exactly_one_err() {
    let seen = Arc::new(Mutex::new(vec![]));
    let c_seen = seen.clone();

    Single::<_, i32, &str>::create(|single| {
      single.error("fileNotFound");
      Disposable::empty()
    })
    .subscribe(move |r| c_seen.lock().unwrap().push(r));

    assert_eq!(*seen.lock().unwrap(), vec![Err("fileNotFound")]);
  }

  #[test]
  fn resolver_runs_once_per_subscription() {
    let calls = Arc::new(Mutex::new(0));

    let c_calls = calls.clone();
    let single = Single::<_, i32, ()>::create(move |emitter| {
      *c_calls.lock().unwrap() += 1;
      emitter.success(1);
      Disposable::empty()
    });

    single.clone().subscribe(|_| {});
    single.subscribe(|_| {});

    assert_eq!(*calls.lock().unwrap(), 2);
  }
}
