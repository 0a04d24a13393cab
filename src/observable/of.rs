use std::convert::Infallible;

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never fails.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::just(123).subscribe(|v| println!("{},", v));
/// ```
pub fn just<Item>(v: Item) -> Just<Item> { Just(v) }

#[derive(Clone)]
pub struct Just<Item>(Item);

impl<Item> Observable<Item, Infallible> for Just<Item> {
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<Item, Infallible> + Send + 'static,
  {
    observer.next(self.0);
    observer.complete();
    Disposable::empty()
  }
}

/// Creates an observable producing multiple values.
///
/// Emits each argument in order, then completes. Never fails.
///
/// # Examples
///
/// ```
/// use rxlite::of;
/// use rxlite::prelude::*;
///
/// of!(1, 2, 3).subscribe(|v| println!("{},", v));
///
/// // print log:
/// // 1
/// // 2
/// // 3
/// ```
#[macro_export]
macro_rules! of {
  ( $( $item:expr ),* $(,)? ) => {
    $crate::observable::from_iter([ $( $item ),* ])
  };
}

/// Creates an observable that emits the value or the error from a [`Result`].
///
/// `Ok` becomes one `next` followed by completion; `Err` becomes a failure.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::of_result::<_, &str>(Ok(1234)).subscribe(|v| println!("{},", v));
/// ```
pub fn of_result<Item, Err>(r: Result<Item, Err>) -> OfResult<Item, Err> { OfResult(r) }

#[derive(Clone)]
pub struct OfResult<Item, Err>(Result<Item, Err>);

impl<Item, Err> Observable<Item, Err> for OfResult<Item, Err> {
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    match self.0 {
      Ok(v) => {
        observer.next(v);
        observer.complete();
      }
      Err(e) => observer.error(e),
    }
    Disposable::empty()
  }
}
