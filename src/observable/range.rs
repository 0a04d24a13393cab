use std::convert::Infallible;

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable emitting `count` consecutive integers starting at
/// `start`, in ascending order, then completing.
///
/// A non-positive `count` is defined, not an error: the sequence completes
/// immediately with no values.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::range(1, 4).subscribe(|v| println!("{},", v));
///
/// // print log:
/// // 1
/// // 2
/// // 3
/// // 4
/// ```
pub fn range(start: i64, count: i64) -> Range { Range { start, count } }

#[derive(Clone)]
pub struct Range {
  start: i64,
  count: i64,
}

impl Observable<i64, Infallible> for Range {
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<i64, Infallible> + Send + 'static,
  {
    for offset in 0..self.count.max(0) {
      observer.next(self.start + offset);
    }
    observer.complete();
    Disposable::empty()
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  fn collect(start: i64, count: i64) -> (Vec<i64>, usize) {
    let values = Arc::new(Mutex::new(vec![]));
    let completes = Arc::new(Mutex::new(0));

    let c_values = values.clone();
    let c_completes = completes.clone();
    observable::range(start, count).subscribe_complete(
      move |v| c_values.lock().unwrap().push(v),
      move || *c_completes.lock().unwrap() += 1,
    );

    let values = values.lock().unwrap().clone();
    let completes = *completes.lock().unwrap();
    (values, completes)
  }

  #[test]
  fn ascending_from_start() {
    assert_eq!(collect(1, 5), (vec![1, 2, 3, 4, 5], 1));
    assert_eq!(collect(-2, 3), (vec![-2, -1, 0], 1));
  }

  #[test]
  fn non_positive_count_completes_immediately() {
    assert_eq!(collect(10, 0), (vec![], 1));
    assert_eq!(collect(10, -3), (vec![], 1));
  }
}
