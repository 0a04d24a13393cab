use std::convert::Infallible;

use crate::{disposable::Disposable, observable::Observable, observer::Observer};

/// Creates an observable that produces values from an iterator.
///
/// Emits every element in iteration order, then completes. Never fails.
///
/// # Examples
///
/// A simple example for a range:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter(0..10).subscribe(|v| println!("{},", v));
/// ```
///
/// Or with a vector:
///
/// ```
/// use rxlite::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter>(iter: Iter) -> FromIter<Iter>
where
  Iter: IntoIterator,
{
  FromIter(iter)
}

#[derive(Clone)]
pub struct FromIter<Iter>(Iter);

impl<Iter> Observable<Iter::Item, Infallible> for FromIter<Iter>
where
  Iter: IntoIterator,
{
  fn actual_subscribe<O>(self, mut observer: O) -> Disposable
  where
    O: Observer<Iter::Item, Infallible> + Send + 'static,
  {
    for v in self.0 {
      observer.next(v);
    }
    observer.complete();
    Disposable::empty()
  }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use bencher::Bencher;

  use crate::prelude::*;

  #[test]
  fn from_range() {
    let hit_count = Arc::new(Mutex::new(0));
    let completed = Arc::new(Mutex::new(false));

    let c_hits = hit_count.clone();
    let c_completed = completed.clone();
    observable::from_iter(0..100).subscribe_complete(
      move |_| *c_hits.lock().unwrap() += 1,
      move || *c_completed.lock().unwrap() = true,
    );

    assert_eq!(*hit_count.lock().unwrap(), 100);
    assert!(*completed.lock().unwrap());
  }

  #[test]
  fn from_vec() {
    let hit_count = Arc::new(Mutex::new(0));
    let c_hits = hit_count.clone();
    observable::from_iter(vec![0; 100]).subscribe(move |_| *c_hits.lock().unwrap() += 1);

    assert_eq!(*hit_count.lock().unwrap(), 100);
  }

  #[test]
  fn empty_iterator_just_completes() {
    let hit_count = Arc::new(Mutex::new(0));
    let completed = Arc::new(Mutex::new(false));

    let c_hits = hit_count.clone();
    let c_completed = completed.clone();
    observable::from_iter(Vec::<i32>::new()).subscribe_complete(
      move |_| *c_hits.lock().unwrap() += 1,
      move || *c_completed.lock().unwrap() = true,
    );

    assert_eq!(*hit_count.lock().unwrap(), 0);
    assert!(*completed.lock().unwrap());
  }

  #[test]
  fn resubscription_reruns_the_recipe() {
    let source = observable::from_iter(vec![1, 2, 3]);
    for _ in 0..2 {
      let sum = Arc::new(Mutex::new(0));
      let c_sum = sum.clone();
      source.clone().subscribe(move |v| *c_sum.lock().unwrap() += v);
      assert_eq!(*sum.lock().unwrap(), 6);
    }
  }

  #[test]
  fn bench() { do_bench(); }

  bencher::benchmark_group!(do_bench, bench_from_iter);

  fn bench_from_iter(b: &mut Bencher) { b.iter(from_range); }
}
