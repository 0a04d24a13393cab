//! Disposal lifecycle: one-shot cancellation handles and their aggregate
//! owner.
//!
//! A [`Disposable`] represents one cancellable resource or subscription; a
//! [`DisposeBag`] owns a set of them and tears them all down together when it
//! goes out of scope.

use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc, Mutex,
};

use smallvec::SmallVec;

type TearDown = Box<dyn FnOnce() + Send>;

struct DisposeState {
  disposed: AtomicBool,
  action: Mutex<Option<TearDown>>,
}

/// A one-shot, idempotent cancellation handle.
///
/// `dispose` runs the wrapped cleanup action exactly once; every later call
/// is a no-op. The handle is cheap to clone, and all clones share the same
/// disposed flag. The action runs outside any internal lock, so it is safe
/// to call `dispose` from inside the delivery path that created the handle.
#[derive(Clone)]
pub struct Disposable {
  state: Arc<DisposeState>,
}

impl Disposable {
  /// Wrap a cleanup action to run on the first `dispose` call.
  pub fn new(action: impl FnOnce() + Send + 'static) -> Self {
    Self {
      state: Arc::new(DisposeState {
        disposed: AtomicBool::new(false),
        action: Mutex::new(Some(Box::new(action))),
      }),
    }
  }

  /// A valid, trivially disposable handle with no cleanup action.
  pub fn empty() -> Self {
    Self {
      state: Arc::new(DisposeState {
        disposed: AtomicBool::new(false),
        action: Mutex::new(None),
      }),
    }
  }

  /// Run the cleanup action if it has not run yet.
  pub fn dispose(&self) {
    if self.state.disposed.swap(true, Ordering::AcqRel) {
      return;
    }
    let action = self.state.action.lock().unwrap().take();
    if let Some(action) = action {
      action();
    }
  }

  /// Whether `dispose` has been called on this handle or one of its clones.
  #[inline]
  pub fn is_disposed(&self) -> bool { self.state.disposed.load(Ordering::Acquire) }

  /// Transfer ownership of this handle into `bag`, which will dispose it on
  /// teardown.
  #[inline]
  pub fn disposed_by(self, bag: &DisposeBag) { bag.insert(self) }
}

impl Default for Disposable {
  fn default() -> Self { Self::empty() }
}

struct BagInner {
  sealed: bool,
  items: SmallVec<[Disposable; 2]>,
}

/// An aggregate owner of [`Disposable`]s.
///
/// Disposables inserted into the bag are disposed exactly once when the bag
/// is dropped (or explicitly torn down via [`DisposeBag::dispose`]).
///
/// # Preconditions
///
/// Inserting into a bag that has already been torn down is a programming
/// error and panics. Create a fresh bag instead of reusing a dead one.
#[derive(Default)]
pub struct DisposeBag {
  inner: Mutex<BagInner>,
}

impl Default for BagInner {
  fn default() -> Self { Self { sealed: false, items: SmallVec::new() } }
}

impl DisposeBag {
  pub fn new() -> Self { Self::default() }

  /// Take ownership of `disposable`; it will be disposed when the bag is
  /// torn down.
  ///
  /// # Panics
  ///
  /// Panics if the bag has already been torn down.
  pub fn insert(&self, disposable: Disposable) {
    let mut inner = self.inner.lock().unwrap();
    if inner.sealed {
      // Release the lock before panicking so the poisoned mutex doesn't
      // trigger a second panic in the bag's destructor during unwinding.
      drop(inner);
      panic!("disposable inserted into a DisposeBag that has already been torn down");
    }
    inner.items.push(disposable);
  }

  /// Number of disposables currently held.
  pub fn len(&self) -> usize { self.inner.lock().unwrap().items.len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }

  /// Tear the bag down now, disposing every member exactly once.
  ///
  /// After this the bag is dead; further inserts panic.
  pub fn dispose(&self) {
    let items = {
      let mut inner = self.inner.lock().unwrap();
      inner.sealed = true;
      std::mem::take(&mut inner.items)
    };
    // Actions run outside the bag lock.
    for item in items {
      item.dispose();
    }
  }
}

impl Drop for DisposeBag {
  fn drop(&mut self) { self.dispose() }
}
