//! # rxlite: a minimal reactive-streams core
//!
//! Observable sequences, subjects, relays, and the subscription/disposal
//! lifecycle, nothing else. All delivery is synchronous on the caller's
//! thread: there are no schedulers, no operator algebra, and no
//! backpressure.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! let bag = DisposeBag::new();
//!
//! observable::from_iter(["A", "B", "C"])
//!   .subscribe(|v| println!("{}", v))
//!   .disposed_by(&bag);
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A cold recipe: each subscription re-runs it from scratch |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`PublishSubject`] / [`BehaviorSubject`] / [`ReplaySubject`] | Multicast with per-variant replay policy |
//! | [`PublishRelay`] / [`BehaviorRelay`] | Subjects restricted to failure-free emission |
//! | [`Disposable`] / [`DisposeBag`] | Idempotent teardown, individually or in bulk |
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`PublishSubject`]: subject::PublishSubject
//! [`BehaviorSubject`]: subject::BehaviorSubject
//! [`ReplaySubject`]: subject::ReplaySubject
//! [`PublishRelay`]: relay::PublishRelay
//! [`BehaviorRelay`]: relay::BehaviorRelay
//! [`Disposable`]: disposable::Disposable
//! [`DisposeBag`]: disposable::DisposeBag

pub mod disposable;
pub mod observable;
pub mod observer;
pub mod prelude;
pub mod relay;
pub mod single;
pub mod subject;

pub use prelude::*;
