//! Subjects: multicast observables that are simultaneously observers.
//!
//! A subject fans in events from a producer (through its [`Observer`] impl)
//! and fans them out synchronously to every currently subscribed observer,
//! in subscription order. The three variants differ only in what a new
//! subscriber is given on arrival:
//!
//! - [`PublishSubject`]: nothing; only events emitted strictly after
//!   subscription.
//! - [`BehaviorSubject`]: the latest value (seeded at construction).
//! - [`ReplaySubject`]: up to the last `n` values.
//!
//! Once a subject has terminated, the terminal event is absorbing: later
//! emissions are dropped, and every later subscriber receives the variant's
//! buffer replay followed by the recorded terminal event.
//!
//! [`Observer`]: crate::observer::Observer

mod behavior_subject;
mod publish_subject;
mod replay_subject;
mod subject_core;

pub use behavior_subject::BehaviorSubject;
pub use publish_subject::PublishSubject;
pub use replay_subject::ReplaySubject;

pub(crate) use subject_core::{SubjectCore, Terminal};
