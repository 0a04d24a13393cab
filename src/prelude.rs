//! The `rxlite` prelude: one `use` for the whole public surface.

pub use crate::disposable::{Disposable, DisposeBag};
pub use crate::observable;
pub use crate::observable::{Observable, ObservableExt};
pub use crate::observer::{Event, EventObserver, Observer, PartialObserver};
pub use crate::of;
pub use crate::relay::{BehaviorRelay, PublishRelay};
pub use crate::single::{Single, SingleEmitter};
pub use crate::subject::{BehaviorSubject, PublishSubject, ReplaySubject};
