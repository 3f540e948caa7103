//! Events and per-instance event capabilities.
//!
//! An event value may carry its own before and after callbacks. The
//! machine asks the event presented at trigger time for its hooks on every
//! call, so two values of the same event kind can behave differently.

use super::context::Context;
use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

type EventCallback = Arc<dyn Fn(&Context) + Send + Sync>;

/// Trait for state machine events.
///
/// Events key the transition table together with the source state, so
/// they need the same equality and hashing guarantees as states.
pub trait Event: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the event's name for diagrams and logging.
    fn name(&self) -> Cow<'_, str>;

    /// Callbacks carried by this particular event value.
    ///
    /// Default implementation returns `None`.
    fn hooks(&self) -> Option<&EventHooks> {
        None
    }
}

/// Optional before/after callbacks carried by an event value.
#[derive(Clone, Default)]
pub struct EventHooks {
    before: Option<EventCallback>,
    after: Option<EventCallback>,
}

impl EventHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback run after the guard passes and before the commit.
    pub fn before<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        self.before = Some(Arc::new(callback));
        self
    }

    /// Set the callback run after the commit.
    pub fn after<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        self.after = Some(Arc::new(callback));
        self
    }

    pub fn has_before(&self) -> bool {
        self.before.is_some()
    }

    pub fn has_after(&self) -> bool {
        self.after.is_some()
    }

    pub(crate) fn run_before(&self, ctx: &Context) {
        if let Some(before) = &self.before {
            before(ctx);
        }
    }

    pub(crate) fn run_after(&self, ctx: &Context) {
        if let Some(after) = &self.after {
            after(ctx);
        }
    }
}

impl Debug for EventHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHooks")
            .field("before", &self.has_before())
            .field("after", &self.has_after())
            .finish()
    }
}

/// An event kind paired with callbacks for this one value.
///
/// Equality and hashing only look at the wrapped kind, so a `Hooked`
/// value finds the transition registered for its kind while bringing its
/// own callbacks along.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use turnstile::core::{Context, Event, Hooked};
///
/// let seen = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&seen);
///
/// let plain = Hooked::new("Open");
/// let hooked = Hooked::new("Open").before(move |_ctx: &Context| {
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// assert_eq!(plain, hooked);
/// assert!(plain.hooks().is_none());
/// assert!(hooked.hooks().is_some());
/// ```
#[derive(Clone)]
pub struct Hooked<E> {
    event: E,
    hooks: Option<EventHooks>,
}

impl<E: Event> Hooked<E> {
    pub fn new(event: E) -> Self {
        Self { event, hooks: None }
    }

    pub fn before<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        self.hooks = Some(self.hooks.take().unwrap_or_default().before(callback));
        self
    }

    pub fn after<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Context) + Send + Sync + 'static,
    {
        self.hooks = Some(self.hooks.take().unwrap_or_default().after(callback));
        self
    }

    /// The wrapped event kind.
    pub fn kind(&self) -> &E {
        &self.event
    }

    pub fn into_kind(self) -> E {
        self.event
    }
}

impl<E: Event> From<E> for Hooked<E> {
    fn from(event: E) -> Self {
        Self::new(event)
    }
}

impl<E: PartialEq> PartialEq for Hooked<E> {
    fn eq(&self, other: &Self) -> bool {
        self.event == other.event
    }
}

impl<E: Eq> Eq for Hooked<E> {}

impl<E: Hash> Hash for Hooked<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.event.hash(state);
    }
}

impl<E: Debug> Debug for Hooked<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render as the bare kind so errors read the same with or without hooks.
        self.event.fmt(f)
    }
}

impl<E: Event> Event for Hooked<E> {
    fn name(&self) -> Cow<'_, str> {
        self.event.name()
    }

    fn hooks(&self) -> Option<&EventHooks> {
        self.hooks.as_ref()
    }
}

impl Event for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl Event for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_event_for_integers {
    ($($ty:ty),*) => {
        $(
            impl Event for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_event_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
