//! Core State trait for state machine states.
//!
//! States are opaque caller-owned values. The machine only ever compares
//! and hashes them; it never orders them or looks inside.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the table and returned from triggers
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in errors
/// - `Send` + `Sync`: machines are shared across threads
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use turnstile::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> Cow<'_, str> {
///         match self {
///             Self::Pending => "Pending".into(),
///             Self::Running => "Running".into(),
///             Self::Complete => "Complete".into(),
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Complete)
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// assert!(TaskState::Complete.is_final());
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for diagrams and logging.
    fn name(&self) -> Cow<'_, str>;

    /// Check if this is a final (terminal) state.
    ///
    /// The machine does not enforce anything about final states; this is
    /// informational only.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

impl State for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl State for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

macro_rules! impl_state_for_integers {
    ($($ty:ty),*) => {
        $(
            impl State for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_state_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
