//! Macros for declaring state and event enums.

/// Declare a fieldless enum and implement `State` for it.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
/// use turnstile::core::State;
///
/// state_enum! {
///     pub enum WorkflowState {
///         Start,
///         Processing,
///         Done,
///         Failed,
///     }
///     final: [Done, Failed]
/// }
///
/// assert_eq!(WorkflowState::Processing.name(), "Processing");
/// assert!(WorkflowState::Failed.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $crate::__named_enum! {
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(match self {
                    $(Self::$variant => stringify!($variant)),*
                })
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Declare a fieldless enum and implement `Event` for it.
///
/// Values declared this way carry no hooks of their own; wrap them in
/// [`Hooked`](crate::core::Hooked) to attach per-value callbacks.
///
/// ```
/// use turnstile::event_enum;
/// use turnstile::core::Event;
///
/// event_enum! {
///     pub enum DoorEvent {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorEvent::Close.name(), "Close");
/// assert!(DoorEvent::Open.hooks().is_none());
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $crate::__named_enum! {
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name { $($(#[$variant_meta])* $variant),* }
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                ::std::borrow::Cow::Borrowed(match self {
                    $(Self::$variant => stringify!($variant)),*
                })
            }
        }
    };
}

// Shared by `state_enum!` and `event_enum!`: the enum itself plus a
// `Display` impl that prints the trait's `name()`.
#[doc(hidden)]
#[macro_export]
macro_rules! __named_enum {
    (
        $naming:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($(#[$variant_meta:meta])* $variant:ident),* }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&<Self as $naming>::name(self))
            }
        }
    };
}
