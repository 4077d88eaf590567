//! The kind-restricted views over [`SilLocation`]

use crate::kind::LocationKind;
use crate::location::SilLocation;

pub(crate) mod sealed {
    use crate::location::SilLocation;

    /// Proof that the caller lives in this crate.
    #[derive(Debug, Clone, Copy)]
    pub struct Token(pub(crate) ());

    pub trait Sealed<'a>: Sized {
        /// Reinterpret `loc` as this view. Callers have checked the kind.
        fn wrap(loc: SilLocation<'a>, token: Token) -> Self;
    }
}

/// A typed reinterpretation of a [`SilLocation`] whose kind is `KIND`.
///
/// Views carry no storage of their own. The trait is sealed: a view can only
/// be obtained through its constructors or through the narrowing operations
/// on [`SilLocation`], so the kind predicate always holds.
pub trait LocationView<'a>: sealed::Sealed<'a> + Copy + Into<SilLocation<'a>> {
    const KIND: LocationKind;
    const NAME: &'static str;

    fn is_kind(loc: &SilLocation<'a>) -> bool {
        loc.kind() == Self::KIND
    }
}

/// Declares a view type: the newtype, its `LocationView` impl, read access
/// to the base tag, widening back to `SilLocation`, and the flag mutators
/// (which never change the kind).
macro_rules! location_view {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        pub struct $name<'a>(SilLocation<'a>);

        impl<'a> $crate::view::sealed::Sealed<'a> for $name<'a> {
            fn wrap(loc: SilLocation<'a>, _: $crate::view::sealed::Token) -> Self {
                debug_assert_eq!(loc.kind(), LocationKind::$kind);
                $name(loc)
            }
        }

        impl<'a> $crate::view::LocationView<'a> for $name<'a> {
            const KIND: LocationKind = LocationKind::$kind;
            const NAME: &'static str = stringify!($name);
        }

        impl<'a> std::ops::Deref for $name<'a> {
            type Target = SilLocation<'a>;

            fn deref(&self) -> &SilLocation<'a> {
                &self.0
            }
        }

        impl<'a> From<$name<'a>> for SilLocation<'a> {
            fn from(view: $name<'a>) -> Self {
                view.0
            }
        }

        impl<'a> $name<'a> {
            pub fn location(self) -> SilLocation<'a> {
                self.0
            }

            pub fn mark_auto_generated(&mut self) {
                self.0.mark_auto_generated();
            }

            pub fn point_to_start(&mut self) {
                self.0.point_to_start();
            }

            pub fn point_to_end(&mut self) {
                self.0.point_to_end();
            }

            pub fn mark_as_in_top_level(&mut self) {
                self.0.mark_as_in_top_level();
            }

            pub fn mark_as_prologue(&mut self) {
                self.0.mark_as_prologue();
            }
        }
    };
}

pub(crate) use location_view;
