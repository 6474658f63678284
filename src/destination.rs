// Destination identity - what a type needs to live on the navigation stack
use std::fmt::Debug;
use std::hash::Hash;

/// A value identifying one screen and its parameters.
///
/// Equality drives lookup-by-value (`navigate_back_to`), hashing lets
/// consumers key caches by destination, and `Debug` is used in logs.
/// Any type with these derives qualifies, typically an enum with one
/// variant per screen:
///
/// ```
/// #[derive(Clone, Debug, PartialEq, Eq, Hash)]
/// enum Route {
///     Inbox,
///     Thread { id: u32 },
/// }
///
/// fn assert_destination<D: navstack::Destination>() {}
/// assert_destination::<Route>();
/// ```
pub trait Destination: Clone + Eq + Hash + Debug {}

impl<T> Destination for T where T: Clone + Eq + Hash + Debug {}
