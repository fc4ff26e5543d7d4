//! Conditional dispatch on capability probes.
//!
//! [`static_if`] runs exactly one of two branches selected by a type-level
//! boolean, usually a probe from [`crate::caps`]. The two branches are two
//! impls of [`Case`] — one for [`True`], one for [`False`] — with
//! independent bounds, so the unselected branch is never type-checked
//! against the argument type. That is the point: the branches are written
//! for disjoint capability classes, and one of them is frequently ill-formed
//! for the other's input.
//!
//! A probe that answers `True` without the matching contract impl (say,
//! `HasAllocator` without [`WithAllocator`]) surfaces as an unsatisfied
//! `Case` bound at the call site — a compile-time rejection, never a runtime
//! error.

use crate::bools::{False, True, TypeBool};
use crate::caps::{BinaryCapabilities, Capabilities, HasAllocator, HasEquality};

/// One branch pair of a conditional dispatch.
///
/// Implement `Case<True, Args>` and `Case<False, Args>` on a selector type;
/// [`static_if`] instantiates only the impl matching the selector boolean.
///
/// ```
/// use nh_core::bools::{False, True};
/// use nh_core::dispatch::{static_if, Case};
///
/// struct Pick;
///
/// impl Case<True, i32> for Pick {
///     type Output = i32;
///     fn run(self, x: i32) -> i32 {
///         x + 1
///     }
/// }
///
/// impl Case<False, i32> for Pick {
///     type Output = i32;
///     fn run(self, x: i32) -> i32 {
///         x - 1
///     }
/// }
///
/// assert_eq!(static_if::<True, _, _>(Pick, 1), 2);
/// assert_eq!(static_if::<False, _, _>(Pick, 1), 0);
/// ```
pub trait Case<B: TypeBool, Args> {
    /// Result type of this branch. The selected branch determines the
    /// dispatch's result type.
    type Output;

    /// Execute this branch with `args`.
    fn run(self, args: Args) -> Self::Output;
}

/// Run the branch of `cases` selected by the compile-time boolean `B`.
///
/// Only `Case<B, A>` is required; the impl for the other boolean is never
/// instantiated.
pub fn static_if<B, C, A>(cases: C, args: A) -> <C as Case<B, A>>::Output
where
    B: TypeBool,
    C: Case<B, A>,
{
    cases.run(args)
}

/// Contract behind the `HasAllocator` probe: the type carries an
/// allocator/arena handle that fresh values of the same type must share.
pub trait WithAllocator {
    /// Handle to the allocation context.
    type Alloc: Clone;

    /// The handle this value allocates from.
    fn allocator(&self) -> Self::Alloc;

    /// A fresh empty value allocating from `alloc`.
    fn new_in(alloc: Self::Alloc) -> Self;
}

/// Branch pair used by [`make_default`].
pub struct MakeDefault;

impl<'a, T: WithAllocator> Case<True, &'a T> for MakeDefault {
    type Output = T;

    fn run(self, prototype: &'a T) -> T {
        T::new_in(prototype.allocator())
    }
}

impl<'a, T: Default> Case<False, &'a T> for MakeDefault {
    type Output = T;

    fn run(self, _prototype: &'a T) -> T {
        T::default()
    }
}

/// Construct a fresh value of `prototype`'s type.
///
/// Types with an allocator handle are constructed through it
/// ([`WithAllocator::new_in`]); everything else uses ordinary default
/// construction. The non-applicable path is never type-checked, so
/// allocator-carrying types need no `Default` impl and plain types need no
/// allocator.
pub fn make_default<'a, T>(prototype: &'a T) -> T
where
    T: Capabilities,
    MakeDefault: Case<HasAllocator<T>, &'a T, Output = T>,
{
    static_if::<HasAllocator<T>, _, _>(MakeDefault, prototype)
}

/// Branch pair used by [`relaxed_eq`].
pub struct RelaxedEq;

impl<'a, T: PartialEq> Case<True, (&'a T, &'a T)> for RelaxedEq {
    type Output = bool;

    fn run(self, (a, b): (&'a T, &'a T)) -> bool {
        a == b
    }
}

impl<'a, T> Case<False, (&'a T, &'a T)> for RelaxedEq {
    type Output = bool;

    fn run(self, _pair: (&'a T, &'a T)) -> bool {
        true
    }
}

/// Equality comparison with a documented weak fallback: types without an
/// equality capability compare equal unconditionally.
///
/// Callers relying on the fallback must be aware it is not a true
/// equivalence check — it exists so generic histogram plumbing can compare
/// composed state whose members may lack equality altogether.
pub fn relaxed_eq<'a, T>(a: &'a T, b: &'a T) -> bool
where
    T: BinaryCapabilities,
    RelaxedEq: Case<HasEquality<T>, (&'a T, &'a T), Output = bool>,
{
    static_if::<HasEquality<T>, _, _>(RelaxedEq, (a, b))
}
