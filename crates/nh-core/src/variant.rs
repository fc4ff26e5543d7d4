//! Closed-alternative axis variants with type-safe visitation.
//!
//! [`axis_variant!`] declares an enum over a closed set of concrete axis
//! types and generates everything a variant needs:
//!
//! - [`Axis`](crate::axis::Axis) forwarding, so the variant itself answers
//!   the size/call shape of the axis contract (and the `IsAnyAxis` composite
//!   probe), while its own `IsAxis` probe stays `False` — variants are
//!   detected separately through `IsAxisVariant`
//! - `From<A>` construction for each alternative; an alternative that does
//!   not satisfy the axis contract is rejected at compile time
//! - `visit` / `visit_mut` over [`AxisVisitor`] / [`AxisVisitorMut`] values
//! - the [`Capabilities`](crate::caps::Capabilities) enrollment
//!
//! A visitor produces one result type for every alternative: the result is
//! pinned by the visitor's `Output` associated type and checked at compile
//! time, never re-derived per alternative.

use crate::axis::Axis;

/// A polymorphic operation over whichever axis alternative a variant holds.
pub trait AxisVisitor {
    /// Result type, shared by all alternatives.
    type Output;

    /// Visit the active alternative.
    fn visit<A: Axis>(&mut self, axis: &A) -> Self::Output;
}

/// Mutating twin of [`AxisVisitor`].
pub trait AxisVisitorMut {
    /// Result type, shared by all alternatives.
    type Output;

    /// Visit the active alternative mutably.
    fn visit_mut<A: Axis>(&mut self, axis: &mut A) -> Self::Output;
}

/// Declare a closed-alternative axis variant.
///
/// ```
/// use nh_core::axis::Axis;
/// use nh_core::variant::AxisVisitor;
///
/// struct Uniform {
///     bins: usize,
/// }
///
/// impl Axis for Uniform {
///     fn size(&self) -> usize {
///         self.bins
///     }
///
///     fn index(&self, value: f64) -> Option<usize> {
///         let i = value as isize;
///         (i >= 0 && (i as usize) < self.bins).then(|| i as usize)
///     }
/// }
///
/// nh_core::enroll_axis!(Uniform);
///
/// nh_core::axis_variant! {
///     /// Axis alternatives supported by this histogram family.
///     pub enum AnyAxis {
///         Uniform(Uniform),
///     }
/// }
///
/// struct BinCount;
///
/// impl AxisVisitor for BinCount {
///     type Output = usize;
///
///     fn visit<A: Axis>(&mut self, axis: &A) -> usize {
///         axis.size()
///     }
/// }
///
/// let any = AnyAxis::from(Uniform { bins: 8 });
/// assert_eq!(any.visit(BinCount), 8);
/// assert_eq!(any.size(), 8);
/// ```
#[macro_export]
macro_rules! axis_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$alt_meta:meta])* $alt:ident($axis:ty) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$alt_meta])* $alt($axis) ),+
        }

        impl $crate::axis::Axis for $name {
            fn size(&self) -> usize {
                match self {
                    $( Self::$alt(axis) => $crate::axis::Axis::size(axis) ),+
                }
            }

            fn index(&self, value: f64) -> Option<usize> {
                match self {
                    $( Self::$alt(axis) => $crate::axis::Axis::index(axis, value) ),+
                }
            }
        }

        $(
            impl From<$axis> for $name {
                fn from(axis: $axis) -> Self {
                    Self::$alt(axis)
                }
            }
        )+

        impl $name {
            /// Apply `visitor` to the active alternative.
            $vis fn visit<V: $crate::variant::AxisVisitor>(&self, mut visitor: V) -> V::Output {
                match self {
                    $( Self::$alt(axis) => visitor.visit(axis) ),+
                }
            }

            /// Apply `visitor` to the active alternative, mutably.
            $vis fn visit_mut<V: $crate::variant::AxisVisitorMut>(
                &mut self,
                mut visitor: V,
            ) -> V::Output {
                match self {
                    $( Self::$alt(axis) => visitor.visit_mut(axis) ),+
                }
            }
        }

        impl $crate::caps::Capabilities for $name {
            type HasMetadata = $crate::bools::False;
            type HasResize = $crate::bools::False;
            type HasSize = $crate::bools::True;
            type HasClear = $crate::bools::False;
            type HasLowerEdge = $crate::bools::False;
            type HasValueAt = $crate::bools::False;
            type HasOptions = $crate::bools::False;
            type HasAllocator = $crate::bools::False;
            type IsIndexable = $crate::bools::False;
            type IsTransform = $crate::bools::False;
            type IsMapLike = $crate::bools::False;
            type IsAxis = $crate::bools::False;
            type IsAxisVariant = $crate::bools::True;
            type IsIterable = $crate::bools::False;
            type IsStreamable = $crate::bools::False;
            type IsIncrementable = $crate::bools::False;
            type HasFixedSize = $crate::bools::False;
            type HasScaleMul = $crate::bools::False;
            type IsArithmetic = $crate::bools::False;
            type IsWeight = $crate::bools::False;
            type IsSample = $crate::bools::False;
            type Elem = Self;
        }
    };
}
