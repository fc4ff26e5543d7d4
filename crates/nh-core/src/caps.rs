//! Capability probe registry.
//!
//! A *capability probe* is a pure, type-level boolean fact: "does type `T`
//! support operation shape X?". Probes are answered by the [`Capabilities`]
//! registry trait (one associated [`TypeBool`] per operation shape) and never
//! by attempting the operation, so probing a type for an unsupported
//! operation yields `False` instead of failing. Probes depend on the type
//! alone, never on runtime state.
//!
//! Each probe is also exposed as a `const fn` (e.g. [`has_size`]) and as a
//! generic type alias usable as a dispatch selector (e.g. `HasSize<T>` feeds
//! [`crate::dispatch::static_if`]). Composite probes such as
//! [`IsVectorLike`] are conjunctions/disjunctions of the primitives, built
//! with the combinators from [`crate::bools`].
//!
//! Enrollment is explicit: a type participates by implementing
//! [`Capabilities`] (by hand, or through [`crate::enroll_axis!`] /
//! [`crate::enroll_opaque!`] / [`crate::axis_variant!`]). The registry ships
//! enrollments for the arithmetic scalars, `Vec`, arrays, and the std maps.

use crate::bools::{And, False, Or, True, TypeBool};
use std::collections::{BTreeMap, HashMap};

/// Unary capability probes for a candidate type.
///
/// Every entry answers one named question about the implementing type. A
/// plain data type with no notable operations sets everything to [`False`]
/// (see [`crate::enroll_opaque!`]); absence of a capability is an answer,
/// not an error.
pub trait Capabilities {
    /// Exposes a metadata accessor (axis label/title block).
    type HasMetadata: TypeBool;
    /// Can be resized to a new cell count.
    type HasResize: TypeBool;
    /// Exposes a size/length query.
    type HasSize: TypeBool;
    /// Can be cleared back to its empty state.
    type HasClear: TypeBool;
    /// Exposes a lower-bin-edge accessor.
    type HasLowerEdge: TypeBool;
    /// Exposes a `value()` accessor.
    type HasValueAt: TypeBool;
    /// Exposes an options/flags accessor.
    type HasOptions: TypeBool;
    /// Carries an allocator/arena handle that fresh values must share
    /// (see [`crate::dispatch::WithAllocator`]).
    type HasAllocator: TypeBool;
    /// Supports integer subscripting.
    type IsIndexable: TypeBool;
    /// Exposes forward and inverse mappings (see [`crate::axis::Transform`]).
    type IsTransform: TypeBool;
    /// Has key/value entry semantics with full traversal.
    type IsMapLike: TypeBool;
    /// Satisfies the axis contract (bin count + value-to-bin mapping) as a
    /// single concrete axis. Deliberately `False` for axis variants, whose
    /// mapping is forwarded rather than fixed; variants are detected through
    /// [`Capabilities::IsAxisVariant`] and the [`IsAnyAxis`] composite.
    type IsAxis: TypeBool;
    /// Is a closed-alternative axis variant (see [`crate::axis_variant!`]).
    type IsAxisVariant: TypeBool;
    /// Supports forward iteration over its elements.
    type IsIterable: TypeBool;
    /// Can be written to a formatter.
    type IsStreamable: TypeBool;
    /// Supports increment by one (counter-style cells).
    type IsIncrementable: TypeBool;
    /// Has a length fixed at compile time.
    type HasFixedSize: TypeBool;
    /// Supports in-place multiplication by a floating scalar.
    type HasScaleMul: TypeBool;
    /// Is an arithmetic scalar. Drives the reduction's choice between
    /// compensated scalar summation and cell-native accumulation.
    type IsArithmetic: TypeBool;
    /// Is the weighted-fill marker (see [`crate::markers::Weight`]).
    type IsWeight: TypeBool;
    /// Is the grouped-sample marker (see [`crate::markers::Sample`]).
    type IsSample: TypeBool;
    /// Element type seen first when iterating, for the sequence composites.
    /// `Self` for non-containers.
    type Elem: Capabilities;
}

/// Binary capability probes relating a candidate type to a second type `U`
/// (defaulting to the type itself).
pub trait BinaryCapabilities<U = Self> {
    /// Supports equality comparison against `U`.
    type HasEquality: TypeBool;
    /// Supports in-place addition of a `U`.
    type HasAddAssign: TypeBool;
    /// Exposes a `value()` accessor whose result converts to `U`.
    type HasValueAs: TypeBool;
}

macro_rules! probe {
    ($(#[$doc:meta])* $Cap:ident, $fn_name:ident) => {
        $(#[$doc])*
        pub type $Cap<T> = <T as Capabilities>::$Cap;

        #[doc = concat!("Const form of the `", stringify!($Cap), "` probe.")]
        pub const fn $fn_name<T: Capabilities>() -> bool {
            <<T as Capabilities>::$Cap as TypeBool>::VALUE
        }
    };
}

probe!(
    /// Selector form of [`Capabilities::HasMetadata`].
    HasMetadata, has_metadata
);
probe!(
    /// Selector form of [`Capabilities::HasResize`].
    HasResize, has_resize
);
probe!(
    /// Selector form of [`Capabilities::HasSize`].
    HasSize, has_size
);
probe!(
    /// Selector form of [`Capabilities::HasClear`].
    HasClear, has_clear
);
probe!(
    /// Selector form of [`Capabilities::HasLowerEdge`].
    HasLowerEdge, has_lower_edge
);
probe!(
    /// Selector form of [`Capabilities::HasValueAt`].
    HasValueAt, has_value_at
);
probe!(
    /// Selector form of [`Capabilities::HasOptions`].
    HasOptions, has_options
);
probe!(
    /// Selector form of [`Capabilities::HasAllocator`].
    HasAllocator, has_allocator
);
probe!(
    /// Selector form of [`Capabilities::IsIndexable`].
    IsIndexable, is_indexable
);
probe!(
    /// Selector form of [`Capabilities::IsTransform`].
    IsTransform, is_transform
);
probe!(
    /// Selector form of [`Capabilities::IsMapLike`].
    IsMapLike, is_map_like
);
probe!(
    /// Selector form of [`Capabilities::IsAxis`].
    IsAxis, is_axis
);
probe!(
    /// Selector form of [`Capabilities::IsAxisVariant`].
    IsAxisVariant, is_axis_variant
);
probe!(
    /// Selector form of [`Capabilities::IsIterable`].
    IsIterable, is_iterable
);
probe!(
    /// Selector form of [`Capabilities::IsStreamable`].
    IsStreamable, is_streamable
);
probe!(
    /// Selector form of [`Capabilities::IsIncrementable`].
    IsIncrementable, is_incrementable
);
probe!(
    /// Selector form of [`Capabilities::HasFixedSize`].
    HasFixedSize, has_fixed_size
);
probe!(
    /// Selector form of [`Capabilities::HasScaleMul`].
    HasScaleMul, has_scale_mul
);
probe!(
    /// Selector form of [`Capabilities::IsArithmetic`].
    IsArithmetic, is_arithmetic
);
probe!(
    /// Selector form of [`Capabilities::IsWeight`].
    IsWeight, is_weight
);
probe!(
    /// Selector form of [`Capabilities::IsSample`].
    IsSample, is_sample
);

/// First-element type of a container, per [`Capabilities::Elem`].
pub type Elem<T> = <T as Capabilities>::Elem;

/// Indexable, resizable, sized, and iterable.
pub type IsVectorLike<T> =
    And<IsIndexable<T>, And<HasResize<T>, And<HasSize<T>, IsIterable<T>>>>;

/// Indexable, sized, iterable, with a compile-time fixed length.
pub type IsArrayLike<T> =
    And<IsIndexable<T>, And<HasSize<T>, And<HasFixedSize<T>, IsIterable<T>>>>;

/// Indexable, sized, and iterable (resizable or not).
pub type IsIndexableContainer<T> = And<IsIndexable<T>, And<HasSize<T>, IsIterable<T>>>;

/// A concrete axis or an axis variant.
pub type IsAnyAxis<T> = Or<IsAxis<T>, IsAxisVariant<T>>;

/// Iterable with concrete axes as elements.
pub type IsSequenceOfAxis<T> = And<IsIterable<T>, IsAxis<Elem<T>>>;

/// Iterable with axis variants as elements.
pub type IsSequenceOfAxisVariant<T> = And<IsIterable<T>, IsAxisVariant<Elem<T>>>;

/// Iterable with axes or axis variants as elements.
pub type IsSequenceOfAnyAxis<T> = And<IsIterable<T>, IsAnyAxis<Elem<T>>>;

/// Const form of [`IsVectorLike`].
pub const fn is_vector_like<T: Capabilities>() -> bool {
    <IsVectorLike<T> as TypeBool>::VALUE
}

/// Const form of [`IsArrayLike`].
pub const fn is_array_like<T: Capabilities>() -> bool {
    <IsArrayLike<T> as TypeBool>::VALUE
}

/// Const form of [`IsIndexableContainer`].
pub const fn is_indexable_container<T: Capabilities>() -> bool {
    <IsIndexableContainer<T> as TypeBool>::VALUE
}

/// Const form of [`IsAnyAxis`].
pub const fn is_any_axis<T: Capabilities>() -> bool {
    <IsAnyAxis<T> as TypeBool>::VALUE
}

/// Const form of [`IsSequenceOfAxis`].
pub const fn is_sequence_of_axis<T: Capabilities>() -> bool {
    <IsSequenceOfAxis<T> as TypeBool>::VALUE
}

/// Const form of [`IsSequenceOfAxisVariant`].
pub const fn is_sequence_of_axis_variant<T: Capabilities>() -> bool {
    <IsSequenceOfAxisVariant<T> as TypeBool>::VALUE
}

/// Const form of [`IsSequenceOfAnyAxis`].
pub const fn is_sequence_of_any_axis<T: Capabilities>() -> bool {
    <IsSequenceOfAnyAxis<T> as TypeBool>::VALUE
}

/// Equality-against-`U` selector, per [`BinaryCapabilities::HasEquality`].
pub type HasEquality<T, U = T> = <T as BinaryCapabilities<U>>::HasEquality;

/// Add-assign-of-`U` selector, per [`BinaryCapabilities::HasAddAssign`].
pub type HasAddAssign<T, U = T> = <T as BinaryCapabilities<U>>::HasAddAssign;

/// Value-convertible-to-`U` selector, per [`BinaryCapabilities::HasValueAs`].
pub type HasValueAs<T, U = T> = <T as BinaryCapabilities<U>>::HasValueAs;

/// Const form of the `HasEquality` probe.
pub const fn has_equality<T: BinaryCapabilities<U>, U>() -> bool {
    <<T as BinaryCapabilities<U>>::HasEquality as TypeBool>::VALUE
}

/// Const form of the `HasAddAssign` probe.
pub const fn has_add_assign<T: BinaryCapabilities<U>, U>() -> bool {
    <<T as BinaryCapabilities<U>>::HasAddAssign as TypeBool>::VALUE
}

/// Const form of the `HasValueAs` probe.
pub const fn has_value_as<T: BinaryCapabilities<U>, U>() -> bool {
    <<T as BinaryCapabilities<U>>::HasValueAs as TypeBool>::VALUE
}

/// Enroll a concrete axis type: bin-count query plus value-to-bin mapping,
/// nothing else. Types needing more (metadata, transforms) write the
/// [`Capabilities`] impl by hand.
#[macro_export]
macro_rules! enroll_axis {
    ($t:ty) => {
        impl $crate::caps::Capabilities for $t {
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
            type IsAxis = $crate::bools::True;
            type IsAxisVariant = $crate::bools::False;
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

/// Enroll a type with no probed capabilities: every probe answers `False`.
#[macro_export]
macro_rules! enroll_opaque {
    ($t:ty) => {
        impl $crate::caps::Capabilities for $t {
            type HasMetadata = $crate::bools::False;
            type HasResize = $crate::bools::False;
            type HasSize = $crate::bools::False;
            type HasClear = $crate::bools::False;
            type HasLowerEdge = $crate::bools::False;
            type HasValueAt = $crate::bools::False;
            type HasOptions = $crate::bools::False;
            type HasAllocator = $crate::bools::False;
            type IsIndexable = $crate::bools::False;
            type IsTransform = $crate::bools::False;
            type IsMapLike = $crate::bools::False;
            type IsAxis = $crate::bools::False;
            type IsAxisVariant = $crate::bools::False;
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

// --- std enrollments ---

macro_rules! enroll_arithmetic {
    ($scale_mul:ty; $($t:ty),+ $(,)?) => {
        $(
            impl Capabilities for $t {
                type HasMetadata = False;
                type HasResize = False;
                type HasSize = False;
                type HasClear = False;
                type HasLowerEdge = False;
                type HasValueAt = False;
                type HasOptions = False;
                type HasAllocator = False;
                type IsIndexable = False;
                type IsTransform = False;
                type IsMapLike = False;
                type IsAxis = False;
                type IsAxisVariant = False;
                type IsIterable = False;
                type IsStreamable = True;
                type IsIncrementable = True;
                type HasFixedSize = False;
                type HasScaleMul = $scale_mul;
                type IsArithmetic = True;
                type IsWeight = False;
                type IsSample = False;
                type Elem = Self;
            }

            impl BinaryCapabilities for $t {
                type HasEquality = True;
                type HasAddAssign = True;
                type HasValueAs = False;
            }
        )+
    };
}

// Floats scale in place by a floating factor; the integer counters do not.
enroll_arithmetic!(True; f32, f64);
enroll_arithmetic!(False; u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: Capabilities> Capabilities for Vec<T> {
    type HasMetadata = False;
    type HasResize = True;
    type HasSize = True;
    type HasClear = True;
    type HasLowerEdge = False;
    type HasValueAt = False;
    type HasOptions = False;
    type HasAllocator = False;
    type IsIndexable = True;
    type IsTransform = False;
    type IsMapLike = False;
    type IsAxis = False;
    type IsAxisVariant = False;
    type IsIterable = True;
    type IsStreamable = False;
    type IsIncrementable = False;
    type HasFixedSize = False;
    type HasScaleMul = False;
    type IsArithmetic = False;
    type IsWeight = False;
    type IsSample = False;
    type Elem = T;
}

impl<T: PartialEq> BinaryCapabilities for Vec<T> {
    type HasEquality = True;
    type HasAddAssign = False;
    type HasValueAs = False;
}

impl<T: Capabilities, const N: usize> Capabilities for [T; N] {
    type HasMetadata = False;
    type HasResize = False;
    type HasSize = True;
    type HasClear = False;
    type HasLowerEdge = False;
    type HasValueAt = False;
    type HasOptions = False;
    type HasAllocator = False;
    type IsIndexable = True;
    type IsTransform = False;
    type IsMapLike = False;
    type IsAxis = False;
    type IsAxisVariant = False;
    type IsIterable = True;
    type IsStreamable = False;
    type IsIncrementable = False;
    type HasFixedSize = True;
    type HasScaleMul = False;
    type IsArithmetic = False;
    type IsWeight = False;
    type IsSample = False;
    type Elem = T;
}

macro_rules! enroll_map {
    ($($t:ident),+) => {
        $(
            impl<K, V> Capabilities for $t<K, V> {
                type HasMetadata = False;
                type HasResize = False;
                type HasSize = True;
                type HasClear = True;
                type HasLowerEdge = False;
                type HasValueAt = False;
                type HasOptions = False;
                type HasAllocator = False;
                type IsIndexable = False;
                type IsTransform = False;
                type IsMapLike = True;
                type IsAxis = False;
                type IsAxisVariant = False;
                type IsIterable = True;
                type IsStreamable = False;
                type IsIncrementable = False;
                type HasFixedSize = False;
                type HasScaleMul = False;
                type IsArithmetic = False;
                type IsWeight = False;
                type IsSample = False;
                // Map entries are key/value pairs, not bare elements; maps
                // never count as axis sequences.
                type Elem = Self;
            }
        )+
    };
}

enroll_map!(HashMap, BTreeMap);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;

    struct ToyAxis {
        bins: usize,
    }

    impl Axis for ToyAxis {
        fn size(&self) -> usize {
            self.bins
        }

        fn index(&self, value: f64) -> Option<usize> {
            let i = value as isize;
            (0..self.bins as isize).contains(&i).then(|| i as usize)
        }
    }

    crate::enroll_axis!(ToyAxis);

    struct Inert;
    crate::enroll_opaque!(Inert);

    #[test]
    fn test_scalar_probes() {
        assert!(is_arithmetic::<f64>());
        assert!(is_arithmetic::<u8>());
        assert!(is_streamable::<f32>());
        assert!(is_incrementable::<u64>());
        assert!(has_scale_mul::<f64>());
        assert!(!has_scale_mul::<i32>());
        assert!(!is_indexable::<f64>());
        assert!(!is_arithmetic::<Vec<f64>>());
    }

    #[test]
    fn test_container_composites() {
        assert!(is_vector_like::<Vec<f64>>());
        assert!(is_indexable_container::<Vec<u32>>());
        assert!(!is_array_like::<Vec<f64>>());

        assert!(is_array_like::<[f64; 3]>());
        assert!(is_indexable_container::<[u8; 4]>());
        assert!(!is_vector_like::<[f64; 3]>());
        assert!(!has_resize::<[f64; 3]>());

        assert!(is_map_like::<HashMap<i32, f64>>());
        assert!(is_map_like::<BTreeMap<i32, f64>>());
        assert!(!is_indexable::<HashMap<i32, f64>>());

        assert!(!is_vector_like::<f64>());
        assert!(!is_indexable_container::<Inert>());
    }

    #[test]
    fn test_axis_probes() {
        assert!(is_axis::<ToyAxis>());
        assert!(is_any_axis::<ToyAxis>());
        assert!(!is_axis_variant::<ToyAxis>());
        assert!(has_size::<ToyAxis>());
        assert!(!is_axis::<Inert>());
    }

    #[test]
    fn test_sequence_composites() {
        assert!(is_sequence_of_axis::<Vec<ToyAxis>>());
        assert!(is_sequence_of_any_axis::<Vec<ToyAxis>>());
        assert!(!is_sequence_of_axis_variant::<Vec<ToyAxis>>());
        assert!(!is_sequence_of_axis::<Vec<f64>>());
        // Not iterable at all.
        assert!(!is_sequence_of_axis::<ToyAxis>());
        // Maps never count as axis sequences.
        assert!(!is_sequence_of_any_axis::<HashMap<i32, f64>>());
    }

    #[test]
    fn test_binary_probes() {
        assert!(has_equality::<f64, f64>());
        assert!(has_add_assign::<u32, u32>());
        assert!(has_equality::<Vec<i32>, Vec<i32>>());
        assert!(!has_add_assign::<Vec<i32>, Vec<i32>>());
        assert!(!has_value_as::<f64, f64>());
    }
}
