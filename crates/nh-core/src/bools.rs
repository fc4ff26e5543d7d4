//! Type-level booleans.
//!
//! [`True`] and [`False`] carry compile-time facts between the capability
//! registry ([`crate::caps`]) and the dispatcher ([`crate::dispatch`]).
//! Selecting a trait impl on these types is what makes "probe, then branch,
//! never both" expressible on stable Rust: the branch for the other boolean
//! is a different impl and is never instantiated.

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::True {}
    impl Sealed for super::False {}
}

/// The type-level `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct True;

/// The type-level `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct False;

/// A compile-time boolean. Implemented only by [`True`] and [`False`].
pub trait TypeBool: sealed::Sealed {
    /// The runtime value of this boolean.
    const VALUE: bool;
    /// Logical conjunction with `B`.
    type And<B: TypeBool>: TypeBool;
    /// Logical disjunction with `B`.
    type Or<B: TypeBool>: TypeBool;
    /// Logical negation.
    type Not: TypeBool;
}

impl TypeBool for True {
    const VALUE: bool = true;
    type And<B: TypeBool> = B;
    type Or<B: TypeBool> = True;
    type Not = False;
}

impl TypeBool for False {
    const VALUE: bool = false;
    type And<B: TypeBool> = False;
    type Or<B: TypeBool> = B;
    type Not = True;
}

/// `A && B` at the type level.
pub type And<A, B> = <A as TypeBool>::And<B>;

/// `A || B` at the type level.
pub type Or<A, B> = <A as TypeBool>::Or<B>;

/// `!A` at the type level.
pub type Not<A> = <A as TypeBool>::Not;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_table() {
        assert!(<And<True, True>>::VALUE);
        assert!(!<And<True, False>>::VALUE);
        assert!(!<And<False, True>>::VALUE);
        assert!(!<And<False, False>>::VALUE);

        assert!(<Or<True, False>>::VALUE);
        assert!(<Or<False, True>>::VALUE);
        assert!(!<Or<False, False>>::VALUE);

        assert!(<Not<False>>::VALUE);
        assert!(!<Not<True>>::VALUE);
    }

    #[test]
    fn test_nesting() {
        // (true && !false) || false
        assert!(<Or<And<True, Not<False>>, False>>::VALUE);
    }
}
