//! # nh-core
//!
//! Generic-dispatch foundation for the nhist histogram stack.
//!
//! Provides:
//! - **Capability probing** via the [`caps::Capabilities`] registry: pure,
//!   type-level boolean facts ("does this type support operation X?") that
//!   never invoke X on a type that cannot accept it
//! - **Conditional dispatch** via [`dispatch::static_if`]: run exactly one of
//!   two branches, without the unselected branch ever being type-checked
//!   against the argument type
//! - **Axis variants** via [`axis_variant!`]: closed-alternative unions over
//!   axis types with type-safe visitation
//! - The [`axis::Axis`] contract and the [`markers::Weight`] /
//!   [`markers::Sample`] fill markers shared by the rest of the stack

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod bools;
pub mod caps;
pub mod dispatch;
pub mod error;
pub mod markers;
pub mod variant;

pub use axis::{Axis, Transform};
pub use bools::{False, True, TypeBool};
pub use caps::{BinaryCapabilities, Capabilities};
pub use dispatch::{make_default, relaxed_eq, static_if, Case, WithAllocator};
pub use error::{Error, Result};
pub use markers::{sample, weight, Sample, Weight};
pub use variant::{AxisVisitor, AxisVisitorMut};
