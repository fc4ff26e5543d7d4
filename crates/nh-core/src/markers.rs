//! Fill markers.
//!
//! [`Weight`] and [`Sample`] are opaque single-payload wrappers that tag how
//! a filled value should be combined: a weighted contribution, or a grouped
//! sample forwarded to sample-aware cells. The fill path itself lives with
//! the histogram types; here the markers only need an identity that the
//! `IsWeight` / `IsSample` probes can recognize.

use crate::bools::{False, True};
use crate::caps::Capabilities;
use serde::{Deserialize, Serialize};

/// A weighted fill contribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight<T>(pub T);

/// A grouped sample forwarded to sample-aware cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample<T>(pub T);

/// Tag `value` as a fill weight.
#[inline]
pub fn weight<T>(value: T) -> Weight<T> {
    Weight(value)
}

/// Tag `value` as a grouped sample.
#[inline]
pub fn sample<T>(value: T) -> Sample<T> {
    Sample(value)
}

impl<T: Capabilities> Capabilities for Weight<T> {
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
    type IsStreamable = False;
    type IsIncrementable = False;
    type HasFixedSize = False;
    type HasScaleMul = False;
    type IsArithmetic = False;
    type IsWeight = True;
    type IsSample = False;
    type Elem = Self;
}

impl<T: Capabilities> Capabilities for Sample<T> {
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
    type IsStreamable = False;
    type IsIncrementable = False;
    type HasFixedSize = False;
    type HasScaleMul = False;
    type IsArithmetic = False;
    type IsWeight = False;
    type IsSample = True;
    type Elem = Self;
}
