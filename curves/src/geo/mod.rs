//!
//! # Traits for basic geometric definitions
//!
//! The `Geo` trait can be implemented by any type that has a particular type of coordinate - for
//! example, implementations of `Line` need to implement `Geo` in order to describe what type they
//! use for their end points.
//!

pub use super::coordinate::*;

///
/// Base trait implemented by things that are made up of coordinates
///
pub trait Geo {
    /// The coordinate type used by this geometry
    type Point: Coordinate;
}
