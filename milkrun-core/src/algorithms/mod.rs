//! A collection of geometric algorithms used by tour construction.

pub mod geo;
