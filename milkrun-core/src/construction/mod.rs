//! Contains logic to build a visiting order over a set of stops.

pub mod tour;
