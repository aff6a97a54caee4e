//! Storage helpers shared by the stores in this crate.

pub mod id_gen;
