//! Service assembly
//!
//! Wires the modules into the embeddable service facade.

pub mod core;

pub use core::Filebox;
