#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core document model for folio.
//!
//! Two layers:
//! - **Values**: lexical positions, validated names, content numbers
//! - **Tree**: the closed set of document nodes, generic over a phase payload
//!
//! A tree is built twice during a run: once by the parser with [`Parsed`]
//! payloads, once by the compiler with [`Compiled`] payloads.

pub mod ast;
pub mod colors;

mod lexical;
mod names;
mod number;

#[cfg(test)]
mod number_tests;

pub use ast::{Compiled, NodeId, NodeRef, Parsed, Payload};
pub use colors::Colors;
pub use lexical::Lexical;
pub use names::{BlockId, NAME_MAX_LEN, Rejection, TypeName, ValueRejected};
pub use number::ContentNumber;
