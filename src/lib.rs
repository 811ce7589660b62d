//! arrayview: fixed blocks, address handles and the arithmetic between them.
//!
//! A [`core::FixedBlock`] is a contiguous run of `N` elements bound once and
//! never rebound. Decaying it yields a [`core::AddressHandle`], a movable,
//! non-owning address that has forgotten `N`. Handles offset, index and
//! subtract in units of the element size; byte distances are a separate
//! operation with a separate result type. Reads and writes through handles
//! are unchecked and `unsafe`. [`core::FixedBlock::try_index`] and friends
//! are the checked alternatives.

/// Core data types
pub mod core;

pub mod config;
pub mod demos;
pub mod error;
pub mod logging;
pub mod unchecked;

pub use crate::core::{Address, AddressHandle, ByteDistance, ElementDistance, FixedBlock, Walk};
pub use crate::error::{Result, ViewError};
