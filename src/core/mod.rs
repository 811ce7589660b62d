//! Core types of the contiguous memory view.
//!
//! `FixedBlock` is the fixed binding, `AddressHandle` the movable address,
//! `Address` the raw number both resolve to. Distances come in two units,
//! `ElementDistance` and `ByteDistance`, that never convert implicitly.

pub mod address;
pub mod block;
pub mod distance;
pub mod handle;
pub mod walk;

pub use address::Address;
pub use block::FixedBlock;
pub use distance::{ByteDistance, ElementDistance};
pub use handle::AddressHandle;
pub use walk::Walk;
