//! Allocation-backed types, resolved from `std` or `alloc` depending on the `std` feature.

#[cfg(feature = "std")]
pub use std::borrow::Cow;
#[cfg(not(feature = "std"))]
pub use alloc::borrow::Cow;

#[cfg(feature = "std")]
pub use std::boxed::Box;
#[cfg(not(feature = "std"))]
pub use alloc::boxed::Box;

#[cfg(feature = "std")]
pub use std::vec::Vec;
#[cfg(not(feature = "std"))]
pub use alloc::vec::Vec;

#[cfg(feature = "std")]
pub use std::string::{String, ToString};
#[cfg(not(feature = "std"))]
pub use alloc::string::{String, ToString};

#[cfg(feature = "std")]
pub use std::sync::Arc;
#[cfg(not(feature = "std"))]
pub use alloc::sync::Arc;

#[cfg(feature = "std")]
pub use std::collections::{btree_map, BTreeMap};
#[cfg(not(feature = "std"))]
pub use alloc::collections::{btree_map, BTreeMap};
