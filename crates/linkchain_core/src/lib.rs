//! Linkchain - singly-linked chain container.
//!
//! This crate contains the container itself and nothing else:
//! - [`Node`]: a free-standing link unit owning one value and the rest of its chain
//! - [`Chain`]: the size- and tail-tracked sequence controller
//! - Row-major operations on `Chain<Chain<U>>` (2-D jagged/rectangular tables)
//! - Rendering through `Display` and [`Listing`]
//!
//! # Design Philosophy
//!
//! - **One owner per node**: free nodes link through `Box<Node<T>>`; a chain
//!   adopts them into its own arena and links by [`NodeId`]. A tail can never
//!   dangle because it is an index the chain itself maintains.
//! - **Empty is a value state**: every node holds `Option<T>`. An absent value
//!   is valid data, renders as a placeholder, and is never an error.
//! - **Walk, don't jump**: positional access follows links from the head.
//!   The arena order is never used as the chain order.
//! - **Reject before mutating**: every fallible operation validates first, so
//!   a rejected call leaves the chain exactly as it was.
//!
//! # Tracing
//!
//! Growth operations emit `trace` events and rejected operations emit `debug`
//! events under the `linkchain_core` target. The crate never installs a
//! subscriber; see `linkchain_cli` for that.

mod chain;
mod error;
mod node;
mod node_id;
mod render;

pub use chain::{Chain, IntoIter, Iter, NodeMut, NodeRef, Nodes};
pub use error::{Axis, ChainError, Violation};
pub use node::{Node, NodeIter};
pub use node_id::NodeId;
pub use render::{Listing, EMPTY_CELL, EMPTY_LINE};
