//! Built-in converter families.
//!
//! One file per family, mirroring the hierarchy subtree each converter
//! claims. Blocking and transfer queue shapes stay descriptors only; a pure
//! conversion has no blocking semantics to offer, so no family claims them
//! beyond the generic deque/queue subtrees they sit in.

mod collection;
mod deque;
mod list;
mod navigable_set;
mod set;
mod sorted_set;
