// src/profile/mod.rs

//! Profiles and the store that owns them.
//!
//! - [`descriptor`] defines `TaskDescriptor`, one entry of a profile.
//! - [`document`] defines the persisted JSON document and its whole-file
//!   read/replace.
//! - [`store`] wraps the document in a lock and exposes the mutating
//!   operations, persisting after each one.

pub mod descriptor;
pub mod document;
pub mod store;

pub use descriptor::TaskDescriptor;
pub use document::{Profile, StoreDocument, load_document, save_document};
pub use store::ProfileStore;
