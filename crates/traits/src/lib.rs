//! Core digest traits for the hashes workspace.
//!
//! This crate provides the one trait every hash function in the workspace
//! conforms to, plus the I/O wrappers built on top of it. It is `no_std`
//! compatible; `alloc` adds hex rendering and `std` adds the reader/writer
//! wrappers.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Fixed-output streaming hash functions | MD5, SHA-1, SHA-256, SHA3-512 |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
