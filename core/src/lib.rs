#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod alu;
pub mod api;
pub mod gates;
pub mod parser;
pub mod vm;
pub mod word;

pub use word::{Bit, Word};
