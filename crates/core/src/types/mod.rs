//! Core types for SoyCart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod id;
pub mod money;
pub mod status;
pub mod username;

pub use contact::{ContactError, ContactNumber};
pub use id::*;
pub use money::Money;
pub use status::*;
pub use username::{Username, UsernameError};
