//! Wire contracts shared between the Meme Hub client and its HTTP API.
//!
//! Every endpoint the client consumes has a typed response here, so shape
//! validation happens once, at deserialization.

pub mod domain;
pub mod system;
pub mod usecases;
