//! Shared types for the computer simulator.
//!
//! - [`Opcode`]: the six supported instructions
//! - [`Cell`]: one addressable unit of a computer's store
//! - [`Output`] / [`OutputSink`]: the notification channel to the host
//! - [`OpcodeError`]: errors from parsing mnemonics

pub mod cell;
pub mod error;
pub mod opcode;
pub mod output;

// Re-export commonly used types at the crate root.
pub use cell::Cell;
pub use error::OpcodeError;
pub use opcode::Opcode;
pub use output::{Output, OutputSink};
