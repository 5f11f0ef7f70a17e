//! Command language for the computer simulator.
//!
//! A [`Session`] reads text one line at a time. Lines assign integer
//! variables, define a single parameterless function, or call it. Calling
//! the function replays its body, which may construct a computer and drive
//! it through dot-chained method calls.
//!
//! # Usage
//!
//! ```
//! use compsim_common::Output;
//! use compsim_parser::Session;
//!
//! let mut session = Session::new(Vec::<Output>::new());
//! for line in [
//!     "x = 5",
//!     "def f",
//!     "c = Computer.new(10)",
//!     r#"c.set_address(0).insert("PUSH", x).insert("PRINT").insert("STOP")"#,
//!     "c.set_address(0).execute()",
//!     "end",
//!     "f",
//! ] {
//!     session.read_line(line);
//! }
//! assert_eq!(session.into_sink(), vec![Output::Printed(5)]);
//! ```

pub mod function;
pub mod line;
pub mod method;
pub mod session;

mod patterns;

pub use function::Function;
pub use line::{classify, Line};
pub use method::{MethodCall, Operand};
pub use session::Session;
