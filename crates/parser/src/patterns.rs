//! Compiled matchers for the command language.
//!
//! Identifiers are `[a-zA-Z_][a-zA-Z0-9_]*` and case-sensitive throughout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `exit()` alone on a line.
    pub(crate) static ref EXIT: Regex = Regex::new(r"^\s*exit\(\)\s*$").unwrap();

    /// `name = 42`
    pub(crate) static ref ASSIGNMENT: Regex =
        Regex::new(r"^\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*([0-9]+)\s*$").unwrap();

    /// `def name`
    pub(crate) static ref FUNCTION_START: Regex =
        Regex::new(r"^\s*def\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*$").unwrap();

    /// `end`
    pub(crate) static ref FUNCTION_END: Regex = Regex::new(r"^\s*end\s*$").unwrap();

    /// `name = Computer.new(10)`
    pub(crate) static ref CONSTRUCTOR: Regex =
        Regex::new(r"^\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*=\s*Computer\.new\(\s*([0-9]+)\s*\)\s*$")
            .unwrap();

    /// `set_address(x)` or `set_address(3)`
    pub(crate) static ref SET_ADDRESS: Regex =
        Regex::new(r"^set_address\(\s*(-?[a-zA-Z0-9_]+)\s*\)$").unwrap();

    /// `insert("PUSH", x)` or `insert("STOP")`
    pub(crate) static ref INSERT: Regex =
        Regex::new(r#"^insert\(\s*"([a-zA-Z_]+)"\s*(?:,\s*(-?[a-zA-Z0-9_]+)\s*)?\)$"#).unwrap();

    /// `execute()`
    pub(crate) static ref EXECUTE: Regex = Regex::new(r"^execute\(\s*\)$").unwrap();
}
