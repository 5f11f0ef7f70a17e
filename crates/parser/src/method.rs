//! Instance-method tokens: `set_address(..)`, `insert(..)`, `execute()`.

use std::collections::HashMap;

use crate::patterns::{EXECUTE, INSERT, SET_ADDRESS};

/// An argument as written: an integer literal or a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(i64),
    Variable(String),
}

impl Operand {
    /// Literal first, otherwise a variable reference.
    pub fn parse(token: &str) -> Self {
        match token.parse() {
            Ok(value) => Operand::Literal(value),
            Err(_) => Operand::Variable(token.to_string()),
        }
    }

    /// The integer this operand stands for, or `None` for an unknown
    /// variable.
    pub fn resolve(&self, variables: &HashMap<String, i64>) -> Option<i64> {
        match self {
            Operand::Literal(value) => Some(*value),
            Operand::Variable(name) => variables.get(name).copied(),
        }
    }
}

/// One method invoked on the session's computer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MethodCall {
    SetAddress(Operand),
    Insert {
        mnemonic: String,
        operand: Option<Operand>,
    },
    Execute,
}

impl MethodCall {
    /// Parse a single dot-separated token such as `insert("PUSH", x)`.
    ///
    /// Returns `None` for anything that is not one of the three methods.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();

        if let Some(caps) = SET_ADDRESS.captures(token) {
            return Some(MethodCall::SetAddress(Operand::parse(&caps[1])));
        }

        if let Some(caps) = INSERT.captures(token) {
            return Some(MethodCall::Insert {
                mnemonic: caps[1].to_string(),
                operand: caps.get(2).map(|m| Operand::parse(m.as_str())),
            });
        }

        if EXECUTE.is_match(token) {
            return Some(MethodCall::Execute);
        }

        None
    }
}

/// Split `c.set_address(0).execute()` into its method tokens when `name` is
/// the computer's name (`c`). Returns `None` if the line does not address
/// that computer.
pub fn method_tokens<'a>(line: &'a str, name: &str) -> Option<impl Iterator<Item = &'a str>> {
    let rest = line.trim_start().strip_prefix(name)?.strip_prefix('.')?;
    Some(rest.split('.'))
}
