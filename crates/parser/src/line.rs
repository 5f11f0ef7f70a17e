//! Line classification.
//!
//! Every input line falls into exactly one [`Line`] category. Categories are
//! tested in a fixed priority order and the first match wins:
//!
//! 1. `exit()`
//! 2. comment (`#`) or blank
//! 3. `end` while a definition is open
//! 4. any other line while a definition is open (captured verbatim)
//! 5. `name = 42`
//! 6. `def name`
//! 7. the defined function's name

use crate::function::Function;
use crate::patterns::{ASSIGNMENT, EXIT, FUNCTION_END, FUNCTION_START};

/// The category of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// End the session.
    Exit,
    /// Comment or whitespace.
    Ignored,
    /// Close the open function definition.
    FunctionEnd,
    /// Append the line to the open function definition.
    FunctionBody,
    /// Store `value` under `name`.
    Assignment { name: String, value: i64 },
    /// Open a new function definition, replacing any previous one.
    FunctionStart { name: String },
    /// Replay the defined function.
    FunctionCall,
    /// Nothing the language recognizes.
    Unrecognized,
}

/// Classify `line` given the session's current function definition.
pub fn classify(line: &str, function: Option<&Function>) -> Line {
    if EXIT.is_match(line) {
        return Line::Exit;
    }

    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Line::Ignored;
    }

    let capturing = function.is_some_and(Function::is_open);
    if capturing {
        if FUNCTION_END.is_match(line) {
            return Line::FunctionEnd;
        }
        return Line::FunctionBody;
    }

    if let Some(caps) = ASSIGNMENT.captures(line) {
        // Digits that overflow i64 are not a value the language can hold.
        return match caps[2].parse() {
            Ok(value) => Line::Assignment {
                name: caps[1].to_string(),
                value,
            },
            Err(_) => Line::Unrecognized,
        };
    }

    if let Some(caps) = FUNCTION_START.captures(line) {
        return Line::FunctionStart {
            name: caps[1].to_string(),
        };
    }

    if function.is_some_and(|f| f.is_called_by(line)) {
        return Line::FunctionCall;
    }

    Line::Unrecognized
}
