//! The single user-defined function a session may hold.

/// A named, parameterless function: the raw lines between `def` and `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    body: Vec<String>,
    closed: bool,
}

impl Function {
    /// Open a new, empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
            closed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Captured lines, verbatim and in input order.
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Whether `end` has been seen.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether new lines are still being captured into the body.
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    pub(crate) fn capture(&mut self, line: &str) {
        self.body.push(line.to_string());
    }

    pub(crate) fn close(&mut self) {
        self.closed = true;
    }

    /// Whether `line` calls this function: its name alone on the line,
    /// optionally followed by `()`.
    pub fn is_called_by(&self, line: &str) -> bool {
        let line = line.trim();
        let bare = line.strip_suffix("()").unwrap_or(line);
        bare == self.name
    }
}
