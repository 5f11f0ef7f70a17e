//! Session state and line dispatch.

use std::collections::HashMap;

use compsim_common::{Output, OutputSink};
use compsim_vm::{Computer, RuntimeError};

use crate::function::Function;
use crate::line::{classify, Line};
use crate::method::{method_tokens, MethodCall};
use crate::patterns::CONSTRUCTOR;

/// The computer a function body constructed, and the name it answers to.
#[derive(Debug, Clone)]
struct NamedComputer {
    name: String,
    computer: Computer,
}

/// One interactive session of the command language.
///
/// Owns everything a session accumulates: variables, the single function
/// definition, and the single named computer. All of it is dropped at once
/// by `exit()` or [`Session::reset`].
///
/// Nothing here returns an error. Engine failures are reported to the sink
/// as [`Output::Failure`]; lines that cannot be understood do nothing.
#[derive(Debug)]
pub struct Session<S: OutputSink> {
    sink: S,
    variables: HashMap<String, i64>,
    function: Option<Function>,
    computer: Option<NamedComputer>,
}

impl<S: OutputSink> Session<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            variables: HashMap::new(),
            function: None,
            computer: None,
        }
    }

    /// Process one line to completion, including any program it runs.
    pub fn read_line(&mut self, line: &str) {
        match classify(line, self.function.as_ref()) {
            Line::Exit => {
                self.reset();
                self.sink.receive(Output::SessionEnded);
            }
            Line::Ignored | Line::Unrecognized => {}
            Line::FunctionEnd => {
                if let Some(function) = self.function.as_mut() {
                    function.close();
                }
            }
            Line::FunctionBody => {
                if let Some(function) = self.function.as_mut() {
                    function.capture(line);
                }
            }
            Line::Assignment { name, value } => {
                self.variables.insert(name, value);
            }
            Line::FunctionStart { name } => {
                self.function = Some(Function::new(name));
            }
            Line::FunctionCall => self.call_function(),
        }
    }

    /// Feed a whole script, echoing each line before processing it.
    ///
    /// Lines are split on `\n` with one trailing `\r` removed, so a trailing
    /// newline yields a final empty line.
    pub fn read_source(&mut self, text: &str) {
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.sink.receive(Output::Echo(line.to_string()));
            self.read_line(line);
        }
    }

    /// Drop all variables, the function definition and the computer.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.function = None;
        self.computer = None;
    }

    pub fn variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    pub fn function(&self) -> Option<&Function> {
        self.function.as_ref()
    }

    /// Whether lines are currently being captured into a function body.
    pub fn is_capturing(&self) -> bool {
        self.function.as_ref().is_some_and(Function::is_open)
    }

    pub fn computer(&self) -> Option<&Computer> {
        self.computer.as_ref().map(|named| &named.computer)
    }

    pub fn computer_name(&self) -> Option<&str> {
        self.computer.as_ref().map(|named| named.name.as_str())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replay the captured body of the defined function.
    fn call_function(&mut self) {
        // Taken out for the replay so body lines can be read while the
        // rest of the session is mutated.
        let Some(function) = self.function.take() else {
            return;
        };
        for line in function.body() {
            self.replay_line(line);
        }
        self.function = Some(function);
    }

    fn replay_line(&mut self, line: &str) {
        if let Some(caps) = CONSTRUCTOR.captures(line) {
            // A size too large for i64 constructs nothing.
            if let Ok(size) = caps[2].parse() {
                self.computer = Some(NamedComputer {
                    name: caps[1].to_string(),
                    computer: Computer::new(size),
                });
            }
            return;
        }

        let Some(named) = self.computer.as_ref() else {
            return;
        };
        let Some(tokens) = method_tokens(line, &named.name) else {
            return;
        };
        for token in tokens {
            if let Some(call) = MethodCall::parse(token) {
                self.dispatch(call);
            }
        }
    }

    /// Run one method against the computer. Arguments naming unknown
    /// variables make the call a no-op.
    fn dispatch(&mut self, call: MethodCall) {
        let Some(named) = self.computer.as_mut() else {
            return;
        };
        let computer = &mut named.computer;

        let result: Result<(), RuntimeError> = match call {
            MethodCall::SetAddress(operand) => {
                let Some(address) = operand.resolve(&self.variables) else {
                    return;
                };
                computer.set_address(address).map(|_| ())
            }
            MethodCall::Insert { mnemonic, operand } => {
                let argument = match operand {
                    Some(operand) => match operand.resolve(&self.variables) {
                        Some(value) => Some(value),
                        None => return,
                    },
                    None => None,
                };
                computer.insert(&mnemonic, argument)
            }
            MethodCall::Execute => computer.execute(&mut self.sink).map(|_| ()),
        };

        if let Err(e) = result {
            self.sink.receive(Output::Failure(e.to_string()));
        }
    }
}

impl<S: OutputSink + Default> Default for Session<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
