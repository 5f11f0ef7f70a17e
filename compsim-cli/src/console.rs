//! Terminal output sink.

use compsim_common::{Output, OutputSink};

/// Prints every output record to stdout, one per line.
#[derive(Debug)]
pub struct Console {
    quiet: bool,
    ended: bool,
}

impl Console {
    /// A console that drops `> line` echoes when `quiet` is set.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            ended: false,
        }
    }

    /// Whether `exit()` has been seen since the last call.
    pub fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

impl OutputSink for Console {
    fn receive(&mut self, output: Output) {
        match output {
            Output::Echo(_) if self.quiet => return,
            Output::SessionEnded => self.ended = true,
            _ => {}
        }
        println!("{output}");
    }
}
