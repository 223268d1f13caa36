//! Transition trace recording.
//!
//! The scanner is generic over a [`TraceSink`]. [`NoTrace`] discards every
//! transition and compiles to nothing; [`TraceRecorder`] appends them in scan
//! order. Token kinds, lexemes and lines are identical under either sink.

use crate::State;

/// One automaton step: `from --character--> to`.
///
/// `character` is the consumed character for consuming steps, or the
/// lookahead for finalize steps (`None` when the lookahead was end of input).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub from: State,
    pub character: Option<char>,
    pub to: State,
}

impl Transition {
    pub const fn new(from: State, character: Option<char>, to: State) -> Self {
        Self {
            from,
            character,
            to,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.character {
            Some(c) => write!(f, "{} --'{}'--> {}", self.from, c.escape_debug(), self.to),
            None => write!(f, "{} --EOF--> {}", self.from, self.to),
        }
    }
}

/// Observer of the transitions taken while scanning one token.
pub trait TraceSink: Default {
    /// `false` when [`record`](Self::record) discards its input. The scanner
    /// uses this to take bulk fast paths that skip per-character stepping.
    const RECORDS: bool;

    fn record(&mut self, transition: Transition);

    /// Consume the sink, yielding the recorded transitions in scan order.
    fn finish(self) -> Vec<Transition>;
}

/// Sink that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    const RECORDS: bool = false;

    #[inline]
    fn record(&mut self, _transition: Transition) {}

    #[inline]
    fn finish(self) -> Vec<Transition> {
        Vec::new()
    }
}

/// Sink that appends every transition.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    transitions: Vec<Transition>,
}

impl TraceSink for TraceRecorder {
    const RECORDS: bool = true;

    #[inline]
    fn record(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    fn finish(self) -> Vec<Transition> {
        self.transitions
    }
}
