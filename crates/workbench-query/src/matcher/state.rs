//! Position tracking over one grammar argument list.
//!
//! [`Matcher`] consumes query arguments left to right and moves a cursor over
//! the grammar list. Each query argument triggers exactly one transition,
//! chosen by the kind of the grammar node under the cursor. Blocks are matched
//! by a nested `Matcher` over the block's children.

use tracing::{debug, trace};
use workbench_core::CommandArg;

/// Argument names whose value is the count of the arguments that follow.
pub const COUNT_ARG_NAMES: [&str; 2] = ["nargs", "count"];

/// One grammar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot<'g> {
    Arg(&'g CommandArg),
    /// A block keyword the user typed that is not the block's first child.
    /// Matches one query argument like a pure token.
    ImpliedToken,
}

impl<'g> Slot<'g> {
    pub fn arg(self) -> Option<&'g CommandArg> {
        match self {
            Slot::Arg(arg) => Some(arg),
            Slot::ImpliedToken => None,
        }
    }

    pub fn is_optional(self) -> bool {
        self.arg().is_some_and(|arg| arg.optional)
    }

    fn is_pure_token(self) -> bool {
        self.arg().is_none_or(CommandArg::is_pure_token)
    }
}

/// Where matching stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPoint<'g> {
    /// Grammar list the cursor walked, including tiled repeats and implied tokens.
    pub rest: Vec<Slot<'g>>,
    /// Grammar position after the last query argument.
    pub stop_index: usize,
    /// Grammar positions filled by query arguments.
    pub entered: usize,
    /// A value is still owed to a keyword or count.
    pub is_blocked: bool,
    /// Block the stop point lies in, when matching ended inside one.
    pub parent: Option<&'g CommandArg>,
}

impl<'g> StopPoint<'g> {
    pub fn stop_slot(&self) -> Option<Slot<'g>> {
        self.rest.get(self.stop_index).copied()
    }

    pub fn stop_arg(&self) -> Option<&'g CommandArg> {
        self.stop_slot().and_then(Slot::arg)
    }

    pub fn prev_slot(&self) -> Option<Slot<'g>> {
        self.stop_index
            .checked_sub(1)
            .and_then(|index| self.rest.get(index).copied())
    }
}

/// Window of query positions owned by a repeated plain argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RepeatWindow {
    start: usize,
    count: usize,
}

/// Matching state over one grammar list.
#[derive(Debug)]
pub struct Matcher<'q, 'g> {
    query: &'q [String],
    grammar: Vec<Slot<'g>>,
    position: usize,
    entered: usize,
    blocked: bool,
    window: Option<RepeatWindow>,
}

/// Outcome of one transition.
enum Step<'g> {
    Next,
    /// The remaining query was consumed by a nested block.
    Consumed,
    /// Matching ends inside a nested block.
    Stop(StopPoint<'g>),
}

impl<'q, 'g> Matcher<'q, 'g> {
    pub fn new(query: &'q [String], grammar: Vec<Slot<'g>>) -> Self {
        Self {
            query,
            grammar,
            position: 0,
            entered: 0,
            blocked: false,
            window: None,
        }
    }

    /// Matcher over a plain argument list.
    pub fn over(query: &'q [String], args: &'g [CommandArg]) -> Self {
        Self::new(query, args.iter().map(Slot::Arg).collect())
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Consume all query arguments.
    pub fn run(mut self) -> StopPoint<'g> {
        for index in 0..self.query.len() {
            match self.step(index) {
                Step::Next => {}
                Step::Consumed => break,
                Step::Stop(stop) => {
                    debug!(
                        stop_index = stop.stop_index,
                        blocked = stop.is_blocked,
                        parent = stop.parent.map(|p| p.name.as_str()),
                        "matching stopped inside block"
                    );
                    return stop;
                }
            }
        }

        debug!(
            stop_index = self.position,
            entered = self.entered,
            blocked = self.blocked,
            "matching finished"
        );
        self.finish()
    }

    fn finish(self) -> StopPoint<'g> {
        StopPoint {
            rest: self.grammar,
            stop_index: self.position,
            entered: self.entered,
            is_blocked: self.blocked,
            parent: None,
        }
    }

    /// Apply the transition for query argument `index`.
    fn step(&mut self, index: usize) -> Step<'g> {
        let word = self.query[index].as_str();
        let slot = self.grammar.get(self.position).copied();
        let current = slot.and_then(Slot::arg);
        trace!(
            word,
            position = self.position,
            arg = current.map(|a| a.name.as_str()),
            "step"
        );

        if slot.is_some_and(Slot::is_pure_token) {
            self.skip();
            return Step::Next;
        }

        let Some(current) = current else {
            self.advance();
            self.blocked = false;
            return Step::Next;
        };

        if !self.blocked && current.optional && is_omitted(current, word) {
            trace!(arg = current.name.as_str(), "optional argument omitted");
            self.advance();
            self.skip();
            return Step::Next;
        }

        if current.is_block() {
            return self.enter_block(current, index);
        }

        if current.has_token(word) {
            self.blocked = true;
            return Step::Next;
        }

        if COUNT_ARG_NAMES.contains(&current.name.as_str()) {
            self.advance();
            if parse_count(Some(word)) == 0 {
                self.skip();
            } else {
                self.blocked = true;
            }
            return Step::Next;
        }

        if current.is_one_of() && current.optional {
            if !current.has_alternative(word) {
                self.advance();
            }
            self.skip();
            return Step::Next;
        }

        if current.multiple {
            self.repeat(index);
            return Step::Next;
        }

        self.advance();
        self.blocked = false;
        Step::Next
    }

    /// Match the rest of the query against a block's children.
    fn enter_block(&mut self, block: &'g CommandArg, index: usize) -> Step<'g> {
        let repeats = parse_count(index.checked_sub(1).map(|i| self.query[i].as_str()));
        let word = self.query[index].as_str();

        let mut children: Vec<Slot<'g>> = if block.multiple && repeats > 0 {
            (0..repeats)
                .flat_map(|_| block.arguments.iter().map(Slot::Arg))
                .collect()
        } else {
            block.arguments.iter().map(Slot::Arg).collect()
        };

        let starts_with_word = children
            .first()
            .and_then(|slot| slot.arg())
            .is_some_and(|first| first.has_token(word));
        if block.token.is_some() && !starts_with_word {
            children.insert(0, Slot::ImpliedToken);
        }

        trace!(block = block.name.as_str(), repeats, children = children.len(), "enter block");
        let inner = Matcher::new(&self.query[index..], children).run();

        if block.multiple && repeats > 0 && inner.entered >= repeats {
            self.skip();
            return Step::Consumed;
        }

        if inner.is_blocked || inner.stop_slot().is_some() {
            return Step::Stop(StopPoint {
                parent: Some(block),
                ..inner
            });
        }

        self.skip();
        Step::Consumed
    }

    /// A repeated plain argument owns the count read before its first value.
    fn repeat(&mut self, index: usize) {
        let window = *self.window.get_or_insert_with(|| RepeatWindow {
            start: index.saturating_sub(1),
            count: parse_count(index.checked_sub(1).map(|i| self.query[i].as_str())),
        });

        if index - window.start >= window.count {
            self.skip();
            self.window = None;
        } else {
            self.blocked = true;
        }
    }

    /// Move to the next grammar position, counting the current one as filled.
    fn advance(&mut self) {
        self.position += 1;
        self.entered += 1;
    }

    /// Move to the next grammar position without counting it.
    fn skip(&mut self) {
        self.position += 1;
        self.blocked = false;
    }
}

/// An optional argument is omitted when the word is not its keyword
/// (or, for a keyword-less one-of, none of its alternatives).
fn is_omitted(arg: &CommandArg, word: &str) -> bool {
    match &arg.token {
        Some(_) => !arg.has_token(word),
        None => arg.is_one_of() && !arg.has_alternative(word),
    }
}

/// Numeric value of a count argument. Anything unparsable counts as zero.
pub fn parse_count(word: Option<&str>) -> usize {
    word.and_then(|w| w.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
