use std::{collections::HashMap, ops::Range};

use crate::{
    error::ParseError,
    interpreter::parser::{ParseResult, block_marker},
};

/// The jump table linking every block marker to its counterpart.
///
/// Built once, before any statement runs, by a single stack-based pass over
/// the program lines. Matched open/close pairs are linked in both
/// directions. On top of that, an `END_IF` that is immediately followed by a
/// `START_ELSE` is chained forward to that `START_ELSE`, which lets a false
/// condition jump straight into the alternative branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockMap {
    /// Open index to close index and close index to open index.
    pairs:      HashMap<usize, usize>,
    /// `END_IF` index to the `START_ELSE` index on the following line.
    else_links: HashMap<usize, usize>,
}

/// Whether a line opens or closes a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `START_<kind>`
    Open(&'a str),
    /// `END_<kind>`
    Close(&'a str),
}

impl BlockMap {
    /// Pairs every `START_*` line with its `END_*` line.
    ///
    /// # Parameters
    /// - `lines`: The whole program, one entry per source line.
    ///
    /// # Returns
    /// The block map for the program.
    ///
    /// # Errors
    /// - `ParseError::UnbalancedBlock` for a close marker with no open block.
    /// - `ParseError::MismatchedBlock` when `END_X` closes a `START_Y`.
    /// - `ParseError::UnclosedBlock` when the program ends inside a block.
    ///
    /// # Example
    /// ```
    /// use blockscript::interpreter::blocks::BlockMap;
    ///
    /// let lines = ["START_IF x > 1", "PRINT x", "END_IF", "START_ELSE", "PRINT y", "END_ELSE"];
    /// let blocks = BlockMap::build(&lines).unwrap();
    ///
    /// assert_eq!(blocks.partner(0), Some(2));
    /// assert_eq!(blocks.partner(2), Some(0));
    /// assert_eq!(blocks.else_after(2), Some(3));
    /// assert_eq!(blocks.target(2), Some(3));
    /// assert_eq!(blocks.partner(3), Some(5));
    /// ```
    pub fn build<S: AsRef<str>>(lines: &[S]) -> ParseResult<Self> {
        let mut stack: Vec<(usize, &str)> = Vec::new();
        let mut blocks = Self::default();

        for (index, line) in lines.iter().enumerate() {
            match block_marker(line.as_ref()) {
                Some(Marker::Open(kind)) => stack.push((index, kind)),
                Some(Marker::Close(kind)) => {
                    let Some((open, opened)) = stack.pop() else {
                        return Err(ParseError::UnbalancedBlock { marker: format!("END_{kind}"),
                                                                 line:   index + 1, });
                    };
                    if opened != kind {
                        return Err(ParseError::MismatchedBlock { opened: format!("START_{opened}"),
                                                                 closed: format!("END_{kind}"),
                                                                 line:   index + 1, });
                    }

                    blocks.pairs.insert(open, index);
                    blocks.pairs.insert(index, open);

                    let next_opens_else = lines.get(index + 1)
                                               .and_then(|next| block_marker(next.as_ref()))
                                               == Some(Marker::Open("ELSE"));
                    if kind == "IF" && next_opens_else {
                        blocks.else_links.insert(index, index + 1);
                    }
                },
                None => {},
            }
        }

        if let Some((open, kind)) = stack.pop() {
            return Err(ParseError::UnclosedBlock { marker: format!("START_{kind}"),
                                                   line:   open + 1, });
        }

        tracing::debug!(pairs = blocks.pairs.len() / 2,
                        else_links = blocks.else_links.len(),
                        "built block map");

        Ok(blocks)
    }

    /// Returns the matching marker of an open or close line.
    ///
    /// For every matched pair `partner(partner(x)) == Some(x)`.
    #[must_use]
    pub fn partner(&self, index: usize) -> Option<usize> {
        self.pairs.get(&index).copied()
    }

    /// Returns the `START_ELSE` chained to the `END_IF` at `end_if`.
    #[must_use]
    pub fn else_after(&self, end_if: usize) -> Option<usize> {
        self.else_links.get(&end_if).copied()
    }

    /// Returns the `END_IF` a `START_ELSE` is chained to.
    #[must_use]
    pub fn if_before(&self, start_else: usize) -> Option<usize> {
        self.else_links
            .iter()
            .find_map(|(&end_if, &target)| (target == start_else).then_some(end_if))
    }

    /// Returns the jump target of a marker line.
    ///
    /// This is the partner, except that a chained `END_IF` jumps forward to
    /// its `START_ELSE`.
    #[must_use]
    pub fn target(&self, index: usize) -> Option<usize> {
        self.else_after(index).or_else(|| self.partner(index))
    }

    /// Returns the line range strictly between an open marker and its close
    /// marker.
    #[must_use]
    pub fn body(&self, open: usize) -> Option<Range<usize>> {
        self.partner(open)
            .filter(|&close| close > open)
            .map(|close| open + 1..close)
    }

    /// Returns every `(from, to)` jump, sorted by source line.
    #[must_use]
    pub fn entries(&self) -> Vec<(usize, usize)> {
        let mut entries: Vec<(usize, usize)> =
            self.pairs
                .keys()
                .filter_map(|&index| self.target(index).map(|to| (index, to)))
                .collect();
        entries.sort_unstable();
        entries
    }

    /// Returns the number of matched blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len() / 2
    }

    /// Returns `true` if the program has no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
