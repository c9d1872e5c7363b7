//! Indentation nesting: flat lines in, nested blocks out.
//!
//! Each line's leading whitespace width decides where it lands. A wider line
//! opens a nested block. An equal line continues the current block. A
//! narrower line closes blocks until it lands on an open width.
//!
//! Widths are counted in characters. A tab and a space both count as one,
//! so indentation that looks aligned in an editor but mixes the two is
//! grouped by character count, not by appearance.

use std::mem;

use tracing::debug;

use crate::error::{ParseError, ParseResult};

/// One element of a nested structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    /// A line with its indentation stripped.
    Line(String),
    /// A deeper block that was closed by a dedent or end of input.
    Nested(Vec<Block>),
}

impl Block {
    /// Shorthand for building a [`Block::Line`].
    pub fn line(content: impl Into<String>) -> Self {
        Block::Line(content.into())
    }

    /// Re-flatten a structure into `(depth, line)` pairs in document order.
    ///
    /// Top-level lines have depth 0.
    pub fn flatten(blocks: &[Block]) -> Vec<(usize, &str)> {
        let mut out = Vec::new();
        flatten_into(blocks, 0, &mut out);
        out
    }
}

fn flatten_into<'a>(blocks: &'a [Block], depth: usize, out: &mut Vec<(usize, &'a str)>) {
    for block in blocks {
        match block {
            Block::Line(line) => out.push((depth, line.as_str())),
            Block::Nested(inner) => flatten_into(inner, depth + 1, out),
        }
    }
}

/// Split a line into its indentation width and the remaining content.
///
/// Whitespace-only lines are treated as width 0 with empty content.
pub fn split_indent(line: &str) -> (usize, &str) {
    match line.char_indices().find(|(_, c)| !c.is_whitespace()) {
        Some((offset, _)) => (line[..offset].chars().count(), &line[offset..]),
        None => (0, ""),
    }
}

/// Nest the lines of `text` by indentation.
pub fn nest_indentation(text: &str) -> ParseResult<Vec<Block>> {
    nest_lines(text.lines())
}

/// Nest an ordered sequence of lines by indentation.
///
/// Fails with [`ParseError::Indentation`] when a dedent lands strictly
/// between two open widths. No partial structure is returned in that case.
pub fn nest_lines<I, S>(lines: I) -> ParseResult<Vec<Block>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut widths: Vec<usize> = vec![0];
    // Parent levels of `current`, one per open width above the base.
    let mut saved: Vec<Vec<Block>> = Vec::new();
    let mut current: Vec<Block> = Vec::new();
    let mut count = 0;

    for (index, line) in lines.into_iter().enumerate() {
        count += 1;
        let (width, content) = split_indent(line.as_ref());
        let top = open_width(&widths);

        if width > top {
            widths.push(width);
            saved.push(mem::take(&mut current));
            current.push(Block::line(content));
            continue;
        }

        while width < open_width(&widths) {
            widths.pop();
            close_level(&mut saved, &mut current);
        }
        if width != open_width(&widths) {
            return Err(ParseError::Indentation {
                line: index + 1,
                width,
            });
        }
        current.push(Block::line(content));
    }

    while widths.len() > 1 {
        widths.pop();
        close_level(&mut saved, &mut current);
    }

    debug!(lines = count, blocks = current.len(), "nested indentation");
    Ok(current)
}

fn open_width(widths: &[usize]) -> usize {
    widths.last().copied().unwrap_or(0)
}

/// Close `current` and append it to its parent level, which becomes current.
fn close_level(saved: &mut Vec<Vec<Block>>, current: &mut Vec<Block>) {
    let parent = saved.pop().unwrap_or_default();
    let closed = mem::replace(current, parent);
    current.push(Block::Nested(closed));
}
