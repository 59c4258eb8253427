use std::str::Chars;

use super::{AstKind, BasicBlock, ParseError, Program};

/// Recursive-descent parser over the raw character stream.
///
/// There is no separate tokenization step; every character is one instruction
/// candidate and anything unrecognized is a comment.
pub struct Parser<'a> {
    chars: Chars<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Parser<'a> {
        Parser {
            chars: source.chars(),
        }
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        self.parse_block(false)
    }

    fn parse_block(&mut self, inside_loop: bool) -> Result<BasicBlock, ParseError> {
        let mut instructions = vec![];

        while let Some(c) = self.chars.next() {
            instructions.push(match c {
                '>' => AstKind::Increment,
                '<' => AstKind::Decrement,
                '+' => AstKind::DerefIncrement,
                '-' => AstKind::DerefDecrement,
                '.' => AstKind::Write,
                ',' => AstKind::Read,
                // nesting is tracked by the call stack, each `[` opens one level
                '[' => AstKind::Loop(self.parse_block(true)?),
                ']' => {
                    if inside_loop {
                        // the loop body we were asked to parse has ended
                        return Ok(BasicBlock { instructions });
                    }
                    return Err(ParseError::UnbalancedLoop {
                        symbol: ']',
                        other: '[',
                    });
                }
                // everything else is a comment
                _ => continue,
            })
        }

        if inside_loop {
            // ran out of characters before the matching `]`
            return Err(ParseError::UnbalancedLoop {
                symbol: '[',
                other: ']',
            });
        }

        Ok(BasicBlock { instructions })
    }
}
