use thiserror::Error;

pub mod parser;

#[derive(Debug, Clone, PartialEq)]
pub enum AstKind {
    // `>`: Increment the `data pointer` by one
    Increment,
    // `<`: Decrement the `data pointer` by one
    Decrement,

    // `+`: Increment the cell at the `data pointer` by one
    DerefIncrement,
    // `-`: Decrement the cell at the `data pointer` by one
    DerefDecrement,

    // `.`: Write the cell at the `data pointer` to the `output device`
    Write,
    // `,`: Read one line from the `input device` and write its first character to the `data pointer`
    Read,

    // `[` .. `]`: Run the body while the cell at the `data pointer` is non-zero
    Loop(BasicBlock),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicBlock {
    pub instructions: Vec<AstKind>,
}

pub type Program = BasicBlock;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Can't find other symbol ({other:}) for {symbol:}")]
    UnbalancedLoop { symbol: char, other: char },
}
