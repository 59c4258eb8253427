use crate::parser;

use super::{Runtime, RuntimeError};

pub struct AstInterpreter {}

impl AstInterpreter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn interpret(
        &mut self,
        runtime: &mut Runtime,
        program: &parser::Program,
    ) -> Result<(), RuntimeError> {
        self.interpret_block(runtime, program)?;
        runtime.finish()
    }

    fn interpret_block(
        &mut self,
        runtime: &mut Runtime,
        block: &parser::BasicBlock,
    ) -> Result<(), RuntimeError> {
        // written this way since the upper-most block (program) doesn't repeat
        for instruction in block.instructions.iter() {
            match instruction {
                parser::AstKind::Increment => runtime.increment_data_pointer()?,
                parser::AstKind::Decrement => runtime.decrement_data_pointer()?,
                parser::AstKind::DerefIncrement => runtime.deref_and_add_value(),
                parser::AstKind::DerefDecrement => runtime.deref_and_sub_value(),
                parser::AstKind::Write => runtime.write()?,
                parser::AstKind::Read => runtime.read()?,
                parser::AstKind::Loop(sub_block) => {
                    // the guard is re-tested before every iteration, including
                    // the first; iterating here instead of recursing keeps the
                    // stack flat no matter how long the loop runs
                    while !runtime.value_is_zero() {
                        self.interpret_block(runtime, sub_block)?;
                    }
                }
            }
        }
        Ok(())
    }
}
