pub mod ast_interpreter;

use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("IO Error")]
    StreamIO(
        #[from]
        std::io::Error,
    ),

    #[error("Data pointer ({pointer:}) can't move out of bounds (tape length {len:})")]
    PointerOutOfBounds { pointer: usize, len: usize },
}

pub struct Runtime {
    /// Pointer into the tape
    data_pointer: usize,

    /// Our statically allocated tape
    ///
    /// Cells are i64 rather than the traditional byte: values run freely
    /// negative or past 255 with no wraparound at the 8-bit boundary.
    tape: Vec<i64>,

    in_stream: Box<dyn BufRead>,
    out_stream: Box<dyn Write>,

    /// Last character written, so the final newline isn't doubled up
    last_output: Option<char>,
}

impl Runtime {
    pub fn new(tape_size: usize, in_stream: Box<dyn BufRead>, out_stream: Box<dyn Write>) -> Self {
        Self {
            data_pointer: 0,
            tape: vec![0; tape_size],
            in_stream,
            out_stream,
            last_output: None,
        }
    }

    /// Read one line from the stream and write its first character's code
    /// point to the data pointer; an empty line (or exhausted stream) writes 0
    pub fn read(&mut self) -> Result<(), RuntimeError> {
        let mut line = String::new();
        self.in_stream.read_line(&mut line)?;
        let value = line
            .trim_end_matches(['\r', '\n'])
            .chars()
            .next()
            .map_or(0, |c| c as i64);
        self.tape[self.data_pointer] = value;
        Ok(())
    }

    /// Write the cell at the data pointer to the stream as a character
    pub fn write(&mut self) -> Result<(), RuntimeError> {
        // cells that don't name a unicode scalar (negative, surrogate, too
        // large) fall back to U+FFFD rather than aborting the run
        let c = u32::try_from(self.tape[self.data_pointer])
            .ok()
            .and_then(char::from_u32)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        write!(self.out_stream, "{c}")?;
        self.last_output = Some(c);
        Ok(())
    }

    pub fn deref_and_add_value(&mut self) {
        self.tape[self.data_pointer] += 1;
    }

    pub fn deref_and_sub_value(&mut self) {
        self.tape[self.data_pointer] -= 1;
    }

    pub fn increment_data_pointer(&mut self) -> Result<(), RuntimeError> {
        // refuse to move past the last valid index
        if self.data_pointer + 1 >= self.tape.len() {
            return Err(RuntimeError::PointerOutOfBounds {
                pointer: self.data_pointer,
                len: self.tape.len(),
            });
        }
        self.data_pointer += 1;
        Ok(())
    }

    pub fn decrement_data_pointer(&mut self) -> Result<(), RuntimeError> {
        if self.data_pointer == 0 {
            return Err(RuntimeError::PointerOutOfBounds {
                pointer: self.data_pointer,
                len: self.tape.len(),
            });
        }
        self.data_pointer -= 1;
        Ok(())
    }

    /// is the value at the data pointer zero?
    pub fn value_is_zero(&self) -> bool {
        self.tape[self.data_pointer] == 0
    }

    /// Ensure a trailing newline on the output and flush it; called once
    /// after the program terminates normally
    pub fn finish(&mut self) -> Result<(), RuntimeError> {
        if self.last_output.is_some_and(|c| c != '\n') {
            writeln!(self.out_stream)?;
        }
        self.out_stream.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn data_pointer(&self) -> usize {
        self.data_pointer
    }

    #[cfg(test)]
    pub(crate) fn cell(&self, index: usize) -> i64 {
        self.tape[index]
    }
}


#[cfg(test)]
mod tests {
    use super::test_io::SharedBuffer;
    use super::*;

    fn runtime(tape_size: usize, input: &str) -> (Runtime, SharedBuffer) {
        let output = SharedBuffer::default();
        let runtime = Runtime::new(
            tape_size,
            Box::new(std::io::Cursor::new(input.as_bytes().to_vec())),
            Box::new(output.clone()),
        );
        (runtime, output)
    }

    #[test]
    fn pointer_moves_by_one() {
        let (mut runtime, _) = runtime(3, "");

        runtime.increment_data_pointer().expect("move failed");
        assert_eq!(runtime.data_pointer(), 1);
        runtime.increment_data_pointer().expect("move failed");
        assert_eq!(runtime.data_pointer(), 2);
        runtime.decrement_data_pointer().expect("move failed");
        assert_eq!(runtime.data_pointer(), 1);
    }

    #[test]
    fn decrement_at_zero_fails() {
        let (mut runtime, _) = runtime(3, "");

        assert!(matches!(
            runtime.decrement_data_pointer(),
            Err(RuntimeError::PointerOutOfBounds { pointer: 0, len: 3 }),
        ));
    }

    #[test]
    fn increment_at_last_cell_fails() {
        let (mut runtime, _) = runtime(2, "");

        runtime.increment_data_pointer().expect("move failed");
        assert!(matches!(
            runtime.increment_data_pointer(),
            Err(RuntimeError::PointerOutOfBounds { pointer: 1, len: 2 }),
        ));
    }

    #[test]
    fn cells_are_not_bytes() {
        let (mut runtime, _) = runtime(1, "");

        runtime.deref_and_sub_value();
        assert_eq!(runtime.cell(0), -1);

        for _ in 0..300 {
            runtime.deref_and_add_value();
        }
        assert_eq!(runtime.cell(0), 299);
    }

    #[test]
    fn read_takes_first_character_of_line() {
        let (mut runtime, _) = runtime(1, "abc\nxyz\n");

        runtime.read().expect("read failed");
        assert_eq!(runtime.cell(0), 'a' as i64);

        // the rest of the first line is gone, the next read sees the next line
        runtime.read().expect("read failed");
        assert_eq!(runtime.cell(0), 'x' as i64);
    }

    #[test]
    fn read_empty_line_stores_zero() {
        let (mut runtime, _) = runtime(1, "\n");

        runtime.deref_and_add_value();
        runtime.read().expect("read failed");
        assert_eq!(runtime.cell(0), 0);
    }

    #[test]
    fn write_emits_the_code_point() {
        let (mut runtime, output) = runtime(1, "");

        for _ in 0..65 {
            runtime.deref_and_add_value();
        }
        runtime.write().expect("write failed");
        assert_eq!(output.contents(), "A");
    }

    #[test]
    fn write_of_invalid_scalar_is_replacement() {
        let (mut runtime, output) = runtime(1, "");

        runtime.deref_and_sub_value();
        runtime.write().expect("write failed");
        assert_eq!(output.contents(), "\u{fffd}");
    }

    #[test]
    fn finish_ensures_single_trailing_newline() {
        let (mut runtime, output) = runtime(1, "");

        // no output at all stays empty
        runtime.finish().expect("finish failed");
        assert_eq!(output.contents(), "");

        for _ in 0..65 {
            runtime.deref_and_add_value();
        }
        runtime.write().expect("write failed");
        runtime.finish().expect("finish failed");
        assert_eq!(output.contents(), "A\n");
    }
}
