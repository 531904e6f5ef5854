//! Interactive session plumbing around the heap core
//!
//! The heap itself never parses input or prints anything; this module is
//! the collaborator that feeds it. It reads candidate arrays from a
//! whitespace-delimited text source (one array per line), owns a single
//! built heap per session, and maps user commands onto heap operations.
//!
//! Terminal I/O stays out of this module too, so everything here is
//! testable against in-memory readers; the `interactive` example wires it
//! to stdin/stdout.

use std::io::{self, BufRead};

use crate::dary::DaryHeap;
use crate::error::HeapError;

/// Most arrays honored from one input source
pub const MAX_ARRAYS: usize = 10;

/// Longest line, in bytes, honored from one input source
pub const MAX_LINE_LEN: usize = 30_000;

/// Reads candidate arrays from a whitespace-delimited text source.
///
/// Each line holds one array of integers separated by whitespace. Empty
/// lines are skipped. At most [`MAX_ARRAYS`] arrays are read; lines longer
/// than [`MAX_LINE_LEN`] bytes and tokens that do not parse as integers
/// are reported as [`io::ErrorKind::InvalidData`] errors.
pub fn read_arrays<R: BufRead>(reader: R) -> io::Result<Vec<Vec<i32>>> {
    let mut arrays = Vec::new();
    for line in reader.lines() {
        if arrays.len() == MAX_ARRAYS {
            break;
        }
        let line = line?;
        if line.len() > MAX_LINE_LEN {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line exceeds {} bytes", MAX_LINE_LEN),
            ));
        }
        let mut values = Vec::new();
        for token in line.split_whitespace() {
            let value = token.parse::<i32>().map_err(|e| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid integer {:?}: {}", token, e),
                )
            })?;
            values.push(value);
        }
        if !values.is_empty() {
            arrays.push(values);
        }
    }
    Ok(arrays)
}

/// A heap operation requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Insert a new key
    Insert(i32),
    /// Raise the key at `index` to `key`
    IncreaseKey { index: usize, key: i32 },
    /// Remove and report the maximum key
    ExtractMax,
    /// Remove the key at the given index
    Delete(usize),
}

/// What a successfully applied [`Command`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The key was inserted
    Inserted(i32),
    /// The key at the given index was raised
    Increased { index: usize, key: i32 },
    /// The maximum key was removed
    Extracted(i32),
    /// The key at the given index was removed
    Deleted(i32),
}

/// One interactive session: a single heap built from a chosen array and
/// degree, mutated by a stream of commands.
#[derive(Debug)]
pub struct Session {
    heap: DaryHeap<i32>,
}

impl Session {
    /// Builds the session heap from one of the loaded arrays.
    ///
    /// # Panics
    ///
    /// Panics if `d == 0`, as [`DaryHeap::from_vec`] does.
    pub fn build(values: Vec<i32>, d: usize) -> Self {
        Self {
            heap: DaryHeap::from_vec(d, values),
        }
    }

    /// The heap in array order, for display after each operation
    pub fn elements(&self) -> &[i32] {
        self.heap.as_slice()
    }

    /// Number of keys currently in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The branching factor the session heap was built with
    pub fn degree(&self) -> usize {
        self.heap.degree()
    }

    /// Applies one command to the heap.
    ///
    /// Errors are propagated to the caller so the interaction loop can
    /// report them and continue; the heap is unchanged on error.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, HeapError> {
        match command {
            Command::Insert(key) => {
                self.heap.insert(key)?;
                Ok(Outcome::Inserted(key))
            }
            Command::IncreaseKey { index, key } => {
                self.heap.increase_key(index, key)?;
                Ok(Outcome::Increased { index, key })
            }
            Command::ExtractMax => {
                let max = self.heap.extract_max()?;
                Ok(Outcome::Extracted(max))
            }
            Command::Delete(index) => {
                let removed = self.heap.delete_at(index)?;
                Ok(Outcome::Deleted(removed))
            }
        }
    }
}
