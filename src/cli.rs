//! Console drivers behind the `mergesort` and `knapsack` binaries.
//!
//! Both take their streams as parameters so they can run against in-memory
//! buffers as well as stdin/stdout.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::dynamic::{knapsack, DEMO_CAPACITY, DEMO_VALUES, DEMO_WEIGHTS};
use crate::error::{Error, Result};
use crate::sort::merge_sort;

/// Whitespace-separated tokens pulled from `input` one line at a time, so
/// interactive prompts are answered as soon as a line arrives.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return token.parse().map_err(|_| {
                    Error::InvalidInput(format!("expected {}, found {:?}", what, token))
                });
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Error::InvalidInput(format!(
                    "unexpected end of input, expected {}",
                    what
                )));
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// Reads a length `n` and then `n` integers from `input`, merge sorts them and
/// writes the result to `output`.
///
/// # Errors
///
/// [`Error::InvalidInput`] if a token is not an integer (or the length is
/// negative) or the input ends early; [`Error::Io`] on read/write failure.
///
/// # Examples
///
/// ```
/// use algo_kernels::cli::run_merge_sort;
///
/// let mut out = Vec::new();
/// run_merge_sort("5\n3 1 4 1 5\n".as_bytes(), &mut out).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("sorted elements\n1 1 3 4 5 \n"));
/// ```
pub fn run_merge_sort<R: BufRead, W: Write>(input: R, mut output: W) -> Result<()> {
    let mut tokens = Tokens::new(input);

    writeln!(output, "enter string length")?;
    output.flush()?;
    let n: usize = tokens.next("array length")?;

    writeln!(output, "enter {} numbers", n)?;
    output.flush()?;
    let mut arr: Vec<i64> = Vec::new();
    for i in 1..=n {
        arr.push(tokens.next(&format!("number {} of {}", i, n))?);
    }

    merge_sort(&mut arr);

    writeln!(output, "\nsorted elements")?;
    for value in &arr {
        write!(output, "{} ", value)?;
    }
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

/// Solves the demo knapsack instance and prints the optimal value.
///
/// ```
/// use algo_kernels::cli::run_knapsack;
///
/// let mut out = Vec::new();
/// run_knapsack(&mut out).unwrap();
/// assert_eq!(out, b"Maximum value in Knapsack = 37\n");
/// ```
pub fn run_knapsack<W: Write>(mut output: W) -> Result<()> {
    let best = knapsack(DEMO_WEIGHTS.len(), DEMO_CAPACITY, &DEMO_WEIGHTS, &DEMO_VALUES)?;
    writeln!(output, "Maximum value in Knapsack = {}", best)?;
    output.flush()?;
    Ok(())
}
