//! Command-line interface for the selection and enumeration tools

use crate::algorithm::SelectionTable;
use crate::algorithm::selection::max_non_adjacent_sum;
use crate::io::configuration::{DEFAULT_ENUMERATION_COUNT, MAX_ENUMERATION_COUNT};
use crate::io::error::{Result, invalid_parameter};
use crate::sequence::BinaryCounting;
use clap::Parser;

#[derive(Parser)]
#[command(name = "nonadjacent")]
#[command(
    author,
    version,
    about = "Compute the maximum non-adjacent subset sum of a weight sequence"
)]
/// Command-line arguments for the selection tool
pub struct Cli {
    /// Weight sequence to select over (non-negative integers)
    #[arg(value_name = "WEIGHT", num_args = 0.., allow_negative_numbers = true)]
    pub weights: Vec<i64>,

    /// Also print the selected indices reconstructed from the table
    #[arg(short, long)]
    pub witness: bool,

    /// Enumerate the first N binary counting strings instead of selecting
    #[arg(short, long, value_name = "N", num_args = 0..=1)]
    pub binary: Option<Option<usize>>,
}

/// Dispatches CLI arguments to the selection or enumeration routine
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested operation and print its result
    ///
    /// # Errors
    ///
    /// Returns an error if input validation fails in the selection
    /// algorithm or the enumeration count exceeds the supported maximum
    pub fn run(&self) -> Result<()> {
        match self.cli.binary {
            Some(count) => Self::run_enumeration(count.unwrap_or(DEFAULT_ENUMERATION_COUNT)),
            None => self.run_selection(),
        }
    }

    // Printing results is the tool's purpose
    #[allow(clippy::print_stdout)]
    fn run_enumeration(count: usize) -> Result<()> {
        if count > MAX_ENUMERATION_COUNT {
            return Err(invalid_parameter(
                "binary",
                &count,
                &format!("exceeds maximum enumeration count {MAX_ENUMERATION_COUNT}"),
            ));
        }

        for value in BinaryCounting::new(count) {
            println!("{value}");
        }
        Ok(())
    }

    // Printing results is the tool's purpose
    #[allow(clippy::print_stdout)]
    fn run_selection(&self) -> Result<()> {
        if self.cli.witness {
            let table = SelectionTable::build(&self.cli.weights)?;
            let indices = table
                .witness()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("maximum: {}", table.maximum());
            println!("indices: {indices}");
        } else {
            println!("{}", max_non_adjacent_sum(&self.cli.weights)?);
        }
        Ok(())
    }
}
