//! Function runner
//!
//! Reads the host's input query, evaluates the selected discount function and
//! writes the decision back.

use std::io::{Read, Write};

use thiserror::Error;
use tracing::{debug, instrument};

use tally::{
    cart::Input,
    discounts::Decision,
    functions::{DiscountFunction, OrderDiscount, ProductVolumeDiscount, ShippingDiscount},
    output::{self, OutputError},
};

/// Which discount function to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum FunctionKind {
    /// Percentage off the order subtotal.
    Order,

    /// Percentage off every Nth product variant line.
    Product,

    /// Percentage off shipping.
    Shipping,
}

impl FunctionKind {
    /// Evaluate this function against the input.
    pub fn run(self, input: &Input) -> Decision {
        match self {
            FunctionKind::Order => OrderDiscount::run(input),
            FunctionKind::Product => ProductVolumeDiscount::run(input),
            FunctionKind::Shipping => ShippingDiscount::run(input),
        }
    }
}

/// Errors that abort a function run. These are host failures; configuration
/// problems never reach here.
#[derive(Debug, Error)]
pub enum FunctionError {
    /// The input could not be read.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// The input did not match the expected query shape.
    #[error("input does not match the function's input query: {0}")]
    Input(#[source] serde_json::Error),

    /// The decision could not be written.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Run `kind` over the input read from `reader`, writing the decision to `writer`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, or the decision cannot be written.
#[instrument(skip(reader, writer))]
pub fn run<R: Read, W: Write>(
    kind: FunctionKind,
    reader: R,
    writer: &mut W,
    pretty: bool,
) -> Result<Decision, FunctionError> {
    let input = read_input(reader)?;
    let decision = kind.run(&input);

    debug!(
        empty = decision.is_empty(),
        discounts = decision.discounts().len(),
        strategy = ?decision.strategy(),
        "evaluated discount function"
    );

    output::write(writer, &decision, pretty)?;

    Ok(decision)
}

fn read_input<R: Read>(mut reader: R) -> Result<Input, FunctionError> {
    let mut buffer = Vec::new();

    reader
        .read_to_end(&mut buffer)
        .map_err(FunctionError::Read)?;

    serde_json::from_slice(&buffer).map_err(FunctionError::Input)
}
