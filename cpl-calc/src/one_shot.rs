//! One-shot command arguments: `<payout> <approve> [trash] [roi]`.

use tracing::debug;

use crate::calculator::{compute, CplResult};
use crate::economics::{LeadEconomics, PartialEconomics};
use crate::error::{CalcError, Result};
use crate::parse::parse_number;

/// Minimum token count for a one-shot calculation.
pub const MIN_ONE_SHOT_ARGS: usize = 3;
const MAX_ONE_SHOT_ARGS: usize = 4;

/// Parses whitespace-separated tokens into calculator input. Tokens past the fourth are ignored.
pub fn parse_one_shot(args: &str) -> Result<LeadEconomics> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    if tokens.len() < MIN_ONE_SHOT_ARGS {
        return Err(CalcError::InsufficientArguments {
            required: MIN_ONE_SHOT_ARGS,
            got: tokens.len(),
        });
    }
    if tokens.len() > MAX_ONE_SHOT_ARGS {
        debug!(ignored = tokens.len() - MAX_ONE_SHOT_ARGS, "Extra one-shot arguments ignored");
    }

    let mut values = Vec::with_capacity(MAX_ONE_SHOT_ARGS);
    for token in tokens.iter().take(MAX_ONE_SHOT_ARGS) {
        let value =
            parse_number(token).ok_or_else(|| CalcError::NonNumericArgument(token.to_string()))?;
        values.push(value);
    }

    PartialEconomics {
        payout: values.first().copied(),
        approve_rate: values.get(1).copied(),
        trash_rate: values.get(2).copied(),
        roi: values.get(3).copied(),
    }
    .finish()
}

/// Parses and computes in one step.
pub fn compute_one_shot(args: &str) -> Result<CplResult> {
    let input = parse_one_shot(args)?;
    compute(&input)
}
