//! Weight and impact argument parsing.
//!
//! Both arguments are comma-separated lists aligned with the criterion
//! columns, e.g. `1,1,2,1` and `+,-,+,+`.

use thiserror::Error;

use crate::domain::topsis::{ImpactVector, TopsisError, WeightVector};

/// Placeholder telling the handler to use criteria embedded in the input.
pub const FROM_INPUT: &str = "-";

/// Errors from argument parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("No {field} given")]
    Empty { field: &'static str },

    #[error("Weight '{token}' at position {position} is not a number")]
    InvalidWeight { position: usize, token: String },

    #[error(transparent)]
    Criteria(#[from] TopsisError),
}

/// Parses a comma-separated weight list.
///
/// Returns `Ok(None)` for [`FROM_INPUT`].
pub fn parse_weights(raw: &str) -> Result<Option<WeightVector>, InputError> {
    let raw = raw.trim();
    if raw == FROM_INPUT {
        return Ok(None);
    }
    if raw.is_empty() {
        return Err(InputError::Empty { field: "weights" });
    }

    let weights = raw
        .split(',')
        .enumerate()
        .map(|(position, token)| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| InputError::InvalidWeight {
                position,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(WeightVector::new(weights)?))
}

/// Parses a comma-separated impact list.
///
/// Returns `Ok(None)` for [`FROM_INPUT`]. A lone `-` can never be a valid
/// impact list because at least two criteria are required.
pub fn parse_impacts(raw: &str) -> Result<Option<ImpactVector>, InputError> {
    let raw = raw.trim();
    if raw == FROM_INPUT {
        return Ok(None);
    }
    if raw.is_empty() {
        return Err(InputError::Empty { field: "impacts" });
    }

    Ok(Some(ImpactVector::from_tokens(raw.split(','))?))
}
