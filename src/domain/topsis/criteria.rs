//! Per-criterion inputs: preference direction and weight.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Preference direction of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher raw values are better.
    #[serde(rename = "+", alias = "max", alias = "maximize", alias = "Maximize")]
    Maximize,
    /// Lower raw values are better.
    #[serde(rename = "-", alias = "min", alias = "minimize", alias = "Minimize")]
    Minimize,
}

impl Impact {
    /// Recognizes a direction token.
    ///
    /// Accepts `+`/`-` and, case-insensitively, `max`/`min` and
    /// `maximize`/`minimize`. Surrounding whitespace is ignored.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "+" | "max" | "maximize" => Some(Impact::Maximize),
            "-" | "min" | "minimize" => Some(Impact::Minimize),
            _ => None,
        }
    }

    /// Returns the canonical token.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Maximize => "+",
            Impact::Minimize => "-",
        }
    }

    /// Returns the opposite direction.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Maximize => Impact::Minimize,
            Impact::Minimize => Impact::Maximize,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One impact per criterion, aligned by column index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    /// Parses direction tokens, reporting the first unrecognized one.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, TopsisError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| {
                let token = token.as_ref();
                Impact::from_token(token)
                    .ok_or_else(|| TopsisError::invalid_impact(position, token.trim()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Impact> {
        self.0.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    /// Returns a copy with the impact at `index` reversed.
    pub fn with_flipped(&self, index: usize) -> Self {
        let mut impacts = self.0.clone();
        if let Some(impact) = impacts.get_mut(index) {
            *impact = impact.flipped();
        }
        Self(impacts)
    }
}

/// One non-negative weight per criterion.
///
/// Weights are used as given. They are never rescaled to sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting negative or non-finite entries.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        if let Some((position, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(TopsisError::InvalidWeight { position, value });
        }
        Ok(Self(weights))
    }

    /// Creates equal weights of 1 for `count` criteria.
    pub fn uniform(count: usize) -> Self {
        Self(vec![1.0; count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Returns every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, TopsisError> {
        Self::new(self.0.iter().map(|w| w * factor).collect())
    }
}

impl TryFrom<Vec<f64>> for WeightVector {
    type Error = TopsisError;

    fn try_from(weights: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<WeightVector> for Vec<f64> {
    fn from(weights: WeightVector) -> Self {
        weights.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impact_from_token_accepts_symbols_and_words() {
        assert_eq!(Impact::from_token("+"), Some(Impact::Maximize));
        assert_eq!(Impact::from_token("-"), Some(Impact::Minimize));
        assert_eq!(Impact::from_token(" Max "), Some(Impact::Maximize));
        assert_eq!(Impact::from_token("MINIMIZE"), Some(Impact::Minimize));
    }

    #[test]
    fn impact_from_token_rejects_unknown() {
        assert_eq!(Impact::from_token("*"), None);
        assert_eq!(Impact::from_token(""), None);
        assert_eq!(Impact::from_token("++"), None);
    }

    #[test]
    fn impact_flipped_swaps_direction() {
        assert_eq!(Impact::Maximize.flipped(), Impact::Minimize);
        assert_eq!(Impact::Minimize.flipped(), Impact::Maximize);
    }

    #[test]
    fn impact_vector_from_tokens_reports_position() {
        let err = ImpactVector::from_tokens(["+", "-", "x"]).unwrap_err();
        assert_eq!(err, TopsisError::invalid_impact(2, "x"));
    }

    #[test]
    fn impact_vector_with_flipped_changes_one_entry() {
        let impacts = ImpactVector::from_tokens(["+", "+"]).unwrap();
        let flipped = impacts.with_flipped(1);
        assert_eq!(flipped.as_slice(), &[Impact::Maximize, Impact::Minimize]);
        assert_eq!(impacts.get(1), Some(Impact::Maximize));
    }

    #[test]
    fn weight_vector_rejects_negative() {
        let err = WeightVector::new(vec![1.0, -0.5]).unwrap_err();
        assert_eq!(err, TopsisError::InvalidWeight { position: 1, value: -0.5 });
    }

    #[test]
    fn weight_vector_rejects_non_finite() {
        assert!(WeightVector::new(vec![f64::INFINITY]).is_err());
        assert!(matches!(
            WeightVector::new(vec![1.0, f64::NAN]),
            Err(TopsisError::InvalidWeight { position: 1, .. })
        ));
    }

    #[test]
    fn weight_vector_accepts_zero_and_unnormalized() {
        let weights = WeightVector::new(vec![0.0, 2.0, 7.5]).unwrap();
        assert_eq!(weights.as_slice(), &[0.0, 2.0, 7.5]);
    }

    #[test]
    fn impact_serializes_as_symbol() {
        let json = serde_json::to_string(&ImpactVector::new(vec![
            Impact::Maximize,
            Impact::Minimize,
        ]))
        .unwrap();
        assert_eq!(json, r#"["+","-"]"#);
    }

    #[test]
    fn impact_deserializes_from_aliases() {
        let impacts: ImpactVector = serde_json::from_str(r#"["max", "-", "Minimize"]"#).unwrap();
        assert_eq!(
            impacts.as_slice(),
            &[Impact::Maximize, Impact::Minimize, Impact::Minimize]
        );
    }

    #[test]
    fn weight_vector_deserialization_validates() {
        assert!(serde_json::from_str::<WeightVector>("[1.0, 2.0]").is_ok());
        assert!(serde_json::from_str::<WeightVector>("[1.0, -2.0]").is_err());
    }
}
