//! Motif labels of succession-diagram nodes.
//!
//! A *motif* is a fixed assignment of Boolean values to a subset of network variables,
//! representing one stable configuration. In diagram files it appears as a node label of
//! the form `{ph:0, Farnesol:1, Serum:0}` with values encoded as `0`/`1`.
//!
//! The same motif can be written with its entries in any order, so [`Motif`] stores the
//! assignment in an ordered map: equality, hashing and the [`Motif::canonical_key`]
//! serialization are all independent of the original entry order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[cfg(test)]
mod tests;

/// A single motif: an ordered mapping from variable names to Boolean values.
///
/// Two motifs compare equal iff they assign the same values to the same variables,
/// regardless of the entry order in the original label text.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motif {
    assignment: BTreeMap<String, bool>,
}

/// Why a motif label failed to parse. Converted into the pipeline-level
/// error (with node context attached) by the document reader.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MotifParseError {
    #[error("label is not enclosed in `{{...}}`")]
    MissingBraces,
    #[error("entry `{0}` is not of the form `variable:value`")]
    MalformedEntry(String),
    #[error("variable `{variable}` has value `{value}`, expected `0` or `1`")]
    InvalidValue { variable: String, value: String },
}

/// A minterm request used a variable order that does not match the motif's
/// own variable set.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("variable set mismatch")]
pub struct VariableMismatch {
    pub expected: Vec<String>,
    pub found: Vec<String>,
}

impl Motif {
    /// Parse a `{k1:v1, k2:v2, ...}` label. Values must be `0` or `1`; whitespace
    /// around keys, values and the braces is ignored; `{}` is the empty motif.
    ///
    /// If the same variable appears more than once, the last occurrence wins.
    pub fn parse(text: &str) -> Result<Motif, MotifParseError> {
        let inner = text
            .trim()
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(MotifParseError::MissingBraces)?;

        let mut assignment = BTreeMap::new();
        if inner.trim().is_empty() {
            return Ok(Motif { assignment });
        }

        for entry in inner.split(',') {
            let (key, value) = entry
                .split_once(':')
                .ok_or_else(|| MotifParseError::MalformedEntry(entry.trim().to_string()))?;
            let key = key.trim();
            if key.is_empty() {
                return Err(MotifParseError::MalformedEntry(entry.trim().to_string()));
            }
            let value = match value.trim() {
                "0" => false,
                "1" => true,
                other => {
                    return Err(MotifParseError::InvalidValue {
                        variable: key.to_string(),
                        value: other.to_string(),
                    });
                }
            };
            assignment.insert(key.to_string(), value);
        }

        Ok(Motif { assignment })
    }

    /// The canonical serialization of this motif: keys sorted, `0`/`1` values,
    /// `", "` separators. Two motifs are equal iff their canonical keys are equal.
    pub fn canonical_key(&self) -> String {
        self.to_string()
    }

    /// The variables of this motif in the fixed (sorted) order used for minterms.
    pub fn variables(&self) -> Vec<String> {
        self.assignment.keys().cloned().collect()
    }

    /// The value assigned to `variable`, if present.
    pub fn value(&self, variable: &str) -> Option<bool> {
        self.assignment.get(variable).copied()
    }

    /// Number of variables fixed by this motif.
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Iterate over `(variable, value)` pairs in sorted variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.assignment.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Convert this motif into a minterm: the vector of its values listed in the
    /// order given by `order`.
    ///
    /// Fails when the motif's variable set does not exactly match `order`, because
    /// the resulting vector would be ill-defined.
    pub fn minterm(&self, order: &[String]) -> Result<Vec<bool>, VariableMismatch> {
        let variables = self.variables();
        if variables != order {
            return Err(VariableMismatch {
                expected: order.to_vec(),
                found: variables,
            });
        }
        Ok(self.assignment.values().copied().collect())
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.assignment.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", key, if *value { '1' } else { '0' })?;
        }
        write!(f, "}}")
    }
}

impl FromStr for Motif {
    type Err = MotifParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Motif::parse(s)
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Motif {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Motif {
            assignment: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
