//! Parsing of `U,V,W` edge arguments.

use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;

/// An edge supplied on the command line as `source,target,weight`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Errors raised while parsing an [`EdgeSpec`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EdgeSpecError {
    /// The argument did not split into exactly three comma-separated fields.
    #[error("expected `source,target,weight`, got {fields} field(s)")]
    FieldCount {
        /// Number of fields found.
        fields: usize,
    },
    /// An endpoint was not a non-negative integer.
    #[error("invalid vertex `{raw}`: {source}")]
    InvalidVertex {
        /// Offending field.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The weight was not a floating-point number.
    #[error("invalid weight `{raw}`: {source}")]
    InvalidWeight {
        /// Offending field.
        raw: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

impl FromStr for EdgeSpec {
    type Err = EdgeSpecError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
        let [source, target, weight] = fields.as_slice() else {
            return Err(EdgeSpecError::FieldCount {
                fields: fields.len(),
            });
        };
        Ok(Self {
            source: parse_vertex(source)?,
            target: parse_vertex(target)?,
            weight: weight
                .parse()
                .map_err(|source| EdgeSpecError::InvalidWeight {
                    raw: (*weight).to_owned(),
                    source,
                })?,
        })
    }
}

fn parse_vertex(raw: &str) -> Result<usize, EdgeSpecError> {
    raw.parse().map_err(|source| EdgeSpecError::InvalidVertex {
        raw: raw.to_owned(),
        source,
    })
}
