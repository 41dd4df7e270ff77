/**
 * Repetition bounds and the small grammar of their bodies.
 */

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// `to == None` means unbounded, the generator substitutes its configured
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantifier {
    pub from: usize,
    pub to: Option<usize>,
}

impl Quantifier {
    pub fn between(from: usize, to: usize) -> Self {
        Self{ from, to: Some(to) }
    }

    pub fn at_least(from: usize) -> Self {
        Self{ from, to: None }
    }

    pub fn exactly(n: usize) -> Self {
        Self::between(n, n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantifierError {
    #[error("malformed quantifier body")]
    Malformed,

    #[error("invalid 'from': {0}")]
    InvalidFrom(#[source] ParseIntError),

    #[error("invalid 'to': {0}")]
    InvalidTo(#[source] ParseIntError),
}

impl FromStr for Quantifier {
    type Err = QuantifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "*" => return Ok(Quantifier::at_least(0)),
            "+" => return Ok(Quantifier::at_least(1)),
            "?" => return Ok(Quantifier::between(0, 1)),
            _ => {},
        }

        let body = s.strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .ok_or(QuantifierError::Malformed)?;

        match body.split_once(',') {
            None => {
                let n = body.parse().map_err(QuantifierError::InvalidFrom)?;
                Ok(Quantifier::exactly(n))
            },

            Some((from, to)) => {
                let from = from.parse().map_err(QuantifierError::InvalidFrom)?;
                if to.is_empty() {
                    Ok(Quantifier::at_least(from))
                }
                else {
                    let to = to.parse().map_err(QuantifierError::InvalidTo)?;
                    Ok(Quantifier{ from, to: Some(to) })
                }
            },
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (0, None) => f.write_str("*"),
            (1, None) => f.write_str("+"),
            (0, Some(1)) => f.write_str("?"),
            (from, None) => write!(f, "{{{},}}", from),
            (from, Some(to)) if from == to => write!(f, "{{{}}}", from),
            (from, Some(to)) => write!(f, "{{{},{}}}", from, to),
        }
    }
}
