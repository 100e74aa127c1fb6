//! Building a [`Vector`] from text such as `"1, 2, 3"`, `"(1 2 3)"` or `"[1,2,3]"`.

use crate::{InvalidArgument, Result, Vector, VectorError};
use std::str::FromStr;
use tracing::trace;

fn strip_delimiters(s: &str) -> &str {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|rest| rest.strip_suffix(close)) {
            return inner.trim();
        }
    }
    s
}

fn parse_token(index: usize, token: &str) -> std::result::Result<f64, InvalidArgument> {
    token.parse::<f64>().map_err(|_| {
        trace!(index = index, token = token, "rejected non-numeric coordinate");
        InvalidArgument::NotANumber {
            index,
            token: token.to_string(),
        }
    })
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = strip_delimiters(s.trim());
        if inner.is_empty() {
            return Err(InvalidArgument::Empty.into());
        }

        // Commas take precedence; otherwise coordinates are whitespace separated.
        let coordinates = if inner.contains(',') {
            inner
                .split(',')
                .map(str::trim)
                .enumerate()
                .map(|(index, token)| parse_token(index, token))
                .collect::<std::result::Result<Vec<f64>, _>>()?
        } else {
            inner
                .split_whitespace()
                .enumerate()
                .map(|(index, token)| parse_token(index, token))
                .collect::<std::result::Result<Vec<f64>, _>>()?
        };

        Vector::try_from(coordinates)
    }
}
