//! Cardinality strings.
//!
//! Cardinalities arrive as free text on attributes and relationship ends:
//! `"1"`, `"0..1"`, `"1..*"`, `"0..n"` or a lone `"*"`. This module parses
//! them into a lower bound and an optionally unbounded upper bound.

use std::{fmt, str::FromStr};

use thiserror::Error;
use winnow::{
    Parser as _,
    combinator::{alt, separated_pair},
    error::{ContextError, ModalResult},
    token::{one_of, take_while},
};

/// Upper bound of a [`Cardinality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Exact(u32),
    Unbounded,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "{value}"),
            Self::Unbounded => write!(f, "*"),
        }
    }
}

/// A parsed `lower..upper` cardinality.
///
/// # Examples
///
/// ```
/// use glossa_resolver::cardinality::{Bound, Cardinality};
///
/// let many: Cardinality = "1..*".parse().unwrap();
/// assert_eq!(many.lower(), 1);
/// assert_eq!(many.upper(), Bound::Unbounded);
///
/// let one: Cardinality = "1".parse().unwrap();
/// assert_eq!(one.upper(), Bound::Exact(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    lower: u32,
    upper: Bound,
}

impl Cardinality {
    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> Bound {
        self.upper
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Bound::Exact(upper) if upper == self.lower => write!(f, "{upper}"),
            upper => write!(f, "{}..{}", self.lower, upper),
        }
    }
}

/// Why a cardinality string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardinalityError {
    #[error("`{0}` is not a cardinality")]
    Syntax(String),

    #[error("lower bound {lower} exceeds upper bound {upper}")]
    Inverted { lower: u32, upper: u32 },
}

impl FromStr for Cardinality {
    type Err = CardinalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = cardinality
            .parse(s.trim())
            .map_err(|_| CardinalityError::Syntax(s.to_string()))?;

        if let Bound::Exact(upper) = upper {
            if lower > upper {
                return Err(CardinalityError::Inverted { lower, upper });
            }
        }

        Ok(Self { lower, upper })
    }
}

type IResult<O> = ModalResult<O, ContextError>;

fn number(input: &mut &str) -> IResult<u32> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .try_map(str::parse::<u32>)
        .parse_next(input)
}

fn unbounded(input: &mut &str) -> IResult<Bound> {
    one_of(['*', 'n', 'N'])
        .value(Bound::Unbounded)
        .parse_next(input)
}

fn upper_bound(input: &mut &str) -> IResult<Bound> {
    alt((number.map(Bound::Exact), unbounded)).parse_next(input)
}

fn range(input: &mut &str) -> IResult<(u32, Bound)> {
    separated_pair(number, "..", upper_bound).parse_next(input)
}

fn single(input: &mut &str) -> IResult<(u32, Bound)> {
    alt((
        number.map(|value| (value, Bound::Exact(value))),
        unbounded.map(|bound| (0, bound)),
    ))
    .parse_next(input)
}

fn cardinality(input: &mut &str) -> IResult<(u32, Bound)> {
    alt((range, single)).parse_next(input)
}
