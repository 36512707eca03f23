//! Textual edge-list ingestion.
//!
//! The format is a whitespace-separated token stream: the vertex count, the
//! edge count, then one record per edge holding two endpoint ids and, for the
//! weighted variants, a floating-point weight.  Line breaks carry no meaning.

use std::{io::Read, str::FromStr, str::SplitWhitespace};

use crate::error::{GraphError, ParseError};

/// Parses a graph from anything implementing [`Read`].
pub trait ReadEdgeList: FromStr<Err = ParseError> {
    fn from_reader<R: Read>(mut reader: R) -> Result<Self, ParseError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        input.parse()
    }
}

pub(crate) struct EdgeListReader<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> EdgeListReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_whitespace(),
        }
    }

    pub fn vertex_count(&mut self) -> Result<usize, ParseError> {
        let n = self.integer("vertex count")?;
        usize::try_from(n).map_err(|_| GraphError::NegativeVertexCount(n).into())
    }

    pub fn edge_count(&mut self) -> Result<usize, ParseError> {
        let n = self.integer("edge count")?;
        usize::try_from(n).map_err(|_| GraphError::NegativeEdgeCount(n).into())
    }

    pub fn vertex(&mut self) -> Result<usize, ParseError> {
        let n = self.integer("edge endpoint")?;
        usize::try_from(n).map_err(|_| GraphError::NegativeVertex(n).into())
    }

    pub fn weight(&mut self) -> Result<f64, ParseError> {
        let token = self.token("edge weight")?;
        token.parse().map_err(|_| ParseError::InvalidWeight {
            token: token.to_string(),
        })
    }

    fn integer(&mut self, what: &'static str) -> Result<i64, ParseError> {
        let token = self.token(what)?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            token: token.to_string(),
        })
    }

    fn token(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        self.tokens.next().ok_or(ParseError::MissingToken(what))
    }
}
