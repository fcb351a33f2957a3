//! Token parsing for the plain-text filtration format
//!
//! A filtration is a stream of whitespace-separated tokens. Each simplex is
//! `value dimension v_0 ... v_dimension`; line breaks carry no meaning.

use alloc::vec::Vec;
use core::iter::Fuse;
use core::str::SplitAsciiWhitespace;

use crate::error::{MalformedKind, MalformedSimplex, Result};
use crate::simplex::{Simplex, Vertex};

/// Upper bound on the vertex buffer reserved up front
const MAX_PREALLOCATED_VERTICES: usize = 16;

/// Iterator turning a token stream into simplices
///
/// Stops after the first malformed record.
pub struct SimplexTokens<'a, I: Iterator<Item = &'a str>> {
    tokens: Fuse<I>,
    record: usize,
    failed: bool,
}

impl<'a> SimplexTokens<'a, SplitAsciiWhitespace<'a>> {
    /// Tokenize `text` on ASCII whitespace
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.split_ascii_whitespace())
    }
}

impl<'a, I: Iterator<Item = &'a str>> SimplexTokens<'a, I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens: tokens.fuse(),
            record: 0,
            failed: false,
        }
    }

    fn malformed(&mut self, kind: MalformedKind) -> MalformedSimplex {
        self.failed = true;
        MalformedSimplex {
            simplex: self.record,
            kind,
        }
    }

    fn parse_record(&mut self, value_token: &str) -> core::result::Result<Simplex, MalformedSimplex> {
        let value: f64 = value_token
            .parse()
            .map_err(|_| self.malformed(MalformedKind::InvalidValue))?;

        let dimension: usize = match self.tokens.next().map(str::parse::<usize>) {
            Some(Ok(d)) => d,
            _ => return Err(self.malformed(MalformedKind::InvalidDimension)),
        };
        let expected = dimension
            .checked_add(1)
            .ok_or_else(|| self.malformed(MalformedKind::InvalidDimension))?;

        let mut vertices: Vec<Vertex> =
            Vec::with_capacity(expected.min(MAX_PREALLOCATED_VERTICES));
        while vertices.len() < expected {
            let Some(token) = self.tokens.next() else {
                let found = vertices.len();
                return Err(self.malformed(MalformedKind::MissingVertices { expected, found }));
            };
            let vertex: Vertex = token
                .parse()
                .map_err(|_| self.malformed(MalformedKind::InvalidVertex))?;
            vertices.push(vertex);
        }

        let simplex = Simplex::from_parts(value, dimension, vertices);
        if simplex.vertices().windows(2).any(|w| w[0] == w[1]) {
            return Err(self.malformed(MalformedKind::RepeatedVertex));
        }
        Ok(simplex)
    }
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for SimplexTokens<'a, I> {
    type Item = core::result::Result<Simplex, MalformedSimplex>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let value_token = self.tokens.next()?;
        let parsed = self.parse_record(value_token);
        self.record += 1;
        Some(parsed)
    }
}

/// Parse every simplex in `text`, in input order
pub fn parse_simplices(text: &str) -> Result<Vec<Simplex>> {
    SimplexTokens::from_text(text)
        .map(|record| record.map_err(Into::into))
        .collect()
}
