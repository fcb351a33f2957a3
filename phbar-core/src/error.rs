//! Error types for phbar operations

/// Broken precondition on a filtration or a stage input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Filtration value is NaN or infinite
    NonFiniteValue { index: usize },
    /// Value at `index` is smaller than the value before it
    UnsortedValues { index: usize },
    /// Vertex count differs from `dimension + 1`
    VertexCountMismatch {
        index: usize,
        dimension: usize,
        vertex_count: usize,
    },
    /// Same vertex label listed twice in one simplex
    RepeatedVertex { index: usize },
    /// Two simplices share the same vertex set
    DuplicateSimplex { first: usize, second: usize },
    /// A codimension-1 face is absent or enters after its coface
    MissingFace { index: usize },
    /// Matrix and filtration disagree on the number of simplices
    LengthMismatch { expected: usize, found: usize },
    /// Column holds a row index past the last simplex
    RowOutOfRange { column: usize, row: usize },
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Violation::NonFiniteValue { index } => {
                write!(f, "simplex {index} has a non-finite filtration value")
            }
            Violation::UnsortedValues { index } => {
                write!(f, "simplex {index} has a smaller value than its predecessor")
            }
            Violation::VertexCountMismatch {
                index,
                dimension,
                vertex_count,
            } => write!(
                f,
                "simplex {index} has dimension {dimension} but {vertex_count} vertices"
            ),
            Violation::RepeatedVertex { index } => {
                write!(f, "simplex {index} repeats a vertex label")
            }
            Violation::DuplicateSimplex { first, second } => {
                write!(f, "simplices {first} and {second} have the same vertex set")
            }
            Violation::MissingFace { index } => {
                write!(f, "simplex {index} has a face that does not precede it")
            }
            Violation::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} columns, found {found}")
            }
            Violation::RowOutOfRange { column, row } => {
                write!(f, "column {column} has row {row} past the last simplex")
            }
        }
    }
}

/// What was wrong with a simplex record in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Value token is not a number
    InvalidValue,
    /// Dimension token missing, negative or not an integer
    InvalidDimension,
    /// Stream ended before all vertex labels were read
    MissingVertices { expected: usize, found: usize },
    /// Vertex token is not an integer
    InvalidVertex,
    /// Vertex label listed twice
    RepeatedVertex,
}

/// A simplex record that could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedSimplex {
    /// Position of the record in the input (0-based)
    pub simplex: usize,
    pub kind: MalformedKind,
}

impl core::fmt::Display for MalformedSimplex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let simplex = self.simplex;
        match self.kind {
            MalformedKind::InvalidValue => write!(f, "record {simplex}: value is not a number"),
            MalformedKind::InvalidDimension => {
                write!(f, "record {simplex}: invalid or missing dimension")
            }
            MalformedKind::MissingVertices { expected, found } => write!(
                f,
                "record {simplex}: expected {expected} vertices, found {found}"
            ),
            MalformedKind::InvalidVertex => {
                write!(f, "record {simplex}: vertex label is not an integer")
            }
            MalformedKind::RepeatedVertex => write!(f, "record {simplex}: repeated vertex label"),
        }
    }
}

/// Errors that can occur during phbar operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhbarError {
    /// Input to a stage breaks one of its preconditions
    PreconditionViolation(Violation),
    /// Input text could not be turned into a simplex
    MalformedSimplex(MalformedSimplex),
}

impl core::fmt::Display for PhbarError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PhbarError::PreconditionViolation(v) => write!(f, "Precondition violated: {v}"),
            PhbarError::MalformedSimplex(m) => write!(f, "Malformed simplex: {m}"),
        }
    }
}

impl From<Violation> for PhbarError {
    fn from(v: Violation) -> Self {
        PhbarError::PreconditionViolation(v)
    }
}

impl From<MalformedSimplex> for PhbarError {
    fn from(m: MalformedSimplex) -> Self {
        PhbarError::MalformedSimplex(m)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhbarError {}

/// Result type for phbar operations
pub type Result<T> = core::result::Result<T, PhbarError>;
