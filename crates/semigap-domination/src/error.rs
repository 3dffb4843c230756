//! Input validation errors
//!
//! Every variant is an invalid-input condition: it is raised before any
//! computation starts, and no partial result is ever produced.

use thiserror::Error;

use crate::domain::graph::Vertex;

/// Rejected input for semigroup generation, graph construction or solving
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// No generators were supplied
    #[error("invalid input: generator list is empty")]
    EmptyGenerators,
    /// A generator was zero
    #[error("invalid input: generator at position {index} is not positive")]
    ZeroGenerator { index: usize },
    /// The closure bound multiplier was zero
    #[error("invalid input: limit factor must be positive")]
    ZeroLimitFactor,
    /// `max(generators) * limit_factor` does not fit in a vertex value
    #[error("invalid input: bound {max_generator} * {limit_factor} overflows")]
    BoundOverflow { max_generator: u32, limit_factor: u32 },
    /// Exact search requested for graphs wider than a subset mask
    #[error("invalid input: exact threshold {threshold} exceeds the maximum of {max}")]
    ExactThresholdTooLarge { threshold: usize, max: usize },
    /// Graph has more vertices than a subset mask can hold
    #[error("invalid input: exact search supports at most {max} vertices, graph has {vertices}")]
    GraphTooLarge { vertices: usize, max: usize },
    /// An edge joined a vertex to itself
    #[error("invalid input: self-loop on vertex {0}")]
    SelfLoop(Vertex),
    /// An edge referenced a vertex outside the vertex set
    #[error("invalid input: edge endpoint {0} is not a vertex of the graph")]
    UnknownVertex(Vertex),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_prefixed() {
        let errors = [
            InputError::EmptyGenerators,
            InputError::ZeroGenerator { index: 2 },
            InputError::ZeroLimitFactor,
            InputError::SelfLoop(4),
            InputError::UnknownVertex(9),
        ];

        for err in errors {
            assert!(err.to_string().starts_with("invalid input"), "{}", err);
        }
    }

    #[test]
    fn test_message_includes_details() {
        let err = InputError::BoundOverflow {
            max_generator: u32::MAX,
            limit_factor: 2,
        };
        assert_eq!(
            err.to_string(),
            format!("invalid input: bound {} * 2 overflows", u32::MAX)
        );
    }
}
