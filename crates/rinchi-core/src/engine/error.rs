use thiserror::Error;

/// Which of the two decomposition inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Rinchi,
    AuxInfo,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rinchi => write!(f, "RInChI string"),
            Self::AuxInfo => write!(f, "RInChI auxiliary info string"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    #[error("{0} provided as input is absent")]
    NullInput(InputKind),

    #[error("Cannot decompose invalid RInChI string '{rinchi}'")]
    GrammarMismatch { rinchi: String },

    #[error("No-structure count '{value}' in RInChI is out of range")]
    InvalidNoStructCount { value: String },

    #[error(
        "Invalid or unsupported RInChI auxiliary information string: first layer must be equal to '{expected}'"
    )]
    AuxInfoHeaderMismatch { expected: String },

    #[error(
        "Different number of molecules in RInChI ({}, {}, {}) and auxiliary information ({}, {}, {})",
        .rinchi[0], .rinchi[1], .rinchi[2], .aux_info[0], .aux_info[1], .aux_info[2]
    )]
    LayerCountMismatch {
        rinchi: [usize; 3],
        aux_info: [usize; 3],
    },
}
