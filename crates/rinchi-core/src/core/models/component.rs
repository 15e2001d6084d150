use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Reactant,
    Product,
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Reactant => "Reactant",
                Self::Product => "Product",
                Self::Agent => "Agent",
            }
        )
    }
}

/// One molecule of a reaction, restored to a standalone InChI.
///
/// Equality and hashing cover all three fields, so two components with the same
/// InChI but different roles or auxiliary information are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Component {
    inchi: String,
    aux_info: String,
    role: Role,
}

impl Component {
    pub fn new(inchi: impl Into<String>, aux_info: impl Into<String>, role: Role) -> Self {
        Self {
            inchi: inchi.into(),
            aux_info: aux_info.into(),
            role,
        }
    }

    pub fn inchi(&self) -> &str {
        &self.inchi
    }

    /// The AuxInfo of this molecule, or an empty string when none was supplied.
    pub fn aux_info(&self) -> &str {
        &self.aux_info
    }

    pub fn has_aux_info(&self) -> bool {
        !self.aux_info.is_empty()
    }

    pub fn role(&self) -> Role {
        self.role
    }
}
