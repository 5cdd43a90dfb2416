use std::fmt;

/// Pipeline phase selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Copy candidate masks into the staging directory
    Stage,
    /// Normalize staged masks and write the catalog
    Catalog,
}

impl Phase {
    /// Returns the phase for its numeric selector (1 or 2)
    pub fn from_number(part: u8) -> Option<Self> {
        match part {
            1 => Some(Phase::Stage),
            2 => Some(Phase::Catalog),
            _ => None,
        }
    }

    /// Returns the numeric selector for this phase
    pub fn number(&self) -> u8 {
        match self {
            Phase::Stage => 1,
            Phase::Catalog => 2,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Phase::Stage => "stage",
            Phase::Catalog => "catalog",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}
