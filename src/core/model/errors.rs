use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    UnknownFormula { name: String },
    UnknownColourMap { name: String },
    EmptyCatalogue,
    DuplicateName { name: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormula { name } => write!(f, "unknown formula: {}", name),
            Self::UnknownColourMap { name } => write!(f, "unknown colour map: {}", name),
            Self::EmptyCatalogue => {
                write!(f, "catalogue needs at least one formula and one colour map")
            }
            Self::DuplicateName { name } => write!(f, "name registered twice: {}", name),
        }
    }
}

impl Error for ConfigurationError {}
