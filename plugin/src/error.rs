use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors reported by factory creation methods and by module installation.
#[derive(Debug)]
pub enum FactoryError {
    /// The plugin object or window handler could not be built.
    ConstructionFailed(&'static str),
    /// A global factory was already installed for this process.
    AlreadyInstalled,
    Io(std::io::Error),
    Custom(Box<dyn Error + 'static>),
}

impl Display for FactoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FactoryError::ConstructionFailed(what) => {
                write!(f, "Failed to construct {what}")
            }
            FactoryError::AlreadyInstalled => {
                f.write_str("A plugin factory was already installed for this process")
            }
            FactoryError::Custom(e) => Display::fmt(&e, f),
            FactoryError::Io(e) => Display::fmt(&e, f),
        }
    }
}

impl Error for FactoryError {}

impl From<std::io::Error> for FactoryError {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        FactoryError::Io(e)
    }
}
