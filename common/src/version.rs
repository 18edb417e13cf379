use std::fmt::{Display, Formatter};

/// The version of the framework contract a plugin binary was built against.
///
/// The host binding layer reports this to the browser alongside the plugin's own version, so
/// mismatched framework and binding builds can be told apart in the field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct FrameworkVersion {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl FrameworkVersion {
    pub const CURRENT: FrameworkVersion = FrameworkVersion {
        major: 0,
        minor: 1,
        revision: 0,
    };
}

impl Display for FrameworkVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
