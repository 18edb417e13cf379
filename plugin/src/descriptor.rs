//! Plugin metadata.
//!
//! The browser asks the host binding layer for the plugin's name and description before any
//! instance exists, so this data is pure configuration: it must be immutable, and the queries
//! must never fail. Unset fields read as empty strings.
//!
//! A single plugin binary can register several content types and report a different name and
//! description for each; the unqualified values act as the fallback for types without an
//! override.

/// Read-only metadata about a plugin, sourced from its build configuration.
///
/// Only [`name`](PluginDescriptor::name) and [`description`](PluginDescriptor::description) are
/// ever shown to users; the other fields are optional bookkeeping the host binding layer may
/// report alongside them.
pub trait PluginDescriptor: Send + Sync {
    /// The user-facing display name of this plugin. Empty when unset.
    fn name(&self) -> &str {
        ""
    }

    /// A short, user-facing description of this plugin. Empty when unset.
    fn description(&self) -> &str {
        ""
    }

    /// A stable identifier for this plugin.
    ///
    /// Example: `com.example.media-viewer`.
    #[inline]
    fn id(&self) -> Option<&str> {
        None
    }

    /// The vendor of this plugin.
    #[inline]
    fn vendor(&self) -> Option<&str> {
        None
    }

    /// The version of this plugin.
    ///
    /// While Semver-compatible version strings are preferred, this can be any arbitrary string.
    #[inline]
    fn version(&self) -> Option<&str> {
        None
    }

    /// The name registered for the given content type, if this plugin reports a different name
    /// per registered type.
    ///
    /// Returning [`None`] makes the given content type fall back to [`name`](PluginDescriptor::name).
    #[inline]
    fn name_for(&self, content_type: &str) -> Option<&str> {
        let _ = content_type;
        None
    }

    /// The description registered for the given content type.
    ///
    /// Returning [`None`] makes the given content type fall back to
    /// [`description`](PluginDescriptor::description).
    #[inline]
    fn description_for(&self, content_type: &str) -> Option<&str> {
        let _ = content_type;
        None
    }
}

/// A name/description override for one registered content type.
#[derive(Copy, Clone, Debug)]
pub struct ContentTypeEntry {
    /// The content type this entry applies to, e.g. `application/x-media-viewer`.
    pub content_type: &'static str,
    pub name: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// A [`PluginDescriptor`] backed entirely by static configuration data.
///
/// This is the implementation most plugins want: fill in the fields that apply and leave the
/// rest defaulted.
#[derive(Copy, Clone, Debug, Default)]
pub struct StaticPluginDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub id: Option<&'static str>,
    pub vendor: Option<&'static str>,
    pub version: Option<&'static str>,
    /// Per-content-type overrides, for plugins registering several types.
    pub content_types: &'static [ContentTypeEntry],
}

impl StaticPluginDescriptor {
    #[inline]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            id: None,
            vendor: None,
            version: None,
            content_types: &[],
        }
    }
}

impl PluginDescriptor for StaticPluginDescriptor {
    #[inline]
    fn name(&self) -> &str {
        self.name
    }

    #[inline]
    fn description(&self) -> &str {
        self.description
    }

    #[inline]
    fn id(&self) -> Option<&str> {
        self.id
    }

    #[inline]
    fn vendor(&self) -> Option<&str> {
        self.vendor
    }

    #[inline]
    fn version(&self) -> Option<&str> {
        self.version
    }

    fn name_for(&self, content_type: &str) -> Option<&str> {
        self.content_types
            .iter()
            .find(|e| e.content_type == content_type)
            .and_then(|e| e.name)
    }

    fn description_for(&self, content_type: &str) -> Option<&str> {
        self.content_types
            .iter()
            .find(|e| e.content_type == content_type)
            .and_then(|e| e.description)
    }
}

/// The descriptor used by factories that don't override
/// [`descriptor`](crate::factory::PluginFactory::descriptor): everything reads as unset.
pub(crate) static EMPTY_DESCRIPTOR: StaticPluginDescriptor = StaticPluginDescriptor {
    name: "",
    description: "",
    id: None,
    vendor: None,
    version: None,
    content_types: &[],
};
