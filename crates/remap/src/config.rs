use serde::Deserialize;

/// Options applied by [`Builder`](crate::mapper::Builder).
///
/// Deserializes from any serde format; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Map destination members to source members with matching names when a
    /// type map is created. When disabled, every member starts unmapped and
    /// must be configured explicitly.
    pub discover_members: bool,

    /// Validate every type map before the mapper is built.
    pub validate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            discover_members: true,
            validate: true,
        }
    }
}
