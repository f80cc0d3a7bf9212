use super::TypeMap;
use crate::{Error, Result};

impl TypeMap {
    /// Checks that every destination member has a source.
    ///
    /// Fails with an unmapped members error listing each property map that
    /// was never mapped. Validation does not modify the type map, so calling
    /// it repeatedly yields the same result.
    pub fn validate(&self) -> Result<()> {
        let unmapped: Vec<_> = self
            .unmapped_property_maps()
            .map(|property_map| property_map.member_name().to_string())
            .collect();

        if unmapped.is_empty() {
            return Ok(());
        }

        Err(Error::unmapped_members(
            self.source.ty().name(),
            self.destination.ty().name(),
            unmapped,
        ))
    }
}
