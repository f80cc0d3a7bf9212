use crate::accessor::{Setter, SourcePath};
use crate::convert::ValueConverter;
use crate::Value;

use std::sync::Arc;

/// The mapping rule for one destination member.
///
/// A property map starts out unmapped. It becomes mapped when a source path
/// is attached with [`map_from`](Self::map_from) or when the member is
/// excluded with [`ignore`](Self::ignore). Ignored members are never
/// written.
#[derive(Clone)]
pub struct PropertyMap {
    /// Destination member name
    member_name: String,

    /// Where the value is read from
    source: Option<SourcePath>,

    /// How the value is written
    destination: Arc<dyn Setter>,

    value_converter: Option<Arc<dyn ValueConverter>>,

    /// Written instead of a `Null` source value
    null_substitute: Value,

    /// Set by [`ignore`](Self::ignore); always implies `ignored`
    excluded: bool,
    ignored: bool,
}

impl PropertyMap {
    pub fn new(member_name: impl Into<String>, destination: Arc<dyn Setter>) -> PropertyMap {
        PropertyMap {
            member_name: member_name.into(),
            source: None,
            destination,
            value_converter: None,
            null_substitute: Value::Null,
            excluded: false,
            ignored: false,
        }
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn source(&self) -> Option<&SourcePath> {
        self.source.as_ref()
    }

    pub fn destination(&self) -> &Arc<dyn Setter> {
        &self.destination
    }

    pub fn value_converter(&self) -> Option<&Arc<dyn ValueConverter>> {
        self.value_converter.as_ref()
    }

    pub fn null_substitute(&self) -> &Value {
        &self.null_substitute
    }

    /// A member is mapped once it has a source path or was excluded with
    /// [`ignore`](Self::ignore).
    pub fn is_mapped(&self) -> bool {
        self.source.is_some() || self.excluded
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Attaches the source path and marks the member mapped.
    pub fn map_from(&mut self, source: SourcePath) -> &mut Self {
        self.source = Some(source);
        self
    }

    /// Excludes the member from mapping and from validation.
    pub fn ignore(&mut self) -> &mut Self {
        self.ignored = true;
        self.excluded = true;
        self
    }

    /// Raises or clears the `ignored` flag.
    ///
    /// Raising it alone does not mark the member mapped: an ignored member
    /// with no source is still reported by
    /// [`TypeMap::unmapped_property_maps`](crate::TypeMap::unmapped_property_maps).
    /// Clearing it also undoes [`ignore`](Self::ignore), so a member with no
    /// source becomes unmapped again.
    pub fn set_ignored(&mut self, ignored: bool) -> &mut Self {
        self.ignored = ignored;
        if !ignored {
            self.excluded = false;
        }
        self
    }

    pub fn convert_with(&mut self, converter: impl ValueConverter + 'static) -> &mut Self {
        self.value_converter = Some(Arc::new(converter));
        self
    }

    pub fn set_null_substitute(&mut self, value: impl Into<Value>) -> &mut Self {
        self.null_substitute = value.into();
        self
    }

    /// The source path the compiled routine reads, present exactly when the
    /// member is mapped and not ignored.
    pub(crate) fn active_source(&self) -> Option<&SourcePath> {
        if self.ignored {
            None
        } else {
            self.source.as_ref()
        }
    }
}

impl core::fmt::Debug for PropertyMap {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PropertyMap")
            .field("member_name", &self.member_name)
            .field("source", &self.source)
            .field("converter", &self.value_converter.is_some())
            .field("null_substitute", &self.null_substitute)
            .field("mapped", &self.is_mapped())
            .field("ignored", &self.ignored)
            .finish()
    }
}
