use super::{Getter, Read};
use crate::{bail, Object, Result, Value};

use std::sync::Arc;

/// A resolved chain of getters leading from a source object to a value.
///
/// Every hop but the last must yield a nested object; the last must yield a
/// value. A `Null` at any intermediate hop short-circuits the whole path to
/// `Null`.
#[derive(Clone)]
pub struct SourcePath {
    hops: Vec<Arc<dyn Getter>>,

    /// Dotted form of the path, e.g. `company.name`
    display: String,
}

impl SourcePath {
    pub fn new(display: impl Into<String>, hops: Vec<Arc<dyn Getter>>) -> Self {
        Self {
            hops,
            display: display.into(),
        }
    }

    /// A path made of a single getter.
    pub fn single(display: impl Into<String>, getter: Arc<dyn Getter>) -> Self {
        Self::new(display, vec![getter])
    }

    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Reads the value at the end of the path.
    pub fn read(&self, source: &dyn Object) -> Result<Value> {
        let Some((last, nested)) = self.hops.split_last() else {
            bail!("member path `{}` is empty", self.display);
        };

        let mut current = source;

        for hop in nested {
            match hop.get(current)? {
                Read::Object(next) => current = next,
                Read::Value(Value::Null) => return Ok(Value::Null),
                Read::Value(value) => bail!(
                    "member path `{}` passes through a {} value",
                    self.display,
                    value.kind()
                ),
            }
        }

        match last.get(current)? {
            Read::Value(value) => Ok(value),
            Read::Object(object) => bail!(
                "member path `{}` ends at a `{}` object, not a value",
                self.display,
                object.type_name()
            ),
        }
    }
}

impl core::fmt::Debug for SourcePath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_tuple("SourcePath").field(&self.display).finish()
    }
}

impl core::fmt::Display for SourcePath {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.display)
    }
}
