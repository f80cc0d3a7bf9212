use crate::accessor::{Setter, SourcePath};
use crate::convert::ValueConverter;
use crate::creator::ObjectCreator;
use crate::{Error, MapHook, MapSide, Object, Result, TypeMap, TypeRef, Value};

use std::sync::Arc;
use tracing::{debug, trace};

/// A compiled mapping routine.
///
/// Holds an immutable snapshot of a [`TypeMap`] taken when
/// [`TypeMap::map_func`] was called; later changes to the type map are not
/// observed. Cloning is cheap and the routine can be shared across threads.
#[derive(Clone)]
pub struct MapFunc {
    plan: Arc<Plan>,
}

struct Plan {
    source: TypeRef,
    destination: TypeRef,

    /// Members written by each call, in registration order
    steps: Vec<Step>,

    object_creator: Arc<dyn ObjectCreator>,
    before_map: Option<MapHook>,
    after_map: Option<MapHook>,
}

struct Step {
    member_name: String,
    source: SourcePath,
    converter: Option<Arc<dyn ValueConverter>>,
    null_substitute: Value,
    setter: Arc<dyn Setter>,
}

impl MapFunc {
    pub(crate) fn new(type_map: &TypeMap) -> MapFunc {
        let steps: Vec<_> = type_map
            .active_property_maps()
            .map(|(property_map, source)| Step {
                member_name: property_map.member_name().to_string(),
                source: source.clone(),
                converter: property_map.value_converter().cloned(),
                null_substitute: property_map.null_substitute().clone(),
                setter: property_map.destination().clone(),
            })
            .collect();

        debug!(
            source = type_map.source_type().name(),
            destination = type_map.destination_type().name(),
            steps = steps.len(),
            "compiled map func"
        );

        MapFunc {
            plan: Arc::new(Plan {
                source: type_map.source_type(),
                destination: type_map.destination_type(),
                steps,
                object_creator: type_map.object_creator().clone(),
                before_map: type_map.before_map_func().cloned(),
                after_map: type_map.after_map_func().cloned(),
            }),
        }
    }

    pub fn source_type(&self) -> TypeRef {
        self.plan.source
    }

    pub fn destination_type(&self) -> TypeRef {
        self.plan.destination
    }

    /// Maps `source` into `destination`, creating the destination with the
    /// object creator when none is given.
    pub fn map(
        &self,
        source: &dyn Object,
        destination: Option<Box<dyn Object>>,
    ) -> Result<Box<dyn Object>> {
        let mut destination = match destination {
            Some(destination) => destination,
            None => self.plan.object_creator.create(source)?,
        };

        self.map_into(source, &mut *destination)?;
        Ok(destination)
    }

    /// Maps `source` into an existing destination. The object creator is
    /// never called.
    ///
    /// On error, members written before the failing step keep their new
    /// values.
    pub fn map_into(&self, source: &dyn Object, destination: &mut dyn Object) -> Result<()> {
        let plan = &*self.plan;

        if !plan.destination.is_type_of(&*destination) {
            return Err(Error::type_mismatch(
                MapSide::Destination,
                plan.destination.name(),
                (*destination).type_name(),
            ));
        }

        if !plan.source.is_type_of(source) {
            return Err(Error::type_mismatch(
                MapSide::Source,
                plan.source.name(),
                source.type_name(),
            ));
        }

        trace!(
            source = plan.source.name(),
            destination = plan.destination.name(),
            "mapping object"
        );

        if let Some(before_map) = &plan.before_map {
            before_map(source, destination)?;
        }

        for step in &plan.steps {
            let mut value = step.source.read(source)?;

            if let Some(converter) = &step.converter {
                value = converter.convert(value)?;
            }

            if value.is_null() {
                value = step.null_substitute.clone();
            }

            trace!(member = %step.member_name, path = %step.source, "writing member");
            step.setter.set(destination, value)?;
        }

        if let Some(after_map) = &plan.after_map {
            after_map(source, destination)?;
        }

        Ok(())
    }
}

impl core::fmt::Debug for MapFunc {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("MapFunc")
            .field("source", &self.plan.source.name())
            .field("destination", &self.plan.destination.name())
            .field(
                "members",
                &self
                    .plan
                    .steps
                    .iter()
                    .map(|step| step.member_name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
