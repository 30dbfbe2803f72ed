//! The passthrough spatializer: registration, host check and callbacks.

pub mod callbacks;
mod host;

pub use host::{MIN_HOST_API_VERSION, is_host_compatible};

use crate::abi::{DefinitionFlags, EffectDefinition, ParameterDefinition};

/// Fills in the spatializer-specific parts of `definition` and returns its parameter count.
///
/// The parameter table is empty but non-null, and the spatializer flag is added to
/// whatever flags the definition already carries.
pub fn register_effect_definition(definition: &mut EffectDefinition) -> u32 {
    let paramdefs: &'static mut [ParameterDefinition] =
        Box::leak(Vec::new().into_boxed_slice());
    definition.paramdefs = paramdefs.as_mut_ptr();
    definition.flags |= DefinitionFlags::IS_SPATIALIZER;
    paramdefs.len() as u32
}
