//! Plugin discovery.
//!
//! The host calls `UnityGetAudioEffectDefinitions` once per loaded library and keeps the
//! returned pointers for the lifetime of the process, so the list is built once and
//! never freed.

use crate::abi::{
    EffectDefinition, ParameterDefinition, UNITY_AUDIO_PLUGIN_API_VERSION,
};
use crate::config::SpatializerDesc;
use crate::error::Result;
use crate::spatializer::{callbacks, register_effect_definition};
use std::ffi::c_int;
use std::sync::OnceLock;

struct PluginList {
    definitions: Vec<*mut EffectDefinition>,
}

// SAFETY: the definitions are leaked on construction and never written by this crate
// afterwards; only the host reads them.
unsafe impl Send for PluginList {}
unsafe impl Sync for PluginList {}

static PLUGIN_LIST: OnceLock<PluginList> = OnceLock::new();

/// Builds a complete definition for the spatializer described by `desc`.
pub fn declare_effect(desc: &SpatializerDesc) -> Result<EffectDefinition> {
    let mut definition = EffectDefinition::zeroed();
    definition.set_name(&desc.name)?;
    definition.structsize = std::mem::size_of::<EffectDefinition>() as u32;
    definition.paramstructsize = std::mem::size_of::<ParameterDefinition>() as u32;
    definition.apiversion = UNITY_AUDIO_PLUGIN_API_VERSION;
    definition.pluginversion = desc.plugin_version;
    definition.create = Some(callbacks::create);
    definition.release = Some(callbacks::release);
    definition.process = Some(callbacks::process);
    definition.setfloatparameter = Some(callbacks::set_float_parameter);
    definition.getfloatparameter = Some(callbacks::get_float_parameter);
    definition.getfloatbuffer = Some(callbacks::get_float_buffer);
    definition.numparameters = register_effect_definition(&mut definition);
    Ok(definition)
}

fn plugin_list() -> &'static PluginList {
    PLUGIN_LIST.get_or_init(|| {
        #[cfg(feature = "stderr-logging")]
        let _ = env_logger::try_init();

        let desc = SpatializerDesc::default();
        let mut definitions = Vec::with_capacity(1);
        match declare_effect(&desc) {
            Ok(definition) => {
                log::info!(
                    "Registered effect '{}' (plugin version {:#08x}, {} parameters)",
                    desc.name,
                    definition.pluginversion,
                    definition.numparameters
                );
                definitions.push(Box::into_raw(Box::new(definition)));
            }
            Err(err) => log::error!("Failed to declare effect '{}': {}", desc.name, err),
        }
        PluginList { definitions }
    })
}

/// Pointers to every definition this library exports.
pub fn effect_definitions() -> &'static [*mut EffectDefinition] {
    &plugin_list().definitions
}

/// Discovery entry point the host resolves by name.
///
/// Writes a pointer to the definition list into `*definitionptr` and returns its length.
///
/// # Safety
/// `definitionptr` must be null or valid for a pointer-sized write.
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn UnityGetAudioEffectDefinitions(
    definitionptr: *mut *mut *mut EffectDefinition,
) -> c_int {
    // SAFETY: upheld by the caller.
    let Some(out) = (unsafe { definitionptr.as_mut() }) else {
        return 0;
    };
    let definitions = effect_definitions();
    *out = definitions.as_ptr().cast_mut();
    definitions.len() as c_int
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::DefinitionFlags;
    use crate::error::SpatializerError;
    use std::ptr;

    #[test]
    fn test_declare_effect_header() {
        let definition = declare_effect(&SpatializerDesc::default()).unwrap();

        assert_eq!(definition.name(), Some("Dummy Spatializer (NDI)"));
        assert_eq!(
            definition.structsize as usize,
            std::mem::size_of::<EffectDefinition>()
        );
        assert_eq!(
            definition.paramstructsize as usize,
            std::mem::size_of::<ParameterDefinition>()
        );
        assert_eq!(definition.apiversion, 0x010402);
        assert_eq!(definition.pluginversion, 0x010000);
        assert_eq!(definition.channels, 0);
        assert_eq!(definition.numparameters, 0);
        assert!(definition.flags.contains(DefinitionFlags::IS_SPATIALIZER));
        assert!(definition.create.is_some());
        assert!(definition.release.is_some());
        assert!(definition.process.is_some());
        assert!(definition.reset.is_none());
        assert!(definition.setposition.is_none());
        assert!(definition.getfloatbuffer.is_some());
    }

    #[test]
    fn test_declare_effect_rejects_invalid_name() {
        let desc = SpatializerDesc::new().name("A spatializer name that is far too long");
        assert!(matches!(
            declare_effect(&desc),
            Err(SpatializerError::InvalidName(_))
        ));
    }

    #[test]
    fn test_get_definitions_export() {
        let mut list: *mut *mut EffectDefinition = ptr::null_mut();
        let count = unsafe { UnityGetAudioEffectDefinitions(&mut list) };

        assert_eq!(count, 1);
        assert!(!list.is_null());
        let definition = unsafe { &**list };
        assert_eq!(definition.name(), Some("Dummy Spatializer (NDI)"));

        // Repeated discovery hands out the same table.
        let mut again: *mut *mut EffectDefinition = ptr::null_mut();
        assert_eq!(unsafe { UnityGetAudioEffectDefinitions(&mut again) }, 1);
        assert_eq!(list, again);
        assert_eq!(effect_definitions().as_ptr(), list.cast_const());
    }

    #[test]
    fn test_get_definitions_null_pointer() {
        assert_eq!(unsafe { UnityGetAudioEffectDefinitions(ptr::null_mut()) }, 0);
    }
}
