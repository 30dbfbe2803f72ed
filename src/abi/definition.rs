use super::{
    CreateCallback, DefinitionFlags, GetFloatBufferCallback, GetFloatParameterCallback,
    ProcessCallback, ReleaseCallback, ResetCallback, SetFloatParameterCallback,
    SetPositionCallback,
};
use crate::error::{Result, SpatializerError};
use std::ffi::c_char;
use std::ptr;

const NAME_CAPACITY: usize = 32;

/// Describes one user-facing float parameter of an effect.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ParameterDefinition {
    pub name: [c_char; 16],
    pub unit: [c_char; 16],
    pub description: *const c_char,
    pub min: f32,
    pub max: f32,
    pub defaultval: f32,
    pub displayscale: f32,
    pub displayexponent: f32,
}

/// Registration record the host reads through `UnityGetAudioEffectDefinitions`.
#[repr(C)]
#[derive(Debug)]
pub struct EffectDefinition {
    pub structsize: u32,
    pub paramstructsize: u32,
    pub apiversion: u32,
    pub pluginversion: u32,
    pub channels: u32,
    pub numparameters: u32,
    pub flags: DefinitionFlags,
    pub name: [c_char; NAME_CAPACITY],
    pub create: Option<CreateCallback>,
    pub release: Option<ReleaseCallback>,
    pub reset: Option<ResetCallback>,
    pub process: Option<ProcessCallback>,
    pub setposition: Option<SetPositionCallback>,
    pub paramdefs: *mut ParameterDefinition,
    pub setfloatparameter: Option<SetFloatParameterCallback>,
    pub getfloatparameter: Option<GetFloatParameterCallback>,
    pub getfloatbuffer: Option<GetFloatBufferCallback>,
}

#[cfg(target_pointer_width = "64")]
const _: () = {
    use std::mem::{offset_of, size_of};
    assert!(size_of::<ParameterDefinition>() == 64);
    assert!(offset_of!(EffectDefinition, flags) == 24);
    assert!(offset_of!(EffectDefinition, name) == 32);
    assert!(offset_of!(EffectDefinition, create) == 64);
    assert!(offset_of!(EffectDefinition, paramdefs) == 104);
    assert!(size_of::<EffectDefinition>() == 136);
};

impl EffectDefinition {
    /// An all-zero definition: no name, no callbacks, no parameters.
    pub const fn zeroed() -> Self {
        Self {
            structsize: 0,
            paramstructsize: 0,
            apiversion: 0,
            pluginversion: 0,
            channels: 0,
            numparameters: 0,
            flags: DefinitionFlags::empty(),
            name: [0; NAME_CAPACITY],
            create: None,
            release: None,
            reset: None,
            process: None,
            setposition: None,
            paramdefs: ptr::null_mut(),
            setfloatparameter: None,
            getfloatparameter: None,
            getfloatbuffer: None,
        }
    }

    /// Copies `name` into the fixed-size, NUL-terminated name field.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let bytes = name.as_bytes();
        if bytes.len() >= NAME_CAPACITY || bytes.contains(&0) {
            return Err(SpatializerError::InvalidName(name.to_string()));
        }

        self.name = [0; NAME_CAPACITY];
        for (dst, &src) in self.name.iter_mut().zip(bytes) {
            *dst = src as c_char;
        }
        Ok(())
    }

    /// The registered name, or `None` if it is not NUL-terminated UTF-8.
    pub fn name(&self) -> Option<&str> {
        // SAFETY: `c_char` and `u8` have the same size and alignment.
        let bytes: &[u8] =
            unsafe { std::slice::from_raw_parts(self.name.as_ptr().cast(), NAME_CAPACITY) };
        std::ffi::CStr::from_bytes_until_nul(bytes)
            .ok()
            .and_then(|name| name.to_str().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_definition() {
        let definition = EffectDefinition::zeroed();
        assert_eq!(definition.numparameters, 0);
        assert_eq!(definition.flags, DefinitionFlags::empty());
        assert!(definition.paramdefs.is_null());
        assert!(definition.create.is_none());
        assert_eq!(definition.name(), Some(""));
    }

    #[test]
    fn test_set_name() {
        let mut definition = EffectDefinition::zeroed();
        definition.set_name("Dummy Spatializer (NDI)").unwrap();
        assert_eq!(definition.name(), Some("Dummy Spatializer (NDI)"));

        definition.set_name("Short").unwrap();
        assert_eq!(definition.name(), Some("Short"));
    }

    #[test]
    fn test_set_name_rejects_overlong_and_nul() {
        let mut definition = EffectDefinition::zeroed();
        assert!(definition.set_name(&"x".repeat(31)).is_ok());
        assert!(matches!(
            definition.set_name(&"x".repeat(32)),
            Err(SpatializerError::InvalidName(_))
        ));
        assert!(definition.set_name("bad\0name").is_err());
    }
}
