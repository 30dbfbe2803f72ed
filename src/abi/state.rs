use super::{DistanceAttenuationCallback, StateFlags};
use std::ffi::c_void;
use std::ptr;

/// Size the host reserves for [`EffectState`], independent of pointer width.
pub const EFFECT_STATE_SIZE: usize = 80;

/// Per-source positioning data the host hands to spatializer effects.
///
/// Matrices are column-major. `listenermatrix` maps world space into listener space.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SpatializerData {
    pub listenermatrix: [f32; 16],
    pub sourcematrix: [f32; 16],
    pub spatialblend: f32,
    pub reverbzonemix: f32,
    pub spread: f32,
    pub stereopan: f32,
    /// Written by the plugin on create; the host calls it to compute distance falloff.
    pub distanceattenuationcallback: Option<DistanceAttenuationCallback>,
    pub mindistance: f32,
    pub maxdistance: f32,
}

/// Positioning data for ambisonic decoders. Not used by a spatializer, mirrored for layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AmbisonicData {
    pub listenermatrix: [f32; 16],
    pub sourcematrix: [f32; 16],
    pub spatialblend: f32,
    pub reverbzonemix: f32,
    pub spread: f32,
    pub stereopan: f32,
    pub distanceattenuationcallback: Option<DistanceAttenuationCallback>,
    pub ambisonicoutchannels: i32,
    pub volume: f32,
}

/// The named fields of [`EffectState`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EffectStateFields {
    pub structsize: u32,
    pub samplerate: u32,
    pub currdsptick: u64,
    pub prevdsptick: u64,
    pub sidechainbuffer: *mut f32,
    pub effectdata: *mut c_void,
    pub flags: StateFlags,
    pub internal: *mut c_void,
    pub spatializerdata: *mut SpatializerData,
    pub dspbuffersize: u32,
    pub hostapiversion: u32,
    pub ambisonicdata: *mut AmbisonicData,
}

impl Default for EffectStateFields {
    fn default() -> Self {
        Self {
            structsize: 0,
            samplerate: 0,
            currdsptick: 0,
            prevdsptick: 0,
            sidechainbuffer: ptr::null_mut(),
            effectdata: ptr::null_mut(),
            flags: StateFlags::default(),
            internal: ptr::null_mut(),
            spatializerdata: ptr::null_mut(),
            dspbuffersize: 0,
            hostapiversion: 0,
            ambisonicdata: ptr::null_mut(),
        }
    }
}

/// Host-owned processing context passed into every callback.
///
/// The host pads the struct to a fixed 80 bytes, so it is a union of the fields and
/// the padding, exactly as the header declares it.
#[repr(C)]
pub union EffectState {
    fields: EffectStateFields,
    pad: [u8; EFFECT_STATE_SIZE],
}

const _: () = assert!(std::mem::size_of::<EffectState>() == EFFECT_STATE_SIZE);

#[cfg(target_pointer_width = "64")]
const _: () = {
    use std::mem::{offset_of, size_of};
    assert!(size_of::<EffectStateFields>() == EFFECT_STATE_SIZE);
    assert!(offset_of!(EffectStateFields, flags) == 40);
    assert!(offset_of!(EffectStateFields, spatializerdata) == 56);
    assert!(offset_of!(EffectStateFields, hostapiversion) == 68);
    assert!(offset_of!(SpatializerData, distanceattenuationcallback) == 144);
    assert!(size_of::<SpatializerData>() == 160);
    assert!(size_of::<AmbisonicData>() == 160);
};

impl EffectState {
    /// Builds a state the way the host would. Mostly useful for driving callbacks in tests.
    pub fn new(fields: EffectStateFields) -> Self {
        let mut state = Self {
            pad: [0; EFFECT_STATE_SIZE],
        };
        state.fields = fields;
        state
    }

    pub fn fields(&self) -> &EffectStateFields {
        // SAFETY: every field is an integer or a raw pointer, so any initialised bytes
        // are a valid value, and the host always writes the whole struct.
        unsafe { &self.fields }
    }

    pub fn fields_mut(&mut self) -> &mut EffectStateFields {
        // SAFETY: see `fields`.
        unsafe { &mut self.fields }
    }

    pub fn structsize(&self) -> u32 {
        self.fields().structsize
    }

    pub fn host_api_version(&self) -> u32 {
        self.fields().hostapiversion
    }

    pub fn sample_rate(&self) -> u32 {
        self.fields().samplerate
    }

    pub fn dsp_buffer_size(&self) -> u32 {
        self.fields().dspbuffersize
    }

    pub fn flags(&self) -> StateFlags {
        self.fields().flags
    }

    /// Borrows the host's spatializer data, if the host provided any.
    ///
    /// # Safety
    /// `spatializerdata` must be null or point to a live `SpatializerData` that nothing
    /// else accesses for the duration of the borrow. The host guarantees this inside a
    /// callback.
    pub unsafe fn spatializer_data_mut(&mut self) -> Option<&mut SpatializerData> {
        // SAFETY: upheld by the caller.
        unsafe { self.fields().spatializerdata.as_mut() }
    }
}

impl std::fmt::Debug for EffectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("EffectState").field(self.fields()).finish()
    }
}
