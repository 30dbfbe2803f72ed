//! Rust mirrors of Unity's native audio plugin interface.
//!
//! Everything in here is `#[repr(C)]` and laid out field-for-field like the host's
//! `AudioPluginInterface.h`. The host allocates and owns every struct except
//! [`EffectDefinition`], which the plugin hands out through the discovery export.

mod definition;
mod state;

use std::ffi::{c_char, c_int};
use std::ops::{BitOr, BitOrAssign};

pub use definition::{EffectDefinition, ParameterDefinition};
pub use state::{
    AmbisonicData, EFFECT_STATE_SIZE, EffectState, EffectStateFields, SpatializerData,
};

/// Interface version this plugin is built against.
pub const UNITY_AUDIO_PLUGIN_API_VERSION: u32 = 0x010402;

/// Status code returned from every callback.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioDspResult {
    Ok = 0,
    ErrUnsupported = 1,
}

/// Flags describing what kind of effect a definition registers.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DefinitionFlags(u64);

impl DefinitionFlags {
    pub const IS_SIDE_CHAIN_TARGET: Self = Self(1 << 0);
    pub const IS_SPATIALIZER: Self = Self(1 << 1);
    pub const IS_AMBISONIC_DECODER: Self = Self(1 << 2);
    pub const APPLIES_DISTANCE_ATTENUATION: Self = Self(1 << 3);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl BitOr for DefinitionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DefinitionFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

/// Playback flags the host reports in [`EffectState`].
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateFlags(u32);

impl StateFlags {
    pub const IS_PLAYING: Self = Self(1 << 0);
    pub const IS_PAUSED: Self = Self(1 << 1);
    pub const IS_MUTED: Self = Self(1 << 2);
    pub const IS_SIDE_CHAIN_TARGET: Self = Self(1 << 3);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

// Host callback signatures. `extern "system"` resolves to stdcall on 32-bit Windows,
// which is what the host expects there, and to the C convention everywhere else.

pub type CreateCallback = unsafe extern "system" fn(state: *mut EffectState) -> AudioDspResult;
pub type ReleaseCallback = unsafe extern "system" fn(state: *mut EffectState) -> AudioDspResult;
pub type ResetCallback = unsafe extern "system" fn(state: *mut EffectState) -> AudioDspResult;
pub type ProcessCallback = unsafe extern "system" fn(
    state: *mut EffectState,
    inbuffer: *mut f32,
    outbuffer: *mut f32,
    length: u32,
    inchannels: c_int,
    outchannels: c_int,
) -> AudioDspResult;
pub type SetPositionCallback =
    unsafe extern "system" fn(state: *mut EffectState, pos: u32) -> AudioDspResult;
pub type SetFloatParameterCallback =
    unsafe extern "system" fn(state: *mut EffectState, index: c_int, value: f32) -> AudioDspResult;
pub type GetFloatParameterCallback = unsafe extern "system" fn(
    state: *mut EffectState,
    index: c_int,
    value: *mut f32,
    valuestr: *mut c_char,
) -> AudioDspResult;
pub type GetFloatBufferCallback = unsafe extern "system" fn(
    state: *mut EffectState,
    name: *const c_char,
    buffer: *mut f32,
    numsamples: c_int,
) -> AudioDspResult;
pub type DistanceAttenuationCallback = unsafe extern "system" fn(
    state: *mut EffectState,
    distance_in: f32,
    attenuation_in: f32,
    attenuation_out: *mut f32,
) -> AudioDspResult;
