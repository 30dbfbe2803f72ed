//! Host-facing callbacks.
//!
//! Every callback reports [`AudioDspResult::Ok`]. Malformed host input is logged and
//! otherwise ignored. `process` and `distance_attenuation` run on the host's audio
//! thread for every buffer and must not log or allocate.

use super::host::check_host;
use crate::abi::{AudioDspResult, EffectState, SpatializerData};
use crate::error::SpatializerError;
use std::ffi::{c_char, c_int};
use std::fmt;
use std::ptr;

/// Log line describing a freshly created instance.
pub(crate) struct InstanceSummary<'a> {
    pub sample_rate: u32,
    pub dsp_buffer_size: u32,
    pub data: &'a SpatializerData,
}

impl fmt::Display for InstanceSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.data.listener_relative_position();
        write!(
            f,
            "sample_rate: {} Hz, dsp_buffer_size: {}, source at ({:.2}, {:.2}, {:.2}) from listener, distance: {:.2}",
            self.sample_rate,
            self.dsp_buffer_size,
            position.x,
            position.y,
            position.z,
            self.data.listener_distance()
        )
    }
}

/// Number of samples `process` copies: `length` frames of `outchannels` channels.
pub(crate) fn passthrough_len(length: u32, outchannels: c_int) -> usize {
    let channels = usize::try_from(outchannels).unwrap_or(0);
    (length as usize).checked_mul(channels).unwrap_or(0)
}

/// Identity falloff: the host's attenuation goes through unchanged.
pub unsafe extern "system" fn distance_attenuation(
    _state: *mut EffectState,
    _distance_in: f32,
    attenuation_in: f32,
    attenuation_out: *mut f32,
) -> AudioDspResult {
    // SAFETY: the host passes null or a writable float.
    if let Some(out) = unsafe { attenuation_out.as_mut() } {
        *out = attenuation_in;
    }
    AudioDspResult::Ok
}

pub unsafe extern "system" fn create(state: *mut EffectState) -> AudioDspResult {
    // SAFETY: the host passes null or its live state for this instance.
    let Some(state) = (unsafe { state.as_mut() }) else {
        log::warn!("create: {}", SpatializerError::NullState);
        return AudioDspResult::Ok;
    };

    if let Err(err) = check_host(state) {
        log::warn!("create: {}", err);
    }

    let sample_rate = state.sample_rate();
    let dsp_buffer_size = state.dsp_buffer_size();

    // SAFETY: the host owns the spatializer data and does not touch it during create.
    match unsafe { state.spatializer_data_mut() } {
        Some(data) => {
            data.distanceattenuationcallback = Some(distance_attenuation);
            log::debug!(
                "Created spatializer instance ({})",
                InstanceSummary {
                    sample_rate,
                    dsp_buffer_size,
                    data,
                }
            );
        }
        None => log::warn!("create: {}", SpatializerError::MissingSpatializerData),
    }

    AudioDspResult::Ok
}

/// Nothing to tear down: no instance keeps state or host pointers between callbacks, so
/// the host may free the effect state as soon as this returns.
pub unsafe extern "system" fn release(_state: *mut EffectState) -> AudioDspResult {
    log::debug!("Released spatializer instance");
    AudioDspResult::Ok
}

pub unsafe extern "system" fn set_float_parameter(
    _state: *mut EffectState,
    _index: c_int,
    _value: f32,
) -> AudioDspResult {
    AudioDspResult::Ok
}

pub unsafe extern "system" fn get_float_parameter(
    _state: *mut EffectState,
    _index: c_int,
    _value: *mut f32,
    _valuestr: *mut c_char,
) -> AudioDspResult {
    AudioDspResult::Ok
}

pub unsafe extern "system" fn get_float_buffer(
    _state: *mut EffectState,
    _name: *const c_char,
    _buffer: *mut f32,
    _numsamples: c_int,
) -> AudioDspResult {
    AudioDspResult::Ok
}

/// Copies `length * outchannels` samples from `inbuffer` to `outbuffer`.
///
/// `inchannels` is never consulted; the host sizes both buffers for the output layout
/// whenever a spatializer is active.
pub unsafe extern "system" fn process(
    _state: *mut EffectState,
    inbuffer: *mut f32,
    outbuffer: *mut f32,
    length: u32,
    _inchannels: c_int,
    outchannels: c_int,
) -> AudioDspResult {
    let samples = passthrough_len(length, outchannels);
    if samples == 0 || inbuffer.is_null() || outbuffer.is_null() || ptr::eq(inbuffer, outbuffer) {
        return AudioDspResult::Ok;
    }

    // SAFETY: the host guarantees both buffers hold `length * outchannels` samples.
    // `ptr::copy` tolerates overlapping buffers.
    unsafe { ptr::copy(inbuffer, outbuffer, samples) };
    AudioDspResult::Ok
}
