use crate::abi::{EFFECT_STATE_SIZE, EffectState};
use crate::error::{Result, SpatializerError};

/// Oldest host interface whose state carries `hostapiversion` and `spatializerdata`.
pub const MIN_HOST_API_VERSION: u32 = 0x010300;

/// Whether `state` comes from a host new enough for this plugin.
pub fn is_host_compatible(state: &EffectState) -> bool {
    check_host(state).is_ok()
}

pub(crate) fn check_host(state: &EffectState) -> Result<()> {
    let structsize = state.structsize();
    let hostapiversion = state.host_api_version();
    if structsize as usize >= EFFECT_STATE_SIZE && hostapiversion >= MIN_HOST_API_VERSION {
        Ok(())
    } else {
        Err(SpatializerError::IncompatibleHost {
            structsize,
            hostapiversion,
        })
    }
}
