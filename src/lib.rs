//! # Dummy Spatializer (NDI)
//!
//! A passthrough spatializer for Unity's native audio plugin interface.
//!
//! With a spatializer plugin selected, Unity routes each spatialized `AudioSource` through
//! the plugin instead of applying its own panning. This one copies the input straight to
//! the output and leaves distance attenuation untouched, so an NDI sender further down the
//! chain receives the raw per-source signal.
//!
//! The library builds as a `cdylib`. The host resolves [`UnityGetAudioEffectDefinitions`],
//! reads the single [`EffectDefinition`](abi::EffectDefinition) it returns and drives the
//! callbacks in [`spatializer::callbacks`] from its audio thread.
//!
//! ```
//! use audioplugin_dummy_spatializer::abi::DefinitionFlags;
//! use audioplugin_dummy_spatializer::{SpatializerDesc, declare_effect};
//!
//! let definition = declare_effect(&SpatializerDesc::default())?;
//! assert_eq!(definition.name(), Some("Dummy Spatializer (NDI)"));
//! assert!(definition.flags.contains(DefinitionFlags::IS_SPATIALIZER));
//! assert_eq!(definition.numparameters, 0);
//! # Ok::<(), audioplugin_dummy_spatializer::SpatializerError>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade. Enable the `stderr-logging` feature to have the
//! plugin install `env_logger` (configured through `RUST_LOG`) on first discovery.

pub mod abi;
pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod spatializer;

pub use config::SpatializerDesc;
pub use error::SpatializerError;
pub use registry::{UnityGetAudioEffectDefinitions, declare_effect, effect_definitions};
pub use spatializer::{is_host_compatible, register_effect_definition};
