//! Configuration for the spatializer plugin

/// Descriptor for the effect definition handed to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatializerDesc {
    /// Name the host lists the spatializer under. The NDI sender selects the plugin by
    /// this exact string, so changing it breaks discovery on the host side.
    pub name: String,
    /// Plugin version reported to the host, `0xMMmmpp`.
    pub plugin_version: u32,
}

impl Default for SpatializerDesc {
    fn default() -> Self {
        Self {
            name: "Dummy Spatializer (NDI)".to_string(),
            plugin_version: 0x010000,
        }
    }
}

impl SpatializerDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn plugin_version(mut self, version: u32) -> Self {
        self.plugin_version = version;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_desc() {
        let desc = SpatializerDesc::default();
        assert_eq!(desc.name, "Dummy Spatializer (NDI)");
        assert_eq!(desc.plugin_version, 0x010000);
    }

    #[test]
    fn test_builder() {
        let desc = SpatializerDesc::new().name("Passthrough").plugin_version(0x010203);
        assert_eq!(desc.name, "Passthrough");
        assert_eq!(desc.plugin_version, 0x010203);
    }
}
