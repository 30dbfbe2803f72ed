//! Math helpers over the host's spatializer data

pub use glam::{Mat4, Vec3};

use crate::abi::SpatializerData;

/// Transforms a source's world-space transform into listener space and returns its position.
pub fn listener_relative_position(listener: &Mat4, source: &Mat4) -> Vec3 {
    listener.transform_point3(source.w_axis.truncate())
}

impl SpatializerData {
    /// World-to-listener transform.
    pub fn listener_matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.listenermatrix)
    }

    /// Source-to-world transform.
    pub fn source_matrix(&self) -> Mat4 {
        Mat4::from_cols_array(&self.sourcematrix)
    }

    pub fn source_position(&self) -> Vec3 {
        self.source_matrix().w_axis.truncate()
    }

    pub fn listener_relative_position(&self) -> Vec3 {
        listener_relative_position(&self.listener_matrix(), &self.source_matrix())
    }

    /// Distance between source and listener, in world units.
    pub fn listener_distance(&self) -> f32 {
        self.listener_relative_position().length()
    }
}
