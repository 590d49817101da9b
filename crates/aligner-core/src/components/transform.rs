use crate::math::{Frame, Quat, Vec3};

/// Placement of a scene object
/// Position in world space plus the rotation that defines its local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    /// Create a new Transform with specified values
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Create an identity transform (origin, no rotation)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Replace the rotation, keeping the position
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Local right/up/forward axes
    pub fn frame(&self) -> Frame {
        Frame::from_rotation(self.rotation)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
