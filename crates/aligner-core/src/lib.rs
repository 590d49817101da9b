pub mod math;
pub mod components;
pub mod axis;
pub mod error;
pub mod host;
pub mod selection;
pub mod align;
pub mod distribute;
pub mod command;
pub mod scene;

// Re-exports
pub use align::{align_to_center, align_to_target};
pub use axis::{Axis, Projection, Space, project};
pub use command::AlignCommand;
pub use components::Transform;
pub use distribute::distribute;
pub use error::AlignError;
pub use host::{Edit, ObjectHost};
pub use math::Frame;
pub use scene::{ObjectId, Scene};
pub use selection::{AnchorSelection, OperationKind, is_operation_eligible};
