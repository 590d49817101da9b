//! ベクトル/フレーム演算
//!
//! glamの型を再エクスポートし、整列計算で共通に使う補助関数を提供する

pub use glam::{Quat, Vec3};

/// 浮動小数点比較用の許容誤差
pub const EPSILON: f32 = 1e-5;

/// Orientation frame of an object (right / up / forward unit vectors)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl Frame {
    /// World axes
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Build a frame from an object's rotation
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
            forward: rotation * Vec3::Z,
        }
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// 直線上の最近点を返す
/// - direction: 直線の方向（正規化は内部で行う）
/// - point_on_line: 直線上の1点
pub fn closest_point_on_line(direction: Vec3, point_on_line: Vec3, point: Vec3) -> Vec3 {
    let dir = direction.normalize_or_zero();
    let t = (point - point_on_line).dot(dir);
    point_on_line + dir * t
}

/// 点と直線の距離
pub fn distance_to_line(direction: Vec3, point_on_line: Vec3, point: Vec3) -> f32 {
    (point - closest_point_on_line(direction, point_on_line, point)).length()
}

/// 符号付き距離: |point - origin| に reference との内積の符号を掛ける
/// 内積が0の場合は正として扱う
pub fn signed_distance(origin: Vec3, reference: Vec3, point: Vec3) -> f32 {
    let offset = point - origin;
    let sign = if reference.dot(offset) >= 0.0 { 1.0 } else { -1.0 };
    offset.length() * sign
}

/// ベクトルを単位軸へ射影
#[inline]
pub fn project_onto_axis(v: Vec3, unit_axis: Vec3) -> Vec3 {
    v.project_onto_normalized(unit_axis)
}
