//! 整列軸と座標空間
//!
//! Axis/Space の選択を具体的な射影（スカラー成分 or 直線方向）に変換する

use serde::{Deserialize, Serialize};

use crate::error::AlignError;
use crate::selection::OperationKind;
use crate::math::{Frame, Vec3};

/// 整列軸
/// `All` は分配（distribute）でのみ意味を持つ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
    All,
}

impl Axis {
    /// ワールド軸の単位ベクトル（Allの場合None）
    pub fn unit(self) -> Option<Vec3> {
        match self {
            Axis::X => Some(Vec3::X),
            Axis::Y => Some(Vec3::Y),
            Axis::Z => Some(Vec3::Z),
            Axis::All => None,
        }
    }

    /// 位置から軸成分を取り出す（Allの場合None）
    pub fn component(self, position: Vec3) -> Option<f32> {
        match self {
            Axis::X => Some(position.x),
            Axis::Y => Some(position.y),
            Axis::Z => Some(position.z),
            Axis::All => None,
        }
    }

    /// current の選択軸成分だけを target の値で置き換える
    /// Allの場合は target 全体を返す
    pub fn merge(self, current: Vec3, target: Vec3) -> Vec3 {
        match self {
            Axis::X => Vec3::new(target.x, current.y, current.z),
            Axis::Y => Vec3::new(current.x, target.y, current.z),
            Axis::Z => Vec3::new(current.x, current.y, target.z),
            Axis::All => target,
        }
    }

    /// 単一軸かどうか
    pub fn is_single(self) -> bool {
        !matches!(self, Axis::All)
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
            Axis::All => "All",
        };
        f.write_str(s)
    }
}

/// Parse error for [`Axis`] and [`Space`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseSelectorError {
    kind: &'static str,
    value: String,
}

impl std::str::FromStr for Axis {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            "all" => Ok(Axis::All),
            _ => Err(ParseSelectorError {
                kind: "axis",
                value: s.to_string(),
            }),
        }
    }
}

/// 座標空間（Target Alignerのみで使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    #[default]
    World,
    Local,
}

impl std::str::FromStr for Space {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "world" => Ok(Space::World),
            "local" | "self" => Ok(Space::Local),
            _ => Err(ParseSelectorError {
                kind: "space",
                value: s.to_string(),
            }),
        }
    }
}

/// 射影結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// ワールド空間: 位置のスカラー成分
    Component(f32),
    /// ローカル空間: フレームの単位軸（直線の方向として使う）
    Direction(Vec3),
}

/// 軸と空間の組み合わせを射影に変換する
///
/// `All` はどちらの空間でもスカラー/方向として定義されないため拒否する
pub fn project(
    position: Vec3,
    axis: Axis,
    frame: &Frame,
    space: Space,
    operation: OperationKind,
) -> Result<Projection, AlignError> {
    let invalid = || AlignError::InvalidAxis { operation, axis };

    match space {
        Space::World => axis.component(position).map(Projection::Component).ok_or_else(invalid),
        Space::Local => {
            let dir = match axis {
                Axis::X => frame.right,
                Axis::Y => frame.up,
                Axis::Z => frame.forward,
                Axis::All => return Err(invalid()),
            };
            Ok(Projection::Direction(dir.normalize_or_zero()))
        }
    }
}
