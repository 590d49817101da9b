//! JSONで受け取る整列コマンド
//!
//! ホスト（JS側UIなど）は選択中オブジェクトの一覧と一緒にコマンドを渡す。
//! `base` / `first` / `last` はその一覧へのインデックス。
//!
//! ```json
//! { "op": "center", "axis": "y" }
//! { "op": "target", "base": 0, "axis": "x", "space": "local" }
//! { "op": "distribute", "first": 0, "last": 3, "axis": "all" }
//! ```

use serde::{Deserialize, Serialize};

use crate::align::{align_to_center, align_to_target};
use crate::axis::{Axis, Space};
use crate::distribute::distribute;
use crate::error::{AlignError, ensure_index};
use crate::host::ObjectHost;
use crate::selection::OperationKind;

/// 整列コマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AlignCommand {
    Center {
        axis: Axis,
    },
    Target {
        base: usize,
        axis: Axis,
        #[serde(default)]
        space: Space,
    },
    Distribute {
        first: usize,
        last: usize,
        axis: Axis,
    },
}

impl AlignCommand {
    /// JSON文字列からコマンドを作成
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 対応する操作の種類
    pub fn kind(&self) -> OperationKind {
        match self {
            AlignCommand::Center { .. } => OperationKind::AlignCenter,
            AlignCommand::Target { .. } => OperationKind::AlignTarget,
            AlignCommand::Distribute { .. } => OperationKind::Distribute,
        }
    }

    /// コマンドを実行し、書き込んだオブジェクト数を返す
    pub fn apply<H: ObjectHost>(&self, host: &mut H, objects: &[H::Id]) -> Result<usize, AlignError> {
        tracing::debug!("[command] {:?} on {} objects", self, objects.len());

        match *self {
            AlignCommand::Center { axis } => align_to_center(host, objects, axis),
            AlignCommand::Target { base, axis, space } => {
                ensure_index(base, objects.len())?;
                align_to_target(host, objects, objects[base], axis, space)
            }
            AlignCommand::Distribute { first, last, axis } => distribute(host, objects, first, last, axis),
        }
    }
}
