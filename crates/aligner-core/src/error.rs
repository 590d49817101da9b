use crate::axis::Axis;
use crate::selection::OperationKind;

/// 整列/分配の呼び出しエラー
/// 全て位置を書き換える前に検出される
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("{operation} requires at least {required} objects, got {actual}")]
    TooFewObjects {
        operation: OperationKind,
        required: usize,
        actual: usize,
    },

    #[error("index {index} is out of range for {len} objects")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("first and last anchors must be distinct (both are {index})")]
    IdenticalAnchors { index: usize },

    #[error("axis `{axis}` is not supported by {operation}")]
    InvalidAxis { operation: OperationKind, axis: Axis },
}

impl AlignError {
    /// 選択数/インデックスに関する前提条件エラーか
    /// false の場合は軸の組み合わせが不正
    pub fn is_precondition(&self) -> bool {
        !matches!(self, AlignError::InvalidAxis { .. })
    }
}

/// 操作に必要な選択数を満たしているか確認
pub(crate) fn ensure_count(operation: OperationKind, actual: usize) -> Result<(), AlignError> {
    let required = operation.required_count();
    if actual < required {
        return Err(AlignError::TooFewObjects {
            operation,
            required,
            actual,
        });
    }
    Ok(())
}

/// インデックスが範囲内か確認
pub(crate) fn ensure_index(index: usize, len: usize) -> Result<(), AlignError> {
    if index >= len {
        return Err(AlignError::IndexOutOfRange { index, len });
    }
    Ok(())
}
