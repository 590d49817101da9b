//! 選択数の判定と分配アンカーの補正

use serde::{Deserialize, Serialize};

/// ホストから呼ばれる整列操作の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    /// 平均位置への整列
    AlignCenter,
    /// 基準オブジェクトへの整列
    AlignTarget,
    /// 2つのアンカー間への均等分配
    Distribute,
}

impl OperationKind {
    /// 操作に必要な最小オブジェクト数
    pub fn required_count(self) -> usize {
        match self {
            OperationKind::AlignCenter | OperationKind::AlignTarget => 2,
            OperationKind::Distribute => 3,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OperationKind::AlignCenter => "center alignment",
            OperationKind::AlignTarget => "target alignment",
            OperationKind::Distribute => "distribution",
        };
        f.write_str(s)
    }
}

/// ホストがUIの有効/無効を決めるための判定
pub fn is_operation_eligible(object_count: usize, kind: OperationKind) -> bool {
    object_count >= kind.required_count()
}

/// 分配のアンカー（最初/最後）インデックス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorSelection {
    pub first: usize,
    pub last: usize,
}

impl AnchorSelection {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// 指定インデックスがアンカーかどうか
    pub fn is_anchor(&self, index: usize) -> bool {
        index == self.first || index == self.last
    }

    /// 選択数が変わった後にアンカーを補正する
    ///
    /// 範囲外のインデックスは末尾に寄せ、first/last が衝突した場合は
    /// 補正されなかった側（firstが末尾に寄せられた場合はfirst）を隣へずらす。
    /// 選択が1件以下ならどちらも0になる。
    pub fn reconcile(&mut self, len: usize) {
        if len == 0 {
            self.first = 0;
            self.last = 0;
            return;
        }

        let max = len - 1;
        let mut first_was_capped = false;

        if self.first > max {
            self.first = max;
            first_was_capped = true;
        }
        if self.last > max {
            self.last = max;
        }

        if self.first == self.last {
            // 隣へ移動（末尾なら手前へ）
            let shift = |index: usize| if index + 1 < len { index + 1 } else { index.saturating_sub(1) };
            if first_was_capped {
                self.first = shift(self.first);
            } else {
                self.last = shift(self.last);
            }
        }

        self.first = self.first.min(max);
        self.last = self.last.min(max);
    }
}

impl Default for AnchorSelection {
    fn default() -> Self {
        Self { first: 0, last: 1 }
    }
}
