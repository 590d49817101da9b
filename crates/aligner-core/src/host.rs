//! ホスト（エディタ側）との境界
//!
//! コアはオブジェクトを所有しない。位置の取得/設定とローカルフレームの取得を
//! `ObjectHost` 経由で行い、書き込み直前に `before_write` を呼んでUndo記録の機会を渡す。

use crate::axis::{Axis, Space};
use crate::math::{Frame, Vec3};
use crate::selection::OperationKind;

/// 整列対象オブジェクトへのアクセス手段
pub trait ObjectHost {
    /// オブジェクト識別子（コアからは不透明）
    type Id: Copy + Eq + std::fmt::Debug;

    /// 現在のワールド位置
    fn position(&self, id: Self::Id) -> Vec3;

    /// 新しいワールド位置を設定
    fn set_position(&mut self, id: Self::Id, position: Vec3);

    /// ローカルフレーム（Local空間の整列でのみ使用）
    fn local_frame(&self, id: Self::Id) -> Frame;

    /// `set_position` の直前に1オブジェクトごとに呼ばれる
    fn before_write(&mut self, _id: Self::Id, _edit: &Edit<Self::Id>) {}
}

/// 書き込みの内容（Undo履歴の説明用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<Id> {
    AlignCenter { axis: Axis },
    AlignTarget { base: Id, axis: Axis, space: Space },
    Distribute { axis: Axis },
}

impl<Id: Copy> Edit<Id> {
    pub fn kind(&self) -> OperationKind {
        match self {
            Edit::AlignCenter { .. } => OperationKind::AlignCenter,
            Edit::AlignTarget { .. } => OperationKind::AlignTarget,
            Edit::Distribute { .. } => OperationKind::Distribute,
        }
    }

    /// 履歴表示用のメッセージ
    /// `name_of` は基準オブジェクトの表示名を返す
    pub fn describe(&self, name_of: impl FnOnce(Id) -> String) -> String {
        match *self {
            Edit::AlignCenter { axis } => format!("Align objects to average {} position", axis),
            Edit::AlignTarget { base, axis, .. } => {
                format!("Align objects to {}'s {} position", name_of(base), axis)
            }
            Edit::Distribute { axis: Axis::All } => "Distribute objects on custom axis".to_string(),
            Edit::Distribute { axis } => format!("Distribute objects on {} axis", axis),
        }
    }
}

/// 計算済みの位置をまとめて書き込む（検証後にのみ呼ぶ）
pub(crate) fn commit<H: ObjectHost>(host: &mut H, writes: Vec<(H::Id, Vec3)>, edit: &Edit<H::Id>) -> usize {
    let count = writes.len();
    for (id, position) in writes {
        host.before_write(id, edit);
        host.set_position(id, position);
    }
    count
}
