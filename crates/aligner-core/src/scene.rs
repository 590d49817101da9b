//! インメモリのシーン
//!
//! 名前付きオブジェクト（Transform）を保持する最小のホスト実装。
//! `before_write` で移動前の位置を履歴に積み、1オブジェクト1ステップで元に戻せる。

use crate::components::Transform;
use crate::host::{Edit, ObjectHost};
use crate::math::{Frame, Vec3};

/// シーン内オブジェクトの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// インデックスを取得
    #[inline]
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// シーン内のオブジェクト
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub transform: Transform,
}

/// 履歴エントリ（書き込み前の位置）
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: ObjectId,
    pub previous: Vec3,
    pub message: String,
}

/// 整列対象を保持するシーン
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    history: Vec<HistoryEntry>,
    dirty: bool,
}

impl Scene {
    /// 新しいSceneを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// オブジェクトを追加
    pub fn spawn(&mut self, name: impl Into<String>, transform: Transform) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SceneObject {
            name: name.into(),
            transform,
        });
        id
    }

    /// オブジェクトを取得
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0 as usize)
    }

    /// オブジェクトを取得（可変）
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0 as usize)
    }

    /// 全オブジェクトIDをイテレート
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.objects.len() as u32).map(ObjectId)
    }

    /// オブジェクト数
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// 表示名（存在しない場合は空文字）
    pub fn name(&self, id: ObjectId) -> &str {
        self.get(id).map(|o| o.name.as_str()).unwrap_or("")
    }

    /// 履歴（古い順）
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// 整列による変更があったか
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// 直前の1書き込みを元に戻す
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        let entry = self.history.pop()?;
        if let Some(object) = self.get_mut(entry.id) {
            object.transform.position = entry.previous;
        }
        Some(entry)
    }
}

impl ObjectHost for Scene {
    type Id = ObjectId;

    /// 存在しないIDは原点として扱う
    fn position(&self, id: ObjectId) -> Vec3 {
        self.get(id).map(|o| o.transform.position).unwrap_or(Vec3::ZERO)
    }

    fn set_position(&mut self, id: ObjectId, position: Vec3) {
        if let Some(object) = self.get_mut(id) {
            object.transform.position = position;
            self.dirty = true;
        }
    }

    fn local_frame(&self, id: ObjectId) -> Frame {
        self.get(id).map(|o| o.transform.frame()).unwrap_or_default()
    }

    /// 存在しないIDは書き込まれないので履歴にも積まない
    fn before_write(&mut self, id: ObjectId, edit: &Edit<ObjectId>) {
        let Some(previous) = self.get(id).map(|o| o.transform.position) else {
            return;
        };
        let message = edit.describe(|base| self.name(base).to_string());
        self.history.push(HistoryEntry { id, previous, message });
    }
}
