//! 均等分配
//!
//! 最初/最後のアンカー間にオブジェクトを等間隔に並べる。
//! 並び順はアンカーAからの符号付き距離（A→B方向との内積の符号）で決まり、
//! 同じ距離のオブジェクトは元の順序を保つ。

use crate::axis::Axis;
use crate::error::{AlignError, ensure_count, ensure_index};
use crate::host::{Edit, ObjectHost, commit};
use crate::math::{Vec3, project_onto_axis, signed_distance};
use crate::selection::{AnchorSelection, OperationKind};

/// 分配計算中の1エントリ
#[derive(Debug, Clone, Copy)]
struct DistributionEntry<Id> {
    id: Id,
    position: Vec3,
    signed_distance: f32,
    is_anchor: bool,
}

/// アンカー間にオブジェクトを均等に分配する
///
/// - `axis` が X/Y/Z の場合はA→Bベクトルをその軸に射影した長さで間隔を決め、その成分のみ書き換える
/// - `axis` が All の場合はA→Bベクトルそのものを使い、位置全体を書き換える
///
/// アンカー自身は移動しない。書き込んだオブジェクト数を返す。
pub fn distribute<H: ObjectHost>(
    host: &mut H,
    objects: &[H::Id],
    first: usize,
    last: usize,
    axis: Axis,
) -> Result<usize, AlignError> {
    let operation = OperationKind::Distribute;
    let len = objects.len();

    let validated = ensure_count(operation, len)
        .and_then(|_| ensure_index(first, len))
        .and_then(|_| ensure_index(last, len))
        .and_then(|_| {
            if first == last {
                Err(AlignError::IdenticalAnchors { index: first })
            } else {
                Ok(())
            }
        });
    if let Err(err) = validated {
        tracing::warn!("[distribute] rejected: {}", err);
        return Err(err);
    }

    let anchors = AnchorSelection::new(first, last);
    let start = host.position(objects[first]);
    let end = host.position(objects[last]);
    let span = end - start;

    // 1. 符号付き距離を計算
    let mut entries: Vec<DistributionEntry<H::Id>> = objects
        .iter()
        .enumerate()
        .map(|(index, &id)| {
            let position = host.position(id);
            DistributionEntry {
                id,
                position,
                signed_distance: signed_distance(start, span, position),
                is_anchor: anchors.is_anchor(index),
            }
        })
        .collect();

    // 2. 昇順ソート（安定ソートなので同距離は元の順序）
    entries.sort_by(|a, b| a.signed_distance.total_cmp(&b.signed_distance));

    // 3. 間隔と方向（単一軸ならその軸に射影）
    let span = match axis.unit() {
        Some(unit) => project_onto_axis(span, unit),
        None => span,
    };
    let increment = span.length() / (len - 1) as f32;
    let direction = span.normalize_or_zero();

    if direction == Vec3::ZERO {
        tracing::debug!("[distribute] anchors coincide on axis={}, collapsing onto first anchor", axis);
    }

    tracing::debug!(
        "[distribute] axis={} count={} first={} last={} increment={}",
        axis,
        len,
        first,
        last,
        increment
    );

    // 4. アンカー以外を順に配置
    let writes = entries
        .iter()
        .filter(|entry| !entry.is_anchor)
        .enumerate()
        .map(|(k, entry)| {
            let target = start + direction * (increment * (k + 1) as f32);
            (entry.id, axis.merge(entry.position, target))
        })
        .collect();

    Ok(commit(host, writes, &Edit::Distribute { axis }))
}
