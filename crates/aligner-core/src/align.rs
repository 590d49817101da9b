//! 整列（Center / Target）
//!
//! - Center: 全オブジェクトの平均位置に選択軸を揃える
//! - Target: 基準オブジェクトの軸成分（World）またはローカル軸の直線（Local）に揃える

use crate::axis::{Axis, Projection, Space, project};
use crate::error::{AlignError, ensure_count};
use crate::host::{Edit, ObjectHost, commit};
use crate::math::{Vec3, closest_point_on_line};
use crate::selection::OperationKind;

/// 選択軸を平均位置に揃える
///
/// 選択軸以外の成分は変更しない。`Axis::All` は受け付けない。
/// 書き込んだオブジェクト数を返す。
pub fn align_to_center<H: ObjectHost>(
    host: &mut H,
    objects: &[H::Id],
    axis: Axis,
) -> Result<usize, AlignError> {
    let operation = OperationKind::AlignCenter;
    if !axis.is_single() {
        tracing::warn!("[align] center rejected: axis={}", axis);
        return Err(AlignError::InvalidAxis { operation, axis });
    }
    ensure_count(operation, objects.len()).inspect_err(|err| {
        tracing::warn!("[align] center rejected: {}", err);
    })?;

    let positions: Vec<Vec3> = objects.iter().map(|&id| host.position(id)).collect();
    let center = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;

    tracing::debug!(
        "[align] center axis={} count={} center={:?}",
        axis,
        objects.len(),
        center
    );

    let writes = objects
        .iter()
        .zip(positions)
        .map(|(&id, position)| (id, axis.merge(position, center)))
        .collect();

    Ok(commit(host, writes, &Edit::AlignCenter { axis }))
}

/// 基準オブジェクトに揃える
///
/// - World: 基準の選択軸成分をそのままコピー
/// - Local: 基準のローカル軸（right/up/forward）を通る直線上の最近点へ移動
///
/// 基準オブジェクト自身は移動しない（`objects` に含まれていてもスキップ）。
/// 書き込んだオブジェクト数を返す。
pub fn align_to_target<H: ObjectHost>(
    host: &mut H,
    objects: &[H::Id],
    base: H::Id,
    axis: Axis,
    space: Space,
) -> Result<usize, AlignError> {
    let operation = OperationKind::AlignTarget;
    let base_position = host.position(base);
    let frame = match space {
        Space::World => Default::default(),
        Space::Local => host.local_frame(base),
    };

    // 軸の検証を選択数より先に行う（どちらも書き込み前）
    let projection = project(base_position, axis, &frame, space, operation).inspect_err(|err| {
        tracing::warn!("[align] target rejected: {}", err);
    })?;
    ensure_count(operation, objects.len()).inspect_err(|err| {
        tracing::warn!("[align] target rejected: {}", err);
    })?;

    tracing::debug!(
        "[align] target base={:?} axis={} space={:?} count={}",
        base,
        axis,
        space,
        objects.len()
    );

    let writes = objects
        .iter()
        .filter(|&&id| id != base)
        .map(|&id| {
            let position = host.position(id);
            let aligned = match projection {
                Projection::Component(value) => axis.merge(position, Vec3::splat(value)),
                Projection::Direction(dir) => closest_point_on_line(dir, base_position, position),
            };
            (id, aligned)
        })
        .collect();

    Ok(commit(host, writes, &Edit::AlignTarget { base, axis, space }))
}
