//! 作业进度聚合服务
//!
//! 拉取名册与提交、收敛最新提交、计算统计，并维护按作业缓存的进度快照。
//! 评分确认后通过 `merge_grade_into_snapshot` 就地合并快照，避免整体重拉。

pub mod aggregate;
pub mod latest;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::{CacheResult, ObjectCache};
use crate::storage::Storage;

/// 进度快照缓存键
pub(crate) fn snapshot_key(assignment_id: i64) -> String {
    format!("progress:{assignment_id}")
}

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<dyn ObjectCache> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .expect("Cache not found in app data")
            .get_ref()
            .clone()
    }

    /// 获取作业进度（名册 + 最新提交 + 统计）
    pub async fn get_assignment_progress(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        aggregate::get_assignment_progress(self, request, assignment_id).await
    }

    /// 按展示顺序找下一份待评分提交
    pub async fn get_next_ungraded(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        current_id: i64,
    ) -> ActixResult<HttpResponse> {
        aggregate::get_next_ungraded(self, request, assignment_id, current_id).await
    }

    /// 把服务端确认的评分合并进缓存的进度快照
    ///
    /// 只在权威写入成功之后调用。快照未命中或条目不存在时不做任何事
    /// （下次聚合会重建快照）；统计随合并重算。
    pub async fn merge_grade_into_snapshot(
        cache: &Arc<dyn ObjectCache>,
        assignment_id: i64,
        submission_id: i64,
        grade: Option<f64>,
        feedback: Option<String>,
    ) {
        use crate::models::progress::responses::AssignmentProgressResponse;

        let key = snapshot_key(assignment_id);

        let json = match cache.get_raw(&key).await {
            CacheResult::Found(json) => json,
            _ => return,
        };

        let mut snapshot: AssignmentProgressResponse = match serde_json::from_str(&json) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                // 损坏的快照直接丢弃
                cache.remove(&key).await;
                return;
            }
        };

        latest::apply_grade(
            snapshot
                .entries
                .iter_mut()
                .filter_map(|entry| entry.latest_submission.as_mut()),
            submission_id,
            grade,
            feedback,
        );

        snapshot.metrics = latest::compute_metrics(
            snapshot
                .entries
                .iter()
                .filter_map(|entry| entry.latest_submission.as_ref()),
        );

        if let Ok(updated) = serde_json::to_string(&snapshot) {
            cache.insert_raw(key, updated, 0).await;
        }
    }
}
