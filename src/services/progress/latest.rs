//! 最新提交归并与进度统计（纯函数）
//!
//! 进度聚合的核心：把同一作业下无序的提交行收敛为"每个学生一条最新提交"，
//! 并在其上计算提交/评分统计。全部操作针对已取回的内存数据，无副作用。
//!
//! 排序规则：submitted_at 倒序，空值视为最早；submitted_at 相同时
//! attempt 大者为新，仍相同时 id 大者为新。该次序与输入顺序无关。

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::progress::responses::ProgressMetrics;
use crate::models::submissions::entities::Submission;

/// 判断 a 是否比 b 更新
///
/// 时间戳为空的提交永远不会比有时间戳的新；双方都为空或相等时
/// 按 (attempt, id) 决出，保证归并结果与行的到达顺序无关。
fn is_later(a: &Submission, b: &Submission) -> bool {
    match (a.submitted_at, b.submitted_at) {
        (Some(x), Some(y)) if x != y => x > y,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        _ => (a.attempt, a.id) > (b.attempt, b.id),
    }
}

/// 展示顺序：最新的排在最前，无时间戳的排在最后
pub fn display_ordering(a: &Submission, b: &Submission) -> Ordering {
    if is_later(a, b) {
        Ordering::Less
    } else if is_later(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// 将提交集合收敛为 student_id -> 最新提交 的映射
///
/// 空输入得到空映射。不过滤名册之外的学生（孤儿提交原样保留，
/// 由聚合层的名册连接决定是否展示）。
pub fn reduce_latest(submissions: Vec<Submission>) -> HashMap<i64, Submission> {
    let mut latest: HashMap<i64, Submission> = HashMap::new();
    for submission in submissions {
        match latest.get(&submission.student_id) {
            Some(current) if !is_later(&submission, current) => {}
            _ => {
                latest.insert(submission.student_id, submission);
            }
        }
    }
    latest
}

/// 按展示顺序排列最新提交
pub fn sort_for_display(latest: &HashMap<i64, Submission>) -> Vec<Submission> {
    let mut ordered: Vec<Submission> = latest.values().cloned().collect();
    ordered.sort_by(display_ordering);
    ordered
}

/// 对最新提交集合计算统计
///
/// - submitted: submitted_at 非空的条数
/// - graded: grade 非空的条数（不保证 graded <= submitted，
///   评分可能先于 submitted_at 落库）
/// - avg_score: graded > 0 时为评分均值，保留两位小数
///   （`f64::round`，0.5 远离零），否则为 None
pub fn compute_metrics<'a, I>(latest: I) -> ProgressMetrics
where
    I: IntoIterator<Item = &'a Submission>,
{
    let mut submitted = 0i64;
    let mut graded = 0i64;
    let mut score_sum = 0.0f64;

    for submission in latest {
        if submission.submitted_at.is_some() {
            submitted += 1;
        }
        if let Some(grade) = submission.grade {
            graded += 1;
            score_sum += grade;
        }
    }

    let avg_score = if graded > 0 {
        Some((score_sum / graded as f64 * 100.0).round() / 100.0)
    } else {
        None
    };

    ProgressMetrics {
        submitted,
        graded,
        avg_score,
    }
}

/// 将服务端确认的评分合并进内存中的最新提交集合
///
/// 只改写命中条目的 grade/feedback，其余条目与字段不动。
/// id 不存在时是记录在案的宽容行为：集合原样返回，不报错。
pub fn apply_grade<'a, I>(latest: I, submission_id: i64, grade: Option<f64>, feedback: Option<String>)
where
    I: IntoIterator<Item = &'a mut Submission>,
{
    if let Some(entry) = latest.into_iter().find(|s| s.id == submission_id) {
        entry.grade = grade;
        entry.feedback = feedback;
    }
}

/// 在当前展示顺序中找下一份待评分的提交
///
/// 返回顺序中第一条 grade 为空且 id 不等于 current_id 的提交；
/// 不重新排序也不重新拉取，没有则返回 None。
pub fn next_ungraded(ordered: &[Submission], current_id: i64) -> Option<i64> {
    ordered
        .iter()
        .find(|s| s.grade.is_none() && s.id != current_id)
        .map(|s| s.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    fn submission(
        id: i64,
        student_id: i64,
        attempt: i32,
        submitted_at: Option<i64>,
        grade: Option<f64>,
    ) -> Submission {
        Submission {
            id,
            assignment_id: 1,
            student_id,
            attempt,
            answer_text: Some(format!("answer-{id}")),
            file_url: None,
            submitted_at: submitted_at.map(ts),
            grade,
            feedback: None,
            created_at: ts(0),
            updated_at: ts(0),
        }
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        let latest = reduce_latest(vec![]);
        assert!(latest.is_empty());

        let metrics = compute_metrics(latest.values());
        assert_eq!(metrics.submitted, 0);
        assert_eq!(metrics.graded, 0);
        assert_eq!(metrics.avg_score, None);
    }

    #[test]
    fn test_one_entry_per_student() {
        let submissions = vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 10, 2, Some(200), None),
            submission(3, 11, 1, Some(150), None),
            submission(4, 10, 3, Some(50), None), // 更旧的第三次尝试
        ];

        let latest = reduce_latest(submissions.clone());
        assert_eq!(latest.len(), 2);

        // 每个学生保留的条目不早于该学生的任何其他条目（None 视为最早）
        for sub in &submissions {
            let kept = &latest[&sub.student_id];
            assert!(kept.submitted_at >= sub.submitted_at);
        }
        assert_eq!(latest[&10].id, 2);
        assert_eq!(latest[&11].id, 3);
    }

    #[test]
    fn test_null_submitted_at_never_beats_timestamped() {
        let submissions = vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 10, 2, None, None),
        ];

        let latest = reduce_latest(submissions);
        assert_eq!(latest[&10].id, 1);
    }

    #[test]
    fn test_tie_break_attempt_then_id() {
        // submitted_at 相同：attempt 大者胜
        let latest = reduce_latest(vec![
            submission(5, 10, 1, Some(100), None),
            submission(3, 10, 2, Some(100), None),
        ]);
        assert_eq!(latest[&10].id, 3);

        // submitted_at 与 attempt 都相同：id 大者胜
        let latest = reduce_latest(vec![
            submission(5, 10, 1, Some(100), None),
            submission(7, 10, 1, Some(100), None),
        ]);
        assert_eq!(latest[&10].id, 7);
    }

    #[test]
    fn test_reduction_is_order_independent() {
        let a = submission(1, 10, 1, Some(100), None);
        let b = submission(2, 10, 2, Some(100), None);
        let c = submission(3, 11, 1, None, None);
        let d = submission(4, 11, 2, None, None);

        let forward = reduce_latest(vec![a.clone(), b.clone(), c.clone(), d.clone()]);
        let backward = reduce_latest(vec![d, c, b, a]);

        assert_eq!(forward[&10].id, backward[&10].id);
        assert_eq!(forward[&11].id, backward[&11].id);
        assert_eq!(forward[&11].id, 4);
    }

    #[test]
    fn test_display_order_latest_first_nulls_last() {
        let latest = reduce_latest(vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 11, 1, Some(300), None),
            submission(3, 12, 1, None, None),
            submission(4, 13, 1, Some(200), None),
        ]);

        let ordered = sort_for_display(&latest);
        let ids: Vec<i64> = ordered.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_metrics_basic_scenario() {
        // 规约场景：A 两次提交（第二次 90 分），B 一次未评分
        let latest = reduce_latest(vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 10, 2, Some(200), Some(90.0)),
            submission(3, 11, 1, Some(150), None),
        ]);

        assert_eq!(latest.len(), 2);
        assert_eq!(latest[&10].grade, Some(90.0));
        assert_eq!(latest[&11].grade, None);

        let metrics = compute_metrics(latest.values());
        assert_eq!(metrics.submitted, 2);
        assert_eq!(metrics.graded, 1);
        assert_eq!(metrics.avg_score, Some(90.0));
    }

    #[test]
    fn test_graded_can_exceed_submitted() {
        // 评分先于 submitted_at 落库：graded > submitted 是合法状态
        let latest = reduce_latest(vec![submission(1, 10, 1, None, Some(75.0))]);

        let metrics = compute_metrics(latest.values());
        assert_eq!(metrics.submitted, 0);
        assert_eq!(metrics.graded, 1);
        assert!(metrics.graded > metrics.submitted);
        assert_eq!(metrics.avg_score, Some(75.0));
    }

    #[test]
    fn test_avg_score_rounds_to_two_decimals() {
        let latest = reduce_latest(vec![
            submission(1, 10, 1, Some(100), Some(80.0)),
            submission(2, 11, 1, Some(100), Some(85.0)),
            submission(3, 12, 1, Some(100), Some(91.0)),
        ]);

        let metrics = compute_metrics(latest.values());
        // 256 / 3 = 85.333...
        assert_eq!(metrics.avg_score, Some(85.33));
    }

    #[test]
    fn test_avg_score_none_iff_no_grades() {
        let latest = reduce_latest(vec![submission(1, 10, 1, Some(100), None)]);
        let metrics = compute_metrics(latest.values());
        assert_eq!(metrics.graded, 0);
        assert_eq!(metrics.avg_score, None);
    }

    #[test]
    fn test_apply_grade_replaces_matching_entry_only() {
        let mut ordered = vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 11, 1, Some(200), Some(60.0)),
        ];

        apply_grade(ordered.iter_mut(), 1, Some(88.0), Some("不错".to_string()));

        assert_eq!(ordered[0].grade, Some(88.0));
        assert_eq!(ordered[0].feedback.as_deref(), Some("不错"));
        // 其他条目不动
        assert_eq!(ordered[1].grade, Some(60.0));
        assert_eq!(ordered[1].feedback, None);
    }

    #[test]
    fn test_apply_grade_unknown_id_is_noop() {
        let original = vec![
            submission(1, 10, 1, Some(100), None),
            submission(2, 11, 1, Some(200), Some(60.0)),
        ];
        let mut merged = original.clone();

        apply_grade(merged.iter_mut(), 999, Some(100.0), None);

        assert_eq!(merged, original);
    }

    #[test]
    fn test_next_ungraded_in_display_order() {
        let ordered = vec![
            submission(1, 10, 1, Some(300), Some(90.0)),
            submission(2, 11, 1, Some(200), None),
            submission(3, 12, 1, Some(100), None),
        ];

        // 当前正在看 id=2，顺序中第一条未评分且非当前的是 id=3
        assert_eq!(next_ungraded(&ordered, 2), Some(3));
        // 当前在看 id=1（已评分），第一条未评分是 id=2
        assert_eq!(next_ungraded(&ordered, 1), Some(2));
    }

    #[test]
    fn test_next_ungraded_none_when_all_graded() {
        let ordered = vec![
            submission(1, 10, 1, Some(300), Some(90.0)),
            submission(2, 11, 1, Some(200), Some(70.0)),
        ];
        assert_eq!(next_ungraded(&ordered, 1), None);

        // 唯一未评分的就是当前这份
        let ordered = vec![submission(3, 12, 1, Some(100), None)];
        assert_eq!(next_ungraded(&ordered, 3), None);
    }
}
