use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 名册学生
///
/// 名册行由教师维护，可选关联一个登录账号（user_id）。
/// 提交记录通过 student_id 引用名册行，而不是登录账号。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Student {
    pub id: i64,
    pub section_id: i64,
    pub user_id: Option<i64>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 显示姓名：姓, 名 中间名缩写
    pub fn display_name(&self) -> String {
        match &self.middle_name {
            Some(middle) if !middle.is_empty() => {
                let initial = middle.chars().next().unwrap_or_default();
                format!("{}, {} {}.", self.last_name, self.first_name, initial)
            }
            _ => format!("{}, {}", self.last_name, self.first_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: &str, middle: Option<&str>, last: &str) -> Student {
        Student {
            id: 1,
            section_id: 1,
            user_id: None,
            first_name: first.to_string(),
            middle_name: middle.map(|m| m.to_string()),
            last_name: last.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_display_name_with_middle() {
        let s = student("Maria", Some("Clara"), "Santos");
        assert_eq!(s.display_name(), "Santos, Maria C.");
    }

    #[test]
    fn test_display_name_without_middle() {
        let s = student("Jose", None, "Rizal");
        assert_eq!(s.display_name(), "Rizal, Jose");
    }
}
