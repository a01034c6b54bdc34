use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static SCHOOL_YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("Invalid school year regex"));

pub fn validate_username(username: &str) -> Result<(), &'static str> {
    // 用户名长度校验：5 <= x <= 16
    if username.len() < 5 || username.len() > 16 {
        return Err("Username length must be between 5 and 16 characters");
    }
    // 用户名格式校验：只能包含字母、数字、下划线或连字符
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters, numbers, underscores or hyphens");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验学年格式（如 2025-2026，且后一年必须紧随前一年）
pub fn validate_school_year(school_year: &str) -> Result<(), &'static str> {
    if !SCHOOL_YEAR_RE.is_match(school_year) {
        return Err("School year must be in YYYY-YYYY format");
    }
    let (start, end) = school_year.split_at(4);
    let start: i32 = start.parse().map_err(|_| "School year is invalid")?;
    let end: i32 = end[1..].parse().map_err(|_| "School year is invalid")?;
    if end != start + 1 {
        return Err("School year must span two consecutive years");
    }
    Ok(())
}

/// 校验名册姓名字段（first/last name 必填，长度受限）
pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name must not be empty");
    }
    if trimmed.len() > 64 {
        return Err("Name must be at most 64 characters");
    }
    Ok(())
}

/// 校验评分：必须是有限值且在 [0, max_score] 范围内
pub fn validate_grade(grade: f64, max_score: f64) -> Result<(), String> {
    if !grade.is_finite() {
        return Err("Grade must be a finite number".to_string());
    }
    if grade < 0.0 || grade > max_score {
        return Err(format!("Grade must be between 0 and {max_score}"));
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 最小长度：8 字符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    // 1. 长度检查：至少 8 个字符
    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }

    // 2. 大写字母检查
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }

    // 3. 小写字母检查
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }

    // 4. 数字检查
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    // 5. 常见弱密码检查
    let weak_passwords = [
        "password",
        "12345678",
        "123456789",
        "qwerty123",
        "admin123",
        "password1",
        "Password1",
        "Qwerty123",
        "Abcd1234",
    ];
    if weak_passwords
        .iter()
        .any(|&weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// 简化的密码验证（返回 Result）
pub fn validate_password_simple(password: &str) -> Result<(), String> {
    let result = validate_password(password);
    if result.is_valid {
        Ok(())
    } else {
        Err(result.error_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecureP@ss1").is_valid);
        assert!(validate_password("MyP@ssw0rd").is_valid);
        assert!(validate_password("SecurePass123").is_valid);
    }

    #[test]
    fn test_short_password() {
        let result = validate_password("Ab1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password must be at least 8 characters long")
        );
    }

    #[test]
    fn test_common_password() {
        let result = validate_password("Password1");
        assert!(!result.is_valid);
        assert!(
            result
                .errors
                .contains(&"Password is too common, please choose a stronger password")
        );
    }

    #[test]
    fn test_school_year() {
        assert!(validate_school_year("2025-2026").is_ok());
        assert!(validate_school_year("2025-2027").is_err());
        assert!(validate_school_year("2025/2026").is_err());
        assert!(validate_school_year("25-26").is_err());
    }

    #[test]
    fn test_person_name() {
        assert!(validate_person_name("Maria").is_ok());
        assert!(validate_person_name("  ").is_err());
        assert!(validate_person_name(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_grade_range() {
        assert!(validate_grade(0.0, 100.0).is_ok());
        assert!(validate_grade(100.0, 100.0).is_ok());
        assert!(validate_grade(100.5, 100.0).is_err());
        assert!(validate_grade(-1.0, 100.0).is_err());
        assert!(validate_grade(f64::NAN, 100.0).is_err());
    }
}
