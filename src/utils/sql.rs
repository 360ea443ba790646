/// 判断数据库错误信息是否为唯一约束冲突
///
/// 覆盖 SQLite、PostgreSQL 与 MySQL 的错误文本。
pub fn is_unique_violation(message: &str) -> bool {
    message.contains("UNIQUE constraint failed")
        || message.contains("duplicate key value")
        || message.contains("Duplicate entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_messages() {
        assert!(is_unique_violation(
            "Database Operation Error: UNIQUE constraint failed: users.email"
        ));
        assert!(is_unique_violation(
            "duplicate key value violates unique constraint \"users_email_key\""
        ));
        assert!(is_unique_violation("Duplicate entry 'a@b.c' for key 'email'"));
        assert!(!is_unique_violation("FOREIGN KEY constraint failed"));
    }
}
