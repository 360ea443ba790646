use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

pub const PASSWORD_POLICY_MESSAGE: &str = "Password must be between 6 to 20 characters and contain at least one numeric digit, one uppercase and one lowercase letter.";

const PASSWORD_MIN_LEN: usize = 6;
const PASSWORD_MAX_LEN: usize = 20;

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：local@domain.tld，各段不含空白和 @
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email address.");
    }
    Ok(())
}

/// 行终止符：LF、CR、U+2028、U+2029
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// 验证密码是否符合安全策略
///
/// 策略要求：
/// - 长度：6 到 20 个 UTF-16 码元，不含行终止符
/// - 必须包含：大写字母 + 小写字母 + 数字
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    let len = password.encode_utf16().count();
    let valid = (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len)
        && !password.contains(LINE_TERMINATORS)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase());

    if valid {
        Ok(())
    } else {
        Err(PASSWORD_POLICY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.org").is_ok());
        assert!(validate_email("x@y.z").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("missing-domain@").is_err());
        assert!(validate_email("no-tld@example").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("spa ce@example.com").is_err());
        assert!(validate_email("alice@example.").is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("Abc123").is_ok());
        assert!(validate_password("SecurePass123").is_ok());
        assert!(validate_password("P@ssw0rd!").is_ok());
        assert!(validate_password("Abcdefghijklmnopqr12").is_ok()); // 20 个字符
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(validate_password("Ab1").is_err());
        assert!(validate_password("Ab1cd").is_err()); // 5 个字符
        assert!(validate_password("Abcdefghijklmnopqrs12").is_err()); // 21 个字符
    }

    #[test]
    fn test_password_character_classes() {
        assert_eq!(validate_password("abcd1234"), Err(PASSWORD_POLICY_MESSAGE));
        assert!(validate_password("ABCD1234").is_err());
        assert!(validate_password("AbcdEfgh").is_err());
    }

    #[test]
    fn test_password_rejects_line_breaks() {
        assert!(validate_password("Abc123\nxyz").is_err());
        assert!(validate_password("Abc123\rxyz").is_err());
        assert!(validate_password("Abc123\u{2028}x").is_err());
        assert!(validate_password("Abc123\u{2029}x").is_err());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 20 个字符，但 emoji 占两个码元
        assert!(validate_password("Abcdefghijklmnopq1😀x").is_err());
        assert!(validate_password("Abcdefghijklmnop1😀x").is_ok());
        assert!(validate_password("Ab1😀x").is_ok());
    }
}
