use serde::{Deserialize, Serialize};

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub availability: Vec<String>, // 可授课时间段
    pub preferred_times: Vec<String>,
}

impl Instructor {
    /// 时间段按字符串完全匹配
    pub fn is_available_at(&self, time_slot: &str) -> bool {
        self.availability.iter().any(|slot| slot == time_slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_is_exact_match() {
        let instructor = Instructor {
            id: "i-1".to_string(),
            name: "Dr. Ada".to_string(),
            availability: vec!["08:00-10:00".to_string(), "Mon 14:00".to_string()],
            preferred_times: vec![],
        };
        assert!(instructor.is_available_at("08:00-10:00"));
        assert!(instructor.is_available_at("Mon 14:00"));
        assert!(!instructor.is_available_at("08:00"));
        assert!(!instructor.is_available_at("mon 14:00"));
    }
}
