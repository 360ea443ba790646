//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 各表之间不建立关联，课表中的引用 ID 不做校验。

pub mod prelude;

pub mod classrooms;
pub mod courses;
pub mod instructors;
pub mod timetables;
pub mod users;

/// 解码以 JSON 数组文本存储的字符串列表
pub(crate) fn decode_text_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::warn!("无法解析列表字段 '{}': {}", raw, e);
        Vec::new()
    })
}

/// 编码字符串列表为 JSON 数组文本
pub(crate) fn encode_text_list(items: &[String]) -> crate::errors::Result<String> {
    Ok(serde_json::to_string(items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_list_encoding() {
        let items = vec!["08:00-10:00".to_string(), "Fri \"late\"".to_string()];
        let raw = encode_text_list(&items).unwrap();
        assert_eq!(decode_text_list(&raw), items);
        assert_eq!(encode_text_list(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_corrupt_text_list_decodes_empty() {
        assert!(decode_text_list("not-json").is_empty());
    }
}
