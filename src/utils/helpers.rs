/// Name reported in the banner and in every error body.
pub fn service_name() -> String {
    std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string())
}

/// Returns the value only when it holds something besides whitespace.
pub fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rejects_missing_and_blank() {
        assert_eq!(filled(None), None);
        assert_eq!(filled(Some(String::new())), None);
        assert_eq!(filled(Some("  \t".into())), None);
        assert_eq!(filled(Some(" Ann ".into())), Some(" Ann ".to_string()));
    }
}
