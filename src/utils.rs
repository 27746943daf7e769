use serde::Serializer;

/// Formats a track length in seconds as `M:SS`. Minutes are not wrapped into hours.
pub fn format_duration(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// `serialize_with` adapter so listing rows carry raw seconds but render `M:SS`.
pub fn serialize_duration<S>(seconds: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_duration(*seconds))
}

/// Wraps `query` in `%...%` for a literal substring `LIKE` match.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(125), "2:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(3600), "60:00");
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(-5), "0:00");
    }

    #[test]
    fn test_serialize_duration() {
        #[derive(Serialize)]
        struct Row {
            #[serde(serialize_with = "serialize_duration")]
            duration: i32,
        }

        let json = serde_json::to_value(Row { duration: 245 }).unwrap();
        assert_eq!(json, serde_json::json!({ "duration": "4:05" }));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ali"), "%ali%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
