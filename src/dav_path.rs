use crate::error::AppError;

pub fn normalize(path: &str) -> String {
    let mut normalized = path.to_string();
    while normalized.ends_with('/') && normalized.len() > 1 {
        normalized.pop();
    }
    normalized
}

/// Joins a child name onto a DAV path, collapsing redundant separators.
pub fn join(base: &str, name: &str) -> String {
    let base = normalize(base);
    let name = name.trim_start_matches('/');
    if name.is_empty() {
        return base;
    }
    if base == "/" {
        return format!("/{name}");
    }
    format!("{base}/{name}")
}

pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

pub fn parent(path: &str) -> Option<String> {
    let normalized = normalize(path);
    if normalized == "/" {
        return None;
    }
    match normalized.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(normalized[..idx].to_string()),
        None => None,
    }
}

/// Rejects paths that are empty, relative, or climb out of the served tree.
pub fn validate(path: &str) -> Result<(), AppError> {
    if path.is_empty() {
        return Err(AppError::InvalidParams("path is empty".to_string()));
    }
    if !path.starts_with('/') {
        return Err(AppError::InvalidParams(format!("path is not absolute: {path}")));
    }
    if path.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(AppError::InvalidParams(
            "path traversal (.. component) not allowed".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize("/current/IMG_0001/"), "/current/IMG_0001");
        assert_eq!(normalize("/current///"), "/current");
        assert_eq!(normalize("/"), "/");
    }

    #[test]
    fn backslashes_are_ordinary_name_characters() {
        assert_eq!(normalize("/current/IMG\\0001/"), "/current/IMG\\0001");
        assert_eq!(
            join("/current/IMG\\0001", "FullSizeRender.jpg"),
            "/current/IMG\\0001/FullSizeRender.jpg"
        );
        assert_eq!(base_name("/current/IMG\\0001"), "IMG\\0001");
    }

    #[test]
    fn join_handles_root_and_slashes() {
        assert_eq!(
            join("/current/IMG_0001", "FullSizeRender.jpg"),
            "/current/IMG_0001/FullSizeRender.jpg"
        );
        assert_eq!(join("/current/IMG_0001/", "/a.jpg"), "/current/IMG_0001/a.jpg");
        assert_eq!(join("/", "archive"), "/archive");
        assert_eq!(join("/archive", ""), "/archive");
    }

    #[test]
    fn base_name_returns_last_segment() {
        assert_eq!(base_name("/archive/VID_ARCHIVED_0099"), "VID_ARCHIVED_0099");
        assert_eq!(base_name("/archive/VID_ARCHIVED_0099/"), "VID_ARCHIVED_0099");
        assert_eq!(base_name("note.txt"), "note.txt");
    }

    #[test]
    fn parent_walks_up_one_level() {
        assert_eq!(parent("/current/IMG_0001").as_deref(), Some("/current"));
        assert_eq!(parent("/current").as_deref(), Some("/"));
        assert_eq!(parent("/"), None);
    }

    #[test]
    fn validate_rejects_traversal_and_relative() {
        assert!(validate("/current/IMG_0001").is_ok());
        assert!(validate("").is_err());
        assert!(validate("current").is_err());
        assert!(validate("/current/../etc").is_err());
    }
}
