use std::io::Read;

/// Context window size the usage percentage is relative to, unless overridden.
pub const DEFAULT_CONTEXT_LIMIT: u64 = 200_000;

/// Separator between statusline segments.
pub const SEGMENT_SEPARATOR: &str = " | ";

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Text after the final path separator. Empty for `""`, `"/"` and paths with
/// a trailing separator.
pub fn dir_basename(path: &str) -> &str {
    path.rsplit(['/', std::path::MAIN_SEPARATOR])
        .next()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_basename() {
        assert_eq!(dir_basename("/home/user/proj"), "proj");
        assert_eq!(dir_basename("proj"), "proj");
        assert_eq!(dir_basename("/"), "");
        assert_eq!(dir_basename(""), "");
        assert_eq!(dir_basename("/home/user/proj/"), "");
    }
}
