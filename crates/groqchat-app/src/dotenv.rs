//! Minimal `.env` support (KEY=VALUE lines).

use std::path::PathBuf;

/// Parse `.env` content into key/value pairs. Blank lines and `#` comments
/// are skipped; surrounding quotes are stripped from values.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Load the first `.env` found (current directory, then workspace root) into
/// the process environment. Variables that are already set win.
pub fn load_dotenv() -> Option<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        PathBuf::from(".env"),
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in candidates {
        if let Ok(contents) = std::fs::read_to_string(&path) {
            for (key, value) in parse(&contents) {
                if std::env::var_os(&key).is_none() {
                    std::env::set_var(key, value);
                }
            }
            return Some(path);
        }
    }
    None
}
