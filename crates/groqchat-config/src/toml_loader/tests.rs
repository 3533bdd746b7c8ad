use super::*;

fn write(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = read_toml(&path).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(p) if p == path));
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        r#"
[provider]
default_model = "gemma2-9b-it"
read_timeout_secs = 30

[ui]
show_examples = false
"#,
    );

    let config = read_toml(&path).unwrap();
    assert_eq!(config.provider.default_model, "gemma2-9b-it");
    assert_eq!(config.provider.read_timeout_secs, 30);
    assert!(!config.ui.show_examples);
    assert_eq!(config.provider.base_url, "https://api.groq.com");
    assert_eq!(config.ui.cursor, "▌");
}

#[test]
fn malformed_toml_is_parse_error_naming_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "this is not valid toml {{{");
    match read_toml(&path).unwrap_err() {
        ConfigError::ParseError(msg) => assert!(msg.contains("config.toml")),
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn out_of_range_values_are_read_without_judgement() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "[provider]\nconnect_timeout_secs = 500\n");
    assert_eq!(read_toml(&path).unwrap().provider.connect_timeout_secs, 500);
}

#[test]
fn template_reads_back_as_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    write_template(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[provider]"));
    assert!(content.contains("GROQ_API_KEY"));

    let config = read_toml(&path).unwrap();
    let defaults = GroqchatConfig::default();
    assert_eq!(config.provider.default_model, defaults.provider.default_model);
    assert_eq!(config.provider.read_timeout_secs, defaults.provider.read_timeout_secs);
    assert_eq!(config.logging.level, defaults.logging.level);
}

#[test]
fn config_path_is_under_groqchat_dir() {
    if let Ok(path) = config_path() {
        assert!(path.ends_with("groqchat/config.toml"));
    }
}
