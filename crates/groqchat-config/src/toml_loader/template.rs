//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# groqchat configuration
# Only override what you want to change -- missing fields use defaults.

[provider]
# api_key = ""                 # GROQ_API_KEY in the environment takes precedence
# base_url = "https://api.groq.com"
# default_model = "llama-3.3-70b-versatile"   # or "gemma2-9b-it"
# connect_timeout_secs = 10    # 1-120
# read_timeout_secs = 120      # 1-600, max idle time between streamed chunks

[ui]
# show_examples = true
# cursor = "▌"

[logging]
# level = "groqchat=warn"      # any tracing EnvFilter directive
"##
    .to_string()
}
