//! CLI command implementations.

pub mod find;
pub mod tutor;

use bursary_config::AppConfig;
use bursary_core::provider::Usage;

/// Load config and fail with setup guidance when no API key is available.
pub fn load_config_with_key() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if config.api_key.is_none() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    export OPENAI_API_KEY='sk-...'");
        eprintln!("    export BURSARY_API_KEY='sk-...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!(
            "    {}",
            AppConfig::config_dir().join("config.toml").display()
        );
        eprintln!();
        eprintln!("  Get an OpenAI key at: https://platform.openai.com/api-keys");
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    Ok(config)
}

/// Format a token usage caption.
pub fn usage_caption(usage: &Usage) -> String {
    format!(
        "Tokens — prompt: {} • completion: {} • total: {}",
        usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
    )
}

/// Read trimmed lines from stdin until EOF or an exit command.
///
/// Returns `None` on session end. Empty lines are skipped here so command
/// loops only ever see actual input.
pub async fn next_input_line(
    lines: &mut tokio::io::Lines<tokio::io::BufReader<tokio::io::Stdin>>,
) -> Option<String> {
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if matches!(line.as_str(), "exit" | "quit" | "/exit" | "/quit" | ":q") {
                    return None;
                }
                return Some(line);
            }
            Ok(None) => return None, // EOF (Ctrl+D)
            Err(e) => {
                eprintln!("  [Input Error] {e}");
                return None;
            }
        }
    }
}
