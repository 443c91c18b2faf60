//! Doctor command - verify configuration and credentials.

use crate::cli::Output;
use crate::config::{Prompts, Settings, API_KEY_ENV};
use console::style;
use url::Url;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("TubeTutor Doctor");
    println!();

    let checks = vec![
        check_api_key(settings),
        check_endpoint("oEmbed endpoint", &settings.youtube.oembed_endpoint),
        check_endpoint("Watch URL", &settings.youtube.watch_url),
        check_languages(settings),
        check_prompts(settings),
        check_config_file(),
    ];

    for check in &checks {
        check.print();
    }
    println!();

    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!("{} error(s) found.", errors));
        anyhow::bail!("doctor found {} error(s)", errors);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! TubeTutor is ready to use.");
    }

    Ok(())
}

/// Mask all but the first and last few characters of a key.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 11 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

fn check_api_key(settings: &Settings) -> CheckResult {
    let hint = format!("Set openai.api_key in the config file or export {}='sk-...'", API_KEY_ENV);
    if !settings.has_api_key() {
        // Startup still succeeds; completions will not.
        return CheckResult::error("API key", "not set", &hint);
    }

    let key = settings.api_key();
    if key.starts_with("sk-") {
        CheckResult::ok("API key", &format!("configured ({})", mask_key(&key)))
    } else {
        CheckResult::warning("API key", "set but format looks unusual", "Expected format: sk-...")
    }
}

fn check_endpoint(name: &str, endpoint: &str) -> CheckResult {
    match Url::parse(endpoint) {
        Ok(_) => CheckResult::ok(name, endpoint),
        Err(e) => CheckResult::error(name, &format!("invalid URL: {}", e), "Fix the [youtube] section of the config"),
    }
}

fn check_languages(settings: &Settings) -> CheckResult {
    if settings.youtube.languages.is_empty() {
        CheckResult::error(
            "Transcript languages",
            "empty",
            "Set youtube.languages, e.g. [\"en\"]",
        )
    } else {
        CheckResult::ok("Transcript languages", &settings.youtube.languages.join(", "))
    }
}

fn check_prompts(settings: &Settings) -> CheckResult {
    match (&settings.prompts.custom_dir, Prompts::from_settings(settings)) {
        (_, Err(e)) => CheckResult::error("Prompts", &e.to_string(), "Fix or remove the custom prompt files"),
        (Some(dir), Ok(_)) => CheckResult::ok("Prompts", &format!("custom ({})", dir)),
        (None, Ok(_)) => CheckResult::ok("Prompts", "built-in"),
    }
}

fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            &format!("Create {} to customize", config_path.display()),
        )
    }
}
