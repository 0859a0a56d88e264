use crate::application::settings::CredentialStatus;
use crate::domain::model::TranslationOutcome;
use colored::Colorize;
use std::fmt::Write;

/// Format a round's outcomes, one block per provider.
pub fn format_outcomes(outcomes: &[TranslationOutcome]) -> String {
    let mut output = String::new();
    let cutoff = "⸺".repeat(40);

    for (i, outcome) in outcomes.iter().enumerate() {
        if i > 0 {
            writeln!(output, "{}", cutoff.bright_black().dimmed()).ok();
        }

        if outcome.is_error {
            let kind = outcome
                .error_kind
                .map(|k| format!("{:?}", k))
                .unwrap_or_default();
            writeln!(
                output,
                "{} {}",
                outcome.provider.red().bold(),
                format!("[{}]", kind).bright_black()
            )
            .ok();
            writeln!(output, "  {}", outcome.text.red()).ok();
        } else {
            writeln!(output, "{}", outcome.provider.bright_magenta().bold()).ok();
            for line in outcome.text.lines() {
                writeln!(output, "  {}", line.white()).ok();
            }
        }
    }

    output
}

pub fn format_status(statuses: &[CredentialStatus], config_path: Option<String>) -> String {
    let mut output = String::new();
    writeln!(output, "{}", "polyglot Status".green().bold()).ok();
    writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━").ok();
    writeln!(
        output,
        "Config: {}",
        config_path.unwrap_or_else(|| "Not found".to_string())
    )
    .ok();

    for status in statuses {
        let state = match &status.preview {
            Some(preview) => format!("Configured ({})", preview).green().to_string(),
            None => "Not configured".yellow().to_string(),
        };
        writeln!(output, "{} API: {}", status.provider, state).ok();
    }

    output
}
