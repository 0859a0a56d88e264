use crate::domain::model::ProviderKind;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "polyglot")]
#[command(about = "Translate with several providers at once and compare the results.")]
#[command(version)]
pub struct Cli {
    /// Source language (e.g. english, chinese); defaults to the config value
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language; defaults to the config value
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Only ask these providers (repeatable)
    #[arg(short = 'p', long = "provider", value_parser = parse_provider)]
    pub providers: Vec<ProviderKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Save an API key for a provider (read from stdin)
    #[arg(long, value_name = "PROVIDER", value_parser = parse_provider)]
    pub set_key: Option<ProviderKind>,

    /// Remove the stored API key of a provider
    #[arg(long, value_name = "PROVIDER", value_parser = parse_provider)]
    pub delete_key: Option<ProviderKind>,

    /// Show configuration and credential status
    #[arg(long)]
    pub status: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

fn parse_provider(s: &str) -> Result<ProviderKind, String> {
    s.parse::<ProviderKind>().map_err(|e| e.to_string())
}
