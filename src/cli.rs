use clap::Parser;
use licensed_client::{LicensedClient, Settings, Tier};
use serde_json::{Map, Value};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "licensed-client",
    about = "Validate a license key and forward a JSON payload to the licensed API"
)]
pub struct Args {
    /// License key (overrides settings.json)
    #[arg(long, short = 'k')]
    pub license_key: Option<String>,

    /// Subscription tier: free, basic, pro or enterprise (overrides settings.json)
    #[arg(long, short)]
    pub tier: Option<String>,

    /// JSON object to send as the request payload
    #[arg(long, short, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Only check the license format; no request is made
    #[arg(long)]
    pub check: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(long, short)]
    pub verbose: bool,
}

pub async fn run(args: Args) -> ExitCode {
    let settings = match load_settings(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (license_key, tier) = resolve(&args, settings);
    tracing::debug!(%tier, has_key = license_key.is_some(), "resolved client options");

    let client = match LicensedClient::new(license_key, tier) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        return if client.validate_license() {
            println!("License is valid for tier '{}'", client.tier());
            ExitCode::SUCCESS
        } else {
            println!("License is not valid for tier '{}'", client.tier());
            ExitCode::FAILURE
        };
    }

    let data = match read_payload(&args) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Invalid payload: {e}");
            return ExitCode::FAILURE;
        }
    };

    match client.api_call(&data).await {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Failed to render response: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Settings are only read when a flag leaves something to fill in.
fn load_settings(args: &Args) -> licensed_client::config::Result<Settings> {
    if args.license_key.is_some() && args.tier.is_some() {
        return Ok(Settings::default());
    }
    Settings::load()
}

/// Flags win over settings; the tier falls back to free.
fn resolve(args: &Args, settings: Settings) -> (Option<String>, Tier) {
    let license_key = args.license_key.clone().or(settings.license_key);
    let tier = args
        .tier
        .as_deref()
        .or(settings.tier.as_deref())
        .map(Tier::from)
        .unwrap_or_default();
    (license_key, tier)
}

fn read_payload(args: &Args) -> Result<Map<String, Value>, Box<dyn std::error::Error>> {
    let text = match (&args.data, &args.data_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Ok(Map::new()),
    };
    Ok(serde_json::from_str(&text)?)
}
