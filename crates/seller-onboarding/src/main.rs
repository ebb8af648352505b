//! Seller onboarding - command-line entry point.

use anyhow::Context;
use clap::Parser;
use seller_onboarding::{Config, OnboardingResult, RegistrationForm};
use supabase_client::SupabaseClient;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Register a WhatsApp number for a shop.
#[derive(Debug, Parser)]
#[command(name = "seller-onboarding")]
#[command(about = "Map a seller's WhatsApp number to their shop")]
struct Args {
    /// WhatsApp phone number, e.g. +919800000000
    #[arg(long)]
    phone: String,

    /// Shop / marketplace id
    #[arg(long)]
    shop_id: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> OnboardingResult<()> {
    let args = Args::parse();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    let level = if args.verbose { "debug" } else { config.log.level.as_str() };
    init_logging(level);

    info!("Starting seller onboarding");

    let client = SupabaseClient::new(
        &config.supabase.url,
        &config.supabase.anon_key,
        config.supabase.access_token.clone(),
        config.supabase.timeout,
    )?;

    if client.health_check().await {
        info!("Supabase reachable at {}", client.base_url());
    } else {
        warn!("Supabase not reachable at {} - submitting anyway", client.base_url());
    }

    if !client.has_session() {
        warn!("SUPABASE__ACCESS_TOKEN not set, the seller will be treated as signed out");
    }

    let form = RegistrationForm::new(client);
    form.set_phone(args.phone);
    form.set_shop_id(args.shop_id);

    form.submit().await?;

    let state = form.snapshot();
    print!("{}", form.render());

    let exit_code = state.exit_code();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
