// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Board command-line host
//!
//! Drives the activity board against a running activities API and prints the
//! resulting page.

use activity_board::{
    config::Config,
    services::ActivitiesClient,
    ui::{EventTarget, Page, UiEvent},
    App,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "activity-board",
    version,
    about = "Browse and manage extracurricular activity signups"
)]
struct Cli {
    /// Base URL of the activities API (overrides ACTIVITIES_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,
    /// Output format for the page
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all activities
    Show,
    /// Sign a student up for an activity
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
    },
    /// Remove a student from an activity
    Unregister {
        #[arg(long)]
        email: String,
        #[arg(long)]
        activity: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Html,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    let app = App::new(
        ActivitiesClient::new(config.api_url.clone()),
        config.message_timings(),
    );
    app.start().await;

    match cli.command {
        Command::Show => {}
        Command::Signup { email, activity } => {
            app.set_signup_form(&email, &activity);
            app.dispatch(UiEvent::Submit).await;
        }
        Command::Unregister { email, activity } => {
            let target = EventTarget::unregister(&email, &activity);
            app.dispatch(UiEvent::Click(target)).await;
        }
    }

    print_page(&app.page(), cli.format)
}

fn print_page(page: &Page, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Html => println!("{}", page.to_html()?),
        Format::Text => {
            if page.message.is_visible() {
                println!("[{:?}] {}", page.message.state(), page.message.text());
                println!();
            }
            println!("{}", page.text_content());
        }
    }
    Ok(())
}

/// Initialize structured JSON logging on stderr; stdout carries the page.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("activity_board=debug,info")),
        )
        .with(format)
        .init();
}
