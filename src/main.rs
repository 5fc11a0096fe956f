mod cli;
mod notification;
mod robot;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use notification::{Notification, Severity};
use robot::Robot;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the webhook response
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let severity = Severity::from_label(&cli.severity);
    let notification = Notification::new(cli.subject, cli.message, severity);

    tracing::debug!(
        "Built card for '{}' ({:?}, template: {}, recovery: {})",
        notification.subject(),
        severity,
        notification.card_color().as_str(),
        notification.is_recovery()
    );

    let robot = Robot::new(&cli.api_url, &cli.token);
    let response = robot.send(&notification.to_card()).await?;

    tracing::info!("Sent alert '{}' to Feishu", notification.subject());
    println!("{}", response);

    Ok(())
}
