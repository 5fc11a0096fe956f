use clap::Parser;

pub const DEFAULT_API_URL: &str = "https://open.feishu.cn/open-apis/bot/v2/hook/";

#[derive(Parser, Debug)]
#[command(
    name = "feishu-robot",
    version,
    about = "Forward Zabbix alerts into a Feishu group chat as interactive cards",
    long_about = None
)]
pub struct Cli {
    /// Alert subject, shown as the card title
    pub subject: String,

    /// Alert body, rendered as markdown in the card
    pub message: String,

    /// Feishu bot webhook token
    pub token: String,

    /// Zabbix severity label (Not classified, Information, Warning, Average, High, Disaster)
    #[arg(default_value = "Not classified")]
    pub severity: String,

    /// Webhook base URL the token is appended to
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
