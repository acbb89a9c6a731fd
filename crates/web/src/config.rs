use clap::Parser;

/// Serve random legal chess moves over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "chess-bot-web", version, about)]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "CHESS_BOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "CHESS_BOT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(
        long,
        env = "CHESS_BOT_LOG",
        default_value = "chess_bot_web=info,tower_http=info"
    )]
    pub log_filter: String,
}
