use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vitrine-server", about = "Vitrine marketplace front-end server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/vitrine.toml")]
    pub config: String,

    /// Bind address (overrides config)
    #[arg(long)]
    pub bind: Option<String>,
}
