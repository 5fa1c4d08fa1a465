//! codec-stub - stdio stub for encoder/decoder communication problems.

use codec_stub::cli::Cli;
use codec_stub::config::Config;
use codec_stub::dispatcher::CommandDispatcher;
use codec_stub::encoder::create_encoder;
use codec_stub::error::Result;
use codec_stub::logging;
use std::io;
use tracing::{debug, error};

fn main() {
    // A missing .env is the normal case
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();

    // Config is loaded before logging so its filter can apply; a load error
    // is reported once the subscriber is up.
    let config = Config::load_from_file(&cli.config_path());
    let configured_filter = config.as_ref().ok().and_then(Config::log_filter);
    logging::init(cli.log_file.as_deref(), configured_filter);

    if let Err(e) = config.and_then(|config| run(&cli, &config)) {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let kind = config.resolve_encoder(cli.encoder_name())?;
    debug!(encoder = %kind, "Resolved encoder");

    let dispatcher = CommandDispatcher::new(create_encoder(kind));
    debug!(encoder = dispatcher.encoder_name(), "Waiting for request");

    let stdin = io::stdin();
    let stdout = io::stdout();
    dispatcher.run(stdin.lock(), &mut stdout.lock())
}
