// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        message: args.opt_value_from_str("--message")?,
        alert: args.opt_value_from_str("--alert")?,
        duration_ms: args.opt_value_from_str("--duration")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_toasts=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_flags(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(%err, "invalid command line");
            eprintln!(
                "usage: iced_toasts [--message <text>] [--alert <none|success|info|warning|error>] \
                 [--duration <ms>] [--config-dir <dir>]"
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
