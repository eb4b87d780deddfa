//! Custom logger initialization to exclude timestamps but keep colors.
//!
//! Use FIELDMARK_LOG=info or FIELDMARK_LOG=debug environment variable to
//! increase verbosity. Example: FIELDMARK_LOG=debug cargo run

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

pub fn init_custom_logger(debug: bool) {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            // Do nothing, effectively removing timestamps
            Ok(())
        }
    }

    // The --debug flag raises the default; FIELDMARK_LOG overrides both
    let default_level = std::env::var("FIELDMARK_LOG")
        .unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string());
    let default_directive = default_level
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true); // Keep colors

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(
                    tracing_subscriber::filter::EnvFilter::from_default_env()
                        .add_directive(default_directive)
                        // Suppress very noisy render layer messages completely
                        .add_directive("wgpu_core=error".parse().unwrap())
                        .add_directive("wgpu_hal=error".parse().unwrap())
                        .add_directive("bevy_render=error".parse().unwrap()),
                ),
        )
        .init();
}
