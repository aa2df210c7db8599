// SPDX-License-Identifier: MPL-2.0
use agency_desk::app::{self, Flags};
use agency_desk::logging;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let verbose = args.contains(["-v", "--verbose"]);
    logging::init(verbose);

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let config_dir = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        });

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "unrecognized argument");
    }

    app::run(Flags { lang, config_dir })
}
