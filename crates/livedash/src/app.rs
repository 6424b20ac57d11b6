use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("livedash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Watch simulated business metrics refresh in real time")
        .long_about("livedash generates revenue, customer, balance, billing and transaction metrics and republishes them on a live/paused refresh loop. Snapshots come from a fixed demo fixture or from bounded random noise around realistic baselines.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("snapshot")
                .about("Generate and print a single metrics snapshot")
                .arg(demo_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("watch")
                .about("Run the refresh loop and drive it with shortcut keys from stdin")
                .long_about("Runs the refresh controller and prints every published snapshot. Each line read from stdin is treated as a key press in shortcut notation (p, r, ?, esc, ctrl+r, ...). Enter q to quit.")
                .arg(demo_arg())
                .arg(
                    Arg::new("interval-ms")
                        .long("interval-ms")
                        .help("Live-mode refresh interval in milliseconds (overrides config)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("latency-ms")
                        .long("latency-ms")
                        .help("Simulated fetch latency in milliseconds (overrides config)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("live")
                        .long("live")
                        .help("Start in live mode instead of paused")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("updates")
                        .long("updates")
                        .short('n')
                        .help("Exit after this many published snapshots")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .arg(json_arg()),
        )
        .subcommand(Command::new("shortcuts").about("List keyboard shortcuts grouped by category"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}

fn demo_arg() -> Arg {
    Arg::new("demo")
        .long("demo")
        .help("Use the fixed demo fixture instead of randomized data (overrides config)")
        .action(ArgAction::SetTrue)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Output in JSON format")
        .action(ArgAction::SetTrue)
}
