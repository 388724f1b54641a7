#[macro_use]
extern crate clap;

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use std::process;

use itemcount::api;
use itemcount::console;

const DEFAULT_PORT: u16 = 3000;

static CLI_ARGS: Lazy<ArgMatches> = Lazy::new(|| {
    App::new("itemcount")
        .version(crate_version!())
        .author(crate_authors!())
        .about(
            "A tool for counting occurrences of typed items.\n\
             Runs an interactive menu by default; pass --api to serve the HTTP API instead.",
        )
        .arg(
            Arg::with_name("api")
                .long("api")
                .help("Serve the HTTP API instead of running the interactive menu"),
        )
        .arg(
            Arg::with_name("port")
                .long("port")
                .short("p")
                .takes_value(true)
                .help("The port the HTTP API listens on. Defaults to 3000. Only used with --api."),
        )
        .get_matches()
});

fn run() -> anyhow::Result<()> {
    if CLI_ARGS.is_present("api") {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
        let port = match CLI_ARGS.value_of("port") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("`{}` is not a valid port number", raw))?,
            None => DEFAULT_PORT,
        };
        api::serve(port)
    } else {
        console::run()?;
        Ok(())
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
