use std::path::{Path, PathBuf};

use clap::{command, value_parser, Arg, ArgMatches, Command};

pub struct Config {
    input: PathBuf,
}

impl Config {
    fn from_matches(m: &ArgMatches) -> Self {
        let input = m
            .get_one::<PathBuf>("input")
            .cloned()
            .expect("Missing required input");
        Self { input }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }
}

fn cli_model() -> Command {
    command!()
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Gzip compressed fastq file ('-' for stdin)"),
        )
}

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model().get_matches();

    // stdout carries the report, so all logging goes to stderr
    stderrlog::new()
        .module(env!("CARGO_CRATE_NAME"))
        .verbosity(log::LevelFilter::Warn)
        .init()?;

    Ok(Config::from_matches(&m))
}
