use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

use crate::{
    index::{DEFAULT_INODE_SEED, MAX_INODE_SEED},
    model::error::ExportError,
    util::object::{self, Location},
};

#[derive(Clone, Debug)]
pub struct Config {
    pub location: Location,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub inode_seed: u64,
}

pub fn command() -> Command {
    Command::new("objectdu")
        .about("Export an object storage listing as an ncdu JSON dump")
        .version(clap::crate_version!())
        .arg(
            Arg::new("SOURCE")
                .help("s3://bucket/prefix or gs://bucket/prefix")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("file to write the export to, stdout when omitted")
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("inode-seed")
                .long("inode-seed")
                .help("first synthetic inode number")
                .value_parser(value_parser!(u64).range(..=MAX_INODE_SEED))
                .default_value("9001"),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, ExportError> {
        let source = matches
            .get_one::<String>("SOURCE")
            .map(String::as_str)
            .unwrap_or("");

        Ok(Self {
            location: object::parse_location(source)?,
            output: matches.get_one::<PathBuf>("OUTPUT").cloned(),
            inode_seed: matches
                .get_one::<u64>("inode-seed")
                .copied()
                .unwrap_or(DEFAULT_INODE_SEED),
        })
    }
}
