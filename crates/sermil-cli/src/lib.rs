pub mod report;

use std::path::PathBuf;

use clap::{Arg, Command, ValueHint};

/// Command-line definition for the `sermil` binary.
pub fn build_cli() -> Command {
    Command::new("sermil")
        .version(clap::crate_version!())
        .about("SERMIL - Enlistment exemption proportions by Brazilian region")
        .arg(
            Arg::new("config")
                .help("Path to a JSON report configuration file")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .help(
                    "Prefix of the yearly files; sermil<year>.csv is appended to it. \
                     Overrides the prefix in the configuration file.",
                )
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("start_year")
                .short('s')
                .long("start")
                .help("First year of the range (inclusive). Defaults to 2018.")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("end_year")
                .short('e')
                .long("end")
                .help("Last year of the range (inclusive). Defaults to 2022.")
                .value_parser(clap::value_parser!(i32)),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Write an HTML report here instead of opening the chart in a browser.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
