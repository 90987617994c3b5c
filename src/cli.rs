use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

use crate::config::parse_sentinel;

pub fn build_cli() -> Command {
    Command::new("rename_headers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replace the header lines of a FASTA file with lines from a names file, in order")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Sequence file. Read from stdin if not given or '-'"),
        )
        .arg(
            Arg::new("names")
                .short('n')
                .long("names")
                .help("Replacement names, one line per header in the sequence file")
                .required_unless_present("completions"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output filename. Written to stdout if not given or '-'"),
        )
        .arg(
            Arg::new("gzip-out")
                .long("gzip-out")
                .action(ArgAction::SetTrue)
                .help("Write gzipped output to stdout"),
        )
        .arg(
            Arg::new("sentinel")
                .short('s')
                .long("sentinel")
                .default_value(">")
                .value_parser(parse_sentinel)
                .help("Character that marks a header line"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress spinner on stderr"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("More log output (-v debug, -vv trace)"),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_parser(clap::value_parser!(Shell))
                .exclusive(true)
                .help("Print a shell completion script and exit"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn names_are_required() {
        let res = build_cli().try_get_matches_from(["rename_headers", "-i", "a.fasta"]);
        assert!(res.is_err());
    }

    #[test]
    fn completions_need_no_names() {
        let matches = build_cli()
            .try_get_matches_from(["rename_headers", "--completions", "bash"])
            .unwrap();
        assert_eq!(matches.get_one::<Shell>("completions"), Some(&Shell::Bash));
    }

    #[test]
    fn verbosity_counts() {
        let matches = build_cli()
            .try_get_matches_from(["rename_headers", "-n", "names.txt", "-vv"])
            .unwrap();
        assert_eq!(matches.get_count("verbose"), 2);
        assert_eq!(matches.get_one::<u8>("sentinel"), Some(&b'>'));
    }
}
