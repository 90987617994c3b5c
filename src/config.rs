use crate::errors::RenameError;
use crate::streams::is_std_stream;

pub const DEFAULT_SENTINEL: u8 = b'>';

// Everything a run needs. Paths of None or "-" mean stdin/stdout.
#[derive(Debug, Clone)]
pub struct RenameConfig {
    pub sequence_source_path: Option<String>,
    pub replacement_source_path: String,
    pub output_path: Option<String>,
    pub sentinel: u8,
    pub gzip_out: bool,
    pub progress: bool,
}

impl RenameConfig {
    pub fn new(sequence_source_path: &str, replacement_source_path: &str, output_path: &str) -> Self {
        RenameConfig {
            sequence_source_path: Some(sequence_source_path.to_owned()),
            replacement_source_path: replacement_source_path.to_owned(),
            output_path: Some(output_path.to_owned()),
            sentinel: DEFAULT_SENTINEL,
            gzip_out: false,
            progress: false,
        }
    }

    // Checked later by run(), so conflicting options are reported once.
    pub fn from_matches(args: &clap::ArgMatches) -> Result<Self, RenameError> {
        let names = args
            .get_one::<String>("names")
            .ok_or_else(|| RenameError::Config(String::from("a names file is required")))?;

        let config = RenameConfig {
            sequence_source_path: args.get_one::<String>("input").cloned(),
            replacement_source_path: names.clone(),
            output_path: args.get_one::<String>("output").cloned(),
            sentinel: args.get_one::<u8>("sentinel").copied().unwrap_or(DEFAULT_SENTINEL),
            gzip_out: args.get_flag("gzip-out"),
            progress: args.get_flag("progress"),
        };
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RenameError> {
        if is_std_stream(self.sequence_source_path.as_deref())
            && self.replacement_source_path == "-"
        {
            return Err(RenameError::Config(String::from(
                "the sequences and the names can not both be read from stdin",
            )));
        }
        if self.gzip_out && !is_std_stream(self.output_path.as_deref()) {
            log::warn!("--gzip-out only applies to stdout; compression of a file follows its .gz suffix");
        }
        Ok(())
    }
}

// Value parser for the sentinel option: exactly one ASCII character.
pub fn parse_sentinel(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() && !b.is_ascii_control() => Ok(*b),
        _ => Err(format!("expected a single printable ASCII character, got '{}'", s)),
    }
}
