use std::{error, fmt, io};

#[derive(Debug)]
pub enum RenameError {
    // An input file could not be opened
    Open { path: String, source: io::Error },
    // The output file could not be created
    Create { path: String, source: io::Error },
    // Read or write failure in the middle of the pass
    Io(io::Error),
    // Conflicting or unusable options
    Config(String),
    // A header was found but the names file had no lines left
    ExhaustedReplacementSource { headers_replaced: u64 },
}

// Required for '?' on plain I/O calls inside the pass.
impl From<io::Error> for RenameError {
    fn from(e: io::Error) -> Self {
        RenameError::Io(e)
    }
}

impl fmt::Display for RenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameError::Open { path, source } => write!(f, "could not open {}: {}", path, source),
            RenameError::Create { path, source } => {
                write!(f, "could not create {}: {}", path, source)
            }
            RenameError::Io(e) => write!(f, "I/O error: {}", e),
            RenameError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            RenameError::ExhaustedReplacementSource { headers_replaced } => write!(
                f,
                "names file ran out after {} replaced headers, but the sequence file has more headers",
                headers_replaced
            ),
        }
    }
}

impl error::Error for RenameError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RenameError::Open { source, .. } | RenameError::Create { source, .. } => Some(source),
            RenameError::Io(e) => Some(e),
            _ => None,
        }
    }
}
