use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::errors::RenameError;

// Paths that stand for stdin or stdout
pub fn is_std_stream(path: Option<&str>) -> bool {
    matches!(path, None | Some("-"))
}

pub fn is_gzipped(filename: &str) -> bool {
    filename.ends_with(".gz")
}

// Opens a buffered line source. No path or "-" means stdin. Files ending
// in .gz are decompressed on the fly.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn BufRead>, RenameError> {
    let filename = match path {
        Some(p) if p != "-" => p,
        _ => return Ok(Box::new(BufReader::new(io::stdin()))),
    };

    let file = File::open(filename).map_err(|source| RenameError::Open {
        path: filename.to_owned(),
        source,
    })?;

    if is_gzipped(filename) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

// Output sink. Dropping it flushes on a best-effort basis; call finish()
// to see errors from the final flush and the gzip trailer.
pub enum OutputStream {
    Plain(BufWriter<Box<dyn Write>>),
    Gzip(GzEncoder<BufWriter<Box<dyn Write>>>),
}

impl OutputStream {
    pub fn new<W: Write + 'static>(inner: W, gzip: bool) -> Self {
        let buffered = BufWriter::new(Box::new(inner) as Box<dyn Write>);
        if gzip {
            OutputStream::Gzip(GzEncoder::new(buffered, Compression::fast()))
        } else {
            OutputStream::Plain(buffered)
        }
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputStream::Plain(mut w) => w.flush(),
            OutputStream::Gzip(enc) => enc.finish()?.flush(),
        }
    }
}

impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Plain(w) => w.write(buf),
            OutputStream::Gzip(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.write_all(buf),
            OutputStream::Gzip(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Plain(w) => w.flush(),
            OutputStream::Gzip(w) => w.flush(),
        }
    }
}

// Creates or truncates the output. No path or "-" means stdout, gzipped
// only if asked for. A file is gzipped when its name ends in .gz.
pub fn open_output(path: Option<&str>, gzip_stdout: bool) -> Result<OutputStream, RenameError> {
    match path {
        Some(filename) if filename != "-" => {
            let file = File::create(filename).map_err(|source| RenameError::Create {
                path: filename.to_owned(),
                source,
            })?;
            Ok(OutputStream::new(file, is_gzipped(filename)))
        }
        _ => Ok(OutputStream::new(io::stdout(), gzip_stdout)),
    }
}
