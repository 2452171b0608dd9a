mod infer;

pub use infer::output as infer_output_format;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, StdinLock, StdoutLock, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

pub enum InputSource {
    File(BufReader<File>),
    Stdin(StdinLock<'static>),
}

impl io::Read for InputSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            InputSource::File(r) => r.read(buf),
            InputSource::Stdin(r) => r.read(buf),
        }
    }
}

impl io::BufRead for InputSource {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            InputSource::File(r) => r.fill_buf(),
            InputSource::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            InputSource::File(r) => r.consume(amt),
            InputSource::Stdin(r) => r.consume(amt),
        }
    }
}

pub fn open_input(path: Option<&Path>) -> Result<InputSource> {
    let Some(p) = path else {
        return Ok(InputSource::Stdin(io::stdin().lock()));
    };
    let file =
        File::open(p).with_context(|| format!("Failed to open reaction document: {}", p.display()))?;
    Ok(InputSource::File(BufReader::new(file)))
}

pub enum OutputTarget {
    File(BufWriter<File>),
    Stdout(BufWriter<StdoutLock<'static>>),
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::File(w) => w.write(buf),
            OutputTarget::Stdout(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::File(w) => w.flush(),
            OutputTarget::Stdout(w) => w.flush(),
        }
    }
}

pub fn create_output(path: Option<&Path>) -> Result<OutputTarget> {
    let Some(p) = path else {
        return Ok(OutputTarget::Stdout(BufWriter::new(io::stdout().lock())));
    };
    let file = File::create(p)
        .with_context(|| format!("Failed to create output file: {}", p.display()))?;
    Ok(OutputTarget::File(BufWriter::new(file)))
}
