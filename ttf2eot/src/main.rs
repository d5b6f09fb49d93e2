//! Wrap an OpenType/TrueType font in an EOT container.
//!
//! Reads a font file, builds the EOT header for it, and writes the header
//! followed by the font data (with the name-overlay patch applied to the
//! embedded copy) to the output path.

use std::fs::File;
use std::io::BufWriter;

use eot::EotHeader;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;

    let font_bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read '{}': {e}", args.input.display())))?;
    let header = EotHeader::build(&font_bytes)
        .map_err(|e| Error(format!("failed to parse '{}': {e}", args.input.display())))?;
    log::debug!(
        "built {} byte header for {} bytes of font data",
        header.len(),
        font_bytes.len()
    );

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("eot"));
    let file = File::create(&output)
        .map_err(|e| Error(format!("failed to create '{}': {e}", output.display())))?;
    let mut writer = BufWriter::new(file);
    header
        .write_eot(&font_bytes, &mut writer)
        .map_err(|e| Error(format!("failed to write '{}': {e}", output.display())))?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Wrap an OpenType/TrueType font in an EOT container
        cmd args
            {
                required input: PathBuf
                /// Output path; defaults to the input with an .eot extension
                optional -o, --output output: PathBuf
            }
    }
}
