//! Convert a directory of 1-bit BMPs into C byte arrays for firmware builds.
//!
//! Each `<name>.bmp` becomes `const unsigned char <name>[] PROGMEM { ... };`
//! holding the packed rows top to bottom, without BMP row padding.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bmpio::{BitDepth, Bitmap, packed_row_size};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(version, about = "Convert 1-bit BMP files into C byte arrays")]
struct Args {
    /// Directory containing the .bmp files
    input_dir: PathBuf,
    /// Output source file
    out_file: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum ConvertError {
    #[error("cannot read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot load file: {}", path.display())]
    Load {
        path: PathBuf,
        source: bmpio::BitmapError,
    },
    #[error("Wrong bits per pixel: {bpp} ({})", path.display())]
    WrongDepth { path: PathBuf, bpp: u16 },
    #[error("cannot write {}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(count) => {
            info!("wrote {count} arrays to {}", args.out_file.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Always shown, whatever RUST_LOG says.
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

/// `err` followed by each of its sources, comma separated.
fn report(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ", {cause}");
        source = cause.source();
    }
    out
}

fn run(args: &Args) -> Result<usize, ConvertError> {
    let inputs = bmp_files(&args.input_dir)?;
    let mut out = String::new();

    for path in &inputs {
        let bitmap = bmpio::load(path).map_err(|source| ConvertError::Load {
            path: path.clone(),
            source,
        })?;
        if bitmap.bit_depth() != BitDepth::One {
            return Err(ConvertError::WrongDepth {
                path: path.clone(),
                bpp: bitmap.bits_per_pixel(),
            });
        }

        let name = path.file_stem().unwrap_or_default().to_string_lossy();
        info!("{}: {}x{}", path.display(), bitmap.width(), bitmap.height());
        emit_array(&mut out, &name, &packed_top_down(&bitmap));
    }

    fs::write(&args.out_file, out).map_err(|source| ConvertError::Write {
        path: args.out_file.clone(),
        source,
    })?;
    Ok(inputs.len())
}

/// `.bmp` entries of `dir`, sorted by name.
fn bmp_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let read_dir_err = |source| ConvertError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        if path.extension().is_some_and(|ext| ext == "bmp") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Rows in display order with the 4-byte alignment padding stripped.
fn packed_top_down(bitmap: &Bitmap) -> Vec<u8> {
    let row_len = packed_row_size(bitmap.width(), bitmap.bit_depth());
    let mut buf = Vec::with_capacity(row_len * bitmap.height() as usize);
    for row in bitmap.rows_top_down() {
        buf.extend_from_slice(&row[..row_len]);
    }
    buf
}

fn emit_array(out: &mut String, name: &str, bytes: &[u8]) {
    let _ = write!(out, "const unsigned char {name}[] PROGMEM {{");
    for (idx, b) in bytes.iter().enumerate() {
        if idx % 16 == 0 {
            out.push_str("\n    ");
        }
        let _ = write!(out, "0x{b:02x}, ");
    }
    out.push_str("\n};\n\n");
}
