//! Convert quads between N-Quads and the RDF/JS JSON encoding.
//!
//! Read quads from the standard input, in the format specified in the first argument,
//! and write them to the standard output in the other format:
//! - `nq` (default): read N-Quads, write one JSON quad per line;
//! - `json`: read one JSON quad per line, write N-Quads.
//!
//! Lines of the N-Quads input that are not quads are skipped,
//! unless the environment variable `RDFJS_STRICT` is set.

use rdfjs::json::{encode_quad, LazyQuad};
use rdfjs::nquads::{NqConfig, NqSerializer, QuadReader};
use std::io::{stdin, stdout, BufRead, BufWriter, Write};

fn main() {
    env_logger::init();
    let format = std::env::args().nth(1).unwrap_or_else(|| "nq".to_string());
    let res = match &format[..] {
        "nq" => nq_to_json(),
        "json" => json_to_nq(),
        _ => {
            eprintln!("Unrecognized format: {format}");
            std::process::exit(-1);
        }
    };
    if let Err(msg) = res {
        eprintln!("{msg}");
        std::process::exit(1);
    }
}

fn nq_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = NqConfig::default();
    config.set_strict(std::env::var_os("RDFJS_STRICT").is_some());
    let mut out = BufWriter::new(stdout());
    let mut count = 0;
    for quad in QuadReader::new_with_config(stdin().lock(), config) {
        out.write_all(&encode_quad(&quad?)?)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    log::info!("converted {count} quads");
    Ok(())
}

fn json_to_nq() -> Result<(), Box<dyn std::error::Error>> {
    let mut ser = NqSerializer::new(BufWriter::new(stdout()));
    for (i, line) in stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let quad = LazyQuad::from_slice(line.as_bytes())
            .and_then(LazyQuad::into_quad)
            .map_err(|err| format!("line {}: {err}", i + 1))?;
        ser.serialize_quad(&quad)?;
    }
    ser.flush()?;
    Ok(())
}
