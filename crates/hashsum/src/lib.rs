//! `hashsum`: print or verify message digests of files.
//!
//! Output lines have the form `<hex>  <name>`, one per input, where `-`
//! (or no file at all) means standard input. `--check` reads such lines back
//! and reports `<name>: OK` or `<name>: FAILED`.

use std::{
  fs::File,
  io::{BufRead, BufReader, Read, Write},
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use hashes::{Algorithm, Hasher, Output};

#[derive(Debug, Parser)]
#[command(name = "hashsum")]
#[command(version, about = "Print or check MD5, SHA-1, SHA-2, and SHA-3 digests", long_about = None)]
pub struct Cli {
  /// Digest algorithm (md5, sha1, sha224, sha256, sha384, sha512, sha3-224, sha3-256, sha3-384, sha3-512)
  #[arg(short, long, env = "HASHSUM_ALGORITHM", default_value = "sha256", value_parser = parse_algorithm)]
  pub algorithm: Algorithm,

  /// Read digests from FILE and verify them
  #[arg(short, long, value_name = "FILE", conflicts_with_all = ["list", "files"])]
  pub check: Option<PathBuf>,

  /// List supported algorithms and exit
  #[arg(long)]
  pub list: bool,

  /// Enable debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Files to hash; `-` or nothing reads standard input
  pub files: Vec<PathBuf>,
}

fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
  s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Where input bytes and report lines go. Split out so tests can drive the
/// command without touching the process streams.
pub struct Streams<'a> {
  pub stdin: &'a mut dyn Read,
  pub stdout: &'a mut dyn Write,
  pub stderr: &'a mut dyn Write,
}

/// Run the command. Returns `Ok(true)` when every input was hashed (and, with
/// `--check`, matched); per-input failures are reported on stderr and do not
/// stop the run.
pub fn run(cli: &Cli, io: &mut Streams<'_>) -> Result<bool> {
  if cli.list {
    list(io.stdout)?;
    return Ok(true);
  }

  if let Some(list_file) = &cli.check {
    return check(cli.algorithm, list_file, io);
  }

  let stdin_only = [PathBuf::from("-")];
  let files = if cli.files.is_empty() { &stdin_only[..] } else { &cli.files[..] };

  let mut all_ok = true;
  for path in files {
    match digest_path(cli.algorithm, path, io.stdin) {
      Ok(out) => writeln!(io.stdout, "{out}  {}", path.display())?,
      Err(e) => {
        all_ok = false;
        writeln!(io.stderr, "hashsum: {e:#}")?;
      }
    }
  }
  Ok(all_ok)
}

fn list(out: &mut dyn Write) -> Result<()> {
  for alg in Algorithm::ALL {
    writeln!(out, "{:<10} {:>3} bits  block {:>3} bytes", alg.name(), alg.output_size() * 8, alg.block_len())?;
  }
  Ok(())
}

/// Digest the file at `path`, or `stdin` when `path` is `-`.
pub fn digest_path(alg: Algorithm, path: &Path, stdin: &mut dyn Read) -> Result<Output> {
  let mut hasher = Hasher::new(alg);
  let n = if path.as_os_str() == "-" {
    hasher.update_reader(stdin).context("reading standard input")?
  } else {
    let file = File::open(path).with_context(|| format!("{}: cannot open", path.display()))?;
    hasher
      .update_reader(file)
      .with_context(|| format!("{}: read failed", path.display()))?
  };
  log::debug!("{alg}: hashed {n} bytes from {}", path.display());
  Ok(hasher.finalize())
}

/// Split a `<hex>  <name>` line. A leading `*` on the name (binary-mode
/// marker written by some tools) is ignored.
fn parse_check_line(line: &str) -> Option<(&str, &str)> {
  let (hex, rest) = line.split_once(char::is_whitespace)?;
  let name = rest.trim_start();
  let name = name.strip_prefix('*').unwrap_or(name);
  if hex.is_empty() || name.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
    return None;
  }
  Some((hex, name))
}

fn check(alg: Algorithm, list_file: &Path, io: &mut Streams<'_>) -> Result<bool> {
  let reader: Box<dyn BufRead + '_> = if list_file.as_os_str() == "-" {
    Box::new(BufReader::new(&mut *io.stdin))
  } else {
    let file = File::open(list_file).with_context(|| format!("{}: cannot open", list_file.display()))?;
    Box::new(BufReader::new(file))
  };

  let mut lines = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line.with_context(|| format!("{}: read failed", list_file.display()))?;
    lines.push((idx + 1, line));
  }

  let mut all_ok = true;
  for (lineno, line) in lines {
    let line = line.trim_end();
    if line.is_empty() {
      continue;
    }
    let Some((expected, name)) = parse_check_line(line) else {
      all_ok = false;
      writeln!(io.stderr, "hashsum: {}:{lineno}: improperly formatted line", list_file.display())?;
      continue;
    };
    if expected.len() != alg.output_size() * 2 {
      all_ok = false;
      writeln!(
        io.stderr,
        "hashsum: {}:{lineno}: digest length does not match {alg}",
        list_file.display()
      )?;
      continue;
    }

    match digest_path(alg, Path::new(name), io.stdin) {
      Ok(actual) if actual.to_string().eq_ignore_ascii_case(expected) => writeln!(io.stdout, "{name}: OK")?,
      Ok(_) => {
        all_ok = false;
        writeln!(io.stdout, "{name}: FAILED")?;
      }
      Err(e) => {
        all_ok = false;
        writeln!(io.stdout, "{name}: FAILED open or read")?;
        writeln!(io.stderr, "hashsum: {e:#}")?;
      }
    }
  }
  Ok(all_ok)
}

#[cfg(test)]
mod tests {
  use super::parse_check_line;

  #[test]
  fn check_lines() {
    assert_eq!(parse_check_line("abcd  file.txt"), Some(("abcd", "file.txt")));
    assert_eq!(parse_check_line("ABCD *file with spaces"), Some(("ABCD", "file with spaces")));
    assert_eq!(parse_check_line("xyz  file"), None);
    assert_eq!(parse_check_line("abcd"), None);
    assert_eq!(parse_check_line("abcd   "), None);
  }
}
