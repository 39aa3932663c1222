use std::{
  io::{self, Write},
  process::ExitCode,
};

use clap::Parser;
use hashsum::{Cli, Streams, run};

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_filter = if cli.verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
  log::debug!("hashsum {cli:?}");

  let mut stdin = io::stdin().lock();
  let mut stdout = io::stdout().lock();
  let mut stderr = io::stderr().lock();
  let mut streams = Streams {
    stdin: &mut stdin,
    stdout: &mut stdout,
    stderr: &mut stderr,
  };

  match run(&cli, &mut streams) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      let _ = writeln!(streams.stderr, "hashsum: {e:#}");
      ExitCode::FAILURE
    }
  }
}
