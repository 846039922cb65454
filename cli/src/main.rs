mod cli;

use adtc_driver::{Conf, DriverError, Source, compile_many};
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::io::{Read, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
    match run(cli) {
        | Ok(true) => ExitCode::SUCCESS,
        | Ok(false) => ExitCode::FAILURE,
        | Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn report(err: &DriverError) {
    eprintln!("{} {}", "error:".red().bold(), err);
}

/// Whether every source compiled.
fn run(cli: Cli) -> Result<bool, DriverError> {
    let Cli {
        files,
        config,
        tag_name,
        fold_prefix,
        matchee_name,
        handlers_name,
        no_accessors,
        no_equality,
        output,
        verbose: _,
    } = cli;

    let file_conf = match &config {
        | Some(path) => Conf::load(path)?,
        | None => Conf::default(),
    };
    let flags = Conf {
        tag_name,
        fold_prefix,
        matchee_name,
        handlers_name,
        emit_accessors: no_accessors.then_some(false),
        emit_equality: no_equality.then_some(false),
    };
    let options = file_conf.merge(flags).into_options();
    log::debug!("options: {:?}", options);

    let sources = if files.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        vec![Source::new("<stdin>", text)]
    } else {
        (files.iter()).map(|path| Source::read(path)).collect::<Result<Vec<_>, _>>()?
    };

    let mut outputs = Vec::new();
    let mut success = true;
    for result in compile_many(&sources, &options) {
        match result {
            | Ok(text) => outputs.push(text),
            | Err(err) => {
                report(&err);
                success = false;
            }
        }
    }
    if !success {
        return Ok(false);
    }

    let mut text = outputs.join("\n\n");
    text.push('\n');
    match output {
        | Some(path) => {
            log::info!("writing `{}`", path.display());
            std::fs::write(path, text)?
        }
        | None => std::io::stdout().write_all(text.as_bytes())?,
    }
    Ok(true)
}
