use clap::ArgMatches;
use env_logger::Env;
use log::{error, info};
use snbt::error::Error;
use snbt::Tag;
use snbt_tools::{app, display_opts, json_opts, read_input, stringify_opts, Result};

/// Parse SNBT, logging where it went wrong on failure.
fn parse(text: &str) -> Option<Tag> {
    match snbt::parse(text) {
        Ok(tag) => Some(tag),
        Err(e @ Error::Syntax { .. }) => {
            error!("{}", e);
            if let Some(caret) = e.caret(text) {
                error!("\n{}", caret);
            }
            None
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

fn fmt(args: &ArgMatches) -> Result<bool> {
    let opts = stringify_opts(args)?;
    let text = read_input(args)?;
    let tag = match parse(&text) {
        Some(tag) => tag,
        None => return Ok(false),
    };

    println!("{}", snbt::to_string_with_opts(&tag, &opts));
    Ok(true)
}

fn display(args: &ArgMatches) -> Result<bool> {
    let opts = display_opts(args)?;
    let text = read_input(args)?;
    let tag = match parse(&text) {
        Some(tag) => tag,
        None => return Ok(false),
    };

    println!("{}", snbt::to_display_string(&tag, &opts));
    Ok(true)
}

fn to_json(args: &ArgMatches) -> Result<bool> {
    let opts = json_opts(args);
    let text = read_input(args)?;
    let tag = match parse(&text) {
        Some(tag) => tag,
        None => return Ok(false),
    };

    let json = snbt::to_json_safe_with_opts(&tag, &opts);
    if args.is_present("compact") {
        println!("{}", serde_json::to_string(&json)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&json)?);
    }
    Ok(true)
}

fn from_json(args: &ArgMatches) -> Result<bool> {
    let opts = stringify_opts(args)?;
    let json_opts = json_opts(args);
    let text = read_input(args)?;
    let value: serde_json::Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(e) => {
            error!("{}", e);
            return Ok(false);
        }
    };

    let tag = snbt::from_json_safe_with_opts(&value, &json_opts);

    info!("read a {} from JSON", tag.kind());
    println!("{}", snbt::to_string_with_opts(&tag, &opts));
    Ok(true)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = app().get_matches();

    let ok = match matches.subcommand() {
        ("fmt", Some(args)) => fmt(args)?,
        ("display", Some(args)) => display(args)?,
        ("to-json", Some(args)) => to_json(args)?,
        ("from-json", Some(args)) => from_json(args)?,
        _ => {
            error!("{}", matches.usage());
            false
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
