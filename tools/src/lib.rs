use std::io::Read;

use clap::{App, Arg, ArgMatches, SubCommand};
use snbt::{DisplayOptions, JsonSafeOptions, NumberEncoding, Quote, StringifyOptions};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name("input")
        .takes_value(true)
        .required(false)
        .help("file to read, stdin if absent")
}

fn compact_arg() -> Arg<'static, 'static> {
    Arg::with_name("compact")
        .long("compact")
        .takes_value(false)
        .required(false)
}

fn break_length_arg() -> Arg<'static, 'static> {
    Arg::with_name("break-length")
        .long("break-length")
        .takes_value(true)
        .required(false)
        .default_value("70")
}

fn suffixed_numbers_arg() -> Arg<'static, 'static> {
    Arg::with_name("suffixed-numbers")
        .long("suffixed-numbers")
        .takes_value(false)
        .required(false)
        .help("bytes, shorts and floats as suffixed strings such as \"5b\"")
}

fn quote_arg() -> Arg<'static, 'static> {
    Arg::with_name("quote")
        .long("quote")
        .takes_value(true)
        .required(false)
        .possible_values(&["single", "double"])
}

pub fn app() -> App<'static, 'static> {
    App::new("snbt")
        .about("reformat stringified NBT and move it to and from JSON")
        .subcommand(
            SubCommand::with_name("fmt")
                .about("rewrite SNBT in the classic dialect")
                .arg(input_arg())
                .arg(compact_arg())
                .arg(break_length_arg())
                .arg(quote_arg()),
        )
        .subcommand(
            SubCommand::with_name("display")
                .about("rewrite SNBT in the display dialect")
                .arg(input_arg())
                .arg(compact_arg())
                .arg(break_length_arg())
                .arg(
                    Arg::with_name("force-byte")
                        .long("force-byte")
                        .takes_value(true)
                        .multiple(true)
                        .number_of_values(1)
                        .required(false),
                )
                .arg(
                    Arg::with_name("no-unwrap")
                        .long("no-unwrap")
                        .takes_value(false)
                        .required(false),
                ),
        )
        .subcommand(
            SubCommand::with_name("to-json")
                .about("convert SNBT to type-preserving JSON")
                .arg(input_arg())
                .arg(compact_arg())
                .arg(suffixed_numbers_arg()),
        )
        .subcommand(
            SubCommand::with_name("from-json")
                .about("convert type-preserving JSON back to SNBT")
                .arg(input_arg())
                .arg(compact_arg())
                .arg(break_length_arg())
                .arg(quote_arg())
                .arg(suffixed_numbers_arg()),
        )
}

fn break_length(args: &ArgMatches) -> Result<usize> {
    let raw = args.value_of("break-length").unwrap_or("70");
    raw.parse()
        .map_err(|_| format!("--break-length must be a whole number, got {:?}", raw).into())
}

pub fn stringify_opts(args: &ArgMatches) -> Result<StringifyOptions> {
    let mut opts = StringifyOptions::new()
        .pretty(!args.is_present("compact"))
        .break_length(break_length(args)?);

    match args.value_of("quote") {
        Some("single") => opts = opts.quote(Quote::Single),
        Some("double") => opts = opts.quote(Quote::Double),
        Some(other) => return Err(format!("unknown quote {:?}", other).into()),
        None => {}
    }

    Ok(opts)
}

/// Keys given with `--force-byte` replace the default set.
pub fn display_opts(args: &ArgMatches) -> Result<DisplayOptions> {
    let mut opts = DisplayOptions::new()
        .pretty(!args.is_present("compact"))
        .break_length(break_length(args)?)
        .unwrap_value_envelopes(!args.is_present("no-unwrap"));

    if let Some(keys) = args.values_of("force-byte") {
        opts = opts.force_byte_keys(keys);
    }

    Ok(opts)
}

pub fn json_opts(args: &ArgMatches) -> JsonSafeOptions {
    let numbers = if args.is_present("suffixed-numbers") {
        NumberEncoding::Suffixed
    } else {
        NumberEncoding::Natural
    };
    JsonSafeOptions::new().numbers(numbers)
}

pub fn read_input(args: &ArgMatches) -> Result<String> {
    match args.value_of("input") {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
