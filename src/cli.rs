// src/cli.rs
use anyhow::{bail, Result};
use clap::{Arg, ArgAction, Command};
use colored::*;
use rust_i18n::t;
use std::env;

use crate::core::mode::Mode;
use crate::shim::backend::{EnglishRules, LocaleCategory};
use crate::shim::facade::PseudoGettext;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("pseudoloc")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .help(t!("arg_mode", locale = locale).to_string())
                .value_name("MODE")
                .value_parser(["ltr", "rtl", "malkovich"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("plural")
                .long("plural")
                .help(t!("arg_plural", locale = locale).to_string())
                .num_args(2)
                .value_names(["SINGULAR", "PLURAL"])
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .help(t!("arg_count", locale = locale).to_string())
                .value_name("COUNT")
                .value_parser(clap::value_parser!(u64))
                .default_value("2")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("msgid")
                .help(t!("arg_msgid", locale = locale).to_string())
                .value_name("MSGID")
                .action(ArgAction::Append),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    // A --mode flag overrides the environment; either way the mode is
    // resolved once and stays fixed for this context.
    let ctx = match matches.get_one::<String>("mode") {
        Some(value) => PseudoGettext::with_mode(
            EnglishRules,
            Mode::from_config_value(Some(value.as_str())),
        ),
        None => PseudoGettext::new(EnglishRules),
    };

    // The same setup calls an intercepted application would be required to
    // make before its first lookup.
    ctx.select_domain("pseudoloc")?;
    ctx.select_locale(LocaleCategory::Messages, &language)?;

    let msgids: Vec<&String> = matches
        .get_many::<String>("msgid")
        .map(|values| values.collect())
        .unwrap_or_default();
    let plural_pair: Option<Vec<&String>> = matches
        .get_many::<String>("plural")
        .map(|values| values.collect());

    if msgids.is_empty() && plural_pair.is_none() {
        bail!(t!("no_input", locale = &language).to_string());
    }

    for msgid in msgids {
        let transformed = ctx.translate(msgid)?;
        println!("{} {} {}", msgid.dimmed(), "->".cyan(), transformed.green());
    }

    if let Some(pair) = plural_pair {
        // num_args(2) guarantees exactly two values.
        let count = *matches.get_one::<u64>("count").unwrap();
        let transformed = ctx.translate_plural(pair[0], pair[1], count)?;
        println!(
            "{} {} {}",
            format!("{}/{} (n={})", pair[0], pair[1], count).dimmed(),
            "->".cyan(),
            transformed.green()
        );
    }

    Ok(())
}
