//! editstate CLI.

use std::io::{self, IsTerminal};
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use clap::{ColorChoice, Parser};
use editstate_cli::check::{Bounds, CheckKind, CheckReport, CheckSpec, run_check};
use editstate_cli::comment::{CommentOptions, CommentSession, run_comment_session};
use editstate_cli::logging::{LogConfig, LogFormat, init_logging};
use editstate_cli::{EXIT_ACCEPTED, EXIT_REJECTED, EXIT_USAGE};
use editstate_model::TracingObserver;
use editstate_validate::TrimOptions;
use regex::Regex;
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{
    CheckArgs, Cli, Command, CommentArgs, KindArg, LogFormatArg, LogLevelArg, TrimArg,
};
use crate::summary::{print_check_report, print_comment_session};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_USAGE);
    }
    let exit_code = match cli.command {
        Command::Comment(args) => match run_comment(&args) {
            Ok(session) => {
                if session.valid {
                    EXIT_ACCEPTED
                } else {
                    EXIT_REJECTED
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_USAGE
            }
        },
        Command::Check(args) => match run_check_command(&args) {
            Ok(report) => {
                if report.accepted {
                    EXIT_ACCEPTED
                } else {
                    EXIT_REJECTED
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_USAGE
            }
        },
    };
    std::process::exit(exit_code);
}

fn run_comment(args: &CommentArgs) -> Result<CommentSession> {
    let options = CommentOptions::default()
        .with_limit(args.limit)
        .with_reset(args.reset)
        .with_observer(Rc::new(TracingObserver));
    let session = run_comment_session(args.edits.iter().cloned(), &options);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print_comment_session(&session);
    }
    Ok(session)
}

fn run_check_command(args: &CheckArgs) -> Result<CheckReport> {
    let spec = check_spec_from_args(args)?;
    let report = run_check(&args.input, &spec);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_check_report(&report);
    }
    Ok(report)
}

fn check_spec_from_args(args: &CheckArgs) -> Result<CheckSpec> {
    let kind = match args.kind {
        KindArg::String => CheckKind::String,
        KindArg::Int => CheckKind::Int,
        KindArg::Float => CheckKind::Float,
        KindArg::Url => CheckKind::Url,
    };
    let trim = args.trim.map(|trim| match trim {
        TrimArg::Both => TrimOptions::both(),
        TrimArg::Left => TrimOptions::none().with_trim_left(true),
        TrimArg::Right => TrimOptions::none().with_trim_right(true),
    });
    let pattern = args
        .pattern
        .as_deref()
        .map(Regex::new)
        .transpose()
        .context("invalid --pattern")?;
    let spec = CheckSpec::new(kind)
        .with_trim(trim)
        .with_required(args.required)
        .with_lengths(args.min_length, args.max_length, args.allow_equal)
        .with_pattern(pattern)
        .with_case(args.lower_case, args.upper_case)
        .with_digit(args.digit)
        .with_bounds(Bounds {
            greater_than: args.greater_than,
            greater_or_equal: args.greater_or_equal,
            less_than: args.less_than,
            less_or_equal: args.less_or_equal,
        })
        .with_message(args.message.clone());

    let textual = spec.textual_options();
    if !kind.is_textual() && !textual.is_empty() {
        bail!(
            "--{} only applies to string and url checks",
            textual.join(", --")
        );
    }
    if kind.is_textual() && !spec.bounds.is_empty() {
        bail!("numeric bounds only apply to int and float checks");
    }
    Ok(spec)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
