//! `flagparse` is a small command line parser for Rust, built around options and callbacks.
//!
//! Declare the options (aka: flags) of the Cli, each with an optional typed value and a callback.
//! `flagparse` walks the Cli tokens once, left to right, and hands each option's converted value to its callback as soon as it is known.
//! Anything after a `--` separator is passed through, untouched, as *trailing values*.
//!
//! `flagparse` prioritizes the following design concerns:
//! * *Typed values*:
//! An option declares whether it takes a `string`, `integer` or `decimal` value (or none at all).
//! The parser rejects text which does not have the right format; the callback never sees it.
//! * *Callback dispatch*:
//! Each option hands its value to a callback, which may mutate your program variables directly.
//! * *Detailed yet basic UX*:
//! Every error is shown together with the full usage, so the user sees both what went wrong and every available option.
//! We do not aim to support combined short flags (`-abc`), multi-value options, environment variables, config files, or sub-commands.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/summer.rs")]
//! ```
//!
//! ```console
//! $ summer -h
//! Usage: summer [-s, --start=INTEGER] [-v, --verbose]
//! Sum the trailing items, starting from an initial value.
//!  [-s, --start=INTEGER]
//!      The initial value.
//!  [-v, --verbose]
//!      Show each item as it is added.
//!
//! $ summer -s=10 -- 1 2 3
//! Sum: 16
//!
//! $ summer --start 1.5 -- 1 2 3
//! -s/--start value must be an integer
//! Usage: summer [-s, --start=INTEGER] [-v, --verbose]
//! <truncated>
//! ```
//!
//! # Builder Api
//! Configure `flagparse` by starting with a [`CommandLineParser`] and `add`ing [`CliOption`]s.
//! Each option has:
//! * A short flag (`-f`) and/or a long flag (`--from`); at least one is required.
//! * An optional [`ValueType`]; without it, the option is a boolean flag which receives [`Value::Switch`]`(true)`.
//! * An optional help message, shown in the usage.
//! * A required marker; a required option which is not provided is a parse error.
//! * An optional callback, which receives the converted [`Value`].
//!
//! `build` the `CommandLineParser` into a [`GeneralParser`], and run it with either:
//! * [`GeneralParser::parse`]: reads [`std::env::args`], and exits the program on help (code `0`) or error (code `1`).
//! * [`GeneralParser::parse_tokens`]: takes the tokens explicitly, and returns `Err(0)` or `Err(1)` instead of exiting.
//!
//! Both consume the `GeneralParser`, so a parser runs precisely once.
//! On success, the [`Parsed`] result holds each option's final value and the trailing values.
//!
//! # Cli Semantics
//! `flagparse` parses the Cli tokens according to the following set of rules.
//!
//! * A token `FLAG=VALUE` is first split at its first `=` character.
//! For example, `--key=123` is equivalent to `--key 123`, and `--key=1=2` to `--key 1=2`.
//! * If `-h` or `--help` appears anywhere, the usage is shown and nothing else happens.
//! * A token is a flag when it looks like `-x`/`--word` (letters, digits and underscores), or when it is precisely a declared flag (ex: `--include-all`).
//! An undeclared flag is an error.
//! * The token after a value-taking option is its value.
//! A value-taking option followed directly by another flag, by `--`, or by nothing is an error.
//! * A boolean flag takes effect when the next flag, `--`, or the end of input is reached.
//! A plain token directly after a boolean flag is consumed and ignored.
//! * A plain token which follows no option is ignored.
//! * After `--`, every token (including flags) is collected into the trailing values.
//! * Integers are unsigned decimal digits (`^[0-9]+$`) of any length, delivered as an [`Integer`]; decimals are digits, a dot, and digits (`^[0-9]+\.[0-9]+$`).
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events for each step of the parse.
pub use flagparse_builder::*;
