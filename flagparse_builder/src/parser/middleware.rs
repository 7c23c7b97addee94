use std::env;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;

/// The configured command line parser.
/// Built via `CommandLineParser::build`.
///
/// Parsing consumes the `GeneralParser`, so each instance parses precisely once.
pub struct GeneralParser<'ap> {
    parser: Parser<'ap>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'ap> std::fmt::Debug for GeneralParser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("parser", &self.parser)
            .finish()
    }
}

impl<'ap> GeneralParser<'ap> {
    pub(crate) fn new(
        parser: Parser<'ap>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            parser,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    ///
    /// The parser walks the tokens left to right, invoking each option's callback as soon as its value is known.
    /// Tokens after a `--` separator are collected, verbatim, into [`Parsed::trailing_values`].
    ///
    /// If at any point the parser encounters an error (ex: an unknown flag, an unconvertible value, a missing required option),
    /// it will display the error and the usage, and return with `Err(1)`.
    /// Callbacks invoked before the error are not undone.
    ///
    /// If the help switch (`-h` or `--help`) appears anywhere in the input, the parser will display the usage and return with `Err(0)`.
    /// No callbacks are invoked in this case.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::{CliOption, CommandLineParser, ValueType};
    ///
    /// let mut verbose = false;
    /// let parser = CommandLineParser::new("program")
    ///     .add(CliOption::flags("-v", "--verbose").on_value(|_| verbose = true))
    ///     .build();
    ///
    /// let parsed = parser.parse_tokens(vec!["-v", "--", "a", "b"].as_slice()).unwrap();
    ///
    /// assert!(verbose);
    /// assert_eq!(parsed.trailing_values(), &["a".to_string(), "b".to_string()]);
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Parsed, i32> {
        let GeneralParser {
            parser,
            printer,
            user_interface,
        } = self;

        match parser.consume(tokens) {
            Ok(Action::Continue(parsed)) => Ok(parsed),
            Ok(Action::PrintHelp) => {
                printer.print_usage(&*user_interface);
                Err(0)
            }
            Err(parse_error) => {
                user_interface.print_error(parse_error);
                printer.print_usage(&*user_interface);
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves like [`GeneralParser::parse_tokens`], except the program exits (via [`std::process::exit`]) instead of returning an `Err`.
    /// Exits with `0` when help is requested, and `1` on any parse error.
    pub fn parse(self) -> Parsed {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(parsed) => parsed,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
