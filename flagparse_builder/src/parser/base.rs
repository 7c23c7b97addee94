use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::api::{CliOption, InvalidValue};
use crate::constant::*;
use crate::model::Value;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

static FLAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-{1,2}[A-Za-z0-9_]+$").expect("internal error - invalid flag pattern")
});

/// An error in the configuration of the command line parser.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// An error in the Cli input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value could not be given to an option.
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
    /// A flag which does not match any option.
    #[error("{token} is not a supported option")]
    InvalidOption {
        /// The offending flag.
        token: String,
    },
}

/// Split every `flag=value` token at its first `=`.
pub(crate) fn normalize(tokens: &[&str]) -> Vec<String> {
    tokens
        .iter()
        .flat_map(|token| match token.split_once('=') {
            Some((flag, value)) => vec![flag.to_string(), value.to_string()],
            None => vec![token.to_string()],
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'t> {
    Flag(&'t str),
    Separator,
    Value(&'t str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingFlag,
    AwaitingValueFor(usize),
    InTrailing,
}

/// The final state of an option after a successful parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOption {
    short: Option<String>,
    long: Option<String>,
    value: Option<Value>,
}

impl ParsedOption {
    /// Whether `flag` is precisely the short or long flag of this option.
    pub fn matches(&self, flag: &str) -> bool {
        self.short.as_deref() == Some(flag) || self.long.as_deref() == Some(flag)
    }

    /// The short flag, if declared.
    pub fn short_flag(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long flag, if declared.
    pub fn long_flag(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The final value, if the option was provided.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl From<CliOption<'_>> for ParsedOption {
    fn from(option: CliOption<'_>) -> Self {
        ParsedOption {
            short: option.short_flag().map(str::to_string),
            long: option.long_flag().map(str::to_string),
            value: option.current_value().cloned(),
        }
    }
}

/// The result of a successful parse.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::{CliOption, CommandLineParser, Integer, Value, ValueType};
///
/// let parser = CommandLineParser::new("program")
///     .add(CliOption::flags("-n", "--count").value_type(ValueType::Integer))
///     .build();
///
/// let parsed = parser.parse_tokens(vec!["-n", "3", "--", "x"].as_slice()).unwrap();
/// assert_eq!(parsed.value_of("--count"), Some(&Value::Integer(Integer::from(3u64))));
/// assert_eq!(parsed.trailing_values(), &["x".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parsed {
    options: Vec<ParsedOption>,
    trailing_values: Vec<String>,
}

impl Parsed {
    /// The options, in declaration order.
    pub fn options(&self) -> &[ParsedOption] {
        &self.options
    }

    /// The tokens which followed the `--` separator, verbatim.
    pub fn trailing_values(&self) -> &[String] {
        &self.trailing_values
    }

    /// The final value of the option identified by `flag`.
    pub fn value_of(&self, flag: &str) -> Option<&Value> {
        self.options
            .iter()
            .find(|option| option.matches(flag))
            .and_then(ParsedOption::value)
    }

    /// Whether the option identified by `flag` was provided.
    pub fn is_present(&self, flag: &str) -> bool {
        self.value_of(flag).is_some()
    }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
    Continue(Parsed),
    PrintHelp,
}

pub(crate) struct Parser<'ap> {
    options: Vec<CliOption<'ap>>,
    trailing_values: Vec<String>,
}

impl<'ap> std::fmt::Debug for Parser<'ap> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("options", &self.options)
            .field("trailing_values", &self.trailing_values)
            .finish()
    }
}

impl<'ap> Parser<'ap> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::default())
    }

    pub(crate) fn new(options: Vec<CliOption<'ap>>) -> Self {
        Self {
            options,
            trailing_values: Vec::default(),
        }
    }

    fn find_by_flag(&self, token: &str) -> Option<usize> {
        self.options.iter().position(|option| option.matches(token))
    }

    fn resolve(&self, token: &str) -> Result<usize, ParseError> {
        self.find_by_flag(token)
            .ok_or_else(|| ParseError::InvalidOption {
                token: token.to_string(),
            })
    }

    fn classify<'t>(&self, token: &'t str) -> Token<'t> {
        if FLAG.is_match(token) || self.find_by_flag(token).is_some() {
            Token::Flag(token)
        } else if token == SEPARATOR {
            Token::Separator
        } else {
            Token::Value(token)
        }
    }

    /// Close the open option at a boundary (a new flag, the separator, or the end of input).
    /// A boolean flag is invoked here; a value-taking option must already be satisfied.
    fn close(&mut self, index: usize) -> Result<(), ParseError> {
        let option = &mut self.options[index];

        match option.missing_value() {
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Closing switch '{}'.", option.minimal_usage());
                }

                option.invoke(None)?;
            }
            Some(missing) if !option.is_satisfied() => return Err(missing.into()),
            Some(_) => {}
        }

        Ok(())
    }

    fn transition(&mut self, state: State, token: &str) -> Result<State, ParseError> {
        let next = match (state, self.classify(token)) {
            (State::InTrailing, _) => {
                self.trailing_values.push(token.to_string());
                State::InTrailing
            }
            (State::AwaitingFlag, Token::Flag(flag)) => State::AwaitingValueFor(self.resolve(flag)?),
            (State::AwaitingValueFor(open), Token::Flag(flag)) => {
                self.close(open)?;
                State::AwaitingValueFor(self.resolve(flag)?)
            }
            (State::AwaitingFlag, Token::Separator) => State::InTrailing,
            (State::AwaitingValueFor(open), Token::Separator) => {
                self.close(open)?;
                State::InTrailing
            }
            (State::AwaitingFlag, Token::Value(_value)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Dropping value '{_value}' which follows no option.");
                }

                State::AwaitingFlag
            }
            (State::AwaitingValueFor(open), Token::Value(value)) => {
                self.options[open].invoke(Some(value))?;
                State::AwaitingFlag
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Transition {state:?} --{token}--> {next:?}.");
        }

        Ok(next)
    }

    pub(crate) fn consume(mut self, tokens: &[&str]) -> Result<Action, ParseError> {
        // 1. Split the fused `flag=value` tokens.
        let normalized = normalize(tokens);

        // 2. Help wins over everything else, including invalid input.
        if normalized
            .iter()
            .any(|token| token == HELP_SHORT || token == HELP_LONG)
        {
            return Ok(Action::PrintHelp);
        }

        // 3. Walk the tokens left to right.
        let mut state = State::AwaitingFlag;

        for token in &normalized {
            state = self.transition(state, token)?;
        }

        // 4. The final option may still be open (ex: a trailing switch).
        if let State::AwaitingValueFor(open) = state {
            self.close(open)?;
        }

        // 5. Every required option must have been provided.
        if let Some(option) = self
            .options
            .iter()
            .find(|option| option.is_required() && !option.is_satisfied())
        {
            return Err(InvalidValue::Required {
                flags: option.minimal_usage(),
            }
            .into());
        }

        let Parser {
            options,
            trailing_values,
        } = self;

        Ok(Action::Continue(Parsed {
            options: options.into_iter().map(ParsedOption::from).collect(),
            trailing_values,
        }))
    }
}
