use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::{Integer, Value, ValueType};
use crate::parser::ConfigError;

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("internal error - invalid integer pattern"));
static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+$").expect("internal error - invalid decimal pattern")
});

/// A value which could not be given to an option.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidValue {
    /// The raw text does not have the format of the option's type.
    #[error("{flags} value must be {article} {value_type}", article = .value_type.article())]
    Malformed {
        /// The minimal usage of the option (ex: `-f/--from`).
        flags: String,
        /// The type the option expected.
        value_type: ValueType,
    },
    /// A value-taking option was closed before receiving its value.
    #[error("{flags} takes {article} {value_type}", article = .value_type.article())]
    Missing {
        /// The flag forms of the option (ex: `-f / --from`).
        flags: String,
        /// The type the option expected.
        value_type: ValueType,
    },
    /// A value-taking option was invoked without a value.
    #[error("{flags} was invoked without a value")]
    Absent {
        /// The minimal usage of the option (ex: `-f/--from`).
        flags: String,
    },
    /// A required option was not provided.
    #[error("{flags} is required")]
    Required {
        /// The minimal usage of the option (ex: `-f/--from`).
        flags: String,
    },
}

/// An option (aka: flag) on the Cli.
///
/// Options are identified by a short (`-f`) and/or long (`--from`) flag.
/// When a [`ValueType`] is declared, the option takes a value (`-f v1.0.0` or `-f=v1.0.0`).
/// Otherwise the option is a boolean flag, which holds `Value::Switch(true)` once seen.
///
/// ### Example
/// ```
/// # use flagparse_builder as flagparse;
/// use flagparse::{CliOption, ValueType};
///
/// let mut from = String::default();
/// let option = CliOption::flags("-f", "--from")
///     .value_type(ValueType::String)
///     .help("The version to start from.")
///     .required()
///     .on_value(|value| from = value.to_string());
///
/// assert!(option.takes_value());
/// assert!(option.matches("--from"));
/// ```
pub struct CliOption<'a> {
    short: Option<String>,
    long: Option<String>,
    value_type: Option<ValueType>,
    help: Option<String>,
    required: bool,
    value: Option<Value>,
    on_value: Option<Box<dyn FnMut(Value) + 'a>>,
}

impl<'a> std::fmt::Debug for CliOption<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliOption")
            .field("short", &self.short)
            .field("long", &self.long)
            .field("value_type", &self.value_type)
            .field("required", &self.required)
            .field("value", &self.value)
            .finish()
    }
}

impl<'a> CliOption<'a> {
    /// Create an option from its flags.
    /// At least one of `short` or `long` must be present.
    ///
    /// ### Example
    /// ```
    /// # use flagparse_builder as flagparse;
    /// use flagparse::CliOption;
    ///
    /// assert!(CliOption::new(Some("-v"), None::<&str>).is_ok());
    /// assert!(CliOption::new(None::<&str>, None::<&str>).is_err());
    /// ```
    pub fn new(
        short: Option<impl Into<String>>,
        long: Option<impl Into<String>>,
    ) -> Result<Self, ConfigError> {
        let short = short.map(Into::into);
        let long = long.map(Into::into);

        if short.is_none() && long.is_none() {
            return Err(ConfigError(
                "Option must contain a short or long flag.".to_string(),
            ));
        }

        Ok(Self {
            short,
            long,
            value_type: None,
            help: None,
            required: false,
            value: None,
            on_value: None,
        })
    }

    /// Create an option with only a short flag (ex: `-v`).
    pub fn short(short: impl Into<String>) -> Self {
        Self::bare(Some(short.into()), None)
    }

    /// Create an option with only a long flag (ex: `--verbose`).
    pub fn long(long: impl Into<String>) -> Self {
        Self::bare(None, Some(long.into()))
    }

    /// Create an option with both a short and a long flag.
    pub fn flags(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self::bare(Some(short.into()), Some(long.into()))
    }

    fn bare(short: Option<String>, long: Option<String>) -> Self {
        Self {
            short,
            long,
            value_type: None,
            help: None,
            required: false,
            value: None,
            on_value: None,
        }
    }

    /// Declare the type of value this option takes.
    /// Without this, the option is a boolean flag.
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type.replace(value_type);
        self
    }

    /// Document the help message for this option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help.replace(help.into());
        self
    }

    /// Mark this option as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Register the callback which receives this option's converted value.
    /// If repeated, only the final callback will apply.
    pub fn on_value(mut self, on_value: impl FnMut(Value) + 'a) -> Self {
        self.on_value.replace(Box::new(on_value));
        self
    }

    /// The short flag, if declared.
    pub fn short_flag(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// The long flag, if declared.
    pub fn long_flag(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The help message, if documented.
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Whether this option must be provided.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The current value, set by the most recent invocation.
    pub fn current_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Whether `token` is precisely the short or long flag.
    pub fn matches(&self, token: &str) -> bool {
        self.short.as_deref() == Some(token) || self.long.as_deref() == Some(token)
    }

    /// Whether this option takes a value.
    pub fn takes_value(&self) -> bool {
        self.value_type.is_some()
    }

    /// Whether this option has been given its value.
    /// Boolean flags become satisfied the first time they are invoked.
    pub fn is_satisfied(&self) -> bool {
        self.value.is_some()
    }

    /// Convert the raw text into the typed value for `value_type`.
    pub fn convert(&self, raw: &str, value_type: ValueType) -> Result<Value, InvalidValue> {
        match value_type {
            ValueType::String => Ok(Value::Text(raw.to_string())),
            ValueType::Integer => {
                if !INTEGER.is_match(raw) {
                    return Err(self.malformed(value_type));
                }

                Ok(Value::Integer(Integer::from_digits(raw)))
            }
            ValueType::Decimal => {
                if !DECIMAL.is_match(raw) {
                    return Err(self.malformed(value_type));
                }

                raw.parse::<f64>()
                    .map(Value::Decimal)
                    .map_err(|_| self.malformed(value_type))
            }
        }
    }

    fn malformed(&self, value_type: ValueType) -> InvalidValue {
        InvalidValue::Malformed {
            flags: self.minimal_usage(),
            value_type,
        }
    }

    /// Give this option its value, and pass the converted value to the callback.
    ///
    /// A boolean flag ignores `raw` and always receives `Value::Switch(true)`.
    /// Each invocation overwrites the previous value.
    pub fn invoke(&mut self, raw: Option<&str>) -> Result<(), InvalidValue> {
        let value = match (self.value_type, raw) {
            (Some(value_type), Some(raw)) => self.convert(raw, value_type)?,
            (Some(_), None) => {
                return Err(InvalidValue::Absent {
                    flags: self.minimal_usage(),
                });
            }
            (None, _) => Value::Switch(true),
        };

        self.value.replace(value.clone());

        if let Some(on_value) = self.on_value.as_mut() {
            on_value(value);
        }

        Ok(())
    }

    /// The error for closing this option before it received its value.
    /// `None` for a boolean flag, which never waits on a value.
    pub(crate) fn missing_value(&self) -> Option<InvalidValue> {
        self.value_type.map(|value_type| InvalidValue::Missing {
            flags: self.missing_value_flags(),
            value_type,
        })
    }

    /// The message for closing this option before it received its value.
    /// Ex: `-f / --from takes a string`.
    ///
    /// `None` for a boolean flag.
    pub fn missing_value_message(&self) -> Option<String> {
        self.missing_value().map(|error| error.to_string())
    }

    fn missing_value_flags(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("{s} / {l}"),
            (Some(f), None) | (None, Some(f)) => f.clone(),
            (None, None) => unreachable!("internal error - option must have a flag"),
        }
    }

    /// The flags joined without spaces (ex: `-f/--from`).
    pub fn minimal_usage(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("{s}/{l}"),
            (Some(f), None) | (None, Some(f)) => f.clone(),
            (None, None) => unreachable!("internal error - option must have a flag"),
        }
    }

    /// The usage of this option (ex: `[-f, --from=STRING]`).
    /// Optional options are wrapped in brackets.
    pub fn usage_fragment(&self) -> String {
        let flags = match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("{s}, {l}"),
            (Some(f), None) | (None, Some(f)) => f.clone(),
            (None, None) => unreachable!("internal error - option must have a flag"),
        };
        let grammar = match &self.value_type {
            Some(value_type) => format!("={}", value_type.name().to_ascii_uppercase()),
            None => "".to_string(),
        };

        if self.required {
            format!("{flags}{grammar}")
        } else {
            format!("[{flags}{grammar}]")
        }
    }
}
