pub(crate) const HELP_SHORT: &str = "-h";
pub(crate) const HELP_LONG: &str = "--help";
pub(crate) const SEPARATOR: &str = "--";
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;
