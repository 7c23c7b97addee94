use flagparse::{CliOption, CommandLineParser, ValueType};

#[derive(Debug, Default)]
struct Notes {
    from: String,
    to: Option<String>,
    include_all: bool,
    limit: Option<u64>,
}

fn main() {
    let mut notes = Notes::default();
    let parsed = CommandLineParser::new("release-notes")
        .about("Collect the release notes between two versions.")
        .add(
            CliOption::flags("-f", "--from")
                .value_type(ValueType::String)
                .required()
                .help("The version to start from.")
                .on_value(|value| notes.from = value.to_string()),
        )
        .add(
            CliOption::flags("-t", "--to")
                .value_type(ValueType::String)
                .help("The version to end at.\nDefaults to the latest version.")
                .on_value(|value| notes.to = Some(value.to_string())),
        )
        .add(
            CliOption::flags("-i", "--include-all")
                .help("Include internal changes.")
                .on_value(|value| notes.include_all = value.as_switch().unwrap_or_default()),
        )
        .add(
            CliOption::long("--limit")
                .value_type(ValueType::Integer)
                .on_value(|value| notes.limit = value.as_u64()),
        )
        .build()
        .parse();

    println!("{notes:?}");
    println!("paths: {:?}", parsed.trailing_values());
}
