use flagparse::{CliOption, CommandLineParser, ValueType};

fn main() {
    let mut verbose = false;
    let mut start: Option<u64> = Some(0);
    let parsed = CommandLineParser::new("summer")
        .about("Sum the trailing items, starting from an initial value.")
        .add(
            CliOption::flags("-s", "--start")
                .value_type(ValueType::Integer)
                .help("The initial value.")
                .on_value(|value| start = value.as_u64()),
        )
        .add(
            CliOption::flags("-v", "--verbose")
                .help("Show each item as it is added.")
                .on_value(|_| verbose = true),
        )
        .build()
        .parse();

    let Some(start) = start else {
        eprintln!("The initial value does not fit in a u64.");
        std::process::exit(1);
    };

    match sum(start, parsed.trailing_values(), verbose) {
        Ok(total) => println!("Sum: {total}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}

fn sum(start: u64, items: &[String], verbose: bool) -> Result<u64, String> {
    let mut total = start;

    for item in items {
        match item.parse::<u64>() {
            Ok(value) => {
                if verbose {
                    println!("{total} + {value}");
                }

                total = total
                    .checked_add(value)
                    .ok_or_else(|| format!("Overflow adding '{item}' to {total}."))?;
            }
            Err(_) => eprintln!("Skipping '{item}'."),
        }
    }

    Ok(total)
}
