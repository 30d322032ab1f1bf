use anyhow::Context;
use regex_deriv::{matches, parse_regex, RegexStorage};

/// Usage: `regex-deriv [PATTERN [INPUT]]`. Prints whether PATTERN matches all of INPUT.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (pattern, input) = pattern_and_input(std::env::args().skip(1));

    let storage = RegexStorage::new();
    let regex = parse_regex(&storage, &pattern)
        .with_context(|| format!("invalid pattern {:?}", pattern))?;
    log::info!("matching {} against {:?}", regex, input);

    println!("{}", matches(regex, input.chars()));
    Ok(())
}

/// Without arguments, runs `(a|b)*c` on `ababc`. A pattern without input matches the empty input.
fn pattern_and_input(mut args: impl Iterator<Item = String>) -> (String, String) {
    match args.next() {
        None => ("(a|b)*c".to_owned(), "ababc".to_owned()),
        Some(pattern) => (pattern, args.next().unwrap_or_default()),
    }
}
