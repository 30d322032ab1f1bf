use crate::arena_regex::{Regex, RegexContents};
use crate::parse::META_CHARS;
use std::fmt::{self, Display, Formatter};

// Binding strength, loosest first.
const ALT: u8 = 0;
const SEQ: u8 = 1;
const ATOM: u8 = 2;

/// Prints with as few parentheses as precedence allows. For `char` symbols the output is in the
/// syntax accepted by [`parse_regex`](crate::parse_regex). A symbol that prints as anything other
/// than a single character binds like a concatenation, so `(ab)*` stays distinct from `ab*`.
impl<S: Display> Display for Regex<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_prec(self, ALT, f)
    }
}

fn precedence<S: Display>(regex: &Regex<'_, S>) -> u8 {
    match regex.contents() {
        RegexContents::Alt(_, _) => ALT,
        RegexContents::Seq(_, _) => SEQ,
        RegexContents::Symbol(s) if single_char(&s.to_string()).is_none() => SEQ,
        _ => ATOM,
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn write_prec<S: Display>(regex: &Regex<'_, S>, min: u8, f: &mut Formatter<'_>) -> fmt::Result {
    if precedence(regex) < min {
        write!(f, "(")?;
        write_prec(regex, ALT, f)?;
        return write!(f, ")");
    }
    match regex.contents() {
        RegexContents::Empty => write!(f, "∅"),
        RegexContents::Epsilon => write!(f, "ε"),
        RegexContents::Symbol(s) => write_symbol(s, f),
        RegexContents::Seq(x, y) => {
            write_prec(x, SEQ, f)?;
            write_prec(y, SEQ, f)
        }
        RegexContents::Alt(x, y) => {
            write_prec(x, ALT, f)?;
            write!(f, "|")?;
            write_prec(y, ALT, f)
        }
        RegexContents::Star(x) => {
            write_prec(x, ATOM, f)?;
            write!(f, "*")
        }
    }
}

fn write_symbol<S: Display>(symbol: &S, f: &mut Formatter<'_>) -> fmt::Result {
    let text = symbol.to_string();
    match single_char(&text) {
        Some(ch) if META_CHARS.contains(&ch) => write!(f, "\\{}", ch),
        _ => write!(f, "{}", text),
    }
}

#[cfg(test)]
mod tests {
    use crate::arena_regex::{matches, RegexStorage};
    use crate::parse::parse_regex;

    #[test]
    fn display() {
        let storage = RegexStorage::new();
        let a = storage.symbol('a');
        let b = storage.symbol('b');
        let c = storage.symbol('c');

        assert_eq!(
            storage.seq(storage.star(storage.alt(a, b)), c).to_string(),
            "(a|b)*c"
        );
        assert_eq!(storage.seq(a, storage.alt(b, c)).to_string(), "a(b|c)");
        assert_eq!(storage.alt(a, storage.seq(b, c)).to_string(), "a|bc");
        assert_eq!(storage.star(storage.seq(a, b)).to_string(), "(ab)*");
        assert_eq!(storage.star(storage.star(a)).to_string(), "a**");
        assert_eq!(storage.alt(storage.empty(), storage.epsilon()).to_string(), "∅|ε");
        assert_eq!(
            storage.seq(storage.symbol('*'), storage.symbol('|')).to_string(),
            "\\*\\|"
        );

        let words = RegexStorage::new();
        assert_eq!(words.seq(words.symbol("let"), words.symbol("x")).to_string(), "letx");
    }

    #[test]
    fn display_multichar_symbols() {
        let storage = RegexStorage::new();
        let ab = storage.symbol("ab");
        let a = storage.symbol("a");
        let b = storage.symbol("b");

        assert_eq!(storage.star(ab).to_string(), "(ab)*");
        assert_eq!(storage.seq(a, storage.star(b)).to_string(), "ab*");
        assert_eq!(storage.alt(ab, a).to_string(), "ab|a");
        assert_eq!(storage.seq(a, ab).to_string(), "aab");
        assert_eq!(storage.star(storage.symbol("*")).to_string(), "\\**");
    }

    #[test]
    fn display_derivative() {
        let storage = RegexStorage::new();
        let regex = parse_regex(&storage, "(a|b)*c").unwrap();
        let derived = storage.derive(regex, &'a');
        assert_eq!(derived.to_string(), "(ε|∅)(a|b)*c|∅");
    }

    #[test]
    fn reparse() {
        let patterns = ["(a|b)*c", "a(b|c)*a?", "(a|)b+", "\\(\\*|∅a", "ε|(ab)*(c|a)"];
        let inputs = ["", "a", "ab", "abc", "c", "ba", "(*", "abab", "bbbb", "abca"];
        for pattern in patterns.iter() {
            let storage = RegexStorage::new();
            let regex = parse_regex(&storage, pattern).unwrap();
            let printed = regex.to_string();
            let reparsed = parse_regex(&storage, &printed).unwrap();
            for input in inputs.iter() {
                assert_eq!(
                    matches(regex, input.chars()),
                    matches(reparsed, input.chars()),
                    "{:?} printed as {:?}, on input {:?}",
                    pattern,
                    printed,
                    input
                );
            }
        }
    }
}
