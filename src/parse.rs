use crate::arena_regex::{Regex, RegexStorage};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;
use thiserror::Error;

// alt    = concat ( '|' concat )*
// concat = repeat*
// repeat = atom ( '*' | '+' | '?' )*
// atom   = '(' alt ')' | '\' char | '∅' | 'ε' | char

pub(crate) const META_CHARS: [char; 9] = ['|', '*', '+', '?', '(', ')', '\\', '∅', 'ε'];

/// Positions are in chars, not bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("'{ch}' at position {pos} has nothing to repeat")]
    NothingToRepeat { ch: char, pos: usize },
    #[error("group opened at position {pos} is never closed")]
    UnclosedGroup { pos: usize },
    #[error("escape at position {pos} is missing a character")]
    DanglingEscape { pos: usize },
}

/// Parse `pattern` into a regex over `char`s, allocated in `storage`.
///
/// Besides literals, the syntax has `|`, `*`, `+`, `?` and grouping parentheses. `∅` and `ε`
/// stand for the empty language and the empty string; an empty pattern or alternative is `ε`.
/// Any metacharacter can be escaped with `\`.
pub fn parse_regex<'a>(
    storage: &'a RegexStorage<'a, char>,
    pattern: &str,
) -> Result<&'a Regex<'a, char>, ParseError> {
    let mut parser = Parser {
        storage,
        chars: pattern.chars().enumerate().peekable(),
    };
    let regex = parser.parse_alt()?;
    match parser.chars.next() {
        Some((pos, ch)) => Err(ParseError::UnexpectedChar { ch, pos }),
        None => Ok(regex),
    }
}

struct Parser<'a, 'p> {
    storage: &'a RegexStorage<'a, char>,
    chars: Peekable<Enumerate<Chars<'p>>>,
}

impl<'a, 'p> Parser<'a, 'p> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn parse_alt(&mut self) -> Result<&'a Regex<'a, char>, ParseError> {
        let mut regex = self.parse_concat()?;
        while self.peek() == Some('|') {
            self.chars.next();
            let rhs = self.parse_concat()?;
            regex = self.storage.alt(regex, rhs);
        }
        Ok(regex)
    }

    fn parse_concat(&mut self) -> Result<&'a Regex<'a, char>, ParseError> {
        let mut regex = None;
        loop {
            let (pos, ch) = match self.chars.peek() {
                None | Some((_, '|')) | Some((_, ')')) => break,
                Some(&next) => next,
            };
            self.chars.next();
            let rhs = self.parse_repeat(pos, ch)?;
            regex = Some(match regex {
                None => rhs,
                Some(lhs) => self.storage.seq(lhs, rhs),
            });
        }
        Ok(regex.unwrap_or_else(|| self.storage.epsilon()))
    }

    fn parse_repeat(&mut self, pos: usize, ch: char) -> Result<&'a Regex<'a, char>, ParseError> {
        let mut regex = self.parse_atom(pos, ch)?;
        loop {
            regex = match self.peek() {
                Some('*') => self.storage.star(regex),
                Some('+') => self.storage.plus(regex),
                Some('?') => self.storage.optional(regex),
                _ => return Ok(regex),
            };
            self.chars.next();
        }
    }

    fn parse_atom(&mut self, pos: usize, ch: char) -> Result<&'a Regex<'a, char>, ParseError> {
        match ch {
            '(' => {
                let regex = self.parse_alt()?;
                match self.chars.next() {
                    Some((_, ')')) => Ok(regex),
                    _ => Err(ParseError::UnclosedGroup { pos }),
                }
            }
            '\\' => match self.chars.next() {
                Some((_, escaped)) => Ok(self.storage.symbol(escaped)),
                None => Err(ParseError::DanglingEscape { pos }),
            },
            '∅' => Ok(self.storage.empty()),
            'ε' => Ok(self.storage.epsilon()),
            '*' | '+' | '?' => Err(ParseError::NothingToRepeat { ch, pos }),
            _ => Ok(self.storage.symbol(ch)),
        }
    }
}
