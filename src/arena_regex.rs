use std::borrow::Borrow;
use typed_arena::Arena;

pub struct RegexStorage<'a, S>(Arena<Regex<'a, S>>);

/// Symbols are only ever compared for equality.
#[derive(Debug, PartialEq, Eq)]
pub struct Regex<'a, S> {
    nullable: bool,
    contents: RegexContents<'a, S>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegexContents<'a, S> {
    Empty,
    Epsilon,
    Symbol(S),
    Seq(&'a Regex<'a, S>, &'a Regex<'a, S>),
    Alt(&'a Regex<'a, S>, &'a Regex<'a, S>),
    Star(&'a Regex<'a, S>),
}

impl<'a, S> Regex<'a, S> {
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn contents(&self) -> &RegexContents<'a, S> {
        &self.contents
    }

    /// Is this literally the `Empty` node? (Not: does it denote the empty language.)
    pub fn is_empty(&self) -> bool {
        matches!(self.contents, RegexContents::Empty)
    }

    /// Number of nodes in the tree. Shared sub-expressions are counted once per occurrence.
    pub fn size(&self) -> usize {
        use RegexContents::*;

        match &self.contents {
            Empty | Epsilon | Symbol(_) => 1,
            Seq(x, y) | Alt(x, y) => 1 + x.size() + y.size(),
            Star(x) => 1 + x.size(),
        }
    }
}

impl<'a, S> Default for RegexStorage<'a, S> {
    fn default() -> Self {
        RegexStorage::new()
    }
}

impl<'a, S> RegexStorage<'a, S> {
    pub fn new() -> RegexStorage<'a, S> {
        RegexStorage(Arena::new())
    }

    fn alloc(&'a self, nullable: bool, contents: RegexContents<'a, S>) -> &'a Regex<'a, S> {
        self.0.alloc(Regex { nullable, contents })
    }

    pub fn empty(&'a self) -> &'a Regex<'a, S> {
        self.alloc(false, RegexContents::Empty)
    }

    pub fn epsilon(&'a self) -> &'a Regex<'a, S> {
        self.alloc(true, RegexContents::Epsilon)
    }

    pub fn symbol(&'a self, symbol: S) -> &'a Regex<'a, S> {
        self.alloc(false, RegexContents::Symbol(symbol))
    }

    pub fn seq(&'a self, x: &'a Regex<'a, S>, y: &'a Regex<'a, S>) -> &'a Regex<'a, S> {
        self.alloc(x.nullable && y.nullable, RegexContents::Seq(x, y))
    }

    pub fn alt(&'a self, x: &'a Regex<'a, S>, y: &'a Regex<'a, S>) -> &'a Regex<'a, S> {
        self.alloc(x.nullable || y.nullable, RegexContents::Alt(x, y))
    }

    pub fn star(&'a self, x: &'a Regex<'a, S>) -> &'a Regex<'a, S> {
        self.alloc(true, RegexContents::Star(x))
    }

    pub fn optional(&'a self, x: &'a Regex<'a, S>) -> &'a Regex<'a, S> {
        self.alt(x, self.epsilon())
    }

    pub fn plus(&'a self, x: &'a Regex<'a, S>) -> &'a Regex<'a, S> {
        self.seq(x, self.star(x))
    }

    pub fn word(&'a self, symbols: impl IntoIterator<Item = S>) -> &'a Regex<'a, S> {
        self.seq_all(symbols.into_iter().map(|s| self.symbol(s)))
    }

    /// Nested to the right. `ε` if there are none.
    pub fn seq_all(
        &'a self,
        regexes: impl IntoIterator<Item = &'a Regex<'a, S>>,
    ) -> &'a Regex<'a, S> {
        let regexes: Vec<_> = regexes.into_iter().collect();
        match regexes.split_last() {
            None => self.epsilon(),
            Some((last, init)) => init.iter().rev().fold(*last, |acc, x| self.seq(*x, acc)),
        }
    }

    /// Nested to the right. `∅` if there are none.
    pub fn alt_all(
        &'a self,
        regexes: impl IntoIterator<Item = &'a Regex<'a, S>>,
    ) -> &'a Regex<'a, S> {
        let regexes: Vec<_> = regexes.into_iter().collect();
        match regexes.split_last() {
            None => self.empty(),
            Some((last, init)) => init.iter().rev().fold(*last, |acc, x| self.alt(*x, acc)),
        }
    }
}

impl<'a, S: PartialEq> RegexStorage<'a, S> {
    /// The Brzozowski derivative of `regex` with respect to `symbol`: a regex matching every
    /// `w` such that `symbol w` is matched by `regex`.
    ///
    /// Nothing is simplified, so the result may be larger than `regex`. Sub-expressions that
    /// pass through unchanged are shared with `regex` rather than copied.
    pub fn derive(&'a self, regex: &'a Regex<'a, S>, symbol: &S) -> &'a Regex<'a, S> {
        use RegexContents::*;

        match &regex.contents {
            Empty | Epsilon => self.empty(),
            Symbol(s) if s == symbol => self.epsilon(),
            Symbol(_) => self.empty(),
            // The split depends on the nullability of the original `x`, not of its derivative.
            Seq(x, y) if x.nullable => self.alt(
                self.seq(self.derive(*x, symbol), *y),
                self.derive(*y, symbol),
            ),
            Seq(x, y) => self.seq(self.derive(*x, symbol), *y),
            Alt(x, y) => self.alt(self.derive(*x, symbol), self.derive(*y, symbol)),
            // Only the first repetition is derived; the star itself is reused as-is.
            Star(x) => self.seq(self.derive(*x, symbol), regex),
        }
    }

    fn step(&'a self, regex: &'a Regex<'a, S>, symbol: &S, count: usize) -> &'a Regex<'a, S> {
        let regex = self.derive(regex, symbol);
        log::trace!("derivative {}: {} nodes", count, regex.size());
        regex
    }

    /// Derive `regex` by each symbol of `input`, left to right.
    pub fn derive_all<I>(&'a self, regex: &'a Regex<'a, S>, input: I) -> &'a Regex<'a, S>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        input
            .into_iter()
            .enumerate()
            .fold(regex, |regex, (i, symbol)| self.step(regex, symbol.borrow(), i + 1))
    }

    /// Like [`derive_all`](Self::derive_all), but gives up as soon as the derivative is `Empty`.
    /// Derivatives are allocated in `self`; [`matches`] cleans up after itself instead.
    pub fn matches<I>(&'a self, regex: &'a Regex<'a, S>, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
    {
        let mut regex = regex;
        for (i, symbol) in input.into_iter().enumerate() {
            regex = self.step(regex, symbol.borrow(), i + 1);
            if regex.is_empty() {
                log::debug!("no match: dead after {} symbols", i + 1);
                return false;
            }
        }
        log::debug!("match: {}", regex.nullable);
        regex.nullable
    }
}

/// Derivatives live in a scratch arena, so `regex`'s own storage does not grow.
pub fn matches<S, I>(regex: &Regex<'_, S>, input: I) -> bool
where
    S: PartialEq,
    I: IntoIterator,
    I::Item: Borrow<S>,
{
    let scratch = RegexStorage::new();
    scratch.matches(regex, input)
}
