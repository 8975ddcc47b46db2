use crate::{classify::Classify, symbol::Symbol};

/// Tests whether the whole `text` matches the whole `pattern`.
///
/// Every symbol of the pattern is a literal except for the wildcard tokens
/// defined by [`Symbol`]: `?` consumes exactly one symbol, `*` consumes any number of symbols
/// and `#` consumes one or more consecutive symbols accepted by `class`.
///
/// The function never fails and keeps no state between calls.
///
/// # Examples
///
/// ```
/// use wildcard::{AsciiDigit, matches};
///
/// assert!(matches(b"a#b", b"a123b", &AsciiDigit));
/// assert!(!matches(b"a#b", b"ab", &AsciiDigit));
/// assert!(matches(b"*", b"", &AsciiDigit));
/// assert!(!matches(b"", b"x", &AsciiDigit));
/// ```
pub fn matches<S, C>(pattern: &[S], text: &[S], class: &C) -> bool
where
    S: Symbol,
    C: Classify<S> + ?Sized,
{
    if min_len(pattern) > text.len() {
        return false;
    }

    if pattern.contains(&S::NUMERIC_RUN) {
        search(pattern, text, class)
    } else {
        scan(pattern, text)
    }
}

/// Returns the minimum length of a text that the pattern can match.
///
/// # Examples
///
/// ```
/// assert_eq!(wildcard::min_len(b"a?*#"), 3);
/// assert_eq!(wildcard::min_len(b"***"), 0);
/// ```
#[inline]
pub fn min_len<S: Symbol>(pattern: &[S]) -> usize {
    pattern.iter().filter(|&&s| s != S::ANY_MANY).count()
}

// ---

// Two-pointer matching for patterns without numeric runs.
// Only the most recent `*` needs to be remembered since any later `*`
// can absorb whatever an earlier one would have.
fn scan<S: Symbol>(pattern: &[S], text: &[S]) -> bool {
    let mut p = 0;
    let mut t = 0;
    let mut star: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some(&s) if s == S::ANY_MANY => {
                p = skip_stars(pattern, p);
                if p == pattern.len() {
                    return true;
                }
                let Some(next) = seek(pattern[p], text, t) else {
                    return false;
                };
                star = Some((p, next));
                t = next;
                continue;
            }
            Some(&s) if s == S::ANY_ONE || s == text[t] => {
                p += 1;
                t += 1;
                continue;
            }
            _ => {}
        }

        let Some((sp, st)) = star else {
            return false;
        };
        let Some(next) = seek(pattern[sp], text, st + 1) else {
            return false;
        };
        star = Some((sp, next));
        p = sp;
        t = next;
    }

    skip_stars(pattern, p) == pattern.len()
}

// Finds the first position at or after `from` where the symbol following a `*` may match.
#[inline]
fn seek<S: Symbol>(next: S, text: &[S], from: usize) -> Option<usize> {
    if next == S::ANY_ONE {
        Some(from)
    } else {
        S::position(&text[from..], next).map(|i| from + i)
    }
}

#[inline]
fn skip_stars<S: Symbol>(pattern: &[S], mut p: usize) -> usize {
    while pattern.get(p) == Some(&S::ANY_MANY) {
        p += 1;
    }
    p
}

// ---

// Depth-first search over matcher states for patterns with numeric runs.
// Every transition advances the pattern or the text position, so the state graph is acyclic
// and a state that was already expanded never needs to be expanded again.
fn search<S, C>(pattern: &[S], text: &[S], class: &C) -> bool
where
    S: Symbol,
    C: Classify<S> + ?Sized,
{
    let mut visited = Visited::new(pattern, text.len());
    let mut stack = vec![State::start()];

    while let Some(state) = stack.pop() {
        let State { p, t, run } = state;

        if run {
            // Inside a numeric run that has already consumed a symbol.
            if !visited.insert(p, t, true) {
                continue;
            }
            stack.push(State::at(p + 1, t));
            if text.get(t).is_some_and(|&s| class.is_numeric(s)) {
                stack.push(State::in_run(p, t + 1));
            }
            continue;
        }

        let Some(&s) = pattern.get(p) else {
            if t == text.len() {
                return true;
            }
            continue;
        };

        if s == S::ANY_MANY {
            let q = skip_stars(pattern, p);
            if q == pattern.len() {
                return true;
            }
            if !visited.insert(p, t, false) {
                continue;
            }
            stack.push(State::at(q, t));
            if t < text.len() {
                stack.push(State::at(p, t + 1));
            }
            continue;
        }

        let Some(&c) = text.get(t) else {
            continue;
        };

        if s == S::NUMERIC_RUN {
            if class.is_numeric(c) {
                stack.push(State::in_run(p, t + 1));
            }
        } else if s == S::ANY_ONE || s == c {
            stack.push(State::at(p + 1, t + 1));
        }
    }

    false
}

#[derive(Clone, Copy, Debug)]
struct State {
    p: usize,
    t: usize,
    run: bool,
}

impl State {
    #[inline]
    fn start() -> Self {
        Self::at(0, 0)
    }

    #[inline]
    fn at(p: usize, t: usize) -> Self {
        Self { p, t, run: false }
    }

    #[inline]
    fn in_run(p: usize, t: usize) -> Self {
        Self { p, t, run: true }
    }
}

// ---

// Set of expanded branching states.
// Only `*` and `#` positions branch, so only they get a row of bits,
// one bit per text position and run flag.
// Rows are allocated on first use, so a search that succeeds early stays cheap.
struct Visited {
    slots: Vec<Option<usize>>,
    width: usize,
    rows: Vec<Vec<u64>>,
}

impl Visited {
    fn new<S: Symbol>(pattern: &[S], text_len: usize) -> Self {
        let mut n = 0;
        let slots: Vec<_> = pattern
            .iter()
            .map(|&s| {
                (s == S::ANY_MANY || s == S::NUMERIC_RUN).then(|| {
                    n += 1;
                    n - 1
                })
            })
            .collect();

        Self {
            slots,
            width: (text_len + 1) * 2,
            rows: vec![Vec::new(); n],
        }
    }

    // Marks the state as visited and returns `true` if it was not visited before.
    #[inline]
    fn insert(&mut self, p: usize, t: usize, run: bool) -> bool {
        let Some(slot) = self.slots[p] else {
            return true;
        };
        let row = &mut self.rows[slot];
        if row.is_empty() {
            row.resize(self.width.div_ceil(64), 0);
        }
        let i = t * 2 + run as usize;
        let (word, bit) = (i / 64, 1u64 << (i % 64));
        let fresh = row[word] & bit == 0;
        row[word] |= bit;
        fresh
    }

    #[cfg(test)]
    fn allocated_rows(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_empty()).count()
    }
}
