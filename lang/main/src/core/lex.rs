//! Orthographic predicates and derived surface forms.
//!
//! Everything here is context-free: a function of the token text alone.
//! Vocabulary-dependent attributes (is_stop, is_oov, norm) live on `Vocab`.

const LEFT_PUNCT: &str = "([{<\u{00ab}\u{201c}\u{2018}\u{00bf}\u{00a1}";
const RIGHT_PUNCT: &str = ")]}>\u{00bb}\u{201d}\u{2019}";
const BRACKETS: &str = "()[]{}<>";
const CURRENCY: &str = "$\u{00a2}\u{00a3}\u{20ac}\u{00a5}\u{20b9}\u{20bd}\u{00a4}";
const EXTRA_PUNCT: &str = "\u{2026}\u{2014}\u{2013}\u{2018}\u{2019}\u{201c}\u{201d}\u{00ab}\u{00bb}\u{00bf}\u{00a1}";

const NUM_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
    "nine", "ten", "eleven", "twelve", "dozen", "hundred", "thousand",
    "million", "billion", "trillion",
];

pub(crate) fn is_punct_char(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCT.contains(c)
}

pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

pub fn is_ascii(text: &str) -> bool {
    text.is_ascii()
}

pub fn is_digit(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

/// At least one cased character and no uppercase ones.
pub fn is_lower(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// At least one cased character and no lowercase ones.
pub fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && !text.chars().any(char::is_lowercase)
}

/// Titlecase in the Python `str.istitle` sense: every cased run starts with
/// an uppercase character followed only by lowercase ones.
pub fn is_title(text: &str) -> bool {
    let mut cased = false;
    let mut prev_cased = false;
    for c in text.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            cased = true;
            prev_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            cased = true;
        } else {
            prev_cased = false;
        }
    }
    cased
}

pub fn is_punct(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_punct_char)
}

pub fn is_left_punct(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| LEFT_PUNCT.contains(c))
}

pub fn is_right_punct(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| RIGHT_PUNCT.contains(c))
}

pub fn is_space(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

pub fn is_bracket(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| BRACKETS.contains(c))
}

pub fn is_currency(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| CURRENCY.contains(c))
}

pub fn like_url(text: &str) -> bool {
    if text.contains(char::is_whitespace) || text.len() < 4 {
        return false;
    }
    if text.starts_with("http://") || text.starts_with("https://") || text.starts_with("www.") {
        return true;
    }
    // bare domain: at least one dot and a known final label
    match text.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty()
                && matches!(tld, "com" | "org" | "net" | "io" | "gov" | "edu" | "dev")
        }
        None => false,
    }
}

/// Digits with optional separators, a fraction, or a spelled-out number.
pub fn like_num(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-']).unwrap_or(text);
    if text.is_empty() {
        return false;
    }
    let stripped: String = text.chars().filter(|c| !matches!(c, ',' | '.')).collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Some((num, denom)) = text.split_once('/') {
        if is_digit(num) && is_digit(denom) {
            return true;
        }
    }
    NUM_WORDS.contains(&text.to_lowercase().as_str())
}

pub fn like_email(text: &str) -> bool {
    if text.contains(char::is_whitespace) {
        return false;
    }
    match text.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains('@')
        }
        None => false,
    }
}

/// Orthographic shape: uppercase -> X, lowercase -> x, digit -> d, other
/// characters kept as-is. Runs of the same class are capped at four.
pub fn shape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = '\0';
    let mut run = 0usize;
    for c in text.chars() {
        let mapped = if c.is_uppercase() {
            'X'
        } else if c.is_lowercase() {
            'x'
        } else if c.is_ascii_digit() {
            'd'
        } else {
            c
        };
        if mapped == last {
            run += 1;
        } else {
            last = mapped;
            run = 1;
        }
        if run <= 4 {
            out.push(mapped);
        }
    }
    out
}

/// First character of the token.
pub fn prefix(text: &str) -> String {
    text.chars().take(1).collect()
}

/// Last three characters of the token.
pub fn suffix(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let start = chars.len().saturating_sub(3);
    chars[start..].iter().collect()
}
