//! Locale-aware fixed-point formatting for converted amounts.

/// Separators used when rendering a number for a given locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    pub decimal_separator: char,
    pub group_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl NumberLocale {
    pub const ENGLISH: Self = Self {
        decimal_separator: '.',
        group_separator: ',',
    };

    /// Picks separators from a BCP-47 tag such as `fr-FR` or `de`.
    ///
    /// Only the primary language subtag is considered, except for Swiss
    /// German which groups with an apostrophe. Unknown tags fall back to
    /// English.
    pub fn from_language_tag(tag: &str) -> Self {
        let tag = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = tag.split('-').next().unwrap_or("");

        let (decimal_separator, group_separator) = match language {
            "de" if tag.ends_with("-ch") => ('.', '\u{2019}'),
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" => (',', '.'),
            // narrow no-break space, as browsers render it
            "fr" | "nb" | "no" | "sv" | "fi" | "pl" | "cs" | "sk" | "ru" | "uk" => {
                (',', '\u{202f}')
            }
            _ => return Self::ENGLISH,
        };

        Self {
            decimal_separator,
            group_separator,
        }
    }
}

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Rounds `value` to `decimals` fraction digits, ties away from zero.
///
/// Works on the exact decimal expansion of the float, so `1.125` is a tie
/// while `1.005` (stored as 1.00499..) is not. Returns the sign and the
/// integer and fraction digit strings.
fn round_half_away(value: f64, decimals: usize) -> (bool, String, String) {
    let exact = format!("{:.*}", EXACT_DIGITS.max(decimals + 1), value);
    let (negative, digits) = match exact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exact.as_str()),
    };
    let (major, minor) = digits.split_once('.').unwrap_or((digits, ""));

    let mut kept: Vec<u8> = major.bytes().chain(minor.bytes().take(decimals)).collect();
    if minor.as_bytes().get(decimals).is_some_and(|d| *d >= b'5') {
        let mut carried = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carried = false;
                break;
            }
        }
        if carried {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - decimals;
    let major = String::from_utf8_lossy(&kept[..split]).into_owned();
    let minor = String::from_utf8_lossy(&kept[split..]).into_owned();
    (negative, major, minor)
}

/// Formats `value` with exactly `decimals` fraction digits.
///
/// Ties round away from zero on the exact decimal value of the float. The
/// integer part is grouped in threes with the locale's group separator.
///
/// # Examples
/// ```
/// use api::number_format::{format_fixed, NumberLocale};
/// assert_eq!(format_fixed(108.5, 2, &NumberLocale::ENGLISH), "108.50");
/// assert_eq!(format_fixed(1234.5, 2, &NumberLocale::from_language_tag("de-DE")), "1.234,50");
/// ```
pub fn format_fixed(value: f64, decimals: usize, locale: &NumberLocale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let (negative, major, minor) = round_half_away(value, decimals);

    let mut out = String::with_capacity(major.len() + major.len() / 3 + minor.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, c) in major.chars().enumerate() {
        if i > 0 && (major.len() - i) % 3 == 0 {
            out.push(locale.group_separator);
        }
        out.push(c);
    }
    if !minor.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(&minor);
    }
    out
}
