//! Author display name → author-page URL slug.
//!
//! The source site links author pages by a slugified display name: accents
//! folded to plain ASCII, spaces and periods turned into hyphens,
//! apostrophes dropped, hyphen runs collapsed, no trailing hyphen.

use std::sync::LazyLock;

use regex::Regex;

static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Derive the author-page slug from a display name.
///
/// "Marilyn Monroe" → "Marilyn-Monroe", "J.K. Rowling" → "J-K-Rowling",
/// "André Gide" → "Andre-Gide".
pub fn author_slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            ' ' | '.' => out.push('-'),
            '\'' | '’' => {}
            c if c.is_ascii() => out.push(c),
            c => {
                if let Some(folded) = fold_ascii(c) {
                    out.push_str(folded);
                }
            }
        }
    }
    let collapsed = HYPHEN_RUNS.replace_all(&out, "-");
    collapsed.trim_end_matches('-').to_string()
}

/// Nearest-ASCII fold for the Latin characters that show up in author names.
/// Characters with no mapping are dropped rather than guessed at.
fn fold_ascii(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ő' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ō' => "O",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' => "Y",
        'ñ' | 'ń' => "n",
        'Ñ' => "N",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'š' | 'ś' => "s",
        'Š' | 'Ś' => "S",
        'ž' | 'ź' | 'ż' => "z",
        'Ž' | 'Ź' | 'Ż' => "Z",
        'ł' => "l",
        'Ł' => "L",
        'đ' => "d",
        'Đ' => "D",
        'ř' => "r",
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "AE",
        'œ' => "oe",
        'Œ' => "OE",
        'ø' => "o",
        'Ø' => "O",
        _ => return None,
    };
    Some(folded)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name() {
        assert_eq!(author_slug("Marilyn Monroe"), "Marilyn-Monroe");
    }

    #[test]
    fn initials_collapse_to_single_hyphens() {
        assert_eq!(author_slug("J.K. Rowling"), "J-K-Rowling");
        assert_eq!(author_slug("J.R.R. Tolkien"), "J-R-R-Tolkien");
    }

    #[test]
    fn accents_fold_to_ascii() {
        assert_eq!(author_slug("André Gide"), "Andre-Gide");
        assert_eq!(author_slug("Gabriel García Márquez"), "Gabriel-Garcia-Marquez");
    }

    #[test]
    fn apostrophes_are_removed() {
        assert_eq!(author_slug("Flannery O'Connor"), "Flannery-OConnor");
        assert_eq!(author_slug("Madeleine L’Engle"), "Madeleine-LEngle");
    }

    #[test]
    fn no_trailing_hyphen() {
        assert_eq!(author_slug("Martin Luther King Jr."), "Martin-Luther-King-Jr");
    }

    #[test]
    fn slugs_are_pure_ascii_without_forbidden_characters() {
        for name in [
            "André Gide",
            "J.K. Rowling",
            "Flannery O'Connor",
            "Søren Kierkegaard",
            "Antoine de Saint-Exupéry",
            "Karen Blixen née Dinesen.",
        ] {
            let slug = author_slug(name);
            assert!(slug.is_ascii(), "{slug:?} is not ASCII");
            assert!(!slug.contains('.') && !slug.contains('\''));
            assert!(!slug.contains("--"), "{slug:?} has a doubled hyphen");
            assert!(!slug.ends_with('-'), "{slug:?} has a trailing hyphen");
        }
    }

    #[test]
    fn unmapped_characters_are_dropped() {
        assert_eq!(author_slug("Fyodor Достоевский"), "Fyodor");
    }
}
