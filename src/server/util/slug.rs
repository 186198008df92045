//! Slug derivation and checks.

/// Derives a URL slug from a display name.
///
/// Accented Latin letters are folded to ASCII, every other run of non alphanumeric characters
/// becomes a single hyphen.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_hyphen = false;

    for c in value.chars().flat_map(char::to_lowercase) {
        let folded = match c {
            'a'..='z' | '0'..='9' => {
                if pending_hyphen {
                    slug.push('-');
                    pending_hyphen = false;
                }
                slug.push(c);
                continue;
            }
            other => fold_accent(other),
        };

        if folded.is_empty() {
            pending_hyphen = !slug.is_empty();
            continue;
        }

        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        slug.push_str(folded);
    }

    slug
}

/// Whether `value` is a well-formed slug: lowercase ASCII letters and digits joined by single
/// hyphens.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

fn fold_accent(c: char) -> &'static str {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' | 'ø' => "o",
        'œ' => "oe",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        _ => "",
    }
}
