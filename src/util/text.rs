use regex::Regex;
use std::sync::OnceLock;

pub fn normalize_token(value: &str) -> String {
  value
    .to_lowercase()
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
    .collect::<String>()
    .split_whitespace()
    .collect::<Vec<&str>>()
    .join("_")
}

pub fn is_blank(value: &str) -> bool {
  value.trim().is_empty()
}

fn non_slug_chars() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("regex"))
}

/// Anchor-safe id: lowercase ASCII with accents folded, runs of anything
/// else collapsed to a single dash.
pub fn slugify(value: &str) -> String {
  let folded = value
    .to_lowercase()
    .chars()
    .map(fold_accent)
    .collect::<String>();
  non_slug_chars()
    .replace_all(&folded, "-")
    .trim_matches('-')
    .to_string()
}

fn fold_accent(c: char) -> char {
  match c {
    'á' | 'à' | 'ä' | 'â' => 'a',
    'é' | 'è' | 'ë' | 'ê' => 'e',
    'í' | 'ì' | 'ï' | 'î' => 'i',
    'ó' | 'ò' | 'ö' | 'ô' => 'o',
    'ú' | 'ù' | 'ü' | 'û' => 'u',
    'ñ' => 'n',
    _ => c,
  }
}
