/// Catalog cells arrive as text coerced from spreadsheet values; numeric
/// cells gain a trailing ".0" and empty cells become the literal "nan".
pub fn normalize_cell(value: &str) -> String {
    let value = value.trim();

    if value.eq_ignore_ascii_case("nan") {
        return String::new();
    }

    match value.strip_suffix(".0") {
        Some(stripped) => stripped.trim().to_string(),
        None => value.to_string(),
    }
}

/// Headers are matched case-insensitively, ignoring surrounding whitespace.
pub fn normalize_header(header: &str) -> String {
    let header = header.trim();

    let mut chars = header.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
