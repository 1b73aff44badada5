//! String-case transforms used by generated code and templates.

fn map_first(s: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| f(first) + chars.as_str())
        .unwrap_or_default()
}

/// "title" -> "Title".
///
/// The word "id" in any casing becomes the Go initialism "ID", so an `id`
/// field yields an exported `ID()` accessor.
pub fn capitalize(s: &str) -> String {
    if s.eq_ignore_ascii_case("id") {
        return "ID".to_string();
    }
    map_first(s, |c| c.to_uppercase().collect())
}

/// "PostResolver" -> "postResolver".
pub fn uncapitalize(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// "created_at" -> "CreatedAt". Only the first letter of each part changes.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| map_first(part, |c| c.to_uppercase().collect()))
        .collect()
}

/// "createdAt" -> "created_at". Dashes become underscores too.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        match c {
            '-' => out.push('_'),
            c if c.is_uppercase() => {
                if !out.is_empty() {
                    out.push('_');
                }
                out.extend(c.to_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}
