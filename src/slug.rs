/// URL slug of a title: lowercase, trimmed, whitespace runs become `-`, dots dropped
///
/// Accented letters are kept (`Crepúsculo` → `crepúsculo`).
pub fn slugify(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .replace('.', "")
}
