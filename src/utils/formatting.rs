/// Replaces every `:key` placeholder in `pattern` with its value.
///
/// Keys are substituted in the order given, so when one key is a prefix of
/// another (`:id` and `:identity`) the longer one has to be listed first.
pub fn apply_pattern_string(pattern: &str, vars: &[(&str, &str)]) -> String {
    let mut result = pattern.to_string();
    for (key, value) in vars {
        let needle = format!(":{}", key);
        result = result.replace(&needle, value);
    }
    result
}
