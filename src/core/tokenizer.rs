/// Splits a command line into words on runs of blanks.
///
/// There is no quoting or escaping: every maximal run of non-whitespace
/// characters is one token, so no token is ever empty.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_ascii_whitespace().map(String::from).collect()
}
