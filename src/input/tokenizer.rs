/// Splits a raw line into whitespace-delimited words. No quoting or escaping.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(String::from).collect()
}
