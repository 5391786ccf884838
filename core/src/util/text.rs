/// Last `n` lines of `s` after trimming surrounding whitespace.
/// Empty input yields no lines.
pub fn last_lines(s: &str, n: usize) -> Vec<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() || n == 0 {
        return Vec::new();
    }
    let lines: Vec<&str> = trimmed.lines().collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_tail_of_trimmed_text() {
        let out = "one\ntwo\nthree\nfour\n\n";
        assert_eq!(last_lines(out, 3), vec!["two", "three", "four"]);
    }

    #[test]
    fn short_and_empty_input() {
        assert_eq!(last_lines("only", 3), vec!["only"]);
        assert!(last_lines("  \n ", 3).is_empty());
        assert!(last_lines("x", 0).is_empty());
    }
}
