/// Removes every whitespace character from an input line.
///
/// Expressions may be typed with spaces around the operator or carry a
/// trailing newline; the evaluator expects neither.
///
/// # Example
/// ```
/// use romanus::util::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" 3 +  4 \n"), "3+4");
/// assert_eq!(strip_whitespace("\tX\t*\tII"), "X*II");
/// ```
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}
