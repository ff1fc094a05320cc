//! Splitting a raw command line into tokens.

/// Splits a command line on runs of unescaped whitespace.
///
/// A backslash directly before a whitespace character keeps that character
/// inside the current token; any other backslash is literal. No empty tokens
/// are produced, so a blank line yields an empty vector.
///
/// # Examples
///
/// ```
/// use command_input_core::split_command_line;
///
/// assert_eq!(
///     split_command_line(r"greet hello\ world --name=a\ \ b"),
///     vec!["greet", "hello world", "--name=a  b"]
/// );
/// assert!(split_command_line("   ").is_empty());
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    current.push(next);
                    chars.next();
                    in_token = true;
                    continue;
                }
            }
            current.push(c);
            in_token = true;
        } else if c.is_whitespace() {
            if in_token {
                tokens.push(std::mem::take(&mut current));
                in_token = false;
            }
        } else {
            current.push(c);
            in_token = true;
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
}
