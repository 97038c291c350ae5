//! Raw-input layout: code lines vs. the trailing variable block.


/// The three sections of a source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLayout {
    /// Statement lines in original order, already trimmed and non-empty.
    pub code: Vec<String>,
    /// Variable names from the second-to-last line.
    pub names: Vec<String>,
    /// Initial-value tokens from the last line.
    pub values: Vec<String>,
}

/// Split raw input into its layout.
///
/// Every line is trimmed (which also drops a trailing carriage return) and
/// blank lines are discarded. The last surviving line holds the
/// initial-value tokens, the second-to-last the variable names, and
/// everything before them is code. Fewer than three surviving lines means
/// the program has no statements and no variables: `None`, and the run
/// produces no output.
pub fn split_source(input: &str) -> Option<SourceLayout> {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 3 {
        return None;
    }

    let split_tokens = |line: &str| line.split_whitespace().map(str::to_string).collect();
    let values = split_tokens(lines[lines.len() - 1]);
    let names = split_tokens(lines[lines.len() - 2]);
    let code = lines[..lines.len() - 2]
        .iter()
        .map(|line| (*line).to_string())
        .collect();

    Some(SourceLayout { code, names, values })
}
