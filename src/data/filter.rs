// ---------------------------------------------------------------------------
// Row acceptance: which lines of a log are numeric data
// ---------------------------------------------------------------------------

/// A line that passed [`is_data_line`], kept verbatim for the strict parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetainedLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub text: String,
}

/// A line is data when it has at least one token and the first token parses
/// as an `f64`. Everything after the first token is left for the loader.
pub fn is_data_line(line: &str) -> bool {
    match line.split_whitespace().next() {
        Some(first) => first.parse::<f64>().is_ok(),
        None => false,
    }
}

/// Skip the header line, then keep every line accepted by [`is_data_line`].
///
/// Rejected lines are dropped silently (logged at `debug` only).
pub fn retained_lines(text: &str) -> Vec<RetainedLine> {
    text.lines()
        .enumerate()
        .skip(1)
        .filter_map(|(i, line)| {
            let line_no = i + 1;
            if is_data_line(line) {
                Some(RetainedLine {
                    line: line_no,
                    text: line.to_string(),
                })
            } else {
                if line.trim().is_empty() {
                    log::debug!("line {line_no}: skipping blank line");
                } else {
                    log::debug!("line {line_no}: skipping non-numeric row {:?}", line.trim());
                }
                None
            }
        })
        .collect()
}
