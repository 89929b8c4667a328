/// Strips a leading enumeration marker from one instruction block: optional
/// whitespace, optional "Step" (any case) plus whitespace, digits, then a
/// literal "." or ")". Returns the block unchanged when no marker matches.
fn strip_step_marker(block: &str) -> &str {
    let mut rest = block.trim_start();

    if let Some(after) = rest
        .get(..4)
        .filter(|prefix| prefix.eq_ignore_ascii_case("step"))
        .map(|_| &rest[4..])
    {
        // "Step" only counts as part of a marker when followed by whitespace
        let trimmed = after.trim_start();
        if trimmed.len() < after.len() {
            rest = trimmed;
        }
    }

    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return block;
    }
    let after_digits = &rest[digits..];

    match after_digits.strip_prefix(['.', ')']) {
        Some(tail) => tail,
        None => block,
    }
}

/// Splits a drink's free-text instructions into display steps.
///
/// The API is inconsistent about formatting: some recipes separate steps with
/// blank lines, some with single newlines, some carry their own "1)" / "2." /
/// "Step 3." numbering inline. Every newline is treated as a step boundary
/// (runs of blank lines collapse), each block is trimmed, and any leading
/// numbering is stripped so the caller can renumber for display.
///
/// Returns an empty vec for absent or blank input. If splitting and marker
/// stripping leave nothing (e.g. the text is just "1)"), the original trimmed
/// text is returned as a single step so instructions are never dropped
/// entirely.
pub fn segment_instructions(instructions: Option<&str>) -> Vec<String> {
    let text = match instructions {
        Some(text) => text.trim(),
        None => return Vec::new(),
    };
    if text.is_empty() {
        return Vec::new();
    }

    let steps: Vec<String> = text
        .split('\n')
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| strip_step_marker(block).trim().to_string())
        .filter(|step| !step.is_empty())
        .collect();

    if steps.is_empty() {
        vec![text.to_string()]
    } else {
        steps
    }
}
