// ABOUTME: Splits free-text tool documentation into named sections by
// ABOUTME: scanning for Args:/Returns:/Example: header lines.

use serde::Serialize;

/// Fallback description for undocumented tools.
pub const NO_DESCRIPTION: &str = "No description available";

/// Parsed sections of a tool's documentation block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocSections {
    pub description: String,
    pub args: String,
    pub returns: String,
    pub example: String,
}

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Description,
    Args,
    Returns,
    Example,
}

/// Parse a documentation block into sections.
///
/// Lines before the first recognized header accumulate into `description`;
/// a header line (case-insensitive `Args:`, `Returns:`, `Example:`) starts a
/// new section. Malformed input degrades to best-effort assignment; an empty
/// or blank block yields only the fallback description.
pub fn parse_docstring(text: &str) -> DocSections {
    if text.trim().is_empty() {
        return DocSections {
            description: NO_DESCRIPTION.to_string(),
            ..DocSections::default()
        };
    }

    let mut sections = DocSections::default();
    let mut current = Section::Description;

    for line in text.lines() {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        let header = if lowered.starts_with("args:") {
            Some((Section::Args, "args:".len()))
        } else if lowered.starts_with("returns:") {
            Some((Section::Returns, "returns:".len()))
        } else if lowered.starts_with("example:") {
            Some((Section::Example, "example:".len()))
        } else {
            None
        };

        match header {
            Some((section, prefix_len)) => {
                current = section;
                // Inline content on the header line belongs to the section.
                let rest = trimmed[prefix_len..].trim();
                if !rest.is_empty() {
                    push_line(&mut sections, current, rest);
                }
            }
            None => push_line(&mut sections, current, trimmed),
        }
    }

    sections.description = sections.description.trim().to_string();
    sections.args = sections.args.trim().to_string();
    sections.returns = sections.returns.trim().to_string();
    sections.example = sections.example.trim().to_string();

    if sections.description.is_empty() {
        sections.description = NO_DESCRIPTION.to_string();
    }

    sections
}

fn push_line(sections: &mut DocSections, current: Section, line: &str) {
    let target = match current {
        Section::Description => &mut sections.description,
        Section::Args => &mut sections.args,
        Section::Returns => &mut sections.returns,
        Section::Example => &mut sections.example,
    };
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(line);
}

/// First non-empty line of a documentation block, for summary display.
pub fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}
