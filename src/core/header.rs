//! Line-based detection of the header block at the top of a parent file.
//!
//! The header is the leading run of blank lines, `//` and `//!` comments,
//! `/* */` and `/*! */` block comments and `#![...]` inner attributes. Outer
//! doc comments (`///`, `/** */`) and outer attributes (`#[...]`) belong to the
//! item that follows them, so they end the header instead of extending it.
//!
//! This is not a parser. Comment and bracket delimiters are counted per line,
//! which is enough for the shapes that show up at the top of `lib.rs`,
//! `main.rs` and `mod.rs`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    InHeader,
    /// Inside a block comment opened in the header; `depth` counts nesting.
    InBlockComment { depth: usize },
    /// Inside an inner attribute spanning several lines.
    InAttribute { depth: usize },
    Done,
}

#[derive(Debug, Clone)]
pub struct HeaderScanner {
    state: HeaderState,
    consumed: usize,
    boundary: usize,
}

impl Default for HeaderScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderScanner {
    pub fn new() -> Self {
        Self {
            state: HeaderState::InHeader,
            consumed: 0,
            boundary: 0,
        }
    }

    pub fn state(&self) -> HeaderState {
        self.state
    }

    /// Number of leading lines that form a complete header. A block comment or
    /// attribute left open at end of input is not counted.
    pub fn boundary(&self) -> usize {
        self.boundary
    }

    pub fn feed(&mut self, line: &str) -> HeaderState {
        let trimmed = line.trim();

        self.state = match self.state {
            HeaderState::Done => return HeaderState::Done,
            HeaderState::InHeader => classify_header_line(trimmed),
            HeaderState::InBlockComment { depth } => {
                close_block_comment(depth, trimmed)
            }
            HeaderState::InAttribute { depth } => close_attribute(depth, trimmed),
        };

        if self.state != HeaderState::Done {
            self.consumed += 1;
        }
        if self.state == HeaderState::InHeader {
            self.boundary = self.consumed;
        }

        self.state
    }
}

/// Line index at which a declaration should be inserted.
pub fn header_boundary<'a>(lines: impl IntoIterator<Item = &'a str>) -> usize {
    let mut scanner = HeaderScanner::new();
    for line in lines {
        if scanner.feed(line) == HeaderState::Done {
            break;
        }
    }
    scanner.boundary()
}

fn classify_header_line(trimmed: &str) -> HeaderState {
    if trimmed.is_empty() {
        return HeaderState::InHeader;
    }

    if trimmed.starts_with("//") {
        return if is_outer_line_doc(trimmed) {
            HeaderState::Done
        } else {
            HeaderState::InHeader
        };
    }

    if trimmed.starts_with("/*") {
        if is_outer_block_doc(trimmed) {
            return HeaderState::Done;
        }
        return close_block_comment(0, trimmed);
    }

    if trimmed.starts_with("#![") {
        return close_attribute(0, trimmed);
    }

    HeaderState::Done
}

fn is_outer_line_doc(trimmed: &str) -> bool {
    trimmed.starts_with("///") && !trimmed.starts_with("////")
}

fn is_outer_block_doc(trimmed: &str) -> bool {
    trimmed.starts_with("/**") && !trimmed.starts_with("/***") && !trimmed.starts_with("/**/")
}

fn close_block_comment(depth: usize, trimmed: &str) -> HeaderState {
    let opened = depth + trimmed.matches("/*").count();
    let closed = trimmed.matches("*/").count();

    if closed >= opened {
        after_close(trimmed, "*/")
    } else {
        HeaderState::InBlockComment {
            depth: opened - closed,
        }
    }
}

fn close_attribute(depth: usize, trimmed: &str) -> HeaderState {
    let opened = depth + trimmed.matches('[').count();
    let closed = trimmed.matches(']').count();

    if closed >= opened {
        after_close(trimmed, "]")
    } else {
        HeaderState::InAttribute {
            depth: opened - closed,
        }
    }
}

/// A comment or attribute that closes mid-line only stays in the header when
/// nothing but a line comment follows the closing delimiter.
fn after_close(trimmed: &str, delimiter: &str) -> HeaderState {
    let rest = trimmed
        .rfind(delimiter)
        .map(|at| trimmed[at + delimiter.len()..].trim())
        .unwrap_or_default();

    if rest.is_empty() || (rest.starts_with("//") && !is_outer_line_doc(rest)) {
        HeaderState::InHeader
    } else {
        HeaderState::Done
    }
}
