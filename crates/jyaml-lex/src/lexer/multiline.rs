//! `|` (literal) and `>` (folded) multiline scalar scanning, including the
//! optional chomping indicator.

use jyaml_util::LexicalErrorKind;

use super::core::Lexer;

#[derive(Clone, Copy)]
enum Chomping {
    /// `-`: drop the final line break and any trailing blank lines.
    Strip,
    /// No indicator: keep a single trailing line break, collapsing any
    /// further trailing blank lines.
    Clip,
    /// `+`: keep the final line break and all trailing blank lines.
    Keep,
}

impl<'a> Lexer<'a> {
    /// Scans a multiline scalar introduced by `indicator` (`|` or `>`).
    /// The cursor is positioned on `indicator` when this is called.
    pub(super) fn lex_multiline(&mut self, indicator: char) -> Result<String, jyaml_util::LexicalError> {
        self.cursor.advance(); // '|' or '>'

        let chomping = match self.cursor.current_char() {
            Some('-') => {
                self.cursor.advance();
                Chomping::Strip
            }
            Some('+') => {
                if !self.config.allow_keep_chomping_extension {
                    return Err(self.err(LexicalErrorKind::UnexpectedChar('+')));
                }
                self.cursor.advance();
                Chomping::Keep
            }
            _ => Chomping::Clip,
        };

        loop {
            match self.cursor.current_char() {
                Some(' ') => {
                    self.cursor.advance();
                }
                Some('\n') | None => break,
                Some(c) => return Err(self.err(LexicalErrorKind::UnexpectedChar(c))),
            }
        }

        if self.cursor.current_char() == Some('\n') {
            self.cursor.advance();
        } else {
            // End of input immediately after the indicator: empty scalar.
            return Ok(String::new());
        }

        let (lines, ended_with_newline) = self.read_block_lines()?;

        if lines.is_empty() {
            return Ok(String::new());
        }

        let raw = if indicator == '>' {
            fold(&lines)
        } else {
            lines.join("\n")
        };

        Ok(apply_chomping(raw, chomping, ended_with_newline))
    }

    /// Reads the run of lines belonging to a multiline scalar: every line
    /// indented at least as far as the first non-blank continuation line.
    /// Stops (rewinding to the line's start) at the first line that falls
    /// short, or at end of input.
    fn read_block_lines(&mut self) -> Result<(Vec<String>, bool), jyaml_util::LexicalError> {
        let mut lines = Vec::new();
        let mut base_indent: Option<usize> = None;
        let mut ended_with_newline = true;

        loop {
            if self.cursor.is_at_end() {
                // Nothing left to read as a new line. Whether the scalar
                // itself ended with a newline was already decided by the
                // previous iteration, when it consumed (or failed to find)
                // that line's own terminator — reaching end of input here
                // is the ordinary case for a document whose last line in
                // scope was itself newline-terminated, not a sign that it
                // wasn't.
                break;
            }

            let line_start = self.cursor.snapshot();
            let mut indent = 0usize;
            loop {
                match self.cursor.current_char() {
                    Some(' ') => {
                        self.cursor.advance();
                        indent += 1;
                    }
                    Some('\t') => return Err(self.err(LexicalErrorKind::TabForbidden)),
                    _ => break,
                }
            }

            let is_blank = matches!(self.cursor.current_char(), Some('\n') | None);
            if is_blank {
                lines.push(String::new());
                if self.cursor.current_char() == Some('\n') {
                    self.cursor.advance();
                    continue;
                }
                ended_with_newline = false;
                break;
            }

            let base = *base_indent.get_or_insert(indent);
            if indent < base {
                self.cursor.restore(line_start);
                break;
            }

            let extra = indent - base;
            let content_start = self.cursor.byte_offset();
            while let Some(c) = self.cursor.current_char() {
                if c == '\n' {
                    break;
                }
                self.cursor.advance();
            }
            let rest = self.cursor.slice_from(content_start);
            let mut content = " ".repeat(extra);
            content.push_str(rest);
            lines.push(content);

            if self.cursor.current_char() == Some('\n') {
                self.cursor.advance();
            } else {
                ended_with_newline = false;
                break;
            }
        }

        Ok((lines, ended_with_newline))
    }
}

/// Folds content lines together the way `>` scalars do: adjacent non-blank
/// lines join with a single space, and a *run* of one or more blank lines
/// collapses to a single newline — not one newline per blank line.
fn fold(lines: &[String]) -> String {
    let mut out = String::new();
    let mut prev_blank = true;
    for line in lines {
        let blank = line.is_empty();
        if blank {
            if !prev_blank {
                out.push('\n');
            }
        } else {
            if !prev_blank {
                out.push(' ');
            }
            out.push_str(line);
        }
        prev_blank = blank;
    }
    out
}

fn apply_chomping(raw: String, chomping: Chomping, ended_with_newline: bool) -> String {
    match chomping {
        Chomping::Strip => raw.trim_end_matches('\n').to_string(),
        Chomping::Clip => format!("{}\n", raw.trim_end_matches('\n')),
        Chomping::Keep => {
            if ended_with_newline {
                format!("{raw}\n")
            } else {
                raw
            }
        }
    }
}
