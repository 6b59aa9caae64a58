//! Parse-time configuration: lexical tolerances, structural limits, and the
//! presets built on top of them.
//!
//! Every constructor here validates its own fields — an invalid combination
//! never escapes into a live `Parser`.

use std::num::NonZeroUsize;

/// Upper bound accepted for an explicit `max_depth`; `None` means unlimited.
const MAX_DEPTH_CEILING: usize = 100_000;

/// What happens when an integer lexeme is wider than `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Decode the lexeme as a float instead of failing.
    #[default]
    Widen,
    /// Raise `ParseErrorKind::Overflow`.
    Error,
}

/// How `\r` in the input is handled before lexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEndingPolicy {
    /// No normalization; a bare `\r` is a lexical error.
    #[default]
    None,
    /// `\r\n` and bare `\r` are rewritten to `\n` before lexing.
    Lf,
    /// Same rewrite as `Lf`. Kept as a distinct option for symmetry with the
    /// (out-of-scope) serializer, which is the only place the two diverge.
    Crlf,
}

/// A violated consistency rule between two [`ParseOptions`] fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOptionsError {
    #[error("strict_mode is incompatible with allow_duplicate_keys")]
    StrictModeForbidsDuplicateKeys,
    #[error("include_comment_positions requires preserve_comments")]
    CommentPositionsRequireComments,
    #[error("max_depth must be within [1, {MAX_DEPTH_CEILING}], got {0}")]
    MaxDepthOutOfRange(usize),
}

/// Configuration governing a single [`crate::Parser`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOptions {
    pub strict_mode: bool,
    pub preserve_comments: bool,
    pub allow_duplicate_keys: bool,
    /// `None` means unlimited nesting.
    pub max_depth: Option<NonZeroUsize>,
    pub include_comment_positions: bool,
    pub normalize_line_endings: LineEndingPolicy,
    pub overflow_policy: OverflowPolicy,
    /// Only meaningful when `strict_mode` is `false`.
    pub allow_tab_whitespace_extension: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_mode: true,
            preserve_comments: true,
            allow_duplicate_keys: false,
            max_depth: NonZeroUsize::new(1000),
            include_comment_positions: false,
            normalize_line_endings: LineEndingPolicy::None,
            overflow_policy: OverflowPolicy::Widen,
            allow_tab_whitespace_extension: false,
        }
    }
}

impl ParseOptions {
    /// Checks the cross-field consistency rules. Every preset below already
    /// satisfies these; this is the gate for options a caller builds by hand.
    pub fn validate(&self) -> Result<(), ParseOptionsError> {
        if self.strict_mode && self.allow_duplicate_keys {
            return Err(ParseOptionsError::StrictModeForbidsDuplicateKeys);
        }
        if self.include_comment_positions && !self.preserve_comments {
            return Err(ParseOptionsError::CommentPositionsRequireComments);
        }
        if let Some(depth) = self.max_depth {
            if depth.get() > MAX_DEPTH_CEILING {
                return Err(ParseOptionsError::MaxDepthOutOfRange(depth.get()));
            }
        }
        Ok(())
    }

    /// The default preset: strict mode, comments retained, depth capped at
    /// 1000.
    pub fn strict() -> Self {
        Self::default()
    }

    /// Tolerant preset: strict mode off, duplicate keys and the tab
    /// extension allowed, a generous depth cap.
    pub fn permissive() -> Self {
        Self {
            strict_mode: false,
            allow_duplicate_keys: true,
            max_depth: NonZeroUsize::new(10_000),
            allow_tab_whitespace_extension: true,
            ..Self::default()
        }
    }

    /// Throughput-oriented preset: comments discarded, a tight depth cap.
    pub fn fast() -> Self {
        Self {
            preserve_comments: false,
            max_depth: NonZeroUsize::new(100),
            ..Self::default()
        }
    }

    /// Permissive plus comment position tracking, for diagnostics.
    pub fn debug() -> Self {
        Self {
            include_comment_positions: true,
            ..Self::permissive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ParseOptions::default().validate().is_ok());
    }

    #[test]
    fn every_preset_is_valid() {
        assert!(ParseOptions::strict().validate().is_ok());
        assert!(ParseOptions::permissive().validate().is_ok());
        assert!(ParseOptions::fast().validate().is_ok());
        assert!(ParseOptions::debug().validate().is_ok());
    }

    #[test]
    fn strict_mode_forbids_duplicate_keys() {
        let opts = ParseOptions {
            allow_duplicate_keys: true,
            ..ParseOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(ParseOptionsError::StrictModeForbidsDuplicateKeys)
        );
    }

    #[test]
    fn comment_positions_require_comments() {
        let opts = ParseOptions {
            preserve_comments: false,
            include_comment_positions: true,
            ..ParseOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(ParseOptionsError::CommentPositionsRequireComments)
        );
    }

    #[test]
    fn max_depth_ceiling_enforced() {
        let opts = ParseOptions {
            max_depth: NonZeroUsize::new(200_000),
            ..ParseOptions::default()
        };
        assert_eq!(
            opts.validate(),
            Err(ParseOptionsError::MaxDepthOutOfRange(200_000))
        );
    }
}
