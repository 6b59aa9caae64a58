//! Lexical tolerance knobs consumed by the [`crate::Lexer`].
//!
//! This is the lexer's slice of the full `ParseOptions` bundle that
//! `jyaml-par` builds on top of — it only carries what the lexer itself
//! needs to decide.

/// Lexical tolerances for a single [`crate::Lexer`] run.
#[derive(Clone, Copy, Debug)]
pub struct LexerConfig {
    /// When `false`, a tab character used as inter-token whitespace (never
    /// as indentation — that is always forbidden) is accepted instead of
    /// raising `TabForbidden`. Meaningful only in permissive mode.
    pub allow_tab_whitespace_extension: bool,
    /// When `false`, a `+` (keep) chomping indicator on a multiline scalar
    /// is rejected; only `-` (strip) and the default (clip) are accepted.
    pub allow_keep_chomping_extension: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            allow_tab_whitespace_extension: false,
            allow_keep_chomping_extension: true,
        }
    }
}
