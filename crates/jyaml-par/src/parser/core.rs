//! Core parser state: the token buffer, lookahead helpers, depth counter,
//! and the document-level entry point.

use indexmap::IndexMap;
use jyaml_lex::{Token, TokenKind};
use jyaml_util::{ParseError, ParseErrorKind, Position};

use crate::options::ParseOptions;
use crate::value::{CommentPosition, ParsedDocument, Value};

/// Recursive-descent parser over a complete token stream.
///
/// Holds the whole token vector rather than an iterator — the grammar needs
/// one token of lookahead beyond "current" (to tell a plain string value
/// from the key of a block-object pair), and indexing a `Vec` is simpler
/// than a peekable-of-peekable iterator.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
    pub(super) options: ParseOptions,
    comments: Vec<String>,
    comment_positions: Option<Vec<CommentPosition>>,
}

impl Parser {
    /// Builds a parser from a token stream with comments already split out.
    /// `tokens` must still contain `Newline`/`Indent` tokens — they are
    /// skipped during parsing but are not removed up front, since `jyaml-lex`
    /// emits them as ordinary tokens.
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        let comment_positions = if options.include_comment_positions {
            Some(Vec::new())
        } else {
            None
        };
        Self {
            tokens,
            position: 0,
            depth: 0,
            options,
            comments: Vec::new(),
            comment_positions,
        }
    }

    /// Parses a complete document: `NEWLINE* value? NEWLINE* EOF`.
    pub fn parse_document(mut self) -> Result<ParsedDocument, ParseError> {
        self.collect_comments();
        self.skip_insignificant();

        let root = if self.is_eof() {
            Value::Null
        } else {
            self.parse_value()?
        };

        self.skip_insignificant();
        if !self.is_eof() {
            return Err(self.err(ParseErrorKind::TrailingContent));
        }

        Ok(ParsedDocument {
            root,
            comments: self.comments,
            comment_positions: self.comment_positions,
        })
    }

    /// Pulls every `Comment` token out of the stream into `self.comments`
    /// (and `self.comment_positions`, if configured), in source order. Run
    /// once up front so the grammar below never has to special-case
    /// comments the way it special-cases `Newline`/`Indent`.
    fn collect_comments(&mut self) {
        let mut kept = Vec::with_capacity(self.tokens.len());
        for token in self.tokens.drain(..) {
            if let TokenKind::Comment(text) = token.kind {
                if self.options.preserve_comments {
                    if let Some(positions) = self.comment_positions.as_mut() {
                        positions.push(CommentPosition {
                            text: text.clone(),
                            line: token.line,
                            column: token.column,
                        });
                    }
                    self.comments.push(text);
                }
            } else {
                kept.push(token);
            }
        }
        self.tokens = kept;
    }

    // -- lookahead -----------------------------------------------------

    pub(super) fn current(&self) -> &TokenKind {
        self.tokens
            .get(self.position)
            .map(|t| &t.kind)
            .unwrap_or(&TokenKind::Eof)
    }

    pub(super) fn current_position(&self) -> Position {
        self.tokens
            .get(self.position)
            .map(|t| t.position())
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|t| t.position())
                    .unwrap_or_else(Position::start)
            })
    }

    /// The first significant (non-`Newline`/`Indent`) token at or after
    /// `position`, without mutating the cursor.
    fn peek_significant_from(&self, mut position: usize) -> &TokenKind {
        loop {
            match self.tokens.get(position).map(|t| &t.kind) {
                Some(TokenKind::Newline) | Some(TokenKind::Indent(_)) => position += 1,
                Some(kind) => return kind,
                None => return &TokenKind::Eof,
            }
        }
    }

    /// `true` if the next significant token after the current one is `:` —
    /// the two-token lookahead that disambiguates a block-object key from a
    /// plain string value.
    pub(super) fn next_significant_is_colon(&self) -> bool {
        matches!(
            self.peek_significant_from(self.position + 1),
            TokenKind::Colon
        )
    }

    /// `true` if the current token, after skipping `Newline`/`Indent`, is a
    /// `Dash` — used by callers that need to decide without consuming.
    pub(super) fn at_dash(&self) -> bool {
        matches!(self.peek_significant_from(self.position), TokenKind::Dash)
    }

    /// `true` if the current significant token starts a `STRING ... COLON`
    /// pair, i.e. a block-object entry.
    pub(super) fn at_block_object_pair(&self) -> bool {
        let mut position = self.position;
        loop {
            match self.tokens.get(position).map(|t| &t.kind) {
                Some(TokenKind::Newline) | Some(TokenKind::Indent(_)) => position += 1,
                Some(TokenKind::String(_)) => {
                    return matches!(self.peek_significant_from(position + 1), TokenKind::Colon)
                }
                _ => return false,
            }
        }
    }

    pub(super) fn is_eof(&self) -> bool {
        matches!(self.current(), TokenKind::Eof)
    }

    pub(super) fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Skips `Newline` and `Indent` tokens. Block structure is recognized
    /// purely from the STRING/COLON/DASH token sequence (see DESIGN.md for
    /// the indentation-strictness decision), so these tokens carry no
    /// grammatical weight once the lexer has produced them.
    pub(super) fn skip_insignificant(&mut self) {
        while matches!(self.current(), TokenKind::Newline | TokenKind::Indent(_)) {
            self.advance();
        }
    }

    /// Consumes a `STRING` token and returns its decoded value, or an error
    /// if the current token is not a string.
    pub(super) fn take_string(&mut self) -> Result<String, ParseError> {
        match self.current().clone() {
            TokenKind::String(s) => {
                self.advance();
                Ok(s)
            }
            other => Err(self.err(ParseErrorKind::UnexpectedToken(other.to_string()))),
        }
    }

    /// Like [`Self::take_string`], but also returns the position the string
    /// started at — needed to anchor a `DuplicateKey` error at the key, not
    /// at wherever parsing happens to be once the duplicate is noticed.
    pub(super) fn take_string_with_position(&mut self) -> Result<(String, Position), ParseError> {
        let position = self.current_position();
        let key = self.take_string()?;
        Ok((key, position))
    }

    /// Consumes a `Colon`, or fails with `ExpectedColon`.
    pub(super) fn expect_colon(&mut self) -> Result<(), ParseError> {
        if matches!(self.current(), TokenKind::Colon) {
            self.advance();
            Ok(())
        } else {
            Err(self.err(ParseErrorKind::ExpectedColon))
        }
    }

    /// Inserts a key/value pair into an object under construction, applying
    /// `allow_duplicate_keys`'s rule (the field a caller actually toggles to
    /// admit duplicates — `strict_mode` forbids pairing with it, but a
    /// permissive-yet-still-no-duplicates combination is valid and must
    /// still reject). A duplicate under a tolerant setting simply overwrites
    /// the earlier value; `IndexMap::insert` already keeps the key at its
    /// original position, so first-insertion order survives either way.
    pub(super) fn insert_object_entry(
        &self,
        map: &mut IndexMap<String, Value>,
        key: String,
        key_position: Position,
        value: Value,
    ) -> Result<(), ParseError> {
        if !self.options.allow_duplicate_keys && map.contains_key(&key) {
            return Err(self.err_at(ParseErrorKind::DuplicateKey(key), key_position));
        }
        map.insert(key, value);
        Ok(())
    }

    /// Enters a nested container, failing if this exceeds `max_depth`.
    pub(super) fn enter_container(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if let Some(max) = self.options.max_depth {
            if self.depth > max.get() {
                return Err(self.err(ParseErrorKind::DepthExceeded(max.get())));
            }
        }
        Ok(())
    }

    pub(super) fn exit_container(&mut self) {
        self.depth -= 1;
    }

    pub(super) fn err(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::at(kind, self.current_position())
    }

    pub(super) fn err_at(&self, kind: ParseErrorKind, position: Position) -> ParseError {
        ParseError::at(kind, position)
    }

    pub(super) fn parse_value(&mut self) -> Result<Value, ParseError> {
        value::parse_value(self)
    }
}

use super::value;
