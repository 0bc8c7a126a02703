//! codecs/lzss.rs
//! Sliding-window LZSS: brute-force match finder, token expander, and the
//! byte-oriented token wire format.
//!
//! Design notes:
//! - Window W=4096, lookahead L=18, minimum match M=4 (see compression::constants).
//! - Candidates are scanned oldest-first and replaced only on strictly longer
//!   matches, so ties keep the largest distance.
//! - Wire format per token: `[flag]` then `[byte]` (flag=1) or
//!   `[dist_hi][dist_lo][len]` (flag=0). No header, no length prefix.
//! - Decoding copies byte-by-byte so references may overlap their own output.

use byteorder::{BigEndian, ByteOrder};

use crate::compression::constants::{
    marker_ids, LITERAL_TOKEN_LEN, LZSS_LOOKAHEAD, LZSS_MIN_MATCH, LZSS_WINDOW_SIZE,
    REFERENCE_TOKEN_LEN, TOKEN_FLAG_LITERAL, TOKEN_FLAG_REFERENCE,
};
use crate::compression::types::{CompressionError, CompressionStrategy, Token};
use crate::constants::PASSWORD_PROBE_TOKENS;
use crate::types::FormatError;

/// Tokenize `input`.
pub fn encode(input: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    let mut pos = 0usize;

    while pos < input.len() {
        let (distance, length) = longest_match(input, pos);
        if length >= LZSS_MIN_MATCH {
            tokens.push(Token::Reference {
                distance: distance as u16,
                length: length as u8,
            });
            pos += length;
        } else {
            tokens.push(Token::Literal(input[pos]));
            pos += 1;
        }
    }

    tokens
}

/// Longest match for `input[pos..]` inside the window, as `(distance, length)`.
/// Returns `(0, 0)` when nothing matches.
fn longest_match(input: &[u8], pos: usize) -> (usize, usize) {
    let max_len = LZSS_LOOKAHEAD.min(input.len() - pos);
    let ahead = &input[pos..pos + max_len];
    let start = pos.saturating_sub(LZSS_WINDOW_SIZE);

    let mut best_len = 0usize;
    let mut best_dist = 0usize;

    for j in start..pos {
        let len = input[j..]
            .iter()
            .zip(ahead)
            .take_while(|(a, b)| a == b)
            .count();

        if len > best_len {
            best_len = len;
            best_dist = pos - j;
            if best_len == max_len {
                break;
            }
        }
    }

    (best_dist, best_len)
}

/// Expand a token sequence back into bytes.
pub fn decode(tokens: &[Token]) -> Result<Vec<u8>, FormatError> {
    let capacity = tokens.iter().map(Token::expanded_len).sum();
    let mut out = Vec::with_capacity(capacity);
    for token in tokens {
        apply_token(&mut out, *token)?;
    }
    Ok(out)
}

#[inline]
fn apply_token(out: &mut Vec<u8>, token: Token) -> Result<(), FormatError> {
    match token {
        Token::Literal(b) => out.push(b),
        Token::Reference { distance, length } => {
            let d = distance as usize;
            if d == 0 || d > out.len() {
                return Err(FormatError::DistanceOutOfRange {
                    distance,
                    produced: out.len(),
                });
            }
            let start = out.len() - d;
            out.reserve(length as usize);
            // Byte-at-a-time: later iterations may read bytes written by earlier ones.
            for k in 0..length as usize {
                let b = out[start + k];
                out.push(b);
            }
        }
    }
    Ok(())
}

/// Serialize tokens into the LZSS wire format.
pub fn serialize_tokens(tokens: &[Token]) -> Vec<u8> {
    let mut out = Vec::with_capacity(tokens.iter().map(Token::encoded_len).sum());
    for token in tokens {
        match *token {
            Token::Literal(b) => {
                out.push(TOKEN_FLAG_LITERAL);
                out.push(b);
            }
            Token::Reference { distance, length } => {
                out.push(TOKEN_FLAG_REFERENCE);
                out.extend_from_slice(&distance.to_be_bytes());
                out.push(length);
            }
        }
    }
    out
}

/// Parse a complete LZSS byte stream into tokens.
pub fn parse_tokens(buf: &[u8]) -> Result<Vec<Token>, FormatError> {
    TokenReader::new(buf).collect()
}

/// Tokenize and serialize in one step.
pub fn compress(input: &[u8]) -> Vec<u8> {
    serialize_tokens(&encode(input))
}

/// Parse and expand in one pass, without materializing the token list.
pub fn decompress(buf: &[u8]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::with_capacity(buf.len() * 2);
    for token in TokenReader::new(buf) {
        apply_token(&mut out, token?)?;
    }
    Ok(out)
}

/// Parse and expand at most `max_tokens` tokens, discarding the output.
///
/// Used to reject garbage (e.g. a payload decrypted with the wrong password)
/// without paying for a full decode.
pub fn probe(buf: &[u8], max_tokens: usize) -> Result<(), FormatError> {
    let mut out = Vec::new();
    for token in TokenReader::new(buf).take(max_tokens) {
        apply_token(&mut out, token?)?;
    }
    Ok(())
}

/// Streaming reader over the LZSS wire format.
///
/// Yields one `Err` on the first structural problem and then stops.
pub struct TokenReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> TokenReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Byte offset of the next token.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn fail(&mut self, err: FormatError) -> Option<Result<Token, FormatError>> {
        self.offset = self.buf.len();
        Some(Err(err))
    }
}

impl<'a> Iterator for TokenReader<'a> {
    type Item = Result<Token, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.offset;
        let flag = *self.buf.get(at)?;

        match flag {
            TOKEN_FLAG_LITERAL => {
                if at + LITERAL_TOKEN_LEN > self.buf.len() {
                    return self.fail(FormatError::TruncatedToken { offset: at });
                }
                self.offset += LITERAL_TOKEN_LEN;
                Some(Ok(Token::Literal(self.buf[at + 1])))
            }
            TOKEN_FLAG_REFERENCE => {
                if at + REFERENCE_TOKEN_LEN > self.buf.len() {
                    return self.fail(FormatError::TruncatedToken { offset: at });
                }
                let distance = BigEndian::read_u16(&self.buf[at + 1..at + 3]);
                let length = self.buf[at + 3];
                self.offset += REFERENCE_TOKEN_LEN;
                Some(Ok(Token::Reference { distance, length }))
            }
            other => self.fail(FormatError::UnknownTokenFlag { flag: other, offset: at }),
        }
    }
}

/// Registry adapter for the LZSS codec.
pub struct LzssStrategy;

impl LzssStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LzssStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressionStrategy for LzssStrategy {
    fn marker(&self) -> u8 {
        marker_ids::LZSS
    }

    fn name(&self) -> &'static str {
        "LZSS"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(compress(input))
    }

    fn decompress(&self, payload: &[u8]) -> Result<Vec<u8>, FormatError> {
        decompress(payload)
    }

    fn requires_self_check(&self) -> bool {
        true
    }

    fn probe(&self, payload: &[u8]) -> Result<(), FormatError> {
        probe(payload, PASSWORD_PROBE_TOKENS)
    }
}
