//! # Transform Functions Module / 变换函数模块
//!
//! This module implements the three pure string transforms that produce
//! pseudo-translated output. All of them walk the input by logical code
//! point, never by raw byte, so multi-byte characters are never split.
//!
//! 此模块实现了生成伪翻译输出的三个纯字符串变换。
//! 它们都按逻辑码点而不是原始字节遍历输入，因此多字节字符永远不会被拆分。

use crate::core::glyph;

/// The Arabic Letter Mark, a zero-width code point that switches an
/// RTL-aware renderer into right-to-left mode for the character it precedes.
pub const DIRECTION_MARK: char = '\u{061C}';

/// The fixed output of the placeholder transform.
pub const PLACEHOLDER_TEXT: &str = "Malkovich";

/// Wraps the input in bracket markers and substitutes every code point with
/// its decorated look-alike from the glyph table.
///
/// The `[ ` / ` ]` framing makes truncation and padding bugs visible at a
/// glance; the substitution keeps the text legible while making it obviously
/// different from the source string. Code points without a table entry pass
/// through unchanged, so the output always has exactly four more code points
/// than the input.
pub fn decorate(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2 + 4);
    out.push_str("[ ");
    for c in input.chars() {
        out.push(glyph::lookup(c).unwrap_or(c));
    }
    out.push_str(" ]");
    out
}

/// Precedes every code point with the Arabic Letter Mark so RTL-aware
/// renderers display the text reversed.
///
/// Storage order is unchanged: the engine never reorders characters, it only
/// interleaves the direction marker, which is enough to exercise
/// right-to-left layout paths without real Arabic or Hebrew text.
pub fn mark_reverse(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for c in input.chars() {
        out.push(DIRECTION_MARK);
        out.push(c);
    }
    out
}

/// Ignores the input and returns the fixed sentinel text.
///
/// Useful for verifying that interception is happening at all: if the
/// application still shows any real string, that string never went through
/// the shim.
pub fn placeholder(_input: &str) -> String {
    PLACEHOLDER_TEXT.to_string()
}
