//! Display sanitisation for list items.
//!
//! Items are stored exactly as typed or pasted, but a terminal interprets
//! escape sequences and control characters. Before an item is drawn it is
//! reduced to a single printable line:
//!
//! - ANSI escape sequences (CSI, OSC, DCS and two-byte ESC forms) are removed
//! - line breaks and tabs become one space each
//! - all other C0/C1 control characters and DEL are removed

use std::borrow::Cow;
use std::iter::Peekable;

const ESC: char = '\x1b';
const BEL: char = '\x07';
const C1_CSI: char = '\u{9b}';

/// Reduce `input` to a single line that is safe to draw in a terminal.
///
/// Returns `Cow::Borrowed` when nothing needs to change.
///
/// ```
/// use ordlist_types::sanitize_display_line;
///
/// assert_eq!(sanitize_display_line("pear"), "pear");
/// assert_eq!(sanitize_display_line("red\x1b[31m pear"), "red pear");
/// assert_eq!(sanitize_display_line("two\nlines"), "two lines");
/// ```
#[must_use]
pub fn sanitize_display_line(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_control) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape(&mut chars),
            C1_CSI => skip_csi(&mut chars),
            '\r' => {
                // CRLF is one break.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' | '\t' => out.push(' '),
            c if is_control(c) => {}
            c => out.push(c),
        }
    }

    Cow::Owned(out)
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{80}'..='\u{9f}').contains(&c)
}

fn skip_escape<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    match chars.next() {
        Some('[') => skip_csi(chars),
        Some(']' | 'P' | 'X' | '^' | '_') => skip_string(chars),
        // Two-byte sequences (ESC 7, ESC c, ...) are fully consumed already.
        _ => {}
    }
}

/// Parameter and intermediate bytes run until a final byte in `@`..=`~`.
fn skip_csi<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    for c in chars.by_ref() {
        if ('@'..='~').contains(&c) {
            break;
        }
    }
}

/// OSC/DCS/SOS/PM/APC strings end at BEL or ST (`ESC \`).
fn skip_string<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(c) = chars.next() {
        if c == BEL {
            break;
        }
        if c == ESC {
            if chars.peek() == Some(&'\\') {
                chars.next();
            }
            break;
        }
    }
}
