// Copyright 2024 the Pixelpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing the textual path mini-language.
//!
//! The syntax is the integer subset of SVG `path/@d`: the commands
//! `M m L l H h V v C c Z z` with signed decimal integer parameters,
//! whitespace and comma tolerant, with implicit command repetition for bare
//! numbers. Arcs and quadratic curves are not part of the language.
//!
//! Relative commands and the horizontal/vertical shorthands are resolved
//! while scanning, so the resulting [`Segment`] list carries absolute
//! coordinates only.

use alloc::vec::Vec;
use core::fmt;

use crate::{Point, Segment};

/// The reasons a path description can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathParseError {
    /// A command letter that is not part of the mini-language.
    UnknownCommand(char),
    /// A numeric parameter was expected but something else was found.
    ExpectedNumber,
    /// A numeric parameter does not fit into the 16-bit coordinate range.
    NumberOutOfRange,
}

impl fmt::Display for PathParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(c) => write!(f, "unknown path command {c:?}"),
            Self::ExpectedNumber => write!(f, "expected a number"),
            Self::NumberOutOfRange => write!(f, "number out of coordinate range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PathParseError {}

/// Parse a path description, failing on the first problem.
///
/// An empty input yields an empty segment list, which downstream draw
/// functions treat as "nothing to draw".
///
/// # Examples
///
/// ```
/// use pixelpath::{parse_path, Point, Segment};
///
/// let segments = parse_path("M0 0 h10 v10 h-10 z").unwrap();
/// assert_eq!(segments.len(), 5);
/// assert_eq!(segments[1], Segment::LineTo(Point::new(10, 0)));
/// ```
pub fn parse_path(text: &str) -> Result<Vec<Segment>, PathParseError> {
    parse_with(text, true)
}

/// Parse a path description, skipping what cannot be understood.
///
/// Unknown command letters are logged and skipped; a malformed parameter
/// stops the scan. Either way the segments parsed up to that point are
/// returned, so a partially broken path still draws its intact prefix.
pub fn parse_path_lossy(text: &str) -> Vec<Segment> {
    // Infallible in lenient mode.
    parse_with(text, false).unwrap_or_default()
}

fn parse_with(text: &str, strict: bool) -> Result<Vec<Segment>, PathParseError> {
    let mut lexer = Lexer::new(text);
    let mut segments = Vec::new();
    let mut last_cmd = 0u8;

    while let Some(cmd) = lexer.get_cmd(last_cmd) {
        match scan_segment(&mut lexer, &mut segments, &mut last_cmd, cmd) {
            Ok(()) => {}
            Err(PathParseError::UnknownCommand(c)) if !strict => {
                log::warn!("skipping unknown path command {c:?}");
                last_cmd = 0;
            }
            Err(e) if !strict => {
                log::warn!("stopping path scan: {e}");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(segments)
}

/// Scan the parameters of one command and append the resulting segment.
fn scan_segment(
    lexer: &mut Lexer<'_>,
    segments: &mut Vec<Segment>,
    last_cmd: &mut u8,
    cmd: u8,
) -> Result<(), PathParseError> {
    match cmd {
        b'M' | b'm' => {
            let pt = lexer.maybe_relative_pair(cmd)?;
            segments.push(Segment::MoveTo(pt));
            lexer.last_pt = pt;
            // Bare numbers after a moveto continue as lineto.
            *last_cmd = cmd - (b'M' - b'L');
        }
        b'L' | b'l' => {
            let pt = lexer.maybe_relative_pair(cmd)?;
            segments.push(Segment::LineTo(pt));
            lexer.last_pt = pt;
            *last_cmd = cmd;
        }
        b'H' | b'h' => {
            let x = lexer.number()?;
            let x = if cmd == b'h' { lexer.last_pt.x + x } else { x };
            let pt = Point::new(x, lexer.last_pt.y);
            segments.push(Segment::LineTo(pt));
            lexer.last_pt = pt;
            *last_cmd = cmd;
        }
        b'V' | b'v' => {
            let y = lexer.number()?;
            let y = if cmd == b'v' { lexer.last_pt.y + y } else { y };
            let pt = Point::new(lexer.last_pt.x, y);
            segments.push(Segment::LineTo(pt));
            lexer.last_pt = pt;
            *last_cmd = cmd;
        }
        b'C' | b'c' => {
            let c1 = lexer.maybe_relative_pair(cmd)?;
            let c2 = lexer.maybe_relative_pair(cmd)?;
            let pt = lexer.maybe_relative_pair(cmd)?;
            segments.push(Segment::CurveTo(c1, c2, pt));
            lexer.last_pt = pt;
            *last_cmd = cmd;
        }
        b'Z' | b'z' => {
            segments.push(Segment::ClosePath);
            // Trailing numbers have no command to repeat.
            *last_cmd = 0;
        }
        _ => return Err(PathParseError::UnknownCommand(cmd as char)),
    }
    Ok(())
}

struct Lexer<'a> {
    data: &'a [u8],
    ix: usize,
    last_pt: Point,
}

impl<'a> Lexer<'a> {
    fn new(data: &'a str) -> Self {
        Lexer {
            data: data.as_bytes(),
            ix: 0,
            last_pt: Point::ZERO,
        }
    }

    /// Skip whitespace and the commas the syntax tolerates between tokens.
    fn skip_ws(&mut self) {
        while let Some(&c) = self.data.get(self.ix) {
            if !(c.is_ascii_whitespace() || c == b',') {
                break;
            }
            self.ix += 1;
        }
    }

    fn get_byte(&mut self) -> Option<u8> {
        self.data.get(self.ix).map(|&c| {
            self.ix += 1;
            c
        })
    }

    fn unget(&mut self) {
        self.ix -= 1;
    }

    /// Next command byte, or the repeated previous command when a bare
    /// number follows, or `None` at the end of input.
    ///
    /// Junk bytes are returned as-is and reported by the caller.
    fn get_cmd(&mut self, last_cmd: u8) -> Option<u8> {
        self.skip_ws();
        let c = self.get_byte()?;
        if c.is_ascii_alphabetic() {
            Some(c)
        } else if last_cmd != 0 && (c == b'-' || c == b'+' || c.is_ascii_digit()) {
            self.unget();
            Some(last_cmd)
        } else {
            Some(c)
        }
    }

    /// One signed decimal integer parameter.
    fn number(&mut self) -> Result<i16, PathParseError> {
        self.skip_ws();
        let negative = match self.data.get(self.ix) {
            Some(b'-') => {
                self.ix += 1;
                true
            }
            Some(b'+') => {
                self.ix += 1;
                false
            }
            _ => false,
        };
        let mut value: i32 = 0;
        let mut digits = 0;
        while let Some(&c) = self.data.get(self.ix) {
            if !c.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i32::from(c - b'0')))
                .ok_or(PathParseError::NumberOutOfRange)?;
            digits += 1;
            self.ix += 1;
        }
        if digits == 0 {
            return Err(PathParseError::ExpectedNumber);
        }
        let value = if negative { -value } else { value };
        i16::try_from(value).map_err(|_| PathParseError::NumberOutOfRange)
    }

    /// An x/y parameter pair, resolved to absolute coordinates when the
    /// command letter is lowercase.
    fn maybe_relative_pair(&mut self, cmd: u8) -> Result<Point, PathParseError> {
        let x = self.number()?;
        let y = self.number()?;
        if cmd.is_ascii_lowercase() {
            Ok(self.last_pt.offset(x, y))
        } else {
            Ok(Point::new(x, y))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i16, y: i16) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn absolute_square() {
        let segs = parse_path("M0 0L10 0L10 10L0 10Z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(pt(0, 0)),
                Segment::LineTo(pt(10, 0)),
                Segment::LineTo(pt(10, 10)),
                Segment::LineTo(pt(0, 10)),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn relative_commands() {
        let segs = parse_path("M4 8l12-6l10 10h-8v4h-6z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(pt(4, 8)),
                Segment::LineTo(pt(16, 2)),
                Segment::LineTo(pt(26, 12)),
                Segment::LineTo(pt(18, 12)),
                Segment::LineTo(pt(18, 16)),
                Segment::LineTo(pt(12, 16)),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn absolute_shorthands() {
        let segs = parse_path("M5 5H10V2").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(pt(5, 5)),
                Segment::LineTo(pt(10, 5)),
                Segment::LineTo(pt(10, 2)),
            ]
        );
    }

    #[test]
    fn relative_curve() {
        let segs = parse_path("M10 10c1 2 3 4 5 6").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(pt(10, 10)),
                Segment::CurveTo(pt(11, 12), pt(13, 14), pt(15, 16)),
            ]
        );
    }

    #[test]
    fn comma_and_whitespace_tolerance() {
        let a = parse_path("M 10,20 L 30 , 40").unwrap();
        let b = parse_path("M10 20L30 40").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn implicit_repetition() {
        let segs = parse_path("m10 10 100 0 0 100 -100 0z").unwrap();
        assert_eq!(
            segs,
            vec![
                Segment::MoveTo(pt(10, 10)),
                Segment::LineTo(pt(110, 10)),
                Segment::LineTo(pt(110, 110)),
                Segment::LineTo(pt(10, 110)),
                Segment::ClosePath,
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_path(""), Ok(vec![]));
        assert_eq!(parse_path("   "), Ok(vec![]));
    }

    #[test]
    fn parse_is_pure() {
        let text = "M4 8l12-6l10 10h-8v4h-6z";
        assert_eq!(parse_path(text).unwrap(), parse_path(text).unwrap());
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert_eq!(
            parse_path("M0 0Q3 3 6 0"),
            Err(PathParseError::UnknownCommand('Q'))
        );
    }

    #[test]
    fn lossy_skips_unknown_commands() {
        let segs = parse_path_lossy("M0 0Q3 3 6 0L10 10");
        assert_eq!(segs[0], Segment::MoveTo(pt(0, 0)));
        assert_eq!(*segs.last().unwrap(), Segment::LineTo(pt(10, 10)));
    }

    #[test]
    fn lossy_keeps_prefix_on_bad_number() {
        let segs = parse_path_lossy("M0 0L5 5L7");
        assert_eq!(
            segs,
            vec![Segment::MoveTo(pt(0, 0)), Segment::LineTo(pt(5, 5))]
        );
    }

    #[test]
    fn missing_number_is_an_error() {
        assert_eq!(parse_path("M0 0L5"), Err(PathParseError::ExpectedNumber));
    }

    #[test]
    fn out_of_range_number() {
        assert_eq!(
            parse_path("M40000 0"),
            Err(PathParseError::NumberOutOfRange)
        );
    }
}
