//! Character set detection and byte decoding
//!
//!     GEDCOM declares its own character set *inside* the stream, in the
//!     header's `1 CHAR` line. Fortunately every recognized charset encodes
//!     that declaration in plain ASCII (UTF-16 is caught earlier via its BOM or
//!     NUL pattern), so detection is a bounded ASCII scan of the head of the
//!     stream followed by a single decode of the whole stream with the chosen
//!     decoder.
//!
//! Recognized charsets
//!
//!     - ANSEL: the GEDCOM 5.5 default. A Latin-ish 8-bit set with combining
//!       diacritics that *precede* their base character; decoding reorders them
//!       to follow the base as Unicode combining marks require. No ecosystem
//!       crate covers ANSEL, so the table lives here.
//!     - ASCII: 7-bit; high bytes are replaced and flagged.
//!     - UTF-8: with or without BOM.
//!     - UNICODE: UTF-16, either endianness, BOM optional.
//!
//!     An unrecognized declared name is a warning, falling back to UTF-8 when
//!     the bytes are valid UTF-8 and to ANSEL otherwise.

use super::diagnostics::DiagnosticSink;
use super::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Character sets a GEDCOM header may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Ansel,
    Ascii,
    Utf8,
    /// UTF-16, either endianness
    Unicode,
}

impl Charset {
    /// Map a declared `1 CHAR` value to a charset, case-insensitively.
    pub fn from_declared(name: &str) -> Option<Charset> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ANSEL" => Some(Charset::Ansel),
            "ASCII" => Some(Charset::Ascii),
            "UTF-8" | "UTF8" => Some(Charset::Utf8),
            "UNICODE" => Some(Charset::Unicode),
            _ => None,
        }
    }
}

/// How many leading bytes are scanned for the `1 CHAR` declaration. The
/// declaration sits in the header, which opens the file, so this is generous.
const SNIFF_WINDOW: usize = 2048;

static CHAR_DECL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*1\s+CHAR\s+(\S[^\r\n]*)").unwrap());

/// Decode a GEDCOM byte stream to text.
///
/// BOMs take precedence; otherwise the head of the stream is scanned for the
/// header's charset declaration. Undecodable input is fatal — without text
/// there is nothing to recover.
pub fn decode(bytes: &[u8], sink: &mut DiagnosticSink) -> Result<String, ParseError> {
    if bytes.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    // BOM beats any in-stream declaration.
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return decode_utf8(&bytes[3..]);
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return decode_utf16(&bytes[2..], true);
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return decode_utf16(&bytes[2..], false);
    }

    // A UTF-16 stream without a BOM still shows itself: the leading "0 HEAD"
    // is ASCII, so every other byte is NUL.
    if bytes.len() >= 2 && (bytes[0] == 0x00 || bytes[1] == 0x00) {
        return decode_utf16(bytes, bytes[0] != 0x00);
    }

    let charset = match sniff_declared(bytes) {
        Some((name, Some(charset))) => {
            log::debug!("declared charset {:?} ({})", charset, name);
            charset
        }
        Some((name, None)) => {
            let fallback = default_charset(bytes);
            sink.warn(
                None,
                "unrecognized-charset",
                format!(
                    "Unrecognized character set {:?} declared in header; falling back to {:?}",
                    name, fallback
                ),
            );
            fallback
        }
        None => default_charset(bytes),
    };

    match charset {
        Charset::Utf8 => decode_utf8(bytes),
        Charset::Ascii => Ok(decode_ascii(bytes, sink)),
        Charset::Ansel => Ok(decode_ansel(bytes)),
        Charset::Unicode => decode_utf16(bytes, true),
    }
}

/// Scan the head of the stream for the header's `1 CHAR` declaration.
/// Returns the declared name and the charset it maps to, if recognized.
fn sniff_declared(bytes: &[u8]) -> Option<(String, Option<Charset>)> {
    let window = &bytes[..bytes.len().min(SNIFF_WINDOW)];
    // Lossy is fine here: the declaration itself is ASCII in every charset
    // this branch can reach.
    let head = String::from_utf8_lossy(window);
    let caps = CHAR_DECL.captures(&head)?;
    let name = caps[1].trim().to_string();
    let charset = Charset::from_declared(&name);
    Some((name, charset))
}

/// Default when nothing is declared: UTF-8 if the bytes already are, otherwise
/// ANSEL, the GEDCOM 5.5 default encoding.
fn default_charset(bytes: &[u8]) -> Charset {
    if std::str::from_utf8(bytes).is_ok() {
        Charset::Utf8
    } else {
        Charset::Ansel
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, ParseError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ParseError::Encoding(format!("invalid UTF-8: {}", e)))
}

fn decode_utf16(bytes: &[u8], little_endian: bool) -> Result<String, ParseError> {
    if bytes.len() % 2 != 0 {
        return Err(ParseError::Encoding(
            "UTF-16 stream has odd byte length".to_string(),
        ));
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| {
            if little_endian {
                u16::from_le_bytes([pair[0], pair[1]])
            } else {
                u16::from_be_bytes([pair[0], pair[1]])
            }
        })
        .collect();
    String::from_utf16(&units)
        .map_err(|e| ParseError::Encoding(format!("invalid UTF-16: {}", e)))
}

fn decode_ascii(bytes: &[u8], sink: &mut DiagnosticSink) -> String {
    let mut high_bytes = 0usize;
    let out: String = bytes
        .iter()
        .map(|&b| {
            if b < 0x80 {
                b as char
            } else {
                high_bytes += 1;
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect();
    if high_bytes > 0 {
        sink.warn(
            None,
            "non-ascii-byte",
            format!(
                "{} byte(s) above 0x7F in a stream declared as ASCII were replaced",
                high_bytes
            ),
        );
    }
    out
}

/// Decode ANSEL bytes.
///
/// ANSEL places combining diacritics *before* the character they modify;
/// Unicode combining marks follow their base. Pending marks are therefore
/// buffered and emitted after the next spacing character. Unmapped high bytes
/// decode to the replacement character rather than failing the parse.
fn decode_ansel(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut pending: Vec<char> = Vec::new();
    for &b in bytes {
        if let Some(mark) = ansel_combining(b) {
            pending.push(mark);
            continue;
        }
        let ch = if b < 0x80 {
            b as char
        } else {
            ansel_spacing(b).unwrap_or(char::REPLACEMENT_CHARACTER)
        };
        out.push(ch);
        for mark in pending.drain(..) {
            out.push(mark);
        }
    }
    // Trailing marks with no base character to attach to.
    out.extend(pending);
    out
}

/// Spacing (non-combining) ANSEL characters above 0x7F.
fn ansel_spacing(b: u8) -> Option<char> {
    let ch = match b {
        0xA1 => '\u{0141}', // Ł
        0xA2 => '\u{00D8}', // Ø
        0xA3 => '\u{0110}', // Đ
        0xA4 => '\u{00DE}', // Þ
        0xA5 => '\u{00C6}', // Æ
        0xA6 => '\u{0152}', // Œ
        0xA7 => '\u{02B9}', // modifier prime
        0xA8 => '\u{00B7}', // middle dot
        0xA9 => '\u{266D}', // music flat
        0xAA => '\u{00AE}', // registered
        0xAB => '\u{00B1}', // plus-minus
        0xAC => '\u{01A0}', // Ơ
        0xAD => '\u{01AF}', // Ư
        0xAE => '\u{02BC}', // alif
        0xB0 => '\u{02BB}', // ayn
        0xB1 => '\u{0142}', // ł
        0xB2 => '\u{00F8}', // ø
        0xB3 => '\u{0111}', // đ
        0xB4 => '\u{00FE}', // þ
        0xB5 => '\u{00E6}', // æ
        0xB6 => '\u{0153}', // œ
        0xB7 => '\u{02BA}', // modifier double prime
        0xB8 => '\u{0131}', // dotless i
        0xB9 => '\u{00A3}', // pound sign
        0xBA => '\u{00F0}', // ð
        0xBC => '\u{01A1}', // ơ
        0xBD => '\u{01B0}', // ư
        0xC0 => '\u{00B0}', // degree
        0xC1 => '\u{2113}', // script l
        0xC2 => '\u{2117}', // sound recording copyright
        0xC3 => '\u{00A9}', // copyright
        0xC4 => '\u{266F}', // music sharp
        0xC5 => '\u{00BF}', // inverted question mark
        0xC6 => '\u{00A1}', // inverted exclamation mark
        _ => return None,
    };
    Some(ch)
}

/// Combining ANSEL diacritics (0xE0..=0xFE), mapped to Unicode combining marks.
fn ansel_combining(b: u8) -> Option<char> {
    let ch = match b {
        0xE0 => '\u{0309}', // hook above
        0xE1 => '\u{0300}', // grave
        0xE2 => '\u{0301}', // acute
        0xE3 => '\u{0302}', // circumflex
        0xE4 => '\u{0303}', // tilde
        0xE5 => '\u{0304}', // macron
        0xE6 => '\u{0306}', // breve
        0xE7 => '\u{0307}', // dot above
        0xE8 => '\u{0308}', // diaeresis
        0xE9 => '\u{030C}', // caron
        0xEA => '\u{030A}', // ring above
        0xEB => '\u{FE20}', // ligature, left half
        0xEC => '\u{FE21}', // ligature, right half
        0xED => '\u{0315}', // high comma, off center
        0xEE => '\u{030B}', // double acute
        0xEF => '\u{0310}', // candrabindu
        0xF0 => '\u{0327}', // cedilla
        0xF1 => '\u{0328}', // ogonek
        0xF2 => '\u{0323}', // dot below
        0xF3 => '\u{0324}', // double dot below
        0xF4 => '\u{0325}', // ring below
        0xF5 => '\u{0333}', // double underscore
        0xF6 => '\u{0332}', // underscore
        0xF7 => '\u{0326}', // comma below
        0xF8 => '\u{031C}', // right half ring below
        0xF9 => '\u{032E}', // breve below
        0xFA => '\u{FE22}', // double tilde, left half
        0xFB => '\u{FE23}', // double tilde, right half
        0xFE => '\u{0313}', // high comma, centered
        _ => return None,
    };
    Some(ch)
}
