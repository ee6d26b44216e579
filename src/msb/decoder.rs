//! Text blob decoding engine
//!
//! Walks one entry's byte stream and builds the decoded string. The stream
//! is heterogeneous: bytes in `0x80..0xFF` lead a 2- or 4-byte big-endian
//! character code (width is a per-file setting), everything else is a
//! single-byte control opcode, some of which carry a fixed-width operand.
//! All reads go through a forward-only cursor so a malformed stream can
//! never index out of the buffer.

use byteorder::{BigEndian, ByteOrder};
use log::{trace, warn};

use super::font::FontTable;
use super::models::WordWidth;
use super::names::PlayerName;
use super::opcodes::{
    self, OP_PLAYER_GIVEN_NAME, OP_PLAYER_SURNAME, OP_SET_COLOR, OP_SET_MARGIN_LEFT,
    OP_TERMINATOR,
};

/// Read-only decode inputs shared by every entry in one pass.
///
/// The engine itself holds no state across entries; each decode starts with
/// a fresh cursor and an empty accumulator.
#[derive(Debug, Clone, Copy)]
pub struct DecodeContext<'a> {
    pub font: &'a FontTable,
    pub player: &'a PlayerName,
    pub width: WordWidth,
}

/// Forward-only cursor over the raw file buffer.
///
/// `try_take` only advances on success and never lets the position exceed
/// the buffer length.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8], pos: usize) -> Self {
        Cursor { buf, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
    }

    fn try_take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let slice = self.buf.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }
}

/// What a stream byte means at the top of the decode loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Character,
    Terminator,
    SetColor,
    SetMarginLeft,
    PlayerSurname,
    PlayerGivenName,
    Command(u8),
}

fn classify(byte: u8) -> Token {
    match byte {
        0x80..=0xFE => Token::Character,
        OP_TERMINATOR => Token::Terminator,
        OP_SET_COLOR => Token::SetColor,
        OP_SET_MARGIN_LEFT => Token::SetMarginLeft,
        OP_PLAYER_SURNAME => Token::PlayerSurname,
        OP_PLAYER_GIVEN_NAME => Token::PlayerGivenName,
        other => Token::Command(other),
    }
}

/// Decode one entry's text starting at `start`.
///
/// Runs until the 0xFF terminator or the end of the buffer, whichever comes
/// first; a missing terminator keeps the partial string. Recoverable
/// problems (font lookup miss, truncated operand) are rendered inline and
/// logged, never fatal.
pub fn decode_text(buf: &[u8], start: usize, ctx: &DecodeContext) -> String {
    let mut out = String::new();
    let mut cur = Cursor::new(buf, start);

    while let Some(byte) = cur.peek() {
        match classify(byte) {
            Token::Character => {
                let Some(raw) = cur.try_take(ctx.width.char_len()) else {
                    // Trailing artifact: fewer bytes than one full code.
                    trace!("Character code truncated at offset {}", cur.pos);
                    break;
                };
                let code = match ctx.width {
                    WordWidth::Bits16 => BigEndian::read_u16(raw) as u32,
                    WordWidth::Bits32 => BigEndian::read_u32(raw),
                } & ctx.width.code_mask();
                match ctx.font.lookup(code) {
                    Some(c) => out.push(c),
                    None => {
                        warn!(
                            "Character code {:#x} outside font table (size {})",
                            code,
                            ctx.font.len()
                        );
                        out.push_str(&format!("[{:08X}]", code));
                    }
                }
            }
            Token::Terminator => break,
            Token::SetColor => {
                cur.skip(1);
                // A 0xFF inside the operand window is an RGB component,
                // not a terminator.
                if let Some(rgb) = cur.try_take(opcodes::operand_width(OP_SET_COLOR)) {
                    out.push_str(&format!("<#{:02X}{:02X}{:02X}>", rgb[0], rgb[1], rgb[2]));
                } else {
                    warn!("SetColor operand truncated at offset {}", cur.pos);
                    push_command_name(&mut out, byte);
                }
            }
            Token::SetMarginLeft => {
                cur.skip(1);
                if let Some(raw) = cur.try_take(opcodes::operand_width(OP_SET_MARGIN_LEFT)) {
                    let margin = BigEndian::read_u16(raw);
                    out.push_str(&format!("<MarginLeft:{}>", margin));
                } else {
                    warn!("SetMarginLeft operand truncated at offset {}", cur.pos);
                    push_command_name(&mut out, byte);
                }
            }
            Token::PlayerSurname => {
                cur.skip(1);
                out.push_str(&ctx.player.surname);
            }
            Token::PlayerGivenName => {
                cur.skip(1);
                out.push_str(&ctx.player.given_name);
            }
            Token::Command(code) => {
                cur.skip(1);
                push_command_name(&mut out, code);
            }
        }
    }

    out
}

/// Render a plain command byte by its table name, `[Name]`, or `[CmdXX]`
/// when the byte is not in the opcode table.
fn push_command_name(out: &mut String, code: u8) {
    match opcodes::lookup(code) {
        Some(op) => {
            out.push('[');
            out.push_str(op.name);
            out.push(']');
        }
        None => out.push_str(&format!("[Cmd{:02X}]", code)),
    }
}
