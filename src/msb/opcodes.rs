//! Static opcode table for the MSB control bytes
//!
//! Control bytes occupy the range below 0x80 plus the 0xFF terminator;
//! everything from 0x80 to 0xFE leads a multi-byte character code instead.

/// Describes one single-byte control opcode.
///
/// `operand_width` is the number of additional bytes the opcode consumes
/// beyond the opcode byte itself. The player-name opcodes have width 0 but
/// inject an externally supplied string instead of their table name.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeDescriptor {
    pub code: u8,
    pub name: &'static str,
    pub operand_width: u8,
}

pub const OP_TERMINATOR: u8 = 0xFF;
pub const OP_SET_COLOR: u8 = 0x04;
pub const OP_SET_MARGIN_LEFT: u8 = 0x12;
pub const OP_PLAYER_SURNAME: u8 = 0x20;
pub const OP_PLAYER_GIVEN_NAME: u8 = 0x21;

/// Known opcodes, in code order.
pub const OPCODES: &[OpcodeDescriptor] = &[
    OpcodeDescriptor { code: 0x00, name: "NewLine", operand_width: 0 },
    OpcodeDescriptor { code: 0x01, name: "CharacterName", operand_width: 0 },
    OpcodeDescriptor { code: 0x02, name: "DialogueStart", operand_width: 0 },
    OpcodeDescriptor { code: 0x03, name: "Wait", operand_width: 0 },
    OpcodeDescriptor { code: OP_SET_COLOR, name: "SetColor", operand_width: 3 },
    OpcodeDescriptor { code: 0x09, name: "RubyBaseStart", operand_width: 0 },
    OpcodeDescriptor { code: 0x0A, name: "RubyTextStart", operand_width: 0 },
    OpcodeDescriptor { code: 0x0B, name: "RubyTextEnd", operand_width: 0 },
    OpcodeDescriptor { code: OP_SET_MARGIN_LEFT, name: "SetMarginLeft", operand_width: 2 },
    OpcodeDescriptor { code: OP_PLAYER_SURNAME, name: "PlayerSurname", operand_width: 0 },
    OpcodeDescriptor { code: OP_PLAYER_GIVEN_NAME, name: "PlayerGivenName", operand_width: 0 },
    OpcodeDescriptor { code: OP_TERMINATOR, name: "Terminator", operand_width: 0 },
];

/// Look up the descriptor for a control byte, if it is a known opcode.
pub fn lookup(code: u8) -> Option<&'static OpcodeDescriptor> {
    OPCODES.iter().find(|op| op.code == code)
}

/// Operand width in bytes for a control byte; unknown opcodes carry none.
pub fn operand_width(code: u8) -> usize {
    lookup(code).map_or(0, |op| op.operand_width as usize)
}
