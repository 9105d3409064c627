//! Shared option vocabularies
//!
//! Fixed token tables mirrored from the hardware's display: the musical-note
//! rate values used by combined parameters, the pan-position scale, and the
//! note-with-octave scale used by the oscillator effects. Token-to-asset
//! mapping (which glyph image a token renders as) is owned by the UI layer;
//! this module only fixes the token strings and their order.

/// Musical-note tokens accepted by every combined (note-or-number) parameter.
///
/// The first three are bar-length values rendered as plain text; the
/// remaining eleven are note values rendered as glyph images. Order is
/// display order and must not change.
pub const MUSICAL_NOTE_TOKENS: [&str; 14] = [
    "4MEAS", "2MEAS", "1MEAS", "1/1", "1/2D", "1/2", "1/2T", "1/4D", "1/4", "1/4T", "1/8D",
    "1/8", "1/8T", "1/16",
];

/// Number of leading bar-length tokens in [`MUSICAL_NOTE_TOKENS`]
pub const BAR_LENGTH_TOKENS: usize = 3;

/// Chromatic note names, flats notation, as printed on the hardware
pub const CHROMATIC_NOTES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Lowest octave available to the oscillator note scale
const OCTAVE_FLOOR: u8 = 1;
/// Highest full octave; the scale tops out at C of the next octave
const OCTAVE_CEIL: u8 = 4;

/// True if `token` is one of the note-glyph entries (as opposed to a
/// bar-length entry) of the musical-note vocabulary.
pub fn is_note_glyph(token: &str) -> bool {
    MUSICAL_NOTE_TOKENS
        .iter()
        .position(|t| *t == token)
        .map(|idx| idx >= BAR_LENGTH_TOKENS)
        .unwrap_or(false)
}

/// Pan positions from hard left to hard right: `L50`..`L1`, `CENTER`,
/// `R1`..`R50`. 101 entries.
pub fn pan_positions() -> Vec<String> {
    let mut positions = Vec::with_capacity(101);
    for i in (1..=50).rev() {
        positions.push(format!("L{}", i));
    }
    positions.push("CENTER".to_string());
    for i in 1..=50 {
        positions.push(format!("R{}", i));
    }
    positions
}

/// Note-with-octave scale for the oscillator effects: `C1`..`B4` plus the
/// closing `C5`. 49 entries, chromatic order.
pub fn octave_notes() -> Vec<String> {
    let mut notes = Vec::with_capacity(49);
    for octave in OCTAVE_FLOOR..=OCTAVE_CEIL {
        for note in CHROMATIC_NOTES {
            notes.push(format!("{}{}", note, octave));
        }
    }
    notes.push(format!("C{}", OCTAVE_CEIL + 1));
    notes
}
