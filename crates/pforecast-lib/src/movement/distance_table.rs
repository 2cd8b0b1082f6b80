//! Precomputed integer distances used by the legacy host.
//!
//! Row `dy` starts at distance `dy` (for `dx = 0`). Each row then stores one
//! bit per unit step along `dx`, least significant bit first: a set bit
//! means the rounded distance grows by one when `dx` grows past that step.
//! Covers `0 <= dx, dy < DISTANCE_TABLE_SIZE`.
//!
//! The table is data, not a formula. Row 0 lacks the bit for the third
//! step, so the legacy host rates a straight 3 ly move along `x` as 2 ly and
//! every longer one along that axis one short.

pub(crate) const DISTANCE_TABLE_SIZE: usize = 168;
pub(crate) const DISTANCE_TABLE_WIDTH: usize = 21;

#[rustfmt::skip]
pub(crate) const DISTANCE_TABLE: [[u8; DISTANCE_TABLE_WIDTH]; DISTANCE_TABLE_SIZE] = [
    [
        0xFB, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xF6, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xFA, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xEC, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x74, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xD4, 0xF7, 0xFF, 0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xD4, 0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x64, 0xF7, 0xEF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xA8, 0xBD, 0xFF, 0xFB, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xA8, 0xEE, 0xFB, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0xA8, 0x76, 0xBF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x48, 0xDB, 0xFB, 0xF7, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x48, 0xED, 0xBE, 0xFF, 0xFE, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x48, 0x75, 0xF7, 0xFB, 0xDF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x48, 0xB6, 0xBD, 0xBF, 0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFB, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x90, 0xDA, 0xEE, 0xFB, 0xFB, 0xFF, 0xFD, 0xFF, 0xFF, 0xFF, 0xEF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x90, 0x6A, 0x7B, 0xDF, 0x7F, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF,
        0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x90, 0xAA, 0xDD, 0xFB, 0xFD, 0xEF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x90, 0xB4, 0xEE, 0xBE, 0xDF, 0xFF, 0xFD, 0xFF, 0xBF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x90, 0xD4, 0xB6, 0xF7, 0xFD, 0xFB, 0x7F, 0xFF, 0xFF, 0xBF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xEF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x10, 0x55, 0xDB, 0xBD, 0xDF, 0xBF, 0xFF, 0xDF, 0xFF, 0xFF, 0xBF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFB, 0xFF, 0x7F,
    ],
    [
        0x10, 0x55, 0xED, 0xEE, 0xFD, 0xFD, 0xF7, 0xFF, 0xF7, 0xFF, 0xFF,
        0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E,
    ],
    [
        0x10, 0xA9, 0x75, 0x7B, 0xDF, 0xDF, 0xFF, 0xFE, 0xFF, 0xFD, 0xFF,
        0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x10, 0xA9, 0xB6, 0xDD, 0xFB, 0xFD, 0xFD, 0xDF, 0xFF, 0xFF, 0xFE,
        0xFF, 0xFF, 0xFF, 0xFD, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x20, 0xA9, 0xDA, 0xEE, 0xDE, 0xEF, 0xBF, 0xFF, 0xF7, 0xFF, 0x7F,
        0xFF, 0xFF, 0xFF, 0xFF, 0xF7, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x20, 0xA9, 0x6A, 0xBB, 0xF7, 0xFD, 0xFE, 0xFB, 0xFF, 0xFE, 0xFF,
        0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x20, 0x4A, 0xAD, 0xDD, 0xBD, 0xEF, 0xEF, 0x7F, 0xFF, 0xBF, 0xFF,
        0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x7F,
    ],
    [
        0x20, 0x52, 0xB5, 0xED, 0xEE, 0xFD, 0xFE, 0xFD, 0xEF, 0xFF, 0xEF,
        0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xF7, 0x7F,
    ],
    [
        0x20, 0x52, 0xD5, 0xB6, 0x7B, 0xDF, 0xEF, 0xDF, 0xFF, 0xFD, 0xFF,
        0xF7, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x3F,
    ],
    [
        0x20, 0x52, 0x56, 0xDB, 0xDD, 0xFB, 0xFE, 0xFE, 0xFD, 0x7F, 0xFF,
        0xFF, 0xFD, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x20, 0x92, 0x6A, 0xED, 0xEE, 0xDE, 0xEF, 0xEF, 0xBF, 0xFF, 0xEF,
        0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x20, 0x92, 0xAA, 0x6D, 0xBB, 0xF7, 0x7D, 0xFF, 0xFE, 0xF7, 0xFF,
        0xFB, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0x7F,
    ],
    [
        0x20, 0xA4, 0xAA, 0xB6, 0xDD, 0xBD, 0xEF, 0xF7, 0xEF, 0xFF, 0xFE,
        0xFF, 0xFE, 0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD, 0x7F,
    ],
    [
        0x20, 0xA4, 0xD4, 0xDA, 0x6E, 0xEF, 0xFD, 0x7E, 0xFF, 0xFD, 0xDF,
        0xFF, 0xBF, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0xFF, 0xFF, 0x77,
    ],
    [
        0x20, 0x24, 0x55, 0x6B, 0xBB, 0x7B, 0xDF, 0xF7, 0xF7, 0xDF, 0xFF,
        0xFB, 0xFF, 0xEF, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x40, 0x24, 0x55, 0x6D, 0xDB, 0xDD, 0xFB, 0x7E, 0x7F, 0xFF, 0xFB,
        0xFF, 0xFE, 0xFF, 0xF7, 0xFF, 0xFF, 0xDF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x40, 0x24, 0x55, 0xB5, 0x6D, 0xF7, 0xDE, 0xF7, 0xF7, 0xEF, 0x7F,
        0xFF, 0xBF, 0xFF, 0xFF, 0xFD, 0xFF, 0xFF, 0xDF, 0xFF, 0x7F,
    ],
    [
        0x40, 0x44, 0xA9, 0xD6, 0xB6, 0xBB, 0xF7, 0x7D, 0x7F, 0xFF, 0xFE,
        0xEF, 0xFF, 0xF7, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xBF, 0x7F,
    ],
    [
        0x40, 0x44, 0xA9, 0x5A, 0xDB, 0xDD, 0xBD, 0xEF, 0xF7, 0xF7, 0xDF,
        0xFF, 0xFD, 0xFF, 0xFD, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0x3F,
    ],
    [
        0x40, 0x48, 0xAA, 0x6A, 0xED, 0x76, 0xEF, 0x7D, 0xBF, 0x7F, 0xFF,
        0xFD, 0xBF, 0xFF, 0x7F, 0xFF, 0xFF, 0xBF, 0xFF, 0xFF, 0x7F,
    ],
    [
        0x40, 0x48, 0xAA, 0xAA, 0x6D, 0xBB, 0x7B, 0xEF, 0xF7, 0xFB, 0xF7,
        0xBF, 0xFF, 0xEF, 0xFF, 0xBF, 0xFF, 0xFF, 0xBF, 0xFF, 0x7F,
    ],
    [
        0x40, 0x48, 0x4A, 0xB5, 0xB6, 0xDD, 0xDD, 0xFB, 0xBE, 0xBF, 0xFF,
        0xFE, 0xF7, 0xFF, 0xFD, 0xFF, 0xEF, 0xFF, 0xFF, 0xDF, 0x7F,
    ],
    [
        0x40, 0x48, 0x52, 0xD5, 0xDA, 0x6E, 0xF7, 0xDE, 0xF7, 0xFB, 0xFB,
        0xEF, 0xFF, 0xFE, 0x7F, 0xFF, 0xFF, 0xFB, 0xFF, 0xFF, 0x5F,
    ],
    [
        0x40, 0x88, 0x52, 0x55, 0x6B, 0xB7, 0xBB, 0xF7, 0x7E, 0xBF, 0xBF,
        0xFF, 0xFD, 0xDF, 0xFF, 0xDF, 0xFF, 0xFF, 0xFD, 0xFF, 0x7F,
    ],
    [
        0x40, 0x88, 0x54, 0x5A, 0x6D, 0xDB, 0xDD, 0xBD, 0xEF, 0xFB, 0xFB,
        0xF7, 0xDF, 0xFF, 0xFB, 0xFF, 0xF7, 0xFF, 0xFF, 0xFE, 0x7F,
    ],
    [
        0x40, 0x88, 0x94, 0xAA, 0xB5, 0x6D, 0x77, 0xEF, 0x7D, 0xBF, 0xBF,
        0x7F, 0xFF, 0xFB, 0xFF, 0xFE, 0xFF, 0xFD, 0xFF, 0x7F, 0x7F,
    ],
    [
        0x40, 0x88, 0xA4, 0xAA, 0xD6, 0xB6, 0xBB, 0x7B, 0xEF, 0xF7, 0xFB,
        0xFB, 0xF7, 0x7F, 0xFF, 0xDF, 0xFF, 0x7F, 0xFF, 0xFF, 0x3F,
    ],
    [
        0x40, 0x90, 0xA4, 0xAA, 0x5A, 0xDB, 0xDD, 0xDD, 0xFB, 0xBE, 0xDF,
        0xBF, 0xFF, 0xFE, 0xEF, 0xFF, 0xF7, 0xFF, 0xDF, 0xFF, 0x7F,
    ],
    [
        0x80, 0x90, 0xA4, 0xD4, 0x6A, 0xDB, 0x76, 0xF7, 0xDE, 0xF7, 0xFB,
        0xFD, 0xFB, 0xDF, 0xFF, 0xFD, 0xFF, 0xFE, 0xFF, 0xEF, 0x7F,
    ],
    [
        0x80, 0x10, 0x29, 0x55, 0xAD, 0x6D, 0xBB, 0xBB, 0xF7, 0xBE, 0xDF,
        0xDF, 0xBF, 0xFF, 0xFD, 0xBF, 0xFF, 0xBF, 0xFF, 0xFF, 0x7B,
    ],
    [
        0x80, 0x10, 0x29, 0x55, 0xB5, 0xB6, 0xDD, 0xDE, 0xBD, 0xEF, 0xFB,
        0xFD, 0xFD, 0xF7, 0xBF, 0xFF, 0xEF, 0xFF, 0xEF, 0xFF, 0x7F,
    ],
    [
        0x80, 0x10, 0x49, 0x55, 0xD5, 0xDA, 0x6E, 0x77, 0xEF, 0x7D, 0xDF,
        0xDF, 0xDF, 0x7F, 0xFF, 0xF7, 0xFF, 0xFD, 0xFF, 0xFB, 0x7F,
    ],
    [
        0x80, 0x10, 0x49, 0xA9, 0x56, 0xDB, 0xB6, 0xBB, 0x7B, 0xEF, 0xFB,
        0xFD, 0xFD, 0xFB, 0xEF, 0xFF, 0xFE, 0x7F, 0xFF, 0xFF, 0x7E,
    ],
    [
        0x80, 0x10, 0x49, 0xA9, 0x6A, 0x6D, 0xDB, 0xED, 0xDD, 0xFB, 0xBE,
        0xDF, 0xDF, 0xBF, 0xFF, 0xFD, 0xDF, 0xFF, 0xEF, 0xFF, 0x7F,
    ],
    [
        0x80, 0x10, 0x49, 0xAA, 0xAA, 0xB5, 0x6D, 0x77, 0xF7, 0xDE, 0xF7,
        0xFD, 0xFD, 0xFD, 0xFB, 0xDF, 0xFF, 0xFB, 0xFF, 0xFB, 0x7F,
    ],
    [
        0x80, 0x20, 0x51, 0x2A, 0xAB, 0xD6, 0xB6, 0xBB, 0xBB, 0xF7, 0xBE,
        0xDF, 0xEF, 0xDF, 0x7F, 0xFF, 0xFB, 0xFF, 0xFE, 0xFF, 0x7E,
    ],
    [
        0x80, 0x20, 0x92, 0x4A, 0xB5, 0xDA, 0xBA, 0xED, 0xEE, 0xBD, 0xEF,
        0xFB, 0xFD, 0xFE, 0xFD, 0xF7, 0x7F, 0xFF, 0xDF, 0xFF, 0x3F,
    ],
    [
        0x80, 0x20, 0x92, 0x52, 0x55, 0x6B, 0xDB, 0x76, 0x77, 0xEF, 0x7D,
        0xDF, 0xEF, 0xEF, 0xDF, 0xFF, 0xFE, 0xEF, 0xFF, 0xFB, 0x7F,
    ],
    [
        0x80, 0x20, 0x92, 0x54, 0x55, 0xAD, 0x6D, 0xBB, 0xBB, 0x7B, 0xEF,
        0xFB, 0xFD, 0xFE, 0xFE, 0xFB, 0xEF, 0xFF, 0xFD, 0xFF, 0x7E,
    ],
    [
        0x80, 0x20, 0x92, 0x54, 0x6A, 0xB5, 0xB6, 0xDD, 0xEE, 0xDE, 0xFB,
        0xBE, 0xEF, 0xEF, 0xEF, 0xBF, 0xFF, 0xFD, 0xBF, 0xFF, 0x3F,
    ],
    [
        0x80, 0x20, 0x92, 0x94, 0xAA, 0xD6, 0xD6, 0x6E, 0x77, 0xF7, 0xDE,
        0xF7, 0xFD, 0xFE, 0xFE, 0xFD, 0xF7, 0xBF, 0xFF, 0xEF, 0x7F,
    ],
    [
        0x80, 0x20, 0x22, 0xA5, 0xAA, 0x5A, 0xDB, 0xB6, 0xBB, 0xBB, 0xF7,
        0xBE, 0xDF, 0xEF, 0xEF, 0xDF, 0x7F, 0xFF, 0xF7, 0xFF, 0x7D,
    ],
    [
        0x80, 0x20, 0x22, 0xA5, 0xAA, 0x6A, 0x6D, 0xDB, 0xED, 0xEE, 0xBD,
        0xEF, 0xFB, 0xFE, 0xFE, 0xFE, 0xFD, 0xEF, 0xFF, 0xFE, 0x3F,
    ],
    [
        0x00, 0x21, 0x24, 0xA9, 0x54, 0xAB, 0xB5, 0xED, 0x76, 0x77, 0xEF,
        0x7D, 0xDF, 0xEF, 0xF7, 0xEF, 0xDF, 0xFF, 0xFE, 0xDF, 0x7F,
    ],
    [
        0x00, 0x41, 0x24, 0x29, 0x55, 0xB5, 0xB6, 0x76, 0xBB, 0xBD, 0x7B,
        0xEF, 0xFB, 0x7E, 0x7F, 0xFF, 0xFE, 0xFB, 0xDF, 0xFF, 0x7B,
    ],
    [
        0x00, 0x41, 0x24, 0x49, 0x55, 0xD5, 0xDA, 0xB6, 0xED, 0xEE, 0xDE,
        0x7B, 0xDF, 0xEF, 0xF7, 0xF7, 0xEF, 0xBF, 0xFF, 0xFB, 0x7F,
    ],
    [
        0x00, 0x41, 0x24, 0x49, 0x55, 0x55, 0x6B, 0xDB, 0x76, 0x77, 0xF7,
        0xDE, 0xF7, 0xFD, 0x7E, 0x7F, 0xFF, 0xFD, 0xF7, 0x7F, 0x7F,
    ],
    [
        0x00, 0x41, 0x44, 0x4A, 0xA9, 0x5A, 0xAD, 0x6D, 0xBB, 0xDD, 0xBB,
        0xF7, 0xBE, 0xEF, 0xF7, 0xF7, 0xF7, 0xDF, 0xFF, 0xFE, 0x6F,
    ],
    [
        0x00, 0x41, 0x44, 0x52, 0xAA, 0xAA, 0xB5, 0xB6, 0xDD, 0xEE, 0xEE,
        0xBD, 0xF7, 0xFD, 0x7E, 0x7F, 0xFF, 0xFE, 0xFD, 0xEF, 0x7F,
    ],
    [
        0x00, 0x41, 0x44, 0x52, 0xAA, 0xAA, 0xD6, 0xB6, 0x6D, 0x77, 0x77,
        0xEF, 0x7D, 0xDF, 0xF7, 0xF7, 0xF7, 0xEF, 0xBF, 0xFF, 0x7D,
    ],
    [
        0x00, 0x41, 0x48, 0x92, 0x2A, 0xAD, 0x5A, 0xDB, 0xB6, 0xDB, 0xBD,
        0x7B, 0xEF, 0xFB, 0x7E, 0xBF, 0x7F, 0xFF, 0xFE, 0xFB, 0x3F,
    ],
    [
        0x00, 0x41, 0x48, 0x92, 0x52, 0xD5, 0x6A, 0x6D, 0xDB, 0xED, 0xEE,
        0xDE, 0x7B, 0xDF, 0xEF, 0xF7, 0xFB, 0xF7, 0xEF, 0x7F, 0x7F,
    ],
    [
        0x00, 0x41, 0x48, 0x94, 0x52, 0x55, 0xAD, 0xB5, 0xED, 0x76, 0x77,
        0xF7, 0xDE, 0xF7, 0x7D, 0xBF, 0xBF, 0x7F, 0xFF, 0xFD, 0x6F,
    ],
    [
        0x00, 0x41, 0x88, 0xA4, 0x54, 0x55, 0xB5, 0xB6, 0x76, 0xBB, 0xDD,
        0xBB, 0xF7, 0xBE, 0xEF, 0xF7, 0xFB, 0xFB, 0xF7, 0xDF, 0x7F,
    ],
    [
        0x00, 0x81, 0x88, 0xA4, 0x54, 0x6A, 0xD5, 0xDA, 0xB6, 0xED, 0xEE,
        0xEE, 0xBD, 0xF7, 0xFD, 0xBE, 0xBF, 0xBF, 0x7F, 0xFF, 0x7B,
    ],
    [
        0x00, 0x81, 0x88, 0x24, 0x95, 0xAA, 0x56, 0x6B, 0xDB, 0x76, 0x77,
        0x77, 0xEF, 0x7D, 0xDF, 0xF7, 0xFB, 0xFB, 0xFB, 0xEF, 0x3F,
    ],
    [
        0x00, 0x81, 0x88, 0x24, 0xA5, 0xAA, 0x6A, 0xAD, 0x6D, 0xBB, 0xDD,
        0xBD, 0x7B, 0xEF, 0xFB, 0x7E, 0xBF, 0xBF, 0xBF, 0xFF, 0x7E,
    ],
    [
        0x00, 0x81, 0x88, 0x24, 0xA9, 0xAA, 0xAA, 0xB5, 0xB5, 0xDB, 0xEE,
        0xEE, 0xDE, 0x7B, 0xDF, 0xF7, 0xFB, 0xFB, 0xFB, 0xF7, 0x5F,
    ],
    [
        0x00, 0x81, 0x90, 0x28, 0xA9, 0x54, 0xAD, 0xD6, 0xB6, 0x6D, 0x77,
        0x77, 0xF7, 0xDE, 0xF7, 0x7D, 0xBF, 0xDF, 0xBF, 0x7F, 0x7F,
    ],
    [
        0x00, 0x81, 0x90, 0x48, 0x29, 0x55, 0xB5, 0x5A, 0xDB, 0xB6, 0xDB,
        0xDD, 0xBB, 0xF7, 0xBE, 0xEF, 0xFB, 0xFB, 0xFD, 0xFB, 0x77,
    ],
    [
        0x00, 0x82, 0x10, 0x49, 0x4A, 0x55, 0x55, 0x6B, 0x6D, 0xDB, 0xED,
        0xEE, 0xEE, 0xBD, 0xF7, 0x7D, 0xBF, 0xDF, 0xDF, 0xBF, 0x7F,
    ],
    [
        0x00, 0x82, 0x10, 0x49, 0x4A, 0x55, 0x55, 0xAD, 0xAD, 0xED, 0x76,
        0xBB, 0x77, 0xEF, 0x7D, 0xEF, 0xF7, 0xFB, 0xFD, 0xFD, 0x7B,
    ],
    [
        0x00, 0x82, 0x10, 0x49, 0x52, 0xA9, 0x6A, 0xB5, 0xB6, 0x6D, 0xBB,
        0xDD, 0xBD, 0x7B, 0xEF, 0xFB, 0xBE, 0xDF, 0xDF, 0xDF, 0x3F,
    ],
    [
        0x00, 0x82, 0x10, 0x49, 0x52, 0xAA, 0xAA, 0xD5, 0xDA, 0xB6, 0xDD,
        0xEE, 0xEE, 0xDE, 0x7B, 0xDF, 0xF7, 0xFB, 0xFD, 0xFD, 0x7D,
    ],
    [
        0x00, 0x02, 0x11, 0x91, 0x52, 0xAA, 0xAA, 0x5A, 0x6B, 0xDB, 0x6E,
        0xB7, 0x7B, 0xF7, 0xDE, 0xF7, 0x7E, 0xDF, 0xDF, 0xDF, 0x5F,
    ],
    [
        0x00, 0x02, 0x11, 0x91, 0x94, 0x2A, 0xB5, 0x6A, 0x6D, 0x6D, 0xB7,
        0xDD, 0xDD, 0xBD, 0xF7, 0xBE, 0xEF, 0xFB, 0xFD, 0xFD, 0x7D,
    ],
    [
        0x00, 0x02, 0x21, 0x91, 0x94, 0x52, 0x55, 0xAB, 0xB5, 0x6D, 0xDB,
        0xEE, 0xEE, 0xEE, 0xBD, 0xF7, 0x7D, 0xBF, 0xDF, 0xEF, 0x5F,
    ],
    [
        0x00, 0x02, 0x21, 0x92, 0xA4, 0x52, 0x55, 0xAD, 0xD6, 0xB6, 0x6D,
        0xB7, 0xBB, 0x77, 0xEF, 0x7D, 0xEF, 0xF7, 0xFD, 0xFD, 0x7E,
    ],
    [
        0x00, 0x02, 0x21, 0x92, 0xA4, 0x54, 0x55, 0xD5, 0x5A, 0xDB, 0xB6,
        0xDB, 0xDD, 0xDD, 0x7B, 0xEF, 0xFB, 0xBE, 0xDF, 0xEF, 0x6F,
    ],
    [
        0x00, 0x02, 0x21, 0x92, 0x24, 0x55, 0xAA, 0x55, 0x6B, 0x6B, 0xDB,
        0xED, 0xEE, 0xEE, 0xDE, 0x7B, 0xDF, 0xF7, 0xFB, 0xFD, 0x7E,
    ],
    [
        0x00, 0x02, 0x21, 0x12, 0x29, 0x95, 0xAA, 0x5A, 0xAD, 0x6D, 0xDD,
        0x76, 0xBB, 0x7B, 0xF7, 0xDE, 0xF7, 0xBE, 0xDF, 0xEF, 0x6F,
    ],
    [
        0x00, 0x02, 0x21, 0x22, 0x29, 0xA5, 0xAA, 0x6A, 0xB5, 0xB6, 0x6D,
        0xBB, 0xDD, 0xDD, 0xBD, 0xF7, 0xBE, 0xEF, 0xFB, 0xFD, 0x7E,
    ],
    [
        0x00, 0x02, 0x21, 0x22, 0x49, 0xA9, 0xAA, 0xAA, 0xD6, 0xDA, 0xB6,
        0xDD, 0xEE, 0xEE, 0xEE, 0xBD, 0xF7, 0x7D, 0xDF, 0xEF, 0x6F,
    ],
    [
        0x00, 0x02, 0x21, 0x22, 0x49, 0xA9, 0x54, 0xAD, 0x5A, 0x5B, 0xDB,
        0x6E, 0xB7, 0xBB, 0x77, 0xEF, 0x7D, 0xEF, 0xFB, 0xFD, 0x7E,
    ],
    [
        0x00, 0x02, 0x21, 0x24, 0x49, 0x2A, 0x55, 0xD5, 0x6A, 0x6D, 0x6D,
        0xB7, 0xDD, 0xDD, 0xDD, 0x7B, 0xEF, 0xFB, 0xBE, 0xDF, 0x6F,
    ],
    [
        0x00, 0x02, 0x42, 0x24, 0x49, 0x4A, 0x55, 0x55, 0xAD, 0xB5, 0x6D,
        0xDB, 0xEE, 0xF6, 0xEE, 0xDE, 0x7B, 0xDF, 0xF7, 0xFD, 0x7E,
    ],
    [
        0x00, 0x02, 0x42, 0x24, 0x52, 0x4A, 0x55, 0x55, 0xB5, 0xD6, 0xB6,
        0x6D, 0xB7, 0xBB, 0x7B, 0xF7, 0xDE, 0xFB, 0xBE, 0xDF, 0x6F,
    ],
    [
        0x00, 0x02, 0x42, 0x44, 0x92, 0x52, 0xA9, 0x6A, 0xD5, 0xDA, 0xDA,
        0xB6, 0xDB, 0xDD, 0xDD, 0xBD, 0xF7, 0xBE, 0xEF, 0xFB, 0x7E,
    ],
    [
        0x00, 0x02, 0x42, 0x44, 0x92, 0x52, 0xAA, 0xAA, 0x56, 0x6B, 0x6B,
        0xBB, 0xED, 0x6E, 0xEF, 0xEE, 0xBD, 0xF7, 0x7D, 0xDF, 0x6F,
    ],
    [
        0x00, 0x04, 0x42, 0x44, 0x92, 0x94, 0xAA, 0xAA, 0x6A, 0xAD, 0x6D,
        0xDB, 0x76, 0xBB, 0xBB, 0x77, 0xEF, 0xBD, 0xEF, 0xFB, 0x7D,
    ],
    [
        0x00, 0x04, 0x42, 0x44, 0x92, 0x94, 0x2A, 0xB5, 0xAA, 0xB5, 0xB6,
        0x6D, 0xBB, 0xDD, 0xDD, 0xDD, 0x7B, 0xEF, 0x7B, 0xBF, 0x6F,
    ],
    [
        0x00, 0x04, 0x42, 0x44, 0x92, 0xA4, 0x52, 0x55, 0xAD, 0xD6, 0xD6,
        0xB6, 0xDD, 0x6E, 0x77, 0xEF, 0xDE, 0x7B, 0xDF, 0xF7, 0x7D,
    ],
    [
        0x00, 0x04, 0x42, 0x48, 0x24, 0xA5, 0x54, 0x55, 0xB5, 0x5A, 0x5B,
        0xDB, 0x6E, 0xB7, 0xBB, 0x7B, 0xF7, 0xDE, 0xFB, 0xBE, 0x5F,
    ],
    [
        0x00, 0x04, 0x42, 0x48, 0x24, 0xA5, 0x54, 0x55, 0x55, 0x6B, 0x6D,
        0xDB, 0xB6, 0xDD, 0xDD, 0xDD, 0xBD, 0xF7, 0xBE, 0xF7, 0x7B,
    ],
    [
        0x00, 0x04, 0x82, 0x88, 0x24, 0x29, 0x55, 0xAA, 0x56, 0xAD, 0xB5,
        0x6D, 0xDB, 0xEE, 0x76, 0xF7, 0xEE, 0xBD, 0xF7, 0x7D, 0x5F,
    ],
    [
        0x00, 0x04, 0x82, 0x88, 0x24, 0x29, 0x95, 0xAA, 0x6A, 0xB5, 0xD6,
        0xB6, 0x6D, 0xB7, 0xBB, 0xBB, 0x77, 0xEF, 0xBD, 0xEF, 0x7B,
    ],
    [
        0x00, 0x04, 0x82, 0x88, 0x24, 0x49, 0xA5, 0xAA, 0xAA, 0xD5, 0xDA,
        0xDA, 0x76, 0xDB, 0xDD, 0xDD, 0xDD, 0x7B, 0xEF, 0x7B, 0x5F,
    ],
    [
        0x00, 0x04, 0x84, 0x88, 0x44, 0x49, 0xA9, 0xAA, 0xAA, 0x5A, 0x6B,
        0x5B, 0xB7, 0xED, 0x76, 0x77, 0xEF, 0xDE, 0x7B, 0xDF, 0x77,
    ],
    [
        0x00, 0x04, 0x84, 0x88, 0x48, 0x4A, 0xA9, 0x54, 0xB5, 0x6A, 0xAD,
        0x6D, 0xDB, 0x76, 0xBB, 0xBB, 0x7B, 0xF7, 0xDE, 0xFB, 0x3E,
    ],
    [
        0x00, 0x04, 0x84, 0x88, 0x48, 0x52, 0x2A, 0x55, 0x55, 0xAB, 0xB5,
        0xB6, 0x6D, 0xBB, 0xDD, 0xDD, 0xDD, 0xBD, 0xF7, 0xBE, 0x77,
    ],
    [
        0x00, 0x04, 0x84, 0x90, 0x48, 0x52, 0x4A, 0x55, 0x55, 0xAD, 0xD6,
        0xD6, 0xB6, 0xDD, 0x6E, 0x77, 0xF7, 0xEE, 0xBD, 0xF7, 0x7D,
    ],
    [
        0x00, 0x04, 0x84, 0x10, 0x49, 0x92, 0x52, 0x55, 0x56, 0xD5, 0x5A,
        0xDB, 0xDA, 0x6D, 0xB7, 0xBB, 0xBB, 0x77, 0xEF, 0xBD, 0x6F,
    ],
    [
        0x00, 0x04, 0x84, 0x10, 0x49, 0x92, 0x52, 0xA9, 0xAA, 0x55, 0x6B,
        0x6D, 0xDB, 0xB6, 0xDB, 0xDD, 0xDE, 0xDD, 0x7B, 0xEF, 0x7B,
    ],
    [
        0x00, 0x04, 0x04, 0x11, 0x89, 0x94, 0x54, 0xAA, 0xAA, 0x5A, 0xAD,
        0xB5, 0x6D, 0xDB, 0xED, 0x76, 0x77, 0xEF, 0xDE, 0x7B, 0x5F,
    ],
    [
        0x00, 0x04, 0x04, 0x11, 0x89, 0xA4, 0x94, 0xAA, 0xAA, 0x6A, 0xB5,
        0xB6, 0xB6, 0xED, 0xB6, 0xBB, 0xBB, 0x7B, 0xF7, 0xDE, 0x7B,
    ],
    [
        0x00, 0x04, 0x04, 0x11, 0x91, 0xA4, 0x94, 0x2A, 0xD5, 0xAA, 0xD6,
        0xDA, 0xD6, 0x76, 0xDB, 0xDD, 0xEE, 0xDD, 0xBD, 0xF7, 0x3E,
    ],
    [
        0x00, 0x04, 0x04, 0x11, 0x91, 0x24, 0xA5, 0x52, 0x55, 0xAD, 0x5A,
        0x6B, 0xDB, 0xB6, 0xED, 0x76, 0x77, 0xF7, 0xEE, 0xBD, 0x77,
    ],
    [
        0x00, 0x04, 0x04, 0x11, 0x91, 0x24, 0xA5, 0x54, 0x55, 0xD5, 0x6A,
        0xAD, 0x6D, 0xDB, 0x76, 0xBB, 0xBB, 0xBB, 0x77, 0xEF, 0x3D,
    ],
    [
        0x00, 0x04, 0x04, 0x21, 0x92, 0x24, 0xA9, 0x54, 0x55, 0x55, 0xAB,
        0xB5, 0xB5, 0x6D, 0xBB, 0xDD, 0xED, 0xDE, 0xDD, 0x7B, 0x6F,
    ],
    [
        0x00, 0x04, 0x08, 0x21, 0x12, 0x29, 0x29, 0x55, 0xAA, 0x56, 0xB5,
        0xD6, 0xD6, 0xB6, 0xDB, 0x6E, 0x77, 0x77, 0xEF, 0xDE, 0x7B,
    ],
    [
        0x00, 0x08, 0x08, 0x21, 0x12, 0x49, 0x29, 0x95, 0xAA, 0x6A, 0xD5,
        0x5A, 0xDB, 0xB6, 0x6D, 0xB7, 0xBB, 0xBB, 0xBB, 0xF7, 0x5E,
    ],
    [
        0x00, 0x08, 0x08, 0x21, 0x22, 0x49, 0x4A, 0xA5, 0xAA, 0xAA, 0x56,
        0x6B, 0x6D, 0xDB, 0xB6, 0xDB, 0xED, 0xEE, 0xDE, 0xBD, 0x77,
    ],
    [
        0x00, 0x08, 0x08, 0x21, 0x22, 0x49, 0x4A, 0xA9, 0xAA, 0xAA, 0x5A,
        0xAD, 0xAD, 0x6D, 0xDB, 0xED, 0x76, 0x77, 0xF7, 0xEE, 0x3D,
    ],
    [
        0x00, 0x08, 0x08, 0x22, 0x22, 0x49, 0x52, 0xAA, 0x54, 0xD5, 0xAA,
        0xB5, 0xB6, 0xB6, 0xED, 0xB6, 0xBB, 0xBB, 0xBB, 0x7B, 0x6F,
    ],
    [
        0x00, 0x08, 0x08, 0x22, 0x22, 0x49, 0x52, 0x2A, 0x55, 0x55, 0xAD,
        0xD6, 0xDA, 0xB6, 0x6D, 0xDB, 0xDD, 0xEE, 0xEE, 0xDD, 0x7B,
    ],
    [
        0x00, 0x08, 0x08, 0x22, 0x22, 0x91, 0x92, 0x4A, 0x55, 0x55, 0xB5,
        0x5A, 0x6B, 0xDB, 0xB6, 0xED, 0x76, 0x77, 0x77, 0xEF, 0x5E,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x24, 0x92, 0x94, 0x52, 0x95, 0x5A, 0xD5,
        0x6A, 0x6D, 0x6D, 0xDB, 0x76, 0xBB, 0xBB, 0xBB, 0xBB, 0x77,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x24, 0x92, 0x94, 0x52, 0xA9, 0xAA, 0x56,
        0xAD, 0xB5, 0xB5, 0x6D, 0xB7, 0xDD, 0xEE, 0xEE, 0xDE, 0x3D,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x44, 0x92, 0xA4, 0x54, 0xAA, 0xAA, 0x6A,
        0xB5, 0xD6, 0xB6, 0x76, 0xDB, 0x6E, 0x77, 0x77, 0xF7, 0x6E,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x44, 0x92, 0xA4, 0x94, 0xAA, 0xAA, 0xAA,
        0xD5, 0x5A, 0xDB, 0xB6, 0x6D, 0xB7, 0xBB, 0xDD, 0xBB, 0x7B,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x44, 0x92, 0x24, 0x95, 0x2A, 0x55, 0xAB,
        0x56, 0x6B, 0x6B, 0xDB, 0xB6, 0xDB, 0xED, 0xEE, 0xEE, 0x5D,
    ],
    [
        0x00, 0x08, 0x08, 0x42, 0x44, 0x22, 0x25, 0xA5, 0x52, 0x55, 0xB5,
        0x6A, 0xAD, 0xAD, 0x6D, 0xDB, 0xED, 0x76, 0x77, 0x77, 0x6F,
    ],
    [
        0x00, 0x08, 0x10, 0x42, 0x44, 0x24, 0x29, 0xA9, 0x54, 0x55, 0x55,
        0xAB, 0xB5, 0xB6, 0xB5, 0xDD, 0x76, 0xBB, 0xDD, 0xBD, 0x3B,
    ],
    [
        0x00, 0x08, 0x10, 0x44, 0x48, 0x24, 0x49, 0x29, 0x55, 0x55, 0x55,
        0xAD, 0xD6, 0xDA, 0xB6, 0x6D, 0xBB, 0xDD, 0xEE, 0xEE, 0x5E,
    ],
    [
        0x00, 0x08, 0x10, 0x44, 0x48, 0x24, 0x49, 0x29, 0x55, 0xAA, 0x5A,
        0xB5, 0x5A, 0x5B, 0xDB, 0xB6, 0xDD, 0x76, 0x77, 0x77, 0x77,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x24, 0x49, 0x4A, 0x95, 0xAA, 0xAA,
        0x55, 0x6B, 0x6D, 0x6D, 0xDB, 0x6E, 0xBB, 0xDB, 0xDD, 0x3B,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x24, 0x4A, 0x4A, 0xA5, 0xAA, 0xAA,
        0x5A, 0xAD, 0xB5, 0xAD, 0x6D, 0xB7, 0xDD, 0xEE, 0xEE, 0x6E,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x44, 0x52, 0x52, 0xA9, 0xAA, 0xAA,
        0x6A, 0xB5, 0xD6, 0xB6, 0x6D, 0xDB, 0x6E, 0x77, 0x77, 0x77,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x48, 0x92, 0x52, 0xAA, 0x54, 0xD5,
        0xAA, 0xD6, 0xDA, 0xDA, 0xB6, 0x6D, 0xB7, 0xBB, 0xDD, 0x3D,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x48, 0x92, 0x52, 0x2A, 0x55, 0x55,
        0xAD, 0x5A, 0x6B, 0x6B, 0xDB, 0xB6, 0xDB, 0xED, 0xEE, 0x6E,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x88, 0x48, 0x92, 0x94, 0x4A, 0x55, 0x55,
        0xD5, 0x6A, 0xAD, 0x6D, 0x6D, 0xBB, 0xED, 0x76, 0x77, 0x77,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x90, 0x48, 0x92, 0x94, 0x52, 0x95, 0x6A,
        0x55, 0xAB, 0xB5, 0xB6, 0x6D, 0xDB, 0x76, 0xBB, 0xDD, 0x5D,
    ],
    [
        0x00, 0x08, 0x10, 0x84, 0x10, 0x49, 0x94, 0xA4, 0x54, 0xA9, 0xAA,
        0x5A, 0xB5, 0xD6, 0xD6, 0xB6, 0x6D, 0xBB, 0xDD, 0xEE, 0x6E,
    ],
    [
        0x00, 0x10, 0x10, 0x84, 0x10, 0x89, 0xA4, 0xA4, 0x54, 0xAA, 0xAA,
        0x6A, 0xD5, 0x5A, 0x5B, 0xDB, 0xB6, 0xDD, 0x76, 0x77, 0x7B,
    ],
    [
        0x00, 0x10, 0x10, 0x08, 0x11, 0x89, 0x24, 0x25, 0x95, 0xAA, 0xAA,
        0xAA, 0x56, 0x6B, 0x6D, 0x6D, 0xDB, 0x6E, 0xBB, 0xDB, 0x5D,
    ],
    [
        0x00, 0x10, 0x10, 0x08, 0x11, 0x91, 0x24, 0x29, 0xA5, 0x2A, 0x55,
        0xAB, 0x5A, 0xAD, 0xB5, 0x6D, 0xED, 0xB6, 0xDD, 0xEE, 0x6E,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x11, 0x91, 0x24, 0x29, 0xA5, 0x52, 0x55,
        0xD5, 0xAA, 0xB5, 0xB6, 0xB6, 0x6D, 0xDB, 0x6E, 0x77, 0x3B,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x11, 0x91, 0x24, 0x49, 0xA9, 0x54, 0x55,
        0x55, 0xAB, 0xD6, 0xDA, 0xDA, 0xB6, 0x6D, 0xB7, 0xDB, 0x5D,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x11, 0x91, 0x48, 0x49, 0x29, 0x55, 0x55,
        0x55, 0xB5, 0x5A, 0x6B, 0x6B, 0xDB, 0x76, 0xDB, 0xED, 0x6E,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x21, 0x11, 0x49, 0x4A, 0x2A, 0x55, 0xAA,
        0x6A, 0xD5, 0x6A, 0xAD, 0x6D, 0x6D, 0xB7, 0xED, 0x76, 0x37,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x21, 0x12, 0x49, 0x52, 0x4A, 0xA5, 0xAA,
        0xAA, 0x56, 0xAD, 0xB5, 0xB6, 0x6D, 0xDB, 0x76, 0xBB, 0x5D,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x21, 0x12, 0x49, 0x52, 0x4A, 0xA9, 0xAA,
        0xAA, 0x6A, 0xB5, 0xD6, 0xD6, 0xB6, 0x6D, 0xBB, 0xDD, 0x6E,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x21, 0x22, 0x49, 0x92, 0x52, 0xA9, 0xAA,
        0xAA, 0xAA, 0xD5, 0x5A, 0x5B, 0xDB, 0xB6, 0xDD, 0x6E, 0x37,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x22, 0x22, 0x49, 0x92, 0x52, 0xAA, 0x54,
        0x55, 0xAB, 0x56, 0x6B, 0x6D, 0x6B, 0xDB, 0x6D, 0xBB, 0x5B,
    ],
    [
        0x00, 0x10, 0x20, 0x08, 0x22, 0x22, 0x91, 0x94, 0x94, 0x2A, 0x55,
        0x55, 0xB5, 0x6A, 0xAD, 0xB5, 0x6D, 0xDB, 0xB6, 0xDD, 0x6E,
    ],
    [
        0x00, 0x10, 0x20, 0x10, 0x22, 0x22, 0x91, 0x94, 0x94, 0x4A, 0x55,
        0x55, 0x55, 0xAB, 0xB5, 0xB6, 0xB6, 0x6D, 0xDB, 0x6D, 0x77,
    ],
    [
        0x00, 0x10, 0x20, 0x10, 0x22, 0x22, 0x92, 0xA4, 0xA4, 0x52, 0x95,
        0x6A, 0x55, 0xAD, 0xD6, 0xDA, 0xDA, 0xB6, 0xED, 0xB6, 0x5B,
    ],
    [
        0x00, 0x10, 0x20, 0x10, 0x22, 0x24, 0x92, 0x24, 0xA5, 0x54, 0xA9,
        0xAA, 0x5A, 0xB5, 0x5A, 0x6B, 0x5B, 0xDB, 0x76, 0xDB, 0x6D,
    ],
    [
        0x00, 0x10, 0x20, 0x10, 0x42, 0x24, 0x92, 0x24, 0xA5, 0x54, 0xAA,
        0xAA, 0xAA, 0x55, 0x6B, 0xAD, 0x6D, 0xDB, 0xB6, 0xED, 0x76,
    ],
    [
        0x00, 0x10, 0x20, 0x10, 0x42, 0x44, 0x92, 0x24, 0x29, 0x95, 0xAA,
        0xAA, 0xAA, 0x5A, 0xAD, 0xB5, 0xB5, 0x6D, 0xDB, 0x76, 0x3B,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x42, 0x44, 0x22, 0x29, 0x29, 0xA5, 0x2A,
        0x55, 0xAD, 0x6A, 0xB5, 0xD6, 0xD6, 0xB6, 0x6D, 0xBB, 0x5D,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x42, 0x44, 0x22, 0x49, 0x49, 0xA5, 0x52,
        0x55, 0xD5, 0xAA, 0xD5, 0x5A, 0xDB, 0xDA, 0xB6, 0xDB, 0x6E,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x42, 0x44, 0x24, 0x49, 0x4A, 0xA9, 0x54,
        0x55, 0x55, 0xAD, 0x5A, 0x6B, 0x6D, 0x5B, 0xBB, 0x6D, 0x37,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x44, 0x44, 0x24, 0x49, 0x4A, 0x29, 0x55,
        0x55, 0x55, 0xD5, 0x6A, 0xAD, 0xAD, 0x6D, 0xDB, 0xB6, 0x5B,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x44, 0x44, 0x24, 0x49, 0x52, 0x2A, 0x55,
        0xAA, 0x6A, 0x55, 0xAB, 0xB5, 0xB6, 0xB6, 0x6D, 0xDB, 0x6D,
    ],
    [
        0x00, 0x10, 0x40, 0x10, 0x44, 0x48, 0x24, 0x49, 0x52, 0x4A, 0xA5,
        0xAA, 0xAA, 0x5A, 0xAD, 0xD6, 0xDA, 0xD6, 0xB6, 0xED, 0x36,
    ],
    [
        0x00, 0x10, 0x40, 0x20, 0x84, 0x88, 0x24, 0x92, 0x92, 0x52, 0xA9,
        0xAA, 0xAA, 0x6A, 0xD5, 0x5A, 0x6B, 0xDB, 0xDA, 0x6E, 0x5B,
    ],
];
