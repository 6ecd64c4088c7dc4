use crate::error::{self, LibError};
use crate::numbers::{NoteNumber, Octave};
use log::debug;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The frequency, in Hz, of `A3` which anchors [`from_frequency`].
const A3_HZ: f64 = 220.0;

/// The MIDI note number of `A3`.
const A3_NOTE: f64 = 57.0;

/// The twelve pitch classes of the chromatic scale, spelled with sharps. The discriminant is the
/// offset, in semitones, above `C`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum NoteName {
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

impl Default for NoteName {
    fn default() -> Self {
        NoteName::C
    }
}

impl NoteName {
    /// Semitones above `C`, `0` through `11`.
    pub fn offset(&self) -> u8 {
        *self as u8
    }

    /// The note number of this pitch class in `octave`, clamped into `0..=127` (`G9` is the
    /// highest note that fits).
    pub fn in_octave(&self, octave: Octave) -> NoteNumber {
        from_note_and_octave(i32::from(self.offset()), i32::from(octave.get()))
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoteName::C => "C",
            NoteName::Cs => "C#",
            NoteName::D => "D",
            NoteName::Ds => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::Fs => "F#",
            NoteName::G => "G",
            NoteName::Gs => "G#",
            NoteName::A => "A",
            NoteName::As => "A#",
            NoteName::B => "B",
        };
        f.write_str(s)
    }
}

impl FromStr for NoteName {
    type Err = crate::Error;

    /// Accepts a letter, optionally followed by `#` or `s` (sharp) or `b` (flat), e.g. `C#`, `Fs`,
    /// `Bb`. Only the flats that name a black key are accepted.
    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(parse_note_name(s)?)
    }
}

fn parse_note_name(s: &str) -> Result<NoteName, LibError> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next().map(|c| c.to_ascii_uppercase());
    let accidental: String = chars.collect();
    let name = match (letter, accidental.as_str()) {
        (Some('C'), "") => NoteName::C,
        (Some('C'), "#") | (Some('C'), "s") | (Some('D'), "b") => NoteName::Cs,
        (Some('D'), "") => NoteName::D,
        (Some('D'), "#") | (Some('D'), "s") | (Some('E'), "b") => NoteName::Ds,
        (Some('E'), "") => NoteName::E,
        (Some('F'), "") => NoteName::F,
        (Some('F'), "#") | (Some('F'), "s") | (Some('G'), "b") => NoteName::Fs,
        (Some('G'), "") => NoteName::G,
        (Some('G'), "#") | (Some('G'), "s") | (Some('A'), "b") => NoteName::Gs,
        (Some('A'), "") => NoteName::A,
        (Some('A'), "#") | (Some('A'), "s") | (Some('B'), "b") => NoteName::As,
        (Some('B'), "") => NoteName::B,
        _ => {
            return error::UnknownNoteName {
                site: site!(),
                name: s,
            }
            .fail()
        }
    };
    Ok(name)
}

/// Computes `octave * 12 + 12 + note_offset` and clamps the result into `0..=127`. Neither input
/// is checked on its own; `note_offset` is normally `0..=11` and `octave` normally `-1..=9`.
///
/// ```
/// use midi_messages::from_note_and_octave;
/// assert_eq!(from_note_and_octave(0, 4).get(), 60);
/// assert_eq!(from_note_and_octave(11, 9).get(), 127);
/// ```
pub fn from_note_and_octave(note_offset: i32, octave: i32) -> NoteNumber {
    let note = octave
        .saturating_mul(12)
        .saturating_add(12)
        .saturating_add(note_offset);
    NoteNumber::saturating(note)
}

/// Converts a frequency to the nearest equal-tempered note number, anchored at `A3` = 220Hz =
/// note `57`. Halfway cases round up, toward positive infinity, so `-2.5` becomes `-2`.
///
/// The result is *not* clamped. Frequencies above roughly 12.5kHz give numbers above `127` and
/// frequencies below roughly 8.2Hz give negative numbers. A zero frequency gives `i32::MIN` and a
/// negative or NaN frequency gives `0`. Pass the result through [`NoteNumber::saturating`] or one
/// of the [`crate::Encoder`] methods to bring it into range.
///
/// ```
/// use midi_messages::from_frequency;
/// assert_eq!(from_frequency(220.0), 57);
/// assert_eq!(from_frequency(440.0), 69);
/// ```
pub fn from_frequency(frequency: f64) -> i32 {
    let note = round_half_up(12.0 * (frequency / A3_HZ).log2() + A3_NOTE) as i32;
    if !(0..=127).contains(&note) {
        debug!("{}Hz converts to note {}, outside of 0..=127", frequency, note);
    }
    note
}

/// Rounds to the nearest integer with halves going toward positive infinity. `f64::round` sends
/// negative halves the other way.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_c() {
        assert_eq!(60, from_note_and_octave(0, 4).get());
        assert_eq!(60, NoteName::C.in_octave(Octave::default()).get());
    }

    #[test]
    fn note_and_octave_clamps_high() {
        // 11 + 12 * 9 + 12 = 131
        assert_eq!(127, from_note_and_octave(11, 9).get());
        assert_eq!(127, NoteName::B.in_octave(Octave::new(9)).get());
        assert_eq!(127, NoteName::G.in_octave(Octave::new(9)).get());
        assert_eq!(126, NoteName::Fs.in_octave(Octave::new(9)).get());
    }

    #[test]
    fn note_and_octave_clamps_low() {
        assert_eq!(0, from_note_and_octave(0, -1).get());
        assert_eq!(0, from_note_and_octave(0, -3).get());
        assert_eq!(0, from_note_and_octave(i32::MIN, i32::MIN).get());
        assert_eq!(127, from_note_and_octave(i32::MAX, i32::MAX).get());
    }

    #[test]
    fn frequency() {
        assert_eq!(57, from_frequency(220.0));
        assert_eq!(69, from_frequency(440.0));
        assert_eq!(60, from_frequency(261.63));
        assert_eq!(45, from_frequency(110.0));
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(3.0, round_half_up(2.5));
        assert_eq!(-2.0, round_half_up(-2.5));
        assert_eq!(0.0, round_half_up(-0.5));
        assert_eq!(-3.0, round_half_up(-2.6));
        assert_eq!(57.0, round_half_up(57.49));
    }

    #[test]
    fn frequency_is_not_clamped() {
        assert!(from_frequency(20_000.0) > 127);
        assert!(from_frequency(4.0) < 0);
        assert_eq!(i32::MIN, from_frequency(0.0));
        assert_eq!(0, from_frequency(-440.0));
    }

    #[test]
    fn parse_names() {
        assert_eq!(NoteName::C, "C".parse::<NoteName>().unwrap());
        assert_eq!(NoteName::Cs, "C#".parse::<NoteName>().unwrap());
        assert_eq!(NoteName::Cs, "Cs".parse::<NoteName>().unwrap());
        assert_eq!(NoteName::Cs, "Db".parse::<NoteName>().unwrap());
        assert_eq!(NoteName::As, "bb".parse::<NoteName>().unwrap());
        assert_eq!(NoteName::Gs, " g# ".parse::<NoteName>().unwrap());
    }

    #[test]
    fn parse_bad_names() {
        assert!("H".parse::<NoteName>().is_err());
        assert!("".parse::<NoteName>().is_err());
        assert!("E#".parse::<NoteName>().is_err());
        assert!("Cb".parse::<NoteName>().is_err());
        let message = format!("{}", "X#".parse::<NoteName>().err().unwrap());
        assert!(message.contains("'X#' is not a note name"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for offset in 0..12 {
            let name = from_offset(offset);
            assert_eq!(name, name.to_string().parse::<NoteName>().unwrap());
        }
    }

    fn from_offset(offset: u8) -> NoteName {
        match offset {
            0 => NoteName::C,
            1 => NoteName::Cs,
            2 => NoteName::D,
            3 => NoteName::Ds,
            4 => NoteName::E,
            5 => NoteName::F,
            6 => NoteName::Fs,
            7 => NoteName::G,
            8 => NoteName::Gs,
            9 => NoteName::A,
            10 => NoteName::As,
            _ => NoteName::B,
        }
    }
}
