use crate::numbers::Channel;

/// Represents the channel voice status byte types in Table I "Summary of Status Bytes" from the
/// MIDI specification. The discriminant is the high nibble of the status byte.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum StatusType {
    /// `0x8`: a `Note Off` message.
    NoteOff = 0x8,

    /// `0x9`: a `Note On (a velocity of 0 = Note Off)` message.
    NoteOn = 0x9,

    /// `0xA`: a `Polyphonic key pressure/Aftertouch` message.
    Aftertouch = 0xA,

    /// `0xB`: a `Control change` message.
    ControlChange = 0xB,

    /// `0xC`: a `Program change` message.
    ProgramChange = 0xC,

    /// `0xD`: a `Channel pressure/After touch` message.
    ChannelPressure = 0xD,

    /// `0xE`: a `Pitch bend change` message.
    PitchBend = 0xE,
}

impl Default for StatusType {
    fn default() -> Self {
        StatusType::NoteOff
    }
}

impl StatusType {
    /// The status byte of this message type on channel `1`, e.g. `144` for [`StatusType::NoteOn`].
    pub fn base_code(&self) -> u8 {
        (*self as u8) << 4
    }

    /// Combines the status part and channel part of a channel voice message. This is the same as
    /// `base_code + channel - 1`.
    pub fn status_byte(&self, channel: Channel) -> u8 {
        self.base_code() | channel.nibble()
    }

    /// The number of data bytes that follow the status byte.
    pub fn data_len(&self) -> usize {
        match self {
            StatusType::ProgramChange | StatusType::ChannelPressure => 1,
            _ => 2,
        }
    }
}

#[test]
fn base_codes() {
    assert_eq!(128, StatusType::NoteOff.base_code());
    assert_eq!(144, StatusType::NoteOn.base_code());
    assert_eq!(160, StatusType::Aftertouch.base_code());
    assert_eq!(176, StatusType::ControlChange.base_code());
    assert_eq!(192, StatusType::ProgramChange.base_code());
    assert_eq!(208, StatusType::ChannelPressure.base_code());
    assert_eq!(224, StatusType::PitchBend.base_code());
}

#[test]
fn status_byte_is_base_plus_channel_minus_one() {
    for c in 1..=16u8 {
        let channel = Channel::new(c);
        assert_eq!(144 + c - 1, StatusType::NoteOn.status_byte(channel));
        assert_eq!(224 + c - 1, StatusType::PitchBend.status_byte(channel));
    }
}
