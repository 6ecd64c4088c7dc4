use crate::numbers::{
    Channel, ControlNumber, ControlValue, NoteNumber, PitchBendValue, Pressure, Program, Velocity,
};
use crate::status_type::StatusType;
use std::fmt::{Display, Formatter};

/// Represents the data that is common, and required for both [`Message::NoteOn`] and
/// [`Message::NoteOff`] messages.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NoteMessage {
    pub(crate) channel: Channel,
    pub(crate) note_number: NoteNumber,
    pub(crate) velocity: Velocity,
}

impl NoteMessage {
    pub fn new(channel: Channel, note_number: NoteNumber, velocity: Velocity) -> Self {
        Self {
            channel,
            note_number,
            velocity,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn note_number(&self) -> NoteNumber {
        self.note_number
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }
}

/// Pressure applied to a single, already sounding key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct AftertouchValue {
    pub(crate) channel: Channel,
    pub(crate) note_number: NoteNumber,
    pub(crate) pressure: Pressure,
}

impl AftertouchValue {
    pub fn new(channel: Channel, note_number: NoteNumber, pressure: Pressure) -> Self {
        Self {
            channel,
            note_number,
            pressure,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn note_number(&self) -> NoteNumber {
        self.note_number
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

/// Sets controller `control` to `value`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ControlChangeValue {
    pub(crate) channel: Channel,
    pub(crate) control: ControlNumber,
    pub(crate) value: ControlValue,
}

impl ControlChangeValue {
    pub fn new(channel: Channel, control: ControlNumber, value: ControlValue) -> Self {
        Self {
            channel,
            control,
            value,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn control(&self) -> ControlNumber {
        self.control
    }

    pub fn value(&self) -> ControlValue {
        self.value
    }
}

/// Provides the ability to change an instrument (sound, patch, etc.) by specifying the affected
/// channel number and the new program value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ProgramChangeValue {
    pub(crate) channel: Channel,
    pub(crate) program: Program,
}

impl ProgramChangeValue {
    pub fn new(channel: Channel, program: Program) -> Self {
        Self { channel, program }
    }

    /// Get the channel value.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Get the program value.
    pub fn program(&self) -> Program {
        self.program
    }
}

/// Pressure applied to the channel as a whole, i.e. the greatest pressure across all held keys.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ChannelPressureValue {
    pub(crate) channel: Channel,
    pub(crate) pressure: Pressure,
}

impl ChannelPressureValue {
    pub fn new(channel: Channel, pressure: Pressure) -> Self {
        Self { channel, pressure }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PitchBendMessage {
    pub(crate) channel: Channel,
    pub(crate) value: PitchBendValue,
}

impl PitchBendMessage {
    pub fn new(channel: Channel, value: PitchBendValue) -> Self {
        Self { channel, value }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn value(&self) -> PitchBendValue {
        self.value
    }
}

/// A MIDI channel voice message: a status byte, carrying the message type and channel, followed
/// by one or two data bytes. Every value held is already within its valid range, so a `Message`
/// always encodes.
///
/// `Display` gives the bracketed form that the downstream bridge expects, e.g. `[144,60,64]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Message {
    NoteOff(NoteMessage),
    NoteOn(NoteMessage),
    Aftertouch(AftertouchValue),
    ControlChange(ControlChangeValue),
    ProgramChange(ProgramChangeValue),
    ChannelPressure(ChannelPressureValue),
    PitchBend(PitchBendMessage),
}

impl Default for Message {
    fn default() -> Self {
        Message::NoteOff(NoteMessage::default())
    }
}

impl Message {
    pub fn note_off(channel: Channel, note_number: NoteNumber, velocity: Velocity) -> Self {
        Message::NoteOff(NoteMessage::new(channel, note_number, velocity))
    }

    pub fn note_on(channel: Channel, note_number: NoteNumber, velocity: Velocity) -> Self {
        Message::NoteOn(NoteMessage::new(channel, note_number, velocity))
    }

    pub fn aftertouch(channel: Channel, note_number: NoteNumber, pressure: Pressure) -> Self {
        Message::Aftertouch(AftertouchValue::new(channel, note_number, pressure))
    }

    pub fn control_change(channel: Channel, control: ControlNumber, value: ControlValue) -> Self {
        Message::ControlChange(ControlChangeValue::new(channel, control, value))
    }

    pub fn program_change(channel: Channel, program: Program) -> Self {
        Message::ProgramChange(ProgramChangeValue::new(channel, program))
    }

    pub fn channel_pressure(channel: Channel, pressure: Pressure) -> Self {
        Message::ChannelPressure(ChannelPressureValue::new(channel, pressure))
    }

    pub fn pitch_bend(channel: Channel, value: PitchBendValue) -> Self {
        Message::PitchBend(PitchBendMessage::new(channel, value))
    }

    pub fn status_type(&self) -> StatusType {
        match self {
            Message::NoteOff(_) => StatusType::NoteOff,
            Message::NoteOn(_) => StatusType::NoteOn,
            Message::Aftertouch(_) => StatusType::Aftertouch,
            Message::ControlChange(_) => StatusType::ControlChange,
            Message::ProgramChange(_) => StatusType::ProgramChange,
            Message::ChannelPressure(_) => StatusType::ChannelPressure,
            Message::PitchBend(_) => StatusType::PitchBend,
        }
    }

    pub fn channel(&self) -> Channel {
        match self {
            Message::NoteOff(m) | Message::NoteOn(m) => m.channel(),
            Message::Aftertouch(m) => m.channel(),
            Message::ControlChange(m) => m.channel(),
            Message::ProgramChange(m) => m.channel(),
            Message::ChannelPressure(m) => m.channel(),
            Message::PitchBend(m) => m.channel(),
        }
    }

    /// `base_code + channel - 1`, e.g. `148` for a note on in channel `5`.
    pub fn status_byte(&self) -> u8 {
        self.status_type().status_byte(self.channel())
    }

    /// The one or two data bytes that follow the status byte. The second byte is `None` for
    /// program change and channel pressure.
    pub fn data_bytes(&self) -> (u8, Option<u8>) {
        match self {
            Message::NoteOff(m) | Message::NoteOn(m) => {
                (m.note_number.get(), Some(m.velocity.get()))
            }
            Message::Aftertouch(m) => (m.note_number.get(), Some(m.pressure.get())),
            Message::ControlChange(m) => (m.control.get(), Some(m.value.get())),
            Message::ProgramChange(m) => (m.program.get(), None),
            Message::ChannelPressure(m) => (m.pressure.get(), None),
            Message::PitchBend(m) => (m.value.lsb(), Some(m.value.msb())),
        }
    }

    /// The number of bytes on the wire, `2` or `3`.
    pub fn byte_len(&self) -> usize {
        1 + self.status_type().data_len()
    }

    /// The status byte followed by the data bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_len());
        bytes.push(self.status_byte());
        let (first, second) = self.data_bytes();
        bytes.push(first);
        if let Some(second) = second {
            bytes.push(second);
        }
        bytes
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (first, second) = self.data_bytes();
        write!(f, "[{},{}", self.status_byte(), first)?;
        if let Some(second) = second {
            write!(f, ",{}", second)?;
        }
        f.write_str("]")
    }
}

impl From<Message> for Vec<u8> {
    fn from(value: Message) -> Self {
        value.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(value: u8) -> Channel {
        Channel::new(value)
    }

    #[test]
    fn note_on_display() {
        let m = Message::note_on(ch(1), NoteNumber::new(60), Velocity::new(64));
        assert_eq!("[144,60,64]", m.to_string());
        assert_eq!(vec![144, 60, 64], m.to_bytes());
        assert_eq!(3, m.byte_len());
    }

    #[test]
    fn two_byte_messages() {
        let m = Message::program_change(ch(3), Program::new(5));
        assert_eq!("[194,5]", m.to_string());
        assert_eq!(2, m.byte_len());
        let m = Message::channel_pressure(ch(16), Pressure::new(100));
        assert_eq!("[223,100]", m.to_string());
        assert_eq!(vec![223, 100], Vec::<u8>::from(m));
    }

    #[test]
    fn pitch_bend_bytes() {
        let m = Message::pitch_bend(ch(1), PitchBendValue::new(8192));
        assert_eq!("[224,0,64]", m.to_string());
        let m = Message::pitch_bend(ch(2), PitchBendValue::new(8292));
        assert_eq!(vec![225, 100, 64], m.to_bytes());
    }

    #[test]
    fn accessors() {
        let m = Message::control_change(ch(10), ControlNumber::new(7), ControlValue::new(99));
        assert_eq!(StatusType::ControlChange, m.status_type());
        assert_eq!(10, m.channel().get());
        assert_eq!(185, m.status_byte());
        assert_eq!((7, Some(99)), m.data_bytes());
        if let Message::ControlChange(value) = m {
            assert_eq!(7, value.control().get());
            assert_eq!(99, value.value().get());
        } else {
            panic!("wrong variant, got {:?}", m);
        }
    }

    #[test]
    fn default_message() {
        assert_eq!("[128,60,64]", Message::default().to_string());
    }
}
