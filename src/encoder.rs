use crate::message::Message;
use crate::numbers::{
    Channel, ControlNumber, ControlValue, NoteNumber, PitchBendValue, Pressure, Program, Velocity,
};
use log::debug;

/// Builds [`Message`]s from plain integers. Every argument is clamped into its valid range, so no
/// method can fail. A message whose channel is `None` goes to the encoder's global channel, which
/// starts out as `1`.
///
/// ```
/// use midi_messages::Encoder;
///
/// let mut encoder = Encoder::new();
/// assert_eq!("[144,60,64]", encoder.note_on(60, None, None).to_string());
///
/// encoder.set_global_channel(5);
/// assert_eq!("[148,60,64]", encoder.note_on(60, None, None).to_string());
/// assert_eq!("[128,127,64]", encoder.note_off(200, Some(64), Some(1)).to_string());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Encoder {
    /// Stored as given. Clamped into `1..=16` only when a message is built.
    global_channel: i32,
}

impl Default for Encoder {
    fn default() -> Self {
        Self {
            global_channel: Channel::default().get().into(),
        }
    }
}

impl Encoder {
    /// Creates an encoder whose global channel is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder whose global channel is `channel`. See [`Self::set_global_channel`].
    pub fn with_global_channel(channel: i32) -> Self {
        Self {
            global_channel: channel,
        }
    }

    /// Sets the channel used by messages that do not name one. The value is kept as given, so
    /// [`Self::global_channel`] returns it unchanged, and is clamped into `1..=16` when used.
    pub fn set_global_channel(&mut self, channel: i32) {
        self.global_channel = channel;
        debug!("global channel set to {}", channel);
    }

    /// The value last passed to [`Self::set_global_channel`], which may be out of range.
    pub fn global_channel(&self) -> i32 {
        self.global_channel
    }

    /// The explicit channel, clamped, or the global channel, clamped, when `channel` is `None`.
    pub fn resolve_channel(&self, channel: Option<i32>) -> Channel {
        Channel::saturating(channel.unwrap_or(self.global_channel))
    }

    /// `velocity` defaults to `64`.
    pub fn note_off(&self, note: i32, velocity: Option<i32>, channel: Option<i32>) -> Message {
        Message::note_off(
            self.resolve_channel(channel),
            NoteNumber::saturating(note),
            velocity.map(Velocity::saturating).unwrap_or_default(),
        )
    }

    /// `velocity` defaults to `64`.
    pub fn note_on(&self, note: i32, velocity: Option<i32>, channel: Option<i32>) -> Message {
        Message::note_on(
            self.resolve_channel(channel),
            NoteNumber::saturating(note),
            velocity.map(Velocity::saturating).unwrap_or_default(),
        )
    }

    /// Key pressure on `note`.
    pub fn aftertouch(&self, note: i32, pressure: i32, channel: Option<i32>) -> Message {
        Message::aftertouch(
            self.resolve_channel(channel),
            NoteNumber::saturating(note),
            Pressure::saturating(pressure),
        )
    }

    /// Sets controller `number` to `value`.
    pub fn control_change(&self, number: i32, value: i32, channel: Option<i32>) -> Message {
        Message::control_change(
            self.resolve_channel(channel),
            ControlNumber::saturating(number),
            ControlValue::saturating(value),
        )
    }

    /// Selects program `number`.
    pub fn program_change(&self, number: i32, channel: Option<i32>) -> Message {
        Message::program_change(self.resolve_channel(channel), Program::saturating(number))
    }

    /// Pressure for the whole channel.
    pub fn channel_pressure(&self, pressure: i32, channel: Option<i32>) -> Message {
        Message::channel_pressure(self.resolve_channel(channel), Pressure::saturating(pressure))
    }

    /// `pitch` is clamped into `0..=16383` and defaults to `8192`, i.e. no bend. It is sent as the
    /// low seven bits followed by the high seven bits.
    pub fn pitch_bend(&self, pitch: Option<i32>, channel: Option<i32>) -> Message {
        Message::pitch_bend(
            self.resolve_channel(channel),
            pitch.map(PitchBendValue::saturating).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_on_middle_c() {
        let e = Encoder::new();
        assert_eq!("[144,60,64]", e.note_on(60, Some(64), Some(1)).to_string());
        assert_eq!("[144,60,64]", e.note_on(60, None, None).to_string());
    }

    #[test]
    fn note_off_clamps_note() {
        let e = Encoder::new();
        assert_eq!("[128,127,64]", e.note_off(200, Some(64), Some(1)).to_string());
        assert_eq!("[128,0,0]", e.note_off(-1, Some(-1), Some(1)).to_string());
    }

    #[test]
    fn pitch_bend_center() {
        let e = Encoder::new();
        assert_eq!("[224,0,64]", e.pitch_bend(Some(8192), Some(1)).to_string());
        assert_eq!("[224,0,64]", e.pitch_bend(None, None).to_string());
        assert_eq!("[224,127,127]", e.pitch_bend(Some(20000), None).to_string());
        assert_eq!("[224,0,0]", e.pitch_bend(Some(-20000), None).to_string());
    }

    #[test]
    fn global_channel() {
        let mut e = Encoder::default();
        assert_eq!(1, e.global_channel());
        e.set_global_channel(5);
        assert_eq!(5, e.global_channel());
        assert_eq!(148, e.note_on(60, None, None).status_byte());
        // an explicit channel wins
        assert_eq!(144, e.note_on(60, None, Some(1)).status_byte());
    }

    #[test]
    fn global_channel_reads_back_unclamped() {
        let mut e = Encoder::with_global_channel(0);
        assert_eq!(0, e.global_channel());
        assert_eq!(1, e.resolve_channel(None).get());
        assert_eq!("[192,3]", e.program_change(3, None).to_string());
        e.set_global_channel(99);
        assert_eq!(99, e.global_channel());
        assert_eq!("[207,3]", e.program_change(3, None).to_string());
        assert_eq!(191, e.control_change(1, 1, None).status_byte());
        e.set_global_channel(20);
        assert_eq!(20, e.global_channel());
        assert_eq!(16, e.resolve_channel(None).get());
    }

    #[test]
    fn channels_clamp() {
        let e = Encoder::new();
        assert_eq!(1, e.resolve_channel(Some(0)).get());
        assert_eq!(1, e.resolve_channel(Some(-4)).get());
        assert_eq!(16, e.resolve_channel(Some(17)).get());
        assert_eq!(16, e.resolve_channel(Some(i32::MAX)).get());
        assert_eq!(9, e.resolve_channel(Some(9)).get());
    }

    #[test]
    fn every_message_type() {
        let e = Encoder::with_global_channel(2);
        assert_eq!("[161,64,127]", e.aftertouch(64, 200, None).to_string());
        assert_eq!("[177,7,100]", e.control_change(7, 100, None).to_string());
        assert_eq!("[177,127,0]", e.control_change(128, -5, None).to_string());
        assert_eq!("[193,127]", e.program_change(300, None).to_string());
        assert_eq!("[209,63]", e.channel_pressure(63, None).to_string());
    }
}
