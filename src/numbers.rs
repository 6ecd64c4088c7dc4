clamp!(
    /// Represents the MIDI channel as musicians number it. The minimum value is `1`, the maximum
    /// value is `16`. On the wire the channel occupies the low nibble of the status byte as
    /// `channel - 1`. This type will clamp values to the valid range.
    Channel,
    u8,
    1,
    16,
    1,
    pub
);

impl Channel {
    /// The four bits that are merged into a status byte, i.e. `0` for channel `1`.
    pub fn nibble(&self) -> u8 {
        self.0 - 1
    }
}

clamp!(
    /// Represents the MIDI note number (`C4` is `60`, for example). The minimum value is `0`,
    /// the maximum value is `127` (i.e. `u7`). This type will clamp values to the valid range.
    NoteNumber,
    u8,
    0,
    127,
    60,
    pub
);

clamp!(
    /// Represents the MIDI velocity. The minimum value is `0`, the maximum value is `127` (i.e.
    /// `u7`). The default is `64`, i.e. [`crate::Dynamic::Mf`]. This type will clamp values to the
    /// valid range.
    Velocity,
    u8,
    0,
    127,
    64,
    pub
);

clamp!(
    /// Represents key or channel pressure (aftertouch). The minimum value is `0`, the maximum
    /// value is `127` (i.e. `u7`). This type will clamp values to the valid range.
    Pressure,
    u8,
    0,
    127,
    63,
    pub
);

clamp!(
    /// Represents the controller number of a control change message. The minimum value is `0`,
    /// the maximum value is `127` (i.e. `u7`). This type will clamp values to the valid range.
    ControlNumber,
    u8,
    0,
    127,
    0,
    pub
);

clamp!(
    /// Represents a MIDI control value. The minimum value is `0`, the maximum value  is `127` (i.e.
    /// `u7`). This type will clamp values to the valid range.
    ControlValue,
    u8,
    0,
    127,
    0,
    pub
);

clamp!(
    /// Represents the MIDI program number. The minimum value is `0`, the maximum value is `127`
    /// (i.e. `u7`). This type will clamp values to the valid range.
    Program,
    u8,
    0,
    127,
    0,
    pub
);

clamp!(
    /// Represents the MIDI pitch bend value. The minimum value is `0`, the maximum value is `16383`
    /// (i.e. `u14`). `8192` means no bend. This type will clamp values to the valid range.
    PitchBendValue,
    u16,
    0,
    16383,
    8192,
    pub
);

impl PitchBendValue {
    /// Builds the value from its two 7-bit halves. The top bit of each byte is ignored.
    pub fn from_bytes(lsb: u8, msb: u8) -> Self {
        Self::new(crate::bits::join_14_bit_number(lsb, msb))
    }

    /// The least-significant seven bits, sent first.
    pub fn lsb(&self) -> u8 {
        crate::bits::split_14_bit_number(self.0).0
    }

    /// The most-significant seven bits, sent second.
    pub fn msb(&self) -> u8 {
        crate::bits::split_14_bit_number(self.0).1
    }
}

clamp!(
    /// The octave of a note, where octave `4` holds middle C. The minimum value is `-1` (the
    /// octave holding note `0`), the maximum value is `9`. This type will clamp values to the
    /// valid range.
    Octave,
    i8,
    -1,
    9,
    4,
    pub
);

#[test]
fn channel_clamps_to_one_through_sixteen() {
    assert_eq!(1, Channel::saturating(0).get());
    assert_eq!(1, Channel::saturating(-7).get());
    assert_eq!(16, Channel::saturating(17).get());
    assert_eq!(16, Channel::saturating(255).get());
    assert_eq!(1, Channel::new(0).get());
    assert_eq!(1, Channel::default().get());
}

#[test]
fn channel_nibble() {
    assert_eq!(0, Channel::new(1).nibble());
    assert_eq!(15, Channel::new(16).nibble());
}

#[test]
fn defaults() {
    assert_eq!(60, NoteNumber::default().get());
    assert_eq!(64, Velocity::default().get());
    assert_eq!(63, Pressure::default().get());
    assert_eq!(0, ControlNumber::default().get());
    assert_eq!(0, ControlValue::default().get());
    assert_eq!(0, Program::default().get());
    assert_eq!(8192, PitchBendValue::default().get());
    assert_eq!(4, Octave::default().get());
}

#[test]
fn seven_bit_values_clamp() {
    assert_eq!(127, NoteNumber::new(200).get());
    assert_eq!(127, Velocity::saturating(1000).get());
    assert_eq!(0, Pressure::saturating(-1).get());
    assert_eq!(127, ControlValue::new(u8::MAX).get());
}

#[test]
fn pitch_bend_value_bytes() {
    let center = PitchBendValue::default();
    assert_eq!(0, center.lsb());
    assert_eq!(64, center.msb());
    let top = PitchBendValue::saturating(99999);
    assert_eq!(16383, top.get());
    assert_eq!(127, top.lsb());
    assert_eq!(127, top.msb());
    assert_eq!(8292, PitchBendValue::from_bytes(100, 64).get());
}

#[test]
fn octave_range() {
    assert_eq!(-1, Octave::MIN);
    assert_eq!(9, Octave::MAX);
    assert_eq!(-1, Octave::saturating(-5).get());
    assert_eq!(9, Octave::new(12).get());
}
