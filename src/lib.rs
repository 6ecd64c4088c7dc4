/*!

Builds MIDI channel voice messages (note on/off, aftertouch, control change, program change,
channel pressure and pitch bend) from note names, octaves, velocities and channel numbers.

Every input is clamped into its valid range rather than rejected, so encoding never fails. A
[`Message`] can be rendered as the bracketed string `[144,60,64]` with `Display`, as raw bytes with
[`Message::to_bytes`], or written to any `std::io::Write` with a [`Scribe`].

```
use midi_messages::{Dynamic, Encoder, NoteName, Octave};

let mut encoder = Encoder::new();
encoder.set_global_channel(2);
let note = NoteName::A.in_octave(Octave::new(4));
let velocity = Dynamic::Ff.velocity();
let message = encoder.note_on(note.get().into(), Some(velocity.get().into()), None);
assert_eq!("[145,69,96]", message.to_string());
```

!*/

#[macro_use]
mod error;
#[macro_use]
mod clamp;
#[macro_use]
mod macros;

mod bits;
mod dynamic;
mod encoder;
mod message;
mod note;
mod numbers;
mod scribe;
mod status_type;

pub use clamp::clamp;
pub use dynamic::Dynamic;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use message::{
    AftertouchValue, ChannelPressureValue, ControlChangeValue, Message, NoteMessage,
    PitchBendMessage, ProgramChangeValue,
};
pub use note::{from_frequency, from_note_and_octave, NoteName};
pub use numbers::{
    Channel, ControlNumber, ControlValue, NoteNumber, Octave, PitchBendValue, Pressure, Program,
    Velocity,
};
pub use scribe::{Scribe, ScribeSettings};
pub use status_type::StatusType;
