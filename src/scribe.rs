use crate::error::LibResult;
use crate::message::Message;
use log::trace;
use snafu::ResultExt;
use std::io::Write;

/// Settings for a [`Scribe`].
#[derive(Copy, Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct ScribeSettings {
    /// When `true`, a status byte that is the same as the previous one is not written again.
    pub running_status: bool,
}

/// A wrapper for any `Write` which puts [`Message`]s on it as raw MIDI bytes. Provides a setting
/// for running status, and stores the most recent status byte.
///
/// ```
/// use midi_messages::{Encoder, Scribe, ScribeSettings};
///
/// let encoder = Encoder::new();
/// let mut scribe = Scribe::new(Vec::new(), ScribeSettings { running_status: true });
/// scribe.write_message(&encoder.note_on(60, None, None)).unwrap();
/// scribe.write_message(&encoder.note_on(64, None, None)).unwrap();
/// assert_eq!(vec![144, 60, 64, 64, 64], scribe.into_inner());
/// ```
#[derive(Debug)]
pub struct Scribe<W: Write> {
    w: W,
    settings: ScribeSettings,
    running_status_byte: Option<u8>,
}

impl<W: Write> Scribe<W> {
    /// Create a new `Scribe`.
    pub fn new(w: W, settings: ScribeSettings) -> Self {
        Self {
            w,
            settings,
            running_status_byte: None,
        }
    }

    /// Write the status byte, if needed, then the data bytes of `message`.
    pub fn write_message(&mut self, message: &Message) -> crate::Result<()> {
        Ok(self.write_message_inner(message)?)
    }

    fn write_message_inner(&mut self, message: &Message) -> LibResult<()> {
        self.write_status_byte(message.status_byte())?;
        let (first, second) = message.data_bytes();
        write_u8!(self.w, first)?;
        if let Some(second) = second {
            write_u8!(self.w, second)?;
        }
        Ok(())
    }

    /// Flushes the inner writer.
    pub fn flush(&mut self) -> crate::Result<()> {
        Ok(self.w.flush().context(wr!())?)
    }

    /// Forget the previous status byte so that the next message writes its status byte even if
    /// running status is on.
    pub fn clear_running_status(&mut self) {
        self.running_status_byte = None;
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.w
    }

    /// Write a status byte. If `running_status` is `true`, and the `status` byte is the same as
    /// `previous_status`, then nothing happens.
    fn write_status_byte(&mut self, status: u8) -> LibResult<()> {
        match self.running_status() {
            Some(previous_status) if previous_status == status => {
                trace!("running status, skipping status byte {:#04X}", status);
                Ok(())
            }
            _ => {
                write_u8!(self.w, status)?;
                self.set_running_status(status);
                Ok(())
            }
        }
    }

    /// If the `running_status` setting is true, and a previous status byte has been written, then
    /// the previous status byte is returned.
    fn running_status(&self) -> Option<u8> {
        if self.use_running_status() {
            self.running_status_byte
        } else {
            None
        }
    }

    /// If the `running_status` setting is true, sets the `running_status_byte`, otherwise does
    /// nothing.
    fn set_running_status(&mut self, value: u8) {
        if self.use_running_status() {
            self.running_status_byte = Some(value)
        }
    }

    /// Returns true if the settings are set to use `running_status`.
    fn use_running_status(&self) -> bool {
        self.settings.running_status
    }
}
