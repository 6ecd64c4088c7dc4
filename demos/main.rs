use midi_messages::{from_frequency, Dynamic, Encoder, NoteName, Octave, Scribe, ScribeSettings};

// a C major arpeggio, one octave up and back
const ARPEGGIO: [NoteName; 4] = [NoteName::C, NoteName::E, NoteName::G, NoteName::C];

fn main() {
    let mut encoder = Encoder::new();
    encoder.set_global_channel(3);

    let velocity = i32::from(Dynamic::Mp.velocity().get());
    let mut messages = vec![encoder.program_change(40, None)];
    for (i, name) in ARPEGGIO.iter().enumerate() {
        let octave = if i == ARPEGGIO.len() - 1 { 5 } else { 4 };
        let note = i32::from(name.in_octave(Octave::new(octave)).get());
        messages.push(encoder.note_on(note, Some(velocity), None));
        messages.push(encoder.note_off(note, None, None));
    }

    // tuning fork, bent slightly sharp, on channel 10
    let a = from_frequency(440.0);
    messages.push(encoder.pitch_bend(Some(8192 + 512), Some(10)));
    messages.push(encoder.note_on(a, Some(i32::from(Dynamic::F.velocity().get())), Some(10)));
    messages.push(encoder.note_off(a, None, Some(10)));

    // the bracketed form, one message per line, for a downstream bridge
    for message in &messages {
        println!("{}", message);
    }

    // the same messages as raw bytes
    let mut scribe = Scribe::new(Vec::new(), ScribeSettings { running_status: true });
    for message in &messages {
        if let Err(e) = scribe.write_message(message) {
            eprintln!("{}", e);
            std::process::exit(1)
        }
    }
    let bytes = scribe.into_inner();
    println!("{} bytes: {:02X?}", bytes.len(), bytes);
}
