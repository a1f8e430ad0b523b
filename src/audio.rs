//! Audio surface: the engine never touches a sound device directly, only
//! calls into an [`AudioSink`] — the same "emit draw calls, don't own the
//! device" seam used for pixels, applied here to sound.

/// The few distinct cues this engine ever fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundId {
    Pickup,
    Ricochet,
    Blast,
}

/// Fire-and-forget playback; the engine never waits on completion.
pub trait AudioSink {
    fn play(&mut self, sound: SoundId, volume: f32);
}

/// Discards every call — used by tests and anywhere sound is irrelevant.
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn play(&mut self, _sound: SoundId, _volume: f32) {}
}

/// Logs every call at `debug!` instead of playing anything; ships with
/// the demo binary so a developer can see cues fire without wiring a
/// real audio backend.
pub struct LoggingAudioSink;

impl AudioSink for LoggingAudioSink {
    fn play(&mut self, sound: SoundId, volume: f32) {
        log::debug!("audio: {sound:?} at volume {volume:.2}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_sink_accepts_every_sound() {
        let mut sink = NullAudioSink;
        sink.play(SoundId::Pickup, 1.0);
        sink.play(SoundId::Ricochet, 0.0);
        sink.play(SoundId::Blast, 0.5);
    }
}
