//! Background-music playback.
//!
//! The wall plays a generated ambient loop through the default output
//! device. Toggling only flips a pause flag shared with the stream callback;
//! the stream itself stays open for the whole session. Machines without a
//! usable output device run without music and the toggle is disabled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

/// Frequencies of the ambient chord, in Hz. Whole numbers keep the loop
/// seamless across the one-second phase wrap.
const CHORD_HZ: [f32; 3] = [220.0, 277.0, 330.0];
/// Per-voice amplitude.
const VOICE_GAIN: f32 = 0.05;

/// Owns the output stream and the shared pause flag.
///
/// Starts paused; [`MusicPlayer::toggle`] starts and pauses playback.
pub struct MusicPlayer {
    paused: Arc<AtomicBool>,
    // Dropping the stream stops playback, so it is held for the player's
    // lifetime even though nothing reads it.
    _stream: cpal::Stream,
}

impl MusicPlayer {
    /// Opens the default output device and starts a paused stream.
    ///
    /// # Errors
    ///
    /// Returns an error when there is no output device, its configuration
    /// cannot be read, or the stream fails to start.
    pub fn new() -> Result<Self, String> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| "no audio output device".to_string())?;
        let config = device
            .default_output_config()
            .map_err(|err| format!("audio config: {err}"))?;

        let sample_rate = config.sample_rate().0;
        let channels = config.channels() as usize;

        let paused = Arc::new(AtomicBool::new(true));
        let paused_in_callback = Arc::clone(&paused);
        let mut clock: u32 = 0;

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    if paused_in_callback.load(Ordering::Relaxed) {
                        data.fill(0.0);
                        return;
                    }
                    for frame in data.chunks_mut(channels) {
                        let value = ambient_sample(clock as f32 / sample_rate as f32);
                        for sample in frame.iter_mut() {
                            *sample = value;
                        }
                        clock = (clock + 1) % sample_rate;
                    }
                },
                move |err| log::warn!("audio stream error: {err}"),
                None,
            )
            .map_err(|err| format!("audio stream: {err}"))?;
        stream.play().map_err(|err| format!("audio start: {err}"))?;

        Ok(Self {
            paused,
            _stream: stream,
        })
    }

    /// Whether music is currently audible.
    pub fn is_playing(&self) -> bool {
        !self.paused.load(Ordering::Relaxed)
    }

    /// Flips between playing and paused.
    pub fn toggle(&self) {
        self.paused.fetch_xor(true, Ordering::Relaxed);
    }
}

/// One sample of the ambient chord at time `t` seconds.
fn ambient_sample(t: f32) -> f32 {
    CHORD_HZ
        .iter()
        .map(|hz| (t * hz * std::f32::consts::TAU).sin() * VOICE_GAIN)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambient_sample_stays_within_headroom() {
        let ceiling = CHORD_HZ.len() as f32 * VOICE_GAIN;
        for i in 0..48_000 {
            let value = ambient_sample(i as f32 / 48_000.0);
            assert!(value.abs() <= ceiling + f32::EPSILON);
        }
    }

    #[test]
    fn ambient_sample_is_seamless_at_the_wrap() {
        // The clock wraps after one second; integer frequencies make the
        // first sample of the next loop equal the loop start.
        let start = ambient_sample(0.0);
        let wrapped = ambient_sample(1.0);
        assert!((start - wrapped).abs() < 1e-3);
    }
}
