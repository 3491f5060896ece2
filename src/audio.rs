use crate::config::{CAPTURE_SOUND_FILE, DEATH_SOUND_FILE, MILESTONE_SOUND_FILE};
use crate::sprites::Sound;
use anyhow::Context;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// Encoded sound clips kept in memory so each playback decodes a fresh copy.
#[derive(Default)]
pub struct SoundBank {
    clips: HashMap<Sound, Arc<[u8]>>,
}

impl SoundBank {
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let mut clips = HashMap::new();
        for (sound, file) in [
            (Sound::Capture, CAPTURE_SOUND_FILE),
            (Sound::Milestone, MILESTONE_SOUND_FILE),
            (Sound::Death, DEATH_SOUND_FILE),
        ] {
            let path = dir.join(file);
            let bytes: Arc<[u8]> = std::fs::read(&path)
                .with_context(|| format!("failed to read sound {}", path.display()))?
                .into();
            Decoder::new(Cursor::new(bytes.clone()))
                .with_context(|| format!("failed to decode sound {}", path.display()))?;
            log::debug!("loaded {} ({} bytes)", path.display(), bytes.len());
            clips.insert(sound, bytes);
        }
        Ok(Self { clips })
    }

    fn clip(&self, sound: Sound) -> Option<Arc<[u8]>> {
        self.clips.get(&sound).cloned()
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    sounds: SoundBank,
}

impl AudioManager {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let (stream, stream_handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            stream_handle,
            sounds: SoundBank::default(),
        })
    }

    pub fn set_sounds(&mut self, sounds: SoundBank) {
        self.sounds = sounds;
    }

    /// Fire and forget; failures are logged and dropped.
    pub fn play(&self, sound: Sound) {
        let Some(clip) = self.sounds.clip(sound) else {
            log::warn!("no clip loaded for {:?}", sound);
            return;
        };
        let dec = match Decoder::new(Cursor::new(clip)) {
            Ok(dec) => dec,
            Err(err) => {
                log::warn!("could not decode {:?}: {}", sound, err);
                return;
            }
        };
        match Sink::try_new(&self.stream_handle) {
            Ok(sink) => {
                sink.append(dec.amplify(0.8));
                sink.detach();
            }
            Err(err) => log::warn!("could not play {:?}: {}", sound, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_sound_names_the_file() {
        let err = SoundBank::load(Path::new("/nonexistent/cracker-chase"))
            .err()
            .expect("load must fail");
        assert!(format!("{err:#}").contains(CAPTURE_SOUND_FILE));
    }

    #[test]
    fn undecodable_sound_is_rejected() {
        let dir = std::env::temp_dir().join(format!("cracker-chase-audio-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        fs::write(dir.join(CAPTURE_SOUND_FILE), b"definitely not audio").expect("write clip");

        let err = SoundBank::load(&dir).err().expect("load must fail");
        let _ = fs::remove_dir_all(&dir);

        assert!(format!("{err:#}").contains("failed to decode"));
    }

    #[test]
    fn empty_bank_has_no_clips() {
        let bank = SoundBank::default();
        assert!(bank.clip(Sound::Death).is_none());
    }
}
