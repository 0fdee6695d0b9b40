//! Audio playback for simulation sound cues
//!
//! Clips are `<audio>` elements embedded in the page; each cue rewinds its
//! clip and plays it again. Native builds only log the cue.

use crate::sim::Sound;

/// DOM id of the `<audio>` element for a cue
pub fn element_id(sound: Sound) -> &'static str {
    match sound {
        Sound::PowerUp => "powerup",
        Sound::PowerDown => "powerdown",
        Sound::Hit => "hit",
        Sound::Shoot => "shoot",
        Sound::Explosion => "explosion",
        Sound::Shield => "shieldSound",
    }
}

/// Clip playback volume (0.0 - 1.0)
const VOLUME: f32 = 0.8;

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    clips: Vec<(Sound, web_sys::HtmlAudioElement)>,
    volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    /// Look up every clip in the page (missing clips are skipped)
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        use wasm_bindgen::JsCast;

        let document = web_sys::window().and_then(|w| w.document());
        let mut clips = Vec::new();
        for sound in Sound::ALL {
            let clip = document
                .as_ref()
                .and_then(|d| d.get_element_by_id(element_id(sound)))
                .and_then(|el| el.dyn_into::<web_sys::HtmlAudioElement>().ok());
            match clip {
                Some(clip) => clips.push((sound, clip)),
                None => log::warn!("Missing <audio id=\"{}\"> - cue muted", element_id(sound)),
            }
        }
        Self {
            clips,
            volume: VOLUME,
            muted: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            volume: VOLUME,
            muted: false,
        }
    }

    /// Flip mute; returns the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        log::info!("Audio muted: {}", self.muted);
        self.muted
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Play a cue from the start
    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, sound: Sound) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some((_, clip)) = self.clips.iter().find(|(s, _)| *s == sound) else {
            return;
        };
        clip.set_volume(vol as f64);
        clip.set_current_time(0.0);
        // Autoplay may be refused until the first user gesture
        if clip.play().is_err() {
            log::debug!("Playback refused for {}", sound.name());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, sound: Sound) {
        if self.effective_volume() > 0.0 {
            log::debug!("Sound cue: {}", sound.name());
        }
    }

    /// Play every cue in order
    pub fn play_all(&self, sounds: impl IntoIterator<Item = Sound>) {
        for sound in sounds {
            self.play(sound);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_unique() {
        let mut ids: Vec<_> = Sound::ALL.iter().map(|&s| element_id(s)).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Sound::ALL.len());
    }

    #[test]
    fn test_toggle_mute() {
        let mut audio = AudioManager::new();
        assert_eq!(audio.effective_volume(), VOLUME);
        assert!(audio.toggle_mute());
        assert_eq!(audio.effective_volume(), 0.0);
        assert!(!audio.toggle_mute());
        assert_eq!(audio.effective_volume(), VOLUME);
    }
}
