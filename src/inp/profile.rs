//! JSON persistence of analyzed sound characters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::error::Result;
use crate::files;
use crate::types::timbre::{Adsr, SoundCharacter};

/// A reusable description of an analyzed recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Fundamental of the analyzed recording, in Hz.
    pub source_fundamental_hz: f32,
    /// Sample rate of the analyzed recording.
    pub sample_rate: u32,
    pub character: SoundCharacter,
}

impl Profile {
    pub fn from_analysis(analysis: Analysis, sample_rate: u32, adsr: Adsr) -> Profile {
        Profile {
            source_fundamental_hz: analysis.fundamental.frequency,
            sample_rate,
            character: analysis.into_character(adsr),
        }
    }
}

pub fn load_profile_from_file<P: AsRef<Path>>(filepath: P) -> Result<Profile> {
    let text = fs::read_to_string(filepath.as_ref())?;
    let profile: Profile = serde_json::from_str(&text)?;
    profile.character.adsr.validate()?;
    Ok(profile)
}

pub fn save_profile_to_file<P: AsRef<Path>>(filepath: P, profile: &Profile) -> Result<()> {
    let filepath = filepath.as_ref();
    files::with_dir(filepath)?;
    let text = serde_json::to_string_pretty(profile)?;
    fs::write(filepath, text)?;
    Ok(())
}
