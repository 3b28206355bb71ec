// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale library files.
//!
//! A library maps names to scale definitions and is stored as YAML or TOML:
//!
//! ```yaml
//! scales:
//!   e_flat_major:
//!     type: key_signature
//!     key_type: major
//!     root: Eb
//!   so_what:
//!     type: mode
//!     mode: dorian
//!     root: D
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TheoryError;
use crate::music::{
    Chromatic, KeySignature, KeyType, Mode, ModeType, Octatonic, PitchClass, Scale, WholeTone,
};

/// A root given either by name ("F#", "Bb") or as a pitch class number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Root {
    Number(i32),
    Name(String),
}

impl Root {
    pub fn pitch_class(&self) -> std::result::Result<PitchClass, TheoryError> {
        match self {
            Root::Number(value) => Ok(PitchClass::new(*value)),
            Root::Name(name) => name.parse(),
        }
    }
}

impl Default for Root {
    fn default() -> Self {
        Root::Number(0)
    }
}

impl From<PitchClass> for Root {
    fn from(pc: PitchClass) -> Self {
        Root::Name(pc.to_string())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Number(value) => write!(f, "{}", value),
            Root::Name(name) => write!(f, "{}", name),
        }
    }
}

/// Description of any scale the library can build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScaleDefinition {
    /// A key, either by root or by accidental count. The root wins when
    /// both are given; `sharps` picks the spelling of an ambiguous root.
    KeySignature {
        #[serde(default = "default_key_type")]
        key_type: KeyType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        root: Option<Root>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        accidentals: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sharps: Option<bool>,
    },
    Mode {
        mode: ModeType,
        root: Root,
    },
    Chromatic {
        #[serde(default)]
        root: Root,
    },
    Octatonic {
        root: Root,
        #[serde(default = "default_half_step_first")]
        half_step_first: bool,
    },
    WholeTone {
        #[serde(default)]
        root: Root,
    },
}

fn default_key_type() -> KeyType {
    KeyType::Major
}
fn default_half_step_first() -> bool {
    true
}

impl ScaleDefinition {
    /// Construct the scale this definition describes
    pub fn build(&self) -> std::result::Result<Box<dyn Scale>, TheoryError> {
        let scale: Box<dyn Scale> = match self {
            ScaleDefinition::KeySignature {
                key_type,
                root,
                accidentals,
                sharps,
            } => match (root, sharps) {
                (Some(root), Some(sharps)) => Box::new(KeySignature::with_root_spelled(
                    *key_type,
                    *sharps,
                    root.pitch_class()?,
                )?),
                (Some(root), None) => {
                    Box::new(KeySignature::with_root(*key_type, root.pitch_class()?))
                }
                (None, sharps) => Box::new(KeySignature::new(
                    *key_type,
                    accidentals.unwrap_or(0),
                    sharps.unwrap_or(false),
                )?),
            },
            ScaleDefinition::Mode { mode, root } => Box::new(Mode::new(*mode, root.pitch_class()?)),
            ScaleDefinition::Chromatic { root } => Box::new(Chromatic::new(root.pitch_class()?)),
            ScaleDefinition::Octatonic {
                root,
                half_step_first,
            } => Box::new(Octatonic::new(root.pitch_class()?, *half_step_first)),
            ScaleDefinition::WholeTone { root } => Box::new(WholeTone::new(root.pitch_class()?)),
        };
        Ok(scale)
    }
}

impl From<KeySignature> for ScaleDefinition {
    fn from(key: KeySignature) -> Self {
        ScaleDefinition::KeySignature {
            key_type: key.key_type(),
            root: Some(Root::Name(key.root_name().to_string())),
            accidentals: None,
            sharps: Some(key.is_sharp_key()),
        }
    }
}

impl From<Mode> for ScaleDefinition {
    fn from(mode: Mode) -> Self {
        ScaleDefinition::Mode {
            mode: mode.mode_type(),
            root: mode.pitch_class_of_root().into(),
        }
    }
}

/// Named scale definitions loaded from a YAML or TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleLibrary {
    #[serde(default)]
    pub scales: BTreeMap<String, ScaleDefinition>,
}

/// File formats a library can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Toml,
}

fn format_of(path: &Path) -> Result<Format> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("toml") => Ok(Format::Toml),
        _ => bail!("Unsupported scale library format: {:?}", path),
    }
}

impl ScaleLibrary {
    /// Load a library, choosing the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scale library: {:?}", path))?;
        let library = match format {
            Format::Yaml => Self::from_yaml(&contents),
            Format::Toml => Self::from_toml(&contents),
        }
        .with_context(|| format!("Failed to load scale library: {:?}", path))?;
        info!("Loaded {} scales from {:?}", library.scales.len(), path);
        Ok(library)
    }

    /// Parse a library from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML scale library")
    }

    /// Parse a library from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML scale library")
    }

    /// Serialize to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize scale library to YAML")
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).context("Failed to serialize scale library to TOML")
    }

    /// Save the library, choosing the format from the file extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = match format_of(path)? {
            Format::Yaml => self.to_yaml()?,
            Format::Toml => self.to_toml()?,
        };
        fs::write(path, text).with_context(|| format!("Failed to write scale library: {:?}", path))?;
        debug!("Saved {} scales to {:?}", self.scales.len(), path);
        Ok(())
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: ScaleDefinition) {
        self.scales.insert(name.into(), definition);
    }

    pub fn get(&self, name: &str) -> Option<&ScaleDefinition> {
        self.scales.get(name)
    }

    /// Scale names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.scales.keys().map(String::as_str).collect()
    }

    /// Build a named scale
    pub fn build(&self, name: &str) -> Result<Box<dyn Scale>> {
        let definition = self
            .get(name)
            .with_context(|| format!("Unknown scale: {}", name))?;
        debug!(name, ?definition, "building scale");
        definition
            .build()
            .with_context(|| format!("Invalid definition for scale: {}", name))
    }
}

/// Load a library and check that every definition builds
pub fn validate_library<P: AsRef<Path>>(path: P) -> Result<ScaleLibrary> {
    let library = ScaleLibrary::load(path)?;
    for name in library.names() {
        library.build(name)?;
    }
    Ok(library)
}
