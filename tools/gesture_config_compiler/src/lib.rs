use std::{
    error::Error,
    fmt::{self, Write as _},
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use spellcast::Axis;

pub const DEFAULT_ESPNOW_CHANNEL: u8 = 1;
pub const ESPNOW_CHANNEL_MAX: u8 = 14;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GestureConfigFile {
    pub axes: AxesSection,
    pub timing: TimingSection,
    #[serde(default)]
    pub radio: RadioSection,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AxesSection {
    pub lateral: String,
    pub vertical: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimingSection {
    pub sample_interval_ms: u32,
    pub cooldown_ms: u32,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RadioSection {
    #[serde(default = "default_channel")]
    pub channel: u8,
}

impl Default for RadioSection {
    fn default() -> Self {
        Self {
            channel: DEFAULT_ESPNOW_CHANNEL,
        }
    }
}

fn default_channel() -> u8 {
    DEFAULT_ESPNOW_CHANNEL
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GestureConfig {
    pub lateral: Axis,
    pub vertical: Axis,
    pub sample_interval_ms: u32,
    pub cooldown_ms: u32,
    pub espnow_channel: u8,
}

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
    UnknownAxis {
        field: &'static str,
        value: String,
    },
    SameAxis(Axis),
    ZeroSampleInterval,
    ChannelOutOfRange(u8),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { path, message } => {
                write!(f, "invalid TOML in {}: {message}", path.display())
            }
            Self::UnknownAxis { field, value } => {
                let known: Vec<&str> = Axis::ALL.iter().map(|axis| axis.name()).collect();
                write!(
                    f,
                    "axes.{field} = {value:?} is not one of {}",
                    known.join(", ")
                )
            }
            Self::SameAxis(axis) => {
                write!(f, "axes.lateral and axes.vertical both map to {axis}")
            }
            Self::ZeroSampleInterval => f.write_str("timing.sample_interval_ms must be at least 1"),
            Self::ChannelOutOfRange(channel) => write!(
                f,
                "radio.channel = {channel} is outside 1..={ESPNOW_CHANNEL_MAX}"
            ),
        }
    }
}

impl Error for ConfigCompilerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub fn parse_config_file(path: &Path) -> Result<GestureConfigFile, ConfigCompilerError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigCompilerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|err| ConfigCompilerError::Parse {
        path: path.to_path_buf(),
        message: err.message().to_string(),
    })
}

pub fn validate_config(file: &GestureConfigFile) -> Result<GestureConfig, ConfigCompilerError> {
    let lateral = parse_axis("lateral", &file.axes.lateral)?;
    let vertical = parse_axis("vertical", &file.axes.vertical)?;
    if lateral == vertical {
        return Err(ConfigCompilerError::SameAxis(lateral));
    }
    if file.timing.sample_interval_ms == 0 {
        return Err(ConfigCompilerError::ZeroSampleInterval);
    }
    let channel = file.radio.channel;
    if !(1..=ESPNOW_CHANNEL_MAX).contains(&channel) {
        return Err(ConfigCompilerError::ChannelOutOfRange(channel));
    }

    Ok(GestureConfig {
        lateral,
        vertical,
        sample_interval_ms: file.timing.sample_interval_ms,
        cooldown_ms: file.timing.cooldown_ms,
        espnow_channel: channel,
    })
}

fn parse_axis(field: &'static str, value: &str) -> Result<Axis, ConfigCompilerError> {
    Axis::from_name(value).ok_or_else(|| ConfigCompilerError::UnknownAxis {
        field,
        value: value.to_string(),
    })
}

pub fn render_generated_config(config: &GestureConfig) -> String {
    let mut out = String::new();
    out.push_str("// @generated by gesture_config_compiler. Do not edit.\n\n");
    let _ = writeln!(
        out,
        "pub const LATERAL_AXIS: spellcast::Axis = spellcast::Axis::{};",
        config.lateral.variant_name()
    );
    let _ = writeln!(
        out,
        "pub const VERTICAL_AXIS: spellcast::Axis = spellcast::Axis::{};",
        config.vertical.variant_name()
    );
    let _ = writeln!(
        out,
        "pub const SAMPLE_INTERVAL_MS: u32 = {};",
        config.sample_interval_ms
    );
    let _ = writeln!(out, "pub const COOLDOWN_MS: u32 = {};", config.cooldown_ms);
    let _ = writeln!(out, "pub const ESPNOW_CHANNEL: u8 = {};", config.espnow_channel);
    out
}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let file = parse_config_file(path)?;
    let config = validate_config(&file)?;
    Ok(render_generated_config(&config))
}
