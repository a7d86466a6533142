//! Section state and camera poses
//!
//! A section is the single navigation state shared by the 2D overlay and
//! the 3D camera. Each section owns exactly one immutable camera pose.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use vibejam_core::Vec3;

/// Named navigation sections of the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Welcome,
    About,
    Judges,
    Sponsors,
    Submission,
}

/// A named camera viewpoint: where the camera sits and what it looks at
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl Section {
    /// Every section, in navigation order
    pub const ALL: [Section; 5] = [
        Section::Welcome,
        Section::About,
        Section::Judges,
        Section::Sponsors,
        Section::Submission,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Welcome => "welcome",
            Section::About => "about",
            Section::Judges => "judges",
            Section::Sponsors => "sponsors",
            Section::Submission => "submission",
        }
    }

    /// The fixed camera pose for this section
    pub fn pose(&self) -> CameraPose {
        match self {
            Section::Welcome => CameraPose {
                position: Vec3::new(0.0, 5.0, 10.0),
                look_at: Vec3::new(0.0, 0.0, 0.0),
            },
            Section::About => CameraPose {
                position: Vec3::new(-8.0, 3.0, 5.0),
                look_at: Vec3::new(-8.0, 0.0, 0.0),
            },
            Section::Judges => CameraPose {
                position: Vec3::new(10.0, 4.0, 5.0),
                look_at: Vec3::new(10.0, 0.0, 0.0),
            },
            Section::Sponsors => CameraPose {
                position: Vec3::new(0.0, 3.0, -12.0),
                look_at: Vec3::new(0.0, 0.0, -10.0),
            },
            Section::Submission => CameraPose {
                position: Vec3::new(15.0, 5.0, 8.0),
                look_at: Vec3::new(15.0, 0.0, 0.0),
            },
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a section name does not match any section
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section name: {0}")]
pub struct ParseSectionError(pub String);

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Section::Welcome),
            "about" => Ok(Section::About),
            "judges" => Ok(Section::Judges),
            "sponsors" => Ok(Section::Sponsors),
            "submission" => Ok(Section::Submission),
            other => Err(ParseSectionError(other.to_string())),
        }
    }
}
