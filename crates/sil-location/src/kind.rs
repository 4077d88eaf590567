//! Location kinds and flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an instruction exists.
///
/// Discriminants follow the numbering used by textual SIL dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LocationKind {
    #[default]
    None = 0,
    Regular = 1,
    Return = 2,
    ImplicitReturn = 3,
    Inlined = 4,
    MandatoryInlined = 5,
    Cleanup = 6,
    ArtificialUnreachable = 7,
    SilFile = 8,
}

impl LocationKind {
    pub const ALL: [LocationKind; 9] = [
        LocationKind::None,
        LocationKind::Regular,
        LocationKind::Return,
        LocationKind::ImplicitReturn,
        LocationKind::Inlined,
        LocationKind::MandatoryInlined,
        LocationKind::Cleanup,
        LocationKind::ArtificialUnreachable,
        LocationKind::SilFile,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::None => "none",
            LocationKind::Regular => "regular",
            LocationKind::Return => "return",
            LocationKind::ImplicitReturn => "implicit-return",
            LocationKind::Inlined => "inlined",
            LocationKind::MandatoryInlined => "mandatory-inlined",
            LocationKind::Cleanup => "cleanup",
            LocationKind::ArtificialUnreachable => "artificial-unreachable",
            LocationKind::SilFile => "sil-file",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Attributes orthogonal to [`LocationKind`]. Bits are only ever added.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct LocationFlags: u8 {
        /// Part of a compiler-synthesized body (thunks, default destructors).
        /// Such locations are kept out of the debug line table.
        const AUTO_GENERATED = 1 << 0;
        /// Resolve to the start of the node instead of its representative
        /// position.
        const POINTS_TO_START = 1 << 1;
        /// Resolve to the end of the node.
        const POINTS_TO_END = 1 << 2;
        /// Belongs to top-level (module) code.
        const IN_TOP_LEVEL = 1 << 3;
        /// Part of the function prologue that sets up the stack frame.
        const IN_PROLOGUE = 1 << 4;
    }
}

impl LocationFlags {
    /// Display names, in declaration order
    pub(crate) const NAMES: [(LocationFlags, &'static str); 5] = [
        (LocationFlags::AUTO_GENERATED, "auto-generated"),
        (LocationFlags::POINTS_TO_START, "points-to-start"),
        (LocationFlags::POINTS_TO_END, "points-to-end"),
        (LocationFlags::IN_TOP_LEVEL, "top-level"),
        (LocationFlags::IN_PROLOGUE, "prologue"),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_discriminants() {
        for (idx, kind) in LocationKind::ALL.iter().enumerate() {
            assert_eq!(*kind as u8 as usize, idx);
        }
        assert_eq!(LocationKind::default(), LocationKind::None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(LocationKind::ImplicitReturn.to_string(), "implicit-return");
        assert_eq!(LocationKind::SilFile.to_string(), "sil-file");
    }

    #[test]
    fn test_flag_names_cover_all_flags() {
        let covered = LocationFlags::NAMES
            .iter()
            .fold(LocationFlags::empty(), |acc, (flag, _)| acc | *flag);
        assert_eq!(covered, LocationFlags::all());
    }

    #[test]
    fn test_serialization() {
        let flags = LocationFlags::AUTO_GENERATED | LocationFlags::IN_TOP_LEVEL;
        let json = serde_json::to_string(&flags).unwrap();
        let deserialized: LocationFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, deserialized);

        let json = serde_json::to_string(&LocationKind::Cleanup).unwrap();
        assert_eq!(json, "\"Cleanup\"");
    }
}
