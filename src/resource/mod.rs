//! Resource kinds known to a GameMaker project
//!
//! The set of kinds is closed: every folder tree in a project lives under one of these
//! roots, and each kind has a fixed storage directory, leaf tag and file suffix.
//!
//! Examples of leaf references as they appear in a project document:
//! - `sprites\spr_player` (stored as `sprites/spr_player.sprite.gmx`)
//! - `sound\snd_jump` (stored as `sound/snd_jump.sound.gmx`)
//! - `scripts\scr_init.gml` (stored as-is)

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A category of project asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Datafiles,
    Sounds,
    Sprites,
    Backgrounds,
    Paths,
    Scripts,
    Shaders,
    Fonts,
    Objects,
    Timelines,
    Rooms,
}

impl ResourceKind {
    /// All kinds in catalog order
    pub const ALL: [ResourceKind; 11] = [
        ResourceKind::Datafiles,
        ResourceKind::Sounds,
        ResourceKind::Sprites,
        ResourceKind::Backgrounds,
        ResourceKind::Paths,
        ResourceKind::Scripts,
        ResourceKind::Shaders,
        ResourceKind::Fonts,
        ResourceKind::Objects,
        ResourceKind::Timelines,
        ResourceKind::Rooms,
    ];

    /// Identifier used in declarations and as the folder tag in documents
    pub const fn id(self) -> &'static str {
        match self {
            ResourceKind::Datafiles => "datafiles",
            ResourceKind::Sounds => "sounds",
            ResourceKind::Sprites => "sprites",
            ResourceKind::Backgrounds => "backgrounds",
            ResourceKind::Paths => "paths",
            ResourceKind::Scripts => "scripts",
            ResourceKind::Shaders => "shaders",
            ResourceKind::Fonts => "fonts",
            ResourceKind::Objects => "objects",
            ResourceKind::Timelines => "timelines",
            ResourceKind::Rooms => "rooms",
        }
    }

    /// Directory (relative to the project or module root) holding this kind's files
    pub const fn storage_subpath(self) -> &'static str {
        match self {
            ResourceKind::Sounds => "sound",
            ResourceKind::Backgrounds => "background",
            other => other.id(),
        }
    }

    /// Tag of leaf resource elements of this kind
    pub const fn tag_name(self) -> &'static str {
        match self {
            ResourceKind::Datafiles => "datafile",
            ResourceKind::Sounds => "sound",
            ResourceKind::Sprites => "sprite",
            ResourceKind::Backgrounds => "background",
            ResourceKind::Paths => "path",
            ResourceKind::Scripts => "script",
            ResourceKind::Shaders => "shader",
            ResourceKind::Fonts => "font",
            ResourceKind::Objects => "object",
            ResourceKind::Timelines => "timeline",
            ResourceKind::Rooms => "room",
        }
    }

    /// Suffix appended to a leaf reference to get its file name (may be empty)
    pub const fn file_extension(self) -> &'static str {
        match self {
            ResourceKind::Datafiles | ResourceKind::Scripts | ResourceKind::Shaders => "",
            ResourceKind::Sounds => ".sound.gmx",
            ResourceKind::Sprites => ".sprite.gmx",
            ResourceKind::Backgrounds => ".background.gmx",
            ResourceKind::Paths => ".path.gmx",
            ResourceKind::Fonts => ".font.gmx",
            ResourceKind::Objects => ".object.gmx",
            ResourceKind::Timelines => ".timeline.gmx",
            ResourceKind::Rooms => ".room.gmx",
        }
    }

    /// Whether leaves of this kind carry a storage path reference as their text.
    ///
    /// Datafile leaves are structured records and never take part in reference checks.
    pub const fn has_path_references(self) -> bool {
        !matches!(self, ResourceKind::Datafiles)
    }

    /// Look up a kind by its identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.id() == id)
    }

    /// Relative file path of a leaf reference, with the kind's suffix applied
    pub fn asset_file(self, reference: &str) -> PathBuf {
        let mut relative = PathBuf::new();
        for segment in reference.split(['\\', '/']).filter(|s| !s.is_empty()) {
            relative.push(segment);
        }
        let Some(file_name) = relative.file_name().map(|n| n.to_string_lossy().into_owned())
        else {
            return relative;
        };
        relative.set_file_name(format!("{}{}", file_name, self.file_extension()));
        relative
    }

    /// Storage directory of this kind below `root`
    pub fn storage_dir(self, root: &Path) -> PathBuf {
        root.join(self.storage_subpath())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an identifier outside the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Comma separated list of every valid identifier, for help texts
pub fn known_ids() -> String {
    ResourceKind::ALL
        .iter()
        .map(|kind| kind.id())
        .collect::<Vec<_>>()
        .join(", ")
}
