//! Common test utilities for gmcollage integration tests

use std::collections::BTreeMap;
use std::path::PathBuf;

use assert_cmd::Command;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tempfile::TempDir;

/// Project document used by most tests
pub const PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<assets>
  <Configs name="configs">
    <Config>Configs\Default</Config>
  </Configs>
  <sounds name="sound">
    <sounds name="Enemies">
      <sound>sound\snd_growl</sound>
    </sounds>
  </sounds>
  <sprites name="sprites">
    <sprites name="Enemies">
      <sprite>sprites\spr_grunt</sprite>
      <sprites name="Boss">
        <sprite>sprites\spr_boss</sprite>
      </sprites>
    </sprites>
    <sprites name="Heroes">
      <sprite>sprites\spr_hero</sprite>
    </sprites>
  </sprites>
  <scripts name="scripts">
    <scripts name="Enemies">
      <script>scripts\enemies\scr_chase.gml</script>
    </scripts>
  </scripts>
  <rooms name="rooms">
    <rooms name="Level1">
      <room>rooms\start_room</room>
    </rooms>
  </rooms>
</assets>
"#;

/// Asset files referenced by [`PROJECT`]
pub const ASSETS: &[&str] = &[
    "sound/snd_growl.sound.gmx",
    "sprites/spr_grunt.sprite.gmx",
    "sprites/spr_boss.sprite.gmx",
    "sprites/spr_hero.sprite.gmx",
    "scripts/enemies/scr_chase.gml",
    "rooms/start_room.room.gmx",
];

/// A temporary directory holding a GameMaker project
#[allow(dead_code)]
pub struct TestProject {
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a project from [`PROJECT`] with every asset file in place
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        let project = Self { temp, path };
        project.write_file("game.project.gmx", PROJECT);
        for asset in ASSETS {
            project.write_file(asset, asset);
        }
        project
    }

    /// Write a file in the project directory
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project directory
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a module declaration and return its file name
    pub fn declare(&self, name: &str, content: &str) -> String {
        let file = format!("{name}.moduleconfig");
        self.write_file(&file, content);
        file
    }

    /// Every file below the project directory, relative and sorted
    pub fn files(&self) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(&self.path)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(&self.path)
                    .expect("walked path is below root")
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        files.sort();
        files
    }

    /// A gmcollage command running in the project directory
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gmcollage").expect("binary is built");
        cmd.current_dir(&self.path);
        // Always ignore any developer overrides during tests
        cmd.env_remove("GMCOLLAGE_OUTPUT_DIR");
        cmd.env_remove("GMCOLLAGE_LOG");
        cmd
    }
}

/// Element and text content grouped by element path, as a comparable structure.
///
/// Every element is listed under its parent's path, so duplicate siblings count twice.
/// Whitespace, sibling order and attribute order are ignored.
#[allow(dead_code)]
pub fn outline(xml: &str) -> BTreeMap<String, Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut result: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event().expect("test documents are well formed") {
            Event::Start(start) => {
                let label = element_label(&start);
                result
                    .entry(stack.join("/"))
                    .or_default()
                    .push(format!("<{label}>"));
                stack.push(label);
            }
            Event::Empty(start) => {
                result
                    .entry(stack.join("/"))
                    .or_default()
                    .push(format!("<{}>", element_label(&start)));
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(text) => {
                let value = text.unescape().expect("text is valid");
                let value = value.trim();
                if !value.is_empty() {
                    result
                        .entry(stack.join("/"))
                        .or_default()
                        .push(value.to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    for values in result.values_mut() {
        values.sort();
    }
    result
}

/// Tag followed by its attributes in sorted order
#[allow(dead_code)]
fn element_label(start: &BytesStart<'_>) -> String {
    let mut attributes: Vec<String> = start
        .attributes()
        .map(|attribute| {
            let attribute = attribute.expect("attribute is valid");
            let value = attribute.unescape_value().expect("attribute value is valid");
            format!(
                "{}={:?}",
                String::from_utf8_lossy(attribute.key.as_ref()),
                value
            )
        })
        .collect();
    attributes.sort();
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    std::iter::once(tag).chain(attributes).collect::<Vec<_>>().join(" ")
}
