//! ui::icons::generate
//!
//! Offline generator for `typemap.rs`.
//!
//! # Design
//!
//! Two local JSON fixtures drive the generator: the material-icon-theme
//! mapping file (file/folder names and extensions to icon names, with light
//! overrides) and the iconify icon set carrying the SVG bodies. The output
//! is the Rust source of the type map: sorted key/value tables suitable for
//! binary search. Only icons actually referenced by a mapping (plus the
//! defaults) are embedded.
//!
//! No network access; fetching fresh fixtures is a separate concern.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors from typemap generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A fixture could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A fixture could not be parsed.
    #[error("failed to parse fixture {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A mapping references an icon the icon set does not define.
    #[error("icon '{0}' referenced by a mapping is missing from the icon set")]
    MissingIcon(String),
}

#[derive(Debug, Deserialize)]
struct IconifyIcon {
    body: String,
    width: Option<u32>,
    height: Option<u32>,
    #[serde(default)]
    left: i32,
    #[serde(default)]
    top: i32,
}

#[derive(Debug, Deserialize)]
struct IconifySet {
    icons: HashMap<String, IconifyIcon>,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LightOverrides {
    #[serde(default)]
    file_extensions: HashMap<String, String>,
    #[serde(default)]
    file_names: HashMap<String, String>,
    #[serde(default)]
    folder_names: HashMap<String, String>,
    #[serde(default)]
    folder_names_expanded: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MaterialIcons {
    #[serde(default)]
    file_extensions: HashMap<String, String>,
    #[serde(default)]
    file_names: HashMap<String, String>,
    #[serde(default)]
    folder_names: HashMap<String, String>,
    #[serde(default)]
    folder_names_expanded: HashMap<String, String>,
    #[serde(default)]
    light: Option<LightOverrides>,
    file: Option<String>,
    folder: Option<String>,
    folder_expanded: Option<String>,
}

/// Parsed fixture pair.
#[derive(Debug)]
pub struct IconFixtures {
    material: MaterialIcons,
    iconify: IconifySet,
}

/// Icon names use underscores in the material fixture and hyphens in the
/// iconify set.
fn to_iconify_name(name: &str) -> String {
    name.replace('_', "-")
}

fn build_svg(icon: &IconifyIcon, default_width: u32, default_height: u32) -> String {
    let width = icon.width.unwrap_or(default_width);
    let height = icon.height.unwrap_or(default_height);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">{}</svg>"#,
        icon.left, icon.top, width, height, icon.body
    )
}

impl IconFixtures {
    /// Load and parse both fixtures from disk.
    pub fn from_files(
        material_path: &Path,
        iconify_path: &Path,
    ) -> Result<Self, GenerateError> {
        let material = read_json(material_path)?;
        let iconify = read_json(iconify_path)?;
        Ok(Self { material, iconify })
    }

    /// Generate the `typemap.rs` source text.
    pub fn generate_typemap(&self) -> Result<String, GenerateError> {
        let default_file = self.material.file.as_deref().unwrap_or("file");
        let default_folder = self.material.folder.as_deref().unwrap_or("folder");
        let default_folder_open = self
            .material
            .folder_expanded
            .as_deref()
            .unwrap_or("folder-open");

        let light = self.material.light.as_ref();
        let empty = LightOverrides::default();
        let light = light.unwrap_or(&empty);

        // Sorted mapping tables. Keys are lowercased; icon names converted
        // to the iconify convention.
        let file_names = normalize(&self.material.file_names);
        let file_extensions = normalize(&self.material.file_extensions);
        let folder_names = normalize(&self.material.folder_names);
        let folder_names_open = normalize(&self.material.folder_names_expanded);
        let light_file_names = normalize(&light.file_names);
        let light_file_extensions = normalize(&light.file_extensions);
        let light_folder_names = normalize(&light.folder_names);
        let light_folder_names_open = normalize(&light.folder_names_expanded);

        // Collect the referenced icon bodies, split file/folder, with
        // open-variant folders in their own table.
        let mut file_icons: BTreeSet<String> = BTreeSet::new();
        file_icons.insert(to_iconify_name(default_file));
        for table in [
            &file_names,
            &file_extensions,
            &light_file_names,
            &light_file_extensions,
        ] {
            file_icons.extend(table.values().cloned());
        }

        let mut folder_icons: BTreeSet<String> = BTreeSet::new();
        folder_icons.insert(to_iconify_name(default_folder));
        for table in [&folder_names, &light_folder_names] {
            folder_icons.extend(table.values().cloned());
        }

        let mut folder_icons_open: BTreeSet<String> = BTreeSet::new();
        folder_icons_open.insert(to_iconify_name(default_folder_open));
        for table in [&folder_names_open, &light_folder_names_open] {
            folder_icons_open.extend(table.values().cloned());
        }

        let mut out = String::new();
        out.push_str(
            "// Generated by `generate-icons` from the material-icon-theme fixtures.\n\
             // Do not edit by hand; re-run the generator to refresh.\n\
             //\n\
             // Tables are sorted by key for binary search.\n\n",
        );

        writeln!(
            out,
            "pub(super) const DEFAULT_FILE_ICON: &str = \"{}\";",
            to_iconify_name(default_file)
        )
        .unwrap();
        writeln!(
            out,
            "pub(super) const DEFAULT_FOLDER_ICON: &str = \"{}\";",
            to_iconify_name(default_folder)
        )
        .unwrap();
        writeln!(
            out,
            "pub(super) const DEFAULT_FOLDER_ICON_OPEN: &str = \"{}\";\n",
            to_iconify_name(default_folder_open)
        )
        .unwrap();

        self.emit_svg_table(&mut out, "FILE_ICONS", &file_icons)?;
        self.emit_map_table(&mut out, "FILE_NAMES_TO_ICONS", &file_names);
        self.emit_map_table(&mut out, "FILE_EXTENSIONS_TO_ICONS", &file_extensions);
        self.emit_map_table(&mut out, "LIGHT_FILE_NAMES_TO_ICONS", &light_file_names);
        self.emit_map_table(
            &mut out,
            "LIGHT_FILE_EXTENSIONS_TO_ICONS",
            &light_file_extensions,
        );
        self.emit_svg_table(&mut out, "FOLDER_ICONS", &folder_icons)?;
        self.emit_svg_table(&mut out, "FOLDER_ICONS_OPEN", &folder_icons_open)?;
        self.emit_map_table(&mut out, "FOLDER_NAMES_TO_ICONS", &folder_names);
        self.emit_map_table(&mut out, "FOLDER_NAMES_TO_ICONS_OPEN", &folder_names_open);
        self.emit_map_table(&mut out, "LIGHT_FOLDER_NAMES_TO_ICONS", &light_folder_names);
        self.emit_map_table(
            &mut out,
            "LIGHT_FOLDER_NAMES_TO_ICONS_OPEN",
            &light_folder_names_open,
        );

        Ok(out)
    }

    fn emit_svg_table(
        &self,
        out: &mut String,
        name: &str,
        icons: &BTreeSet<String>,
    ) -> Result<(), GenerateError> {
        let default_width = self.iconify.width.unwrap_or(16);
        let default_height = self.iconify.height.unwrap_or(16);

        writeln!(out, "pub(super) static {}: &[(&str, &str)] = &[", name).unwrap();
        for icon_name in icons {
            let icon = self
                .iconify
                .icons
                .get(icon_name)
                .ok_or_else(|| GenerateError::MissingIcon(icon_name.clone()))?;
            let svg = build_svg(icon, default_width, default_height);
            // SVG bodies carry `fill="#..."` colors; the `"#` sequence would
            // terminate a single-hash raw string.
            writeln!(out, "    (\"{}\", r##\"{}\"##),", icon_name, svg).unwrap();
        }
        writeln!(out, "];\n").unwrap();
        Ok(())
    }

    fn emit_map_table(&self, out: &mut String, name: &str, map: &BTreeMap<String, String>) {
        writeln!(out, "pub(super) static {}: &[(&str, &str)] = &[", name).unwrap();
        for (key, value) in map {
            writeln!(out, "    (\"{}\", \"{}\"),", key, value).unwrap();
        }
        writeln!(out, "];\n").unwrap();
    }
}

fn normalize(map: &HashMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.to_lowercase(), to_iconify_name(value)))
        .collect()
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, GenerateError> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| GenerateError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Generate `typemap.rs` from the fixtures and write it to `out_path`.
pub fn write_typemap(
    material_path: &Path,
    iconify_path: &Path,
    out_path: &Path,
) -> Result<(), GenerateError> {
    let fixtures = IconFixtures::from_files(material_path, iconify_path)?;
    let source = fixtures.generate_typemap()?;
    std::fs::write(out_path, source).map_err(|source| GenerateError::Io {
        path: out_path.display().to_string(),
        source,
    })
}
