//! ui::icons
//!
//! File and folder icon lookup.
//!
//! # Design
//!
//! Icons come from a generated type map (`typemap.rs`, produced by the
//! `generate-icons` binary from the material-icon-theme fixtures). Lookup
//! walks progressively shorter dotted suffixes of the file name, checking
//! exact file names before extensions, so `vite.config.ts` hits the vite
//! icon rather than the plain TypeScript one. Light theme has its own
//! override tables; when an override is missing the dark icon is used.
//!
//! The result is a `data:image/svg+xml;base64,...` URI ready for an `img`
//! source.

mod generate;
mod typemap;

use base64::prelude::{Engine, BASE64_STANDARD};

pub use generate::{write_typemap, GenerateError, IconFixtures};

use super::theme::EffectiveTheme;

/// Binary search in a generated sorted table.
fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .binary_search_by_key(&key, |(k, _)| *k)
        .ok()
        .map(|index| table[index].1)
}

fn data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", BASE64_STANDARD.encode(svg))
}

/// Resolve the icon for a file name as a base64 SVG data URI.
///
/// # Example
///
/// ```
/// use gitdesk_forge::ui::icons::file_icon;
/// use gitdesk_forge::ui::theme::EffectiveTheme;
///
/// let uri = file_icon("main.rs", EffectiveTheme::Dark);
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub fn file_icon(file_name: &str, theme: EffectiveTheme) -> String {
    let file_name = file_name.to_lowercase();
    let is_light = theme == EffectiveTheme::Light;

    let mut icon_name: Option<&str> = None;
    let mut light_icon_name: Option<&str> = None;

    // Try the full name, then progressively shorter dotted suffixes:
    // "vite.config.ts" -> "config.ts" -> "ts".
    let mut parts: Vec<&str> = file_name.split('.').collect();
    while !parts.is_empty() {
        let candidate = parts.join(".");

        if let Some(name) = lookup(typemap::FILE_NAMES_TO_ICONS, &candidate) {
            icon_name = Some(name);
            if is_light {
                light_icon_name = lookup(typemap::LIGHT_FILE_NAMES_TO_ICONS, &candidate);
            }
            break;
        }

        if let Some(name) = lookup(typemap::FILE_EXTENSIONS_TO_ICONS, &candidate) {
            icon_name = Some(name);
            if is_light {
                light_icon_name = lookup(typemap::LIGHT_FILE_EXTENSIONS_TO_ICONS, &candidate);
            }
            break;
        }

        parts.remove(0);
    }

    let resolved = if is_light {
        light_icon_name.or(icon_name)
    } else {
        icon_name
    }
    .unwrap_or(typemap::DEFAULT_FILE_ICON);

    let svg = lookup(typemap::FILE_ICONS, resolved)
        .or_else(|| icon_name.and_then(|name| lookup(typemap::FILE_ICONS, name)))
        .unwrap_or_else(|| {
            lookup(typemap::FILE_ICONS, typemap::DEFAULT_FILE_ICON)
                .expect("default file icon present in generated table")
        });

    data_uri(svg)
}

/// Resolve the icon for a folder name as a base64 SVG data URI.
///
/// Open folders resolve entirely within the open tables; an unknown open
/// folder gets the default open icon, never a closed one.
pub fn folder_icon(folder_name: &str, open: bool, theme: EffectiveTheme) -> String {
    let folder_name = folder_name.to_lowercase();
    let is_light = theme == EffectiveTheme::Light;

    // Open and closed resolve against their own tables; an open lookup never
    // degrades to a closed icon, it falls back to the default open icon.
    if open {
        let icon_name = lookup(typemap::FOLDER_NAMES_TO_ICONS_OPEN, &folder_name);
        let light_icon_name = if is_light {
            lookup(typemap::LIGHT_FOLDER_NAMES_TO_ICONS_OPEN, &folder_name)
        } else {
            None
        };

        let svg = light_icon_name
            .or(icon_name)
            .and_then(|name| lookup(typemap::FOLDER_ICONS_OPEN, name))
            .unwrap_or_else(|| {
                lookup(typemap::FOLDER_ICONS_OPEN, typemap::DEFAULT_FOLDER_ICON_OPEN)
                    .expect("default open folder icon present in generated table")
            });

        return data_uri(svg);
    }

    let icon_name = lookup(typemap::FOLDER_NAMES_TO_ICONS, &folder_name);
    let light_icon_name = if is_light {
        lookup(typemap::LIGHT_FOLDER_NAMES_TO_ICONS, &folder_name)
    } else {
        None
    };

    let svg = light_icon_name
        .or(icon_name)
        .and_then(|name| lookup(typemap::FOLDER_ICONS, name))
        .unwrap_or_else(|| {
            lookup(typemap::FOLDER_ICONS, typemap::DEFAULT_FOLDER_ICON)
                .expect("default folder icon present in generated table")
        });

    data_uri(svg)
}
