// Generated by `generate-icons` from the material-icon-theme fixtures.
// Do not edit by hand; re-run the generator to refresh.
//
// Tables are sorted by key for binary search.

pub(super) const DEFAULT_FILE_ICON: &str = "file";
pub(super) const DEFAULT_FOLDER_ICON: &str = "folder";
pub(super) const DEFAULT_FOLDER_ICON_OPEN: &str = "folder-open";

pub(super) static FILE_ICONS: &[(&str, &str)] = &[
    (
        "css",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#42a5f5" d="M3 2h10l-1 11-4 1-4-1z"/></svg>"##,
    ),
    (
        "docker",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#0db7ed" d="M2 9h12v2a4 4 0 0 1-4 4H6a4 4 0 0 1-4-4zM4 5h2v2H4zm3 0h2v2H7zm3-3h2v5h-2z"/></svg>"##,
    ),
    (
        "file",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#90a4ae" d="M4 1h6l3 3v11H4z"/></svg>"##,
    ),
    (
        "git",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#e64a19" d="m8 1 7 7-7 7-7-7zm0 3v8m0-4 3-3"/></svg>"##,
    ),
    (
        "javascript",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ffca28" d="M2 2h12v12H2zm6 3v6a1.5 1.5 0 0 1-3 0"/></svg>"##,
    ),
    (
        "json",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#fbc02d" d="M5 2C3 2 4 7 2 8c2 1 1 6 3 6M11 2c2 0 1 5 3 6-2 1-1 6-3 6"/></svg>"##,
    ),
    (
        "markdown",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#42a5f5" d="M2 4h12v8H2zm2 6V6l2 2 2-2v4m3 0V6m0 4 2-2m-2 2-2-2"/></svg>"##,
    ),
    (
        "rust",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#dea584" d="M8 1a7 7 0 1 0 0 14A7 7 0 0 0 8 1zM5 5h4a2 2 0 0 1 0 4l2 3H9L7 9H6v3H5z"/></svg>"##,
    ),
    (
        "svelte",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ff3e00" d="M12 2a4 4 0 0 0-5 0L4 4a4 4 0 0 0 0 6 4 4 0 0 0 5 4l3-2a4 4 0 0 0 0-6z"/></svg>"##,
    ),
    (
        "toml",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#9c27b0" d="M2 2h3v12H2zm9 0h3v12h-3zM6 4h4M8 4v8"/></svg>"##,
    ),
    (
        "typescript",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#0288d1" d="M2 2h12v12H2zm3 4h4M7 6v6m4-6h3m-3 6a1.5 1.5 0 0 0 3 0"/></svg>"##,
    ),
    (
        "typescript-light",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#0d47a1" d="M2 2h12v12H2zm3 4h4M7 6v6m4-6h3m-3 6a1.5 1.5 0 0 0 3 0"/></svg>"##,
    ),
    (
        "vite",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ffab00" d="M8 1 2 4l6 11 6-11zm0 3v5"/></svg>"##,
    ),
    (
        "yaml",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ef5350" d="M2 3l4 5v5m0-5 4-5m1 10V3l3 10"/></svg>"##,
    ),
];

pub(super) static FILE_NAMES_TO_ICONS: &[(&str, &str)] = &[
    (".gitignore", "git"),
    ("cargo.lock", "rust"),
    ("cargo.toml", "rust"),
    ("dockerfile", "docker"),
    ("package.json", "javascript"),
    ("readme.md", "markdown"),
    ("vite.config.ts", "vite"),
];

pub(super) static FILE_EXTENSIONS_TO_ICONS: &[(&str, &str)] = &[
    ("css", "css"),
    ("js", "javascript"),
    ("json", "json"),
    ("md", "markdown"),
    ("rs", "rust"),
    ("svelte", "svelte"),
    ("toml", "toml"),
    ("ts", "typescript"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
];

pub(super) static LIGHT_FILE_NAMES_TO_ICONS: &[(&str, &str)] = &[];

pub(super) static LIGHT_FILE_EXTENSIONS_TO_ICONS: &[(&str, &str)] =
    &[("ts", "typescript-light")];

pub(super) static FOLDER_ICONS: &[(&str, &str)] = &[
    (
        "folder",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#90a4ae" d="M1 3h5l1 2h8v8H1z"/></svg>"##,
    ),
    (
        "folder-git",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#e64a19" d="M1 3h5l1 2h8v8H1zm7 3v4m0-2 2-2"/></svg>"##,
    ),
    (
        "folder-node",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#66bb6a" d="M1 3h5l1 2h8v8H1zm7 2 3 2v3l-3 2-3-2V7z"/></svg>"##,
    ),
    (
        "folder-src",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#4caf50" d="M1 3h5l1 2h8v8H1zm5 3-2 3 2 3m4-6 2 3-2 3"/></svg>"##,
    ),
    (
        "folder-test",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ab47bc" d="M1 3h5l1 2h8v8H1zm6 2v3l-2 4h6l-2-4V5"/></svg>"##,
    ),
];

pub(super) static FOLDER_ICONS_OPEN: &[(&str, &str)] = &[
    (
        "folder-git-open",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#e64a19" d="M1 3h5l1 2h8l-2 8H1zm7 3v4m0-2 2-2"/></svg>"##,
    ),
    (
        "folder-node-open",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#66bb6a" d="M1 3h5l1 2h8l-2 8H1zm7 2 3 2v3l-3 2-3-2V7z"/></svg>"##,
    ),
    (
        "folder-open",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#90a4ae" d="M1 3h5l1 2h8l-2 8H1z"/></svg>"##,
    ),
    (
        "folder-src-open",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#4caf50" d="M1 3h5l1 2h8l-2 8H1zm5 3-2 3 2 3m4-6 2 3-2 3"/></svg>"##,
    ),
    (
        "folder-test-open",
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path fill="#ab47bc" d="M1 3h5l1 2h8l-2 8H1zm6 2v3l-2 4h6l-2-4V5"/></svg>"##,
    ),
];

pub(super) static FOLDER_NAMES_TO_ICONS: &[(&str, &str)] = &[
    (".git", "folder-git"),
    ("node_modules", "folder-node"),
    ("src", "folder-src"),
    ("test", "folder-test"),
    ("tests", "folder-test"),
];

pub(super) static FOLDER_NAMES_TO_ICONS_OPEN: &[(&str, &str)] = &[
    (".git", "folder-git-open"),
    ("node_modules", "folder-node-open"),
    ("src", "folder-src-open"),
    ("test", "folder-test-open"),
    ("tests", "folder-test-open"),
];

pub(super) static LIGHT_FOLDER_NAMES_TO_ICONS: &[(&str, &str)] = &[];

pub(super) static LIGHT_FOLDER_NAMES_TO_ICONS_OPEN: &[(&str, &str)] = &[];
