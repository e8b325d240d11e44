use std::fmt;

use clap::ValueEnum;
use rust_embed::{EmbeddedFile, RustEmbed};

#[derive(RustEmbed)]
#[folder = "../target/www/component/"]
#[allow_missing = true]
struct ComponentAssets;

#[derive(RustEmbed)]
#[folder = "../target/www/script/"]
#[allow_missing = true]
struct ScriptAssets;

/// Which starter template to build or serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Leptos component tree (`web` crate)
    Component,
    /// Plain script on static markup (`script` crate)
    Script,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Component, Variant::Script];

    /// Workspace package compiled to wasm for this variant.
    pub fn package(self) -> &'static str {
        match self {
            Variant::Component => "web",
            Variant::Script => "script",
        }
    }

    /// Directory under `target/www` holding the bundled output.
    pub fn dir_name(self) -> &'static str {
        match self {
            Variant::Component => "component",
            Variant::Script => "script",
        }
    }

    pub fn index_html(self) -> &'static str {
        match self {
            Variant::Component => include_str!("../../web/index.html"),
            Variant::Script => include_str!("../../script/index.html"),
        }
    }

    pub fn asset(self, file: &str) -> Option<EmbeddedFile> {
        match self {
            Variant::Component => ComponentAssets::get(file),
            Variant::Script => ScriptAssets::get(file),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
