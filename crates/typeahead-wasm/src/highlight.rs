//! Code-block highlighting bootstrap.
//!
//! A fixed alias registry plus one DOM pass over `pre code` blocks. Each
//! block's `language-*` class is resolved through the registry and rewritten
//! to its canonical grammar name so the page's highlighter CSS picks it up;
//! blocks with no recognized alias are left untouched. Runs independently of
//! the search widget.

use wasm_bindgen::{JsCast, prelude::*};

/// Grammars the registry resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Javascript,
    Json,
    Bash,
    Shell,
    Html,
    Ini,
    Yaml,
    Markdown,
    Go,
    Plaintext,
}

impl Language {
    /// Resolve a fence alias to its grammar. Aliases are matched
    /// case-insensitively; `toml` shares the INI grammar and `txt`/`text`
    /// share plaintext.
    pub fn from_alias(alias: &str) -> Option<Language> {
        match alias.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Some(Language::Javascript),
            "json" => Some(Language::Json),
            "bash" => Some(Language::Bash),
            "shell" | "sh" => Some(Language::Shell),
            "html" => Some(Language::Html),
            "ini" | "toml" => Some(Language::Ini),
            "yaml" | "yml" => Some(Language::Yaml),
            "md" | "markdown" => Some(Language::Markdown),
            "go" => Some(Language::Go),
            "plaintext" | "txt" | "text" => Some(Language::Plaintext),
            _ => None,
        }
    }

    /// Canonical grammar name, as used in the `language-*` class.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Json => "json",
            Language::Bash => "bash",
            Language::Shell => "shell",
            Language::Html => "html",
            Language::Ini => "ini",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Go => "go",
            Language::Plaintext => "plaintext",
        }
    }
}

/// Tag every `pre code` block on the page with its resolved grammar.
#[wasm_bindgen(js_name = highlightAll)]
pub fn highlight_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(blocks) = document.query_selector_all("pre code") else {
        return;
    };

    for i in 0..blocks.length() {
        if let Some(block) = blocks
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        {
            tag_block(&block);
        }
    }
}

/// Rewrite one block's `language-*` class to the canonical grammar and mark
/// it highlighted. No-op when no class resolves.
fn tag_block(block: &web_sys::Element) {
    let classes = block.class_list();

    let mut resolved = None;
    for i in 0..classes.length() {
        if let Some(class) = classes.item(i)
            && let Some(alias) = class.strip_prefix("language-")
            && let Some(language) = Language::from_alias(alias)
        {
            resolved = Some((class, language));
            break;
        }
    }

    if let Some((class, language)) = resolved {
        let _ = classes.remove_1(&class);
        let _ = classes.add_2(&format!("language-{}", language.name()), "hljs");
    }
}
