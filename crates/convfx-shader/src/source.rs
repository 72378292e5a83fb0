//! Mutable-by-substitution shader text.

use std::path::Path;

use crate::{ShaderError, ShaderLanguage, ShaderResult};

/// A working copy of shader template text.
///
/// Global declarations added with [`add`](Self::add) land after the
/// template's preamble (`#version`, `#ifdef`, `precision`, `enable`
/// lines and leading `//` or `/* */` comments), in the order they were
/// added. Block comment lines are recognised by their leading `/*`, `*`
/// or `*/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    text: String,
    language: ShaderLanguage,
    cursor: usize,
}

impl ShaderSource {
    /// Wraps template text written in `language`.
    pub fn new(text: impl Into<String>, language: ShaderLanguage) -> Self {
        let text = text.into();
        let cursor = preamble_end(&text);
        Self { text, language, cursor }
    }

    /// Loads template text from a file.
    pub fn from_file(path: impl AsRef<Path>, language: ShaderLanguage) -> ShaderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ShaderError::Template {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(text, language))
    }

    /// The bundled convolution template for `language`.
    pub fn builtin(language: ShaderLanguage) -> Self {
        Self::new(language.convolution_template(), language)
    }

    /// Language of the template.
    pub fn language(&self) -> ShaderLanguage {
        self.language
    }

    /// Inserts global-scope text after the preamble and any earlier additions.
    pub fn add(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Declares a named float constant.
    pub fn add_const(&mut self, name: &str, value: f32) {
        let decl = self.language.const_decl(name, value);
        self.add(&decl);
        self.add("\n");
    }

    /// Replaces every occurrence of `token` with `text`.
    pub fn replace(&mut self, token: &str, text: &str) -> ShaderResult<()> {
        if token.is_empty() || !self.text.contains(token) {
            return Err(ShaderError::MissingPlaceholder { token: token.to_string() });
        }
        let before = self.text[..self.cursor].matches(token).count();
        self.text = self.text.replace(token, text);
        self.cursor = self.cursor - before * token.len() + before * text.len();
        Ok(())
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the source, returning the text.
    pub fn into_string(self) -> String {
        self.text
    }
}

/// Byte offset just past the last line of the leading directive block.
fn preamble_end(text: &str) -> usize {
    let mut pos = 0;
    let mut end = 0;
    for line in text.split_inclusive('\n') {
        let t = line.trim();
        pos += line.len();
        if t.is_empty() {
            continue;
        }
        let directive = t.starts_with('#')
            || t.starts_with("//")
            || t.starts_with("/*")
            || t.starts_with('*')
            || t.starts_with("precision ")
            || t.starts_with("enable ");
        if !directive {
            break;
        }
        end = pos;
    }
    end
}
