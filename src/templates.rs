use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

use crate::layout::TargetDir;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

/// A file the scaffold writes: `filename` inside `directory`, with the
/// embedded `template` as its literal content.
#[derive(Clone, Copy, Debug)]
pub struct FileDescriptor {
    pub filename: &'static str,
    pub directory: TargetDir,
    pub template: &'static str,
}

impl FileDescriptor {
    pub fn content(&self) -> Result<String> {
        get_string(self.template)
    }
}

static DESCRIPTORS: [FileDescriptor; 1] = [FileDescriptor {
    filename: "AttributeMapRequest.java",
    directory: TargetDir::RequestDto,
    template: "java/AttributeMapRequest.java",
}];

pub fn descriptors() -> &'static [FileDescriptor] {
    &DESCRIPTORS
}

pub fn get_bytes(path: &str) -> Result<Vec<u8>> {
    let file = Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    Ok(file.data.as_ref().to_vec())
}

pub fn get_string(path: &str) -> Result<String> {
    let bytes = get_bytes(path)?;
    String::from_utf8(bytes).with_context(|| format!("decoding embedded template `{}`", path))
}
