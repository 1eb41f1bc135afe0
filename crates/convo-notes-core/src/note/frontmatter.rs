use serde::{Deserialize, Serialize};

/// YAML header of a generated note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFrontmatter {
    pub title: String,
    /// `conversations/<primary domain>`
    pub domain: String,
    #[serde(rename = "type")]
    pub note_type: String,
    pub source: String,
    /// File name of the transcript the note was built from
    pub source_file: String,
    /// `YYYY-MM-DD`
    pub created: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub status: String,
}

impl NoteFrontmatter {
    pub const NOTE_TYPE: &'static str = "conversation";
    pub const STATUS_CONVERTED: &'static str = "converted";

    /// Render as a `---` delimited block
    pub fn to_block(&self) -> Result<String, serde_yaml::Error> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("---\n{}---\n", yaml))
    }
}
