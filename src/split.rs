/// Granularity of the text split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// One unit per Unicode scalar value.
    #[default]
    Character,
    /// Split on whitespace runs, keeping each run as its own unit.
    Word,
    /// Split on newlines, keeping each newline as its own unit.
    Line,
}

impl SplitMode {
    /// Parses a mode name. Unknown names fall back to [`SplitMode::Character`];
    /// an invalid mode is a documented fallback, not an error.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Self::Word,
            "line" => Self::Line,
            _ => Self::Character,
        }
    }
}

// Deserialized through `parse` so JSON configs inherit the fallback policy.
impl<'de> serde::Deserialize<'de> for SplitMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}

/// Partitions `text` into ordered fragments per `mode`.
///
/// Concatenating the returned fragments always reproduces `text` exactly;
/// the empty string yields an empty sequence for every mode.
pub fn split_text(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Character => text.chars().map(String::from).collect(),
        SplitMode::Word => split_whitespace_runs(text),
        SplitMode::Line => split_newlines(text),
    }
}

fn split_whitespace_runs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_ws = false;
    for (i, c) in text.char_indices() {
        let ws = c.is_whitespace();
        if i == 0 {
            in_ws = ws;
            continue;
        }
        if ws != in_ws {
            out.push(text[start..i].to_owned());
            start = i;
            in_ws = ws;
        }
    }
    if !text.is_empty() {
        out.push(text[start..].to_owned());
    }
    out
}

fn split_newlines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c == '\n' {
            if i > start {
                out.push(text[start..i].to_owned());
            }
            out.push("\n".to_owned());
            start = i + 1;
        }
    }
    if start < text.len() {
        out.push(text[start..].to_owned());
    }
    out
}
