//! Serialization back to key file text.

use super::KeyFile;

impl KeyFile {
    /// Render the file with an optional leading comment block.
    ///
    /// Each line of `header` is prefixed with `# `. Sections are separated
    /// by a blank line.
    pub fn to_text(&self, header: Option<&str>) -> String {
        let mut out = String::new();
        if let Some(header) = header {
            for line in header.lines() {
                if line.is_empty() {
                    out.push_str("#\n");
                } else {
                    out.push_str("# ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        for (i, section) in self.sections().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push('[');
            out.push_str(section.name());
            out.push_str("]\n");
            for (key, value) in section.iter() {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
                out.push('\n');
            }
        }
        out
    }
}
