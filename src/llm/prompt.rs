use crate::models::FilteredPayload;

pub const SYSTEM_PROMPT: &str = "\
You are a repository analyst. You are given the filtered root file list of a GitHub \
repository and the beginning of its README.

Respond with a single JSON object that has exactly these three keys and nothing else:
- \"summary\": a clear, human-readable paragraph describing what the project does.
- \"technologies\": an array of strings naming the languages, frameworks and libraries detected.
- \"structure\": a short description of how the project is organized, inferred from the file list.

Return only the raw JSON object. Do not wrap it in markdown code fences and do not add any commentary.";

const NO_README: &str = "No README found.";
const NO_FILES: &str = "(none)";

pub fn user_message(payload: &FilteredPayload) -> String {
    let files = if payload.entries.is_empty() {
        NO_FILES.to_string()
    } else {
        payload.entries.join(", ")
    };

    let readme = if payload.readme_excerpt.trim().is_empty() {
        NO_README
    } else {
        payload.readme_excerpt.as_str()
    };

    format!("Root files (filtered): {files}\n\nREADME (truncated):\n{readme}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_files_and_readme() {
        let payload = FilteredPayload {
            entries: vec!["main.py".into(), "README.md".into()],
            readme_excerpt: "# Demo".into(),
        };
        let msg = user_message(&payload);
        assert!(msg.contains("main.py, README.md"));
        assert!(msg.ends_with("# Demo"));
    }

    #[test]
    fn placeholders_for_empty_payload() {
        let msg = user_message(&FilteredPayload::default());
        assert!(msg.contains(NO_FILES));
        assert!(msg.contains(NO_README));
    }
}
