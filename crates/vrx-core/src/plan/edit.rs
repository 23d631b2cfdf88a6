//! In-place edits of files produced by the scaffolding tool

use serde_json::{Map, Value};

/// Prepend `directive` (followed by a blank line) unless it is already present
pub fn with_prelude(stylesheet: &str, directive: &str) -> String {
    if stylesheet.contains(directive) {
        stylesheet.to_string()
    } else {
        format!("{}\n\n{}", directive, stylesheet)
    }
}

/// Merge script entries into a `package.json` document
///
/// Existing scripts keep their position and value unless an entry with the
/// same name replaces the value. New scripts are appended. The document is
/// re-serialized with two-space indentation.
pub fn merge_scripts(manifest: &str, entries: &[(&str, &str)]) -> serde_json::Result<String> {
    let mut doc: Value = serde_json::from_str(manifest)?;
    let Some(root) = doc.as_object_mut() else {
        return Err(serde::de::Error::custom("package.json must contain a JSON object"));
    };

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }

    if let Value::Object(scripts) = scripts {
        for (name, command) in entries {
            scripts.insert((*name).to_string(), Value::String((*command).to_string()));
        }
    }

    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::files::{TAILWIND_DIRECTIVE, VITEST_SCRIPTS};

    #[test]
    fn test_prelude_is_prepended() {
        let css = ":root { color: red; }\n";
        let updated = with_prelude(css, TAILWIND_DIRECTIVE);
        assert_eq!(updated, "@import \"tailwindcss\";\n\n:root { color: red; }\n");
    }

    #[test]
    fn test_prelude_is_idempotent() {
        let once = with_prelude("body {}\n", TAILWIND_DIRECTIVE);
        let twice = with_prelude(&once, TAILWIND_DIRECTIVE);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_prelude_on_empty_stylesheet() {
        assert_eq!(with_prelude("", TAILWIND_DIRECTIVE), "@import \"tailwindcss\";\n\n");
    }

    #[test]
    fn test_merge_preserves_existing_scripts() {
        let manifest = r#"{
  "name": "app",
  "scripts": {
    "dev": "vite",
    "test": "echo old",
    "build": "vite build"
  }
}"#;
        let merged = merge_scripts(manifest, VITEST_SCRIPTS).unwrap();
        let doc: Value = serde_json::from_str(&merged).unwrap();
        let scripts = doc["scripts"].as_object().unwrap();

        assert_eq!(scripts["dev"], "vite");
        assert_eq!(scripts["build"], "vite build");
        assert_eq!(scripts["test"], "vitest");
        assert_eq!(scripts["test:ui"], "vitest --ui");
        assert_eq!(scripts["test:coverage"], "vitest --coverage");

        let order: Vec<&str> = scripts.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["dev", "test", "build", "test:ui", "test:coverage"]);
        assert_eq!(doc["name"], "app");
    }

    #[test]
    fn test_merge_creates_scripts_section() {
        let merged = merge_scripts(r#"{"name": "app"}"#, &[("test", "vitest")]).unwrap();
        assert!(merged.contains("\"scripts\": {\n    \"test\": \"vitest\"\n  }"));
        assert!(merged.ends_with("}\n"));
    }

    #[test]
    fn test_merge_rejects_invalid_manifest() {
        assert!(merge_scripts("not json", &[("test", "vitest")]).is_err());
        assert!(merge_scripts("[1, 2]", &[("test", "vitest")]).is_err());
    }
}
