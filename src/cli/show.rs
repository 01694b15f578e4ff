//! `lumen show`: export the validated config as JSON.

use std::fs;
use std::io::Write;

use anyhow::{Result, anyhow};
use serde_json::Value as JsonValue;

use super::ShowArgs;
use crate::config::SiteConfig;
use crate::log;

pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let formatted = render(config, args)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// Serialize the config (or one field of it) to a JSON string.
fn render(config: &SiteConfig, args: &ShowArgs) -> Result<String> {
    let value = serde_json::to_value(config)?;

    let selected = match args.field.as_deref() {
        Some(field) => {
            select_field(&value, field).ok_or_else(|| anyhow!("field '{field}' not found"))?
        }
        None => &value,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(selected)?
    } else {
        serde_json::to_string(selected)?
    };
    Ok(formatted)
}

/// Walk a dotted path through objects and arrays (`menu.0.label`).
fn select_field<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    path.split('.').try_fold(value, |current, segment| match current {
        JsonValue::Object(map) => map.get(segment),
        JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use serde_json::json;

    fn args(field: Option<&str>) -> ShowArgs {
        ShowArgs {
            pretty: false,
            field: field.map(String::from),
            output: None,
        }
    }

    #[test]
    fn test_render_whole_config_uses_camel_case() {
        let out = render(&test_config(), &args(None)).unwrap();
        let value: JsonValue = serde_json::from_str(&out).unwrap();

        assert_eq!(value["postsPerPage"], json!(4));
        assert_eq!(value["pathPrefix"], json!("/"));
        assert_eq!(value["author"]["contacts"]["twitter"], json!(""));
        assert_eq!(value["menu"][0]["label"], json!("Articles"));
    }

    #[test]
    fn test_render_field() {
        let config = test_config();
        assert_eq!(
            render(&config, &args(Some("author.contacts.github"))).unwrap(),
            "\"kowshik-sundararajan\""
        );
        assert_eq!(
            render(&config, &args(Some("menu.0.path"))).unwrap(),
            "\"/\""
        );
        assert_eq!(render(&config, &args(Some("useKatex"))).unwrap(), "false");
    }

    #[test]
    fn test_render_missing_field() {
        let config = test_config();
        assert!(render(&config, &args(Some("author.age"))).is_err());
        assert!(render(&config, &args(Some("menu.5.label"))).is_err());
        assert!(render(&config, &args(Some("title.length"))).is_err());
    }

    #[test]
    fn test_show_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("site.json");
        let show = ShowArgs {
            pretty: true,
            field: None,
            output: Some(output.clone()),
        };

        show_config(&test_config(), &show).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        let reloaded = SiteConfig::from_json_str(&written).unwrap();
        assert_eq!(reloaded, test_config());
    }
}
