//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_defaults, DefaultsConfig};
use crate::cursor::{decode_url, encode, Cursor, DecodeErrors, Defaults};
use crate::error::{Error, Result, ResultExt};
use crate::response::NextLink;
use crate::store::MemoryStore;
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use url::Url;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

/// Output of the `page` command
#[derive(Debug, Serialize)]
struct PageOutput<'a> {
    items: Vec<&'a Value>,
    #[serde(flatten)]
    link: NextLink,
    prev: Option<String>,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let defaults = self.load_defaults()?;
        let output = match &self.cli.command {
            Commands::Decode { url, strict } => decode_command(url, &defaults, *strict)?,
            Commands::Page {
                items,
                url,
                no_prefetch,
            } => {
                let records = load_records(items)?;
                let prefetch = defaults.prefetch && !no_prefetch;
                page_command(records, url, &defaults, prefetch)?
            }
        };
        self.print(&output)
    }

    /// Load defaults from the file given on the command line
    fn load_defaults(&self) -> Result<Defaults> {
        match &self.cli.defaults {
            Some(path) => load_defaults(path),
            None => DefaultsConfig::default().into_defaults(),
        }
    }

    fn print(&self, output: &Value) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(output)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
        };
        println!("{text}");
        Ok(())
    }
}

/// Decode the cursor of `url`, logging every malformed parameter
fn decode_request(url: &str, defaults: &Defaults, strict: bool) -> Result<(Url, Cursor)> {
    let url = Url::parse(url).context(format!("Cannot parse request URL '{url}'"))?;
    let (cursor, errors) = decode_url(&url, defaults);
    report(&errors);
    if strict {
        errors.into_result()?;
    }
    Ok((url, cursor))
}

fn report(errors: &DecodeErrors) {
    for failure in errors {
        warn!("Ignoring malformed cursor parameter: {}", failure);
    }
}

/// Output of the `decode` command
fn decode_command(url: &str, defaults: &Defaults, strict: bool) -> Result<Value> {
    let (_, cursor) = decode_request(url, defaults, strict)?;
    Ok(json!({ "cursor": cursor }))
}

/// Output of the `page` command
fn page_command(
    records: Vec<Value>,
    url: &str,
    defaults: &Defaults,
    prefetch: bool,
) -> Result<Value> {
    let (url, cursor) = decode_request(url, defaults, false)?;
    let store = MemoryStore::new(records);
    let page = store.page(&cursor, prefetch);

    info!(
        "Page of {} records from {} (next: {}, prev: {})",
        page.items.len(),
        store.len(),
        page.next.is_some(),
        page.prev.is_some()
    );

    let output = PageOutput {
        items: page.items,
        link: NextLink::new(page.next.as_ref(), &url),
        prev: page.prev.map(|prev| encode(&prev, &url).to_string()),
    };
    Ok(serde_json::to_value(output)?)
}

/// Load a JSON array of records
fn load_records(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read items file '{}': {}",
            path.display(),
            e
        ))
    })?;
    match serde_json::from_str(&content)? {
        Value::Array(records) => Ok(records),
        _ => Err(Error::config(format!(
            "Items file '{}' must hold a JSON array",
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;
    use std::io::Write;

    fn comments() -> Vec<Value> {
        vec![
            json!({"text": "e", "created_at": 3, "updated_at": 5}),
            json!({"text": "d", "created_at": 3, "updated_at": 5}),
            json!({"text": "c", "created_at": 2, "updated_at": 5}),
            json!({"text": "b", "created_at": 1, "updated_at": 4}),
            json!({"text": "a", "created_at": 0, "updated_at": 4}),
        ]
    }

    fn defaults() -> Defaults {
        Defaults::none()
            .with_count(2)
            .with_order("updated_at")
            .with_direction(Direction::Desc)
            .with_prefetch(true)
    }

    #[test]
    fn test_decode_command() {
        let output = decode_command(
            "http://example.com/comments?order=created_at&value=3",
            &defaults(),
            false,
        )
        .unwrap();

        assert_eq!(
            output,
            json!({"cursor": {
                "value": "3",
                "offset": 0,
                "count": 2,
                "order": "created_at",
                "direction": "desc"
            }})
        );
    }

    #[test]
    fn test_decode_command_strict() {
        let url = "http://example.com/?count=ten";
        assert!(decode_command(url, &defaults(), false).is_ok());

        let err = decode_command(url, &defaults(), true).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_decode_command_bad_url() {
        let err = decode_command("not a url", &defaults(), false).unwrap_err();
        assert!(err.to_string().contains("Cannot parse request URL"));
    }

    #[test]
    fn test_page_command_first_page() {
        let output =
            page_command(comments(), "http://example.com/comments?lang=en", &defaults(), true)
                .unwrap();

        let texts: Vec<&str> = output["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["e", "d"]);
        assert_eq!(
            output["next"],
            "http://example.com/comments?lang=en&value=5&offset=2&count=2&order=updated_at&direction=-1"
        );
        assert_eq!(
            output["prev"],
            "http://example.com/comments?lang=en&value=5&offset=2&count=2&order=updated_at&direction=1"
        );
    }

    #[test]
    fn test_page_command_last_page() {
        let url = "http://example.com/comments?value=4&offset=0&count=2&order=updated_at&direction=-1";
        let output = page_command(comments(), url, &defaults(), true).unwrap();

        assert_eq!(output["items"].as_array().unwrap().len(), 2);
        assert_eq!(output["next"], Value::Null);
    }

    #[test]
    fn test_load_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 1}}, {{"id": 2}}]"#).unwrap();
        assert_eq!(load_records(file.path()).unwrap().len(), 2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": 1}}"#).unwrap();
        assert!(load_records(file.path()).is_err());
    }
}
