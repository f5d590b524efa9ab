use std::io::Write;

use modelist_core::Model;
use serde::Serialize;
use serde_json::Number;

use crate::error::ListingError;

const ID_WIDTH: usize = 30;
const OWNER_WIDTH: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A header with the count, then one aligned line per model.
    #[default]
    Text,
    /// A pretty-printed JSON array with defaults filled in.
    Json,
}

/// Writes already-sorted models to `out` in the given format.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    models: &[Model],
    format: OutputFormat,
) -> Result<(), ListingError> {
    match format {
        OutputFormat::Text => write_text(out, models)?,
        OutputFormat::Json => write_json(out, models)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write + ?Sized>(out: &mut W, models: &[Model]) -> std::io::Result<()> {
    writeln!(out, "✅ Retrieved {} models:", models.len())?;
    writeln!(out)?;
    for model in models {
        writeln!(out, "{}", format_line(model))?;
    }
    Ok(())
}

/// Formats one report line. Columns pad to a minimum width and never truncate.
pub fn format_line(model: &Model) -> String {
    format!(
        "- ID: {:<id_w$} | Owner: {:<owner_w$} | Created: {}",
        model.display_id(),
        model.owner(),
        model.created(),
        id_w = ID_WIDTH,
        owner_w = OWNER_WIDTH,
    )
}

#[derive(Serialize)]
struct ModelRow<'a> {
    id: &'a str,
    owned_by: &'a str,
    created: Number,
}

impl<'a> From<&'a Model> for ModelRow<'a> {
    fn from(model: &'a Model) -> Self {
        Self {
            id: model.display_id(),
            owned_by: model.owner(),
            created: model.created(),
        }
    }
}

fn write_json<W: Write + ?Sized>(out: &mut W, models: &[Model]) -> Result<(), ListingError> {
    let rows: Vec<ModelRow<'_>> = models.iter().map(ModelRow::from).collect();
    serde_json::to_writer_pretty(&mut *out, &rows)
        .map_err(|e| ListingError::Unknown(anyhow::Error::new(e)))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(models: &[Model], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_report(&mut out, models, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_line_pads_columns() {
        let model = Model::new("gpt-4").owned_by("openai").created_at(100);

        assert_eq!(
            format_line(&model),
            "- ID: gpt-4                          | Owner: openai          | Created: 100"
        );
    }

    #[test]
    fn test_format_line_defaults() {
        let line = format_line(&Model::default());

        assert!(line.starts_with("- ID: N/A "));
        assert!(line.contains("| Owner: Unknown         |"));
        assert!(line.ends_with("| Created: 0"));
    }

    #[test]
    fn test_format_line_does_not_truncate() {
        let id = "x".repeat(40);
        let line = format_line(&Model::new(id.clone()));

        assert!(line.starts_with(&format!("- ID: {id} | Owner: ")));
    }

    #[test]
    fn test_format_line_keeps_created_as_sent() {
        let model = Model {
            created: Some(Number::from_f64(1.5e9).unwrap()),
            ..Model::new("float")
        };
        let huge = Model {
            created: Some(Number::from(u64::MAX)),
            ..Model::new("huge")
        };

        assert!(format_line(&model).contains("| Created: 1500000000"));
        assert!(format_line(&huge).ends_with("| Created: 18446744073709551615"));
    }

    #[test]
    fn test_text_report() {
        let models = [
            Model::new("claude-2").owned_by("anthropic").created_at(50),
            Model::new("gpt-4").owned_by("openai").created_at(100),
        ];

        let text = render(&models, OutputFormat::Text);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "✅ Retrieved 2 models:");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("- ID: claude-2 "));
        assert!(lines[3].starts_with("- ID: gpt-4 "));
    }

    #[test]
    fn test_text_report_empty() {
        assert_eq!(render(&[], OutputFormat::Text), "✅ Retrieved 0 models:\n\n");
    }

    #[test]
    fn test_json_report() {
        let models = [Model::new("gpt-4").owned_by("openai"), Model::default()];

        let json: serde_json::Value =
            serde_json::from_str(&render(&models, OutputFormat::Json)).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"id": "gpt-4", "owned_by": "openai", "created": 0},
                {"id": "N/A", "owned_by": "Unknown", "created": 0}
            ])
        );
    }
}
