//! Schema command - show the field rules of the built-in sheets.

use catalint::{SchemaRegistry, SheetSchema};
use colored::Colorize;

pub fn run(sheet: Option<String>, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = SchemaRegistry::builtin();

    let schemas: Vec<&SheetSchema> = match sheet {
        Some(name) => vec![registry.schema_for(&name)?],
        None => registry.iter().collect(),
    };

    if json_output {
        let sheets: Vec<_> = schemas.iter().map(|schema| schema_json(schema)).collect();
        println!("{}", serde_json::to_string_pretty(&sheets)?);
        return Ok(());
    }

    for (idx, schema) in schemas.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!(
            "{} {}",
            schema.sheet().to_string().cyan().bold(),
            format!("({} fields)", schema.len()).dimmed()
        );

        for (name, rule) in schema.fields() {
            let required = if rule.required {
                "required".yellow()
            } else {
                "optional".normal()
            };
            let format = rule
                .format
                .map(|format| format.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:14} {:9} {:28} {}",
                name.white(),
                required,
                rule.cardinality.to_string(),
                format
            );
        }
    }

    Ok(())
}

fn schema_json(schema: &SheetSchema) -> serde_json::Value {
    let fields: Vec<_> = schema
        .fields()
        .map(|(name, rule)| {
            serde_json::json!({
                "name": name,
                "required": rule.required,
                "cardinality": rule.cardinality.to_string(),
                "format": rule.format.map(|format| format.to_string()),
            })
        })
        .collect();

    serde_json::json!({
        "sheet": schema.sheet(),
        "fields": fields,
    })
}
