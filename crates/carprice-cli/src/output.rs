//! Output formatting module

use std::fmt::Write;

use carprice_domain::model::{FeatureVector, PricePrediction};
use carprice_infra::ReferenceChoices;
use carprice_types::{OutputFormat, Result};

pub fn output_prediction(output_format: OutputFormat, prediction: &PricePrediction) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(prediction)?);
    } else {
        print!("{}", render_prediction(prediction));
    }
    Ok(())
}

pub fn output_features(output_format: OutputFormat, features: &FeatureVector) -> Result<()> {
    if output_format == OutputFormat::Json {
        let named: serde_json::Map<String, serde_json::Value> = features
            .named()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&named)?);
    } else {
        println!("\nEncoded Features");
        println!("================");
        print!("{}", render_features(features));
    }
    Ok(())
}

pub fn output_choices(output_format: OutputFormat, choices: &ReferenceChoices) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "brand": choices.brands,
            "fuel": choices.fuels,
            "seller_type": choices.seller_types,
            "transmission": choices.transmissions,
            "owner": choices.owner_histories,
            "rows": choices.row_count,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", render_choices(choices));
    }
    Ok(())
}

fn render_prediction(prediction: &PricePrediction) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nPrediction Result");
    let _ = writeln!(out, "=================");
    out.push_str(&render_features(&prediction.features));
    let _ = writeln!(out, "-------------------------");
    let _ = writeln!(out, "{}", prediction.message);
    out
}

fn render_features(features: &FeatureVector) -> String {
    let mut out = String::new();
    for (name, value) in features.named() {
        let _ = writeln!(out, "{:<14} {}", format!("{}:", name), value);
    }
    out
}

fn render_choices(choices: &ReferenceChoices) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nReference Choices ({} rows)", choices.row_count);
    let _ = writeln!(out, "===========================");
    let sets: [(&str, &[String]); 5] = [
        ("Brand", choices.brands.as_slice()),
        ("Fuel", choices.fuels.as_slice()),
        ("Seller type", choices.seller_types.as_slice()),
        ("Transmission", choices.transmissions.as_slice()),
        ("Owner", choices.owner_histories.as_slice()),
    ];
    for (label, values) in sets {
        let _ = writeln!(out, "{:<14} {}", format!("{}:", label), values.join(", "));
    }

    let unknown = choices.unencodable();
    if !unknown.is_empty() {
        let _ = writeln!(out, "\nNot encodable (prediction will fail):");
        for entry in unknown {
            let _ = writeln!(
                out,
                "  {}: {} (accepted: {})",
                entry.field,
                entry.label,
                entry.accepted.join(", ")
            );
        }
    }
    out
}
