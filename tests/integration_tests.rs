use anyhow::Result;
use review_convert::{
    CliConfig, ConversionEngine, ConvertError, LocalStorage, ReviewPipeline, SourceFormat,
};
use serde_json::{json, Value};
use tempfile::TempDir;

fn config_for(input: &str, format: SourceFormat) -> CliConfig {
    CliConfig {
        input: Some(input.to_string()),
        format: Some(format),
        ..Default::default()
    }
}

async fn convert(input: &str, format: SourceFormat) -> review_convert::Result<String> {
    let pipeline = ReviewPipeline::new(LocalStorage::new(), config_for(input, format));
    let engine = ConversionEngine::new(pipeline);
    engine.run().await.map(|report| report.output_path)
}

#[tokio::test]
async fn test_end_to_end_langchain_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("in.json");
    let input = json!({
        "metadata": {"total_products": 2},
        "grouped_products": [{
            "parent_sku": "A1",
            "variants": [{"sku": "A1-S", "title": "Shirt S"}, {"sku": "A1-M"}]
        }]
    });
    tokio::fs::write(&input_path, serde_json::to_vec(&input)?).await?;

    let output_path = convert(input_path.to_str().unwrap(), SourceFormat::Langchain).await?;
    let expected_path = temp_dir.path().join("in_for_review.json");
    assert_eq!(output_path, expected_path.to_str().unwrap());

    let output: Value = serde_json::from_slice(&tokio::fs::read(&expected_path).await?)?;
    assert!(output["metadata"]["generated"].is_string());
    assert_eq!(output["metadata"]["total_products"], json!(2));

    let groups = output["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["id"], json!("group-0"));
    assert_eq!(groups[0]["parent_sku"], json!("A1"));
    assert_eq!(groups[0]["confidence"], json!(0.85));
    assert_eq!(groups[0]["variant_count"], json!(2));
    assert_eq!(groups[0]["review_status"], json!("pending"));
    assert_eq!(
        groups[0]["variants"],
        json!([
            {"sku": "A1-S", "title": "Shirt S", "attributes": {}},
            {"sku": "A1-M", "title": "", "attributes": {}}
        ])
    );

    let keys: Vec<&String> = groups[0].as_object().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec![
            "id",
            "parent_sku",
            "parent_title",
            "confidence",
            "reasoning",
            "variant_count",
            "common_attributes",
            "varying_attributes",
            "review_status",
            "variants"
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_rerun_changes_only_timestamp() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("run.json");
    let input = json!({
        "metadata": {"total_products": 5, "grouping_rate": 80.0},
        "grouped_products": [
            {"parent_sku": "B", "variants": [{"sku": "B-1", "attributes": {"size": "S"}}]},
            {"parent_sku": "A", "varying_attributes": ["size"]}
        ]
    });
    tokio::fs::write(&input_path, serde_json::to_vec(&input)?).await?;
    let input_path = input_path.to_str().unwrap();

    let output_path = convert(input_path, SourceFormat::Langchain).await?;
    let mut first: Value = serde_json::from_slice(&tokio::fs::read(&output_path).await?)?;

    convert(input_path, SourceFormat::Langchain).await?;
    let mut second: Value = serde_json::from_slice(&tokio::fs::read(&output_path).await?)?;

    first["metadata"]["generated"] = Value::Null;
    second["metadata"]["generated"] = Value::Null;
    assert_eq!(first, second);
    assert_eq!(first["groups"][1]["id"], json!("group-1"));
    assert_eq!(first["groups"][1]["parent_sku"], json!("A"));

    Ok(())
}

#[tokio::test]
async fn test_auto_detects_notebook_export() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("notebook.json");
    let input = json!({
        "metadata": {"generated": "2025-06-01T08:30:00", "stats": {"total_products": 4}},
        "groups": [{
            "parent_sku": "HD",
            "parent_title": "Hot Dogs",
            "grouping_rationale": "same product, pack sizes",
            "variants": [
                {"sku": "HD-8", "title": "Kosher Hot Dog 8 oz"},
                {"sku": "HD-16", "title": "Kosher Hot Dog 16 oz"}
            ]
        }]
    });
    tokio::fs::write(&input_path, serde_json::to_vec(&input)?).await?;

    let output_path = convert(input_path.to_str().unwrap(), SourceFormat::Auto).await?;
    let output: Value = serde_json::from_slice(&tokio::fs::read(&output_path).await?)?;

    assert_eq!(output["metadata"]["generated"], json!("2025-06-01T08:30:00"));
    let group = &output["groups"][0];
    assert_eq!(group["reasoning"], json!("same product, pack sizes"));
    assert_eq!(group["variant_count"], json!(2));
    assert_eq!(group["common_attributes"]["base_product"], json!("hot dog"));
    assert_eq!(group["common_attributes"]["kosher"], json!(true));
    assert_eq!(group["common_attributes"]["weight_unit"], json!("oz"));
    assert_eq!(group["varying_attributes"], json!(["weight"]));

    Ok(())
}

#[tokio::test]
async fn test_missing_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("absent.json");

    let err = convert(input_path.to_str().unwrap(), SourceFormat::Langchain)
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::IoError(_)));
    assert!(!temp_dir.path().join("absent_for_review.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_bad_inputs_leave_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let cases = [
        ("malformed.json", "{\"grouped_products\": [", "parse"),
        ("list.json", "[{\"parent_sku\": \"A\"}]", "shape"),
        ("typed.json", "{\"grouped_products\": [{\"variants\": 3}]}", "shape"),
    ];

    for (name, content, kind) in cases {
        let input_path = temp_dir.path().join(name);
        tokio::fs::write(&input_path, content).await?;

        let err = convert(input_path.to_str().unwrap(), SourceFormat::Langchain)
            .await
            .unwrap_err();
        match kind {
            "parse" => assert!(matches!(err, ConvertError::SerializationError(_)), "{name}: {err}"),
            _ => assert!(matches!(err, ConvertError::ShapeError { .. }), "{name}: {err}"),
        }

        let stem = name.trim_end_matches(".json");
        let output = temp_dir.path().join(format!("{}_for_review.json", stem));
        assert!(!output.exists(), "{name} produced output");
    }

    Ok(())
}

#[tokio::test]
async fn test_non_json_input_name_never_overwrites_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("export.txt");
    let content = "{\"grouped_products\": []}";
    tokio::fs::write(&input_path, content).await?;

    let err = convert(input_path.to_str().unwrap(), SourceFormat::Langchain)
        .await
        .unwrap_err();
    assert!(matches!(err, ConvertError::InvalidConfigValueError { .. }));
    assert_eq!(tokio::fs::read_to_string(&input_path).await?, content);

    Ok(())
}
