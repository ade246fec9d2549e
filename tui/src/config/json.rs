use std::path::{Path, PathBuf};

use line_fit::{InitPolicy, XScale};
use serde_json::Value;

use super::model::{RunDraft, SyntheticDraft};

/// Loads a [`RunDraft`] from a JSON file.
///
/// # Errors
/// Returns a human-readable string if the file cannot be read or parsed.
pub fn load_run(path: &Path) -> Result<RunDraft, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

    parse_run(&content)
}

/// Parses a [`RunDraft`] from JSON text.
///
/// # Errors
/// Returns a human-readable string on invalid JSON, wrong value types or unknown options.
pub fn parse_run(content: &str) -> Result<RunDraft, String> {
    let val: Value = serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    if !val.is_object() {
        return Err("the run file must hold a JSON object".into());
    }

    let learning_rate = match &val["learning_rate"] {
        Value::Null => None,
        v => Some(v.as_f64().ok_or("learning_rate must be a number")?),
    };

    let limit = match &val["limit"] {
        Value::Null => None,
        v => Some(v.as_u64().ok_or("limit must be a non-negative integer")? as usize),
    };

    let input: Option<PathBuf> = match &val["input"] {
        Value::Null => None,
        v => Some(v.as_str().ok_or("input must be a path")?.into()),
    };

    let synthetic = match &val["synthetic"] {
        Value::Null => None,
        v => Some(parse_synthetic(v)?),
    };

    let init = match &val["init"] {
        Value::Null => None,
        v => match v.as_str().ok_or("init must be a string")? {
            "min_y" => Some(InitPolicy::MinY),
            "zero" => Some(InitPolicy::Zero),
            other => return Err(format!("unknown init: {other}")),
        },
    };

    let scale = match &val["scale_x"] {
        Value::Null => None,
        v => match v.as_bool().ok_or("scale_x must be a boolean")? {
            true => Some(XScale::ShiftToMin),
            false => Some(XScale::Raw),
        },
    };

    let tick_ms = match &val["tick_ms"] {
        Value::Null => None,
        v => Some(v.as_u64().ok_or("tick_ms must be a non-negative integer")?),
    };

    if input.is_some() && synthetic.is_some() {
        return Err("input and synthetic cannot be used together".into());
    }

    Ok(RunDraft {
        learning_rate,
        limit,
        input,
        synthetic,
        init,
        scale,
        tick_ms,
    })
}

fn parse_synthetic(val: &Value) -> Result<SyntheticDraft, String> {
    let range = val["range"]
        .as_u64()
        .and_then(|r| u32::try_from(r).ok())
        .ok_or("synthetic.range must be a positive integer")?;

    let seed = match &val["seed"] {
        Value::Null => None,
        v => Some(v.as_u64().ok_or("synthetic.seed must be a non-negative integer")?),
    };

    Ok(SyntheticDraft { range, seed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object() {
        assert_eq!(parse_run("{}").unwrap(), RunDraft::default());
    }

    #[test]
    fn full_file() {
        let draft = parse_run(
            r#"{
                "learning_rate": 0.0005,
                "limit": 2000,
                "input": "data/gdp.csv",
                "init": "zero",
                "scale_x": false,
                "tick_ms": 25
            }"#,
        )
        .unwrap();

        assert_eq!(draft.learning_rate, Some(0.0005));
        assert_eq!(draft.limit, Some(2000));
        assert_eq!(draft.input, Some(PathBuf::from("data/gdp.csv")));
        assert_eq!(draft.init, Some(InitPolicy::Zero));
        assert_eq!(draft.scale, Some(XScale::Raw));
        assert_eq!(draft.tick_ms, Some(25));
        assert_eq!(draft.synthetic, None);
    }

    #[test]
    fn synthetic_section() {
        let draft = parse_run(r#"{ "synthetic": { "range": 50, "seed": 3 } }"#).unwrap();
        assert_eq!(
            draft.synthetic,
            Some(SyntheticDraft {
                range: 50,
                seed: Some(3)
            })
        );
    }

    #[test]
    fn wrong_types() {
        assert_eq!(
            parse_run(r#"{ "learning_rate": "fast" }"#).unwrap_err(),
            "learning_rate must be a number"
        );
        assert_eq!(
            parse_run(r#"{ "limit": -1 }"#).unwrap_err(),
            "limit must be a non-negative integer"
        );
        assert!(parse_run(r#"{ "synthetic": {} }"#).is_err());
    }

    #[test]
    fn unknown_init() {
        assert_eq!(
            parse_run(r#"{ "init": "random" }"#).unwrap_err(),
            "unknown init: random"
        );
    }

    #[test]
    fn not_an_object() {
        assert!(parse_run("[1, 2]").is_err());
        assert!(parse_run("{").unwrap_err().starts_with("invalid JSON"));
    }

    #[test]
    fn shipped_example() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/run_example.json");
        let draft = load_run(&path).unwrap();

        assert_eq!(draft.limit, Some(5000));
        assert_eq!(draft.scale, Some(XScale::ShiftToMin));
    }

    #[test]
    fn missing_file() {
        let err = load_run(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.starts_with("cannot read"));
    }

    #[test]
    fn both_sources() {
        assert!(parse_run(r#"{ "input": "a.csv", "synthetic": { "range": 5 } }"#).is_err());
    }
}
