use crate::report::ReportData;

/// Render the report as pretty-printed JSON for downstream templates.
pub fn render_json_report(data: &ReportData) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concepts::{Annotation, Model, Type, TypeKind};
    use crate::report::build_report_data;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_json_report() {
        let address = Type::new("Address", TypeKind::Struct)
            .annotate(Annotation::new("http").with("name", "addr"))
            .annotate(
                Annotation::new("json")
                    .with("name", "address")
                    .with("required", true),
            );
        let data = build_report_data(&Model {
            types: vec![address],
        });

        let out = render_json_report(&data).unwrap();
        assert!(out.ends_with("}\n"));

        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        let concept = &json["concepts"][0];
        assert_eq!(concept["path"], "Address");
        assert_eq!(concept["kind"], "type");
        assert_eq!(concept["annotations"], serde_json::json!(["http", "json"]));
        assert_eq!(
            concept["directives"],
            serde_json::json!({
                "http_name": "addr",
                "json_name": "address",
                "json_read_only": false,
                "json_default": "",
                "json_required": true,
                "json_context": [],
                "go_name": ""
            })
        );
        assert!(concept.get("problems").is_none());
        assert_eq!(json["totals"]["concepts"], 1);
        assert_eq!(json["totals"]["problems"], 0);
    }
}
