//! Export helpers: CSV download and JSON payload building.
//!
//! CSV documents are handed to the browser as a Blob object URL
//! behind a synthetic anchor click.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Row types that can be exported as CSV.
pub trait CsvExportable {
    /// Column headers, in table order.
    fn headers() -> Vec<&'static str>;

    /// One CSV cell per header.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV text for a slice of rows.
pub fn build_csv<T: CsvExportable>(rows: &[T]) -> String {
    let mut csv = String::new();

    csv.push_str(&T::headers().join(","));
    csv.push('\n');

    for row in rows {
        let cells: Vec<String> = row
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    csv
}

/// Exports a slice of rows as a CSV file download.
pub fn export_csv<T: CsvExportable>(rows: &[T], filename: &str) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No data to export".to_string());
    }

    let blob = create_csv_blob(&build_csv(rows))?;
    download_blob(&blob, filename)
}

/// Serializes a collection to pretty-printed JSON for clipboard copy.
pub fn to_json_pretty<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialize error: {e}"))
}

/// Quotes a cell when it contains the separator, quotes, or newlines.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRow {
        name: String,
        value: f64,
    }

    impl CsvExportable for TestRow {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Value"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), format!("{:.2}", self.value)]
        }
    }

    #[test]
    fn test_build_csv() {
        let rows = vec![
            TestRow {
                name: "Electronics".to_string(),
                value: 2845000.0,
            },
            TestRow {
                name: "Home & Garden".to_string(),
                value: 945000.0,
            },
        ];
        let csv = build_csv(&rows);
        assert_eq!(
            csv,
            "Name,Value\nElectronics,2845000.00\nHome & Garden,945000.00\n"
        );
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json_pretty(&*contracts::fixtures::SUPPLIERS).unwrap();
        assert!(json.contains("Nordic Textiles"));
        assert!(json.contains("on_time_percent"));
    }
}
