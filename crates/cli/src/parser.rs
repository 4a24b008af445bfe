//! Semicolon-delimited catalog and load list parsers.

use std::fs;
use std::path::Path;
use thiserror::Error;
use u_pallet_core::{Catalog, ItemCatalog, ItemSpec, LoadManifest};

/// Number of columns in a catalog row.
const CATALOG_COLUMNS: usize = 8;

/// Errors that can occur when reading catalogs and load lists.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog format: {0}")]
    InvalidFormat(String),

    #[error("Line {line}: invalid {field} '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Invalid load '{0}', expected ID:QTY")]
    InvalidLoad(String),

    #[error(transparent)]
    Manifest(#[from] u_pallet_core::Error),
}

/// Parser for article catalogs.
///
/// The first line is a header; every following line holds
/// `id;name;L;B;H;weight;unit;color` with the color in hex.
#[derive(Debug, Default)]
pub struct CatalogParser;

impl CatalogParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a catalog from a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ItemCatalog, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a catalog from text.
    ///
    /// Rows whose column count differs from the header are skipped.
    pub fn parse_str(&self, text: &str) -> Result<ItemCatalog, ParseError> {
        let mut lines = text.trim().lines().enumerate();

        let (_, header) = lines
            .next()
            .ok_or_else(|| ParseError::InvalidFormat("missing header line".into()))?;
        let columns = header.split(';').count();
        if columns != CATALOG_COLUMNS {
            return Err(ParseError::InvalidFormat(format!(
                "expected {CATALOG_COLUMNS} header columns, found {columns}"
            )));
        }

        let mut catalog = ItemCatalog::new();
        for (idx, line) in lines {
            let values: Vec<&str> = line.split(';').map(str::trim).collect();
            if values.len() != columns {
                log::debug!("skipping catalog line {}: {} columns", idx + 1, values.len());
                continue;
            }
            catalog.insert(parse_row(idx + 1, &values)?);
        }

        log::info!("loaded {} catalog articles", catalog.len());
        Ok(catalog)
    }
}

fn parse_row(line: usize, values: &[&str]) -> Result<ItemSpec, ParseError> {
    let number = |idx: usize, field: &'static str| -> Result<f64, ParseError> {
        values[idx]
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidField {
                line,
                field,
                value: values[idx].to_string(),
            })
    };

    let color = parse_hex_color(values[7]).ok_or_else(|| ParseError::InvalidField {
        line,
        field: "color",
        value: values[7].to_string(),
    })?;

    Ok(
        ItemSpec::new(values[0], number(2, "length")?, number(3, "width")?, number(4, "height")?)
            .with_name(values[1])
            .with_weight(number(5, "weight")?)
            .with_unit(values[6])
            .with_color(color),
    )
}

/// Parses `ff8800`, `#ff8800` or `0xff8800`.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let digits = value
        .trim_start_matches('#')
        .trim_start_matches("0x")
        .trim_start_matches("0X");
    u32::from_str_radix(digits, 16).ok()
}

/// Parses a `ID:QTY` load argument.
pub fn parse_load_arg(arg: &str) -> Result<(String, usize), ParseError> {
    let (id, qty) = arg
        .rsplit_once(':')
        .ok_or_else(|| ParseError::InvalidLoad(arg.to_string()))?;
    let qty = qty
        .trim()
        .parse::<usize>()
        .map_err(|_| ParseError::InvalidLoad(arg.to_string()))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(ParseError::InvalidLoad(arg.to_string()));
    }
    Ok((id.to_string(), qty))
}

/// Parses a load list with one `ID;QTY` per line.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn parse_load_list(text: &str) -> Result<Vec<(String, usize)>, ParseError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| parse_load_arg(&line.replacen(';', ":", 1)))
        .collect()
}

/// Builds a manifest from loads, checking each against the catalog.
pub fn build_manifest<'a>(
    catalog: &impl Catalog,
    loads: impl IntoIterator<Item = &'a (String, usize)>,
) -> Result<LoadManifest, ParseError> {
    let mut manifest = LoadManifest::new();
    for (id, qty) in loads {
        manifest.add(catalog, id, *qty)?;
    }
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const CATALOG: &str = "\
Artikel-Nr;Name;L;B;H;Gewicht;Einheit;Farbe
PAL-EU;Europalette;120;80;14.4;25;Palette;c8a165
KT-10; Karton klein ;40;30;20;4.5;Stk;0x3366cc
broken;row;1;2
KT-20;Karton gross;60;40;40;11;Stk;#ff8800
";

    #[test]
    fn test_parse_catalog() {
        let catalog = CatalogParser::new().parse_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 3);
        let small = catalog.get("KT-10").unwrap();
        assert_eq!(small.name(), "Karton klein");
        assert_relative_eq!(small.weight(), 4.5);
        assert_eq!(small.color(), 0x3366cc);
        assert_eq!(small.unit(), "Stk");

        let base = catalog.get("PAL-EU").unwrap();
        assert!(base.is_pallet());
        assert_relative_eq!(base.height(), 14.4);
    }

    #[test]
    fn test_invalid_number() {
        let text = "a;b;c;d;e;f;g;h\nX;Name;40;abc;20;1;Stk;ffffff\n";
        let err = CatalogParser::new().parse_str(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidField { line: 2, field: "width", .. }
        ));
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            CatalogParser::new().parse_str("  \n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_load_arg() {
        assert_eq!(parse_load_arg("KT-10:4").unwrap(), ("KT-10".to_string(), 4));
        assert!(parse_load_arg("KT-10").is_err());
        assert!(parse_load_arg(":4").is_err());
        assert!(parse_load_arg("KT-10:-1").is_err());
    }

    #[test]
    fn test_parse_load_list() {
        let loads = parse_load_list("# order 17\nKT-10;4\n\nKT-20;1\n").unwrap();
        assert_eq!(
            loads,
            vec![("KT-10".to_string(), 4), ("KT-20".to_string(), 1)]
        );
    }

    #[test]
    fn test_build_manifest_rejects_pallet() {
        let catalog = CatalogParser::new().parse_str(CATALOG).unwrap();
        let loads = vec![("KT-10".to_string(), 2), ("PAL-EU".to_string(), 1)];
        assert!(matches!(
            build_manifest(&catalog, &loads),
            Err(ParseError::Manifest(_))
        ));

        let manifest = build_manifest(&catalog, &loads[..1]).unwrap();
        assert_eq!(manifest.total_quantity(), 2);
    }
}
