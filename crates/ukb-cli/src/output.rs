//! Rendering of lookup results.

use std::io::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use ukb_fetch::WrittenSchema;
use ukb_model::FieldRecord;
use ukb_schema::EncodingValues;

/// Delimiter of the machine-readable field output.
pub const FIELD_DELIMITER: u8 = b';';

/// Columns of the machine-readable output; the description is left out.
const DELIMITED_COLUMNS: usize = 5;

/// All six record columns as a table.
pub fn field_table(records: &[FieldRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(FieldRecord::HEADER.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for record in records {
        let [field_id, title, dtype, categories, encoding_id, description] = record.values();
        table.add_row(vec![
            Cell::new(field_id),
            Cell::new(title),
            dtype_cell(record, dtype),
            Cell::new(categories),
            Cell::new(encoding_id),
            Cell::new(description),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table
}

/// Write records as `;`-separated text with a header row and without the
/// description column.
pub fn write_delimited<W: Write>(records: &[FieldRecord], writer: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .from_writer(writer);
    writer.write_record(&FieldRecord::HEADER[..DELIMITED_COLUMNS])?;
    for record in records {
        writer.write_record(&record.values()[..DELIMITED_COLUMNS])?;
    }
    writer.flush()?;
    Ok(())
}

/// Values of one encoding, numbered in file order.
pub fn values_table(found: &EncodingValues) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell(&format!(
            "encoding {} ({})",
            found.encoding_id, found.table
        )),
    ]);
    apply_table_style(&mut table);
    for (index, value) in found.values.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(value)]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    table
}

/// Summary of a fetch run.
pub fn fetch_table(written: &[WrittenSchema]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Schema"),
        header_cell("Description"),
        header_cell("Bytes"),
        header_cell("Dated copy"),
    ]);
    apply_table_style(&mut table);
    for schema in written {
        table.add_row(vec![
            Cell::new(schema.schema_id)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&schema.description),
            Cell::new(schema.bytes),
            dim_cell(schema.dated.display()),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dtype_cell(record: &FieldRecord, dtype: String) -> Cell {
    if record.dtype.is_categorical() {
        Cell::new(dtype).fg(Color::Yellow)
    } else {
        Cell::new(dtype)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ukb_model::ValueType;

    #[test]
    fn quotes_titles_containing_the_delimiter() {
        let record = FieldRecord {
            field_id: 1,
            title: "Systolic; automated".to_string(),
            dtype: ValueType::Float,
            categories: 0,
            encoding_id: 0,
            description: String::new(),
        };
        let mut out = Vec::new();
        write_delimited(&[record], &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1), Some("1;\"Systolic; automated\";FLOAT;0;0"));
    }
}
