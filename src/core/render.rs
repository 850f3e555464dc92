use crate::domain::model::Item;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// One `name, price` line per item
    #[default]
    Text,
    /// `name,price` header followed by one row per item, prices as in `Text`
    Csv,
    /// Pretty-printed JSON array
    Json,
}

pub fn render<W: Write>(items: &[Item], format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for item in items {
                writeln!(writer, "{}", item)?;
            }
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(&mut *writer);
            csv_writer.write_record(["name", "price"])?;
            for item in items {
                let price = format!("{:.2}", item.price);
                csv_writer.write_record([item.name.as_str(), price.as_str()])?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, items)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;
    Ok(())
}
