use crate::{ArisanConfig, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;

fn build_template(config: &ArisanConfig) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&config.template_sheet)?;
    worksheet.write_string(0, 0, &config.name_column)?;

    for (i, name) in config.template_names.iter().enumerate() {
        worksheet.write_string(i as u32 + 1, 0, name)?;
    }
    worksheet.set_column_width(0, 24)?;

    Ok(workbook)
}

/// Blank roster workbook with a few example names
pub fn template_workbook(config: &ArisanConfig) -> Result<Vec<u8>> {
    Ok(build_template(config)?.save_to_buffer()?)
}

pub fn write_template(path: &Path, config: &ArisanConfig) -> Result<()> {
    build_template(config)?.save(path)?;
    tracing::info!("Wrote roster template to {}", path.display());
    Ok(())
}
