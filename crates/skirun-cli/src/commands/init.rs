use anyhow::Result;
use skirun_infrastructure::XmlSkiRunRepository;
use std::io::Write;
use std::path::Path;

pub fn run(data_file: &Path, out: &mut impl Write) -> Result<()> {
    if XmlSkiRunRepository::initialize(data_file)? {
        writeln!(out, "Created {}", data_file.display())?;
    } else {
        writeln!(out, "{} already exists, left unchanged", data_file.display())?;
    }
    Ok(())
}
