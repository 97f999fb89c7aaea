//! ELF `.text` section reading for the CLI driver.

use elf::endian::AnyEndian;
use elf::ElfBytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElfReadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse ELF file: {0}")]
    Parse(String),
    #[error("file has no .text section")]
    MissingText,
    #[error(".text section is compressed, which is not supported")]
    CompressedText,
}

/// Read the `.text` section of an ELF file as raw bytes, along with its
/// load address (`sh_addr`), suitable for feeding straight to
/// [`crate::driver::decode_all`].
pub fn read_text_section(path: &str) -> Result<(Vec<u8>, u64), ElfReadError> {
    let file_data = std::fs::read(path).map_err(|source| ElfReadError::Io {
        path: path.to_string(),
        source,
    })?;

    let file = ElfBytes::<AnyEndian>::minimal_parse(&file_data)
        .map_err(|e| ElfReadError::Parse(e.to_string()))?;

    let text_shdr = file
        .section_header_by_name(".text")
        .map_err(|e| ElfReadError::Parse(e.to_string()))?
        .ok_or(ElfReadError::MissingText)?;

    let (data, compression) = file
        .section_data(&text_shdr)
        .map_err(|e| ElfReadError::Parse(e.to_string()))?;
    if compression.is_some() {
        return Err(ElfReadError::CompressedText);
    }

    Ok((data.to_vec(), text_shdr.sh_addr))
}
