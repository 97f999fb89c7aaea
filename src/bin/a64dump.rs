use clap::Parser;
use clap_num::maybe_hex;
use log::{error, warn};

use a64dec::driver::{decode_stream, DecodeFlags};
use a64dec::elf_utils::read_text_section;

/// Decode the .text section of an AArch64 ELF file, one instruction per line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
struct Args {
    /// Path to input ELF file
    input: String,

    /// Load address to use instead of the section's own sh_addr
    /// (use 0x prefix for hexadecimal)
    #[arg(short, long, value_parser=maybe_hex::<u64>)]
    base: Option<u64>,

    /// Keep decoding past undefined or unimplemented encodings,
    /// printing `invalid` in their place instead of stopping
    #[arg(short, long)]
    continue_on_error: bool,

    /// Print recognised-but-uncovered encoding families as `unimplemented`
    /// instead of treating them as errors
    #[arg(short, long)]
    allow_unimplemented: bool,

    /// Skip alias canonicalization
    #[arg(short, long)]
    no_remap: bool,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let (text, sh_addr) = match read_text_section(&args.input) {
        Ok(result) => result,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let virtual_address = args.base.unwrap_or(sh_addr);

    let flags = DecodeFlags {
        remap_aliases: !args.no_remap,
        continue_on_error: args.continue_on_error,
        throw_on_unimplemented: !args.allow_unimplemented,
    };

    for result in decode_stream(&text, virtual_address, flags) {
        match result {
            Ok(instr) => println!("{:#010x}: {instr}", instr.address),
            Err(e) => {
                warn!("{e}");
                break;
            }
        }
    }
}
