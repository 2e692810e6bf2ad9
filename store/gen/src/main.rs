/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    Binary that generates trust anchor table modules for the WINC root
    certificate store. Outputs directly to store/src/.

    The subject name hash cannot be derived from the certificate; it must be
    supplied from a device root certificate dump.

    Usage: cargo run -p winc-rootstore-gen -- \
               --module globalsign \
               --cert GlobalSign.crt \
               --name-hash 0653bd6deab9d58f45d451ed03250f655f86593e

--*/

mod anchor;
mod code_gen;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{arg, value_parser, ArgMatches, Command};

use anchor::AnchorData;
use code_gen::CodeGen;

fn main() {
    let matches = Command::new("winc-rootstore-gen")
        .about("Generate a trust anchor table module from a DER root certificate")
        .arg(
            arg!(--"module" <NAME> "Name of the table module to generate")
                .required(true)
                .value_parser(value_parser!(String)),
        )
        .arg(
            arg!(--"cert" <FILE> "Root certificate in DER form")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"name-hash" <HEX> "20-byte subject name hash from a device dump")
                .required(true)
                .value_parser(value_parser!(String)),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(args: &ArgMatches) -> anyhow::Result<()> {
    let module: &String = args.get_one("module").unwrap();
    let cert_path: &PathBuf = args.get_one("cert").unwrap();
    let name_hash_hex: &String = args.get_one("name-hash").unwrap();

    let der = std::fs::read(cert_path)
        .with_context(|| format!("failed to read {}", cert_path.display()))?;
    let name_hash = anchor::parse_name_hash(name_hash_hex)?;
    let data = AnchorData::from_der(&der, name_hash)?;

    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set; run via cargo");
    let src_dir = Path::new(&manifest_dir).parent().unwrap().join("src");

    let cert_file = cert_path
        .file_name()
        .context("certificate path has no file name")?
        .to_string_lossy();
    CodeGen::gen_code(module, &cert_file, &data, &src_dir)?;

    eprintln!("Table module generated in {}/", src_dir.display());
    Ok(())
}
