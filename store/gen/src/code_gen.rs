/*++

Licensed under the Apache-2.0 license.

File Name:

    code_gen.rs

Abstract:

    File contains generation of trust anchor table module source.

--*/

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;

use crate::anchor::AnchorData;

pub struct CodeGen {}

impl CodeGen {
    /// Generates the table module and writes it to `{dir}/{module}.rs`.
    pub fn gen_code(
        module: &str,
        cert_file: &str,
        data: &AnchorData,
        dir: &Path,
    ) -> anyhow::Result<()> {
        let source = Self::render(module, cert_file, data);
        let path = dir.join(format!("{module}.rs"));
        std::fs::write(&path, source)
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    fn render(module: &str, cert_file: &str, data: &AnchorData) -> String {
        let mut out = String::new();

        let _ = write!(
            out,
            "/*++\n\n\
             Licensed under the Apache-2.0 license.\n\n\
             File Name:\n\n    {module}.rs\n\n\
             Abstract:\n\n\
             \x20   Trust anchor table for the {module} root certificate.\n\
             \x20   Regenerate with the winc-rootstore-gen tool.\n\n\
             --*/\n\n"
        );

        out.push_str(
            "use winc_rootstore_types::{\n    \
             static_assert, Certificate, PubKey, RsaPubKey, SystemTime, NAME_HASH_BYTE_SIZE,\n    \
             RSA2048_MODULUS_BYTE_SIZE, RSA_EXPONENT_F4,\n};\n\n",
        );

        let _ = write!(
            out,
            "// Validity window from `openssl x509 -in {cert_file} -inform der -text -noout`.\n\
             const VALID_FROM: SystemTime = {};\n\
             const VALID_UNTIL: SystemTime = {};\n\n",
            system_time_expr(&data.valid_from),
            system_time_expr(&data.valid_until),
        );

        out.push_str(
            "// Subject name hash as dumped from the device root certificate sector. There\n\
             // is no reproducible derivation for this value; treat it as a versioned data\n\
             // asset.\n\
             const NAME_HASH: [u8; NAME_HASH_BYTE_SIZE] = [\n",
        );
        hex_rows(&data.name_hash, &mut out);
        out.push_str("];\n\n");

        out.push_str(
            "// RSA-2048 modulus with the DER INTEGER's leading zero byte stripped.\n\
             const MODULUS: [u8; RSA2048_MODULUS_BYTE_SIZE] = [\n",
        );
        hex_rows(&data.modulus, &mut out);
        out.push_str("];\n\n");

        out.push_str(
            "static_assert!(MODULUS[0] != 0);\n\
             static_assert!(VALID_FROM.ordinal() < VALID_UNTIL.ordinal());\n\n\
             pub(crate) static CERTIFICATE: Certificate = Certificate {\n    \
             name_hash: NAME_HASH,\n    \
             valid_from: VALID_FROM,\n    \
             valid_until: VALID_UNTIL,\n    \
             pub_key: PubKey::Rsa(RsaPubKey {\n        \
             modulus: &MODULUS,\n        \
             exponent: &RSA_EXPONENT_F4,\n    \
             }),\n\
             };\n\n",
        );

        let _ = write!(
            out,
            "/// Returns the shared {module} root certificate record.\n\
             pub fn certificate() -> &'static Certificate {{\n    \
             &CERTIFICATE\n\
             }}\n"
        );

        out
    }
}

fn system_time_expr(time: &winc_rootstore_types::SystemTime) -> String {
    format!(
        "SystemTime::new({}, {}, {}, {}, {}, {})",
        time.year, time.month, time.day, time.hour, time.minute, time.second
    )
}

fn hex_rows(bytes: &[u8], out: &mut String) {
    for chunk in bytes.chunks(8) {
        let row: Vec<String> = chunk.iter().map(|byte| format!("0x{byte:02x}")).collect();
        out.push_str("    ");
        out.push_str(&row.join(", "));
        out.push_str(",\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winc_rootstore_types::{SystemTime, NAME_HASH_BYTE_SIZE, RSA2048_MODULUS_BYTE_SIZE};

    fn test_data() -> AnchorData {
        AnchorData {
            name_hash: [0x42; NAME_HASH_BYTE_SIZE],
            valid_from: SystemTime::new(2006, 12, 15, 0, 0, 0),
            valid_until: SystemTime::new(2021, 12, 15, 0, 0, 0),
            modulus: vec![0xa6; RSA2048_MODULUS_BYTE_SIZE],
        }
    }

    #[test]
    fn test_rendered_module_shape() {
        let source = CodeGen::render("testroot", "TestRoot.cer", &test_data());

        assert!(source.starts_with("/*++"));
        assert!(source.contains("File Name:\n\n    testroot.rs"));
        assert!(source.contains("openssl x509 -in TestRoot.cer"));
        assert!(source.contains("const VALID_FROM: SystemTime = SystemTime::new(2006, 12, 15, 0, 0, 0);"));
        assert!(source.contains("const VALID_UNTIL: SystemTime = SystemTime::new(2021, 12, 15, 0, 0, 0);"));
        assert!(source.contains("static_assert!(MODULUS[0] != 0);"));
        assert!(source.contains("pub(crate) static CERTIFICATE: Certificate"));
        assert!(source.contains("pub fn certificate() -> &'static Certificate {"));

        // 20-byte hash renders as two full rows and one 4-byte row.
        assert_eq!(source.matches("\n    0x42, 0x42, 0x42, 0x42,\n").count(), 1);
        assert_eq!(source.matches("0xa6, 0xa6, 0xa6, 0xa6, 0xa6, 0xa6, 0xa6, 0xa6,\n").count(), 32);
    }

    #[test]
    fn test_hex_rows_format() {
        let mut out = String::new();
        hex_rows(&[0x06, 0x53, 0xbd, 0x6d, 0xea, 0xb9, 0xd5, 0x8f, 0x45], &mut out);
        assert_eq!(
            out,
            "    0x06, 0x53, 0xbd, 0x6d, 0xea, 0xb9, 0xd5, 0x8f,\n    0x45,\n"
        );
    }
}
