/*++

Licensed under the Apache-2.0 license.

File Name:

    anchor.rs

Abstract:

    File contains extraction of trust anchor data from a DER certificate.

--*/

use anyhow::{anyhow, bail, Context};
use winc_rootstore_types::{
    SystemTime, NAME_HASH_BYTE_SIZE, RSA2048_MODULUS_BYTE_SIZE, RSA_EXPONENT_F4,
};
use x509_parser::prelude::*;
use x509_parser::public_key::PublicKey;
use x509_parser::time::ASN1Time;

/// Trust anchor data destined for a generated table module.
pub struct AnchorData {
    pub name_hash: [u8; NAME_HASH_BYTE_SIZE],
    pub valid_from: SystemTime,
    pub valid_until: SystemTime,
    pub modulus: Vec<u8>,
}

impl AnchorData {
    /// Extracts the table data from a DER certificate. The name hash is an
    /// out-of-band input; it is paired with the certificate here, not
    /// derived from it.
    pub fn from_der(der: &[u8], name_hash: [u8; NAME_HASH_BYTE_SIZE]) -> anyhow::Result<Self> {
        let (_, cert) = X509Certificate::from_der(der)
            .map_err(|err| anyhow!("malformed DER certificate: {err}"))?;

        let valid_from = system_time(&cert.validity().not_before)?;
        let valid_until = system_time(&cert.validity().not_after)?;
        if valid_from >= valid_until {
            bail!("certificate validity window is empty");
        }

        let spki = cert.public_key();
        let parsed = spki
            .parsed()
            .map_err(|err| anyhow!("malformed subject public key: {err}"))?;
        let PublicKey::RSA(key) = parsed else {
            bail!("only RSA public keys are supported");
        };

        // openssl reports the modulus with a leading zero byte; the table
        // stores the bare 256-byte value.
        let modulus = strip_leading_zero(key.modulus);
        if modulus.len() != RSA2048_MODULUS_BYTE_SIZE {
            bail!(
                "unexpected modulus size: {} bytes, expected {}",
                modulus.len(),
                RSA2048_MODULUS_BYTE_SIZE
            );
        }

        let exponent = strip_leading_zero(key.exponent);
        if exponent != RSA_EXPONENT_F4 {
            bail!("unsupported public exponent: {}", hex::encode(exponent));
        }

        Ok(Self {
            name_hash,
            valid_from,
            valid_until,
            modulus: modulus.to_vec(),
        })
    }
}

/// Parses a 20-byte name hash from its hex form.
pub fn parse_name_hash(hash_hex: &str) -> anyhow::Result<[u8; NAME_HASH_BYTE_SIZE]> {
    let bytes = hex::decode(hash_hex).context("name hash is not valid hex")?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("name hash must be {} bytes", NAME_HASH_BYTE_SIZE))
}

fn system_time(time: &ASN1Time) -> anyhow::Result<SystemTime> {
    let dt = time.to_datetime();
    let year = u16::try_from(dt.year()).context("certificate year out of range")?;
    Ok(SystemTime::new(
        year,
        u8::from(dt.month()),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
    ))
}

fn strip_leading_zero(mut bytes: &[u8]) -> &[u8] {
    while let [0x00, rest @ ..] = bytes {
        bytes = rest;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use openssl::asn1::Asn1Time;
    use openssl::hash::MessageDigest;
    use openssl::pkey::PKey;
    use openssl::rsa::Rsa;
    use openssl::x509::{X509Name, X509};

    fn test_cert_der() -> Vec<u8> {
        let rsa = Rsa::generate(2048).unwrap();
        let pkey = PKey::from_rsa(rsa).unwrap();

        let mut name = X509Name::builder().unwrap();
        name.append_entry_by_text("CN", "Anchor Test Root").unwrap();
        let name = name.build();

        let mut builder = X509::builder().unwrap();
        builder.set_version(2).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder
            .set_not_before(&Asn1Time::from_str("20061215000000Z").unwrap())
            .unwrap();
        builder
            .set_not_after(&Asn1Time::from_str("20211215000000Z").unwrap())
            .unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();
        builder.build().to_der().unwrap()
    }

    #[test]
    fn test_extraction_from_der() {
        let der = test_cert_der();
        let data = AnchorData::from_der(&der, [0x11; NAME_HASH_BYTE_SIZE]).unwrap();

        assert_eq!(data.modulus.len(), RSA2048_MODULUS_BYTE_SIZE);
        assert_ne!(data.modulus[0], 0);
        assert_eq!(data.valid_from, SystemTime::new(2006, 12, 15, 0, 0, 0));
        assert_eq!(data.valid_until, SystemTime::new(2021, 12, 15, 0, 0, 0));
        assert_eq!(data.name_hash, [0x11; NAME_HASH_BYTE_SIZE]);
    }

    #[test]
    fn test_strip_leading_zero() {
        assert_eq!(strip_leading_zero(&[0x00, 0xa6, 0x00]), &[0xa6, 0x00][..]);
        assert_eq!(strip_leading_zero(&[0xa6, 0xcf]), &[0xa6, 0xcf][..]);
        assert!(strip_leading_zero(&[0x00, 0x00]).is_empty());
    }

    #[test]
    fn test_parse_name_hash() {
        let hash = parse_name_hash("0653bd6deab9d58f45d451ed03250f655f86593e").unwrap();
        assert_eq!(hash[0], 0x06);
        assert_eq!(hash[NAME_HASH_BYTE_SIZE - 1], 0x3e);

        assert!(parse_name_hash("0653").is_err());
        assert!(parse_name_hash("not hex").is_err());
    }
}
