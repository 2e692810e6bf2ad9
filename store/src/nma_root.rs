/*++

Licensed under the Apache-2.0 license.

File Name:

    nma_root.rs

Abstract:

    Trust anchor table for the NMA root certificate.
    Regenerate with the winc-rootstore-gen tool.

--*/

use winc_rootstore_types::{
    static_assert, Certificate, PubKey, RsaPubKey, SystemTime, NAME_HASH_BYTE_SIZE,
    RSA2048_MODULUS_BYTE_SIZE, RSA_EXPONENT_F4,
};

// Validity window from `openssl x509 -in NMA_Root.cer -inform der -text -noout`.
const VALID_FROM: SystemTime = SystemTime::new(2000, 5, 30, 10, 48, 38);
const VALID_UNTIL: SystemTime = SystemTime::new(2020, 5, 30, 10, 48, 38);

// Subject name hash as dumped from the device root certificate sector. There
// is no reproducible derivation for this value; treat it as a versioned data
// asset.
const NAME_HASH: [u8; NAME_HASH_BYTE_SIZE] = [
    0x42, 0xca, 0xcf, 0x1c, 0x28, 0x84, 0xda, 0xfb,
    0xc7, 0x7e, 0xac, 0x5d, 0x09, 0x75, 0x3d, 0x63,
    0x1e, 0xfa, 0xad, 0x7d,
];

// RSA-2048 modulus with the DER INTEGER's leading zero byte stripped.
const MODULUS: [u8; RSA2048_MODULUS_BYTE_SIZE] = [
    0xb7, 0xf7, 0x1a, 0x33, 0xe6, 0xf2, 0x00, 0x04,
    0x2d, 0x39, 0xe0, 0x4e, 0x5b, 0xed, 0x1f, 0xbc,
    0x6c, 0x0f, 0xcd, 0xb5, 0xfa, 0x23, 0xb6, 0xce,
    0xde, 0x9b, 0x11, 0x33, 0x97, 0xa4, 0x29, 0x4c,
    0x7d, 0x93, 0x9f, 0xbd, 0x4a, 0xbc, 0x93, 0xed,
    0x03, 0x1a, 0xe3, 0x8f, 0xcf, 0xe5, 0x6d, 0x50,
    0x5a, 0xd6, 0x97, 0x29, 0x94, 0x5a, 0x80, 0xb0,
    0x49, 0x7a, 0xdb, 0x2e, 0x95, 0xfd, 0xb8, 0xca,
    0xbf, 0x37, 0x38, 0x2d, 0x1e, 0x3e, 0x91, 0x41,
    0xad, 0x70, 0x56, 0xc7, 0xf0, 0x4f, 0x3f, 0xe8,
    0x32, 0x9e, 0x74, 0xca, 0xc8, 0x90, 0x54, 0xe9,
    0xc6, 0x5f, 0x0f, 0x78, 0x9d, 0x9a, 0x40, 0x3c,
    0x0e, 0xac, 0x61, 0xaa, 0x5e, 0x14, 0x8f, 0x9e,
    0x87, 0xa1, 0x6a, 0x50, 0xdc, 0xd7, 0x9a, 0x4e,
    0xaf, 0x05, 0xb3, 0xa6, 0x71, 0x94, 0x9c, 0x71,
    0xb3, 0x50, 0x60, 0x0a, 0xc7, 0x13, 0x9d, 0x38,
    0x07, 0x86, 0x02, 0xa8, 0xe9, 0xa8, 0x69, 0x26,
    0x18, 0x90, 0xab, 0x4c, 0xb0, 0x4f, 0x23, 0xab,
    0x3a, 0x4f, 0x84, 0xd8, 0xdf, 0xce, 0x9f, 0xe1,
    0x69, 0x6f, 0xbb, 0xd7, 0x42, 0xd7, 0x6b, 0x44,
    0xe4, 0xc7, 0xad, 0xee, 0x6d, 0x41, 0x5f, 0x72,
    0x5a, 0x71, 0x08, 0x37, 0xb3, 0x79, 0x65, 0xa4,
    0x59, 0xa0, 0x94, 0x37, 0xf7, 0x00, 0x2f, 0x0d,
    0xc2, 0x92, 0x72, 0xda, 0xd0, 0x38, 0x72, 0xdb,
    0x14, 0xa8, 0x45, 0xc4, 0x5d, 0x2a, 0x7d, 0xb7,
    0xb4, 0xd6, 0xc4, 0xee, 0xac, 0xcd, 0x13, 0x44,
    0xb7, 0xc9, 0x2b, 0xdd, 0x43, 0x00, 0x25, 0xfa,
    0x61, 0xb9, 0x69, 0x6a, 0x58, 0x23, 0x11, 0xb7,
    0xa7, 0x33, 0x8f, 0x56, 0x75, 0x59, 0xf5, 0xcd,
    0x29, 0xd7, 0x46, 0xb7, 0x0a, 0x2b, 0x65, 0xb6,
    0xd3, 0x42, 0x6f, 0x15, 0xb2, 0xb8, 0x7b, 0xfb,
    0xef, 0xe9, 0x5d, 0x53, 0xd5, 0x34, 0x5a, 0x27,
];

static_assert!(MODULUS[0] != 0);
static_assert!(VALID_FROM.ordinal() < VALID_UNTIL.ordinal());

pub(crate) static CERTIFICATE: Certificate = Certificate {
    name_hash: NAME_HASH,
    valid_from: VALID_FROM,
    valid_until: VALID_UNTIL,
    pub_key: PubKey::Rsa(RsaPubKey {
        modulus: &MODULUS,
        exponent: &RSA_EXPONENT_F4,
    }),
};

/// Returns the shared NMA root certificate record.
pub fn certificate() -> &'static Certificate {
    &CERTIFICATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        let cert = certificate();
        assert_eq!(cert.name_hash[0], 0x42);
        assert_eq!(cert.name_hash[NAME_HASH_BYTE_SIZE - 1], 0x7d);
        assert!(cert.valid_from < cert.valid_until);

        let key = cert.pub_key.rsa().unwrap();
        assert_eq!(key.key_size_bits(), 2048);
        assert_eq!(key.modulus[0], 0xb7);
        assert_eq!(key.modulus[RSA2048_MODULUS_BYTE_SIZE - 1], 0x27);
        assert_eq!(key.exponent, RSA_EXPONENT_F4);
    }
}
