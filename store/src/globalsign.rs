/*++

Licensed under the Apache-2.0 license.

File Name:

    globalsign.rs

Abstract:

    Trust anchor table for the GlobalSign root certificate.
    Regenerate with the winc-rootstore-gen tool.

--*/

use winc_rootstore_types::{
    static_assert, Certificate, PubKey, RsaPubKey, SystemTime, NAME_HASH_BYTE_SIZE,
    RSA2048_MODULUS_BYTE_SIZE, RSA_EXPONENT_F4,
};

// Validity window from `openssl x509 -in GlobalSign.crt -inform der -text -noout`.
const VALID_FROM: SystemTime = SystemTime::new(2006, 12, 15, 0, 0, 0);
const VALID_UNTIL: SystemTime = SystemTime::new(2021, 12, 15, 0, 0, 0);

// Subject name hash as dumped from the device root certificate sector. There
// is no reproducible derivation for this value; treat it as a versioned data
// asset.
const NAME_HASH: [u8; NAME_HASH_BYTE_SIZE] = [
    0x06, 0x53, 0xbd, 0x6d, 0xea, 0xb9, 0xd5, 0x8f,
    0x45, 0xd4, 0x51, 0xed, 0x03, 0x25, 0x0f, 0x65,
    0x5f, 0x86, 0x59, 0x3e,
];

// RSA-2048 modulus with the DER INTEGER's leading zero byte stripped.
const MODULUS: [u8; RSA2048_MODULUS_BYTE_SIZE] = [
    0xa6, 0xcf, 0x24, 0x0e, 0xbe, 0x2e, 0x6f, 0x28,
    0x99, 0x45, 0x42, 0xc4, 0xab, 0x3e, 0x21, 0x54,
    0x9b, 0x0b, 0xd3, 0x7f, 0x84, 0x70, 0xfa, 0x12,
    0xb3, 0xcb, 0xbf, 0x87, 0x5f, 0xc6, 0x7f, 0x86,
    0xd3, 0xb2, 0x30, 0x5c, 0xd6, 0xfd, 0xad, 0xf1,
    0x7b, 0xdc, 0xe5, 0xf8, 0x60, 0x96, 0x09, 0x92,
    0x10, 0xf5, 0xd0, 0x53, 0xde, 0xfb, 0x7b, 0x7e,
    0x73, 0x88, 0xac, 0x52, 0x88, 0x7b, 0x4a, 0xa6,
    0xca, 0x49, 0xa6, 0x5e, 0xa8, 0xa7, 0x8c, 0x5a,
    0x11, 0xbc, 0x7a, 0x82, 0xeb, 0xbe, 0x8c, 0xe9,
    0xb3, 0xac, 0x96, 0x25, 0x07, 0x97, 0x4a, 0x99,
    0x2a, 0x07, 0x2f, 0xb4, 0x1e, 0x77, 0xbf, 0x8a,
    0x0f, 0xb5, 0x02, 0x7c, 0x1b, 0x96, 0xb8, 0xc5,
    0xb9, 0x3a, 0x2c, 0xbc, 0xd6, 0x12, 0xb9, 0xeb,
    0x59, 0x7d, 0xe2, 0xd0, 0x06, 0x86, 0x5f, 0x5e,
    0x49, 0x6a, 0xb5, 0x39, 0x5e, 0x88, 0x34, 0xec,
    0xbc, 0x78, 0x0c, 0x08, 0x98, 0x84, 0x6c, 0xa8,
    0xcd, 0x4b, 0xb4, 0xa0, 0x7d, 0x0c, 0x79, 0x4d,
    0xf0, 0xb8, 0x2d, 0xcb, 0x21, 0xca, 0xd5, 0x6c,
    0x5b, 0x7d, 0xe1, 0xa0, 0x29, 0x84, 0xa1, 0xf9,
    0xd3, 0x94, 0x49, 0xcb, 0x24, 0x62, 0x91, 0x20,
    0xbc, 0xdd, 0x0b, 0xd5, 0xd9, 0xcc, 0xf9, 0xea,
    0x27, 0x0a, 0x2b, 0x73, 0x91, 0xc6, 0x9d, 0x1b,
    0xac, 0xc8, 0xcb, 0xe8, 0xe0, 0xa0, 0xf4, 0x2f,
    0x90, 0x8b, 0x4d, 0xfb, 0xb0, 0x36, 0x1b, 0xf6,
    0x19, 0x7a, 0x85, 0xe0, 0x6d, 0xf2, 0x61, 0x13,
    0x88, 0x5c, 0x9f, 0xe0, 0x93, 0x0a, 0x51, 0x97,
    0x8a, 0x5a, 0xce, 0xaf, 0xab, 0xd5, 0xf7, 0xaa,
    0x09, 0xaa, 0x60, 0xbd, 0xdc, 0xd9, 0x5f, 0xdf,
    0x72, 0xa9, 0x60, 0x13, 0x5e, 0x00, 0x01, 0xc9,
    0x4a, 0xfa, 0x3f, 0xa4, 0xea, 0x07, 0x03, 0x21,
    0x02, 0x8e, 0x82, 0xca, 0x03, 0xc2, 0x9b, 0x8f,
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

/// Returns the shared GlobalSign root certificate record.
pub fn certificate() -> &'static Certificate {
    &CERTIFICATE
}
