// Licensed under the Apache-2.0 license

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

use zeroize::Zeroize;

/// Size of a certificate subject name hash (SHA-1 digest) in bytes.
pub const NAME_HASH_BYTE_SIZE: usize = 20;

/// Size of an RSA-2048 modulus in bytes.
pub const RSA2048_MODULUS_BYTE_SIZE: usize = 256;

/// Minimal encoding of the public exponent 65537.
pub const RSA_EXPONENT_F4: [u8; 3] = [0x01, 0x00, 0x01];

#[macro_export]
macro_rules! static_assert {
    ($expression:expr) => {
        const _: () = assert!($expression);
    };
}

/// Calendar timestamp bounding a certificate validity window.
///
/// The derived ordering compares fields most-significant first, which is
/// chronological order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Zeroize)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Packs the fields into a single integer that orders chronologically.
    /// Usable in const context where the derived ordering is not.
    pub const fn ordinal(&self) -> u64 {
        (self.year as u64) << 40
            | (self.month as u64) << 32
            | (self.day as u64) << 24
            | (self.hour as u64) << 16
            | (self.minute as u64) << 8
            | (self.second as u64)
    }
}

/// RSA public key material. Sizes are carried by the slice lengths; the
/// modulus is stored without the leading zero byte a DER dump reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPubKey {
    pub modulus: &'static [u8],
    pub exponent: &'static [u8],
}

impl RsaPubKey {
    pub const fn key_size_bits(&self) -> usize {
        self.modulus.len() * 8
    }
}

/// Public key payload of a trust anchor. Tagged so that additional key types
/// can be added without breaking existing entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubKey {
    Rsa(RsaPubKey),
}

impl PubKey {
    pub const fn rsa(&self) -> Option<&RsaPubKey> {
        match self {
            PubKey::Rsa(key) => Some(key),
        }
    }
}

/// A root certificate record. Every registered anchor lives in a `static`
/// and is shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub name_hash: [u8; NAME_HASH_BYTE_SIZE],
    pub valid_from: SystemTime,
    pub valid_until: SystemTime,
    pub pub_key: PubKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_ordering() {
        let a = SystemTime::new(2000, 5, 30, 10, 48, 38);
        let b = SystemTime::new(2020, 5, 30, 10, 48, 38);
        let c = SystemTime::new(2000, 5, 30, 10, 48, 39);

        assert!(a < b);
        assert!(a < c);
        assert!(c < b);
        assert_eq!(a, SystemTime::new(2000, 5, 30, 10, 48, 38));
    }

    #[test]
    fn test_ordinal_agrees_with_derived_ordering() {
        let times = [
            SystemTime::new(1999, 12, 31, 23, 59, 59),
            SystemTime::new(2000, 1, 1, 0, 0, 0),
            SystemTime::new(2006, 12, 15, 0, 0, 0),
            SystemTime::new(2006, 12, 15, 0, 0, 1),
            SystemTime::new(2021, 12, 15, 0, 0, 0),
        ];
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].ordinal() < pair[1].ordinal());
        }
    }

    #[test]
    fn test_rsa_key_size_bits() {
        static MODULUS: [u8; RSA2048_MODULUS_BYTE_SIZE] = [0xa5; RSA2048_MODULUS_BYTE_SIZE];
        let key = RsaPubKey {
            modulus: &MODULUS,
            exponent: &RSA_EXPONENT_F4,
        };
        assert_eq!(key.key_size_bits(), 2048);
    }

    #[test]
    fn test_pub_key_rsa_accessor() {
        static MODULUS: [u8; 4] = [0x01, 0x02, 0x03, 0x04];
        let key = PubKey::Rsa(RsaPubKey {
            modulus: &MODULUS,
            exponent: &RSA_EXPONENT_F4,
        });
        let rsa = key.rsa().unwrap();
        assert_eq!(rsa.modulus, &MODULUS);
        assert_eq!(rsa.exponent, &RSA_EXPONENT_F4);
    }
}
