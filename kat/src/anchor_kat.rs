/*++

Licensed under the Apache-2.0 license.

File Name:

    anchor_kat.rs

Abstract:

    File contains the data integrity checks for the trust anchor tables.

--*/

use winc_rootstore::printer::HexBytes;
use winc_rootstore::{
    cprintln, rootstore_err_def, Certificate, PubKey, RootstoreResult, ROOT_CERTS,
    RSA2048_MODULUS_BYTE_SIZE, RSA_EXPONENT_F4,
};

rootstore_err_def! {
    AnchorKat,
    AnchorKatErr
    {
        ModulusLenFailure = 0x01,
        ModulusLeadingZeroFailure = 0x02,
        ExponentMismatch = 0x03,
        ValidityWindowFailure = 0x04,
        DuplicateNameHash = 0x05,
    }
}

#[derive(Default, Debug)]
pub struct AnchorKat {}

impl AnchorKat {
    /// This function executes the data integrity checks for every registered
    /// trust anchor, rejecting malformed constant tables at startup.
    ///
    /// # Returns
    ///
    /// * `RootstoreResult` - Result denoting the check outcome.
    pub fn execute(&self) -> RootstoreResult<()> {
        cprintln!("[anchor-kat] ++");

        for cert in ROOT_CERTS.iter() {
            cprintln!("[anchor-kat] anchor {}", HexBytes(&cert.name_hash));
            self.check_pub_key(cert)?;
            self.check_validity_window(cert)?;
        }
        self.check_unique_name_hashes(&ROOT_CERTS)?;

        cprintln!("[anchor-kat] --");
        Ok(())
    }

    fn check_pub_key(&self, cert: &Certificate) -> RootstoreResult<()> {
        match cert.pub_key {
            PubKey::Rsa(key) => {
                if key.modulus.len() != RSA2048_MODULUS_BYTE_SIZE {
                    raise_err!(ModulusLenFailure);
                }
                if key.modulus[0] == 0 {
                    raise_err!(ModulusLeadingZeroFailure);
                }
                if key.exponent != RSA_EXPONENT_F4 {
                    raise_err!(ExponentMismatch);
                }
            }
        }
        Ok(())
    }

    fn check_validity_window(&self, cert: &Certificate) -> RootstoreResult<()> {
        if cert.valid_from >= cert.valid_until {
            raise_err!(ValidityWindowFailure);
        }
        Ok(())
    }

    fn check_unique_name_hashes(&self, certs: &[&Certificate]) -> RootstoreResult<()> {
        for (idx, cert) in certs.iter().enumerate() {
            for other in certs.iter().skip(idx + 1) {
                if cert.name_hash == other.name_hash {
                    raise_err!(DuplicateNameHash);
                }
            }
        }
        Ok(())
    }
}
