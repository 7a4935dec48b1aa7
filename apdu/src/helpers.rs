// Copyright (c) 2022-2023 The MobileCoin Foundation

/// encdec helper module for length-prefixed fields
pub(crate) mod lv {
    use ledger_proto::ApduError;

    use crate::MAX_FIELD_LEN;

    pub fn enc(d: &[u8], buff: &mut [u8]) -> Result<usize, ApduError> {
        if d.len() > MAX_FIELD_LEN || buff.len() < d.len() + 1 {
            return Err(ApduError::InvalidLength);
        }

        buff[0] = d.len() as u8;
        buff[1..][..d.len()].copy_from_slice(d);

        Ok(1 + d.len())
    }

    pub fn enc_len(d: &[u8]) -> Result<usize, ApduError> {
        Ok(1 + d.len())
    }
}

/// encdec helper module for unprefixed fields
pub(crate) mod raw {
    use ledger_proto::ApduError;

    pub fn enc(d: &[u8], buff: &mut [u8]) -> Result<usize, ApduError> {
        if buff.len() < d.len() {
            return Err(ApduError::InvalidLength);
        }

        buff[..d.len()].copy_from_slice(d);

        Ok(d.len())
    }

    pub fn enc_len(d: &[u8]) -> Result<usize, ApduError> {
        Ok(d.len())
    }
}
