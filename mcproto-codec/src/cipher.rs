//! The cipher socket adapter (`spec.md` §4.7): AES-128-CFB8, keyed and IV'd
//! by the same 16-byte shared secret, wrapping a synchronous byte stream.
//! Block size is always 1 byte for CFB-8, so every transformation below is
//! safe to apply one byte at a time with no internal buffering.
use std::io::{self, Read, Write};

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, BlockSizeUser, KeyIvInit, generic_array::GenericArray};

/// An AES-128 CFB-8 encryptor.
pub type Aes128Cfb8Enc = cfb8::Encryptor<aes::Aes128>;
/// An AES-128 CFB-8 decryptor.
pub type Aes128Cfb8Dec = cfb8::Decryptor<aes::Aes128>;

/// Builds the encrypt/decrypt cipher pair for one session from the shared
/// secret negotiated during login encryption. Per `spec.md` §4.7 the same
/// 16 bytes serve as both the AES key and the CFB-8 IV.
///
/// # Panics
/// Never in practice: the shared secret is always exactly 16 bytes for the
/// `13w42a`-era key exchange this crate implements.
#[must_use]
pub fn ciphers_from_shared_secret(shared_secret: &[u8; 16]) -> (Aes128Cfb8Enc, Aes128Cfb8Dec) {
    let enc = Aes128Cfb8Enc::new_from_slices(shared_secret, shared_secret).expect("16-byte key and IV");
    let dec = Aes128Cfb8Dec::new_from_slices(shared_secret, shared_secret).expect("16-byte key and IV");
    (enc, dec)
}

/// A reader that decrypts every byte pulled from the inner stream in place.
pub struct CipherReader<R> {
    inner: R,
    cipher: Aes128Cfb8Dec,
}

impl<R: Read> CipherReader<R> {
    /// Wraps `inner`, decrypting bytes as they're read.
    pub fn new(inner: R, cipher: Aes128Cfb8Dec) -> Self {
        debug_assert_eq!(Aes128Cfb8Dec::block_size(), 1);
        Self { inner, cipher }
    }

    /// Unwraps back to the inner stream, discarding cipher state.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for CipherReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        for block in buf[..n].chunks_mut(Aes128Cfb8Dec::block_size()) {
            self.cipher.decrypt_block_mut(block.into());
        }
        Ok(n)
    }
}

/// A writer that encrypts every byte before passing it to the inner stream.
pub struct CipherWriter<W> {
    inner: W,
    cipher: Aes128Cfb8Enc,
}

impl<W: Write> CipherWriter<W> {
    /// Wraps `inner`, encrypting bytes before they're written.
    pub fn new(inner: W, cipher: Aes128Cfb8Enc) -> Self {
        debug_assert_eq!(Aes128Cfb8Enc::block_size(), 1);
        Self { inner, cipher }
    }

    /// Unwraps back to the inner stream, discarding cipher state.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CipherWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Encrypt into a scratch buffer first and hand the whole thing to the
        // inner stream in one `write_all`. Advancing the CFB-8 feedback state
        // one byte at a time and writing each byte separately (the original
        // approach) desyncs encryptor and stream the moment `self.inner.write`
        // accepts fewer bytes than were already encrypted: the cipher has
        // moved on past a byte the peer never received.
        let mut encrypted = vec![0u8; buf.len()];
        for (plain, out) in buf.chunks(Aes128Cfb8Enc::block_size()).zip(encrypted.chunks_mut(Aes128Cfb8Enc::block_size())) {
            let out_block = GenericArray::from_mut_slice(out);
            self.cipher.encrypt_block_b2b_mut(plain.into(), out_block);
        }
        self.inner.write_all(&encrypted)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encrypting_then_decrypting_round_trips() {
        let secret = [7u8; 16];
        let (enc, dec) = ciphers_from_shared_secret(&secret);

        let plaintext = b"to the editor of the New York times".to_vec();
        let mut encrypted = Vec::new();
        {
            let mut writer = CipherWriter::new(&mut encrypted, enc);
            writer.write_all(&plaintext).unwrap();
        }
        assert_ne!(encrypted, plaintext);

        let mut reader = CipherReader::new(encrypted.as_slice(), dec);
        let mut decrypted = Vec::new();
        reader.read_to_end(&mut decrypted).unwrap();
        assert_eq!(decrypted, plaintext);
    }
}
