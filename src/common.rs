/// 512-bit seed for a generator.
///
/// Carries the sixteen 32-bit words of a full [`Well512a`](crate::Well512a)
/// state as little-endian bytes. The wrapper is necessary because some traits
/// required for a seed are not implemented on 64-byte arrays.
#[derive(Clone)]
pub struct Seed512(pub [u8; 64]);

impl core::fmt::Debug for Seed512 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        self.0[..].fmt(f)
    }
}

impl Default for Seed512 {
    fn default() -> Seed512 {
        Seed512([0; 64])
    }
}

impl AsMut<[u8]> for Seed512 {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl AsRef<[u8]> for Seed512 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
