use const_crypto::ed25519;
use solana_program::pubkey::Pubkey;

pub const CONFIG: &[u8]                    = b"config";
pub const MEMBER: &[u8]                    = b"member";

pub const NAME_LEN: usize                  = 32;  // Bytes, zero-padded UTF-8
pub const WORD_LEN: usize                  = 32;  // Bytes, little-endian 256-bit amount

// -- Const Addresses --
// (There isn't a better way to do this yet; maybe a build.rs + include)

pub const PROGRAM_ID: [u8; 32] =
    unsafe { *(&crate::id() as *const Pubkey as *const [u8; 32]) };

pub const CONFIG_ADDRESS: Pubkey =
    Pubkey::new_from_array(ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).0);

pub const CONFIG_BUMP: u8 =
    ed25519::derive_program_address(&[CONFIG], &PROGRAM_ID).1;
