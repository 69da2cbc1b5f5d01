pub mod hs256_codec;
