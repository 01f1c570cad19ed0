pub mod bcrypt_hasher;
