// src/contacts/random.rs

//! Random contact generation for the quick-actions panel.
//!
//! Names carry a fixed prefix plus a random numeric suffix; collisions are
//! possible and not deduplicated. Phones are 10 random digits with no
//! formatting or uniqueness guarantee.

use rand::Rng;

pub fn random_name() -> String {
    let suffix = rand::rng().random_range(1000..=99999);
    format!("User_{}", suffix)
}

pub fn random_phone() -> String {
    let mut rng = rand::rng();
    (0..10)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
