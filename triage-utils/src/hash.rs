/// Derives the `index`-th seed of a family rooted at `input`.
///
/// Used to give every trial of a run its own reproducible seed.
pub fn seed_from_str_and_index(input: &str, index: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(input.as_bytes());
    hasher.update(&index.to_le_bytes());
    hasher.finalize().into()
}
