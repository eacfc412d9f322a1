//! Working-length derivation

/// Round the requested size up to the next power of two.
pub fn power_of_two(requested: usize) -> usize {
    requested.max(1).next_power_of_two()
}

/// Keep the requested size as the working length.
pub fn exact(requested: usize) -> usize {
    requested.max(1)
}
