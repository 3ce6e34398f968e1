// Crate-level tests that exercise several modules together

#[cfg(test)]
mod conversion_tests;
