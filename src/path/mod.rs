mod normalizer;

#[cfg(test)]
mod tests;

pub use normalizer::PathNormalizer;
