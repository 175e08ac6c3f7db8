//! Hash helpers para el uid de rutas.

use blake3::Hasher;

/// Hashea un string y devuelve los primeros 128 bits en hex, con el
/// prefijo de variante por delante.
pub fn hash_with_prefix(prefix: &str, input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    let hex = h.finalize().to_hex();
    format!("{}{}", prefix, &hex[..32])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic_and_prefixed() {
        let a = hash_with_prefix("BP", "node>child");
        let b = hash_with_prefix("BP", "node>child");
        assert_eq!(a, b);
        assert!(a.starts_with("BP"));
        assert_eq!(a.len(), 2 + 32);
    }

    #[test]
    fn different_inputs_differ() {
        assert_ne!(hash_with_prefix("BP", "a"), hash_with_prefix("BP", "b"));
        assert_ne!(hash_with_prefix("BP", "a"), hash_with_prefix("MPR", "a"));
    }
}
